//
// Copyright (c) 2023 ZettaScale Technology
//
// This program and the accompanying materials are made available under the
// terms of the Eclipse Public License 2.0 which is available at
// http://www.eclipse.org/legal/epl-2.0, or the Apache License, Version 2.0
// which is available at https://www.apache.org/licenses/LICENSE-2.0.
//
// SPDX-License-Identifier: EPL-2.0 OR Apache-2.0
//
// Contributors:
//   Pierre Avital, <pierre.avital@me.com>
//

use serde::{Deserialize, Serialize};
use serde_json::json;
use sumkit::{sumtype, Option, Result, Union2, UnitResult};

#[sumtype(Result<u32, String>)]
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
struct Reply;

#[sumtype(Union<u32, String>)]
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
struct Key;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Profile {
    name: String,
    nickname: Option<String>,
    last_login: Result<u64, String>,
}

#[test]
fn nested_containers() {
    let profile = Profile {
        name: "ada".into(),
        nickname: Option::None(),
        last_login: Result::Ok(1700000000),
    };
    let encoded = serde_json::to_value(&profile).unwrap();
    assert_eq!(
        encoded,
        json!({
            "name": "ada",
            "nickname": {"HasValue": false},
            "last_login": {"IsOk": true, "Ok": 1700000000u64},
        })
    );
    assert_eq!(serde_json::from_value::<Profile>(encoded).unwrap(), profile);
}

#[test]
fn field_names_are_case_sensitive() {
    assert!(serde_json::from_str::<Option<u8>>(r#"{"hasValue": true, "value": 1}"#).is_err());
    assert!(serde_json::from_str::<Result<u8, u8>>(r#"{"isOk": true, "ok": 1}"#).is_err());
}

#[test]
fn unit_results_encode_success_as_null() {
    let saved: UnitResult<String> = UnitResult::Success();
    let encoded = serde_json::to_string(&saved).unwrap();
    assert_eq!(encoded, r#"{"IsOk":true,"Ok":null}"#);
    assert_eq!(serde_json::from_str::<UnitResult<String>>(&encoded).unwrap(), saved);
}

#[test]
fn unions_carry_their_index() {
    let key: Union2<u32, String> = Union2::Second("id".into());
    assert_eq!(
        serde_json::to_value(&key).unwrap(),
        json!({"Index": 1, "Value": "id"})
    );
    let same_types: Union2<u8, u8> = serde_json::from_str(r#"{"Index": 1, "Value": 3}"#).unwrap();
    assert_eq!(same_types, Union2::Second(3));
    let error = serde_json::from_str::<Union2<u8, u8>>(r#"{"Index": 2, "Value": 3}"#).unwrap_err();
    assert!(error.to_string().contains("an index below 2"));
}

#[test]
fn named_types_encode_as_their_base() {
    assert_eq!(
        serde_json::to_value(Reply::Err("timeout".into())).unwrap(),
        json!({"IsOk": false, "Err": "timeout"})
    );
    let key: Key = serde_json::from_value(json!({"Index": 0, "Value": 9})).unwrap();
    assert_eq!(key, Key::First(9));
}

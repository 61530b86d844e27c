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

//! The JSON-shaped encodings:
//! - `Option`: `{"HasValue": true, "Value": ...}` or `{"HasValue": false}`
//! - `Result`: `{"IsOk": true, "Ok": ...}` or `{"IsOk": false, "Err": ...}`
//! - `UnionN`: `{"Index": n, "Value": ...}`, with `Index` first (see `union.rs`)

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::{Option, Result};

/// Distinguishes a present `null` from an absent field.
fn present<'de, D: Deserializer<'de>, T: Deserialize<'de>>(
    deserializer: D,
) -> core::result::Result<core::option::Option<T>, D::Error> {
    T::deserialize(deserializer).map(Some)
}

impl<T: Serialize> Serialize for Option<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        match self.as_ref() {
            Some(value) => {
                let mut state = serializer.serialize_struct("Option", 2)?;
                state.serialize_field("HasValue", &true)?;
                state.serialize_field("Value", value)?;
                state.end()
            }
            None => {
                let mut state = serializer.serialize_struct("Option", 1)?;
                state.serialize_field("HasValue", &false)?;
                state.end()
            }
        }
    }
}

#[derive(serde::Deserialize)]
#[serde(rename = "Option", bound(deserialize = "T: Deserialize<'de>"))]
struct OptionRepr<T> {
    #[serde(rename = "HasValue")]
    has_value: bool,
    #[serde(rename = "Value", default, deserialize_with = "present")]
    value: core::option::Option<T>,
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Option<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let OptionRepr { has_value, value } = OptionRepr::deserialize(deserializer)?;
        match (has_value, value) {
            (true, Some(value)) => Ok(Option::Some(value)),
            (true, None) => {
                tracing::debug!("rejected an Option flagged HasValue without a Value");
                Err(de::Error::missing_field("Value"))
            }
            (false, _) => Ok(Option::None()),
        }
    }
}

impl<Ok: Serialize, Err: Serialize> Serialize for Result<Ok, Err> {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Result", 2)?;
        match self.as_ref() {
            Ok(value) => {
                state.serialize_field("IsOk", &true)?;
                state.serialize_field("Ok", value)?;
            }
            Err(error) => {
                state.serialize_field("IsOk", &false)?;
                state.serialize_field("Err", error)?;
            }
        }
        state.end()
    }
}

#[derive(serde::Deserialize)]
#[serde(
    rename = "Result",
    bound(deserialize = "T: Deserialize<'de>, E: Deserialize<'de>")
)]
struct ResultRepr<T, E> {
    #[serde(rename = "IsOk")]
    is_ok: bool,
    #[serde(rename = "Ok", default, deserialize_with = "present")]
    ok: core::option::Option<T>,
    #[serde(rename = "Err", default, deserialize_with = "present")]
    err: core::option::Option<E>,
}

impl<'de, Ok: Deserialize<'de>, Err: Deserialize<'de>> Deserialize<'de> for Result<Ok, Err> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let ResultRepr { is_ok, ok, err } = ResultRepr::deserialize(deserializer)?;
        match (is_ok, ok, err) {
            (true, Some(value), _) => Ok(Result::Ok(value)),
            (false, _, Some(error)) => Ok(Result::Err(error)),
            (true, None, _) => {
                tracing::debug!("rejected a Result flagged IsOk without an Ok");
                Err(de::Error::missing_field("Ok"))
            }
            (false, _, None) => {
                tracing::debug!("rejected a Result flagged !IsOk without an Err");
                Err(de::Error::missing_field("Err"))
            }
        }
    }
}

#[derive(serde::Deserialize)]
#[serde(field_identifier)]
pub(crate) enum UnionField {
    Index,
    Value,
    #[serde(other)]
    Other,
}

pub(crate) fn index_out_of_range<E: de::Error>(index: usize, arity: usize) -> E {
    tracing::debug!(index, arity, "rejected a union index outside its member list");
    let expected = format!("an index below {arity}");
    E::invalid_value(de::Unexpected::Unsigned(index as u64), &expected.as_str())
}

#[cfg(test)]
mod tests {
    use crate::{Option, Result, Union3, Unit};
    use serde_json::json;

    #[test]
    fn option_shape() {
        assert_eq!(
            serde_json::to_value(Option::Some(3)).unwrap(),
            json!({"HasValue": true, "Value": 3})
        );
        assert_eq!(
            serde_json::to_value(Option::<u8>::None()).unwrap(),
            json!({"HasValue": false})
        );
    }

    #[test]
    fn option_decoding() {
        let decoded: Option<String> =
            serde_json::from_str(r#"{"Value": "late", "HasValue": true}"#).unwrap();
        assert_eq!(decoded, Option::Some("late".to_owned()));
        assert!(serde_json::from_str::<Option<u8>>(r#"{"HasValue": true, "Value": null}"#).is_err());
        let nested: Option<core::option::Option<u8>> =
            serde_json::from_str(r#"{"HasValue": true, "Value": null}"#).unwrap();
        assert!(nested.is_some());
        assert_eq!(nested.into_std(), Some(None));
        assert!(serde_json::from_str::<Option<u8>>(r#"{"Value": 1}"#).is_err());
        assert!(serde_json::from_str::<Option<u8>>(r#"{"HasValue": "yes"}"#).is_err());
        assert!(serde_json::from_str::<Option<u8>>(r#"{"HasValue": true}"#).is_err());
    }

    #[test]
    fn result_shape() {
        assert_eq!(
            serde_json::to_value(Result::<u8, String>::Ok(1)).unwrap(),
            json!({"IsOk": true, "Ok": 1})
        );
        assert_eq!(
            serde_json::to_value(Result::<u8, String>::Err("no".into())).unwrap(),
            json!({"IsOk": false, "Err": "no"})
        );
        assert_eq!(
            serde_json::to_value(Result::<Unit, u8>::Success()).unwrap(),
            json!({"IsOk": true, "Ok": null})
        );
    }

    #[test]
    fn result_decoding() {
        let decoded: Result<u8, String> = serde_json::from_str(r#"{"IsOk": false, "Err": "no"}"#).unwrap();
        assert_eq!(decoded, Result::Err("no".to_owned()));
        assert!(serde_json::from_str::<Result<u8, String>>(r#"{"IsOk": true, "Err": "no"}"#).is_err());
        assert!(serde_json::from_str::<Result<u8, String>>(r#"{"IsOk": false}"#).is_err());
        assert!(serde_json::from_str::<Result<u8, String>>(r#"{"Ok": 1}"#).is_err());
        assert!(serde_json::from_str::<Result<u8, String>>(r#"{"IsOk": true, "Ok": "one"}"#).is_err());
    }

    #[test]
    fn union_shape() {
        let u: Union3<u8, String, bool> = Union3::Second("two".into());
        let encoded = serde_json::to_value(&u).unwrap();
        assert_eq!(encoded, json!({"Index": 1, "Value": "two"}));
        assert_eq!(serde_json::from_value::<Union3<u8, String, bool>>(encoded).unwrap(), u);
        assert!(serde_json::from_str::<Union3<u8, String, bool>>(r#"{"Index": 3, "Value": 1}"#).is_err());
        assert!(serde_json::from_str::<Union3<u8, String, bool>>(r#"{"Value": 1, "Index": 0}"#).is_err());
        assert!(serde_json::from_str::<Union3<u8, String, bool>>(r#"{"Index": 0}"#).is_err());
        assert!(serde_json::from_str::<Union3<u8, String, bool>>(r#"{"Index": 2, "Value": 1}"#).is_err());
    }
}

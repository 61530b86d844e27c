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

use std::future::ready;

use sumkit::{prelude::*, Option, Result};

fn fetch(id: u32) -> impl std::future::Future<Output = Option<String>> {
    ready(if id == 1 {
        Option::Some("ada".to_owned())
    } else {
        Option::None()
    })
}

#[test]
fn pending_options() {
    smol::block_on(async {
        assert_eq!(fetch(1).map_some(|name| name.len()).await, Option::Some(3));
        assert_eq!(fetch(2).some_or("nobody".into()).await, "nobody");
        let greeting = fetch(1)
            .match_some(|name| format!("hello {name}"), || "who?".into())
            .await;
        assert_eq!(greeting, "hello ada");
    })
}

#[test]
fn pending_fallible_options() {
    let failing = || ready(Err::<Option<u8>, _>("offline"));
    smol::block_on(async {
        assert_eq!(failing().try_map_some(|x| x + 1).await, Err("offline"));
        assert_eq!(
            ready(Ok::<_, &str>(Option::Some(1u8)))
                .try_map_some(|x| x + 1)
                .await,
            Ok(Option::Some(2))
        );
        assert_eq!(
            ready(Ok::<_, &str>(Option::<u8>::None())).try_some_or(7).await,
            Ok(7)
        );
    })
}

#[test]
fn pending_results() {
    let pending = |ok: bool| {
        ready(if ok {
            Result::<u8, String>::Ok(2)
        } else {
            Result::Err("refused".into())
        })
    };
    smol::block_on(async {
        assert_eq!(pending(true).map_ok(|x| x * 2).await, Result::Ok(4));
        assert_eq!(pending(false).map_err(|e| e.len()).await, Result::Err(7));
        assert_eq!(pending(true).unwrap_ok().await, 2);
        let outcome = pending(false)
            .match_result(|x| x.to_string(), |e| format!("error: {e}"))
            .await;
        assert_eq!(outcome, "error: refused");
    })
}

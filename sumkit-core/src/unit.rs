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

//! The value that carries no information.

/// A zero-information placeholder for "no meaningful value".
///
/// All instances are equal, and none orders before another.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit;

impl Unit {
    /// The only value of [`Unit`].
    pub const VALUE: Unit = Unit;
}
impl core::fmt::Debug for Unit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("()")
    }
}
impl core::fmt::Display for Unit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("()")
    }
}
impl From<()> for Unit {
    fn from(_: ()) -> Self {
        Unit
    }
}
impl From<Unit> for () {
    fn from(_: Unit) -> Self {}
}

#[cfg(test)]
mod tests {
    use super::Unit;

    #[test]
    fn all_units_are_equal() {
        assert_eq!(Unit, Unit::VALUE);
        assert_eq!(Unit.cmp(&Unit::default()), core::cmp::Ordering::Equal);
        assert!(!(Unit < Unit));
        assert_eq!(format!("{Unit:?}"), "()");
        let unit: Unit = ().into();
        assert_eq!(unit, Unit);
    }
}

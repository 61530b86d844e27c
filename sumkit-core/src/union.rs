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

//! Closed unions of two to five member types.
//!
//! Each arity is its own type. A union remembers which constructor built it (its index) and only
//! lets its payload out through [`Union2::is`]-style narrowing or exhaustive dispatch, where one
//! handler per member must be supplied.

use core::any::Any;
use core::future::Future;

/// A member's position in a union's type list.
pub trait Position {
    const INDEX: usize;
}
macro_rules! positions {
    ($($(#[$meta: meta])* $idx: ident = $value: literal;)*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
            pub struct $idx;
            impl Position for $idx {
                const INDEX: usize = $value;
            }
        )*
    };
}
positions! {
    /// The first member.
    I0 = 0;
    /// The second member.
    I1 = 1;
    /// The third member.
    I2 = 2;
    /// The fourth member.
    I3 = 3;
    /// The fifth member.
    I4 = 4;
}

/// Implemented by a union for each of its members: `T` sits at position `I`.
///
/// This is what lets [`Union2::from_member`] pick the constructor from the argument's type alone.
/// When two members share a type, the position must be spelled out at the call site.
pub trait Member<T, I: Position>: Sized {
    fn wrap(value: T) -> Self;
}

/// What every union has in common, whatever its arity and member types.
///
/// Comparing through this trait is structural: two unions are equal when they hold the same
/// index and equal payloads, even if their declared member lists differ.
pub trait AnyUnion {
    /// The number of member types.
    fn arity(&self) -> usize;
    /// The position of the member that built this union.
    fn index(&self) -> usize;
    /// The payload, for dynamic inspection.
    fn payload(&self) -> &dyn Any;
    /// Returns `true` if `other` has the payload's exact type and compares equal to it.
    fn payload_eq(&self, other: &dyn Any) -> bool;
    /// Same index, equal payload.
    fn structural_eq(&self, other: &dyn AnyUnion) -> bool {
        self.index() == other.index() && self.payload_eq(other.payload())
    }
}
impl PartialEq for dyn AnyUnion + '_ {
    fn eq(&self, other: &Self) -> bool {
        self.structural_eq(other)
    }
}

macro_rules! union_type {
    (
        $(#[$meta: meta])*
        $name: ident, $repr: ident, $arity: literal,
        doc($types: literal, $all: literal, $fewer: literal),
        $($T: ident $Ctor: ident $Idx: ident $F: ident $Fut: ident $p: ident),+
    ) => {
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        enum $repr<$($T),+> {
            $($Ctor($T),)+
        }

        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name<$($T),+> {
            inner: $repr<$($T),+>,
        }

        impl<$($T: core::fmt::Debug),+> core::fmt::Debug for $name<$($T),+> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                match &self.inner {
                    $($repr::$Ctor(value) => f.debug_tuple(stringify!($Ctor)).field(value).finish(),)+
                }
            }
        }

        impl<$($T),+> $name<$($T),+> {
            /// The number of member types.
            pub const ARITY: usize = $arity;
            $(
                #[doc = concat!("Construct the union from its member at [`", stringify!($Idx), "`].")]
                #[allow(non_snake_case)]
                pub fn $Ctor(value: $T) -> Self {
                    Self {
                        inner: $repr::$Ctor(value),
                    }
                }
            )+
            /// Construct the union from whichever member has `T`'s type.
            pub fn from_member<T, I: Position>(value: T) -> Self
            where
                Self: Member<T, I>,
            {
                <Self as Member<T, I>>::wrap(value)
            }
            /// The position of the member that built this union.
            pub fn index(&self) -> usize {
                match &self.inner {
                    $($repr::$Ctor(_) => $Idx::INDEX,)+
                }
            }
            /// Equivalent to `match self`: exactly one of the functions runs.
            ///
            #[doc = concat!(
                "```\n",
                "# use sumkit_core::", stringify!($name), ";\n",
                "let u = ", stringify!($name), "::<", $types, ">::First(1);\n",
                "assert_eq!(u.match_owned(", $all, "), 1);\n",
                "```\n",
                "\n",
                "Leaving out a handler doesn't compile:\n",
                "\n",
                "```compile_fail\n",
                "# use sumkit_core::", stringify!($name), ";\n",
                "let u = ", stringify!($name), "::<", $types, ">::First(1);\n",
                "u.match_owned(", $fewer, ");\n",
                "```",
            )]
            pub fn match_owned<U, $($F: FnOnce($T) -> U),+>(self, $($p: $F),+) -> U {
                match self.inner {
                    $($repr::$Ctor(value) => $p(value),)+
                }
            }
            /// Equivalent to `match &self`: exactly one of the functions runs.
            pub fn match_ref<'a, U, $($F: FnOnce(&'a $T) -> U),+>(&'a self, $($p: $F),+) -> U {
                match &self.inner {
                    $($repr::$Ctor(value) => $p(value),)+
                }
            }
            /// Runs the action matching the held member, for its side effects only.
            pub fn switch<$($F: FnOnce(&$T)),+>(&self, $($p: $F),+) {
                self.match_ref($($p),+)
            }
            /// Awaits the action matching the held member. The others are never called.
            pub async fn switch_async<$($F, $Fut),+>(self, $($p: $F),+)
            where
                $($F: FnOnce($T) -> $Fut, $Fut: Future<Output = ()>,)+
            {
                match self.inner {
                    $($repr::$Ctor(value) => $p(value).await,)+
                }
            }
        }

        impl<$($T: 'static),+> $name<$($T),+> {
            /// Returns the payload if its runtime type is exactly `T`.
            pub fn is<T: 'static>(&self) -> core::option::Option<&T> {
                self.payload_any().downcast_ref()
            }
            /// Takes the payload out if its runtime type is exactly `T`, gives `self` back otherwise.
            #[allow(clippy::missing_errors_doc)]
            pub fn into_member<T: 'static>(self) -> core::result::Result<T, Self> {
                match self.inner {
                    $($repr::$Ctor(value) => {
                        let mut slot = Some(value);
                        let taken = (&mut slot as &mut dyn Any)
                            .downcast_mut::<core::option::Option<T>>()
                            .and_then(core::option::Option::take);
                        match (taken, slot) {
                            (Some(value), _) => Ok(value),
                            (None, Some(value)) => Err(Self::$Ctor(value)),
                            (None, None) => unreachable!("union payload lost during narrowing"),
                        }
                    })+
                }
            }
            fn payload_any(&self) -> &dyn Any {
                match &self.inner {
                    $($repr::$Ctor(value) => value as &dyn Any,)+
                }
            }
        }

        impl<$($T: PartialEq + 'static),+> AnyUnion for $name<$($T),+> {
            fn arity(&self) -> usize {
                $arity
            }
            fn index(&self) -> usize {
                $name::index(self)
            }
            fn payload(&self) -> &dyn Any {
                self.payload_any()
            }
            fn payload_eq(&self, other: &dyn Any) -> bool {
                match &self.inner {
                    $($repr::$Ctor(value) => other.downcast_ref::<$T>().map_or(false, |other| value == other),)+
                }
            }
        }

        #[cfg(feature = "serde")]
        impl<$($T: serde::Serialize),+> serde::Serialize for $name<$($T),+> {
            fn serialize<S: serde::Serializer>(
                &self,
                serializer: S,
            ) -> core::result::Result<S::Ok, S::Error> {
                use serde::ser::SerializeStruct;
                let mut state = serializer.serialize_struct(stringify!($name), 2)?;
                state.serialize_field("Index", &self.index())?;
                match &self.inner {
                    $($repr::$Ctor(value) => state.serialize_field("Value", value)?,)+
                }
                state.end()
            }
        }

        /// Decodes `{"Index": n, "Value": v}`.
        ///
        /// `Index` must come before `Value` in the input: the member type used to decode
        /// `Value` is picked from the index, and the value is not buffered. Input with
        /// `Value` first is rejected with "`Index` must precede `Value`". `Serialize`
        /// always writes `Index` first, so only hand-written documents can hit this.
        #[cfg(feature = "serde")]
        impl<'de, $($T: serde::Deserialize<'de>),+> serde::Deserialize<'de> for $name<$($T),+> {
            fn deserialize<D: serde::Deserializer<'de>>(
                deserializer: D,
            ) -> core::result::Result<Self, D::Error> {
                use crate::serde_impls::{index_out_of_range, UnionField};
                use serde::de::Error;
                struct Visitor<$($T),+>(core::marker::PhantomData<$name<$($T),+>>);
                impl<'de, $($T: serde::Deserialize<'de>),+> serde::de::Visitor<'de> for Visitor<$($T),+> {
                    type Value = $name<$($T),+>;
                    fn expecting(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                        f.write_str(concat!("a ", stringify!($name), " encoded as {\"Index\": n, \"Value\": ...}"))
                    }
                    fn visit_map<A: serde::de::MapAccess<'de>>(
                        self,
                        mut map: A,
                    ) -> core::result::Result<Self::Value, A::Error> {
                        let mut index: core::option::Option<usize> = None;
                        let mut union = None;
                        while let Some(field) = map.next_key::<UnionField>()? {
                            match field {
                                UnionField::Index => {
                                    if index.is_some() {
                                        return Err(A::Error::duplicate_field("Index"));
                                    }
                                    index = Some(map.next_value()?);
                                }
                                UnionField::Value => {
                                    if union.is_some() {
                                        return Err(A::Error::duplicate_field("Value"));
                                    }
                                    let Some(index) = index else {
                                        return Err(A::Error::custom("`Index` must precede `Value`"));
                                    };
                                    union = Some(match index {
                                        $(i if i == $Idx::INDEX => $name::$Ctor(map.next_value()?),)+
                                        other => return Err(index_out_of_range(other, $arity)),
                                    });
                                }
                                UnionField::Other => {
                                    map.next_value::<serde::de::IgnoredAny>()?;
                                }
                            }
                        }
                        match (index, union) {
                            (_, Some(union)) => Ok(union),
                            (None, None) => Err(A::Error::missing_field("Index")),
                            (Some(_), None) => Err(A::Error::missing_field("Value")),
                        }
                    }
                }
                deserializer.deserialize_struct(
                    stringify!($name),
                    &["Index", "Value"],
                    Visitor(core::marker::PhantomData),
                )
            }
        }
    };
}

macro_rules! members {
    ($name: ident [$($G: ident),+]) => {};
    ($name: ident [$($G: ident),+] $T: ident $Ctor: ident $Idx: ident; $($rest: tt)*) => {
        impl<$($G),+> Member<$T, $Idx> for $name<$($G),+> {
            fn wrap(value: $T) -> Self {
                Self::$Ctor(value)
            }
        }
        members!($name [$($G),+] $($rest)*);
    };
}

union_type!(
    /// A value of exactly one of two types.
    Union2, Repr2, 2,
    doc("u8, u8", "|a| a, |b| b", "|a| a"),
    T0 First I0 F0 Fut0 first,
    T1 Second I1 F1 Fut1 second
);
members!(Union2 [T0, T1] T0 First I0; T1 Second I1;);

union_type!(
    /// A value of exactly one of three types.
    Union3, Repr3, 3,
    doc("u8, u8, u8", "|a| a, |b| b, |c| c", "|a| a, |b| b"),
    T0 First I0 F0 Fut0 first,
    T1 Second I1 F1 Fut1 second,
    T2 Third I2 F2 Fut2 third
);
members!(Union3 [T0, T1, T2] T0 First I0; T1 Second I1; T2 Third I2;);

union_type!(
    /// A value of exactly one of four types.
    Union4, Repr4, 4,
    doc("u8, u8, u8, u8", "|a| a, |b| b, |c| c, |d| d", "|a| a, |b| b, |c| c"),
    T0 First I0 F0 Fut0 first,
    T1 Second I1 F1 Fut1 second,
    T2 Third I2 F2 Fut2 third,
    T3 Fourth I3 F3 Fut3 fourth
);
members!(Union4 [T0, T1, T2, T3] T0 First I0; T1 Second I1; T2 Third I2; T3 Fourth I3;);

union_type!(
    /// A value of exactly one of five types.
    Union5, Repr5, 5,
    doc("u8, u8, u8, u8, u8", "|a| a, |b| b, |c| c, |d| d, |e| e", "|a| a, |b| b, |c| c, |d| d"),
    T0 First I0 F0 Fut0 first,
    T1 Second I1 F1 Fut1 second,
    T2 Third I2 F2 Fut2 third,
    T3 Fourth I3 F3 Fut3 fourth,
    T4 Fifth I4 F4 Fut4 fifth
);
members!(Union5 [T0, T1, T2, T3, T4] T0 First I0; T1 Second I1; T2 Third I2; T3 Fourth I3; T4 Fifth I4;);

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Meters(f64);
    #[derive(Debug, Clone, PartialEq)]
    struct Feet(f64);

    #[test]
    fn narrowing_is_exclusive() {
        let u: Union3<Meters, Feet, String> = Union3::Second(Feet(3.0));
        assert_eq!(u.index(), 1);
        assert!(u.is::<Meters>().is_none());
        assert_eq!(u.is::<Feet>(), Some(&Feet(3.0)));
        assert!(u.is::<String>().is_none());
        let u = match u.into_member::<Meters>() {
            Ok(_) => panic!("narrowed to the wrong member"),
            Err(u) => u,
        };
        assert_eq!(u.into_member::<Feet>(), Ok(Feet(3.0)));
    }

    #[test]
    fn exact_runtime_type() {
        let u: Union2<u32, &'static str> = Union2::First(7);
        assert!(u.is::<u64>().is_none());
        assert!(u.is::<i32>().is_none());
        assert_eq!(u.is::<u32>(), Some(&7));
    }

    #[test]
    fn from_member_picks_the_position() {
        let u = Union4::<u8, String, Feet, ()>::from_member(Feet(1.0));
        assert_eq!(u.index(), 2);
        let u = Union4::<u8, String, Feet, ()>::from_member(());
        assert_eq!(u.index(), 3);
        let same = Union2::<u8, u8>::from_member::<_, I1>(4);
        assert_eq!(same.index(), 1);
        assert_eq!(same, Union2::Second(4));
        assert_ne!(same, Union2::First(4));
    }

    #[test]
    fn dispatch_runs_one_handler() {
        let hits = core::cell::Cell::new([0u8; 5]);
        let hit = |i: usize| {
            let mut h = hits.get();
            h[i] += 1;
            hits.set(h)
        };
        let u: Union5<u8, u16, u32, u64, u128> = Union5::Fourth(9);
        u.switch(|_| hit(0), |_| hit(1), |_| hit(2), |_| hit(3), |_| hit(4));
        assert_eq!(hits.get(), [0, 0, 0, 1, 0]);
        let described = u.match_owned(
            |a| format!("u8 {a}"),
            |b| format!("u16 {b}"),
            |c| format!("u32 {c}"),
            |d| format!("u64 {d}"),
            |e| format!("u128 {e}"),
        );
        assert_eq!(described, "u64 9");
        assert_eq!(
            Union2::<u8, &str>::Second("x").match_ref(|_| 0, |s| s.len()),
            1
        );
    }

    async fn wrong_arm<T>(_: T) {
        panic!("wrong arm")
    }

    #[test]
    fn async_dispatch() {
        let seen = core::cell::Cell::new(None);
        let u: Union3<u8, char, bool> = Union3::Third(true);
        smol::block_on(u.switch_async(
            wrong_arm,
            wrong_arm,
            |b| {
                let seen = &seen;
                async move { seen.set(Some(b)) }
            },
        ));
        assert_eq!(seen.get(), Some(true));
    }

    #[test]
    fn structural_equality_across_arities() {
        let two: Union2<u8, String> = Union2::Second("a".into());
        let three: Union3<bool, String, u8> = Union3::Second("a".into());
        let shifted: Union3<String, u8, bool> = Union3::First("a".into());
        let (two, three, shifted): (&dyn AnyUnion, &dyn AnyUnion, &dyn AnyUnion) =
            (&two, &three, &shifted);
        assert!(two == three);
        assert!(two != shifted);
        assert_eq!(three.arity(), 3);
        assert_eq!(two.payload().downcast_ref::<String>().map(String::as_str), Some("a"));
    }

    #[test]
    fn debug_names_the_position() {
        assert_eq!(format!("{:?}", Union2::<u8, u8>::Second(1)), "Second(1)");
    }
}

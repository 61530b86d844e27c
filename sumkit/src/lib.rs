#![doc = include_str!("../README.md")]

pub use sumkit_macros::sumtype;

/// The container types, as seen by generated code.
pub use sumkit_core as types;

pub use sumkit_core::{
    AccessError, AnyUnion, Member, Named, Nullable, Option, Position, Result, Union2, Union3,
    Union4, Union5, UnitResult, Unit, I0, I1, I2, I3, I4,
};
#[cfg(feature = "futures")]
pub use sumkit_core::future;

/// The traits that give generated names and futures their consuming operations.
///
/// `use sumkit::prelude::*;` wherever a `#[sumtype]` name is unwrapped, matched by value or
/// awaited.
pub mod prelude {
    #[cfg(feature = "futures")]
    pub use sumkit_core::future::{OptionFutureExt, ResultFutureExt, TryOptionFutureExt};
    pub use sumkit_core::{
        AnyUnion, Named, NamedResult, NamedUnion2, NamedUnion3, NamedUnion4, NamedUnion5,
        NamedUnitResult,
    };
}

//! Closed enumerations of the AAS metamodel.
//!
//! Every enumeration is a fieldless Rust enum whose discriminant is its dense
//! ordinal (`0..N`, declaration order) and whose canonical name is the
//! upper snake-case literal given in the declaration. The name table and the
//! reverse lookup are both generated from that single declaration, so they are
//! exact inverses and live in static, read-only data.
//!
//! ```text
//! ordinal ──name_of──▶ "INSTANCE"
//!    ▲                      │
//!    └──────value_of────────┘
//! ```
//!
//! Unknown names are reported, not aliased: [`Enumeration::from_name`] returns
//! `None`, [`Enumeration::value_of`] and `str::parse` return
//! [`ModelError::UnknownName`]. Code that needs the legacy fallback to the
//! first variant must ask for it by name through
//! [`Enumeration::from_name_or_first`], which logs every fallback.

use std::fmt::{Debug, Display};
use std::hash::Hash;

use crate::error::{ModelError, ModelResult};

/// Common surface of all closed enumerations.
pub trait Enumeration:
    Copy + Eq + Hash + Ord + Debug + Display + Send + Sync + 'static
{
    /// Enumeration name as declared, e.g. `"ModelingKind"`.
    const NAME: &'static str;
    /// All variants in ordinal order.
    const VARIANTS: &'static [Self];
    /// Name table; index is the ordinal.
    const NAMES: &'static [&'static str];
    /// The variant with ordinal 0.
    const FIRST: Self;

    /// Dense ordinal of this variant.
    fn ordinal(self) -> u32;

    /// Canonical name of this variant.
    fn name(self) -> &'static str;

    /// Exact, case-sensitive name lookup.
    fn from_name(name: &str) -> Option<Self>;

    /// Variant for an ordinal, `None` outside `0..N`.
    fn from_ordinal(ordinal: u32) -> Option<Self> {
        Self::VARIANTS.get(ordinal as usize).copied()
    }

    /// Name for an ordinal, `None` outside `0..N`.
    fn name_of(ordinal: u32) -> Option<&'static str> {
        Self::NAMES.get(ordinal as usize).copied()
    }

    /// Ordinal for a name.
    ///
    /// # Errors
    ///
    /// [`ModelError::UnknownName`] if `name` is not a declared variant.
    fn value_of(name: &str) -> ModelResult<u32> {
        Self::from_name(name)
            .map(Self::ordinal)
            .ok_or_else(|| ModelError::unknown_name(Self::NAME, name))
    }

    /// Lenient lookup that maps unknown names to [`Self::FIRST`].
    ///
    /// An unknown name becomes indistinguishable from the first variant, so
    /// every fallback is logged at `warn`.
    fn from_name_or_first(name: &str) -> Self {
        match Self::from_name(name) {
            Some(variant) => variant,
            None => {
                tracing::warn!(
                    enumeration = Self::NAME,
                    rejected = name,
                    fallback = Self::FIRST.name(),
                    "unknown enumeration name, using first variant"
                );
                Self::FIRST
            }
        }
    }
}

// ============================================================================
// CODEC GENERATION
// ============================================================================

/// Declares a closed enumeration and its name/ordinal codec.
///
/// Variants are numbered in declaration order; the string literal is the
/// canonical name.
macro_rules! enumeration {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $literal:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[cfg_attr(feature = "serde", serde(rename = $literal))]
                $variant,
            )+
        }

        impl $name {
            /// Number of declared variants.
            pub const COUNT: usize = [$($literal),+].len();

            /// Canonical name of this variant.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $literal,)+
                }
            }

            /// Dense ordinal of this variant.
            pub const fn ordinal(self) -> u32 {
                self as u32
            }

            /// Exact, case-sensitive name lookup.
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($literal => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// Variant for an ordinal, `None` outside `0..COUNT`.
            pub fn from_ordinal(ordinal: u32) -> Option<Self> {
                <Self as $crate::enums::Enumeration>::VARIANTS
                    .get(ordinal as usize)
                    .copied()
            }
        }

        impl $crate::enums::Enumeration for $name {
            const NAME: &'static str = stringify!($name);
            const VARIANTS: &'static [Self] = &[$(Self::$variant),+];
            const NAMES: &'static [&'static str] = &[$($literal),+];
            const FIRST: Self = Self::VARIANTS[0];

            fn ordinal(self) -> u32 {
                $name::ordinal(self)
            }

            fn name(self) -> &'static str {
                $name::name(self)
            }

            fn from_name(name: &str) -> Option<Self> {
                $name::from_name(name)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_name(s)
                    .ok_or_else(|| $crate::error::ModelError::unknown_name(stringify!($name), s))
            }
        }

        impl TryFrom<u32> for $name {
            type Error = $crate::error::ModelError;

            fn try_from(ordinal: u32) -> Result<Self, Self::Error> {
                Self::from_ordinal(ordinal).ok_or_else(|| {
                    $crate::error::ModelError::ordinal_out_of_range(
                        stringify!($name),
                        ordinal,
                        Self::COUNT,
                    )
                })
            }
        }

        impl From<$name> for u32 {
            fn from(value: $name) -> u32 {
                value.ordinal()
            }
        }
    };
}

/// Declares `$subset` as a name-preserving subset of `$superset`.
///
/// Generates the widening `From` and a narrowing `TryFrom` that fails with
/// [`ModelError::NotInFamily`](crate::error::ModelError::NotInFamily).
macro_rules! subset {
    ($subset:ident => $superset:ident [$($variant:ident),+ $(,)?]) => {
        impl From<$subset> for $superset {
            fn from(value: $subset) -> Self {
                match value {
                    $($subset::$variant => $superset::$variant,)+
                }
            }
        }

        impl TryFrom<$superset> for $subset {
            type Error = $crate::error::ModelError;

            fn try_from(value: $superset) -> Result<Self, Self::Error> {
                match value {
                    $($superset::$variant => Ok($subset::$variant),)+
                    #[allow(unreachable_patterns)]
                    other => Err($crate::error::ModelError::not_in_family(
                        stringify!($subset),
                        other.name(),
                    )),
                }
            }
        }
    };
}

mod data_types;
mod elements;
mod kinds;

pub use data_types::{
    BuildInListTypes, DataTypeDef, DataTypeFamily, DataTypeIec61360, DecimalBuildInTypes,
    DurationBuildInTypes, PrimitiveTypes, StringBuildInTypes,
};
pub use elements::{IdentifiableElements, KeyElements, ReferableElements, SubmodelElements};
pub use kinds::{AssetKind, EntityType, LevelType, ModelingKind};

#[cfg(test)]
mod tests;

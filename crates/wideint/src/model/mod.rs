//! Data model types for wide integers.
//!
//! This module contains the value types of the crate:
//! - 128-bit integers built from two 64-bit lanes
//! - 256-bit integers built from two 128-bit halves
//! - 512-bit integers built from two 256-bit halves
//! - Decimal wrappers over the signed integers (unscaled values)
//!
//! Every width is a distinct plain struct. A signed type and the unsigned type
//! of the same width share one memory layout, and converting between them is
//! a bit cast.

/// Returns the lane that fills every bit above a sign-extended `i64`.
///
/// All-ones for negative values, zero otherwise.
#[inline]
pub(crate) const fn sign_lane(v: i64) -> u64 {
    (v >> 63) as u64
}

/// Implements the items shared by a signed/unsigned pair of one width:
/// size constants, fixed-array byte conversion, bit casts, and widening
/// from narrower native scalars.
macro_rules! impl_wide_pair {
    ($unsigned:ident, $signed:ident, bits: $bits:literal, lanes: $lanes:literal) => {
        impl $unsigned {
            /// Width in bits.
            pub const BITS: u32 = $bits;
            /// Width in bytes on the wire.
            pub const BYTES: usize = $bits / 8;
            /// Number of 64-bit lanes.
            pub const LANES: usize = $lanes;
            /// The value zero.
            pub const ZERO: Self = Self::splat(0);
            /// The maximum value (every bit set).
            pub const MAX: Self = Self::splat(u64::MAX);

            /// Returns the little-endian byte representation, lane 0 first.
            pub fn to_le_bytes(self) -> [u8; $bits / 8] {
                let mut out = [0u8; $bits / 8];
                for (chunk, lane) in out.chunks_exact_mut(8).zip(self.to_lanes()) {
                    chunk.copy_from_slice(&lane.to_le_bytes());
                }
                out
            }

            /// Builds a value from its little-endian byte representation.
            pub fn from_le_bytes(bytes: [u8; $bits / 8]) -> Self {
                let mut lanes = [0u64; $lanes];
                for (lane, chunk) in lanes.iter_mut().zip(bytes.chunks_exact(8)) {
                    let mut word = [0u8; 8];
                    word.copy_from_slice(chunk);
                    *lane = u64::from_le_bytes(word);
                }
                Self::from_lanes(lanes)
            }
        }

        impl $signed {
            /// Width in bits.
            pub const BITS: u32 = $bits;
            /// Width in bytes on the wire.
            pub const BYTES: usize = $bits / 8;
            /// Number of 64-bit lanes.
            pub const LANES: usize = $lanes;
            /// The value zero.
            pub const ZERO: Self = $unsigned::ZERO.cast_signed();
            /// The value minus one (every bit set).
            pub const MINUS_ONE: Self = $unsigned::MAX.cast_signed();

            /// Returns the lanes, least significant first.
            pub const fn to_lanes(self) -> [u64; $lanes] {
                self.cast_unsigned().to_lanes()
            }

            /// Builds a value from lanes given least significant first.
            pub const fn from_lanes(lanes: [u64; $lanes]) -> Self {
                $unsigned::from_lanes(lanes).cast_signed()
            }

            /// Returns the little-endian two's-complement bytes, lane 0 first.
            pub fn to_le_bytes(self) -> [u8; $bits / 8] {
                self.cast_unsigned().to_le_bytes()
            }

            /// Builds a value from little-endian two's-complement bytes.
            pub fn from_le_bytes(bytes: [u8; $bits / 8]) -> Self {
                $unsigned::from_le_bytes(bytes).cast_signed()
            }
        }

        impl From<$signed> for $unsigned {
            fn from(value: $signed) -> Self {
                value.cast_unsigned()
            }
        }

        impl From<$unsigned> for $signed {
            fn from(value: $unsigned) -> Self {
                value.cast_signed()
            }
        }

        $crate::model::impl_wide_pair!(@widen $unsigned, from_u64, u64, [u8, u16, u32, u64]);
        $crate::model::impl_wide_pair!(@widen $signed, from_int, i64, [i8, i16, i32, i64]);
    };

    (@widen $ty:ident, $ctor:ident, $native:ty, [$($from:ty),*]) => {
        $(
            impl From<$from> for $ty {
                fn from(value: $from) -> Self {
                    Self::$ctor(<$native>::from(value))
                }
            }
        )*
    };
}

pub(crate) use impl_wide_pair;

pub mod decimal;
pub mod int128;
pub mod int256;
pub mod int512;

pub use decimal::{Decimal128, Decimal256, Decimal512};
pub use int128::{Int128, UInt128};
pub use int256::{Int256, UInt256};
pub use int512::{Int512, UInt512};

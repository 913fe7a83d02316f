//! 128-bit integers built from two 64-bit lanes.
//!
//! These are the leaves of the recursive layout: every wider type is
//! ultimately a tree of `UInt128` values.

use crate::model::{impl_wide_pair, sign_lane};

/// 128-bit unsigned integer.
///
/// Value is `high * 2^64 + low`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UInt128 {
    /// Least-significant 64 bits.
    pub low: u64,
    /// Most-significant 64 bits.
    pub high: u64,
}

/// 128-bit signed integer (two's complement).
///
/// Same layout as [`UInt128`]; the sign lives in the top bit of `high`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Int128 {
    /// Least-significant 64 bits.
    pub low: u64,
    /// Most-significant 64 bits.
    pub high: u64,
}

impl UInt128 {
    /// Returns a value with every lane set to `lane`.
    pub const fn splat(lane: u64) -> Self {
        Self { low: lane, high: lane }
    }

    /// Creates a value from a `u64`, placed in the lowest lane.
    pub const fn from_u64(v: u64) -> Self {
        Self { low: v, high: 0 }
    }

    /// Creates a value from an `i64`, sign-extended and reinterpreted as
    /// unsigned.
    pub const fn from_int(v: i64) -> Self {
        Int128::from_int(v).cast_unsigned()
    }

    /// Reinterprets the bits as a signed integer.
    pub const fn cast_signed(self) -> Int128 {
        Int128 {
            low: self.low,
            high: self.high,
        }
    }

    /// Returns the lanes, least significant first.
    pub const fn to_lanes(self) -> [u64; 2] {
        [self.low, self.high]
    }

    /// Builds a value from lanes given least significant first.
    pub const fn from_lanes(lanes: [u64; 2]) -> Self {
        Self {
            low: lanes[0],
            high: lanes[1],
        }
    }

    /// Converts to the native `u128`.
    pub const fn to_u128(self) -> u128 {
        ((self.high as u128) << 64) | self.low as u128
    }
}

impl Int128 {
    /// Creates a value from an `i64` with two's-complement sign extension.
    pub const fn from_int(v: i64) -> Self {
        Self {
            low: v as u64,
            high: sign_lane(v),
        }
    }

    /// Reinterprets the bits as an unsigned integer.
    pub const fn cast_unsigned(self) -> UInt128 {
        UInt128 {
            low: self.low,
            high: self.high,
        }
    }

    /// Returns true if the sign bit is set.
    pub const fn is_negative(self) -> bool {
        (self.high as i64) < 0
    }

    /// Converts to the native `i128`.
    pub const fn to_i128(self) -> i128 {
        self.cast_unsigned().to_u128() as i128
    }
}

impl_wide_pair!(UInt128, Int128, bits: 128, lanes: 2);

impl From<u128> for UInt128 {
    fn from(value: u128) -> Self {
        Self {
            low: value as u64,
            high: (value >> 64) as u64,
        }
    }
}

impl From<UInt128> for u128 {
    fn from(value: UInt128) -> Self {
        value.to_u128()
    }
}

impl From<i128> for Int128 {
    fn from(value: i128) -> Self {
        UInt128::from(value as u128).cast_signed()
    }
}

impl From<Int128> for i128 {
    fn from(value: Int128) -> Self {
        value.to_i128()
    }
}

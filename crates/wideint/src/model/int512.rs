//! 512-bit integers built from two 256-bit halves.
//!
//! Lane numbering (0 = least significant) maps onto the nested fields as:
//!
//! ```text
//! lane 0: low.low.low     lane 4: high.low.low
//! lane 1: low.low.high    lane 5: high.low.high
//! lane 2: low.high.low    lane 6: high.high.low
//! lane 3: low.high.high   lane 7: high.high.high
//! ```

use crate::model::{UInt256, impl_wide_pair, sign_lane};

/// 512-bit unsigned integer.
///
/// Value is `high * 2^256 + low`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UInt512 {
    /// Least-significant 256 bits.
    pub low: UInt256,
    /// Most-significant 256 bits.
    pub high: UInt256,
}

/// 512-bit signed integer (two's complement).
///
/// Same layout as [`UInt512`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Int512 {
    /// Least-significant 256 bits.
    pub low: UInt256,
    /// Most-significant 256 bits.
    pub high: UInt256,
}

impl UInt512 {
    /// Returns a value with every 64-bit lane set to `lane`.
    pub const fn splat(lane: u64) -> Self {
        Self {
            low: UInt256::splat(lane),
            high: UInt256::splat(lane),
        }
    }

    /// Creates a value from a `u64`, placed in the lowest lane.
    pub const fn from_u64(v: u64) -> Self {
        Self {
            low: UInt256::from_u64(v),
            high: UInt256::ZERO,
        }
    }

    /// Creates a value from an `i64`, sign-extended and reinterpreted as
    /// unsigned.
    pub const fn from_int(v: i64) -> Self {
        Int512::from_int(v).cast_unsigned()
    }

    /// Reinterprets the bits as a signed integer.
    pub const fn cast_signed(self) -> Int512 {
        Int512 {
            low: self.low,
            high: self.high,
        }
    }

    /// Returns the lanes, least significant first.
    pub const fn to_lanes(self) -> [u64; 8] {
        let [l0, l1, l2, l3] = self.low.to_lanes();
        let [l4, l5, l6, l7] = self.high.to_lanes();
        [l0, l1, l2, l3, l4, l5, l6, l7]
    }

    /// Builds a value from lanes given least significant first.
    pub const fn from_lanes(lanes: [u64; 8]) -> Self {
        let [l0, l1, l2, l3, l4, l5, l6, l7] = lanes;
        Self {
            low: UInt256::from_lanes([l0, l1, l2, l3]),
            high: UInt256::from_lanes([l4, l5, l6, l7]),
        }
    }
}

impl Int512 {
    /// Creates a value from an `i64` with two's-complement sign extension.
    ///
    /// For negative `v` every lane above lane 0 is all-ones, at every level of
    /// nesting; for non-negative `v` they are all zero.
    pub const fn from_int(v: i64) -> Self {
        Self {
            low: UInt256::from_int(v),
            high: UInt256::splat(sign_lane(v)),
        }
    }

    /// Reinterprets the bits as an unsigned integer.
    pub const fn cast_unsigned(self) -> UInt512 {
        UInt512 {
            low: self.low,
            high: self.high,
        }
    }

    /// Returns true if the sign bit is set.
    pub const fn is_negative(self) -> bool {
        (self.high.high.high as i64) < 0
    }
}

impl_wide_pair!(UInt512, Int512, bits: 512, lanes: 8);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_int_zero() {
        assert_eq!(Int512::from_int(0).to_lanes(), [0; 8]);
        assert_eq!(Int512::from_int(0), Int512::ZERO);
    }

    #[test]
    fn test_from_int_minus_one() {
        assert_eq!(UInt512::from_int(-1).to_lanes(), [u64::MAX; 8]);
        assert_eq!(Int512::from_int(-1), Int512::MINUS_ONE);
    }

    #[test]
    fn test_from_int_positive() {
        let u = UInt512::from_int(42);
        assert_eq!(u.low.low.low, 42);
        assert_eq!(u.low.low.high, 0);
        assert_eq!(u.low.high.low, 0);
        assert_eq!(u.low.high.high, 0);
        assert_eq!(u.high.low.low, 0);
        assert_eq!(u.high.low.high, 0);
        assert_eq!(u.high.high.low, 0);
        assert_eq!(u.high.high.high, 0);
    }

    #[test]
    fn test_from_int_negative_sign_extends() {
        let u = UInt512::from_int(-42);
        assert_eq!(u.low.low.low, (-42i64) as u64);
        assert_eq!(u.low.low.high, u64::MAX);
        assert_eq!(u.low.high.low, u64::MAX);
        assert_eq!(u.low.high.high, u64::MAX);
        assert_eq!(u.high.low.low, u64::MAX);
        assert_eq!(u.high.low.high, u64::MAX);
        assert_eq!(u.high.high.low, u64::MAX);
        assert_eq!(u.high.high.high, u64::MAX);
        assert!(u.cast_signed().is_negative());
    }

    #[test]
    fn test_from_u64() {
        let u = UInt512::from_u64(0xDEADBEEFCAFEBABE);
        assert_eq!(u.to_lanes(), [0xDEADBEEFCAFEBABE, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_lanes_match_fields() {
        let u = UInt512::from_lanes([0, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(u.low.low.low, 0);
        assert_eq!(u.low.low.high, 1);
        assert_eq!(u.low.high.low, 2);
        assert_eq!(u.low.high.high, 3);
        assert_eq!(u.high.low.low, 4);
        assert_eq!(u.high.low.high, 5);
        assert_eq!(u.high.high.low, 6);
        assert_eq!(u.high.high.high, 7);
        assert_eq!(u.to_lanes(), [0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_constants() {
        assert_eq!(UInt512::BITS, 512);
        assert_eq!(UInt512::BYTES, 64);
        assert_eq!(Int512::LANES, 8);
        assert_eq!(UInt512::MAX, UInt512::from_int(-1));
    }
}

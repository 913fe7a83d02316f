//! 256-bit integers built from two 128-bit halves.

use crate::model::{UInt128, impl_wide_pair, sign_lane};

/// 256-bit unsigned integer.
///
/// Value is `high * 2^128 + low`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UInt256 {
    /// Least-significant 128 bits.
    pub low: UInt128,
    /// Most-significant 128 bits.
    pub high: UInt128,
}

/// 256-bit signed integer (two's complement).
///
/// Same layout as [`UInt256`]. The halves are unsigned; only the top bit of
/// `high` carries the sign.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Int256 {
    /// Least-significant 128 bits.
    pub low: UInt128,
    /// Most-significant 128 bits.
    pub high: UInt128,
}

impl UInt256 {
    /// Returns a value with every 64-bit lane set to `lane`.
    pub const fn splat(lane: u64) -> Self {
        Self {
            low: UInt128::splat(lane),
            high: UInt128::splat(lane),
        }
    }

    /// Creates a value from a `u64`, placed in the lowest lane.
    pub const fn from_u64(v: u64) -> Self {
        Self {
            low: UInt128::from_u64(v),
            high: UInt128::ZERO,
        }
    }

    /// Creates a value from an `i64`, sign-extended and reinterpreted as
    /// unsigned.
    pub const fn from_int(v: i64) -> Self {
        Int256::from_int(v).cast_unsigned()
    }

    /// Reinterprets the bits as a signed integer.
    pub const fn cast_signed(self) -> Int256 {
        Int256 {
            low: self.low,
            high: self.high,
        }
    }

    /// Returns the lanes, least significant first.
    pub const fn to_lanes(self) -> [u64; 4] {
        let [l0, l1] = self.low.to_lanes();
        let [l2, l3] = self.high.to_lanes();
        [l0, l1, l2, l3]
    }

    /// Builds a value from lanes given least significant first.
    pub const fn from_lanes(lanes: [u64; 4]) -> Self {
        let [l0, l1, l2, l3] = lanes;
        Self {
            low: UInt128::from_lanes([l0, l1]),
            high: UInt128::from_lanes([l2, l3]),
        }
    }
}

impl Int256 {
    /// Creates a value from an `i64` with two's-complement sign extension.
    ///
    /// The low half carries the sign-extended 128-bit value and the high half
    /// is filled with the sign lane.
    pub const fn from_int(v: i64) -> Self {
        Self {
            low: UInt128::from_int(v),
            high: UInt128::splat(sign_lane(v)),
        }
    }

    /// Reinterprets the bits as an unsigned integer.
    pub const fn cast_unsigned(self) -> UInt256 {
        UInt256 {
            low: self.low,
            high: self.high,
        }
    }

    /// Returns true if the sign bit is set.
    pub const fn is_negative(self) -> bool {
        (self.high.high as i64) < 0
    }
}

impl_wide_pair!(UInt256, Int256, bits: 256, lanes: 4);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_int_positive() {
        assert_eq!(Int256::from_int(42).to_lanes(), [42, 0, 0, 0]);
    }

    #[test]
    fn test_from_int_negative_extends_every_lane() {
        let v = Int256::from_int(-42);
        assert_eq!(v.to_lanes(), [(-42i64) as u64, u64::MAX, u64::MAX, u64::MAX]);
        assert_eq!(v.low.high, u64::MAX);
        assert!(v.is_negative());
    }

    #[test]
    fn test_from_int_extremes() {
        let min = Int256::from_int(i64::MIN);
        assert_eq!(min.to_lanes(), [1 << 63, u64::MAX, u64::MAX, u64::MAX]);
        let max = Int256::from_int(i64::MAX);
        assert_eq!(max.to_lanes(), [i64::MAX as u64, 0, 0, 0]);
        assert!(!max.is_negative());
    }

    #[test]
    fn test_lane_order() {
        let v = UInt256::from_lanes([1, 2, 3, 4]);
        assert_eq!(v.low, UInt128 { low: 1, high: 2 });
        assert_eq!(v.high, UInt128 { low: 3, high: 4 });
    }

    #[test]
    fn test_bit_cast() {
        let signed = Int256::from_int(-7);
        let unsigned = UInt256::from(signed);
        assert_eq!(unsigned, UInt256::from_int(-7));
        assert_eq!(Int256::from(unsigned), signed);
    }

    #[test]
    fn test_le_bytes() {
        let bytes = UInt256::from_u64(0x0102_0304_0506_0708).to_le_bytes();
        assert_eq!(&bytes[..8], &[8, 7, 6, 5, 4, 3, 2, 1]);
        assert!(bytes[8..].iter().all(|b| *b == 0));
        assert_eq!(Int256::from_int(-1).to_le_bytes(), [0xFF; 32]);
    }
}

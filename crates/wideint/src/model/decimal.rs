//! Decimal values as unscaled wide integers.
//!
//! A `DecimalN` is the signed N-bit integer holding a decimal's raw digits.
//! The decimal-point position (scale) is carried by whoever owns the column
//! or field; nothing here validates, rounds or rescales.

use crate::model::{Int128, Int256, Int512};

macro_rules! decimal_type {
    ($(#[$attr:meta])* $name:ident, $inner:ident) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        #[repr(transparent)]
        pub struct $name(pub $inner);

        impl $name {
            /// Width in bytes on the wire.
            pub const BYTES: usize = $inner::BYTES;

            /// Creates a decimal whose unscaled value is `v`.
            pub const fn from_int(v: i64) -> Self {
                Self($inner::from_int(v))
            }

            /// Returns the unscaled integer.
            pub const fn unscaled(self) -> $inner {
                self.0
            }

            /// Returns true if the unscaled value is negative.
            pub const fn is_negative(self) -> bool {
                self.0.is_negative()
            }
        }

        impl From<$inner> for $name {
            fn from(value: $inner) -> Self {
                Self(value)
            }
        }

        impl From<$name> for $inner {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self::from_int(value)
            }
        }
    };
}

decimal_type!(
    /// 128-bit decimal (unscaled value as [`Int128`]).
    Decimal128,
    Int128
);

decimal_type!(
    /// 256-bit decimal (unscaled value as [`Int256`]).
    Decimal256,
    Int256
);

decimal_type!(
    /// 512-bit decimal (unscaled value as [`Int512`]).
    Decimal512,
    Int512
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_matches_signed_integer() {
        for v in [0i64, 1, -1, 1234567890, -1234567890, i64::MIN, i64::MAX] {
            assert_eq!(Decimal128::from_int(v).unscaled(), Int128::from_int(v));
            assert_eq!(Decimal256::from_int(v).unscaled(), Int256::from_int(v));
            assert_eq!(Decimal512::from_int(v).unscaled(), Int512::from_int(v));
        }
    }

    #[test]
    fn test_decimal_layout() {
        assert_eq!(std::mem::size_of::<Decimal128>(), std::mem::size_of::<Int128>());
        assert_eq!(std::mem::size_of::<Decimal512>(), 64);
        assert_eq!(Decimal256::BYTES, 32);
    }

    #[test]
    fn test_decimal_sign() {
        assert!(Decimal512::from(-3i64).is_negative());
        assert!(!Decimal512::from(3i64).is_negative());
        assert_eq!(Int256::from(Decimal256::from_int(-9)), Int256::from_int(-9));
    }
}

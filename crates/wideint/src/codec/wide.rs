//! Wide-integer encoding/decoding.
//!
//! Every wide value is written as its 64-bit lanes in ascending significance,
//! each lane little-endian. Lane `k` occupies bytes `[8k, 8k + 8)`, so the
//! 512-bit layout is:
//!
//! ```text
//! [0,8)   low.low.low      [32,40) high.low.low
//! [8,16)  low.low.high     [40,48) high.low.high
//! [16,24) low.high.low     [48,56) high.high.low
//! [24,32) low.high.high    [56,64) high.high.high
//! ```
//!
//! The mapping is recursive: a value is its `low` half followed by its `high`
//! half, down to the 64-bit lanes of [`UInt128`].

use crate::codec::primitives::{Reader, Writer};
use crate::error::{DecodeError, EncodeError};
use crate::model::{
    Decimal128, Decimal256, Decimal512, Int128, Int256, Int512, UInt128, UInt256, UInt512,
};

/// A fixed-width value with a little-endian lane encoding.
pub trait WireInt: Sized + Copy {
    /// Encoded size in bytes.
    const SIZE: usize;
    /// Type name used in error reports.
    const NAME: &'static str;

    /// Reads one value, consuming exactly [`Self::SIZE`] bytes.
    ///
    /// Fails without consuming anything if fewer bytes remain.
    fn read_from(reader: &mut Reader<'_>) -> Result<Self, DecodeError>;

    /// Writes one value, producing exactly [`Self::SIZE`] bytes.
    ///
    /// Fails without writing anything if less space remains.
    fn write_to(self, writer: &mut Writer<'_>) -> Result<(), EncodeError>;
}

impl WireInt for UInt128 {
    const SIZE: usize = UInt128::BYTES;
    const NAME: &'static str = "UInt128";

    #[inline]
    fn read_from(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
        reader.require(Self::SIZE, Self::NAME)?;
        let low = reader.read_u64(Self::NAME)?;
        let high = reader.read_u64(Self::NAME)?;
        Ok(Self { low, high })
    }

    #[inline]
    fn write_to(self, writer: &mut Writer<'_>) -> Result<(), EncodeError> {
        writer.require(Self::SIZE, Self::NAME)?;
        writer.write_u64(self.low, Self::NAME)?;
        writer.write_u64(self.high, Self::NAME)
    }
}

/// Implements [`WireInt`] for a type made of a `low` and a `high` half.
macro_rules! impl_wire_halves {
    ($ty:ident, $half:ident) => {
        impl WireInt for $ty {
            const SIZE: usize = $ty::BYTES;
            const NAME: &'static str = stringify!($ty);

            #[inline]
            fn read_from(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
                reader.require(Self::SIZE, Self::NAME)?;
                let low = $half::read_from(reader)?;
                let high = $half::read_from(reader)?;
                Ok(Self { low, high })
            }

            #[inline]
            fn write_to(self, writer: &mut Writer<'_>) -> Result<(), EncodeError> {
                writer.require(Self::SIZE, Self::NAME)?;
                self.low.write_to(writer)?;
                self.high.write_to(writer)
            }
        }
    };
}

impl_wire_halves!(UInt256, UInt128);
impl_wire_halves!(UInt512, UInt256);

/// Implements [`WireInt`] for a type that shares the layout of an unsigned
/// wide integer.
macro_rules! impl_wire_cast {
    ($ty:ident, $repr:ident, $into:expr, $from:expr) => {
        impl WireInt for $ty {
            const SIZE: usize = $repr::SIZE;
            const NAME: &'static str = stringify!($ty);

            #[inline]
            fn read_from(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
                reader.require(Self::SIZE, Self::NAME)?;
                $repr::read_from(reader).map($into)
            }

            #[inline]
            fn write_to(self, writer: &mut Writer<'_>) -> Result<(), EncodeError> {
                writer.require(Self::SIZE, Self::NAME)?;
                $from(self).write_to(writer)
            }
        }
    };
}

impl_wire_cast!(Int128, UInt128, UInt128::cast_signed, Int128::cast_unsigned);
impl_wire_cast!(Int256, UInt256, UInt256::cast_signed, Int256::cast_unsigned);
impl_wire_cast!(Int512, UInt512, UInt512::cast_signed, Int512::cast_unsigned);
impl_wire_cast!(Decimal128, Int128, Decimal128, Decimal128::unscaled);
impl_wire_cast!(Decimal256, Int256, Decimal256, Decimal256::unscaled);
impl_wire_cast!(Decimal512, Int512, Decimal512, Decimal512::unscaled);

// =============================================================================
// BUFFER API
// =============================================================================

/// Decodes a value from the start of `buf`.
///
/// Bytes past [`WireInt::SIZE`] are ignored.
pub fn decode<T: WireInt>(buf: &[u8]) -> Result<T, DecodeError> {
    T::read_from(&mut Reader::new(buf))
}

/// Encodes a value into the start of `buf`.
///
/// Bytes past [`WireInt::SIZE`] are left untouched. On error nothing is
/// written.
pub fn encode<T: WireInt>(buf: &mut [u8], value: T) -> Result<(), EncodeError> {
    value.write_to(&mut Writer::new(buf))
}

/// Decodes a [`UInt128`] from the first 16 bytes of `buf`.
pub fn decode_uint128(buf: &[u8]) -> Result<UInt128, DecodeError> {
    decode(buf)
}

/// Encodes a [`UInt128`] into the first 16 bytes of `buf`.
pub fn encode_uint128(buf: &mut [u8], value: UInt128) -> Result<(), EncodeError> {
    encode(buf, value)
}

/// Decodes a [`UInt256`] from the first 32 bytes of `buf`.
pub fn decode_uint256(buf: &[u8]) -> Result<UInt256, DecodeError> {
    decode(buf)
}

/// Encodes a [`UInt256`] into the first 32 bytes of `buf`.
pub fn encode_uint256(buf: &mut [u8], value: UInt256) -> Result<(), EncodeError> {
    encode(buf, value)
}

/// Decodes a [`UInt512`] from the first 64 bytes of `buf`.
///
/// Returns [`DecodeError::BufferTooShort`] if `buf` holds fewer than 64 bytes.
pub fn decode_uint512(buf: &[u8]) -> Result<UInt512, DecodeError> {
    decode(buf)
}

/// Encodes a [`UInt512`] into the first 64 bytes of `buf`.
///
/// Returns [`EncodeError::BufferTooShort`] if `buf` holds fewer than 64 bytes;
/// the buffer is not modified in that case.
pub fn encode_uint512(buf: &mut [u8], value: UInt512) -> Result<(), EncodeError> {
    encode(buf, value)
}

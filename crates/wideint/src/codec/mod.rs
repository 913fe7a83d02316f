//! Binary encoding/decoding for wide integers.
//!
//! Values are fixed width and little-endian: no length prefix, no framing.

pub mod primitives;
pub mod wide;

pub use primitives::{Reader, Writer};
pub use wide::{
    WireInt, decode, decode_uint128, decode_uint256, decode_uint512, encode, encode_uint128,
    encode_uint256, encode_uint512,
};

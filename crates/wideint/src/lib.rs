//! Composable fixed-width integers for wire-protocol values.
//!
//! This crate provides 128, 256 and 512-bit signed and unsigned integers,
//! each built from two halves of the next smaller width, together with a
//! little-endian binary codec and conversion from native scalars with
//! two's-complement sign extension.
//!
//! # Quick Start
//!
//! ```rust
//! use wideint::{Int512, UInt512};
//! use wideint::codec::{decode_uint512, encode_uint512};
//!
//! // -42 sign-extends into every lane above the lowest.
//! let value = UInt512::from(Int512::from_int(-42));
//! assert_eq!(value.high.high.high, u64::MAX);
//!
//! // Encode into a caller-owned buffer and decode back.
//! let mut buf = [0u8; 64];
//! encode_uint512(&mut buf, value).unwrap();
//! assert_eq!(decode_uint512(&buf).unwrap(), value);
//! ```
//!
//! # Modules
//!
//! - [`model`]: Value types (`UInt128` .. `Int512`, `Decimal128` .. `Decimal512`)
//! - [`codec`]: Little-endian lane codec and buffer cursors
//! - [`error`]: Error types
//!
//! # Wire Format
//!
//! A value of N bits is N/64 little-endian 64-bit lanes, least significant
//! lane first. Lane `k` occupies bytes `[8k, 8k + 8)`. Signed and decimal
//! values use the two's-complement bits of the same layout.
//!
//! Decoding and encoding check the buffer length first and report
//! [`DecodeError::BufferTooShort`] / [`EncodeError::BufferTooShort`] instead
//! of reading or writing a partial value.

pub mod codec;
pub mod error;
pub mod model;

// Re-export commonly used types at crate root
pub use codec::{WireInt, decode, decode_uint512, encode, encode_uint512};
pub use error::{DecodeError, EncodeError, ErrorCode};
pub use model::{
    Decimal128, Decimal256, Decimal512, Int128, Int256, Int512, UInt128, UInt256, UInt512,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Error types for wide-integer encoding and decoding.

use thiserror::Error;

/// Stable error codes shared by the decode and encode directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// W001: Buffer shorter than the value's fixed width
    BufferTooShort,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "W001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::BufferTooShort => "W001",
        }
    }
}

/// Error during binary decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("[W001] buffer too short to decode {type_name}: need {needed} bytes, have {actual}")]
    BufferTooShort {
        type_name: &'static str,
        needed: usize,
        actual: usize,
    },
}

impl DecodeError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            DecodeError::BufferTooShort { .. } => ErrorCode::BufferTooShort,
        }
    }
}

/// Error during binary encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("[W001] buffer too short to encode {type_name}: need {needed} bytes, have {actual}")]
    BufferTooShort {
        type_name: &'static str,
        needed: usize,
        actual: usize,
    },
}

impl EncodeError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            EncodeError::BufferTooShort { .. } => ErrorCode::BufferTooShort,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let decode = DecodeError::BufferTooShort {
            type_name: "UInt512",
            needed: 64,
            actual: 10,
        };
        let encode = EncodeError::BufferTooShort {
            type_name: "UInt512",
            needed: 64,
            actual: 63,
        };
        assert_eq!(decode.code().code(), "W001");
        assert_eq!(encode.code(), ErrorCode::BufferTooShort);
    }

    #[test]
    fn test_error_messages() {
        let err = DecodeError::BufferTooShort {
            type_name: "UInt256",
            needed: 32,
            actual: 31,
        };
        assert_eq!(
            err.to_string(),
            "[W001] buffer too short to decode UInt256: need 32 bytes, have 31"
        );
    }
}

//! Error types for the Solana V-App.
//!
//! These error codes are returned in the response frame and propagated
//! to the client. Error messages are kept minimal to avoid leaking
//! security-relevant information.

use core::fmt;
use serde::{Deserialize, Serialize};

/// Error codes for the Solana V-App.
///
/// Each variant maps to a specific error code in the wire protocol.
/// Error messages are intentionally terse to avoid information leakage.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Error {
    /// Malformed transaction or request payload.
    InvalidData = 0x01,
    /// Transaction version is not supported.
    UnsupportedVersion = 0x02,
    /// Invalid BIP32 derivation path.
    InvalidPath = 0x03,
    /// User rejected the operation on the device.
    UserRejected = 0x04,
    /// Blind signing is required but disabled in settings.
    BlindSigningDisabled = 0x05,
    /// Key derivation failed.
    KeyDerivationFailed = 0x06,
    /// Signing operation failed.
    SigningFailed = 0x07,
    /// Operation not supported.
    UnsupportedOperation = 0x08,
    /// Internal error in the V-App.
    InternalError = 0x09,
}

impl Error {
    /// Returns the error code as a u8.
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Intentionally terse messages to avoid information leakage
        match self {
            Error::InvalidData => write!(f, "Invalid data"),
            Error::UnsupportedVersion => write!(f, "Unsupported version"),
            Error::InvalidPath => write!(f, "Invalid path"),
            Error::UserRejected => write!(f, "Rejected by user"),
            Error::BlindSigningDisabled => write!(f, "Blind signing disabled"),
            Error::KeyDerivationFailed => write!(f, "Key derivation failed"),
            Error::SigningFailed => write!(f, "Signing failed"),
            Error::UnsupportedOperation => write!(f, "Unsupported operation"),
            Error::InternalError => write!(f, "Internal error"),
        }
    }
}

//! Solana transaction decoding.
//!
//! The pipeline turns an untrusted, host-supplied byte buffer into a
//! fully parsed [`ParsedTransaction`](transaction::ParsedTransaction),
//! or fails with a [`DecodeError`] and produces nothing:
//!
//! 1. [`reader`]: bounds-checked cursor over the input buffer.
//! 2. [`transaction`]: single-pass structural decode of the header,
//!    address list with roles, blockhash, raw instructions, lookup
//!    tables, and the trailing-byte check.
//! 3. [`accounts`]: the combined account table instruction indices
//!    resolve against.
//! 4. [`registry`]: static spec lookup by (program, discriminant).
//! 5. [`instruction`]: interprets each raw instruction against its
//!    spec, decoding payload fields, binding accounts, collecting
//!    multisig signers, and checking exact payload consumption.
//!
//! Decoding runs to completion before any user interaction; the
//! confirmation layer only ever sees a fully-formed transaction. Every
//! byte of the input must be accounted for: leftover bytes at the
//! transaction level or unconsumed payload at the instruction level
//! abort the decode.

pub mod accounts;
pub mod instruction;
pub mod reader;
pub mod registry;
pub mod transaction;

pub use accounts::{Account, AccountRole, AccountTable, Address, AddressReference};
pub use instruction::{InstructionValue, ParsedInstruction, PropertyValue, RawInstruction};
pub use transaction::ParsedTransaction;

use std::fmt;

use reader::ReadError;

/// Structural decode failure. Fatal to the signing request; there is no
/// partial result and no retry. Only the distinction between
/// [`DecodeError::UnsupportedVersion`] and everything else crosses the
/// wire; the detail is for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Input ended before a complete value was read.
    UnexpectedEof,
    /// A varint did not fit in 64 bits.
    VarintOverflow,
    /// The transaction carries a version tag. No version is accepted
    /// yet, version 0 included.
    UnsupportedVersion(u8),
    /// Fewer addresses than the header counts promise.
    InvalidAddressCount,
    /// Instruction program index outside the address list.
    ProgramIndexOutOfRange(u8),
    /// Instruction account index outside the combined account table.
    AccountIndexOutOfRange(u8),
    /// Bytes left over after the last structural section.
    TrailingData(usize),
    /// Instruction payload shorter than the program's discriminant.
    MissingDiscriminant,
    /// Payload bytes left over after all declared fields were decoded.
    UnconsumedPayload(usize),
    /// A length prefix that cannot be addressed.
    LengthOverflow,
    /// A text field that is not valid UTF-8.
    InvalidUtf8,
    /// An enumeration field with a value outside its set.
    InvalidEnumValue(u64),
    /// No account supplied for a required account slot.
    MissingAccount(&'static str),
    /// More accounts than declared, for a spec without multisig
    /// support.
    UnexpectedAccounts,
}

impl From<ReadError> for DecodeError {
    fn from(err: ReadError) -> Self {
        match err {
            ReadError::UnexpectedEof => DecodeError::UnexpectedEof,
            ReadError::VarintOverflow => DecodeError::VarintOverflow,
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::UnexpectedEof => write!(f, "unexpected end of input"),
            DecodeError::VarintOverflow => write!(f, "varint overflow"),
            DecodeError::UnsupportedVersion(version) => {
                write!(f, "unsupported transaction version {}", version)
            }
            DecodeError::InvalidAddressCount => write!(f, "invalid address count"),
            DecodeError::ProgramIndexOutOfRange(index) => {
                write!(f, "program index {} out of range", index)
            }
            DecodeError::AccountIndexOutOfRange(index) => {
                write!(f, "account index {} out of range", index)
            }
            DecodeError::TrailingData(count) => {
                write!(f, "{} trailing bytes after transaction", count)
            }
            DecodeError::MissingDiscriminant => write!(f, "missing instruction discriminant"),
            DecodeError::UnconsumedPayload(count) => {
                write!(f, "{} unconsumed instruction data bytes", count)
            }
            DecodeError::LengthOverflow => write!(f, "length overflow"),
            DecodeError::InvalidUtf8 => write!(f, "invalid utf-8"),
            DecodeError::InvalidEnumValue(value) => write!(f, "invalid enum value {}", value),
            DecodeError::MissingAccount(name) => write!(f, "missing required account {}", name),
            DecodeError::UnexpectedAccounts => write!(f, "unexpected extra accounts"),
        }
    }
}

impl std::error::Error for DecodeError {}

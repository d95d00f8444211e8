//! Request and Response message types for the Solana V-App protocol.
//!
//! These enums define the full set of messages exchanged between
//! the client and V-App. Messages are serialized with postcard.
//!
//! # Security Model
//!
//! All requests come from the untrusted host. The V-App must:
//! 1. Validate all fields after deserialization
//! 2. Fail closed on any parsing/validation error
//! 3. Never sign data the user has not reviewed

use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::types::{AppConfiguration, Bip32Path, Signature};

/// Request messages from client to V-App.
///
/// Each variant corresponds to a command in the wire protocol.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Get application configuration and version.
    GetAppConfiguration,

    /// Get the ed25519 public key for a derivation path.
    GetPublicKey {
        /// BIP32 derivation path (hardened components only).
        path: Bip32Path,
        /// Whether to show the key on the device for confirmation.
        confirm: bool,
    },

    /// Get the base58 account address for a derivation path.
    GetAddress {
        /// BIP32 derivation path (hardened components only).
        path: Bip32Path,
        /// Whether to show the address on the device for confirmation.
        confirm: bool,
    },

    /// Sign a serialized Solana transaction.
    ///
    /// The exact input bytes are what gets signed after user review;
    /// the V-App never re-serializes.
    SignTransaction {
        /// BIP32 derivation path for the signing key.
        path: Bip32Path,
        /// Serialized transaction message.
        serialized_tx: Vec<u8>,
    },

    /// Exit the V-App (for testing only).
    Exit,
}

/// Response messages from V-App to client.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Error response with error code.
    Error(Error),

    /// App configuration and version.
    AppConfiguration(AppConfiguration),

    /// Ed25519 public key (32 bytes).
    PublicKey([u8; 32]),

    /// Base58-encoded account address.
    Address(String),

    /// Ed25519 signature over the raw transaction bytes.
    Signature(Signature),
}

impl Response {
    /// Creates an error response.
    pub fn error(e: Error) -> Self {
        Response::Error(e)
    }
}

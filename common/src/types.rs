//! Core types for the Solana V-App.
//!
//! These types are shared between V-App and client, serialized via postcard.
//! All validation happens in the V-App after deserialization.

use core::fmt;

use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// Hardened derivation flag (BIP32).
pub const HARDENED: u32 = 0x8000_0000;

/// Maximum BIP32 derivation path depth.
pub const MAX_BIP32_PATH_DEPTH: usize = 10;

/// Solana public key / account address (32 bytes, ed25519 point).
pub type Pubkey = [u8; 32];

/// BIP32 derivation path.
///
/// The path is stored as a vector of u32 values where hardened indices
/// have the 0x80000000 bit set. Solana (SLIP-0010 over ed25519) only
/// supports hardened derivation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Bip32Path(pub Vec<u32>);

impl Bip32Path {
    /// Creates a new empty path.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Creates a path from a slice.
    pub fn from_slice(path: &[u32]) -> Self {
        Self(path.to_vec())
    }

    /// Creates the standard Solana path m/44'/501'/0'/account'.
    pub fn solana(account: u32) -> Self {
        Self(alloc::vec![
            44 | HARDENED,
            501 | HARDENED,
            HARDENED,
            account | HARDENED,
        ])
    }

    /// Returns the path length.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the path is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the path as a slice.
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    /// Validates the path for Solana (SLIP-0044 coin type 501).
    ///
    /// Accepted shapes are m/44'/501', m/44'/501'/account' and
    /// m/44'/501'/account'/change'. Every component must be hardened,
    /// since ed25519 SLIP-0010 derivation has no public derivation.
    pub fn is_valid_solana_path(&self) -> bool {
        if self.0.len() < 2 || self.0.len() > 4 {
            return false;
        }

        if self.0[0] != 44 | HARDENED {
            return false;
        }

        if self.0[1] != 501 | HARDENED {
            return false;
        }

        self.0.iter().all(|&idx| idx & HARDENED != 0)
    }
}

impl fmt::Display for Bip32Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m")?;
        for &idx in &self.0 {
            if idx & HARDENED != 0 {
                write!(f, "/{}'", idx & !HARDENED)?;
            } else {
                write!(f, "/{}", idx)?;
            }
        }
        Ok(())
    }
}

/// Ed25519 signature components.
///
/// Solana signatures are 64 bytes on the wire: R point followed by
/// the scalar S, both 32 bytes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    /// R component (32 bytes).
    pub r: [u8; 32],
    /// S component (32 bytes).
    pub s: [u8; 32],
}

impl Signature {
    /// Returns the 64-byte wire form (R then S).
    pub fn to_bytes(&self) -> [u8; 64] {
        let mut out = [0u8; 64];
        out[..32].copy_from_slice(&self.r);
        out[32..].copy_from_slice(&self.s);
        out
    }

    /// Builds a signature from the 64-byte wire form.
    pub fn from_bytes(bytes: &[u8; 64]) -> Self {
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..]);
        Self { r, s }
    }
}

impl Default for Signature {
    fn default() -> Self {
        Self {
            r: [0u8; 32],
            s: [0u8; 32],
        }
    }
}

/// App configuration returned by GET_APP_CONFIGURATION.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AppConfiguration {
    /// Major version.
    pub version_major: u8,
    /// Minor version.
    pub version_minor: u8,
    /// Patch version.
    pub version_patch: u8,
    /// Whether blind signing of unrecognized instructions is enabled.
    pub blind_signing_enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solana_path_constructor() {
        let path = Bip32Path::solana(3);
        assert_eq!(
            path.as_slice(),
            &[44 | HARDENED, 501 | HARDENED, HARDENED, 3 | HARDENED]
        );
        assert!(path.is_valid_solana_path());
    }

    #[test]
    fn test_valid_path_shapes() {
        assert!(Bip32Path::from_slice(&[44 | HARDENED, 501 | HARDENED]).is_valid_solana_path());
        assert!(
            Bip32Path::from_slice(&[44 | HARDENED, 501 | HARDENED, 7 | HARDENED])
                .is_valid_solana_path()
        );
        assert!(Bip32Path::from_slice(&[
            44 | HARDENED,
            501 | HARDENED,
            HARDENED,
            HARDENED
        ])
        .is_valid_solana_path());
    }

    #[test]
    fn test_invalid_paths() {
        // Too short / too long
        assert!(!Bip32Path::from_slice(&[44 | HARDENED]).is_valid_solana_path());
        assert!(!Bip32Path::from_slice(&[
            44 | HARDENED,
            501 | HARDENED,
            HARDENED,
            HARDENED,
            HARDENED
        ])
        .is_valid_solana_path());
        // Wrong coin type
        assert!(!Bip32Path::from_slice(&[44 | HARDENED, 60 | HARDENED, HARDENED])
            .is_valid_solana_path());
        // Unhardened component
        assert!(
            !Bip32Path::from_slice(&[44 | HARDENED, 501 | HARDENED, 0]).is_valid_solana_path()
        );
    }

    #[test]
    fn test_path_display() {
        let path = Bip32Path::solana(0);
        assert_eq!(alloc::format!("{}", path), "m/44'/501'/0'/0'");
    }

    #[test]
    fn test_signature_wire_form() {
        let sig = Signature {
            r: [0x11; 32],
            s: [0x22; 32],
        };
        let bytes = sig.to_bytes();
        assert_eq!(&bytes[..32], &[0x11; 32]);
        assert_eq!(&bytes[32..], &[0x22; 32]);
        assert_eq!(Signature::from_bytes(&bytes), sig);
    }
}

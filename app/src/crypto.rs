//! Key derivation and signing for the Solana app.
//!
//! Solana uses ed25519 keys derived per SLIP-0010 from a 64-byte BIP39
//! seed. SLIP-0010 defines only hardened derivation for ed25519, so
//! [`derive_private_key`] rejects any path with a non-hardened
//! component before touching key material.
//!
//! # Security
//!
//! - Seeds and intermediate extended keys are zeroized on drop
//! - ed25519-dalek signing is constant-time
//! - No secret-dependent memory access patterns

use common::{Bip32Path, Error, Pubkey, Signature, HARDENED};
use ed25519_dalek::{Signer, SigningKey};
use hmac::{Hmac, Mac};
use sha2::Sha512;
use zeroize::{Zeroize, ZeroizeOnDrop};

type HmacSha512 = Hmac<Sha512>;

/// HMAC key for the SLIP-0010 ed25519 master node.
const MASTER_KEY_DOMAIN: &[u8] = b"ed25519 seed";

// =============================================================================
// Seed
// =============================================================================

/// Seed for key derivation.
///
/// In production this would come from secure storage. The service binary
/// reads it from the environment; dev mode falls back to a test seed.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Seed([u8; 64]);

impl Seed {
    /// Creates a seed from raw bytes.
    pub fn from_bytes(bytes: &[u8; 64]) -> Self {
        Self(*bytes)
    }

    /// Parses a seed from its 128-character hex form.
    pub fn from_hex(s: &str) -> Result<Self, Error> {
        let mut decoded = hex::decode(s.trim()).map_err(|_| Error::InvalidData)?;
        if decoded.len() != 64 {
            decoded.zeroize();
            return Err(Error::InvalidData);
        }
        let mut bytes = [0u8; 64];
        bytes.copy_from_slice(&decoded);
        decoded.zeroize();
        Ok(Self(bytes))
    }

    /// Returns the underlying bytes.
    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }
}

/// Development test seed (BIP39: "abandon abandon ... about").
///
/// WARNING: NEVER use this in production!
#[cfg(feature = "dev-mode")]
pub fn get_dev_seed() -> Seed {
    // Seed for the standard test mnemonic:
    // "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about"
    let seed_bytes: [u8; 64] = [
        0x5e, 0xb0, 0x0b, 0xbd, 0xdc, 0xf0, 0x69, 0x08, 0x48, 0x89, 0xa8, 0xab, 0x91, 0x55, 0x56,
        0x81, 0x65, 0xf5, 0xc4, 0x53, 0xcc, 0xb8, 0x5e, 0x70, 0x81, 0x1a, 0xae, 0xd6, 0xf6, 0xda,
        0x5f, 0xc1, 0x9a, 0x5a, 0xc4, 0x0b, 0x38, 0x9c, 0xd3, 0x70, 0xd0, 0x86, 0x20, 0x6d, 0xec,
        0x8a, 0xa6, 0xc4, 0x3d, 0xae, 0xa6, 0x69, 0x0f, 0x20, 0xad, 0x3d, 0x8d, 0x48, 0xb2, 0xd2,
        0xce, 0x9e, 0x38, 0xe4,
    ];
    Seed::from_bytes(&seed_bytes)
}

// =============================================================================
// SLIP-0010 Derivation
// =============================================================================

/// One node of the SLIP-0010 tree: private key half and chain code.
#[derive(Zeroize, ZeroizeOnDrop)]
struct ExtendedKey {
    key: [u8; 32],
    chain_code: [u8; 32],
}

impl ExtendedKey {
    /// Master node: HMAC-SHA512 over the seed, keyed with the curve name.
    fn master(seed: &[u8]) -> Result<Self, Error> {
        let mut digest = hmac_sha512(MASTER_KEY_DOMAIN, &[seed])?;
        let node = Self::split(&digest);
        digest.zeroize();
        Ok(node)
    }

    /// Hardened child: HMAC-SHA512 over 0x00 || key || index, keyed with
    /// the parent chain code.
    fn child(&self, index: u32) -> Result<Self, Error> {
        let mut digest = hmac_sha512(
            &self.chain_code,
            &[&[0u8], &self.key, &index.to_be_bytes()],
        )?;
        let node = Self::split(&digest);
        digest.zeroize();
        Ok(node)
    }

    fn split(digest: &[u8; 64]) -> Self {
        let mut key = [0u8; 32];
        let mut chain_code = [0u8; 32];
        key.copy_from_slice(&digest[..32]);
        chain_code.copy_from_slice(&digest[32..]);
        Self { key, chain_code }
    }
}

fn hmac_sha512(key: &[u8], parts: &[&[u8]]) -> Result<[u8; 64], Error> {
    let mut mac = HmacSha512::new_from_slice(key).map_err(|_| Error::KeyDerivationFailed)?;
    for part in parts {
        mac.update(part);
    }
    let mut out = [0u8; 64];
    out.copy_from_slice(&mac.finalize().into_bytes());
    Ok(out)
}

/// Derives the ed25519 signing key for a BIP32 path.
///
/// Every component must be hardened; SLIP-0010 has no public derivation
/// for ed25519. Path shape beyond that (depth, 44'/501' prefix) is the
/// caller's concern.
///
/// # Security
///
/// - Intermediate nodes are zeroized as the walk advances
/// - The returned key zeroizes itself on drop
pub fn derive_private_key(seed: &Seed, path: &Bip32Path) -> Result<SigningKey, Error> {
    let mut node = ExtendedKey::master(seed.as_bytes())?;
    for &component in path.as_slice() {
        if component & HARDENED == 0 {
            return Err(Error::InvalidPath);
        }
        node = node.child(component)?;
    }
    Ok(SigningKey::from_bytes(&node.key))
}

/// Returns the 32-byte public key for a signing key. On Solana this is
/// also the account address.
pub fn get_public_key(signing_key: &SigningKey) -> Pubkey {
    signing_key.verifying_key().to_bytes()
}

// =============================================================================
// Signing
// =============================================================================

/// Signs a message with ed25519.
///
/// Solana signs the raw serialized message, not a hash of it; the
/// caller passes the exact bytes that arrived in the request.
pub fn sign_message(signing_key: &SigningKey, message: &[u8]) -> Result<Signature, Error> {
    let sig = signing_key
        .try_sign(message)
        .map_err(|_| Error::SigningFailed)?;
    Ok(Signature::from_bytes(&sig.to_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ed25519_dalek::Verifier;
    use hex_literal::hex;

    // SLIP-0010 ed25519 test vector 1 (16-byte seed).
    const VECTOR1_SEED: [u8; 16] = hex!("000102030405060708090a0b0c0d0e0f");

    // SLIP-0010 ed25519 test vector 2 (64-byte seed).
    const VECTOR2_SEED: [u8; 64] = hex!(
        "fffcf9f6f3f0edeae7e4e1dedbd8d5d2cfccc9c6c3c0bdbab7b4b1aeaba8a5a2"
        "9f9c999693908d8a8784817e7b7875726f6c696663605d5a5754514e4b484542"
    );

    #[test]
    fn test_slip10_vector1_master() {
        let node = ExtendedKey::master(&VECTOR1_SEED).unwrap();
        assert_eq!(
            node.key,
            hex!("2b4be7f19ee27bbf30c667b642d5f4aa69fd169872f8fc3059c08ebae2eb19e7")
        );
        assert_eq!(
            node.chain_code,
            hex!("90046a93de5380a72b5e45010748567d5ea02bbf6522f979e05c0d8d8ca9fffb")
        );
    }

    #[test]
    fn test_slip10_vector1_children() {
        let master = ExtendedKey::master(&VECTOR1_SEED).unwrap();

        // m/0'
        let node = master.child(HARDENED).unwrap();
        assert_eq!(
            node.key,
            hex!("68e0fe46dfb67e368c75379acec591dad19df3cde26e63b93a8e704f1dade7a3")
        );
        let pubkey = get_public_key(&SigningKey::from_bytes(&node.key));
        assert_eq!(
            pubkey,
            hex!("8c8a13df77a28f3445213a0f432fde644acaa215fc72dcdf300d5efaa85d350c")
        );

        // m/0'/1'/2'/2'/1000000000'
        let node = node
            .child(1 | HARDENED)
            .unwrap()
            .child(2 | HARDENED)
            .unwrap()
            .child(2 | HARDENED)
            .unwrap()
            .child(1_000_000_000 | HARDENED)
            .unwrap();
        assert_eq!(
            node.key,
            hex!("8f94d394a8e8fd6b1bc2f3f49f5c47e385281d5c17e65324b0f62483e37e8793")
        );
    }

    #[test]
    fn test_slip10_vector2_through_public_api() {
        // Vector 2's seed is 64 bytes, so it fits the Seed type and the
        // full derivation path goes through derive_private_key.
        let seed = Seed::from_bytes(&VECTOR2_SEED);

        let master = derive_private_key(&seed, &Bip32Path::new()).unwrap();
        assert_eq!(
            master.to_bytes(),
            hex!("171cb88b1b3c1db25add599712e36245d75bc65a1a5c9e18d76f9f2b1eab4012")
        );

        let key = derive_private_key(&seed, &Bip32Path::from_slice(&[HARDENED])).unwrap();
        assert_eq!(
            key.to_bytes(),
            hex!("1559eb2bbec5790b0c65d8693e4d0875b1747f4970ae8b650486ed7470845635")
        );
    }

    #[test]
    fn test_unhardened_component_rejected() {
        let seed = Seed::from_bytes(&VECTOR2_SEED);
        let path = Bip32Path::from_slice(&[44 | HARDENED, 501]);
        assert_eq!(derive_private_key(&seed, &path).err(), Some(Error::InvalidPath));
    }

    #[test]
    fn test_sign_then_verify() {
        let seed = Seed::from_bytes(&VECTOR2_SEED);
        let key = derive_private_key(&seed, &Bip32Path::solana(0)).unwrap();

        let message = b"serialized transaction bytes";
        let sig = sign_message(&key, message).unwrap();

        let dalek_sig = ed25519_dalek::Signature::from_bytes(&sig.to_bytes());
        assert!(key.verifying_key().verify(message, &dalek_sig).is_ok());

        // A different message must not verify.
        assert!(key.verifying_key().verify(b"other bytes", &dalek_sig).is_err());
    }

    #[test]
    fn test_seed_from_hex() {
        let hex_str = hex::encode(VECTOR2_SEED);
        let seed = Seed::from_hex(&hex_str).unwrap();
        assert_eq!(seed.as_bytes(), &VECTOR2_SEED);

        // Whitespace around the digits is tolerated.
        let padded = format!(" {}\n", hex_str);
        assert!(Seed::from_hex(&padded).is_ok());

        assert_eq!(Seed::from_hex("deadbeef").err(), Some(Error::InvalidData));
        assert_eq!(Seed::from_hex("not hex at all").err(), Some(Error::InvalidData));
    }
}

use common::{Bip32Path, Error, Response};

use crate::crypto::{self, Seed};
use crate::display::{self, ReviewStep};
use crate::parsing::{DecodeError, ParsedTransaction};
use crate::platform::Platform;
use crate::state::Settings;

/// Solana packet size bound. Anything larger cannot be a valid
/// transaction, so it is rejected before decoding starts.
pub const MAX_TX_SIZE: usize = 1232;

/// Handles the SignTransaction request.
///
/// The signature is produced over the exact input bytes, and only
/// after the user has approved every review page. Any rejection or
/// decode failure leaves nothing signed.
pub fn handle_sign_transaction<P: Platform>(
    platform: &mut P,
    settings: &Settings,
    seed: &Seed,
    path: &Bip32Path,
    serialized_tx: &[u8],
) -> Result<Response, Error> {
    if !path.is_valid_solana_path() {
        return Err(Error::InvalidPath);
    }

    if serialized_tx.len() > MAX_TX_SIZE {
        log::warn!(
            "transaction rejected: {} bytes exceeds the {} byte bound",
            serialized_tx.len(),
            MAX_TX_SIZE
        );
        return Err(Error::InvalidData);
    }

    let tx = ParsedTransaction::decode(serialized_tx).map_err(|err| {
        log::warn!("transaction rejected: {}", err);
        match err {
            DecodeError::UnsupportedVersion(_) => Error::UnsupportedVersion,
            _ => Error::InvalidData,
        }
    })?;

    let signing_key = crypto::derive_private_key(seed, path)?;
    let signer = crypto::get_public_key(&signing_key);

    if tx.blind_signing {
        if !settings.blind_signing_enabled {
            log::warn!("transaction requires blind signing, which is disabled");
            return Err(Error::BlindSigningDisabled);
        }
        let acknowledged = platform.confirm_action(
            "Blind signing",
            "The transaction contains instructions that cannot be shown for review. \
             Sign at your own risk.",
        )?;
        if !acknowledged {
            return Err(Error::UserRejected);
        }
    }

    for step in display::transaction_review(&tx, &signer, path) {
        let approved = match &step {
            ReviewStep::Notice { title, body } => platform.confirm_action(title, body)?,
            ReviewStep::Pairs { title, pairs, hold } => {
                platform.review_pairs(title, pairs, *hold)?
            }
        };
        if !approved {
            return Err(Error::UserRejected);
        }
    }

    let signature = crypto::sign_message(&signing_key, serialized_tx)?;
    platform.show_info(true, "Transaction signed");
    Ok(Response::Signature(signature))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{MockPlatform, RecordedPage};
    use ed25519_dalek::{Signature as DalekSignature, Verifier, VerifyingKey};

    const FUNDER: [u8; 32] = [0x11; 32];
    const RECIPIENT: [u8; 32] = [0x22; 32];
    const BLOCKHASH: [u8; 32] = [0x33; 32];
    const SYSTEM_PROGRAM: [u8; 32] = [0x00; 32];

    fn varint(mut value: u64) -> Vec<u8> {
        let mut out = Vec::new();
        loop {
            let mut byte = (value & 0x7F) as u8;
            value >>= 7;
            if value != 0 {
                byte |= 0x80;
            }
            out.push(byte);
            if value == 0 {
                return out;
            }
        }
    }

    fn encode_legacy(
        header: [u8; 3],
        addresses: &[[u8; 32]],
        blockhash: [u8; 32],
        instructions: &[(u8, &[u8], &[u8])],
    ) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&header);
        out.extend_from_slice(&varint(addresses.len() as u64));
        for address in addresses {
            out.extend_from_slice(address);
        }
        out.extend_from_slice(&blockhash);
        out.extend_from_slice(&varint(instructions.len() as u64));
        for (program_index, accounts, data) in instructions {
            out.push(*program_index);
            out.extend_from_slice(&varint(accounts.len() as u64));
            out.extend_from_slice(accounts);
            out.extend_from_slice(&varint(data.len() as u64));
            out.extend_from_slice(data);
        }
        out
    }

    fn transfer_tx() -> Vec<u8> {
        let mut data = 2u32.to_le_bytes().to_vec();
        data.extend_from_slice(&1_000_000u64.to_le_bytes());
        encode_legacy(
            [1, 0, 1],
            &[FUNDER, RECIPIENT, SYSTEM_PROGRAM],
            BLOCKHASH,
            &[(2, &[0, 1], &data)],
        )
    }

    fn unknown_instruction_tx() -> Vec<u8> {
        let data = 255u32.to_le_bytes();
        encode_legacy(
            [1, 0, 1],
            &[FUNDER, SYSTEM_PROGRAM],
            BLOCKHASH,
            &[(1, &[0], &data)],
        )
    }

    fn test_seed() -> Seed {
        Seed::from_bytes(&[0x42; 64])
    }

    #[test]
    fn test_sign_transfer_approved() {
        let mut platform = MockPlatform::new();
        let seed = test_seed();
        let path = Bip32Path::solana(0);
        let tx = transfer_tx();

        let response =
            handle_sign_transaction(&mut platform, &Settings::default(), &seed, &path, &tx)
                .unwrap();

        let signature = if let Response::Signature(signature) = response {
            signature
        } else {
            panic!("expected Signature response");
        };

        // The signature must verify over the exact input bytes.
        let signing_key = crypto::derive_private_key(&seed, &path).unwrap();
        let verifying_key = VerifyingKey::from_bytes(&crypto::get_public_key(&signing_key)).unwrap();
        let dalek_signature = DalekSignature::from_bytes(&signature.to_bytes());
        assert!(verifying_key.verify(&tx, &dalek_signature).is_ok());

        // Final hold page, then the success info.
        let pages = platform.pages();
        assert!(matches!(
            &pages[pages.len() - 2],
            RecordedPage::Pairs { title, hold: true, .. } if title == "Confirm transaction"
        ));
        assert_eq!(
            pages[pages.len() - 1],
            RecordedPage::Info {
                success: true,
                message: "Transaction signed".to_string(),
            }
        );
    }

    #[test]
    fn test_rejection_returns_user_rejected() {
        let mut platform = MockPlatform::rejecting();
        let seed = test_seed();
        let path = Bip32Path::solana(0);

        let result = handle_sign_transaction(
            &mut platform,
            &Settings::default(),
            &seed,
            &path,
            &transfer_tx(),
        );
        assert_eq!(result, Err(Error::UserRejected));
    }

    #[test]
    fn test_invalid_path() {
        let mut platform = MockPlatform::new();
        let path = Bip32Path::from_slice(&[common::HARDENED | 44]);

        let result = handle_sign_transaction(
            &mut platform,
            &Settings::default(),
            &test_seed(),
            &path,
            &transfer_tx(),
        );
        assert_eq!(result, Err(Error::InvalidPath));
        assert!(platform.pages().is_empty());
    }

    #[test]
    fn test_oversized_transaction() {
        let mut platform = MockPlatform::new();
        let path = Bip32Path::solana(0);

        let result = handle_sign_transaction(
            &mut platform,
            &Settings::default(),
            &test_seed(),
            &path,
            &vec![0u8; MAX_TX_SIZE + 1],
        );
        assert_eq!(result, Err(Error::InvalidData));
    }

    #[test]
    fn test_versioned_transaction_rejected() {
        let mut platform = MockPlatform::new();
        let path = Bip32Path::solana(0);
        let mut tx = transfer_tx();
        tx.insert(0, 0x80);

        let result = handle_sign_transaction(
            &mut platform,
            &Settings::default(),
            &test_seed(),
            &path,
            &tx,
        );
        assert_eq!(result, Err(Error::UnsupportedVersion));
    }

    #[test]
    fn test_malformed_transaction_rejected() {
        let mut platform = MockPlatform::new();
        let path = Bip32Path::solana(0);
        let mut tx = transfer_tx();
        tx.push(0x00);

        let result = handle_sign_transaction(
            &mut platform,
            &Settings::default(),
            &test_seed(),
            &path,
            &tx,
        );
        assert_eq!(result, Err(Error::InvalidData));
    }

    #[test]
    fn test_blind_signing_disabled() {
        let mut platform = MockPlatform::new();
        let path = Bip32Path::solana(0);

        let result = handle_sign_transaction(
            &mut platform,
            &Settings::default(),
            &test_seed(),
            &path,
            &unknown_instruction_tx(),
        );
        assert_eq!(result, Err(Error::BlindSigningDisabled));
        assert!(platform.pages().is_empty());
    }

    #[test]
    fn test_blind_signing_enabled_asks_first() {
        let mut platform = MockPlatform::new();
        let path = Bip32Path::solana(0);
        let settings = Settings {
            blind_signing_enabled: true,
        };

        let response = handle_sign_transaction(
            &mut platform,
            &settings,
            &test_seed(),
            &path,
            &unknown_instruction_tx(),
        )
        .unwrap();
        assert!(matches!(response, Response::Signature(_)));

        assert!(matches!(
            &platform.pages()[0],
            RecordedPage::Action { title, .. } if title == "Blind signing"
        ));
    }
}

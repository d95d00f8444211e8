use common::{Bip32Path, Error, Pubkey, Response};

use crate::crypto::{self, Seed};
use crate::display::format_pubkey;
use crate::platform::Platform;

/// Handles the GetPublicKey request.
///
/// With `confirm` set, the key is shown on screen (hex) and the user
/// must approve before it is released to the host.
pub fn handle_get_public_key<P: Platform>(
    platform: &mut P,
    seed: &Seed,
    path: &Bip32Path,
    confirm: bool,
) -> Result<Response, Error> {
    let pubkey = derive_pubkey(seed, path)?;

    if confirm {
        let pairs = [("Public key:".to_string(), hex::encode(pubkey))];
        if !platform.review_pairs("Confirm public key", &pairs, false)? {
            return Err(Error::UserRejected);
        }
    }

    Ok(Response::PublicKey(pubkey))
}

/// Handles the GetAddress request. The address is the base58 form of
/// the derived public key.
pub fn handle_get_address<P: Platform>(
    platform: &mut P,
    seed: &Seed,
    path: &Bip32Path,
    confirm: bool,
) -> Result<Response, Error> {
    let pubkey = derive_pubkey(seed, path)?;
    let address = format_pubkey(&pubkey);

    if confirm {
        let pairs = [
            ("Address:".to_string(), address.clone()),
            ("Derivation path:".to_string(), path.to_string()),
        ];
        if !platform.review_pairs("Confirm address", &pairs, false)? {
            return Err(Error::UserRejected);
        }
    }

    Ok(Response::Address(address))
}

fn derive_pubkey(seed: &Seed, path: &Bip32Path) -> Result<Pubkey, Error> {
    if !path.is_valid_solana_path() {
        return Err(Error::InvalidPath);
    }
    let signing_key = crypto::derive_private_key(seed, path)?;
    Ok(crypto::get_public_key(&signing_key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{MockPlatform, RecordedPage};
    use common::HARDENED;

    fn test_seed() -> Seed {
        Seed::from_bytes(&[0x42; 64])
    }

    #[test]
    fn test_get_public_key_without_confirmation() {
        let mut platform = MockPlatform::new();
        let seed = test_seed();
        let path = Bip32Path::solana(0);

        let response = handle_get_public_key(&mut platform, &seed, &path, false).unwrap();

        let signing_key = crypto::derive_private_key(&seed, &path).unwrap();
        let expected = crypto::get_public_key(&signing_key);
        assert_eq!(response, Response::PublicKey(expected));
        assert!(platform.pages().is_empty());
    }

    #[test]
    fn test_get_address_confirmation_page() {
        let mut platform = MockPlatform::new();
        let seed = test_seed();
        let path = Bip32Path::solana(3);

        let response = handle_get_address(&mut platform, &seed, &path, true).unwrap();

        let signing_key = crypto::derive_private_key(&seed, &path).unwrap();
        let address = format_pubkey(&crypto::get_public_key(&signing_key));
        assert_eq!(response, Response::Address(address.clone()));

        assert_eq!(
            platform.pages(),
            &[RecordedPage::Pairs {
                title: "Confirm address".to_string(),
                pairs: vec![
                    ("Address:".to_string(), address),
                    ("Derivation path:".to_string(), "m/44'/501'/0'/3'".to_string()),
                ],
                hold: false,
            }]
        );
    }

    #[test]
    fn test_invalid_path_rejected() {
        let mut platform = MockPlatform::new();
        let seed = test_seed();

        // Wrong coin type.
        let path = Bip32Path::from_slice(&[HARDENED | 44, HARDENED | 60, HARDENED]);
        let result = handle_get_public_key(&mut platform, &seed, &path, false);
        assert_eq!(result, Err(Error::InvalidPath));

        // Too short.
        let path = Bip32Path::from_slice(&[HARDENED | 44]);
        let result = handle_get_address(&mut platform, &seed, &path, false);
        assert_eq!(result, Err(Error::InvalidPath));

        assert!(platform.pages().is_empty());
    }

    #[test]
    fn test_user_rejection() {
        let mut platform = MockPlatform::rejecting();
        let seed = test_seed();
        let path = Bip32Path::solana(0);

        let result = handle_get_address(&mut platform, &seed, &path, true);
        assert_eq!(result, Err(Error::UserRejected));
    }
}

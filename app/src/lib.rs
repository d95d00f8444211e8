//! Solana transaction signing service.
//!
//! The service holds the wallet seed and exposes a small request
//! protocol: report configuration, derive public keys and addresses,
//! and sign transactions after on-screen review. Transactions are
//! decoded by [`parsing`], rendered for confirmation by [`display`],
//! and signed only after the user approves every page.
//!
//! # Security Model
//!
//! - All input arrives from an untrusted host and is validated before
//!   use; decode failures abort the request with nothing signed.
//! - The signature covers the exact bytes received. The service never
//!   re-serializes a transaction.
//! - Instructions the registry does not recognize require the
//!   blind-signing setting plus an explicit acknowledgment.

pub mod crypto;
pub mod display;
pub mod handlers;
pub mod parsing;
pub mod platform;
pub mod state;

use common::{Error, Request, Response};

use crate::crypto::Seed;
use crate::platform::Platform;
use crate::state::Settings;

/// The signing service: seed, settings, and the interaction surface.
pub struct SolanaApp<P: Platform> {
    platform: P,
    settings: Settings,
    seed: Seed,
    exit_requested: bool,
}

impl<P: Platform> SolanaApp<P> {
    pub fn new(platform: P, seed: Seed) -> Self {
        Self {
            platform,
            settings: Settings::default(),
            seed,
            exit_requested: false,
        }
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// True once an Exit request has been handled. The service loop
    /// closes the connection without sending a response.
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// Dispatches one request. `None` means the request produces no
    /// response (Exit).
    pub fn handle_request(&mut self, request: Request) -> Option<Response> {
        let result = match request {
            Request::GetAppConfiguration => {
                Ok(handlers::handle_get_app_configuration(&self.settings))
            }
            Request::GetPublicKey { path, confirm } => {
                handlers::handle_get_public_key(&mut self.platform, &self.seed, &path, confirm)
            }
            Request::GetAddress { path, confirm } => {
                handlers::handle_get_address(&mut self.platform, &self.seed, &path, confirm)
            }
            Request::SignTransaction {
                path,
                serialized_tx,
            } => handlers::handle_sign_transaction(
                &mut self.platform,
                &self.settings,
                &self.seed,
                &path,
                &serialized_tx,
            ),
            Request::Exit => {
                self.exit_requested = true;
                return None;
            }
        };
        Some(result.unwrap_or_else(Response::error))
    }

    /// Decodes one raw message, dispatches it, and encodes the
    /// response. `None` means close the connection without responding.
    pub fn process_message(&mut self, raw: &[u8]) -> Option<Vec<u8>> {
        let request: Request = match postcard::from_bytes(raw) {
            Ok(request) => request,
            Err(_) => {
                log::warn!("received undecodable message ({} bytes)", raw.len());
                return Some(encode_response(&Response::Error(Error::InvalidData)));
            }
        };
        let response = self.handle_request(request)?;
        Some(encode_response(&response))
    }
}

fn encode_response(response: &Response) -> Vec<u8> {
    postcard::to_allocvec(response).unwrap_or_else(|_| {
        postcard::to_allocvec(&Response::Error(Error::InternalError)).unwrap_or_default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MockPlatform;

    fn test_app() -> SolanaApp<MockPlatform> {
        SolanaApp::new(MockPlatform::new(), Seed::from_bytes(&[0x42; 64]))
    }

    #[test]
    fn test_process_message_config() {
        let mut app = test_app();
        let raw = postcard::to_allocvec(&Request::GetAppConfiguration).unwrap();

        let reply = app.process_message(&raw).unwrap();
        let response: Response = postcard::from_bytes(&reply).unwrap();

        if let Response::AppConfiguration(config) = response {
            assert!(!config.blind_signing_enabled);
        } else {
            panic!("expected AppConfiguration response");
        }
    }

    #[test]
    fn test_process_message_garbage() {
        let mut app = test_app();

        let reply = app.process_message(&[0xFF, 0xFF, 0xFF]).unwrap();
        let response: Response = postcard::from_bytes(&reply).unwrap();
        assert_eq!(response, Response::Error(Error::InvalidData));
    }

    #[test]
    fn test_exit_closes_without_response() {
        let mut app = test_app();
        let raw = postcard::to_allocvec(&Request::Exit).unwrap();

        assert!(app.process_message(&raw).is_none());
        assert!(app.exit_requested());
    }

    #[test]
    fn test_handler_error_becomes_error_response() {
        let mut app = test_app();
        let raw = postcard::to_allocvec(&Request::SignTransaction {
            path: common::Bip32Path::solana(0),
            serialized_tx: vec![0x80],
        })
        .unwrap();

        let reply = app.process_message(&raw).unwrap();
        let response: Response = postcard::from_bytes(&reply).unwrap();
        assert_eq!(response, Response::Error(Error::UnsupportedVersion));
    }
}

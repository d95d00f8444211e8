//! Request handlers, one per protocol command.

mod config;
mod get_pubkey;
mod sign_tx;

pub use config::handle_get_app_configuration;
pub use get_pubkey::{handle_get_address, handle_get_public_key};
pub use sign_tx::{handle_sign_transaction, MAX_TX_SIZE};

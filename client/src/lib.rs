//! Solana Signing Service Client Library.
//!
//! This library provides a high-level interface for communicating with
//! the Solana signing service over its framed TCP protocol.
//!
//! # Example
//!
//! ```no_run
//! use vnd_solana_client::{SolanaClient, TcpTransport};
//!
//! #[tokio::main]
//! async fn main() {
//!     let transport = TcpTransport::connect("127.0.0.1:9999".parse().unwrap())
//!         .await
//!         .unwrap();
//!     let mut client = SolanaClient::new(Box::new(transport));
//!
//!     // Get app configuration
//!     let config = client.get_app_configuration().await.unwrap();
//!     println!(
//!         "Version: {}.{}.{}",
//!         config.version_major, config.version_minor, config.version_patch
//!     );
//! }
//! ```

mod client;

pub use client::{
    parse_derivation_path, SolanaClient, SolanaClientError, TcpTransport, Transport,
    TransportError,
};

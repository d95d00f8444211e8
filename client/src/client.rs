//! Solana signing service client implementation.
//!
//! Provides async methods for all service commands.

use std::fmt;
use std::net::SocketAddr;

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use common::error::Error as AppError;
use common::message::{Request, Response};
use common::types::{AppConfiguration, Bip32Path, Signature};

/// Upper bound on a response frame. Responses are tiny; anything near
/// this is not the service speaking our protocol.
const MAX_FRAME_SIZE: usize = 65536;

/// Transport-level failure.
#[derive(Debug)]
pub enum TransportError {
    /// The service closed the connection.
    ConnectionClosed,
    /// Socket error.
    Io(std::io::Error),
    /// The service announced a frame larger than the protocol allows.
    FrameTooLarge(usize),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::ConnectionClosed => write!(f, "connection closed by the service"),
            TransportError::Io(e) => write!(f, "socket error: {}", e),
            TransportError::FrameTooLarge(len) => write!(f, "frame of {} bytes announced", len),
        }
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TransportError::Io(e) => Some(e),
            _ => None,
        }
    }
}

/// Byte-level request/response exchange with the service.
#[async_trait]
pub trait Transport {
    async fn exchange(&mut self, request: &[u8]) -> Result<Vec<u8>, TransportError>;
}

/// TCP transport using 4-byte big-endian length-prefixed frames.
pub struct TcpTransport {
    stream: TcpStream,
}

impl TcpTransport {
    /// Connects to the service at the given address.
    pub async fn connect(addr: SocketAddr) -> Result<Self, TransportError> {
        let stream = TcpStream::connect(addr)
            .await
            .map_err(TransportError::Io)?;
        Ok(Self { stream })
    }
}

#[async_trait]
impl Transport for TcpTransport {
    async fn exchange(&mut self, request: &[u8]) -> Result<Vec<u8>, TransportError> {
        let mut frame = vec![0u8; request.len() + 4];
        frame[..4].copy_from_slice(&(request.len() as u32).to_be_bytes());
        frame[4..].copy_from_slice(request);
        self.stream
            .write_all(&frame)
            .await
            .map_err(TransportError::Io)?;

        let mut len_buf = [0u8; 4];
        match self.stream.read_exact(&mut len_buf).await {
            Ok(_) => {}
            Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                return Err(TransportError::ConnectionClosed)
            }
            Err(e) => return Err(TransportError::Io(e)),
        }

        let len = u32::from_be_bytes(len_buf) as usize;
        if len > MAX_FRAME_SIZE {
            return Err(TransportError::FrameTooLarge(len));
        }

        let mut response = vec![0u8; len];
        self.stream
            .read_exact(&mut response)
            .await
            .map_err(TransportError::Io)?;
        Ok(response)
    }
}

/// Errors that can occur when using the Solana client.
#[derive(Debug)]
pub enum SolanaClientError {
    /// Error exchanging bytes with the service.
    TransportError(TransportError),
    /// Service returned an error response.
    AppError(AppError),
    /// Service response was an unexpected type.
    InvalidResponse(String),
    /// Generic error.
    GenericError(String),
}

impl From<TransportError> for SolanaClientError {
    fn from(e: TransportError) -> Self {
        Self::TransportError(e)
    }
}

impl From<&'static str> for SolanaClientError {
    fn from(e: &'static str) -> Self {
        Self::GenericError(e.to_string())
    }
}

impl From<String> for SolanaClientError {
    fn from(e: String) -> Self {
        Self::GenericError(e)
    }
}

impl fmt::Display for SolanaClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolanaClientError::TransportError(e) => write!(f, "TransportError: {}", e),
            SolanaClientError::AppError(e) => write!(f, "AppError: {}", e),
            SolanaClientError::InvalidResponse(e) => write!(f, "InvalidResponse: {}", e),
            SolanaClientError::GenericError(e) => write!(f, "GenericError: {}", e),
        }
    }
}

impl std::error::Error for SolanaClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SolanaClientError::TransportError(e) => Some(e),
            _ => None,
        }
    }
}

/// Solana signing service client.
pub struct SolanaClient {
    transport: Box<dyn Transport + Send>,
}

impl SolanaClient {
    /// Creates a new Solana client with the given transport.
    pub fn new(transport: Box<dyn Transport + Send>) -> Self {
        Self { transport }
    }

    /// Sends a message to the service and receives the response.
    async fn send_message(&mut self, out: &[u8]) -> Result<Vec<u8>, SolanaClientError> {
        self.transport
            .exchange(out)
            .await
            .map_err(SolanaClientError::from)
    }

    /// Parses a response from the service.
    fn parse_response(response_raw: &[u8]) -> Result<Response, SolanaClientError> {
        let resp: Response = postcard::from_bytes(response_raw).map_err(|_| {
            SolanaClientError::GenericError("Failed to parse response".to_string())
        })?;

        if let Response::Error(e) = resp {
            return Err(SolanaClientError::AppError(e));
        }

        Ok(resp)
    }

    /// Exits the service. The service acknowledges by closing the
    /// connection without a response.
    pub async fn exit(&mut self) -> Result<(), SolanaClientError> {
        let msg = postcard::to_allocvec(&Request::Exit)
            .map_err(|_| SolanaClientError::GenericError("Failed to serialize Exit".to_string()))?;

        match self.send_message(&msg).await {
            Ok(_) => Err(SolanaClientError::GenericError(
                "exit shouldn't return a response".to_string(),
            )),
            Err(SolanaClientError::TransportError(TransportError::ConnectionClosed)) => Ok(()),
            Err(e) => Err(e),
        }
    }

    /// Gets the app configuration and version.
    pub async fn get_app_configuration(&mut self) -> Result<AppConfiguration, SolanaClientError> {
        let msg = postcard::to_allocvec(&Request::GetAppConfiguration).map_err(|_| {
            SolanaClientError::GenericError("Failed to serialize GetAppConfiguration".to_string())
        })?;

        let response_raw = self.send_message(&msg).await?;
        match Self::parse_response(&response_raw)? {
            Response::AppConfiguration(config) => Ok(config),
            e => Err(SolanaClientError::InvalidResponse(format!(
                "Invalid response: {:?}",
                e
            ))),
        }
    }

    /// Gets the ed25519 public key for a derivation path.
    ///
    /// # Arguments
    /// * `path` - BIP32 derivation path (e.g., "m/44'/501'/0'/0'")
    /// * `confirm` - Require on-device confirmation before returning
    pub async fn get_public_key(
        &mut self,
        path: &[u32],
        confirm: bool,
    ) -> Result<[u8; 32], SolanaClientError> {
        let msg = postcard::to_allocvec(&Request::GetPublicKey {
            path: Bip32Path::from_slice(path),
            confirm,
        })
        .map_err(|_| {
            SolanaClientError::GenericError("Failed to serialize GetPublicKey".to_string())
        })?;

        let response_raw = self.send_message(&msg).await?;
        match Self::parse_response(&response_raw)? {
            Response::PublicKey(pubkey) => Ok(pubkey),
            e => Err(SolanaClientError::InvalidResponse(format!(
                "Invalid response: {:?}",
                e
            ))),
        }
    }

    /// Gets the base58 account address for a derivation path.
    pub async fn get_address(
        &mut self,
        path: &[u32],
        confirm: bool,
    ) -> Result<String, SolanaClientError> {
        let msg = postcard::to_allocvec(&Request::GetAddress {
            path: Bip32Path::from_slice(path),
            confirm,
        })
        .map_err(|_| {
            SolanaClientError::GenericError("Failed to serialize GetAddress".to_string())
        })?;

        let response_raw = self.send_message(&msg).await?;
        match Self::parse_response(&response_raw)? {
            Response::Address(address) => Ok(address),
            e => Err(SolanaClientError::InvalidResponse(format!(
                "Invalid response: {:?}",
                e
            ))),
        }
    }

    /// Signs a serialized Solana transaction.
    ///
    /// # Arguments
    /// * `path` - BIP32 derivation path for the signing key
    /// * `serialized_tx` - Serialized transaction message bytes
    pub async fn sign_transaction(
        &mut self,
        path: &[u32],
        serialized_tx: &[u8],
    ) -> Result<Signature, SolanaClientError> {
        let msg = postcard::to_allocvec(&Request::SignTransaction {
            path: Bip32Path::from_slice(path),
            serialized_tx: serialized_tx.to_vec(),
        })
        .map_err(|_| {
            SolanaClientError::GenericError("Failed to serialize SignTransaction".to_string())
        })?;

        let response_raw = self.send_message(&msg).await?;
        match Self::parse_response(&response_raw)? {
            Response::Signature(sig) => Ok(sig),
            e => Err(SolanaClientError::InvalidResponse(format!(
                "Invalid response: {:?}",
                e
            ))),
        }
    }
}

/// Parses a derivation path string into u32 array.
///
/// # Arguments
/// * `path` - Path string like "m/44'/501'/0'/0'"
///
/// # Returns
/// Vector of u32 path components with hardened flag.
pub fn parse_derivation_path(path: &str) -> Result<Vec<u32>, String> {
    let mut components = path.split('/').collect::<Vec<&str>>();

    // Remove "m" prefix if present
    if let Some(first) = components.first() {
        if *first == "m" {
            components.remove(0);
        }
    }

    let mut indices = Vec::new();
    for comp in components {
        let hardened = comp.ends_with('\'') || comp.ends_with('h');
        let raw_index = if hardened {
            &comp[..comp.len() - 1]
        } else {
            comp
        };

        let index: u32 = raw_index
            .parse()
            .map_err(|e| format!("Invalid index '{}': {}", comp, e))?;

        let child_number = if hardened {
            0x80000000u32
                .checked_add(index)
                .ok_or_else(|| format!("Index overflow for '{}'", comp))?
        } else {
            index
        };

        indices.push(child_number);
    }

    Ok(indices)
}

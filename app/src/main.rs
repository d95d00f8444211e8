//! Solana signing service binary.
//!
//! Listens on a TCP socket and serves the request protocol over
//! 4-byte big-endian length-prefixed postcard frames. Review pages are
//! rendered on the console.
//!
//! # Configuration (environment)
//!
//! - `VND_SOLANA_SEED`: 64-byte wallet seed, hex encoded. With the
//!   `dev-mode` feature the standard test seed is used as a fallback.
//! - `VND_SOLANA_BLIND_SIGNING`: set to `1` to allow signing
//!   transactions with unverifiable instructions.
//! - `VND_SOLANA_LISTEN`: listen address, default `127.0.0.1:9999`.

use std::io::{self, Read, Write};
use std::net::{TcpListener, TcpStream};

use vnd_solana::crypto::Seed;
use vnd_solana::platform::{ConsolePlatform, Platform};
use vnd_solana::SolanaApp;

const DEFAULT_LISTEN: &str = "127.0.0.1:9999";

/// Upper bound on a request frame. Transactions are at most 1232
/// bytes, so anything near this is garbage.
const MAX_FRAME_SIZE: usize = 65536;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let seed = load_seed()?;
    let mut app = SolanaApp::new(ConsolePlatform::new(), seed);

    if env_flag("VND_SOLANA_BLIND_SIGNING") {
        app.settings_mut().blind_signing_enabled = true;
        log::warn!("blind signing enabled");
    }

    let listen =
        std::env::var("VND_SOLANA_LISTEN").unwrap_or_else(|_| DEFAULT_LISTEN.to_string());
    let listener = TcpListener::bind(&listen)?;
    log::info!("listening on {}", listen);

    for stream in listener.incoming() {
        match stream {
            Ok(mut stream) => {
                if let Err(err) = serve_connection(&mut app, &mut stream) {
                    log::warn!("connection error: {}", err);
                }
            }
            Err(err) => log::warn!("accept failed: {}", err),
        }
        if app.exit_requested() {
            log::info!("exit requested, shutting down");
            break;
        }
    }

    Ok(())
}

fn load_seed() -> Result<Seed, Box<dyn std::error::Error>> {
    match std::env::var("VND_SOLANA_SEED") {
        Ok(hex_seed) => {
            Seed::from_hex(&hex_seed).map_err(|err| format!("invalid VND_SOLANA_SEED: {}", err).into())
        }
        #[cfg(feature = "dev-mode")]
        Err(_) => {
            log::warn!("VND_SOLANA_SEED not set, falling back to the development seed");
            Ok(vnd_solana::crypto::get_dev_seed())
        }
        #[cfg(not(feature = "dev-mode"))]
        Err(_) => Err("VND_SOLANA_SEED is not set".into()),
    }
}

fn env_flag(name: &str) -> bool {
    matches!(std::env::var(name).as_deref(), Ok("1") | Ok("true"))
}

/// Serves one client connection until EOF or an Exit request.
fn serve_connection<P: Platform>(
    app: &mut SolanaApp<P>,
    stream: &mut TcpStream,
) -> io::Result<()> {
    if let Ok(peer) = stream.peer_addr() {
        log::info!("client connected from {}", peer);
    }

    while let Some(frame) = read_frame(stream)? {
        match app.process_message(&frame) {
            Some(reply) => write_frame(stream, &reply)?,
            // Exit: close without responding.
            None => break,
        }
    }

    log::info!("client disconnected");
    Ok(())
}

fn read_frame(stream: &mut TcpStream) -> io::Result<Option<Vec<u8>>> {
    let mut len_buf = [0u8; 4];
    match stream.read_exact(&mut len_buf) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => return Ok(None),
        Err(err) => return Err(err),
    }

    let len = u32::from_be_bytes(len_buf) as usize;
    if len > MAX_FRAME_SIZE {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "frame too large",
        ));
    }

    let mut frame = vec![0u8; len];
    stream.read_exact(&mut frame)?;
    Ok(Some(frame))
}

fn write_frame(stream: &mut TcpStream, payload: &[u8]) -> io::Result<()> {
    stream.write_all(&(payload.len() as u32).to_be_bytes())?;
    stream.write_all(payload)
}

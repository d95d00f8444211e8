//! Solana signing service CLI.
//!
//! Interactive command line for the Solana signing service.
//!
//! # Usage
//!
//! ```bash
//! # Connect to the service on the default address
//! vnd_solana_cli
//!
//! # Connect elsewhere
//! vnd_solana_cli --address 127.0.0.1:4001
//! ```

use clap::{CommandFactory, Parser, Subcommand};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::Hinter;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Context, Editor, Helper};

use std::borrow::Cow;
use std::net::SocketAddr;

use vnd_solana_client::{parse_derivation_path, SolanaClient, SolanaClientError, TcpTransport};

#[derive(Parser, Debug)]
#[command(name = "vnd-solana-cli")]
struct Cli {
    #[clap(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand, Debug)]
#[clap(rename_all = "snake_case")]
enum CliCommand {
    /// Get app configuration and version
    GetConfig,
    /// Get the ed25519 public key for a derivation path
    GetPubkey {
        #[clap(long)]
        path: String,
        #[clap(long)]
        confirm: bool,
    },
    /// Get the base58 account address for a derivation path
    GetAddress {
        #[clap(long)]
        path: String,
        #[clap(long)]
        confirm: bool,
    },
    /// Sign a serialized transaction
    SignTx {
        #[clap(long)]
        path: String,
        #[clap(long)]
        tx_hex: String,
    },
}

// Command completer for REPL
struct CommandCompleter;

impl CommandCompleter {
    fn get_current_word<'a>(&self, line: &'a str, pos: usize) -> (usize, &'a str) {
        let before = &line[..pos];
        let start = before.rfind(' ').map_or(0, |i| i + 1);
        (start, &line[start..pos])
    }
}

fn make_pair(s: &str) -> Pair {
    Pair {
        display: s.to_string(),
        replacement: s.to_string(),
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = line[..pos].trim_start();

        if prefix.is_empty() || !prefix.contains(' ') {
            let suggestions = Cli::command()
                .get_subcommands()
                .filter(|cmd| cmd.get_name().starts_with(prefix))
                .map(|cmd| make_pair(cmd.get_name()))
                .collect();
            return Ok((0, suggestions));
        }

        let subcmd_name = prefix.split_whitespace().next().unwrap();
        if let Some(subcmd) = Cli::command().find_subcommand(subcmd_name) {
            let (start, _) = self.get_current_word(line, pos);

            let Ok(present_args) = shellwords::split(line[..start].trim_end()) else {
                return Ok((0, vec![]));
            };

            let present_args: Vec<String> = present_args
                .into_iter()
                .map(|arg| arg.split('=').next().unwrap().to_string())
                .collect();

            let suggestions = subcmd
                .get_arguments()
                .filter_map(|arg| arg.get_long().map(|l| l.to_string()))
                .filter(|arg| !present_args.contains(arg))
                .map(|arg| Pair {
                    display: arg.clone(),
                    replacement: arg,
                })
                .collect();
            return Ok((start, suggestions));
        }

        Ok((0, vec![]))
    }
}

impl Validator for CommandCompleter {
    fn validate(
        &self,
        _ctx: &mut ValidationContext<'_>,
    ) -> Result<ValidationResult, ReadlineError> {
        Ok(ValidationResult::Valid(None))
    }
}

impl Highlighter for CommandCompleter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Borrowed(line)
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _cmd_kind: CmdKind) -> bool {
        false
    }
}

impl Hinter for CommandCompleter {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Helper for CommandCompleter {}

#[derive(Parser)]
#[command(name = "Solana Signer", about = "Talk to the Solana signing service")]
struct Args {
    /// Address of the signing service
    #[arg(long, default_value = "127.0.0.1:9999")]
    address: SocketAddr,
}

fn prepare_prompt_for_clap(line: &str) -> Result<Vec<String>, String> {
    let args = shellwords::split(line).map_err(|e| format!("Failed to parse input: {}", e))?;
    if args.is_empty() {
        return Err("Empty input".to_string());
    }

    let mut clap_args = vec!["dummy".to_string(), args[0].clone()];

    for arg in &args[1..] {
        clap_args.push(format!("--{}", arg));
    }
    Ok(clap_args)
}

fn parse_hex(s: &str) -> Result<Vec<u8>, String> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    hex::decode(s).map_err(|e| format!("Invalid hex: {}", e))
}

async fn handle_cli_command(
    solana_client: &mut SolanaClient,
    cli: &Cli,
) -> Result<(), SolanaClientError> {
    match &cli.command {
        CliCommand::GetConfig => {
            let config = solana_client.get_app_configuration().await?;
            println!(
                "Version: {}.{}.{}",
                config.version_major, config.version_minor, config.version_patch
            );
            println!("Blind signing: {}", config.blind_signing_enabled);
        }
        CliCommand::GetPubkey { path, confirm } => {
            let path = parse_derivation_path(path)?;
            let pubkey = solana_client.get_public_key(&path, *confirm).await?;
            println!("Public key: 0x{}", hex::encode(pubkey));
        }
        CliCommand::GetAddress { path, confirm } => {
            let path = parse_derivation_path(path)?;
            let address = solana_client.get_address(&path, *confirm).await?;
            println!("Address: {}", address);
        }
        CliCommand::SignTx { path, tx_hex } => {
            let path = parse_derivation_path(path)?;
            let tx_data = parse_hex(tx_hex)?;
            let sig = solana_client.sign_transaction(&path, &tx_data).await?;
            println!("Signature: 0x{}", hex::encode(sig.to_bytes()));
        }
    }
    Ok(())
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "debug")]
    {
        let log_file = std::fs::File::create("debug.log")?;
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .init();
    }

    let args = Args::parse();

    let transport = TcpTransport::connect(args.address).await?;
    let mut solana_client = SolanaClient::new(Box::new(transport));

    let mut rl = Editor::<CommandCompleter, rustyline::history::DefaultHistory>::new()?;
    rl.set_helper(Some(CommandCompleter));

    let _ = rl.load_history("solana_history.txt");

    let mut with_unrecoverable_error = false;
    loop {
        match rl.readline("SOL> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }

                if line.trim() == "exit" {
                    println!("Exiting");
                    break;
                }

                rl.add_history_entry(line.as_str())?;

                let clap_args = match prepare_prompt_for_clap(&line) {
                    Ok(args) => args,
                    Err(e) => {
                        println!("Error: {}", e);
                        continue;
                    }
                };

                match Cli::try_parse_from(clap_args) {
                    Ok(cli) => match handle_cli_command(&mut solana_client, &cli).await {
                        Ok(_) => {}
                        Err(SolanaClientError::AppError(e)) => {
                            println!("Service error: {}", e);
                        }
                        Err(e) => {
                            println!("Fatal error: {}", e);
                            with_unrecoverable_error = true;
                            break;
                        }
                    },
                    Err(e) => println!("Invalid command: {}", e),
                }
            }
            Err(ReadlineError::Interrupted) => println!("Interrupted"),
            Err(ReadlineError::Eof) => {
                println!("Exiting");
                break;
            }
            Err(err) => {
                println!("Error reading line: {:?}", err);
                continue;
            }
        }
    }

    rl.save_history("solana_history.txt")?;

    if !with_unrecoverable_error {
        solana_client.exit().await?;
    }

    Ok(())
}

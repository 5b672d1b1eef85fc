// src/main.rs

use clap::{Parser, Subcommand};
use inferno_devnet::core::devnet_mining::{PendingTransaction, CHANNEL_CAPACITY};
use inferno_devnet::core::devnet_config::MIN_BLOCK_GAS_LIMIT;
use inferno_devnet::{env_lines, initialize_core, start_devnet, BlockCadence, DevnetError};
use std::path::PathBuf;
use tokio::sync::mpsc;

#[derive(Parser, Debug)]
#[command(name = "inferno-devnet", version, about = "Load, validate and use development network profiles")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate every network profile in a config file
    Validate {
        config: PathBuf,
        #[arg(long, env = "DEVNET_NETWORK")]
        network: Option<String>,
    },
    /// Print the resolved active profile as JSON
    Show {
        config: PathBuf,
        #[arg(long, env = "DEVNET_NETWORK")]
        network: Option<String>,
    },
    /// List the deterministic test accounts of the active profile
    Accounts {
        config: PathBuf,
        #[arg(long, env = "DEVNET_NETWORK")]
        network: Option<String>,
        #[arg(long)]
        show_keys: bool,
        #[arg(long)]
        json: bool,
        /// Print `<PREFIX>_PK=` / `<PREFIX>_ADDRESS=` lines for a `.env` file
        #[arg(long, value_name = "PREFIX", conflicts_with = "json")]
        env: Option<String>,
    },
    /// Run the block cadence of the active profile for a number of blocks
    Mine {
        config: PathBuf,
        #[arg(long, env = "DEVNET_NETWORK")]
        network: Option<String>,
        #[arg(long, default_value_t = 3)]
        blocks: u64,
    },
}

async fn run(cli: Cli) -> Result<(), DevnetError> {
    match cli.command {
        Command::Validate { config, network } => {
            let active = initialize_core(&config, network.as_deref())?;
            let profile = active.profile();
            println!(
                "OK: {} | active {} (chainId {}, hardfork {}, {} accounts)",
                active.config(),
                active.name(),
                profile.chain_id,
                profile.hardfork,
                profile.accounts.count
            );
        }
        Command::Show { config, network } => {
            let active = initialize_core(&config, network.as_deref())?;
            let rendered = serde_json::to_string_pretty(active.profile())?;
            println!("{}", rendered);
        }
        Command::Accounts { config, network, show_keys, json, env } => {
            let (_active, mut accounts) = start_devnet(&config, network.as_deref())?;
            if let Some(prefix) = env {
                for line in env_lines(&prefix, &accounts) {
                    println!("{}", line);
                }
                return Ok(());
            }
            if !show_keys {
                for account in &mut accounts {
                    account.private_key.clear();
                }
            }
            if json {
                println!("{}", serde_json::to_string_pretty(&accounts)?);
            } else {
                for account in &accounts {
                    if show_keys {
                        println!("{:>4}  {}  {} wei  {}", account.index, account.address, account.balance, account.private_key);
                    } else {
                        println!("{:>4}  {}  {} wei", account.index, account.address, account.balance);
                    }
                }
            }
        }
        Command::Mine { config, network, blocks } => {
            let active = initialize_core(&config, network.as_deref())?;
            let cadence = BlockCadence::from_profile(active.profile())?;
            let auto = cadence.mining().auto;
            let (pending_tx, pending_rx) = mpsc::channel(CHANNEL_CAPACITY);
            let (mut produced, handle) = cadence.spawn(pending_rx);

            // Auto-Mining braucht Transaktionen als Auslöser
            let feeder = tokio::spawn(async move {
                if auto {
                    for id in 0..blocks {
                        pending_tx
                            .send(PendingTransaction { id, gas: MIN_BLOCK_GAS_LIMIT, gas_price: 1 })
                            .await?;
                    }
                }
                Ok::<(), DevnetError>(())
            });

            let mut seen = 0;
            while seen < blocks {
                let Some(block) = produced.recv().await else { break };
                println!(
                    "block {} {:?} txs={} gas={}",
                    block.number,
                    block.trigger,
                    block.transactions.len(),
                    block.gas_used
                );
                seen += 1;
            }
            drop(produced);
            feeder
                .await
                .map_err(|e| DevnetError::Channel(format!("feeder task failed: {}", e)))??;
            handle
                .await
                .map_err(|e| DevnetError::Channel(format!("cadence task failed: {}", e)))??;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    // Initialisiere den Logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("inferno-devnet: {}", e);
        std::process::exit(1);
    }
}

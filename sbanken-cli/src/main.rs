use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use sbanken_client::ApiConnection;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod auth;
mod config;
mod output;
mod state;

#[derive(Parser, Debug)]
#[command(
    name = "sbanken",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("SBANKEN_BUILD_SHA"), ")"),
    about = "Sbanken public API client"
)]
struct Cli {
    /// Credentials JSON (default: ~/.sbanken/credentials.json)
    #[arg(long, global = true)]
    credentials: Option<PathBuf>,

    /// Config TOML (default: ~/.sbanken/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Account overview with balances
    Accounts,

    /// List transactions with resolved dates and cleaned labels
    Transactions {
        account_id: String,

        /// Fetch transactions since this date (YYYY-MM-DD, at most 366 days back)
        #[arg(long)]
        since: Option<NaiveDate>,

        /// Show which date and label rule fired for each transaction
        #[arg(long, default_value_t = false)]
        explain: bool,
    },

    /// List cards
    Cards,

    /// List pending payments on an account
    Payments { account_id: String },

    /// List eFaktura invoices
    Efakturas,

    /// Config file management
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config (to --config, or ~/.sbanken/config.toml)
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sbanken=warn,sbanken_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let paths = (cli.credentials.as_deref(), cli.config.as_deref());

    match cli.command {
        Command::Config { command } => match command {
            ConfigCommand::Init => {
                let (path, created) = config::init_config(paths.1)?;
                if created {
                    println!("Wrote {}", path.display());
                } else {
                    println!("Config already exists: {}", path.display());
                }
            }
        },

        Command::Accounts => {
            let conn = connect(paths)?;
            let accounts = conn.get_accounts().await.context("fetching accounts")?;
            println!("{}", output::account_overview(&accounts));
        }

        Command::Transactions {
            account_id,
            since,
            explain,
        } => {
            let conn = connect(paths)?;
            let txns = match since {
                Some(start) => conn.get_transactions_since(&account_id, start).await,
                None => conn.get_transactions(&account_id).await,
            }
            .with_context(|| format!("fetching transactions for {account_id}"))?;

            tracing::debug!(count = txns.len(), "fetched transactions");
            for t in &txns {
                println!("{}", output::transaction_line(t, explain));
            }
        }

        Command::Cards => {
            let conn = connect(paths)?;
            let cards = conn.get_cards().await.context("fetching cards")?;
            for c in &cards {
                println!("{}", output::card_line(c));
            }
        }

        Command::Payments { account_id } => {
            let conn = connect(paths)?;
            let payments = conn
                .get_payments(&account_id)
                .await
                .with_context(|| format!("fetching payments for {account_id}"))?;
            for p in &payments {
                println!("{}", output::payment_line(p));
            }
        }

        Command::Efakturas => {
            let conn = connect(paths)?;
            let efakturas = conn.get_efakturas().await.context("fetching efakturas")?;
            if efakturas.is_empty() {
                println!("No eFakturas.");
            }
            for ef in &efakturas {
                println!("{}", output::efaktura_line(ef));
            }
        }
    }

    Ok(())
}

fn connect((credentials_path, config_path): (Option<&Path>, Option<&Path>)) -> Result<ApiConnection> {
    let cfg = config::load_config(config_path)?;
    let credentials = auth::load_credentials(credentials_path)?;
    ApiConnection::new(credentials, cfg.api).context("creating api connection")
}

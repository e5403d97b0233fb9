use anyhow::Result;
use clap::{Parser, Subcommand};
use receipt_token_cli::{commands, Config};
use receipt_token_core::NewProfile;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "receipt-token")]
#[command(about = "Receipt Token - Shareable links for parking receipts", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Profile store file (overrides RECEIPT_TOKEN_STORE)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a receipt into a token or shareable link
    Encode {
        /// Input JSON file with the receipt ("-" for stdin, omit for the sample receipt)
        #[arg(short, long)]
        input: Option<String>,

        /// Apply a stored parking profile before encoding
        #[arg(short, long)]
        profile: Option<String>,

        /// Print a link on this base URL (overrides RECEIPT_TOKEN_BASE_URL)
        #[arg(long)]
        base_url: Option<String>,
    },

    /// Decode a token or shareable link into receipt JSON
    Decode {
        /// Token, link, or query string
        link: String,

        /// Output JSON file
        #[arg(short, long)]
        output: Option<String>,

        /// Include formatted date and amounts
        #[arg(long)]
        display: bool,

        /// Fail instead of printing a blank receipt
        #[arg(long)]
        strict: bool,
    },

    /// Show every decoding stage of a token
    Inspect {
        /// Token, link, or query string
        link: String,
    },

    /// Manage stored parking profiles
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// List stored profiles
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Store a new profile
    Add {
        /// Profile label
        #[arg(long)]
        name: String,

        /// Operating company
        #[arg(long)]
        company: String,

        /// Parking lot name
        #[arg(long)]
        lot: String,

        /// Contact phone number
        #[arg(long, default_value = "")]
        phone: String,

        /// Invoice registration number
        #[arg(long, default_value = "")]
        registration: String,
    },

    /// Delete a profile
    Remove {
        /// Profile id, with or without the key prefix
        id: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    let mut stdout = io::stdout().lock();

    // Execute command
    match cli.command {
        Commands::Encode {
            input,
            profile,
            base_url,
        } => {
            let config = Config::load().with_overrides(base_url, cli.store);
            commands::encode::execute(input.as_deref(), profile.as_deref(), &config, &mut stdout)
        }

        Commands::Decode {
            link,
            output,
            display,
            strict,
        } => commands::decode::execute(&link, output.as_deref(), display, strict, &mut stdout),

        Commands::Inspect { link } => commands::inspect::execute(&link, &mut stdout),

        Commands::Profile { action } => {
            let config = Config::load().with_overrides(None, cli.store);
            let store = config.store_path.as_path();

            match action {
                ProfileAction::List { json } => commands::profile::list(store, json, &mut stdout),
                ProfileAction::Add {
                    name,
                    company,
                    lot,
                    phone,
                    registration,
                } => {
                    let profile = NewProfile {
                        name,
                        company_name: company,
                        parking_lot_name: lot,
                        phone_number: phone,
                        registration_number: registration,
                    };
                    commands::profile::add(store, profile, &mut stdout)
                }
                ProfileAction::Remove { id } => commands::profile::remove(store, &id, &mut stdout),
            }
        }
    }
}

//! Command-line driver for the Solitaire cipher.

use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use solitaire::{Deck, Solitaire};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "solitaire")]
#[command(about = "Encrypt and decrypt letters with the Solitaire deck cipher")]
struct Cli {
    /// Deck file: 28 whitespace separated values, top card first
    #[arg(long, global = true, conflicts_with = "seed")]
    deck: Option<PathBuf>,

    /// Build the deck by shuffling with this seed
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Print the initial deck to stderr
    #[arg(long, global = true)]
    show_deck: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a message (letters only are kept)
    Encrypt {
        /// Message text; read from stdin when omitted
        message: Option<String>,
    },
    /// Decrypt a message produced with the same deck
    Decrypt {
        /// Ciphertext; read from stdin when omitted
        message: Option<String>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let deck = load_deck(&cli)?;
    if cli.show_deck || (cli.deck.is_none() && cli.seed.is_none()) {
        eprintln!("deck: {deck}");
    }

    let mut session = Solitaire::new(deck);
    let output = match cli.command {
        Commands::Encrypt { message } => session.encrypt(&read_message(message)?),
        Commands::Decrypt { message } => session.decrypt(&read_message(message)?),
    };
    println!("{output}");
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn load_deck(cli: &Cli) -> Result<Deck> {
    if let Some(path) = &cli.deck {
        let file =
            File::open(path).with_context(|| format!("opening deck file {}", path.display()))?;
        let deck = Deck::from_reader(file)
            .with_context(|| format!("reading deck file {}", path.display()))?;
        tracing::info!(path = %path.display(), "loaded deck");
        return Ok(deck);
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    Ok(Deck::shuffled(&mut rng))
}

fn read_message(message: Option<String>) -> Result<String> {
    match message {
        Some(text) => Ok(text),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("reading message from stdin")?;
            Ok(text)
        }
    }
}

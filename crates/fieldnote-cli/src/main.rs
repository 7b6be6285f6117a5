//! `fieldnote` — run extraction over a text and persist the observations.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fieldnote_core::config::ExtractConfig;
use fieldnote_core::loader;
use fieldnote_extract::{LexiconRecognizer, ObservationBuilder};
use fieldnote_storage::ObservationStore;

#[derive(Debug, Parser)]
#[command(name = "fieldnote", about = "Extract and store confidence-scored observations")]
struct Args {
    /// Text to analyze.
    #[arg(long, conflicts_with = "file")]
    text: Option<String>,

    /// Path to a text file to analyze.
    #[arg(long)]
    file: Option<PathBuf>,

    /// Source label recorded as provenance on every observation.
    #[arg(long, default_value = "unknown")]
    source: String,

    /// SQLite database path.
    #[arg(long, default_value = "fieldnote.db")]
    db: PathBuf,

    /// Data-model JSON path.
    #[arg(long, default_value = "datamodel.json")]
    datamodel: PathBuf,

    /// Alias table JSON path.
    #[arg(long, default_value = "aliases.json")]
    aliases: PathBuf,

    /// Recognizer lexicon JSON path.
    #[arg(long, default_value = "lexicon.json")]
    lexicon: PathBuf,

    /// Pipeline configuration JSON path (weights, penalty, defaults).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let text = match (&args.text, &args.file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        (None, None) => bail!("provide --text or --file"),
    };

    let fields = loader::load_datamodel(&args.datamodel)?;
    let aliases = loader::load_aliases(&args.aliases)?;
    let recognizer = LexiconRecognizer::from_file(&args.lexicon)?;
    let config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("failed to parse {}", path.display()))?
        }
        None => ExtractConfig::default(),
    };

    let builder = ObservationBuilder::new(config);
    let observations = builder.build(&text, &args.source, &fields, &aliases, &recognizer);
    info!(count = observations.len(), "extraction finished");

    let mut store = ObservationStore::open(&args.db)?;
    let field_ids = store.upsert_fields(&fields)?;
    let stored = store.insert_observations(&field_ids, &observations)?;

    println!("Stored {stored} observation(s).");
    Ok(())
}

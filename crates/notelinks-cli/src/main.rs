//! notelinks CLI: backlink queries over a notebook's mention records
//!
//! Commands: relation, refs, backlinks, stats

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, Level};

use notelinks_core::{NotebookConfig, NotelinksError, Occurrence};
use notelinks_index::NotebookSession;

#[derive(Parser)]
#[command(name = "notelinks")]
#[command(version)]
#[command(about = "Backlink and mention queries for Markdown notebooks")]
struct Cli {
    /// Notebook config file (YAML)
    #[arg(long, global = true, default_value = "notebook.yaml")]
    notebook: PathBuf,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Whether two notes mention each other (in either direction)
    Relation { a: String, b: String },
    /// Occurrences of MENTIONER mentioning SOURCE
    Refs { source: String, mentioner: String },
    /// Every note mentioning NOTE, with its occurrences
    #[command(alias = "bl")]
    Backlinks { note: String },
    /// Index statistics
    Stats,
}

#[derive(Serialize)]
struct Backlink<'a> {
    note: &'a str,
    occurrences: &'a [Occurrence<Value>],
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        })
        .with_writer(std::io::stderr)
        .init();

    let session = open_session(&cli.notebook)?;
    let index = session.index();

    let output = match &cli.command {
        Commands::Relation { a, b } => json!({
            "a": a,
            "b": b,
            "related": index.has_relation(a, b),
        }),
        Commands::Refs { source, mentioner } => {
            serde_json::to_value(index.get_references(source, mentioner))?
        }
        Commands::Backlinks { note } => {
            let mentioners: Vec<Backlink<'_>> = index
                .backlinks(note)
                .map(|(mentioner, occurrences)| Backlink {
                    note: mentioner,
                    occurrences,
                })
                .collect();
            json!({
                "note": note,
                "has_references": index.note_has_references(note),
                "mentioners": mentioners,
            })
        }
        Commands::Stats => {
            let stats = index.stats();
            json!({
                "notebook": session.config().name,
                "referenced_notes": stats.referenced_notes,
                "pairs": stats.pairs,
                "occurrences": stats.occurrences,
            })
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    session.close();
    Ok(())
}

/// Load the notebook config and feed its mention records into a new session.
fn open_session(config_path: &Path) -> Result<NotebookSession<Value>> {
    let config = NotebookConfig::load(config_path)
        .with_context(|| format!("Failed to load notebook config {}", config_path.display()))?;
    let config_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
    let mentions_path = config.mentions_path(config_dir);
    let records = read_mentions(&mentions_path)
        .with_context(|| format!("Failed to read mentions {}", mentions_path.display()))?;

    // Group per mentioning note, keeping each note's record order.
    let mut by_note: BTreeMap<String, Vec<Occurrence<Value>>> = BTreeMap::new();
    for record in records {
        by_note
            .entry(record.mentioning_note_path.clone())
            .or_default()
            .push(record);
    }

    let mut session = NotebookSession::open(config);
    for (note, occurrences) in by_note {
        session.apply_note(&note, occurrences);
    }
    debug!(stats = ?session.index().stats(), "notebook indexed");
    Ok(session)
}

fn read_mentions(path: &Path) -> Result<Vec<Occurrence<Value>>, NotelinksError> {
    let text = std::fs::read_to_string(path)?;
    serde_json::from_str(&text).map_err(|e| NotelinksError::Serialization(e.to_string()))
}

//! CLI for the vidcat video catalog.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use vidcat_core::catalog_db::CatalogDb;
use vidcat_core::config::{self, VidcatConfig};

use commands::{run_add, run_check, run_completions, run_list};

/// Top-level CLI for the vidcat video catalog.
#[derive(Debug, Parser)]
#[command(name = "vidcat")]
#[command(about = "vidcat: save and browse favourite YouTube videos", long_about = None)]
pub struct Cli {
    /// Catalog database file (overrides `database_path` in config.toml).
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Add a video to the catalog.
    Add {
        /// Display name.
        name: String,
        /// YouTube watch URL, e.g. https://www.youtube.com/watch?v=VkkS3kJAG7g
        url: String,
        /// Free-form notes.
        #[arg(long)]
        notes: Option<String>,
    },

    /// List videos, optionally filtered by a name search.
    List {
        /// Only show videos whose name contains this text (any case).
        #[arg(long, short = 's', value_name = "TERM")]
        search: Option<String>,
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Check a URL and print the video id it would be stored under.
    Check {
        url: String,
    },

    /// Print a shell completion script.
    Completions {
        shell: Shell,
    },
}

/// Load config and open the catalog it (or `--db`) points at.
async fn open_catalog(db: Option<PathBuf>) -> Result<(VidcatConfig, CatalogDb)> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    let catalog = match db.or_else(|| cfg.database_path.clone()) {
        Some(path) => CatalogDb::open_at(path).await?,
        None => CatalogDb::open_default().await?,
    };
    Ok((cfg, catalog))
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Add { name, url, notes } => {
                let (_, db) = open_catalog(cli.db).await?;
                run_add(&db, name, url, notes).await?;
            }
            CliCommand::List { search, json } => {
                let (cfg, db) = open_catalog(cli.db).await?;
                run_list(&db, &cfg, search.as_deref(), json).await?;
            }
            CliCommand::Check { url } => run_check(&url)?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;

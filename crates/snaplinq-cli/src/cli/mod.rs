//! CLI for the Snaplinq link organizer.

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use snaplinq_core::auth::LocalAuth;
use snaplinq_core::config::{self, SnaplinqConfig};
use snaplinq_core::metadata::AutoFill;
use snaplinq_core::record_store::SqliteRecordStore;
use snaplinq_core::{CatalogStore, CategorySet};
use std::sync::Arc;

use commands::{
    run_add, run_category, run_classify, run_completions, run_edit, run_list, run_login,
    run_logout, run_remove, run_whoami, AddArgs, EditArgs,
};

/// Top-level CLI for the Snaplinq link organizer.
#[derive(Debug, Parser)]
#[command(name = "snaplinq")]
#[command(about = "Snaplinq: save, categorize and browse your links", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Sign in; links are stored per identity.
    Login {
        /// Identity to sign in as (e.g. an email address).
        identity: String,
    },

    /// Sign out of the current session.
    Logout,

    /// Show who is signed in.
    Whoami,

    /// Save a new link.
    Add(AddArgs),

    /// List links grouped by category.
    List {
        /// Only show links whose title or URL contains this text (case-insensitive).
        #[arg(long, short)]
        query: Option<String>,
    },

    /// Change fields of a saved link.
    Edit(EditArgs),

    /// Delete a link by ID.
    Remove {
        /// Link identifier.
        id: i64,
    },

    /// Manage categories.
    #[command(subcommand)]
    Category(CategoryCommand),

    /// Preview the title, icon and category inferred for a URL.
    Classify {
        url: String,
    },

    /// Print shell completions.
    Completions {
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum CategoryCommand {
    /// List categories with their link counts.
    List,
    /// Add a category.
    Add { name: String },
    /// Rename a category; its links move with it.
    Rename { old: String, new: String },
    /// Delete a category; its links move to "Uncategorized".
    Delete { name: String },
}

/// Collaborators shared by the commands that touch the link store.
pub(crate) struct App {
    pub cfg: SnaplinqConfig,
    pub auth: Arc<LocalAuth>,
    pub db: Arc<SqliteRecordStore>,
    pub catalog: CatalogStore,
}

fn open_auth(cfg: &SnaplinqConfig) -> Result<LocalAuth> {
    let path = match &cfg.session_path {
        Some(p) => p.clone(),
        None => LocalAuth::default_path()?,
    };
    LocalAuth::load_from_path(&path)
        .with_context(|| format!("loading session from {}", path.display()))
}

impl App {
    async fn open(cfg: SnaplinqConfig) -> Result<Self> {
        let auth = Arc::new(open_auth(&cfg)?);
        let db = match &cfg.database_path {
            Some(p) => SqliteRecordStore::open_at(p).await?,
            None => SqliteRecordStore::open_default().await?,
        };
        let db = Arc::new(db);
        let catalog = CatalogStore::new(
            auth.clone(),
            db.clone(),
            CategorySet::seeded(&cfg.default_categories),
            AutoFill::new(cfg.favicon_service()),
        );
        catalog.load().await.context("loading links")?;
        Ok(Self {
            cfg,
            auth,
            db,
            catalog,
        })
    }

    /// Close the database, then hand back the command's result.
    async fn finish(self, result: Result<()>) -> Result<()> {
        self.db.close().await;
        result
    }
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        if let CliCommand::Completions { shell } = cli.command {
            run_completions(shell);
            return Ok(());
        }

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Login { identity } => run_login(&open_auth(&cfg)?, &identity)?,
            CliCommand::Logout => run_logout(&open_auth(&cfg)?)?,
            CliCommand::Whoami => run_whoami(&open_auth(&cfg)?),
            CliCommand::Classify { url } => run_classify(&cfg, &url),
            CliCommand::Completions { .. } => {}
            CliCommand::Add(args) => {
                let app = App::open(cfg).await?;
                let result = run_add(&app, args).await;
                app.finish(result).await?;
            }
            CliCommand::List { query } => {
                let app = App::open(cfg).await?;
                let result = run_list(&app, query.as_deref());
                app.finish(result).await?;
            }
            CliCommand::Edit(args) => {
                let app = App::open(cfg).await?;
                let result = run_edit(&app, args).await;
                app.finish(result).await?;
            }
            CliCommand::Remove { id } => {
                let app = App::open(cfg).await?;
                let result = run_remove(&app, id).await;
                app.finish(result).await?;
            }
            CliCommand::Category(cmd) => {
                let app = App::open(cfg).await?;
                let result = run_category(&app, cmd).await;
                app.finish(result).await?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;

//! `snaplinq add <url>` – save a new link.

use anyhow::{bail, Result};
use clap::Args;
use snaplinq_core::auth::AuthProvider;
use snaplinq_core::LinkDraft;

use crate::cli::App;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Absolute URL of the link.
    pub url: String,

    /// Display title (inferred from the host if omitted).
    #[arg(long)]
    pub title: Option<String>,

    /// Icon URL (favicon service if omitted).
    #[arg(long)]
    pub icon: Option<String>,

    /// Category name (classified from the URL if omitted).
    #[arg(long, short)]
    pub category: Option<String>,

    /// Do not infer missing fields, even if `auto_fill` is on in config.
    #[arg(long)]
    pub no_auto_fill: bool,
}

pub async fn run_add(app: &App, args: AddArgs) -> Result<()> {
    if app.auth.current_session().is_none() {
        bail!("not signed in; run `snaplinq login <identity>` first");
    }
    let draft = LinkDraft {
        url: args.url,
        title: args.title,
        icon: args.icon,
        category: args.category,
        auto_fill: app.cfg.auto_fill && !args.no_auto_fill,
    };
    match app.catalog.create_link(draft).await? {
        Some(link) => println!(
            "Added link {} \"{}\" in {}",
            link.id, link.title, link.category
        ),
        None => println!("Nothing saved: the session ended before the link was stored."),
    }
    Ok(())
}

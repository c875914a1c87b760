//! `snaplinq edit <id>` – change fields of a saved link.

use anyhow::{bail, Result};
use clap::Args;
use snaplinq_core::record_store::LinkPatch;

use crate::cli::App;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Link identifier.
    pub id: i64,

    #[arg(long)]
    pub url: Option<String>,

    #[arg(long)]
    pub title: Option<String>,

    /// New icon URL; pass an empty string to clear it.
    #[arg(long)]
    pub icon: Option<String>,

    #[arg(long, short)]
    pub category: Option<String>,
}

impl EditArgs {
    fn into_patch(self) -> LinkPatch {
        LinkPatch {
            url: self.url,
            title: self.title,
            icon: self.icon,
            category: self.category,
        }
    }
}

pub async fn run_edit(app: &App, args: EditArgs) -> Result<()> {
    let id = args.id;
    let patch = args.into_patch();
    if patch.is_empty() {
        bail!("nothing to change; pass at least one of --url, --title, --icon, --category");
    }
    app.catalog.update_link(id, patch).await?;
    match app.catalog.link(id) {
        Some(link) => println!("Updated link {id}: \"{}\" in {}", link.title, link.category),
        None => println!("Updated link {id}"),
    }
    Ok(())
}

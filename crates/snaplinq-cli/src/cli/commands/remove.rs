//! `snaplinq remove <id>` – delete a link.

use anyhow::Result;

use crate::cli::App;

pub async fn run_remove(app: &App, id: i64) -> Result<()> {
    app.catalog.delete_link(id).await?;
    println!("Removed link {id}");
    Ok(())
}

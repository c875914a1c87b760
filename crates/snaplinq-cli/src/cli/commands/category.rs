//! `snaplinq category ...` – list, add, rename and delete categories.

use anyhow::Result;

use crate::cli::{App, CategoryCommand};

pub async fn run_category(app: &App, cmd: CategoryCommand) -> Result<()> {
    match cmd {
        CategoryCommand::List => {
            println!("{:<6} {}", "LINKS", "CATEGORY");
            for (name, count) in app.catalog.category_counts() {
                println!("{:<6} {}", count, name);
            }
        }
        CategoryCommand::Add { name } => {
            if app.catalog.add_category(&name)? {
                // Categories are not stored on their own; an empty one is gone next run.
                println!(
                    "Added category \"{}\". It is kept once a link is filed under it.",
                    name.trim()
                );
            } else {
                println!("Category \"{}\" already exists.", name.trim());
            }
        }
        CategoryCommand::Rename { old, new } => {
            app.catalog.rename_category(&old, &new).await?;
            println!("Renamed category \"{old}\" to \"{}\"", new.trim());
        }
        CategoryCommand::Delete { name } => {
            app.catalog.delete_category(&name).await?;
            println!("Deleted category \"{name}\"; its links moved to Uncategorized");
        }
    }
    Ok(())
}

//! `snaplinq list` – show links grouped by category.

use anyhow::Result;
use snaplinq_core::auth::AuthProvider;

use crate::cli::App;

pub fn run_list(app: &App, query: Option<&str>) -> Result<()> {
    if app.auth.current_session().is_none() {
        println!("Not signed in.");
        return Ok(());
    }
    let query = query.unwrap_or("");
    let sections = app.catalog.sections(query);
    if sections.is_empty() {
        println!("No links match \"{query}\".");
        return Ok(());
    }
    for section in sections {
        println!("== {} ({})", section.category, section.links.len());
        if section.is_empty() {
            println!("   (no links)");
            continue;
        }
        for l in section.links {
            println!("   {:<6} {:<24} {}", l.id, truncate(&l.title, 24), l.url);
        }
    }
    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::truncate;

    #[test]
    fn truncate_keeps_short_titles() {
        assert_eq!(truncate("github", 24), "github");
    }

    #[test]
    fn truncate_marks_cut_titles() {
        assert_eq!(truncate("abcdefgh", 5), "abcd…");
        assert_eq!(truncate("ééééé", 5), "ééééé");
    }
}

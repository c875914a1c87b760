//! Read-only grouped view over the catalog (search + sections).

use super::CategorySet;
use crate::record_store::{Link, UNCATEGORIZED};

/// One category's worth of links, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub category: String,
    pub links: Vec<Link>,
}

impl Section {
    /// True for a category with no (matching) links; front ends show an
    /// empty-state placeholder for these in the unfiltered view.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

/// Case-insensitive substring match on title or url. An empty query matches everything.
pub fn matches_query(link: &Link, query: &str) -> bool {
    let q = query.to_lowercase();
    link.title.to_lowercase().contains(&q) || link.url.to_lowercase().contains(&q)
}

/// Groups links matching `query` by category, in `categories` order.
///
/// The query is trimmed first. With a non-blank query, empty sections are
/// dropped. Links whose category is not in the set are shown under the
/// default category.
pub fn sections(links: &[Link], categories: &CategorySet, query: &str) -> Vec<Section> {
    let query = query.trim();
    let searching = !query.is_empty();
    let mut out: Vec<Section> = categories
        .iter()
        .map(|c| Section {
            category: c.to_string(),
            links: Vec::new(),
        })
        .collect();

    let fallback = categories.position(UNCATEGORIZED).unwrap_or(0);
    for link in links.iter().filter(|l| matches_query(l, query)) {
        let idx = categories.position(&link.category).unwrap_or(fallback);
        if let Some(section) = out.get_mut(idx) {
            section.links.push(link.clone());
        }
    }

    if searching {
        out.retain(|s| !s.is_empty());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(id: i64, title: &str, url: &str, category: &str) -> Link {
        Link {
            id,
            url: url.to_string(),
            title: title.to_string(),
            icon: None,
            category: category.to_string(),
            created_at: 0,
            owner_id: "u".to_string(),
        }
    }

    fn fixture() -> (Vec<Link>, CategorySet) {
        let links = vec![
            link(1, "GitHub Repo", "https://github.com/x/y", "Coding"),
            link(2, "Example Site", "https://example.org", "Uncategorized"),
        ];
        let cats = CategorySet::seeded(["Uncategorized", "Coding", "Design"]);
        (links, cats)
    }

    #[test]
    fn search_filters_by_title_or_url() {
        let (links, cats) = fixture();
        let got = sections(&links, &cats, "git");
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].category, "Coding");
        assert_eq!(got[0].links.len(), 1);
        assert_eq!(got[0].links[0].id, 1);

        let got = sections(&links, &cats, "EXAMPLE.ORG");
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].links[0].id, 2);
    }

    #[test]
    fn empty_query_keeps_every_category() {
        let (links, cats) = fixture();
        let got = sections(&links, &cats, "");
        let names: Vec<_> = got.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(names, vec!["Uncategorized", "Coding", "Design"]);
        assert_eq!(got[0].links[0].id, 2);
        assert_eq!(got[1].links[0].id, 1);
        assert!(got[2].is_empty());
    }

    #[test]
    fn blank_query_is_no_query() {
        let (links, cats) = fixture();
        assert_eq!(sections(&links, &cats, "   "), sections(&links, &cats, ""));
        let got = sections(&links, &cats, "  git ");
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].links[0].id, 1);
    }

    #[test]
    fn no_match_gives_no_sections() {
        let (links, cats) = fixture();
        assert!(sections(&links, &cats, "zzz").is_empty());
    }

    #[test]
    fn unknown_category_falls_back_to_default() {
        let links = vec![link(7, "Orphan", "https://orphan.example", "Gone")];
        let cats = CategorySet::default();
        let got = sections(&links, &cats, "");
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].category, "Uncategorized");
        assert_eq!(got[0].links[0].id, 7);
    }
}

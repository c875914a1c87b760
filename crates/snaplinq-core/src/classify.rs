//! URL heuristic classifier.
//!
//! Maps a raw URL string to one of a fixed set of category labels. Rules are
//! evaluated in order against the lowercased input and the first match wins,
//! so a URL that contains both "ai" and "news" is classified as "AI Tools".
//! The bare "ai" pattern also matches hosts like "fair.org" or "mail.example";
//! that ordering and substring behavior is kept as-is.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::record_store::UNCATEGORIZED;

/// A single classification rule: a regex alternation and the label it yields.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub pattern: &'static str,
    pub category: &'static str,
}

/// Ordered rule table. Order is significant.
pub const RULES: &[Rule] = &[
    Rule {
        pattern: r"github|gitlab|stackoverflow|dev\.to|code",
        category: "Coding",
    },
    Rule {
        pattern: r"gpt|openai|claude|midjourney|ai",
        category: "AI Tools",
    },
    Rule {
        pattern: r"dribbble|behance|figma|unsplash|design",
        category: "Design",
    },
    Rule {
        pattern: r"twitter|x\.com|linkedin|facebook|instagram",
        category: "Social",
    },
    Rule {
        pattern: r"bbc|cnn|nytimes|news",
        category: "News",
    },
    Rule {
        pattern: r"flight|hotel|booking|airbnb|trip",
        category: "Travel",
    },
    Rule {
        pattern: r"youtube|spotify|music|video",
        category: "Music",
    },
];

static COMPILED: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    RULES
        .iter()
        .map(|rule| {
            let re = Regex::new(rule.pattern).expect("classifier patterns are valid regexes");
            (re, rule.category)
        })
        .collect()
});

/// Returns the category label for `url`, or `"Uncategorized"` when no rule matches.
///
/// The input does not need to be a valid URL.
pub fn classify(url: &str) -> &'static str {
    let lower = url.to_lowercase();
    COMPILED
        .iter()
        .find(|(re, _)| re.is_match(&lower))
        .map(|(_, category)| *category)
        .unwrap_or(UNCATEGORIZED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coding_hosts_any_case() {
        assert_eq!(classify("https://github.com/rust-lang/rust"), "Coding");
        assert_eq!(classify("https://GitHub.com/rust-lang"), "Coding");
        assert_eq!(classify("HTTPS://GITLAB.COM/group/project"), "Coding");
        assert_eq!(classify("https://stackoverflow.com/questions/1"), "Coding");
        assert_eq!(classify("https://dev.to/someone/post"), "Coding");
        assert_eq!(classify("https://vscode.example"), "Coding");
    }

    #[test]
    fn each_rule_has_a_hit() {
        assert_eq!(classify("https://chat.openai.com"), "AI Tools");
        assert_eq!(classify("https://www.figma.com/file/x"), "Design");
        assert_eq!(classify("https://twitter.com/someone"), "Social");
        assert_eq!(classify("https://x.com/someone"), "Social");
        assert_eq!(classify("https://www.bbc.co.uk"), "News");
        assert_eq!(classify("https://www.hotels.example"), "Travel");
        assert_eq!(classify("https://open.spotify.com/track/1"), "Music");
    }

    #[test]
    fn earlier_rule_wins() {
        assert_eq!(classify("https://ainews.example.com"), "AI Tools");
        // "code" beats "youtube".
        assert_eq!(classify("https://youtube.com/watch?v=code"), "Coding");
    }

    #[test]
    fn bare_ai_substring_shadows_later_rules() {
        // "detail" contains "ai", so the news match is never reached.
        assert_eq!(classify("https://news.example.com/detail"), "AI Tools");
        assert_eq!(classify("https://mail.example.com"), "AI Tools");
    }

    #[test]
    fn no_match_falls_back() {
        assert_eq!(classify("https://example.org"), "Uncategorized");
        assert_eq!(classify(""), "Uncategorized");
        assert_eq!(classify("not a url"), "Uncategorized");
    }
}

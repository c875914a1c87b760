//! Link metadata inference: display title, favicon and category guesses.
//!
//! Nothing in here fails. Malformed URLs degrade to fallback values so an
//! "add link" flow is never aborted by inference.

mod favicon;
mod title;

pub use favicon::{infer_favicon, FaviconService, DEFAULT_ICON_SIZE, DEFAULT_SERVICE_TEMPLATE};
pub use title::infer_title;

use crate::classify::classify;

/// Host of `url`, or `None` if it does not parse. A URL without a host
/// (`mailto:a@b.com`) gives an empty host.
fn parse_host(url: &str) -> Option<String> {
    url::Url::parse(url)
        .ok()
        .map(|u| u.host_str().unwrap_or("").to_string())
}

/// Everything that can be guessed from a URL alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inferred {
    pub title: String,
    pub icon: String,
    pub category: &'static str,
}

/// Bundles title, favicon and category inference.
#[derive(Debug, Clone, Default)]
pub struct AutoFill {
    favicons: FaviconService,
}

impl AutoFill {
    pub fn new(favicons: FaviconService) -> Self {
        Self { favicons }
    }

    pub fn infer(&self, url: &str) -> Inferred {
        Inferred {
            title: infer_title(url),
            icon: self.favicons.favicon_for(url),
            category: classify(url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infer_bundle() {
        let got = AutoFill::default().infer("https://www.github.com/rust-lang");
        assert_eq!(got.title, "github");
        assert_eq!(got.category, "Coding");
        assert!(got.icon.contains("www.github.com"));
    }

    #[test]
    fn infer_bundle_on_garbage() {
        let got = AutoFill::default().infer("not a url");
        assert_eq!(got.title, "not a url");
        assert_eq!(got.icon, "");
        assert_eq!(got.category, "Uncategorized");
    }
}

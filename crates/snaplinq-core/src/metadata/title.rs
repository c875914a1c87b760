//! Display-title inference from a URL host.

/// Derives a short display title from `url`.
///
/// Parses the URL, drops the first `"www."` from the host, and keeps the label
/// before the first remaining dot. A URL without a host gives `""`;
/// unparseable input is returned unchanged.
///
/// # Examples
///
/// - `infer_title("https://www.example.com/page")` → `"example"`
/// - `infer_title("https://blog.example.com")` → `"blog"`
/// - `infer_title("not a url")` → `"not a url"`
pub fn infer_title(url: &str) -> String {
    match super::parse_host(url) {
        Some(host) => {
            let host = host.replacen("www.", "", 1);
            host.split('.').next().unwrap_or_default().to_string()
        }
        None => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_www_and_takes_first_label() {
        assert_eq!(infer_title("https://www.example.com/page"), "example");
        assert_eq!(infer_title("https://example.com"), "example");
        assert_eq!(infer_title("http://WWW.GitHub.com/x"), "github");
    }

    #[test]
    fn subdomain_is_the_title() {
        assert_eq!(infer_title("https://blog.example.com"), "blog");
        assert_eq!(infer_title("https://docs.rs/tokio"), "docs");
    }

    #[test]
    fn single_label_host() {
        assert_eq!(infer_title("http://localhost:8080/"), "localhost");
    }

    #[test]
    fn hostless_url_gives_empty_title() {
        assert_eq!(infer_title("mailto:a@b.com"), "");
        // Parses with scheme "localhost" and no host.
        assert_eq!(infer_title("localhost:8080"), "");
    }

    #[test]
    fn malformed_input_is_returned_unchanged() {
        assert_eq!(infer_title("not a url"), "not a url");
        assert_eq!(infer_title(""), "");
        assert_eq!(infer_title("example.com/no-scheme"), "example.com/no-scheme");
    }
}

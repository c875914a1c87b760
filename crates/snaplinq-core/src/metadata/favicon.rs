//! Favicon URL inference via a third-party favicon service.

use serde::{Deserialize, Serialize};

/// Google's favicon service; `{domain}` and `{size}` are substituted.
pub const DEFAULT_SERVICE_TEMPLATE: &str = "https://www.google.com/s2/favicons?domain={domain}&sz={size}";

/// Requested icon edge length in pixels.
pub const DEFAULT_ICON_SIZE: u32 = 128;

/// Favicon service settings (optional `[favicon]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaviconService {
    /// URL template with `{domain}` and `{size}` placeholders.
    pub service_template: String,
    pub size: u32,
}

impl Default for FaviconService {
    fn default() -> Self {
        Self {
            service_template: DEFAULT_SERVICE_TEMPLATE.to_string(),
            size: DEFAULT_ICON_SIZE,
        }
    }
}

impl FaviconService {
    /// Favicon URL for the host of `url`, or `""` if `url` does not parse.
    /// A hostless URL leaves the domain empty.
    pub fn favicon_for(&self, url: &str) -> String {
        match super::parse_host(url) {
            Some(host) => self
                .service_template
                .replace("{domain}", &host)
                .replace("{size}", &self.size.to_string()),
            None => String::new(),
        }
    }
}

/// Favicon URL for `url` using the default service and size; `""` on parse failure.
pub fn infer_favicon(url: &str) -> String {
    FaviconService::default().favicon_for(url)
}

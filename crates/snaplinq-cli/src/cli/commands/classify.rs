//! `snaplinq classify <url>` – preview what `add` would infer for a URL.

use snaplinq_core::config::SnaplinqConfig;
use snaplinq_core::metadata::AutoFill;

pub fn run_classify(cfg: &SnaplinqConfig, url: &str) {
    let inferred = AutoFill::new(cfg.favicon_service()).infer(url);
    println!("category: {}", inferred.category);
    println!("title:    {}", inferred.title);
    if inferred.icon.is_empty() {
        println!("icon:     -");
    } else {
        println!("icon:     {}", inferred.icon);
    }
}

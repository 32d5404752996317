//! Static file serving for the site root.
//!
//! Unmatched request paths resolve against the configured static root.
//! Content types are inferred from file extensions, directory requests serve
//! `index.html` when present, and a miss produces the framework-default 404.

use tower_http::services::ServeDir;

use crate::config::StaticConfig;

/// Create the static file service backing unmatched routes.
///
/// Returns a `ServeDir` rooted at the configured directory. Path components
/// that would escape the root (`..`) are rejected before the filesystem is
/// consulted, so requests can never traverse outside the static root.
pub fn create_static_service(config: &StaticConfig) -> ServeDir {
    ServeDir::new(&config.root).append_index_html_on_directories(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn create_static_service_with_missing_root() {
        // Construction must not touch the filesystem; a missing root only
        // surfaces later as 404s. Actual serving is covered in integration.
        let config = StaticConfig {
            root: PathBuf::from("does-not-exist"),
        };
        let _service = create_static_service(&config);
    }
}

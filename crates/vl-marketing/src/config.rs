//! Site configuration

/// Settings read from the environment, with development defaults
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Directory served under `/assets`
    pub assets_dir: String,
    /// Address shown on contact and rejection messages
    pub support_email: String,
    /// `tracing` filter directive
    pub log_filter: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            assets_dir: env_or("VAULTLINE_ASSETS_DIR", "assets"),
            support_email: env_or("VAULTLINE_SUPPORT_EMAIL", DEFAULT_SUPPORT_EMAIL),
            log_filter: env_or("RUST_LOG", "vl_marketing=info,vl_core=info,tower_http=info"),
        }
    }
}

pub const DEFAULT_SUPPORT_EMAIL: &str = "support@vaultline.io";

pub const SALES_EMAIL: &str = "sales@vaultline.io";

/// Where `cargo leptos` writes the wasm bundle, served under `/pkg`
pub fn pkg_dir(site_root: &str, site_pkg_dir: &str) -> String {
    format!("{}/{}", site_root.trim_end_matches('/'), site_pkg_dir.trim_matches('/'))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(env_or("VAULTLINE_TEST_SURELY_UNSET", "fallback"), "fallback");
        let config = SiteConfig::default();
        assert!(!config.assets_dir.is_empty());
        assert!(config.support_email.contains('@'));
    }

    #[test]
    fn test_pkg_dir() {
        assert_eq!(pkg_dir("target/site", "pkg"), "target/site/pkg");
        assert_eq!(pkg_dir("target/site/", "/pkg/"), "target/site/pkg");
    }
}

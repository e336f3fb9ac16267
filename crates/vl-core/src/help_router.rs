//! Help-center search routing
//!
//! The help-center search box does not list results. The query is checked
//! against a short, fixed-priority keyword table and the visitor is sent to
//! the first matching destination.

/// Destination when nothing matches
pub const DEFAULT_DESTINATION: &str = "/jhelp/docs";

/// Keywords and the path they route to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRule {
    pub keywords: &'static [&'static str],
    pub destination: &'static str,
}

impl RouteRule {
    fn matches(&self, query: &str) -> bool {
        self.keywords.iter().any(|k| query.contains(k))
    }
}

/// Rules in priority order. Restore comes before backup so "restore a backup"
/// lands on the restore guide.
pub static HELP_ROUTES: &[RouteRule] = &[
    RouteRule {
        keywords: &["setup", "set up", "install", "getting started", "quick start", "onboard"],
        destination: "/jhelp/quick-start",
    },
    RouteRule {
        keywords: &["restore", "recover"],
        destination: "/jhelp/restore",
    },
    RouteRule {
        keywords: &["backup", "schedule", "snapshot", "retention"],
        destination: "/jhelp/backups",
    },
    RouteRule {
        keywords: &["billing", "invoice", "payment", "price", "plan"],
        destination: "/jhelp/billing",
    },
    RouteRule {
        keywords: &["security", "encrypt", "gdpr", "compliance", "soc 2", "soc2"],
        destination: "/security",
    },
    RouteRule {
        keywords: &["api", "integration", "webhook", "token"],
        destination: "/jhelp/api",
    },
    RouteRule {
        keywords: &["account", "password", "login", "sign in"],
        destination: "/jhelp/account",
    },
];

/// First-match-wins keyword router
#[derive(Debug, Clone)]
pub struct HelpRouter {
    rules: &'static [RouteRule],
    fallback: &'static str,
}

impl HelpRouter {
    pub fn new() -> Self {
        Self {
            rules: HELP_ROUTES,
            fallback: DEFAULT_DESTINATION,
        }
    }

    pub fn with_rules(rules: &'static [RouteRule], fallback: &'static str) -> Self {
        Self { rules, fallback }
    }

    /// Destination path for a free-text query
    pub fn route(&self, query: &str) -> &'static str {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.fallback;
        }

        let destination = self
            .rules
            .iter()
            .find(|rule| rule.matches(&query))
            .map(|rule| rule.destination)
            .unwrap_or(self.fallback);

        tracing::debug!(query = %query, destination, "Help search routed");
        destination
    }
}

impl Default for HelpRouter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_routes_to_quick_start() {
        assert_eq!(HelpRouter::new().route("setup"), "/jhelp/quick-start");
        assert_eq!(HelpRouter::new().route("  How do I SETUP the agent? "), "/jhelp/quick-start");
    }

    #[test]
    fn test_unmatched_routes_to_docs() {
        let router = HelpRouter::new();
        assert_eq!(router.route("kittens"), DEFAULT_DESTINATION);
        assert_eq!(router.route(""), DEFAULT_DESTINATION);
    }

    #[test]
    fn test_priority_order() {
        let router = HelpRouter::new();
        // matches both restore and backup rules
        assert_eq!(router.route("restore a backup"), "/jhelp/restore");
        // matches both setup and billing rules
        assert_eq!(router.route("install on the starter plan"), "/jhelp/quick-start");
    }

    #[test]
    fn test_each_rule_reachable() {
        let router = HelpRouter::new();
        assert_eq!(router.route("retention"), "/jhelp/backups");
        assert_eq!(router.route("invoice"), "/jhelp/billing");
        assert_eq!(router.route("gdpr"), "/security");
        assert_eq!(router.route("webhook"), "/jhelp/api");
        assert_eq!(router.route("forgot password"), "/jhelp/account");
    }

    #[test]
    fn test_soc_keyword_needs_the_number() {
        let router = HelpRouter::new();
        assert_eq!(router.route("social login"), "/jhelp/account");
        assert_eq!(router.route("SOC 2 report"), "/security");
        assert_eq!(router.route("soc2 audit"), "/security");
    }

    #[test]
    fn test_custom_rules() {
        static RULES: &[RouteRule] = &[RouteRule {
            keywords: &["careers"],
            destination: "/careers",
        }];
        let router = HelpRouter::with_rules(RULES, "/");
        assert_eq!(router.route("Careers at Vaultline"), "/careers");
        assert_eq!(router.route("pricing"), "/");
    }
}

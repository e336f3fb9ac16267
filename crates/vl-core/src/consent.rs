//! Cookie consent state

use crate::store::{Preferences, CONSENT_KEY};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stored consent choices. `essential` is always true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentPreference {
    pub essential: bool,
    pub analytics: bool,
    pub marketing: bool,
    pub functional: bool,
    pub timestamp: DateTime<Utc>,
}

impl ConsentPreference {
    pub fn custom(analytics: bool, marketing: bool, functional: bool) -> Self {
        Self {
            essential: true,
            analytics,
            marketing,
            functional,
            timestamp: Utc::now(),
        }
    }

    pub fn accept_all() -> Self {
        Self::custom(true, true, true)
    }

    pub fn reject_all() -> Self {
        Self::custom(false, false, false)
    }

    /// Stored consent, if the visitor has made a choice this browser remembers
    pub fn load(prefs: &Preferences) -> Option<Self> {
        prefs.read::<Self>(CONSENT_KEY).map(Self::normalized)
    }

    /// Persist these choices, overwriting whatever was stored
    pub fn save(&self, prefs: &Preferences) -> Self {
        let mut record = self.clone().normalized();
        record.timestamp = Utc::now();
        prefs.write(CONSENT_KEY, &record);
        tracing::info!(
            analytics = record.analytics,
            marketing = record.marketing,
            functional = record.functional,
            "Consent updated"
        );
        record
    }

    /// Whether the banner should be shown. Without working storage this is
    /// true on every visit.
    pub fn needs_prompt(prefs: &Preferences) -> bool {
        Self::load(prefs).is_none()
    }

    pub fn allows(&self, category: ConsentCategory) -> bool {
        match category {
            ConsentCategory::Essential => true,
            ConsentCategory::Analytics => self.analytics,
            ConsentCategory::Marketing => self.marketing,
            ConsentCategory::Functional => self.functional,
        }
    }

    /// Flip one optional category. Essential cannot be switched off.
    pub fn toggle(&mut self, category: ConsentCategory) {
        match category {
            ConsentCategory::Essential => {}
            ConsentCategory::Analytics => self.analytics = !self.analytics,
            ConsentCategory::Marketing => self.marketing = !self.marketing,
            ConsentCategory::Functional => self.functional = !self.functional,
        }
    }

    fn normalized(mut self) -> Self {
        self.essential = true;
        self
    }
}

impl Default for ConsentPreference {
    fn default() -> Self {
        Self::reject_all()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsentCategory {
    Essential,
    Analytics,
    Marketing,
    Functional,
}

impl ConsentCategory {
    pub const ALL: [ConsentCategory; 4] = [
        ConsentCategory::Essential,
        ConsentCategory::Functional,
        ConsentCategory::Analytics,
        ConsentCategory::Marketing,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ConsentCategory::Essential => "Essential",
            ConsentCategory::Analytics => "Analytics",
            ConsentCategory::Marketing => "Marketing",
            ConsentCategory::Functional => "Functional",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ConsentCategory::Essential => {
                "Needed for the site to work, such as remembering this choice. Always on."
            }
            ConsentCategory::Analytics => {
                "Anonymous usage statistics that help us see which pages are useful."
            }
            ConsentCategory::Marketing => {
                "Lets us measure campaigns and show relevant Vaultline ads elsewhere."
            }
            ConsentCategory::Functional => {
                "Remembers preferences like your billing cycle and favorited integrations."
            }
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, ConsentCategory::Essential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_and_reject_all() {
        let prefs = Preferences::in_memory();

        let accepted = ConsentPreference::accept_all().save(&prefs);
        assert!(accepted.essential && accepted.analytics && accepted.marketing && accepted.functional);

        ConsentPreference::reject_all().save(&prefs);
        let stored = ConsentPreference::load(&prefs).unwrap();
        assert!(stored.essential);
        assert!(!stored.analytics && !stored.marketing && !stored.functional);
    }

    #[test]
    fn test_essential_forced_on_save() {
        let prefs = Preferences::in_memory();
        let mut sneaky = ConsentPreference::custom(true, false, true);
        sneaky.essential = false;
        sneaky.save(&prefs);

        let stored = ConsentPreference::load(&prefs).unwrap();
        assert!(stored.essential);
        assert!(stored.analytics && stored.functional && !stored.marketing);
    }

    #[test]
    fn test_essential_forced_on_load() {
        let prefs = Preferences::in_memory();
        prefs.write(
            CONSENT_KEY,
            &serde_json::json!({
                "essential": false,
                "analytics": true,
                "marketing": false,
                "functional": false,
                "timestamp": "2024-05-01T10:00:00Z"
            }),
        );
        assert!(ConsentPreference::load(&prefs).unwrap().essential);
    }

    #[test]
    fn test_needs_prompt() {
        let prefs = Preferences::in_memory();
        assert!(ConsentPreference::needs_prompt(&prefs));
        ConsentPreference::accept_all().save(&prefs);
        assert!(!ConsentPreference::needs_prompt(&prefs));
    }

    #[test]
    fn test_prompt_every_time_without_storage() {
        let prefs = Preferences::unavailable();
        ConsentPreference::accept_all().save(&prefs);
        assert!(ConsentPreference::needs_prompt(&prefs));
    }

    #[test]
    fn test_essential_toggle_is_ignored() {
        let mut pref = ConsentPreference::reject_all();
        pref.toggle(ConsentCategory::Essential);
        pref.toggle(ConsentCategory::Analytics);
        assert!(pref.allows(ConsentCategory::Essential));
        assert!(pref.allows(ConsentCategory::Analytics));
        assert!(!pref.allows(ConsentCategory::Marketing));
    }

    #[test]
    fn test_last_write_wins() {
        let prefs = Preferences::in_memory();
        // banner then preference panel
        ConsentPreference::accept_all().save(&prefs);
        ConsentPreference::custom(false, false, true).save(&prefs);
        let stored = ConsentPreference::load(&prefs).unwrap();
        assert!(!stored.analytics && stored.functional);
    }
}

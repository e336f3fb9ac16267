//! Hand-off records between the sign-up and plan selection pages

use crate::content::{find_plan, BillingCycle, Plan};
use crate::forms::SignupForm;
use crate::store::{Preferences, SELECTED_PLAN_KEY, SIGNUP_DRAFT_KEY};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sign-up snapshot. Passwords are never written to browser storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub marketing_opt_in: bool,
    pub created_at: DateTime<Utc>,
}

impl SignupDraft {
    pub fn load(prefs: &Preferences) -> Option<Self> {
        prefs.read(SIGNUP_DRAFT_KEY)
    }

    pub fn save(&self, prefs: &Preferences) {
        prefs.write(SIGNUP_DRAFT_KEY, self);
    }

    /// Drop the draft ("start over" on plan selection)
    pub fn discard(prefs: &Preferences) {
        prefs.remove(SIGNUP_DRAFT_KEY);
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }
}

impl From<&SignupForm> for SignupDraft {
    fn from(form: &SignupForm) -> Self {
        Self {
            first_name: form.first_name.trim().to_string(),
            last_name: form.last_name.trim().to_string(),
            email: form.email.trim().to_string(),
            company: form.company.trim().to_string(),
            marketing_opt_in: form.marketing_opt_in,
            created_at: Utc::now(),
        }
    }
}

/// Plan confirmed on the plan selection page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedPlan {
    pub id: String,
    pub name: String,
    pub billing: BillingCycle,
    /// USD for the chosen billing cycle
    pub price: u32,
    pub selected_at: DateTime<Utc>,
}

impl SelectedPlan {
    pub fn new(plan: &Plan, billing: BillingCycle) -> Self {
        Self {
            id: plan.id.to_string(),
            name: plan.name.to_string(),
            billing,
            price: plan.price(billing).unwrap_or_default(),
            selected_at: Utc::now(),
        }
    }

    pub fn load(prefs: &Preferences) -> Option<Self> {
        prefs.read(SELECTED_PLAN_KEY)
    }

    pub fn save(&self, prefs: &Preferences) {
        prefs.write(SELECTED_PLAN_KEY, self);
    }
}

/// Plan selection path carrying the plan picked on the pricing page.
/// Only known plan ids are passed on; anything else is dropped.
pub fn plan_selection_path(requested: Option<&str>) -> String {
    match requested.and_then(find_plan) {
        Some(plan) => format!("/select-plan?plan={}", plan.id),
        None => "/select-plan".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::find_plan;

    fn form() -> SignupForm {
        SignupForm {
            first_name: " Ada ".into(),
            last_name: "Lovelace".into(),
            email: "ada@analytical.io".into(),
            company: String::new(),
            password: "difference-engine".into(),
            confirm_password: "difference-engine".into(),
            accept_terms: true,
            marketing_opt_in: true,
        }
    }

    #[test]
    fn test_draft_never_contains_password() {
        let draft = SignupDraft::from(&form());
        let json = serde_json::to_string(&draft).unwrap();
        assert!(!json.contains("difference-engine"));
        assert!(json.contains("\"firstName\":\"Ada\""));
        assert!(json.contains("\"marketingOptIn\":true"));
    }

    #[test]
    fn test_draft_survives_reads() {
        let prefs = Preferences::in_memory();
        SignupDraft::from(&form()).save(&prefs);

        let first = SignupDraft::load(&prefs).unwrap();
        let second = SignupDraft::load(&prefs).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.display_name(), "Ada Lovelace");

        SignupDraft::discard(&prefs);
        assert!(SignupDraft::load(&prefs).is_none());
    }

    #[test]
    fn test_selected_plan_price_follows_cycle() {
        let pro = find_plan("professional").unwrap();
        assert_eq!(SelectedPlan::new(pro, BillingCycle::Monthly).price, 49);
        assert_eq!(SelectedPlan::new(pro, BillingCycle::Yearly).price, 490);

        let prefs = Preferences::in_memory();
        SelectedPlan::new(pro, BillingCycle::Yearly).save(&prefs);
        let stored = SelectedPlan::load(&prefs).unwrap();
        assert_eq!(stored.billing, BillingCycle::Yearly);
        assert_eq!(stored.id, "professional");
    }

    #[test]
    fn test_plan_selection_path_only_forwards_known_plans() {
        assert_eq!(plan_selection_path(Some("starter")), "/select-plan?plan=starter");
        assert_eq!(plan_selection_path(None), "/select-plan");
        assert_eq!(plan_selection_path(Some("starter&next=//evil.example")), "/select-plan");
        assert_eq!(plan_selection_path(Some("")), "/select-plan");
    }
}

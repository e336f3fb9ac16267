//! Form submission state machine and the submit boundary
//!
//! Pages drive a [`FormMachine`] through
//! `Editing -> Validating -> Success | Failure`, handing the form to a
//! [`Submitter`] in between. The only submitter today is
//! [`SimulatedSubmitter`], which validates locally and never leaves the
//! browser.

use crate::forms::{FormSpec, Violation};
use crate::store::Preferences;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Proof of an accepted submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    pub reference: Uuid,
    pub form: &'static str,
    pub accepted_at: DateTime<Utc>,
}

impl Receipt {
    pub fn new(form: &'static str) -> Self {
        Self {
            reference: Uuid::new_v4(),
            form,
            accepted_at: Utc::now(),
        }
    }

    /// Short reference shown to the visitor
    pub fn short_reference(&self) -> String {
        self.reference.simple().to_string()[..8].to_uppercase()
    }
}

#[async_trait(?Send)]
pub trait Submitter {
    async fn submit<F: FormSpec + 'static>(&self, form: &F) -> Result<Receipt, Violation>;
}

/// Validates locally and runs the form's acceptance hook
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    prefs: Preferences,
}

impl SimulatedSubmitter {
    pub fn new(prefs: Preferences) -> Self {
        Self { prefs }
    }
}

#[async_trait(?Send)]
impl Submitter for SimulatedSubmitter {
    async fn submit<F: FormSpec + 'static>(&self, form: &F) -> Result<Receipt, Violation> {
        if let Err(violation) = form.validate().into_result() {
            tracing::debug!(form = F::NAME, reason = %violation, "Submission rejected");
            return Err(violation);
        }

        form.on_accepted(&self.prefs);
        let receipt = Receipt::new(F::NAME);
        tracing::info!(form = F::NAME, reference = %receipt.reference, "Submission accepted");
        Ok(receipt)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    /// Accepting input; carries the last failure until the next submit
    Editing { error: Option<Violation> },
    Validating,
    Success(Receipt),
    Failure(Violation),
}

impl Default for FormState {
    fn default() -> Self {
        FormState::Editing { error: None }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormMachine {
    state: FormState,
}

impl FormMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Submit intent. Ignored unless the form is editable, which also
    /// swallows double clicks while a submission is in flight.
    pub fn begin(&mut self) -> bool {
        match self.state {
            FormState::Editing { .. } | FormState::Failure(_) => {
                self.state = FormState::Validating;
                true
            }
            FormState::Validating | FormState::Success(_) => false,
        }
    }

    /// Record the submitter's answer. Only meaningful while validating.
    pub fn resolve(&mut self, outcome: Result<Receipt, Violation>) {
        if self.state != FormState::Validating {
            return;
        }
        self.state = match outcome {
            Ok(receipt) => FormState::Success(receipt),
            Err(violation) => FormState::Failure(violation),
        };
    }

    /// The visitor touched a field after a failure
    pub fn edit(&mut self) {
        if let FormState::Failure(violation) = &self.state {
            self.state = FormState::Editing {
                error: Some(violation.clone()),
            };
        }
    }

    pub fn reset(&mut self) {
        self.state = FormState::default();
    }

    pub fn error(&self) -> Option<&Violation> {
        match &self.state {
            FormState::Editing { error } => error.as_ref(),
            FormState::Failure(violation) => Some(violation),
            _ => None,
        }
    }

    pub fn receipt(&self) -> Option<&Receipt> {
        match &self.state {
            FormState::Success(receipt) => Some(receipt),
            _ => None,
        }
    }

    pub fn is_validating(&self) -> bool {
        self.state == FormState::Validating
    }

    pub fn is_success(&self) -> bool {
        matches!(self.state, FormState::Success(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{NewsletterForm, PlanSelectionForm, SignupForm};
    use crate::content::BillingCycle;
    use crate::signup_flow::{SelectedPlan, SignupDraft};
    use crate::store::MemoryStore;
    use std::rc::Rc;

    fn signup(password: &str, confirm: &str) -> SignupForm {
        SignupForm {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@analytical.io".into(),
            company: String::new(),
            password: password.into(),
            confirm_password: confirm.into(),
            accept_terms: true,
            marketing_opt_in: false,
        }
    }

    #[test]
    fn test_machine_happy_path() {
        let mut machine = FormMachine::new();
        assert!(machine.begin());
        assert!(machine.is_validating());
        assert!(!machine.begin());

        machine.resolve(Ok(Receipt::new("newsletter")));
        assert!(machine.is_success());
        assert!(!machine.begin());
    }

    #[test]
    fn test_failure_returns_to_editing_with_annotation() {
        let mut machine = FormMachine::new();
        machine.begin();
        machine.resolve(Err(Violation::InvalidEmail));
        assert_eq!(machine.state(), &FormState::Failure(Violation::InvalidEmail));

        machine.edit();
        assert_eq!(
            machine.state(),
            &FormState::Editing {
                error: Some(Violation::InvalidEmail)
            }
        );
        assert_eq!(machine.error(), Some(&Violation::InvalidEmail));

        assert!(machine.begin());
        assert_eq!(machine.error(), None);
    }

    #[test]
    fn test_resolve_outside_validating_is_ignored() {
        let mut machine = FormMachine::new();
        machine.resolve(Ok(Receipt::new("newsletter")));
        assert_eq!(machine.state(), &FormState::default());
    }

    #[tokio::test]
    async fn test_signup_success_persists_draft() {
        let prefs = Preferences::in_memory();
        let submitter = SimulatedSubmitter::new(prefs.clone());

        let receipt = submitter.submit(&signup("hunter2hunter2", "hunter2hunter2")).await.unwrap();
        assert_eq!(receipt.form, "signup");
        assert_eq!(receipt.short_reference().len(), 8);

        let draft = SignupDraft::load(&prefs).unwrap();
        assert_eq!(draft.email, "ada@analytical.io");
    }

    #[tokio::test]
    async fn test_signup_mismatch_writes_nothing() {
        let store = Rc::new(MemoryStore::new());
        let submitter = SimulatedSubmitter::new(Preferences::new(store.clone()));

        let result = submitter.submit(&signup("hunter2hunter2", "hunter3")).await;
        assert_eq!(result, Err(Violation::PasswordMismatch));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_newsletter_bad_email_writes_nothing() {
        let store = Rc::new(MemoryStore::new());
        let submitter = SimulatedSubmitter::new(Preferences::new(store.clone()));

        let form = NewsletterForm {
            email: "not-an-email".into(),
        };
        let err = submitter.submit(&form).await.unwrap_err();
        assert_eq!(err.to_string(), "Please enter a valid email address");
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_newsletter_success_writes_nothing() {
        let store = Rc::new(MemoryStore::new());
        let submitter = SimulatedSubmitter::new(Preferences::new(store.clone()));

        let form = NewsletterForm {
            email: "ops@vaultline.io".into(),
        };
        assert!(submitter.submit(&form).await.is_ok());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_plan_selection_persists_plan() {
        let prefs = Preferences::in_memory();
        let submitter = SimulatedSubmitter::new(prefs.clone());
        let form = PlanSelectionForm {
            plan_id: "starter".into(),
            billing: BillingCycle::Yearly,
            accept_terms: true,
        };
        submitter.submit(&form).await.unwrap();
        assert_eq!(SelectedPlan::load(&prefs).unwrap().price, 190);
    }

    #[tokio::test]
    async fn test_machine_with_submitter() {
        let submitter = SimulatedSubmitter::new(Preferences::in_memory());
        let mut machine = FormMachine::new();

        machine.begin();
        machine.resolve(submitter.submit(&signup("abc", "abd")).await);
        assert_eq!(machine.error(), Some(&Violation::PasswordMismatch));

        machine.edit();
        machine.begin();
        machine.resolve(submitter.submit(&signup("long-enough", "long-enough")).await);
        assert!(machine.receipt().is_some());
    }
}

//! Form records and their validation rules
//!
//! Each form is a plain struct with an ordered list of checks. Checks run in
//! order and the first failure is the one reported, so a form never shows
//! more than one error and never hints at which rule would have fired next.

use crate::content::{find_plan, BillingCycle};
use crate::signup_flow::{SelectedPlan, SignupDraft};
use crate::store::Preferences;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MIN_COVER_LETTER_LEN: usize = 50;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://[^\s/$.?#]+\.[^\s]+$").expect("url pattern compiles"));

/// Throwaway inbox providers
pub static DISPOSABLE_DOMAINS: &[&str] = &[
    "mailinator.com",
    "tempmail.com",
    "10minutemail.com",
    "guerrillamail.com",
    "yopmail.com",
    "trashmail.com",
];

/// Addresses that are always turned away
pub static BLOCKED_ADDRESSES: &[&str] = &["test@test.com", "example@example.com"];

/// Local-part fragments reserved for staff accounts on sign-up
pub static RESERVED_LOCAL_PARTS: &[&str] = &["admin", "root"];

/// Why a submission was turned down
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Password must be at least 8 characters")]
    PasswordTooShort,

    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },

    #[error("Please enter a valid URL starting with http:// or https://")]
    InvalidUrl,

    #[error("{0}")]
    ConsentMissing(&'static str),

    #[error("Please choose one of the listed plans")]
    UnknownPlan,

    #[error("The {0} plan is set up with our sales team")]
    SalesOnlyPlan(&'static str),

    #[error("Disposable email addresses are not accepted. Please use your work or personal email")]
    DisposableDomain,

    #[error("This email address cannot be used. Please contact support")]
    BlockedAddress,

    #[error("This email address is reserved. Please use another address or contact support")]
    ReservedAddress,
}

/// What the visitor should do after a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextStep {
    Retry,
    ContactSupport,
    ContactSales,
}

impl Violation {
    pub fn next_step(&self) -> NextStep {
        match self {
            Violation::DisposableDomain | Violation::BlockedAddress | Violation::ReservedAddress => {
                NextStep::ContactSupport
            }
            Violation::SalesOnlyPlan(_) => NextStep::ContactSales,
            _ => NextStep::Retry,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Valid,
    Invalid(Violation),
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid)
    }

    /// Run `next` only if this step passed
    pub fn and_then(self, next: impl FnOnce() -> Validation) -> Validation {
        match self {
            Validation::Valid => next(),
            invalid => invalid,
        }
    }

    pub fn into_result(self) -> Result<(), Violation> {
        match self {
            Validation::Valid => Ok(()),
            Validation::Invalid(v) => Err(v),
        }
    }
}

impl From<Option<Violation>> for Validation {
    fn from(violation: Option<Violation>) -> Self {
        violation.map_or(Validation::Valid, Validation::Invalid)
    }
}

pub type Check<F> = fn(&F) -> Validation;

/// First failing check wins; later checks are not evaluated
pub fn run_checks<F>(form: &F, checks: &[Check<F>]) -> Validation {
    for check in checks {
        let outcome = check(form);
        if !outcome.is_valid() {
            return outcome;
        }
    }
    Validation::Valid
}

/// A submittable form
pub trait FormSpec: Sized + 'static {
    /// Short identifier used in logs and receipts
    const NAME: &'static str;

    fn checks() -> &'static [Check<Self>];

    fn validate(&self) -> Validation {
        run_checks(self, Self::checks())
    }

    /// Runs once the form has passed validation
    fn on_accepted(&self, _prefs: &Preferences) {}
}

// Rule building blocks

pub fn require(value: &str, label: &'static str) -> Validation {
    if value.trim().is_empty() {
        Validation::Invalid(Violation::Required(label))
    } else {
        Validation::Valid
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value.trim())
}

pub fn email_format(value: &str) -> Validation {
    (!is_valid_email(value)).then_some(Violation::InvalidEmail).into()
}

pub fn min_length(value: &str, field: &'static str, min: usize) -> Validation {
    (value.trim().chars().count() < min)
        .then_some(Violation::TooShort { field, min })
        .into()
}

pub fn consent(checked: bool, message: &'static str) -> Validation {
    (!checked).then_some(Violation::ConsentMissing(message)).into()
}

fn email_domain(email: &str) -> Option<&str> {
    email.rsplit_once('@').map(|(_, domain)| domain)
}

/// Simulated server-side refusals: blocked literals and disposable domains
pub fn deny_list(email: &str) -> Validation {
    let email = email.trim().to_lowercase();
    if BLOCKED_ADDRESSES.contains(&email.as_str()) {
        return Validation::Invalid(Violation::BlockedAddress);
    }
    match email_domain(&email) {
        Some(domain) if DISPOSABLE_DOMAINS.contains(&domain) => {
            Validation::Invalid(Violation::DisposableDomain)
        }
        _ => Validation::Valid,
    }
}

pub fn reserved_local_part(email: &str) -> Validation {
    let email = email.trim().to_lowercase();
    let local = email.split('@').next().unwrap_or_default();
    RESERVED_LOCAL_PARTS
        .iter()
        .any(|r| local.contains(*r))
        .then_some(Violation::ReservedAddress)
        .into()
}

// Sign-up

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: String,
    pub password: String,
    pub confirm_password: String,
    pub accept_terms: bool,
    pub marketing_opt_in: bool,
}

static SIGNUP_CHECKS: &[Check<SignupForm>] = &[
    signup_passwords_match,
    signup_required,
    |f| email_format(&f.email),
    signup_password_length,
    |f| consent(f.accept_terms, "Please accept the Terms of Service and Privacy Policy"),
    |f| deny_list(&f.email).and_then(|| reserved_local_part(&f.email)),
];

fn signup_passwords_match(f: &SignupForm) -> Validation {
    (f.password != f.confirm_password)
        .then_some(Violation::PasswordMismatch)
        .into()
}

fn signup_required(f: &SignupForm) -> Validation {
    require(&f.first_name, "First name")
        .and_then(|| require(&f.last_name, "Last name"))
        .and_then(|| require(&f.email, "Email"))
        .and_then(|| require(&f.password, "Password"))
}

fn signup_password_length(f: &SignupForm) -> Validation {
    (f.password.chars().count() < MIN_PASSWORD_LEN)
        .then_some(Violation::PasswordTooShort)
        .into()
}

impl FormSpec for SignupForm {
    const NAME: &'static str = "signup";

    fn checks() -> &'static [Check<Self>] {
        SIGNUP_CHECKS
    }

    fn on_accepted(&self, prefs: &Preferences) {
        SignupDraft::from(self).save(prefs);
    }
}

// Newsletter

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsletterForm {
    pub email: String,
}

static NEWSLETTER_CHECKS: &[Check<NewsletterForm>] = &[
    |f| require(&f.email, "Email"),
    |f| email_format(&f.email),
    |f| deny_list(&f.email),
];

impl FormSpec for NewsletterForm {
    const NAME: &'static str = "newsletter";

    fn checks() -> &'static [Check<Self>] {
        NEWSLETTER_CHECKS
    }
}

// Job application

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobApplicationForm {
    pub job_id: String,
    pub full_name: String,
    pub email: String,
    pub portfolio_url: String,
    pub cover_letter: String,
    pub privacy_consent: bool,
}

static JOB_APPLICATION_CHECKS: &[Check<JobApplicationForm>] = &[
    |f| require(&f.job_id, "Position"),
    |f| require(&f.full_name, "Full name").and_then(|| require(&f.email, "Email")),
    |f| require(&f.cover_letter, "Cover letter"),
    |f| email_format(&f.email),
    job_portfolio_url,
    |f| min_length(&f.cover_letter, "Cover letter", MIN_COVER_LETTER_LEN),
    |f| consent(f.privacy_consent, "Please agree to the applicant privacy notice"),
    |f| deny_list(&f.email),
];

fn job_portfolio_url(f: &JobApplicationForm) -> Validation {
    let url = f.portfolio_url.trim();
    (!url.is_empty() && !URL_RE.is_match(url))
        .then_some(Violation::InvalidUrl)
        .into()
}

impl FormSpec for JobApplicationForm {
    const NAME: &'static str = "job-application";

    fn checks() -> &'static [Check<Self>] {
        JOB_APPLICATION_CHECKS
    }
}

// Documentation request

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocsRequestForm {
    pub name: String,
    pub email: String,
    pub topic: String,
    pub details: String,
}

static DOCS_REQUEST_CHECKS: &[Check<DocsRequestForm>] = &[
    |f| {
        require(&f.name, "Name")
            .and_then(|| require(&f.email, "Email"))
            .and_then(|| require(&f.topic, "Topic"))
    },
    |f| email_format(&f.email),
    |f| deny_list(&f.email),
];

impl FormSpec for DocsRequestForm {
    const NAME: &'static str = "docs-request";

    fn checks() -> &'static [Check<Self>] {
        DOCS_REQUEST_CHECKS
    }
}

// Integration vote

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegrationVoteForm {
    pub integration_name: String,
    pub email: String,
    pub use_case: String,
}

static INTEGRATION_VOTE_CHECKS: &[Check<IntegrationVoteForm>] = &[
    |f| require(&f.integration_name, "Integration name").and_then(|| require(&f.email, "Email")),
    |f| email_format(&f.email),
    |f| deny_list(&f.email),
];

impl FormSpec for IntegrationVoteForm {
    const NAME: &'static str = "integration-vote";

    fn checks() -> &'static [Check<Self>] {
        INTEGRATION_VOTE_CHECKS
    }
}

// Forgot password

/// Deliberately skips the deny-list so the response never reveals whether
/// an address is known.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForgotPasswordForm {
    pub email: String,
}

static FORGOT_PASSWORD_CHECKS: &[Check<ForgotPasswordForm>] =
    &[|f| require(&f.email, "Email"), |f| email_format(&f.email)];

impl FormSpec for ForgotPasswordForm {
    const NAME: &'static str = "forgot-password";

    fn checks() -> &'static [Check<Self>] {
        FORGOT_PASSWORD_CHECKS
    }
}

// Plan selection

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanSelectionForm {
    pub plan_id: String,
    pub billing: BillingCycle,
    pub accept_terms: bool,
}

static PLAN_SELECTION_CHECKS: &[Check<PlanSelectionForm>] = &[
    plan_is_self_serve,
    |f| consent(f.accept_terms, "Please accept the subscription terms"),
];

fn plan_is_self_serve(f: &PlanSelectionForm) -> Validation {
    match find_plan(&f.plan_id) {
        None => Validation::Invalid(Violation::UnknownPlan),
        Some(plan) if plan.price(f.billing).is_none() => {
            Validation::Invalid(Violation::SalesOnlyPlan(plan.name))
        }
        Some(_) => Validation::Valid,
    }
}

impl FormSpec for PlanSelectionForm {
    const NAME: &'static str = "plan-selection";

    fn checks() -> &'static [Check<Self>] {
        PLAN_SELECTION_CHECKS
    }

    fn on_accepted(&self, prefs: &Preferences) {
        if let Some(plan) = find_plan(&self.plan_id) {
            SelectedPlan::new(plan, self.billing).save(prefs);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_signup() -> SignupForm {
        SignupForm {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@analytical.io".into(),
            company: "Analytical Engines".into(),
            password: "difference-engine".into(),
            confirm_password: "difference-engine".into(),
            accept_terms: true,
            marketing_opt_in: false,
        }
    }

    fn violation(v: Validation) -> Violation {
        match v {
            Validation::Invalid(violation) => violation,
            Validation::Valid => panic!("expected a violation"),
        }
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("ops@vaultline.io"));
        assert!(is_valid_email("  first.last+tag@sub.example.co  "));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("two words@example.com"));
        assert!(!is_valid_email("missing@tld"));
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn test_valid_signup_passes() {
        assert_eq!(valid_signup().validate(), Validation::Valid);
    }

    #[test]
    fn test_password_mismatch_wins_over_everything() {
        let form = SignupForm {
            first_name: String::new(),
            email: "not-an-email".into(),
            password: "short".into(),
            confirm_password: "different".into(),
            accept_terms: false,
            ..valid_signup()
        };
        assert_eq!(violation(form.validate()), Violation::PasswordMismatch);

        let form = SignupForm {
            confirm_password: "difference-engine!".into(),
            ..valid_signup()
        };
        assert_eq!(violation(form.validate()), Violation::PasswordMismatch);
    }

    #[test]
    fn test_signup_rule_order() {
        let missing_name = SignupForm {
            first_name: " ".into(),
            email: "bad".into(),
            ..valid_signup()
        };
        assert_eq!(violation(missing_name.validate()), Violation::Required("First name"));

        let bad_email = SignupForm {
            email: "bad".into(),
            password: "short".into(),
            confirm_password: "short".into(),
            ..valid_signup()
        };
        assert_eq!(violation(bad_email.validate()), Violation::InvalidEmail);

        let short = SignupForm {
            password: "short".into(),
            confirm_password: "short".into(),
            accept_terms: false,
            ..valid_signup()
        };
        assert_eq!(violation(short.validate()), Violation::PasswordTooShort);

        let no_terms = SignupForm {
            accept_terms: false,
            email: "x@mailinator.com".into(),
            ..valid_signup()
        };
        assert!(matches!(violation(no_terms.validate()), Violation::ConsentMissing(_)));
    }

    #[test]
    fn test_signup_deny_list() {
        let disposable = SignupForm {
            email: "someone@Mailinator.com".into(),
            ..valid_signup()
        };
        let v = violation(disposable.validate());
        assert_eq!(v, Violation::DisposableDomain);
        assert_eq!(v.next_step(), NextStep::ContactSupport);

        let reserved = SignupForm {
            email: "sysadmin@acme.com".into(),
            ..valid_signup()
        };
        assert_eq!(violation(reserved.validate()), Violation::ReservedAddress);

        let blocked = SignupForm {
            email: "TEST@test.com".into(),
            ..valid_signup()
        };
        assert_eq!(violation(blocked.validate()), Violation::BlockedAddress);
    }

    #[test]
    fn test_newsletter_invalid_email_message() {
        let form = NewsletterForm {
            email: "not-an-email".into(),
        };
        let v = violation(form.validate());
        assert_eq!(v, Violation::InvalidEmail);
        assert_eq!(v.to_string(), "Please enter a valid email address");
        assert_eq!(v.next_step(), NextStep::Retry);
    }

    #[test]
    fn test_newsletter_allows_reserved_local_part() {
        let form = NewsletterForm {
            email: "admin@acme.com".into(),
        };
        assert!(form.validate().is_valid());
    }

    #[test]
    fn test_job_application_rules() {
        let mut form = JobApplicationForm {
            job_id: "support-engineer".into(),
            full_name: "Grace Hopper".into(),
            email: "grace@navy.mil".into(),
            portfolio_url: "github.com/grace".into(),
            cover_letter: "Too short".into(),
            privacy_consent: false,
        };
        assert_eq!(violation(form.validate()), Violation::InvalidUrl);

        form.portfolio_url = "https://github.com/grace".into();
        assert_eq!(
            violation(form.validate()),
            Violation::TooShort { field: "Cover letter", min: MIN_COVER_LETTER_LEN }
        );

        form.cover_letter = "I have spent decades debugging systems and would love to help customers restore theirs.".into();
        assert!(matches!(violation(form.validate()), Violation::ConsentMissing(_)));

        form.privacy_consent = true;
        assert!(form.validate().is_valid());

        form.portfolio_url.clear();
        assert!(form.validate().is_valid());
    }

    #[test]
    fn test_docs_request_required_fields() {
        let form = DocsRequestForm {
            name: "Lin".into(),
            email: "lin@example.org".into(),
            ..Default::default()
        };
        assert_eq!(violation(form.validate()), Violation::Required("Topic"));
    }

    #[test]
    fn test_integration_vote_disposable() {
        let form = IntegrationVoteForm {
            integration_name: "Airtable".into(),
            email: "x@yopmail.com".into(),
            use_case: String::new(),
        };
        assert_eq!(violation(form.validate()), Violation::DisposableDomain);
    }

    #[test]
    fn test_forgot_password_skips_deny_list() {
        let form = ForgotPasswordForm {
            email: "someone@mailinator.com".into(),
        };
        assert!(form.validate().is_valid());
    }

    #[test]
    fn test_plan_selection_rules() {
        let mut form = PlanSelectionForm {
            plan_id: "platinum".into(),
            billing: BillingCycle::Monthly,
            accept_terms: true,
        };
        assert_eq!(violation(form.validate()), Violation::UnknownPlan);

        form.plan_id = "enterprise".into();
        let v = violation(form.validate());
        assert_eq!(v, Violation::SalesOnlyPlan("Enterprise"));
        assert_eq!(v.next_step(), NextStep::ContactSales);

        form.plan_id = "starter".into();
        form.accept_terms = false;
        assert!(matches!(violation(form.validate()), Violation::ConsentMissing(_)));
    }

    #[test]
    fn test_checks_stop_at_first_failure() {
        use std::cell::Cell;
        thread_local!(static LATER_RAN: Cell<bool> = const { Cell::new(false) });

        let checks: &[Check<NewsletterForm>] = &[
            |_| Validation::Invalid(Violation::InvalidEmail),
            |_| {
                LATER_RAN.with(|c| c.set(true));
                Validation::Valid
            },
        ];
        let outcome = run_checks(&NewsletterForm::default(), checks);
        assert_eq!(outcome, Validation::Invalid(Violation::InvalidEmail));
        assert!(!LATER_RAN.with(|c| c.get()));
    }

    fn first_violation<F: FormSpec>(form: &F) -> Option<Violation> {
        form.validate().into_result().err()
    }

    #[test]
    fn test_validation_through_generic_bound() {
        assert_eq!(
            first_violation(&NewsletterForm { email: "not-an-email".into() }),
            Some(Violation::InvalidEmail)
        );
        assert_eq!(
            first_violation(&ForgotPasswordForm { email: "ops@vaultline.io".into() }),
            None
        );
    }
}

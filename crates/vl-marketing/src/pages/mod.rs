//! Marketing site pages

mod blog;
mod careers;
mod docs;
mod forgot_password;
mod guides;
mod help;
mod home;
mod integrations;
mod legal;
mod pricing;
mod security;
mod select_plan;
mod signup;

pub use blog::BlogPage;
pub use careers::CareersPage;
pub use docs::DocsPage;
pub use forgot_password::ForgotPasswordPage;
pub use guides::GuidesPage;
pub use help::{HelpCenterPage, HelpTopicPage};
pub use home::HomePage;
pub use integrations::IntegrationsPage;
pub use legal::{CookiesPage, PrivacyPage, TermsPage};
pub use pricing::PricingPage;
pub use security::SecurityPage;
pub use select_plan::SelectPlanPage;
pub use signup::SignupPage;

//! Static marketing copy
//!
//! Every listing on the site is a build-time table defined in [`tables`].
//! The record types here carry the category tags the filters narrow by.

mod tables;

pub use tables::*;

use crate::filter::Searchable;
use serde::Serialize;
use std::fmt;

/// Billing cadence shown by the pricing toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    #[default]
    Monthly,
    Yearly,
}

impl BillingCycle {
    pub fn label(&self) -> &'static str {
        match self {
            BillingCycle::Monthly => "Monthly",
            BillingCycle::Yearly => "Yearly",
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            BillingCycle::Monthly => "/month",
            BillingCycle::Yearly => "/year",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            BillingCycle::Monthly => BillingCycle::Yearly,
            BillingCycle::Yearly => BillingCycle::Monthly,
        }
    }
}

/// A subscription tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plan {
    pub id: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    /// USD per month; `None` means "contact sales"
    pub monthly_price: Option<u32>,
    /// USD per year; `None` means "contact sales"
    pub yearly_price: Option<u32>,
    pub features: &'static [&'static str],
    pub highlighted: bool,
}

impl Plan {
    pub fn price(&self, cycle: BillingCycle) -> Option<u32> {
        match cycle {
            BillingCycle::Monthly => self.monthly_price,
            BillingCycle::Yearly => self.yearly_price,
        }
    }

    pub fn price_label(&self, cycle: BillingCycle) -> String {
        match self.price(cycle) {
            Some(0) => "Free".to_string(),
            Some(price) => format!("${}", price),
            None => "Custom".to_string(),
        }
    }

    /// Whole-percent saving of yearly billing over twelve monthly payments
    pub fn yearly_savings_percent(&self) -> Option<u32> {
        let monthly = self.monthly_price?;
        let yearly = self.yearly_price?;
        let full = monthly * 12;
        if full == 0 || yearly >= full {
            return None;
        }
        Some((full - yearly) * 100 / full)
    }
}

pub fn find_plan(id: &str) -> Option<&'static Plan> {
    PLANS.iter().find(|p| p.id == id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaqCategory {
    General,
    Billing,
    Backups,
    Security,
}

impl FaqCategory {
    pub const ALL: [FaqCategory; 4] = [
        FaqCategory::General,
        FaqCategory::Billing,
        FaqCategory::Backups,
        FaqCategory::Security,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FaqCategory::General => "General",
            FaqCategory::Billing => "Billing",
            FaqCategory::Backups => "Backups",
            FaqCategory::Security => "Security",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
    pub category: FaqCategory,
}

impl Searchable for Faq {
    type Category = FaqCategory;

    fn category(&self) -> &FaqCategory {
        &self.category
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.question, self.answer]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlogCategory {
    Product,
    Engineering,
    Security,
    Guides,
    Company,
}

impl BlogCategory {
    pub const ALL: [BlogCategory; 5] = [
        BlogCategory::Product,
        BlogCategory::Engineering,
        BlogCategory::Security,
        BlogCategory::Guides,
        BlogCategory::Company,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BlogCategory::Product => "Product",
            BlogCategory::Engineering => "Engineering",
            BlogCategory::Security => "Security",
            BlogCategory::Guides => "Guides",
            BlogCategory::Company => "Company",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPost {
    pub slug: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub category: BlogCategory,
    pub author: &'static str,
    pub published: &'static str,
    pub read_minutes: u32,
}

impl Searchable for BlogPost {
    type Category = BlogCategory;

    fn category(&self) -> &BlogCategory {
        &self.category
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title, self.excerpt, self.author]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuideCategory {
    Databases,
    Cloud,
    Servers,
    Saas,
}

impl GuideCategory {
    pub const ALL: [GuideCategory; 4] = [
        GuideCategory::Databases,
        GuideCategory::Cloud,
        GuideCategory::Servers,
        GuideCategory::Saas,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            GuideCategory::Databases => "Databases",
            GuideCategory::Cloud => "Cloud Storage",
            GuideCategory::Servers => "Servers",
            GuideCategory::Saas => "SaaS Apps",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Beginner => write!(f, "Beginner"),
            Difficulty::Intermediate => write!(f, "Intermediate"),
            Difficulty::Advanced => write!(f, "Advanced"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupGuide {
    pub title: &'static str,
    pub summary: &'static str,
    pub category: GuideCategory,
    pub minutes: u32,
    pub difficulty: Difficulty,
}

impl Searchable for SetupGuide {
    type Category = GuideCategory;

    fn category(&self) -> &GuideCategory {
        &self.category
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title, self.summary]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntegrationCategory {
    Database,
    Storage,
    Productivity,
    DevOps,
}

impl IntegrationCategory {
    pub const ALL: [IntegrationCategory; 4] = [
        IntegrationCategory::Database,
        IntegrationCategory::Storage,
        IntegrationCategory::Productivity,
        IntegrationCategory::DevOps,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            IntegrationCategory::Database => "Database",
            IntegrationCategory::Storage => "Storage",
            IntegrationCategory::Productivity => "Productivity",
            IntegrationCategory::DevOps => "DevOps",
        }
    }
}

/// An integration listed (or requested) on the voting page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Integration {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: IntegrationCategory,
    pub votes: u32,
    pub available: bool,
}

impl Searchable for Integration {
    type Category = IntegrationCategory;

    fn category(&self) -> &IntegrationCategory {
        &self.category
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name, self.description]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobOpening {
    pub id: &'static str,
    pub title: &'static str,
    pub team: &'static str,
    pub location: &'static str,
    pub kind: &'static str,
    pub summary: &'static str,
}

pub fn find_job(id: &str) -> Option<&'static JobOpening> {
    JOB_OPENINGS.iter().find(|j| j.id == id)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certificate {
    pub name: &'static str,
    pub issuer: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// A help-center article reachable under `/jhelp/<slug>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpTopic {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub sections: &'static [(&'static str, &'static str)],
}

/// Topic for `slug`, falling back to the general docs topic
pub fn help_topic(slug: &str) -> &'static HelpTopic {
    HELP_TOPICS
        .iter()
        .find(|t| t.slug == slug)
        .unwrap_or(&HELP_TOPICS[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{filter_records, CategoryFilter, FilterCriteria};
    use std::collections::HashSet;

    #[test]
    fn test_yearly_savings() {
        let pro = find_plan("professional").unwrap();
        assert_eq!(pro.yearly_savings_percent(), Some(16));
        assert_eq!(find_plan("enterprise").unwrap().yearly_savings_percent(), None);
    }

    #[test]
    fn test_price_labels() {
        assert_eq!(find_plan("starter").unwrap().price_label(BillingCycle::Monthly), "$19");
        assert_eq!(find_plan("enterprise").unwrap().price_label(BillingCycle::Yearly), "Custom");
    }

    #[test]
    fn test_unknown_help_topic_falls_back_to_docs() {
        assert_eq!(help_topic("no-such-topic").slug, "docs");
        assert_eq!(help_topic("restore").slug, "restore");
    }

    #[test]
    fn test_identifiers_are_unique() {
        let plan_ids: HashSet<_> = PLANS.iter().map(|p| p.id).collect();
        assert_eq!(plan_ids.len(), PLANS.len());

        let integration_ids: HashSet<_> = INTEGRATIONS.iter().map(|i| i.id).collect();
        assert_eq!(integration_ids.len(), INTEGRATIONS.len());

        let slugs: HashSet<_> = BLOG_POSTS.iter().map(|p| p.slug).collect();
        assert_eq!(slugs.len(), BLOG_POSTS.len());
    }

    #[test]
    fn test_every_blog_category_has_posts() {
        for category in BlogCategory::ALL {
            let criteria = FilterCriteria::new("", CategoryFilter::Only(category));
            assert!(!filter_records(BLOG_POSTS, &criteria).is_empty(), "{:?}", category);
        }
    }

    #[test]
    fn test_guide_search() {
        let criteria = FilterCriteria::new("postgres", CategoryFilter::All);
        let found = filter_records(SETUP_GUIDES, &criteria);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].category, GuideCategory::Databases);
    }
}

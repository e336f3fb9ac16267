//! Vaultline Site Core
//!
//! Everything the marketing site does besides rendering: the static content
//! tables, the search/category filter, help-center routing, the browser
//! preference store (consent, favorites, sign-up handoff) and the simulated
//! form submission pipeline.

pub mod consent;
pub mod content;
pub mod favorites;
pub mod filter;
pub mod forms;
pub mod help_router;
pub mod signup_flow;
pub mod store;
pub mod submission;
pub mod timing;

use thiserror::Error;

pub use consent::ConsentPreference;
pub use favorites::{FavoriteRecord, Favorites};
pub use filter::{CategoryFilter, FilterCriteria, Searchable, VisibleWindow};
pub use forms::{FormSpec, NextStep, Validation, Violation};
pub use help_router::HelpRouter;
pub use signup_flow::{SelectedPlan, SignupDraft};
pub use store::{MemoryStore, PreferenceStore, Preferences, StoreError, UnavailableStore};
pub use submission::{FormMachine, FormState, Receipt, SimulatedSubmitter, Submitter};

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_display() {
        let err = CoreError::from(StoreError::Unavailable);
        assert_eq!(err.to_string(), "Storage error: local storage is unavailable");
    }
}

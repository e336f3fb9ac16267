//! Browser storage wiring
//!
//! Pages ask for [`Preferences`] through context. In the browser that is
//! backed by `window.localStorage`; on the server, or when storage is
//! switched off, every read comes back empty.

use leptos::*;
use std::rc::Rc;
use vl_core::Preferences;

#[cfg(feature = "hydrate")]
mod browser {
    use vl_core::{PreferenceStore, StoreError};

    /// `window.localStorage`
    pub struct BrowserStore {
        storage: web_sys::Storage,
    }

    impl BrowserStore {
        /// `None` when the browser refuses access to local storage
        pub fn open() -> Option<Self> {
            let storage = web_sys::window()?.local_storage().ok().flatten()?;
            Some(Self { storage })
        }
    }

    impl PreferenceStore for BrowserStore {
        fn get(&self, key: &str) -> Option<String> {
            self.storage.get_item(key).ok().flatten()
        }

        fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
            self.storage
                .set_item(key, &value)
                .map_err(|e| StoreError::WriteRejected(format!("{:?}", e)))
        }

        fn delete(&self, key: &str) {
            if let Err(e) = self.storage.remove_item(key) {
                tracing::debug!(key, error = ?e, "Preference delete failed");
            }
        }
    }
}

fn open_preferences() -> Preferences {
    #[cfg(feature = "hydrate")]
    {
        if let Some(store) = browser::BrowserStore::open() {
            return Preferences::new(Rc::new(store));
        }
        tracing::debug!("Local storage unavailable, preferences will not persist");
    }
    Preferences::new(Rc::new(vl_core::UnavailableStore))
}

/// Install the preference store for the whole app
pub fn provide_preferences() {
    provide_context(open_preferences());
}

pub fn use_preferences() -> Preferences {
    use_context::<Preferences>().unwrap_or_else(Preferences::unavailable)
}

//! Favorited integrations on the voting page

use crate::content::Integration;
use crate::store::{Preferences, FAVORITES_KEY};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteRecord {
    pub id: String,
    pub name: String,
    pub category: String,
    pub votes: u32,
    pub timestamp: DateTime<Utc>,
}

impl From<&Integration> for FavoriteRecord {
    fn from(integration: &Integration) -> Self {
        Self {
            id: integration.id.to_string(),
            name: integration.name.to_string(),
            category: integration.category.label().to_string(),
            votes: integration.votes,
            timestamp: Utc::now(),
        }
    }
}

/// Ordered favorites list, unique by id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    records: Vec<FavoriteRecord>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(prefs: &Preferences) -> Self {
        let stored: Vec<FavoriteRecord> = prefs.read(FAVORITES_KEY).unwrap_or_default();
        let mut favorites = Self::new();
        // Drop duplicate ids from hand-edited or older data, keeping the first
        for record in stored {
            if !favorites.contains(&record.id) {
                favorites.records.push(record);
            }
        }
        favorites
    }

    pub fn save(&self, prefs: &Preferences) {
        prefs.write(FAVORITES_KEY, &self.records);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.iter().any(|r| r.id == id)
    }

    /// Add `record` if its id is new, otherwise remove the existing entry.
    /// Returns true when the record was added.
    pub fn toggle(&mut self, record: FavoriteRecord) -> bool {
        if let Some(index) = self.records.iter().position(|r| r.id == record.id) {
            self.records.remove(index);
            false
        } else {
            self.records.push(record);
            true
        }
    }

    pub fn records(&self) -> &[FavoriteRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::INTEGRATIONS;

    #[test]
    fn test_toggle_twice_round_trips() {
        let mut favorites = Favorites::new();
        favorites.toggle(FavoriteRecord::from(&INTEGRATIONS[0]));
        let before = favorites.clone();

        assert!(favorites.toggle(FavoriteRecord::from(&INTEGRATIONS[3])));
        assert!(!favorites.toggle(FavoriteRecord::from(&INTEGRATIONS[3])));
        assert_eq!(favorites, before);
    }

    #[test]
    fn test_ids_stay_unique() {
        let mut favorites = Favorites::new();
        let redis = FavoriteRecord::from(&INTEGRATIONS[2]);
        favorites.toggle(redis.clone());
        favorites.toggle(redis.clone());
        favorites.toggle(redis);
        assert_eq!(favorites.len(), 1);
    }

    #[test]
    fn test_persisted_round_trip() {
        let prefs = Preferences::in_memory();
        let mut favorites = Favorites::load(&prefs);
        assert!(favorites.is_empty());

        favorites.toggle(FavoriteRecord::from(&INTEGRATIONS[6]));
        favorites.toggle(FavoriteRecord::from(&INTEGRATIONS[8]));
        favorites.save(&prefs);

        let reloaded = Favorites::load(&prefs);
        assert_eq!(reloaded, favorites);
        assert!(reloaded.contains("notion"));
        assert_eq!(reloaded.records()[1].category, "DevOps");
    }

    #[test]
    fn test_load_drops_duplicate_ids() {
        let prefs = Preferences::in_memory();
        let record = FavoriteRecord::from(&INTEGRATIONS[0]);
        prefs.write(FAVORITES_KEY, &vec![record.clone(), record]);
        assert_eq!(Favorites::load(&prefs).len(), 1);
    }
}

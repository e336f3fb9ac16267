//! Search and category filtering over static content tables

use serde::{Deserialize, Serialize};

/// Records shown by the blog, guide and FAQ listings
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Category selector; `All` disables category narrowing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryFilter<C> {
    All,
    Only(C),
}

impl<C> Default for CategoryFilter<C> {
    fn default() -> Self {
        CategoryFilter::All
    }
}

impl<C: PartialEq> CategoryFilter<C> {
    pub fn admits(&self, category: &C) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }
}

/// Current query text plus selected category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria<C> {
    pub query: String,
    pub category: CategoryFilter<C>,
}

impl<C> Default for FilterCriteria<C> {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: CategoryFilter::All,
        }
    }
}

impl<C> FilterCriteria<C> {
    pub fn new(query: impl Into<String>, category: CategoryFilter<C>) -> Self {
        Self {
            query: query.into(),
            category,
        }
    }

    /// Back to an empty query and every category
    pub fn reset(&mut self) {
        self.query.clear();
        self.category = CategoryFilter::All;
    }

    pub fn is_default(&self) -> bool {
        self.query.trim().is_empty() && matches!(self.category, CategoryFilter::All)
    }

    fn needle(&self) -> Option<String> {
        let trimmed = self.query.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        }
    }
}

/// Case-insensitive substring containment. `needle` is already lowercase.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Narrow `records` to those admitted by `criteria`.
///
/// `category_of` picks the record's category, `fields` picks the text fields
/// the query is matched against, and `matcher` compares one field with the
/// lowercased query. Relative order is kept and `records` is not touched.
pub fn filter<'a, T, C, K, F, M>(
    records: &'a [T],
    criteria: &FilterCriteria<C>,
    category_of: K,
    fields: F,
    matcher: M,
) -> Vec<&'a T>
where
    C: PartialEq,
    K: Fn(&T) -> &C,
    F: Fn(&T) -> Vec<&str>,
    M: Fn(&str, &str) -> bool,
{
    let needle = criteria.needle();

    records
        .iter()
        .filter(|record| criteria.category.admits(category_of(*record)))
        .filter(|record| match &needle {
            None => true,
            Some(needle) => fields(*record)
                .into_iter()
                .any(|field| matcher(field, needle.as_str())),
        })
        .collect()
}

/// A record type that knows its category and which text is searchable
pub trait Searchable {
    type Category: PartialEq;

    fn category(&self) -> &Self::Category;

    fn search_fields(&self) -> Vec<&str>;
}

/// [`filter`] with the record's own field selection and the default matcher
pub fn filter_records<'a, T: Searchable>(
    records: &'a [T],
    criteria: &FilterCriteria<T::Category>,
) -> Vec<&'a T> {
    filter(
        records,
        criteria,
        |r| r.category(),
        |r| r.search_fields(),
        contains_ignore_case,
    )
}

/// "Load more" cursor. Grows by one page at a time and never shrinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleWindow {
    page_size: usize,
    visible: usize,
}

impl VisibleWindow {
    pub fn new(page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            page_size,
            visible: page_size,
        }
    }

    pub fn visible_count(&self) -> usize {
        self.visible
    }

    pub fn load_more(&mut self) {
        self.visible = self.visible.saturating_add(self.page_size);
    }

    pub fn has_more(&self, total: usize) -> bool {
        total > self.visible
    }

    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..items.len().min(self.visible)]
    }
}

impl Default for VisibleWindow {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Topic {
        Backups,
        Billing,
    }

    #[derive(Debug, PartialEq)]
    struct Entry {
        title: &'static str,
        body: &'static str,
        topic: Topic,
    }

    impl Searchable for Entry {
        type Category = Topic;

        fn category(&self) -> &Topic {
            &self.topic
        }

        fn search_fields(&self) -> Vec<&str> {
            vec![self.title, self.body]
        }
    }

    fn entries() -> Vec<Entry> {
        vec![
            Entry { title: "Nightly backups", body: "Schedule jobs at 2am", topic: Topic::Backups },
            Entry { title: "Invoices", body: "Download past invoices", topic: Topic::Billing },
            Entry { title: "Backup retention", body: "Keep 30 days of snapshots", topic: Topic::Backups },
            Entry { title: "Change plan", body: "Upgrade or downgrade your BACKUP plan", topic: Topic::Billing },
        ]
    }

    fn titles(found: &[&Entry]) -> Vec<&'static str> {
        found.iter().map(|e| e.title).collect()
    }

    #[test]
    fn test_empty_criteria_returns_everything_in_order() {
        let all = entries();
        let found = filter_records(&all, &FilterCriteria::default());
        assert_eq!(found.len(), all.len());
        assert!(found.iter().zip(all.iter()).all(|(a, b)| std::ptr::eq(*a, b)));
    }

    #[test]
    fn test_query_is_case_insensitive_across_fields() {
        let all = entries();
        let found = filter_records(&all, &FilterCriteria::new("backup", CategoryFilter::All));
        assert_eq!(titles(&found), vec!["Nightly backups", "Backup retention", "Change plan"]);
    }

    #[test]
    fn test_whitespace_query_is_ignored() {
        let all = entries();
        let found = filter_records(&all, &FilterCriteria::new("   ", CategoryFilter::All));
        assert_eq!(found.len(), 4);
    }

    #[test]
    fn test_category_and_query_combine() {
        let all = entries();
        let criteria = FilterCriteria::new("backup", CategoryFilter::Only(Topic::Billing));
        assert_eq!(titles(&filter_records(&all, &criteria)), vec!["Change plan"]);
    }

    #[test]
    fn test_result_is_ordered_subset() {
        let all = entries();
        for query in ["", "b", "ba", "plan", "snap", "zzz"] {
            let found = filter_records(&all, &FilterCriteria::new(query, CategoryFilter::All));
            let mut last = None;
            for item in found {
                let index = all.iter().position(|e| std::ptr::eq(e, item)).unwrap();
                assert!(last.map_or(true, |l| index > l), "reordered or duplicated for {query:?}");
                last = Some(index);
            }
        }
    }

    #[test]
    fn test_longer_query_never_widens() {
        let all = entries();
        let mut previous = filter_records(&all, &FilterCriteria::default());
        let mut query = String::new();
        for ch in "backup".chars() {
            query.push(ch);
            let current = filter_records(&all, &FilterCriteria::new(query.clone(), CategoryFilter::All));
            assert!(current.iter().all(|c| previous.iter().any(|p| std::ptr::eq(*p, *c))));
            previous = current;
        }
    }

    #[test]
    fn test_reset_restores_full_list() {
        let all = entries();
        let mut criteria = FilterCriteria::new("invoice", CategoryFilter::Only(Topic::Billing));
        assert_eq!(filter_records(&all, &criteria).len(), 1);
        assert!(!criteria.is_default());

        criteria.reset();
        assert!(criteria.is_default());
        assert_eq!(titles(&filter_records(&all, &criteria)), titles(&all.iter().collect::<Vec<_>>()));
    }

    #[test]
    fn test_custom_matcher() {
        let all = entries();
        let prefix = |field: &str, needle: &str| field.to_lowercase().starts_with(needle);
        let found = filter(&all, &FilterCriteria::new("back", CategoryFilter::All), |e| &e.topic, |e| vec![e.title], prefix);
        assert_eq!(titles(&found), vec!["Backup retention"]);
    }

    #[test]
    fn test_visible_window_grows_by_page() {
        let items: Vec<u32> = (0..14).collect();
        let mut window = VisibleWindow::new(6);
        assert_eq!(window.visible(&items).len(), 6);
        assert!(window.has_more(items.len()));

        window.load_more();
        window.load_more();
        assert_eq!(window.visible(&items).len(), 14);
        assert!(!window.has_more(items.len()));
        assert_eq!(window.visible_count(), 18);
    }

    #[test]
    fn test_visible_window_zero_page_size() {
        let window = VisibleWindow::new(0);
        assert_eq!(window.visible_count(), 1);
    }
}

//! The catalog store: product list, filter criteria, the derived
//! filtered view, and the remote fetch lifecycle.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// Sentinel category selecting the whole catalog.
pub const ALL_CATEGORIES: &str = "all";

/// Lifecycle of a remote catalog fetch.
///
/// `Idle -> Loading -> {Succeeded, Failed}`. A retry re-enters `Loading`
/// from either terminal state; there is no transition back to `Idle`.
/// `Loading` is the only state in which a fetch is presumed in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FetchStatus {
    /// No fetch has been started yet.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The last fetch resolved successfully.
    Succeeded,
    /// The last fetch failed.
    Failed,
}

impl FetchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchStatus::Idle => "idle",
            FetchStatus::Loading => "loading",
            FetchStatus::Succeeded => "succeeded",
            FetchStatus::Failed => "failed",
        }
    }

    /// Check if the fetch has resolved, either way.
    pub fn is_terminal(&self) -> bool {
        matches!(self, FetchStatus::Succeeded | FetchStatus::Failed)
    }
}

/// Product catalog state.
///
/// Owns the full product list, the category vocabulary, and the active
/// filter criteria. The filtered view is recomputed synchronously on
/// every mutation that can affect it; it is never independently set and
/// never stale. Every operation is a total function over its inputs.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    items: Vec<Product>,
    filtered: Vec<Product>,
    categories: Vec<String>,
    selected_category: String,
    search_query: String,
    status: FetchStatus,
    error: Option<String>,
}

impl CatalogStore {
    /// Create an empty store with default criteria and an idle lifecycle.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            filtered: Vec::new(),
            categories: vec![ALL_CATEGORIES.to_string()],
            selected_category: ALL_CATEGORIES.to_string(),
            search_query: String::new(),
            status: FetchStatus::Idle,
            error: None,
        }
    }

    /// The full product list, ordered as received.
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// The filtered view for the active category and search text.
    pub fn filtered_items(&self) -> &[Product] {
        &self.filtered
    }

    /// Category vocabulary: the `"all"` sentinel first, then the
    /// server-provided names in received order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// The active category filter.
    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    /// The active search text, as given.
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Current fetch lifecycle state.
    pub fn status(&self) -> FetchStatus {
        self.status
    }

    /// Message from the last failed fetch, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// A product fetch went out: enter `Loading` and clear any prior error.
    pub fn fetch_started(&mut self) {
        self.status = FetchStatus::Loading;
        self.error = None;
    }

    /// A product fetch resolved: replace the catalog and refilter against
    /// the current criteria. At first load the criteria are still the
    /// defaults, so the filtered view coincides with the full list.
    pub fn products_loaded(&mut self, items: Vec<Product>) {
        self.items = items;
        self.status = FetchStatus::Succeeded;
        self.refilter();
    }

    /// A product fetch failed. The message must describe the failure class.
    pub fn fetch_failed(&mut self, message: impl Into<String>) {
        self.status = FetchStatus::Failed;
        self.error = Some(message.into());
    }

    /// The category fetch resolved. Upstream order is kept verbatim,
    /// duplicates and all; the lifecycle of the product fetch is untouched.
    pub fn categories_loaded(&mut self, categories: Vec<String>) {
        let mut vocabulary = Vec::with_capacity(categories.len() + 1);
        vocabulary.push(ALL_CATEGORIES.to_string());
        vocabulary.extend(categories);
        self.categories = vocabulary;
    }

    /// Select the active category. Membership in the vocabulary is not
    /// validated: an unknown category filters to an empty view.
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.selected_category = category.into();
        self.refilter();
    }

    /// Set the active search text. Stored as given; matching lowercases
    /// both sides.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.refilter();
    }

    /// The filter predicate: category is exact-match (with `"all"`
    /// selecting everything), search text is a case-insensitive substring
    /// of the title or the description. Both clauses must hold.
    fn matches(product: &Product, category: &str, query: &str) -> bool {
        let in_category = category == ALL_CATEGORIES || product.category == category;
        if !in_category {
            return false;
        }
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        product.title.to_lowercase().contains(&needle)
            || product.description.to_lowercase().contains(&needle)
    }

    // O(items) on every mutation; catalogs are small.
    fn refilter(&mut self) {
        self.filtered = self
            .items
            .iter()
            .filter(|p| Self::matches(p, &self.selected_category, &self.search_query))
            .cloned()
            .collect();
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ProductId, Rating};
    use crate::money::Money;

    fn product(id: u64, title: &str, description: &str, category: &str) -> Product {
        Product {
            id: ProductId::new(id),
            title: title.to_string(),
            price: Money::from_cents(1000),
            description: description.to_string(),
            category: category.to_string(),
            image: format!("https://catalog.example/img/{id}.png"),
            rating: Rating {
                rate: 4.0,
                count: 10,
            },
        }
    }

    fn loaded_store() -> CatalogStore {
        let mut store = CatalogStore::new();
        store.fetch_started();
        store.products_loaded(vec![
            product(1, "Gold Signet Ring", "Hand-polished 18k gold", "jewelery"),
            product(2, "Silver Chain", "Sterling silver rope chain", "jewelery"),
            product(3, "Noise-Cancelling Headphones", "Over-ear, 30h battery", "electronics"),
        ]);
        store
    }

    #[test]
    fn test_new_store_is_idle_and_empty() {
        let store = CatalogStore::new();
        assert_eq!(store.status(), FetchStatus::Idle);
        assert!(store.items().is_empty());
        assert!(store.filtered_items().is_empty());
        assert_eq!(store.selected_category(), ALL_CATEGORIES);
        assert_eq!(store.search_query(), "");
        assert!(store.error().is_none());
    }

    #[test]
    fn test_fetch_lifecycle_success() {
        let mut store = CatalogStore::new();
        store.fetch_started();
        assert_eq!(store.status(), FetchStatus::Loading);

        store.products_loaded(vec![product(1, "Ring", "gold", "jewelery")]);
        assert_eq!(store.status(), FetchStatus::Succeeded);
        assert_eq!(store.items().len(), 1);
        assert_eq!(store.filtered_items().len(), 1);
    }

    #[test]
    fn test_fetch_lifecycle_failure() {
        let mut store = CatalogStore::new();
        store.fetch_started();
        store.fetch_failed("failed to fetch products: connection refused");

        assert_eq!(store.status(), FetchStatus::Failed);
        let error = store.error().unwrap();
        assert!(!error.is_empty());

        // Retry re-enters Loading and clears the error.
        store.fetch_started();
        assert_eq!(store.status(), FetchStatus::Loading);
        assert!(store.error().is_none());
    }

    #[test]
    fn test_category_filter() {
        let mut store = loaded_store();
        store.set_category("jewelery");

        assert_eq!(store.filtered_items().len(), 2);
        assert!(store
            .filtered_items()
            .iter()
            .all(|p| p.category == "jewelery"));
    }

    #[test]
    fn test_unknown_category_yields_empty_view() {
        let mut store = loaded_store();
        store.set_category("perfume");
        assert!(store.filtered_items().is_empty());
    }

    #[test]
    fn test_set_category_is_idempotent() {
        let mut store = loaded_store();
        store.set_category("electronics");
        let once = store.filtered_items().to_vec();
        store.set_category("electronics");
        assert_eq!(store.filtered_items(), once.as_slice());
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let mut store = loaded_store();

        store.set_search_query("GOLD");
        assert_eq!(store.filtered_items().len(), 1);
        assert_eq!(store.filtered_items()[0].id, ProductId::new(1));

        // Matches in the description too.
        store.set_search_query("rope chain");
        assert_eq!(store.filtered_items().len(), 1);
        assert_eq!(store.filtered_items()[0].id, ProductId::new(2));
    }

    #[test]
    fn test_category_match_is_case_sensitive() {
        let mut store = loaded_store();
        store.set_category("Jewelery");
        assert!(store.filtered_items().is_empty());
    }

    #[test]
    fn test_both_filter_clauses_must_hold() {
        let mut store = loaded_store();
        store.set_category("electronics");
        store.set_search_query("gold");
        assert!(store.filtered_items().is_empty());
    }

    #[test]
    fn test_filtered_view_never_stale() {
        let mut store = loaded_store();
        store.set_search_query("silver");
        store.set_category("jewelery");
        store.set_search_query("");
        store.set_category(ALL_CATEGORIES);

        // Back to defaults: the view is the whole catalog again.
        assert_eq!(store.filtered_items(), store.items());
    }

    #[test]
    fn test_reload_refilters_against_current_criteria() {
        let mut store = loaded_store();
        store.set_category("electronics");

        store.fetch_started();
        store.products_loaded(vec![
            product(4, "Desk Lamp", "Warm LED", "home"),
            product(5, "USB Hub", "7 ports", "electronics"),
        ]);

        assert_eq!(store.filtered_items().len(), 1);
        assert_eq!(store.filtered_items()[0].id, ProductId::new(5));
    }

    #[test]
    fn test_categories_prepend_sentinel() {
        let mut store = CatalogStore::new();
        store.categories_loaded(vec!["electronics".to_string(), "jewelery".to_string()]);
        assert_eq!(store.categories(), ["all", "electronics", "jewelery"]);
    }

    #[test]
    fn test_categories_keep_upstream_duplicates() {
        let mut store = CatalogStore::new();
        store.categories_loaded(vec![
            "all".to_string(),
            "jewelery".to_string(),
            "jewelery".to_string(),
        ]);
        assert_eq!(store.categories(), ["all", "all", "jewelery", "jewelery"]);
    }

    #[test]
    fn test_scenario_fetch_then_filter() {
        let mut store = CatalogStore::new();
        store.fetch_started();
        store.products_loaded(vec![
            product(1, "One", "first", "a"),
            product(2, "Two", "second", "a"),
            product(3, "Three", "third", "b"),
        ]);
        store.set_category("a");

        assert_eq!(store.filtered_items().len(), 2);
        assert!(store.filtered_items().iter().all(|p| p.category == "a"));
    }
}

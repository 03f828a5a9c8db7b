//! Product table store.

use chrono::Utc;
use medilink_core::{Product, ProductId};

use super::matches;
use crate::fixtures;

/// The products table: searchable by name, category, or supplier, and
/// filterable by category.
#[derive(Debug, Clone)]
pub struct ProductStore {
    items: Vec<Product>,
}

impl ProductStore {
    /// Create a store over an explicit item set.
    #[must_use]
    pub const fn new(items: Vec<Product>) -> Self {
        Self { items }
    }

    /// Create a store preloaded with the dashboard fixtures.
    #[must_use]
    pub fn with_fixtures() -> Self {
        Self::new(fixtures::products())
    }

    /// All products, in display order.
    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.items
    }

    /// Number of products in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Distinct categories in insertion order, for the filter dropdown.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for product in &self.items {
            if !categories.contains(&product.category) {
                categories.push(product.category.clone());
            }
        }
        categories
    }

    /// The rows the table renders for a search term and category filter.
    ///
    /// The search term matches name, category, or supplier; `None`
    /// category means "all". A term matching nothing simply yields an
    /// empty row set.
    #[must_use]
    pub fn filtered(&self, search_term: &str, category: Option<&str>) -> Vec<&Product> {
        self.items
            .iter()
            .filter(|product| {
                let matches_search = matches(&product.name, search_term)
                    || matches(&product.category, search_term)
                    || product
                        .supplier
                        .as_deref()
                        .is_some_and(|supplier| matches(supplier, search_term));
                let matches_category =
                    category.is_none_or(|category| product.category == category);
                matches_search && matches_category
            })
            .collect()
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.items.iter().find(|product| product.id == id)
    }

    /// Add a product at the top of the table, the way the "Add Product"
    /// form does.
    pub fn add(&mut self, product: Product) {
        self.items.insert(0, product);
    }

    /// Replace the product with the same id. Returns false when the id is
    /// unknown.
    pub fn update(&mut self, product: Product) -> bool {
        match self.items.iter_mut().find(|item| item.id == product.id) {
            Some(slot) => {
                *slot = product;
                true
            }
            None => false,
        }
    }

    /// Remove a product by id. Returns false when the id is unknown.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|product| product.id != id);
        self.items.len() < before
    }

    /// Generate an id for a new record, millisecond-resolution like the
    /// form does.
    #[must_use]
    pub fn generate_id() -> ProductId {
        ProductId::new(Utc::now().timestamp_millis())
    }
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::with_fixtures()
    }
}

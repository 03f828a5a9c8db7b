//! Order table store.

use medilink_core::{Order, OrderId, OrderStatus};

use super::matches;
use crate::fixtures;

/// The orders table: searchable by customer name or order id, filterable
/// by status.
#[derive(Debug, Clone)]
pub struct OrderStore {
    items: Vec<Order>,
}

impl OrderStore {
    /// Create a store over an explicit item set.
    #[must_use]
    pub const fn new(items: Vec<Order>) -> Self {
        Self { items }
    }

    /// Create a store preloaded with the dashboard fixtures.
    #[must_use]
    pub fn with_fixtures() -> Self {
        Self::new(fixtures::orders())
    }

    /// All orders, in display order.
    #[must_use]
    pub fn all(&self) -> &[Order] {
        &self.items
    }

    /// Number of orders in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The rows the table renders for a search term and status filter.
    #[must_use]
    pub fn filtered(&self, search_term: &str, status: Option<OrderStatus>) -> Vec<&Order> {
        self.items
            .iter()
            .filter(|order| {
                let matches_search = matches(&order.customer_name, search_term)
                    || matches(order.id.as_str(), search_term);
                let matches_status = status.is_none_or(|status| order.status == status);
                matches_search && matches_status
            })
            .collect()
    }

    /// Look up an order by id.
    #[must_use]
    pub fn get(&self, id: &OrderId) -> Option<&Order> {
        self.items.iter().find(|order| order.id == *id)
    }

    /// Remove an order by id. Returns false when the id is unknown.
    pub fn remove(&mut self, id: &OrderId) -> bool {
        let before = self.items.len();
        self.items.retain(|order| order.id != *id);
        self.items.len() < before
    }
}

impl Default for OrderStore {
    fn default() -> Self {
        Self::with_fixtures()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn store() -> OrderStore {
        OrderStore::with_fixtures()
    }

    #[test]
    fn test_search_matches_customer_and_order_id() {
        let store = store();
        assert_eq!(store.filtered("city pharmacy", None).len(), 1);
        assert_eq!(store.filtered("ORD-003", None).len(), 1);
        assert_eq!(store.filtered("ord-", None).len(), 4);
    }

    #[test]
    fn test_status_filter() {
        let store = store();
        assert_eq!(store.filtered("", Some(OrderStatus::Processing)).len(), 1);
        assert_eq!(store.filtered("", Some(OrderStatus::Cancelled)).len(), 0);
        assert_eq!(store.filtered("", None).len(), 4);
    }

    #[test]
    fn test_search_with_no_match_yields_empty_rows() {
        assert!(store().filtered("acme corp", None).is_empty());
    }

    #[test]
    fn test_remove_by_id() {
        let mut store = store();
        assert!(store.remove(&OrderId::new("ORD-002")));
        assert_eq!(store.len(), 3);
        assert!(store.get(&OrderId::new("ORD-002")).is_none());
        assert!(!store.remove(&OrderId::new("ORD-002")));
    }
}

//! Customer table store.

use chrono::Utc;
use medilink_core::{Customer, CustomerId, CustomerType};

use super::matches;
use crate::fixtures;

/// The customers table: searchable by name or email, filterable by
/// customer type.
#[derive(Debug, Clone)]
pub struct CustomerStore {
    items: Vec<Customer>,
}

impl CustomerStore {
    /// Create a store over an explicit item set.
    #[must_use]
    pub const fn new(items: Vec<Customer>) -> Self {
        Self { items }
    }

    /// Create a store preloaded with the dashboard fixtures.
    #[must_use]
    pub fn with_fixtures() -> Self {
        Self::new(fixtures::customers())
    }

    /// All customers, in display order.
    #[must_use]
    pub fn all(&self) -> &[Customer] {
        &self.items
    }

    /// Number of customers in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The rows the table renders for a search term and type filter.
    #[must_use]
    pub fn filtered(
        &self,
        search_term: &str,
        customer_type: Option<CustomerType>,
    ) -> Vec<&Customer> {
        self.items
            .iter()
            .filter(|customer| {
                let matches_search = matches(&customer.name, search_term)
                    || matches(&customer.email, search_term);
                let matches_type =
                    customer_type.is_none_or(|wanted| customer.customer_type == wanted);
                matches_search && matches_type
            })
            .collect()
    }

    /// Look up a customer by id.
    #[must_use]
    pub fn get(&self, id: &CustomerId) -> Option<&Customer> {
        self.items.iter().find(|customer| customer.id == *id)
    }

    /// Add a customer at the top of the table.
    pub fn add(&mut self, customer: Customer) {
        self.items.insert(0, customer);
    }

    /// Replace the customer with the same id. Returns false when the id
    /// is unknown.
    pub fn update(&mut self, customer: Customer) -> bool {
        match self.items.iter_mut().find(|item| item.id == customer.id) {
            Some(slot) => {
                *slot = customer;
                true
            }
            None => false,
        }
    }

    /// Remove a customer by id. Returns false when the id is unknown.
    pub fn remove(&mut self, id: &CustomerId) -> bool {
        let before = self.items.len();
        self.items.retain(|customer| customer.id != *id);
        self.items.len() < before
    }

    /// Generate an id for a new record (`CUST-{millis}`).
    #[must_use]
    pub fn generate_id() -> CustomerId {
        CustomerId::new(format!("CUST-{}", Utc::now().timestamp_millis()))
    }
}

impl Default for CustomerStore {
    fn default() -> Self {
        Self::with_fixtures()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use medilink_core::CustomerStatus;
    use rust_decimal::Decimal;

    use super::*;

    fn store() -> CustomerStore {
        CustomerStore::with_fixtures()
    }

    #[test]
    fn test_search_matches_name_and_email() {
        let store = store();
        assert_eq!(store.filtered("muwonge", None).len(), 1);
        assert_eq!(store.filtered("@citypharmacy.ug", None).len(), 1);
    }

    #[test]
    fn test_type_filter() {
        let store = store();
        assert_eq!(store.filtered("", Some(CustomerType::Clinic)).len(), 2);
        assert_eq!(store.filtered("", Some(CustomerType::Hospital)).len(), 1);
        assert_eq!(store.filtered("", Some(CustomerType::Individual)).len(), 1);
    }

    #[test]
    fn test_search_with_no_match_yields_empty_rows() {
        assert!(store().filtered("nonexistent hospital", None).is_empty());
    }

    #[test]
    fn test_add_update_remove() {
        let mut store = store();
        let id = CustomerStore::generate_id();
        store.add(Customer {
            id: id.clone(),
            name: "Entebbe Wellness Pharmacy".to_owned(),
            email: "hello@entebbewellness.ug".to_owned(),
            phone: "+256 776 999 000".to_owned(),
            address: "Entebbe Road".to_owned(),
            customer_type: CustomerType::Pharmacy,
            total_orders: 0,
            total_spent: Decimal::ZERO,
            status: CustomerStatus::Active,
            registration_date: None,
        });
        assert_eq!(store.len(), 6);
        assert_eq!(store.all().first().unwrap().id, id);

        let mut edited = store.get(&id).unwrap().clone();
        edited.total_orders = 2;
        assert!(store.update(edited));
        assert_eq!(store.get(&id).unwrap().total_orders, 2);

        assert!(store.remove(&id));
        assert_eq!(store.len(), 5);
    }
}

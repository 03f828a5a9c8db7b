//! Overview and report aggregates.
//!
//! Everything the dashboard's stat cards and report charts show is
//! computed from the in-memory arrays on the fly; there is no analytics
//! backend.

use rust_decimal::Decimal;

use medilink_core::{Customer, CustomerType, Order, Product};

/// The four overview stat cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewStats {
    pub total_products: usize,
    pub total_orders: usize,
    pub total_customers: usize,
    pub total_revenue: Decimal,
}

/// Units ordered of one product, for the "top products" chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSales {
    pub product_name: String,
    pub units: u32,
}

/// Compute the overview stat cards.
#[must_use]
pub fn overview(products: &[Product], orders: &[Order], customers: &[Customer]) -> OverviewStats {
    OverviewStats {
        total_products: products.len(),
        total_orders: orders.len(),
        total_customers: customers.len(),
        total_revenue: revenue(orders),
    }
}

/// Revenue is the sum of order totals, whatever the line items say.
#[must_use]
pub fn revenue(orders: &[Order]) -> Decimal {
    orders.iter().map(|order| order.total_amount).sum()
}

/// The most-ordered products by unit count, descending, at most `limit`
/// entries. Ties keep first-seen order.
#[must_use]
pub fn top_products(orders: &[Order], limit: usize) -> Vec<ProductSales> {
    let mut sales: Vec<ProductSales> = Vec::new();

    for item in orders.iter().flat_map(|order| &order.products) {
        match sales
            .iter_mut()
            .find(|entry| entry.product_name == item.product_name)
        {
            Some(entry) => entry.units += item.quantity,
            None => sales.push(ProductSales {
                product_name: item.product_name.clone(),
                units: item.quantity,
            }),
        }
    }

    sales.sort_by(|a, b| b.units.cmp(&a.units));
    sales.truncate(limit);
    sales
}

/// How many customers of each type there are, in the fixed chart order.
#[must_use]
pub fn customer_type_breakdown(customers: &[Customer]) -> Vec<(CustomerType, usize)> {
    [
        CustomerType::Hospital,
        CustomerType::Clinic,
        CustomerType::Pharmacy,
        CustomerType::Individual,
    ]
    .into_iter()
    .map(|wanted| {
        let count = customers
            .iter()
            .filter(|customer| customer.customer_type == wanted)
            .count();
        (wanted, count)
    })
    .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_revenue_sums_order_totals() {
        let orders = fixtures::orders();
        assert_eq!(revenue(&orders), Decimal::new(1_091_605, 2));
    }

    #[test]
    fn test_overview_counts() {
        let stats = overview(
            &fixtures::products(),
            &fixtures::orders(),
            &fixtures::customers(),
        );
        assert_eq!(stats.total_products, 6);
        assert_eq!(stats.total_orders, 4);
        assert_eq!(stats.total_customers, 5);
        assert_eq!(stats.total_revenue, Decimal::new(1_091_605, 2));
    }

    #[test]
    fn test_top_products_ranked_by_units() {
        let top = top_products(&fixtures::orders(), 3);
        assert_eq!(top.len(), 3);
        assert_eq!(top[0].product_name, "Vitamin C 1000mg Tablets");
        assert_eq!(top[0].units, 150);
        assert_eq!(top[1].product_name, "Calcium + Vitamin D Tablets");
        assert_eq!(top[1].units, 75);
        assert_eq!(top[2].product_name, "Cartiflex Plus Chewable Tablets");
        assert_eq!(top[2].units, 70);
    }

    #[test]
    fn test_top_products_on_empty_orders() {
        assert!(top_products(&[], 5).is_empty());
    }

    #[test]
    fn test_customer_type_breakdown() {
        let breakdown = customer_type_breakdown(&fixtures::customers());
        assert_eq!(
            breakdown,
            vec![
                (CustomerType::Hospital, 1),
                (CustomerType::Clinic, 2),
                (CustomerType::Pharmacy, 1),
                (CustomerType::Individual, 1),
            ]
        );
    }
}

//! Customer account record.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::CustomerId;
use super::status::{CustomerStatus, CustomerType};

/// A customer of the distributor - a hospital, clinic, pharmacy, or an
/// individual practitioner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    #[serde(rename = "type")]
    pub customer_type: CustomerType,
    pub total_orders: u32,
    pub total_spent: Decimal,
    pub status: CustomerStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_date: Option<NaiveDate>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_wire_shape() {
        let customer = Customer {
            id: CustomerId::new("CUST-001"),
            name: "Kampala General Hospital".to_owned(),
            email: "admin@kgh.ug".to_owned(),
            phone: "+256 776 123 456".to_owned(),
            address: "Plot 123, Kampala Road, Kampala".to_owned(),
            customer_type: CustomerType::Hospital,
            total_orders: 15,
            total_spent: "45680.50".parse().unwrap(),
            status: CustomerStatus::Active,
            registration_date: Some(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()),
        };

        let json = serde_json::to_value(&customer).unwrap();
        assert_eq!(json["type"], "hospital");
        assert_eq!(json["totalOrders"], 15);
        assert_eq!(json["status"], "active");
        assert_eq!(json["registrationDate"], "2024-06-15");
    }
}

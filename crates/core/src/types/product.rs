//! Catalog product record.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::status::ProductStatus;

/// A pharmaceutical product carried by the distributor.
///
/// The API serves the lean form (no supplier, expiry, or status); the
/// dashboard's own fixtures fill every field. Optional fields are skipped
/// on the wire when absent so both layers keep their original JSON shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub price: Decimal,
    pub stock: u32,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_lean_product_omits_dashboard_fields() {
        let product = Product {
            id: ProductId::new(1),
            name: "Paracetamol 500mg".to_owned(),
            category: "Pain Relief".to_owned(),
            price: Decimal::from(5000),
            stock: 150,
            description: "Effective pain relief medication".to_owned(),
            image: None,
            supplier: None,
            expiry_date: None,
            status: None,
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["id"], 1);
        assert!(json.get("supplier").is_none());
        assert!(json.get("expiryDate").is_none());
        assert!(json.get("status").is_none());
    }

    #[test]
    fn test_full_product_uses_camel_case_keys() {
        let product = Product {
            id: ProductId::new(2),
            name: "Neuro Vive Soft Gel Capsules".to_owned(),
            category: "Neurological Health".to_owned(),
            price: "32.50".parse().unwrap(),
            stock: 89,
            description: "Promotes neurological health".to_owned(),
            image: Some("/api/placeholder/60/60".to_owned()),
            supplier: Some("NeuroHealth Inc".to_owned()),
            expiry_date: Some(NaiveDate::from_ymd_opt(2025, 10, 15).unwrap()),
            status: Some(ProductStatus::Active),
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["expiryDate"], "2025-10-15");
        assert_eq!(json["status"], "active");
        assert_eq!(json["supplier"], "NeuroHealth Inc");
    }
}

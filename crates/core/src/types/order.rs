//! Purchase order record.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{CustomerId, OrderId, ProductId};
use super::status::{OrderStatus, PaymentStatus};

/// One line of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: u32,
    pub price: Decimal,
}

/// A customer order.
///
/// `total_amount` is whatever the record says it is - line items are not
/// summed or validated against it anywhere in the system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub customer_name: String,
    pub products: Vec<OrderItem>,
    pub total_amount: Decimal,
    pub status: OrderStatus,
    pub order_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<NaiveDate>,
    pub payment_status: PaymentStatus,
}

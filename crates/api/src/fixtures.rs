//! Fixture-loading functions for the mock API payloads.
//!
//! There is no database behind this service. Every read endpoint calls
//! one of these functions per request, so restarting the process (or not)
//! makes no observable difference. Notification and message timestamps
//! are computed relative to the request time so the feed always looks
//! fresh.
//!
//! The dashboard crate ships its own, richer fixture set; the two layers
//! are intentionally disconnected.

use chrono::{Duration, NaiveDate, Utc};
use rust_decimal::Decimal;

use medilink_core::{
    ContactMessage, Customer, CustomerId, CustomerStatus, CustomerType, MessageId, MessageStatus,
    Notification, NotificationId, NotificationKind, NotificationPriority, Order, OrderId,
    OrderItem, OrderStatus, PaymentStatus, Product, ProductId,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// The product catalog served by `GET /api/products`.
///
/// IDs 1-3 are stable; clients rely on them.
#[must_use]
pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new(1),
            name: "Paracetamol 500mg".to_owned(),
            category: "Pain Relief".to_owned(),
            price: Decimal::from(5000),
            stock: 150,
            description: "Effective pain relief medication".to_owned(),
            image: Some(
                "https://images.unsplash.com/photo-1584308666744-24d5c474f2ae?w=400&h=300&fit=crop"
                    .to_owned(),
            ),
            supplier: None,
            expiry_date: None,
            status: None,
        },
        Product {
            id: ProductId::new(2),
            name: "Amoxicillin 250mg".to_owned(),
            category: "Antibiotics".to_owned(),
            price: Decimal::from(8000),
            stock: 75,
            description: "Broad-spectrum antibiotic".to_owned(),
            image: Some(
                "https://images.unsplash.com/photo-1559757148-5c350d0d3c56?w=400&h=300&fit=crop"
                    .to_owned(),
            ),
            supplier: None,
            expiry_date: None,
            status: None,
        },
        Product {
            id: ProductId::new(3),
            name: "Ibuprofen 400mg".to_owned(),
            category: "Pain Relief".to_owned(),
            price: Decimal::from(6000),
            stock: 200,
            description: "Anti-inflammatory pain reliever".to_owned(),
            image: Some(
                "https://images.unsplash.com/photo-1587854692152-cbe660dbde88?w=400&h=300&fit=crop"
                    .to_owned(),
            ),
            supplier: None,
            expiry_date: None,
            status: None,
        },
    ]
}

/// The order list served by `GET /api/orders`.
#[must_use]
pub fn orders() -> Vec<Order> {
    vec![
        Order {
            id: OrderId::new("ORD-001"),
            customer_id: CustomerId::new("CUST-001"),
            customer_name: "Kampala Hospital".to_owned(),
            products: vec![OrderItem {
                product_id: ProductId::new(1),
                product_name: "Paracetamol 500mg".to_owned(),
                quantity: 5,
                price: Decimal::from(5000),
            }],
            total_amount: Decimal::from(25000),
            status: OrderStatus::Pending,
            order_date: date(2024, 1, 15),
            delivery_date: None,
            payment_status: PaymentStatus::Pending,
        },
        Order {
            id: OrderId::new("ORD-002"),
            customer_id: CustomerId::new("CUST-002"),
            customer_name: "Mulago Clinic".to_owned(),
            products: vec![OrderItem {
                product_id: ProductId::new(3),
                product_name: "Ibuprofen 400mg".to_owned(),
                quantity: 3,
                price: Decimal::from(6000),
            }],
            total_amount: Decimal::from(18000),
            status: OrderStatus::Delivered,
            order_date: date(2024, 1, 14),
            delivery_date: None,
            payment_status: PaymentStatus::Paid,
        },
    ]
}

/// The customer list served by `GET /api/customers`.
#[must_use]
pub fn customers() -> Vec<Customer> {
    vec![
        Customer {
            id: CustomerId::new("CUST-001"),
            name: "Kampala Hospital".to_owned(),
            email: "info@kampalahospital.com".to_owned(),
            phone: "+256-123-456-789".to_owned(),
            address: "Kampala, Uganda".to_owned(),
            customer_type: CustomerType::Hospital,
            total_orders: 15,
            total_spent: Decimal::from(312_000),
            status: CustomerStatus::Active,
            registration_date: None,
        },
        Customer {
            id: CustomerId::new("CUST-002"),
            name: "Mulago Clinic".to_owned(),
            email: "contact@mulagoclinic.com".to_owned(),
            phone: "+256-987-654-321".to_owned(),
            address: "Mulago, Uganda".to_owned(),
            customer_type: CustomerType::Clinic,
            total_orders: 8,
            total_spent: Decimal::from(145_000),
            status: CustomerStatus::Active,
            registration_date: None,
        },
    ]
}

/// The contact-message inbox served by `GET /api/messages`.
#[must_use]
pub fn messages() -> Vec<ContactMessage> {
    let now = Utc::now();
    vec![
        ContactMessage {
            id: MessageId::new(1),
            name: "John Doe".to_owned(),
            email: "john.doe@email.com".to_owned(),
            subject: "Product Availability Inquiry".to_owned(),
            message: "I would like to know if you have Paracetamol 500mg in stock. \
                      We need 1000 tablets for our clinic."
                .to_owned(),
            timestamp: now - Duration::hours(2),
            status: MessageStatus::Unread,
        },
        ContactMessage {
            id: MessageId::new(2),
            name: "Dr. Sarah Johnson".to_owned(),
            email: "dr.sarah@hospital.com".to_owned(),
            subject: "New Product Information".to_owned(),
            message: "We are interested in learning more about your new antibiotic line. \
                      Can you send us a catalog?"
                .to_owned(),
            timestamp: now - Duration::hours(1),
            status: MessageStatus::Unread,
        },
        ContactMessage {
            id: MessageId::new(3),
            name: "Kampala Medical Center".to_owned(),
            email: "info@kampalamedical.com".to_owned(),
            subject: "Bulk Order Request".to_owned(),
            message: "We need to place a large order for various medications. \
                      Please contact us for pricing."
                .to_owned(),
            timestamp: now - Duration::minutes(30),
            status: MessageStatus::Read,
        },
    ]
}

/// The notification feed served by `GET /api/notifications`.
#[must_use]
pub fn notifications() -> Vec<Notification> {
    let now = Utc::now();
    vec![
        Notification {
            id: NotificationId::new(1),
            kind: NotificationKind::Message,
            title: "New Customer Inquiry".to_owned(),
            message: "Customer John Doe is asking about product availability".to_owned(),
            sender: "john.doe@email.com".to_owned(),
            timestamp: now - Duration::hours(2),
            read: false,
            priority: NotificationPriority::Medium,
        },
        Notification {
            id: NotificationId::new(2),
            kind: NotificationKind::Order,
            title: "New Order Received".to_owned(),
            message: "Order #ORD-003 has been placed by Kampala Hospital".to_owned(),
            sender: "system".to_owned(),
            timestamp: now - Duration::hours(1),
            read: false,
            priority: NotificationPriority::High,
        },
        Notification {
            id: NotificationId::new(3),
            kind: NotificationKind::Stock,
            title: "Low Stock Alert".to_owned(),
            message: "Paracetamol 500mg is running low (5 units remaining)".to_owned(),
            sender: "system".to_owned(),
            timestamp: now - Duration::minutes(30),
            read: true,
            priority: NotificationPriority::High,
        },
        Notification {
            id: NotificationId::new(4),
            kind: NotificationKind::Message,
            title: "Product Information Request".to_owned(),
            message: "Dr. Sarah is requesting information about new antibiotics".to_owned(),
            sender: "dr.sarah@hospital.com".to_owned(),
            timestamp: now - Duration::minutes(15),
            read: false,
            priority: NotificationPriority::Medium,
        },
    ]
}

//! Fixture-loading functions for the dashboard data set.
//!
//! This is the dashboard's own, richer catalog - six products with
//! supplier and expiry data, four orders with line items, five customers
//! with lifetime totals. It intentionally does not match the API
//! service's fixtures; the two layers have always been separate.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use medilink_core::{
    Customer, CustomerId, CustomerStatus, CustomerType, Order, OrderId, OrderItem, OrderStatus,
    PaymentStatus, Product, ProductId, ProductStatus,
};

const PLACEHOLDER_IMAGE: &str = "/api/placeholder/60/60";

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: i64,
    name: &str,
    category: &str,
    description: &str,
    price: Decimal,
    stock: u32,
    supplier: &str,
    expiry: NaiveDate,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        category: category.to_owned(),
        price,
        stock,
        description: description.to_owned(),
        image: Some(PLACEHOLDER_IMAGE.to_owned()),
        supplier: Some(supplier.to_owned()),
        expiry_date: Some(expiry),
        status: Some(ProductStatus::Active),
    }
}

/// Load the dashboard product catalog.
#[must_use]
pub fn products() -> Vec<Product> {
    vec![
        product(
            1,
            "Cartiflex Plus Chewable Tablets",
            "Joint Health",
            "Supports joint health, mobility, and flexibility for active lifestyles.",
            Decimal::new(4599, 2),
            150,
            "PharmaCorp Ltd",
            date(2025, 12, 31),
        ),
        product(
            2,
            "Neuro Vive Soft Gel Capsules",
            "Neurological Health",
            "Promotes neurological health and cognitive vitality.",
            Decimal::new(3250, 2),
            89,
            "NeuroHealth Inc",
            date(2025, 10, 15),
        ),
        product(
            3,
            "Vitamin C 1000mg Tablets",
            "Vitamins",
            "High potency vitamin C for immune system support.",
            Decimal::new(1875, 2),
            200,
            "Vitamins Plus",
            date(2026, 3, 20),
        ),
        product(
            4,
            "Omega-3 Fish Oil Capsules",
            "Supplements",
            "Premium fish oil with high DHA and EPA content.",
            Decimal::new(2899, 2),
            75,
            "Omega Health",
            date(2025, 8, 30),
        ),
        product(
            5,
            "Calcium + Vitamin D Tablets",
            "Bone Health",
            "Essential minerals for strong bones and teeth.",
            Decimal::new(2250, 2),
            120,
            "Mineral Health",
            date(2025, 11, 15),
        ),
        product(
            6,
            "Probiotic Complex 50B",
            "Digestive Health",
            "Advanced probiotic formula for digestive wellness.",
            Decimal::new(3500, 2),
            45,
            "Gut Health Ltd",
            date(2025, 9, 10),
        ),
    ]
}

fn item(product_id: i64, name: &str, quantity: u32, price: Decimal) -> OrderItem {
    OrderItem {
        product_id: ProductId::new(product_id),
        product_name: name.to_owned(),
        quantity,
        price,
    }
}

/// Load the dashboard order book.
#[must_use]
pub fn orders() -> Vec<Order> {
    vec![
        Order {
            id: OrderId::new("ORD-001"),
            customer_id: CustomerId::new("CUST-001"),
            customer_name: "Kampala General Hospital".to_owned(),
            products: vec![
                item(1, "Cartiflex Plus Chewable Tablets", 50, Decimal::new(4599, 2)),
                item(3, "Vitamin C 1000mg Tablets", 100, Decimal::new(1875, 2)),
            ],
            total_amount: Decimal::new(408_650, 2),
            status: OrderStatus::Delivered,
            order_date: date(2025, 1, 15),
            delivery_date: Some(date(2025, 1, 18)),
            payment_status: PaymentStatus::Paid,
        },
        Order {
            id: OrderId::new("ORD-002"),
            customer_id: CustomerId::new("CUST-002"),
            customer_name: "City Pharmacy".to_owned(),
            products: vec![
                item(2, "Neuro Vive Soft Gel Capsules", 30, Decimal::new(3250, 2)),
                item(4, "Omega-3 Fish Oil Capsules", 25, Decimal::new(2899, 2)),
            ],
            total_amount: Decimal::new(184_725, 2),
            status: OrderStatus::Processing,
            order_date: date(2025, 1, 20),
            delivery_date: None,
            payment_status: PaymentStatus::Paid,
        },
        Order {
            id: OrderId::new("ORD-003"),
            customer_id: CustomerId::new("CUST-003"),
            customer_name: "Community Clinic".to_owned(),
            products: vec![
                item(5, "Calcium + Vitamin D Tablets", 75, Decimal::new(2250, 2)),
                item(6, "Probiotic Complex 50B", 40, Decimal::new(3500, 2)),
            ],
            total_amount: Decimal::new(308_750, 2),
            status: OrderStatus::Shipped,
            order_date: date(2025, 1, 22),
            delivery_date: None,
            payment_status: PaymentStatus::Paid,
        },
        Order {
            id: OrderId::new("ORD-004"),
            customer_id: CustomerId::new("CUST-004"),
            customer_name: "Rural Health Center".to_owned(),
            products: vec![
                item(1, "Cartiflex Plus Chewable Tablets", 20, Decimal::new(4599, 2)),
                item(3, "Vitamin C 1000mg Tablets", 50, Decimal::new(1875, 2)),
            ],
            total_amount: Decimal::new(189_480, 2),
            status: OrderStatus::Pending,
            order_date: date(2025, 1, 25),
            delivery_date: None,
            payment_status: PaymentStatus::Pending,
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn customer(
    id: &str,
    name: &str,
    email: &str,
    phone: &str,
    address: &str,
    customer_type: CustomerType,
    total_orders: u32,
    total_spent: Decimal,
    registered: NaiveDate,
) -> Customer {
    Customer {
        id: CustomerId::new(id),
        name: name.to_owned(),
        email: email.to_owned(),
        phone: phone.to_owned(),
        address: address.to_owned(),
        customer_type,
        total_orders,
        total_spent,
        status: CustomerStatus::Active,
        registration_date: Some(registered),
    }
}

/// Load the dashboard customer book.
#[must_use]
pub fn customers() -> Vec<Customer> {
    vec![
        customer(
            "CUST-001",
            "Kampala General Hospital",
            "admin@kgh.ug",
            "+256 776 123 456",
            "Plot 123, Kampala Road, Kampala",
            CustomerType::Hospital,
            15,
            Decimal::new(4_568_050, 2),
            date(2024, 6, 15),
        ),
        customer(
            "CUST-002",
            "City Pharmacy",
            "info@citypharmacy.ug",
            "+256 776 234 567",
            "Shop 45, City Mall, Kampala",
            CustomerType::Pharmacy,
            8,
            Decimal::new(2_345_075, 2),
            date(2024, 8, 20),
        ),
        customer(
            "CUST-003",
            "Community Clinic",
            "contact@communityclinic.ug",
            "+256 776 345 678",
            "Community Center, Jinja",
            CustomerType::Clinic,
            12,
            Decimal::new(1_892_030, 2),
            date(2024, 7, 10),
        ),
        customer(
            "CUST-004",
            "Rural Health Center",
            "rural@healthcenter.ug",
            "+256 776 456 789",
            "Village Road, Mbale",
            CustomerType::Clinic,
            6,
            Decimal::new(987_540, 2),
            date(2024, 9, 5),
        ),
        customer(
            "CUST-005",
            "Dr. Sarah Muwonge",
            "sarah.muwonge@email.com",
            "+256 776 567 890",
            "Private Practice, Entebbe",
            CustomerType::Individual,
            3,
            Decimal::new(234_000, 2),
            date(2024, 10, 12),
        ),
    ]
}

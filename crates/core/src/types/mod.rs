//! Core types for Medilink.
//!
//! This module provides type-safe wrappers for common domain concepts and
//! the entity value records exchanged between the API and the dashboard.

pub mod customer;
pub mod id;
pub mod message;
pub mod notification;
pub mod order;
pub mod product;
pub mod status;

pub use customer::Customer;
pub use id::*;
pub use message::ContactMessage;
pub use notification::Notification;
pub use order::{Order, OrderItem};
pub use product::Product;
pub use status::*;

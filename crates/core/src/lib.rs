//! Medilink Core - Shared types library.
//!
//! This crate provides common types used across all Medilink components:
//! - `api` - Public HTTP API service for the distributor site
//! - `dashboard` - In-memory data layer backing the admin dashboard
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no
//! filesystem access. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, status enums, and the entity value records
//!   (products, orders, customers, notifications, contact messages)

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

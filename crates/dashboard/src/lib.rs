//! Medilink Dashboard - the admin dashboard's in-memory data layer.
//!
//! The dashboard does not read products, orders, or customers from the
//! API service: it holds its own fixture arrays in memory, filters them
//! client-side, and lets the role-gated CRUD forms mutate them for the
//! lifetime of the page. This crate is that layer, deliberately
//! disconnected from `medilink-api`.
//!
//! # Modules
//!
//! - [`fixtures`] - Fixture-loading functions for the dashboard's data set
//! - [`stores`] - Filterable, mutable in-memory tables
//! - [`session`] - The session-role state machine with explicit load/save
//! - [`stats`] - Overview and report aggregates

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod fixtures;
pub mod session;
pub mod stats;
pub mod stores;

pub use session::{DashboardVariant, SessionState};
pub use stores::{CustomerStore, OrderStore, ProductStore};

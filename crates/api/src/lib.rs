//! Medilink API library.
//!
//! This crate provides the API service as a library, allowing the router
//! to be exercised directly in tests without binding a socket.
//!
//! # Architecture
//!
//! The service is deliberately stateless: every read endpoint rebuilds
//! its mock payload per request from [`fixtures`], the contact and
//! notification write endpoints mutate nothing, and the only disk state
//! is the upload directory. See `routes` for the full endpoint table.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod fixtures;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;

//! External service clients.

pub mod cloudinary;

pub use cloudinary::{CloudinaryClient, CloudinaryError};

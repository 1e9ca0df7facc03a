//! Shared types for the contract document generator
//!
//! Error types, response envelope and the request / response models
//! used by docgen-server and its clients.

pub mod error;
pub mod models;

// Re-exports
pub use axum::{Json, body};
pub use http;
pub use serde::{Deserialize, Serialize};

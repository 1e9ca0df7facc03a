//! Data models
//!
//! Shared between docgen-server and the frontend (via API).
//! Wire format is camelCase; enum values are snake_case.

pub mod contract;
pub mod customer;
pub mod guarantee;
pub mod payment;
pub mod warranty;

// Re-exports
pub use contract::*;
pub use customer::*;
pub use guarantee::*;
pub use payment::*;
pub use warranty::*;

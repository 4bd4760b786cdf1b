//! Core business logic - framework-agnostic product operations and bootstrap.

/// Schema creation and seeding at startup
pub mod bootstrap;
/// Product repository operations and request validation
pub mod product;
/// Aggregate inventory statistics
pub mod stats;

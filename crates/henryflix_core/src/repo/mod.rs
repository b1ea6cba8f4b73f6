//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define the data access contract used by the catalog service.
//! - Keep collection details out of use-case orchestration.
//!
//! # Invariants
//! - Inserts enforce identity uniqueness (user email, series name).
//! - Collections preserve arrival order.

pub mod catalog_repo;

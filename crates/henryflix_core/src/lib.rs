//! Core catalog logic for HenryFlix.
//! This crate is the single source of truth for catalog business invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::LogConfig;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::series::{Review, Series};
pub use model::tier::{supported_category_strings, Category, Plan};
pub use model::user::User;
pub use repo::catalog_repo::{
    CatalogRepository, InMemoryCatalogRepository, RepoError, RepoResult,
};
pub use service::catalog_service::{CatalogError, CatalogResult, CatalogService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into catalog use-case APIs.
//! - Keep callers decoupled from storage details.

pub mod catalog_service;

//! Catalog domain model for users, series and reviews.
//!
//! # Responsibility
//! - Define canonical records shared by repository and service layers.
//! - Own default values for freshly created users and series.
//!
//! # Invariants
//! - A `User` is identified by its exact, case-sensitive `email`.
//! - A `Series` is identified by its exact `name`.
//! - `Series::rating` is always the mean of `Series::reviews` scores, or `0`.

pub mod series;
pub mod tier;
pub mod user;

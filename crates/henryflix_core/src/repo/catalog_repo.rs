//! Catalog repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Store users and series in arrival order.
//! - Reject duplicate identities at insert time.
//!
//! # Invariants
//! - Lookups are exact matches; no normalization is applied to keys.
//! - `clear` resets both collections at once.

use crate::model::series::Series;
use crate::model::user::User;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Storage-level identity conflicts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// A user with this email is already stored.
    DuplicateUser(String),
    /// A series with this name is already stored.
    DuplicateSeries(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateUser(email) => write!(f, "user already stored: {email}"),
            Self::DuplicateSeries(name) => write!(f, "series already stored: {name}"),
        }
    }
}

impl Error for RepoError {}

/// Repository interface for the two catalog collections.
pub trait CatalogRepository {
    /// All users in insertion order.
    fn users(&self) -> &[User];
    fn find_user(&self, email: &str) -> Option<&User>;
    fn find_user_mut(&mut self, email: &str) -> Option<&mut User>;
    /// Appends a user, failing when the email is taken.
    fn insert_user(&mut self, user: User) -> RepoResult<()>;

    /// All series in insertion order.
    fn series(&self) -> &[Series];
    fn find_series(&self, name: &str) -> Option<&Series>;
    fn find_series_mut(&mut self, name: &str) -> Option<&mut Series>;
    /// Appends a series, failing when the name is taken.
    fn insert_series(&mut self, series: Series) -> RepoResult<()>;

    /// Drops every user and series.
    fn clear(&mut self);
}

/// Vec-backed catalog storage scoped to one owner.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalogRepository {
    users: Vec<User>,
    series: Vec<Series>,
}

impl InMemoryCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CatalogRepository for InMemoryCatalogRepository {
    fn users(&self) -> &[User] {
        &self.users
    }

    fn find_user(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|user| user.email == email)
    }

    fn find_user_mut(&mut self, email: &str) -> Option<&mut User> {
        self.users.iter_mut().find(|user| user.email == email)
    }

    fn insert_user(&mut self, user: User) -> RepoResult<()> {
        if self.find_user(&user.email).is_some() {
            return Err(RepoError::DuplicateUser(user.email));
        }
        self.users.push(user);
        Ok(())
    }

    fn series(&self) -> &[Series] {
        &self.series
    }

    fn find_series(&self, name: &str) -> Option<&Series> {
        self.series.iter().find(|series| series.name == name)
    }

    fn find_series_mut(&mut self, name: &str) -> Option<&mut Series> {
        self.series.iter_mut().find(|series| series.name == name)
    }

    fn insert_series(&mut self, series: Series) -> RepoResult<()> {
        if self.find_series(&series.name).is_some() {
            return Err(RepoError::DuplicateSeries(series.name));
        }
        self.series.push(series);
        Ok(())
    }

    fn clear(&mut self) {
        self.users.clear();
        self.series.clear();
    }
}

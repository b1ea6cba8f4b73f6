//! Catalog use-case service.
//!
//! # Responsibility
//! - Register users and toggle their plans.
//! - Maintain the series catalog and its category filters.
//! - Gate playback by plan and aggregate ratings from watched series.
//!
//! # Invariants
//! - Every validation runs before any mutation; failed calls change nothing.
//! - Check order is fixed: user, then series, then operation-specific rules.
//! - Error `Display` text is part of the public contract and stays verbatim.
//! - Log events carry metadata only (event, status, error code), never user data.

use crate::model::series::{Review, Series};
use crate::model::tier::{Category, Plan};
use crate::model::user::User;
use crate::repo::catalog_repo::{CatalogRepository, InMemoryCatalogRepository, RepoError};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Inclusive bounds accepted by `rate_serie`.
pub const MIN_SCORE: f64 = 1.0;
pub const MAX_SCORE: f64 = 5.0;

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Failure kinds for catalog operations.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// Email already registered.
    DuplicateUser(String),
    /// No user with this email.
    UserNotFound(String),
    /// Series name already in the catalog.
    DuplicateSeries(String),
    /// Category (or filter) is neither `regular` nor `premium`.
    UnknownCategory(String),
    /// No series with this name.
    SeriesNotFound(String),
    /// Premium series requested by a non-premium user.
    PlanRestricted { series: String, email: String },
    /// Score outside `[MIN_SCORE, MAX_SCORE]`.
    InvalidScore(f64),
    /// Rating attempted before playing the series.
    NotWatched { series: String, email: String },
}

impl CatalogError {
    /// Stable snake_case identifier for log events.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DuplicateUser(_) => "duplicate_user",
            Self::UserNotFound(_) => "user_not_found",
            Self::DuplicateSeries(_) => "duplicate_series",
            Self::UnknownCategory(_) => "unknown_category",
            Self::SeriesNotFound(_) => "series_not_found",
            Self::PlanRestricted { .. } => "plan_restricted",
            Self::InvalidScore(_) => "invalid_score",
            Self::NotWatched { .. } => "not_watched",
        }
    }
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateUser(_) => write!(f, "El usuario ya existe"),
            Self::UserNotFound(_) => write!(f, "Usuario inexistente"),
            Self::DuplicateSeries(name) => write!(f, "La serie {name} ya existe"),
            Self::UnknownCategory(category) => write!(f, "La categoría {category} no existe"),
            Self::SeriesNotFound(_) => write!(f, "Serie inexistente"),
            Self::PlanRestricted { .. } => write!(
                f,
                "Contenido no disponible, contrata ahora HenryFlix Premium!"
            ),
            Self::InvalidScore(_) => write!(f, "Puntaje inválido"),
            Self::NotWatched { .. } => {
                write!(f, "Debes reproducir el contenido para poder puntuarlo")
            }
        }
    }
}

impl Error for CatalogError {}

impl From<RepoError> for CatalogError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::DuplicateUser(email) => Self::DuplicateUser(email),
            RepoError::DuplicateSeries(name) => Self::DuplicateSeries(name),
        }
    }
}

/// Catalog service facade over repository implementations.
pub struct CatalogService<R: CatalogRepository = InMemoryCatalogRepository> {
    repo: R,
}

impl CatalogService<InMemoryCatalogRepository> {
    /// Creates a service with empty in-memory collections.
    pub fn in_memory() -> Self {
        Self::new(InMemoryCatalogRepository::new())
    }
}

impl Default for CatalogService<InMemoryCatalogRepository> {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl<R: CatalogRepository> CatalogService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Clears every user and series.
    pub fn reset(&mut self) {
        self.repo.clear();
        info!("event=catalog_reset module=catalog status=ok");
    }

    /// Registers a regular-plan user.
    ///
    /// # Errors
    /// - `DuplicateUser` when the email is already registered.
    pub fn add_user(
        &mut self,
        email: impl Into<String>,
        name: impl Into<String>,
    ) -> CatalogResult<String> {
        let user = User::new(email, name);
        let message = format!("Usuario {} creado correctamente", user.email);
        let result = self
            .repo
            .insert_user(user)
            .map(|()| message)
            .map_err(CatalogError::from);
        record("user_add", result)
    }

    /// Lists users, optionally filtered by plan.
    ///
    /// Unrecognized plan values are ignored and return every user, unlike
    /// `list_series` which rejects unknown categories.
    pub fn list_users(&self, plan: Option<&str>) -> Vec<User> {
        let users = self.repo.users();
        let listed: Vec<User> = match plan.and_then(Plan::parse) {
            Some(plan) => users.iter().filter(|u| u.plan == plan).cloned().collect(),
            None => users.to_vec(),
        };
        debug!(
            "event=user_list module=catalog status=ok count={}",
            listed.len()
        );
        listed
    }

    /// Toggles a user between `regular` and `premium`.
    ///
    /// # Errors
    /// - `UserNotFound` when no user matches `email`.
    pub fn switch_plan(&mut self, email: &str) -> CatalogResult<String> {
        let result = match self.repo.find_user_mut(email) {
            Some(user) => {
                user.plan = user.plan.toggled();
                Ok(format!("{}, ahora tienes el plan {}", user.name, user.plan))
            }
            None => Err(CatalogError::UserNotFound(email.to_string())),
        };
        record("plan_switch", result)
    }

    /// Adds an unrated series and returns the whole updated catalog.
    ///
    /// # Errors
    /// - `DuplicateSeries` when the name already exists (checked first).
    /// - `UnknownCategory` when `category` is not `regular` or `premium`.
    pub fn add_serie(
        &mut self,
        name: impl Into<String>,
        seasons: u32,
        category: &str,
        year: i32,
    ) -> CatalogResult<Vec<Series>> {
        let result = self.insert_series(name.into(), seasons, category, year);
        record("series_add", result)
    }

    fn insert_series(
        &mut self,
        name: String,
        seasons: u32,
        category: &str,
        year: i32,
    ) -> CatalogResult<Vec<Series>> {
        if self.repo.find_series(&name).is_some() {
            return Err(CatalogError::DuplicateSeries(name));
        }
        let category = Category::parse(category)
            .ok_or_else(|| CatalogError::UnknownCategory(category.to_string()))?;

        self.repo
            .insert_series(Series::new(name, seasons, category, year))?;
        Ok(self.repo.series().to_vec())
    }

    /// Lists series, optionally filtered by category.
    ///
    /// # Errors
    /// - `UnknownCategory` when a filter is given that is not a known category.
    pub fn list_series(&self, category: Option<&str>) -> CatalogResult<Vec<Series>> {
        let series = self.repo.series();
        let result = match category {
            None => Ok(series.to_vec()),
            Some(value) => match Category::parse(value) {
                Some(category) => Ok(series
                    .iter()
                    .filter(|s| s.category == category)
                    .cloned()
                    .collect()),
                None => Err(CatalogError::UnknownCategory(value.to_string())),
            },
        };
        record("series_list", result)
    }

    /// Starts playback and appends the series to the user's history.
    ///
    /// # Errors
    /// - `UserNotFound`, then `SeriesNotFound`.
    /// - `PlanRestricted` when a non-premium user requests premium content.
    pub fn play(&mut self, series_name: &str, email: &str) -> CatalogResult<String> {
        let result = self.start_playback(series_name, email);
        record("series_play", result)
    }

    fn start_playback(&mut self, series_name: &str, email: &str) -> CatalogResult<String> {
        let plan = self.require_user(email)?.plan;
        let series = self.require_series(series_name)?;
        if !series.category.is_available_for(plan) {
            return Err(CatalogError::PlanRestricted {
                series: series.name.clone(),
                email: email.to_string(),
            });
        }

        let series_name = series.name.clone();
        let user = self
            .repo
            .find_user_mut(email)
            .ok_or_else(|| CatalogError::UserNotFound(email.to_string()))?;
        user.watched.push(series_name.clone());
        Ok(format!("Reproduciendo {series_name}"))
    }

    /// Returns the user's playback history, duplicates included.
    ///
    /// # Errors
    /// - `UserNotFound` when no user matches `email`.
    pub fn watch_again(&self, email: &str) -> CatalogResult<Vec<String>> {
        let result = self.require_user(email).map(|user| user.watched.clone());
        record("watch_again", result)
    }

    /// Records a review and refreshes the series rating.
    ///
    /// # Errors
    /// - `UserNotFound`, then `SeriesNotFound`.
    /// - `InvalidScore` when `score` is outside `[1, 5]` or not a number.
    /// - `NotWatched` when the user never played the series.
    pub fn rate_serie(
        &mut self,
        series_name: &str,
        email: &str,
        score: f64,
    ) -> CatalogResult<String> {
        let result = self.add_review(series_name, email, score);
        record("series_rate", result)
    }

    fn add_review(&mut self, series_name: &str, email: &str, score: f64) -> CatalogResult<String> {
        let user = self.require_user(email)?;
        let series = self.require_series(series_name)?;
        if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
            return Err(CatalogError::InvalidScore(score));
        }
        if !user.has_watched(&series.name) {
            return Err(CatalogError::NotWatched {
                series: series.name.clone(),
                email: email.to_string(),
            });
        }

        let series = self
            .repo
            .find_series_mut(series_name)
            .ok_or_else(|| CatalogError::SeriesNotFound(series_name.to_string()))?;
        series.add_review(Review::new(email, score));
        Ok(format!("Le has dado {score} puntos a la serie {}", series.name))
    }

    /// Gets one user by exact email.
    pub fn get_user(&self, email: &str) -> Option<&User> {
        self.repo.find_user(email)
    }

    /// Gets one series by exact name.
    pub fn get_series(&self, name: &str) -> Option<&Series> {
        self.repo.find_series(name)
    }

    fn require_user(&self, email: &str) -> CatalogResult<&User> {
        self.repo
            .find_user(email)
            .ok_or_else(|| CatalogError::UserNotFound(email.to_string()))
    }

    fn require_series(&self, name: &str) -> CatalogResult<&Series> {
        self.repo
            .find_series(name)
            .ok_or_else(|| CatalogError::SeriesNotFound(name.to_string()))
    }
}

fn record<T>(event: &'static str, result: CatalogResult<T>) -> CatalogResult<T> {
    match &result {
        Ok(_) => info!("event={event} module=catalog status=ok"),
        Err(err) => warn!(
            "event={event} module=catalog status=error error_code={}",
            err.kind()
        ),
    }
    result
}

//! Series domain model and rating aggregation.
//!
//! # Invariants
//! - New series start with `rating = 0` and no reviews.
//! - `rating` is recomputed on every appended review as the plain mean.

use crate::model::tier::Category;
use serde::{Deserialize, Serialize};

/// One score left by one user. Repeated reviews by the same user are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub email: String,
    pub score: f64,
}

impl Review {
    pub fn new(email: impl Into<String>, score: f64) -> Self {
        Self {
            email: email.into(),
            score,
        }
    }
}

/// Catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    /// Unique identifier, compared exactly.
    pub name: String,
    pub seasons: u32,
    pub category: Category,
    /// Release year.
    pub year: i32,
    /// Mean of all review scores, `0` when there are none.
    pub rating: f64,
    /// Reviews in submission order.
    pub reviews: Vec<Review>,
}

impl Series {
    /// Creates an unrated series.
    pub fn new(name: impl Into<String>, seasons: u32, category: Category, year: i32) -> Self {
        Self {
            name: name.into(),
            seasons,
            category,
            year,
            rating: 0.0,
            reviews: Vec::new(),
        }
    }

    /// Appends one review and refreshes `rating`.
    pub fn add_review(&mut self, review: Review) {
        self.reviews.push(review);
        self.rating = mean_score(&self.reviews);
    }
}

fn mean_score(reviews: &[Review]) -> f64 {
    if reviews.is_empty() {
        return 0.0;
    }
    let total: f64 = reviews.iter().map(|review| review.score).sum();
    total / reviews.len() as f64
}

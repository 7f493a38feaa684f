use std::fmt;

/// Poster value stored when OMDb has no image for a title.
pub const POSTER_PLACEHOLDER: &str = "N/A";

/// A movie in the collection, keyed by `title`.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct MovieRecord {
    pub title: String,
    pub year: i32,
    /// IMDb-style rating, expected within 0.0..=10.0 but not enforced
    pub rating: f64,
    pub poster: String,
}

impl MovieRecord {
    pub fn new(title: impl Into<String>, year: i32, rating: f64, poster: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            year,
            rating,
            poster: poster.into(),
        }
    }
}

impl fmt::Display for MovieRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.title, self.year, Rating(self.rating))
    }
}

/// A rating exactly as stored: `7.25` stays `7.25`, whole values keep one
/// decimal (`8.0`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rating(pub f64);

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

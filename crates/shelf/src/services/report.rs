//! Read-only reports over a snapshot of the collection.
//!
//! Nothing here touches the store; callers pass in whatever
//! [`MovieRepository::list`](crate::repositories::MovieRepository::list)
//! returned.

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::models::MovieRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReportError {
    #[error("No movies in the collection.")]
    EmptyCollection,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RatingStats<'a> {
    pub average: f64,
    pub median: f64,
    /// Highest rating; the first one wins a tie
    pub best: &'a MovieRecord,
    /// Lowest rating; the first one wins a tie
    pub worst: &'a MovieRecord,
}

pub fn stats(records: &[MovieRecord]) -> Result<RatingStats<'_>, ReportError> {
    let first = records.first().ok_or(ReportError::EmptyCollection)?;

    let mut best = first;
    let mut worst = first;
    let mut total = 0.0;
    for movie in records {
        total += movie.rating;
        if movie.rating > best.rating {
            best = movie;
        }
        if movie.rating < worst.rating {
            worst = movie;
        }
    }

    let mut ratings: Vec<f64> = records.iter().map(|m| m.rating).collect();
    ratings.sort_by(f64::total_cmp);
    let mid = ratings.len() / 2;
    let median = if ratings.len() % 2 == 0 {
        (ratings[mid - 1] + ratings[mid]) / 2.0
    } else {
        ratings[mid]
    };

    Ok(RatingStats {
        average: total / records.len() as f64,
        median,
        best,
        worst,
    })
}

pub fn random_pick<'a, R>(records: &'a [MovieRecord], rng: &mut R) -> Result<&'a MovieRecord, ReportError>
where
    R: Rng + ?Sized,
{
    records.choose(rng).ok_or(ReportError::EmptyCollection)
}

/// First movie whose title contains `fragment`, ignoring case.
pub fn search<'a>(records: &'a [MovieRecord], fragment: &str) -> Option<&'a MovieRecord> {
    let needle = fragment.trim().to_lowercase();
    records
        .iter()
        .find(|movie| movie.title.to_lowercase().contains(&needle))
}

/// Ascending by rating; equal ratings keep their original order.
pub fn sort_by_rating(records: &[MovieRecord]) -> Vec<MovieRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| a.rating.total_cmp(&b.rating));
    sorted
}

/// Ascending by year; equal years keep their original order.
pub fn sort_by_year(records: &[MovieRecord]) -> Vec<MovieRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by_key(|movie| movie.year);
    sorted
}

/// Inclusive rating floor and year range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordFilter {
    pub min_rating: f64,
    pub start_year: i32,
    pub end_year: i32,
}

impl Default for RecordFilter {
    /// Matches everything.
    fn default() -> Self {
        Self {
            min_rating: f64::NEG_INFINITY,
            start_year: i32::MIN,
            end_year: i32::MAX,
        }
    }
}

impl RecordFilter {
    pub fn matches(&self, movie: &MovieRecord) -> bool {
        movie.rating >= self.min_rating && (self.start_year..=self.end_year).contains(&movie.year)
    }
}

pub fn filter(records: &[MovieRecord], criteria: &RecordFilter) -> Vec<MovieRecord> {
    records
        .iter()
        .filter(|movie| criteria.matches(movie))
        .cloned()
        .collect()
}

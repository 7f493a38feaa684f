use sqlx::SqlitePool;

use crate::models::MovieRecord;

/// Common SELECT fields for movie queries
const SELECT_MOVIES: &str = r#"
    SELECT title, year, rating, poster
    FROM movies
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    /// A movie with the same title is already stored; nothing was written.
    AlreadyExists,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated,
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

/// Durable movie collection backed by the `movies` table.
///
/// Every mutation is a single statement and is committed immediately.
#[derive(Clone)]
pub struct MovieRepository {
    pool: SqlitePool,
}

impl MovieRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get all movies in insertion order
    pub async fn list(&self) -> Result<Vec<MovieRecord>, sqlx::Error> {
        let query = format!("{} ORDER BY rowid", SELECT_MOVIES);
        sqlx::query_as::<_, MovieRecord>(&query)
            .fetch_all(&self.pool)
            .await
    }

    /// Get a movie by title (exact match)
    pub async fn get(&self, title: &str) -> Result<Option<MovieRecord>, sqlx::Error> {
        let query = format!("{} WHERE title = $1", SELECT_MOVIES);
        sqlx::query_as::<_, MovieRecord>(&query)
            .bind(title)
            .fetch_optional(&self.pool)
            .await
    }

    /// Insert a new movie. Duplicate titles are rejected, never overwritten.
    pub async fn add(&self, movie: &MovieRecord) -> Result<AddOutcome, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO movies (title, year, rating, poster)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT(title) DO NOTHING
            "#,
        )
        .bind(&movie.title)
        .bind(movie.year)
        .bind(movie.rating)
        .bind(&movie.poster)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            tracing::debug!(title = %movie.title, "Movie already stored, skipping insert");
            return Ok(AddOutcome::AlreadyExists);
        }

        tracing::info!(title = %movie.title, year = movie.year, "Added movie");
        Ok(AddOutcome::Added)
    }

    /// Set the rating of the movie with this exact title
    pub async fn update_rating(&self, title: &str, rating: f64) -> Result<UpdateOutcome, sqlx::Error> {
        let result = sqlx::query("UPDATE movies SET rating = $1 WHERE title = $2")
            .bind(rating)
            .bind(title)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(UpdateOutcome::NotFound);
        }

        tracing::info!(title, rating, "Updated movie rating");
        Ok(UpdateOutcome::Updated)
    }

    /// Delete the movie with this exact title
    pub async fn delete(&self, title: &str) -> Result<DeleteOutcome, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE title = $1")
            .bind(title)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(DeleteOutcome::NotFound);
        }

        tracing::info!(title, "Deleted movie");
        Ok(DeleteOutcome::Deleted)
    }
}

use std::io::Write;
use std::str::FromStr;

use tokio::io::AsyncBufRead;

use super::Menu;
use crate::error::CommandError;
use crate::models::{MovieRecord, Rating};
use crate::repositories::{AddOutcome, DeleteOutcome, UpdateOutcome};
use crate::services::report::{self, RecordFilter, ReportError};

impl<R, W> Menu<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub(super) async fn list_movies(&mut self) -> Result<(), CommandError> {
        let movies = self.movies.list().await?;
        writeln!(self.output, "{} movies in total", movies.len())?;
        for movie in &movies {
            writeln!(self.output, "{movie}")?;
        }
        Ok(())
    }

    pub(super) async fn add_movie(&mut self) -> Result<(), CommandError> {
        let Some(input) = self.prompt("Enter movie title: ").await? else {
            return Ok(());
        };
        let title = input.trim();
        if title.is_empty() {
            writeln!(self.output, "Title cannot be empty.")?;
            return Ok(());
        }

        // Skip the lookup when the exact title is already stored
        if self.movies.get(title).await?.is_some() {
            writeln!(self.output, "Movie '{title}' already exists.")?;
            return Ok(());
        }

        tracing::debug!(fetcher = self.fetcher.name(), title, "Fetching movie metadata");
        let movie = self.fetcher.fetch(title).await?;

        match self.movies.add(&movie).await? {
            AddOutcome::Added => writeln!(
                self.output,
                "Movie '{}' ({}) added with rating {}.",
                movie.title, movie.year, Rating(movie.rating)
            )?,
            AddOutcome::AlreadyExists => {
                writeln!(self.output, "Movie '{}' already exists.", movie.title)?
            }
        }
        Ok(())
    }

    pub(super) async fn delete_movie(&mut self) -> Result<(), CommandError> {
        let Some(input) = self.prompt("Enter movie title to delete: ").await? else {
            return Ok(());
        };
        let title = input.trim();

        match self.movies.delete(title).await? {
            DeleteOutcome::Deleted => writeln!(self.output, "Movie '{title}' deleted.")?,
            DeleteOutcome::NotFound => return Err(CommandError::NotFound(title.to_string())),
        }
        Ok(())
    }

    pub(super) async fn update_movie(&mut self) -> Result<(), CommandError> {
        let Some(input) = self.prompt("Enter movie title to update: ").await? else {
            return Ok(());
        };
        let title = input.trim();
        let Some(rating) = self.prompt("Enter new rating: ").await? else {
            return Ok(());
        };
        let rating = parse_rating("Rating", &rating)?;

        match self.movies.update_rating(title, rating).await? {
            UpdateOutcome::Updated => writeln!(
                self.output,
                "Movie '{title}' rating updated to {}.",
                Rating(rating)
            )?,
            UpdateOutcome::NotFound => return Err(CommandError::NotFound(title.to_string())),
        }
        Ok(())
    }

    pub(super) async fn stats(&mut self) -> Result<(), CommandError> {
        let movies = self.movies.list().await?;
        let stats = report::stats(&movies)?;

        writeln!(self.output, "Average rating: {:.2}", stats.average)?;
        writeln!(
            self.output,
            "Best movie: {}, {}",
            stats.best.title, Rating(stats.best.rating)
        )?;
        writeln!(
            self.output,
            "Worst movie: {}, {}",
            stats.worst.title, Rating(stats.worst.rating)
        )?;
        writeln!(self.output, "Median rating: {:.2}", stats.median)?;
        Ok(())
    }

    pub(super) async fn random_movie(&mut self) -> Result<(), CommandError> {
        let movies = self.movies.list().await?;
        let movie = report::random_pick(&movies, &mut self.rng)?;
        writeln!(
            self.output,
            "Today you should watch '{}' ({}) - {}",
            movie.title, movie.year, Rating(movie.rating)
        )?;
        Ok(())
    }

    /// Ask for a fragment until something matches; a blank answer gives up.
    pub(super) async fn search_movie(&mut self) -> Result<(), CommandError> {
        let movies = self.movies.list().await?;
        if movies.is_empty() {
            return Err(ReportError::EmptyCollection.into());
        }

        loop {
            let Some(fragment) = self
                .prompt("Enter part of movie name (blank to cancel): ")
                .await?
            else {
                return Ok(());
            };
            if fragment.trim().is_empty() {
                return Ok(());
            }

            match report::search(&movies, &fragment) {
                Some(movie) => {
                    writeln!(
                        self.output,
                        "Found: {} ({}) - {}",
                        movie.title, movie.year, Rating(movie.rating)
                    )?;
                    return Ok(());
                }
                None => writeln!(self.output, "Nothing found.")?,
            }
        }
    }

    pub(super) async fn movies_by_rating(&mut self) -> Result<(), CommandError> {
        let movies = self.movies.list().await?;
        writeln!(self.output, "Sorted movies by rating:")?;
        self.print_numbered(&report::sort_by_rating(&movies))?;
        Ok(())
    }

    pub(super) async fn movies_by_year(&mut self) -> Result<(), CommandError> {
        let movies = self.movies.list().await?;
        writeln!(self.output, "Sorted movies by year:")?;
        self.print_numbered(&report::sort_by_year(&movies))?;
        Ok(())
    }

    pub(super) async fn filter_movies(&mut self) -> Result<(), CommandError> {
        let movies = self.movies.list().await?;
        let mut criteria = RecordFilter::default();

        let Some(input) = self
            .prompt("Enter minimum rating (leave blank for no minimum rating): ")
            .await?
        else {
            return Ok(());
        };
        if !input.trim().is_empty() {
            criteria.min_rating = parse_rating("Minimum rating", &input)?;
        }

        let Some(input) = self
            .prompt("Enter start year (leave blank for no start year): ")
            .await?
        else {
            return Ok(());
        };
        if !input.trim().is_empty() {
            criteria.start_year = parse_number("Start year", &input)?;
        }

        let Some(input) = self
            .prompt("Enter end year (leave blank for no end year): ")
            .await?
        else {
            return Ok(());
        };
        if !input.trim().is_empty() {
            criteria.end_year = parse_number("End year", &input)?;
        }

        let matches = report::filter(&movies, &criteria);
        if matches.is_empty() {
            writeln!(self.output, "No movies match the filter.")?;
            return Ok(());
        }

        writeln!(self.output, "Filtered movies:")?;
        for movie in &matches {
            writeln!(self.output, "{movie}")?;
        }
        Ok(())
    }

    pub(super) async fn generate_website(&mut self) -> Result<(), CommandError> {
        let movies = self.movies.list().await?;
        self.site.generate(&movies).await?;
        writeln!(self.output, "Website was generated successfully.")?;
        Ok(())
    }

    fn print_numbered(&mut self, movies: &[MovieRecord]) -> std::io::Result<()> {
        for (index, movie) in movies.iter().enumerate() {
            writeln!(
                self.output,
                "{}. {} ({}) - {}",
                index + 1,
                movie.title,
                movie.year,
                Rating(movie.rating)
            )?;
        }
        Ok(())
    }
}

fn parse_number<T: FromStr>(field: &'static str, value: &str) -> Result<T, CommandError> {
    value
        .trim()
        .parse()
        .map_err(|_| CommandError::MalformedInput {
            field,
            value: value.trim().to_string(),
        })
}

fn parse_rating(field: &'static str, value: &str) -> Result<f64, CommandError> {
    let rating: f64 = parse_number(field, value)?;
    if !rating.is_finite() {
        return Err(CommandError::MalformedInput {
            field,
            value: value.trim().to_string(),
        });
    }
    Ok(rating)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number::<i32>("Start year", " 1999 ").unwrap(), 1999);
        assert!(matches!(
            parse_number::<i32>("Start year", "19x9"),
            Err(CommandError::MalformedInput { field: "Start year", .. })
        ));
    }

    #[test]
    fn test_parse_rating_rejects_non_finite() {
        assert_eq!(parse_rating("Rating", "7.5").unwrap(), 7.5);
        assert!(parse_rating("Rating", "NaN").is_err());
        assert!(parse_rating("Rating", "inf").is_err());
        assert!(parse_rating("Rating", "").is_err());
    }
}

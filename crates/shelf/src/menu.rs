//! Interactive numbered menu.
//!
//! The menu has a single state: waiting for a selection. A number in range
//! runs the matching command and comes back here; anything else is ignored
//! and the prompt is shown again. Only [`MenuAction::Exit`] (or end of input)
//! leaves the loop.

mod action;
mod commands;

use std::io::{self, Write};
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

pub use action::MenuAction;

use crate::error::CommandError;
use crate::repositories::MovieRepository;
use crate::services::{MetadataFetcher, SiteGenerator};

pub struct Menu<R, W> {
    input: R,
    output: W,
    movies: MovieRepository,
    fetcher: Arc<dyn MetadataFetcher>,
    site: SiteGenerator,
    rng: StdRng,
}

impl<R, W> Menu<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(
        input: R,
        output: W,
        movies: MovieRepository,
        fetcher: Arc<dyn MetadataFetcher>,
        site: SiteGenerator,
    ) -> Self {
        Self {
            input,
            output,
            movies,
            fetcher,
            site,
            rng: StdRng::from_entropy(),
        }
    }

    /// Replace the random source used by [`MenuAction::RandomMovie`].
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    /// Run until the user picks Exit or input ends.
    ///
    /// Command failures are printed and the loop continues; only a failure
    /// to read or write the console is returned.
    pub async fn run(mut self) -> io::Result<()> {
        self.print_menu()?;
        let choice_prompt = format!("\nEnter choice (0-{}): ", MenuAction::ALL.len() - 1);

        loop {
            let Some(line) = self.prompt(&choice_prompt).await? else {
                writeln!(self.output)?;
                break;
            };
            let Some(action) = line.trim().parse::<usize>().ok().and_then(MenuAction::from_index) else {
                continue;
            };
            if action == MenuAction::Exit {
                break;
            }

            tracing::debug!(%action, "Running menu command");
            match self.dispatch(action).await {
                Ok(()) => {}
                Err(CommandError::Console(e)) => return Err(e),
                Err(e) => {
                    tracing::debug!(%action, error = %e, "Menu command failed");
                    writeln!(self.output, "{e}")?;
                }
            }
        }

        writeln!(self.output, "Bye!")?;
        self.output.flush()
    }

    async fn dispatch(&mut self, action: MenuAction) -> Result<(), CommandError> {
        match action {
            MenuAction::Exit => Ok(()),
            MenuAction::ListMovies => self.list_movies().await,
            MenuAction::AddMovie => self.add_movie().await,
            MenuAction::DeleteMovie => self.delete_movie().await,
            MenuAction::UpdateMovie => self.update_movie().await,
            MenuAction::Stats => self.stats().await,
            MenuAction::RandomMovie => self.random_movie().await,
            MenuAction::SearchMovie => self.search_movie().await,
            MenuAction::MoviesByRating => self.movies_by_rating().await,
            MenuAction::MoviesByYear => self.movies_by_year().await,
            MenuAction::FilterMovies => self.filter_movies().await,
            MenuAction::GenerateWebsite => self.generate_website().await,
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "********** My Movies Database **********")?;
        for (index, action) in MenuAction::ALL.iter().enumerate() {
            writeln!(self.output, "{index}. {action}")?;
        }
        Ok(())
    }

    /// Print `message` and read one line, `None` at end of input.
    async fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

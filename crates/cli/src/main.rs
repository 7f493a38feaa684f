use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use shelf::{db, Config, Menu, MovieRepository, OmdbFetcher, SiteGenerator};
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "movie-shelf")]
#[command(about = "Manage a personal movie collection", long_about = None)]
struct Cli {
    /// Configuration file, created with defaults if missing
    #[arg(short, long, default_value = "movie-shelf.toml")]
    config: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = Config::load_or_create(&cli.config).await?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(path = %cli.config.display(), "Loaded configuration");

    let pool = db::create_pool(&config.database).await?;
    let movies = MovieRepository::new(pool);
    let fetcher = Arc::new(OmdbFetcher::new(&config.omdb)?);
    let site = SiteGenerator::new(&config.site);

    let stdin = BufReader::new(tokio::io::stdin());
    Menu::new(stdin, std::io::stdout(), movies, fetcher, site)
        .run()
        .await?;

    Ok(())
}

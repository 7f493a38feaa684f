//! Personal movie collection: a SQLite-backed store, OMDb lookups, rating
//! reports and a static HTML gallery, driven by a numbered text menu.

pub mod config;
pub mod db;
pub mod error;
pub mod menu;
pub mod models;
pub mod repositories;
pub mod services;

pub use config::Config;
pub use error::CommandError;
pub use menu::{Menu, MenuAction};
pub use models::MovieRecord;
pub use repositories::MovieRepository;
pub use services::{MetadataFetcher, OmdbFetcher, SiteGenerator};

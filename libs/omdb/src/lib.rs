//! Async client for the [OMDb API](https://www.omdbapi.com/).
//!
//! Only the title lookup (`?t=`) endpoint is wrapped. OMDb answers every
//! lookup with a JSON body whose `Response` field is `"True"` or `"False"`;
//! [`OmdbClient::get_by_title`] folds that into [`MovieLookup`].

mod client;
mod error;
mod movie;
pub mod models;

pub use client::{OmdbClient, DEFAULT_BASE_URL};
pub use error::OmdbError;
pub use models::{MovieDetail, MovieLookup, TitleResponse};

pub type Result<T> = std::result::Result<T, OmdbError>;

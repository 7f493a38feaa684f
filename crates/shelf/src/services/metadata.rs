//! Movie metadata lookup.
//!
//! [`MetadataFetcher`] is the seam between the menu and the outside world;
//! [`OmdbFetcher`] is the production implementation.

use async_trait::async_trait;
use omdb::{MovieDetail, MovieLookup, OmdbClient, OmdbError};
use thiserror::Error;

use crate::config::OmdbConfig;
use crate::models::{MovieRecord, POSTER_PLACEHOLDER};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Cannot connect to OMDb API: {0}")]
    Connection(#[source] OmdbError),

    #[error("Movie '{title}' not found in OMDb.")]
    NotFound {
        title: String,
        reason: Option<String>,
    },

    #[error("OMDb returned malformed data: {0}")]
    MalformedResponse(String),
}

impl From<OmdbError> for FetchError {
    fn from(err: OmdbError) -> Self {
        if err.is_transport() {
            Self::Connection(err)
        } else {
            Self::MalformedResponse(err.to_string())
        }
    }
}

#[async_trait]
pub trait MetadataFetcher: Send + Sync {
    /// Look up a single title. Exactly one request is made; no retries.
    async fn fetch(&self, title: &str) -> Result<MovieRecord, FetchError>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

pub struct OmdbFetcher {
    client: OmdbClient,
}

impl OmdbFetcher {
    pub fn new(config: &OmdbConfig) -> Result<Self, OmdbError> {
        if config.api_key.is_empty() {
            tracing::warn!("No OMDb API key configured, lookups will be rejected by the service");
        }

        let client = OmdbClient::new(config.api_key.clone(), config.timeout())?
            .with_base_url(config.base_url.clone());
        Ok(Self::with_client(client))
    }

    pub fn with_client(client: OmdbClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MetadataFetcher for OmdbFetcher {
    async fn fetch(&self, title: &str) -> Result<MovieRecord, FetchError> {
        match self.client.get_by_title(title).await? {
            MovieLookup::Found(detail) => record_from_detail(detail),
            MovieLookup::NotFound { reason } => {
                tracing::debug!(title, reason = ?reason, "OMDb has no match");
                Err(FetchError::NotFound {
                    title: title.to_string(),
                    reason,
                })
            }
        }
    }

    fn name(&self) -> &'static str {
        "omdb"
    }
}

/// Convert OMDb's textual fields into a record.
fn record_from_detail(detail: MovieDetail) -> Result<MovieRecord, FetchError> {
    let year = parse_year(&detail.year).ok_or_else(|| {
        FetchError::MalformedResponse(format!("invalid year '{}'", detail.year))
    })?;
    let rating = parse_rating(&detail.imdb_rating).ok_or_else(|| {
        FetchError::MalformedResponse(format!("invalid rating '{}'", detail.imdb_rating))
    })?;

    let poster = if detail.poster.trim().is_empty() {
        POSTER_PLACEHOLDER.to_string()
    } else {
        detail.poster
    };

    Ok(MovieRecord {
        title: detail.title,
        year,
        rating,
        poster,
    })
}

/// Leading year of values like `"2010"` or `"2010–2014"`.
fn parse_year(value: &str) -> Option<i32> {
    let value = value.trim();
    let end = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    value[..end].parse().ok()
}

fn parse_rating(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|r| r.is_finite())
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    use super::*;

    fn detail(year: &str, rating: &str) -> MovieDetail {
        MovieDetail {
            title: "Inception".to_string(),
            year: year.to_string(),
            imdb_rating: rating.to_string(),
            poster: "https://img/inception.jpg".to_string(),
        }
    }

    #[test]
    fn test_record_from_detail() {
        let record = record_from_detail(detail("2010", "8.8")).unwrap();
        assert_eq!(
            record,
            MovieRecord::new("Inception", 2010, 8.8, "https://img/inception.jpg")
        );
    }

    #[test]
    fn test_blank_poster_becomes_placeholder() {
        let mut blank = detail("2010", "8.8");
        blank.poster = String::new();
        assert_eq!(record_from_detail(blank).unwrap().poster, POSTER_PLACEHOLDER);
    }

    #[test]
    fn test_year_range_uses_first_year() {
        assert_eq!(parse_year("2010–2014"), Some(2010));
        assert_eq!(parse_year("2019–"), Some(2019));
        assert_eq!(parse_year(" 1999 "), Some(1999));
    }

    #[test]
    fn test_unparseable_fields_are_malformed() {
        assert!(matches!(
            record_from_detail(detail("N/A", "8.8")),
            Err(FetchError::MalformedResponse(_))
        ));
        assert!(matches!(
            record_from_detail(detail("2010", "N/A")),
            Err(FetchError::MalformedResponse(_))
        ));
        assert!(matches!(
            record_from_detail(detail("2010", "NaN")),
            Err(FetchError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_error_classification() {
        let api = OmdbError::Api {
            status_code: 503,
            message: "down".to_string(),
        };
        assert!(matches!(FetchError::from(api), FetchError::Connection(_)));

        let missing = OmdbError::MissingField("Year");
        assert!(matches!(
            FetchError::from(missing),
            FetchError::MalformedResponse(_)
        ));
    }

    /// Answer one request with `body` and return the base URL to query.
    async fn serve_once(body: &'static str) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 8192];
            let _ = socket.read(&mut buf).await.unwrap();
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });
        format!("http://{}/", addr)
    }

    fn fetcher(base_url: String) -> OmdbFetcher {
        OmdbFetcher::new(&OmdbConfig {
            api_key: "test-key".to_string(),
            base_url,
            timeout_secs: 5,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_fetch_found() {
        let url = serve_once(
            r#"{"Title":"Inception","Year":"2010","imdbRating":"8.8","Poster":"https://img/inception.jpg","Response":"True"}"#,
        )
        .await;

        let record = fetcher(url).fetch("inception").await.unwrap();
        assert_eq!(
            record,
            MovieRecord::new("Inception", 2010, 8.8, "https://img/inception.jpg")
        );
    }

    #[tokio::test]
    async fn test_fetch_unknown_title_is_not_found() {
        let url = serve_once(r#"{"Response":"False","Error":"Movie not found!"}"#).await;

        match fetcher(url).fetch("zzz").await {
            Err(FetchError::NotFound { title, reason }) => {
                assert_eq!(title, "zzz");
                assert_eq!(reason.as_deref(), Some("Movie not found!"));
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_unrated_movie_is_malformed() {
        let url = serve_once(
            r#"{"Title":"Obscure","Year":"2021","imdbRating":"N/A","Poster":"N/A","Response":"True"}"#,
        )
        .await;

        match fetcher(url).fetch("Obscure").await {
            Err(FetchError::MalformedResponse(message)) => {
                assert_eq!(message, "invalid rating 'N/A'");
            }
            other => panic!("expected MalformedResponse, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unreachable_service_is_connection_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let config = OmdbConfig {
            api_key: "test-key".to_string(),
            base_url: format!("http://{}/", addr),
            timeout_secs: 1,
        };
        let fetcher = OmdbFetcher::new(&config).unwrap();
        assert!(matches!(
            fetcher.fetch("Inception").await,
            Err(FetchError::Connection(_))
        ));
    }
}

use std::time::Duration;

use reqwest::Client;

use crate::error::OmdbError;

pub const DEFAULT_BASE_URL: &str = "http://www.omdbapi.com/";

pub struct OmdbClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OmdbClient {
    /// Create a client with its own reqwest Client bounded by `timeout`.
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> crate::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, api_key))
    }

    /// Create an OmdbClient with an existing reqwest Client.
    pub fn with_client(client: Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client at another OMDb-compatible endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> crate::Result<T> {
        let status = response.status();
        let body = response.text().await?;
        let deserializer = &mut serde_json::Deserializer::from_str(&body);
        match serde_path_to_error::deserialize(deserializer) {
            Ok(value) => {
                // OMDb sends lookup failures such as a bad key with a 401 and a
                // regular JSON body, so the body wins over the status code.
                if !status.is_success() {
                    tracing::debug!(status = status.as_u16(), "OMDb returned non-success status");
                }
                Ok(value)
            }
            Err(_) if !status.is_success() => Err(OmdbError::Api {
                status_code: status.as_u16(),
                message: body,
            }),
            Err(e) => Err(OmdbError::Json {
                path: e.path().to_string(),
                source: e.into_inner(),
            }),
        }
    }
}

use crate::{models::TitleResponse, MovieLookup, OmdbClient};

impl OmdbClient {
    /// Look up a movie by title
    ///
    /// GET /?apikey={key}&t={title}
    pub async fn get_by_title(&self, title: &str) -> crate::Result<MovieLookup> {
        tracing::debug!(title, "Looking up title on OMDb");
        let response = self
            .client()
            .get(self.base_url())
            .query(&[("apikey", self.api_key()), ("t", title)])
            .send()
            .await?;
        let body: TitleResponse = self.handle_response(response).await?;
        body.into_lookup()
    }
}

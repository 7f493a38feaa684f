use serde::Deserialize;

/// Raw body of a `?t=` lookup.
///
/// On success every field is present; on failure OMDb only sends
/// `Response: "False"` and `Error`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TitleResponse {
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(rename = "imdbRating", default)]
    pub imdb_rating: Option<String>,
    #[serde(default)]
    pub poster: Option<String>,
}

/// Fields of a found movie, still in OMDb's textual form.
///
/// `year` may be a range such as `"2010–2014"` and `imdb_rating` or `poster`
/// may be `"N/A"`; interpreting them is left to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDetail {
    pub title: String,
    pub year: String,
    pub imdb_rating: String,
    pub poster: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MovieLookup {
    Found(MovieDetail),
    NotFound { reason: Option<String> },
}

impl TitleResponse {
    pub fn into_lookup(self) -> crate::Result<MovieLookup> {
        if self.response.as_deref() == Some("False") {
            return Ok(MovieLookup::NotFound { reason: self.error });
        }

        Ok(MovieLookup::Found(MovieDetail {
            title: self.title.ok_or(crate::OmdbError::MissingField("Title"))?,
            year: self.year.ok_or(crate::OmdbError::MissingField("Year"))?,
            imdb_rating: self
                .imdb_rating
                .ok_or(crate::OmdbError::MissingField("imdbRating"))?,
            poster: self.poster.ok_or(crate::OmdbError::MissingField("Poster"))?,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_found_response() {
        let body = r#"{"Title":"Inception","Year":"2010","imdbRating":"8.8","Poster":"https://img/inception.jpg","Response":"True"}"#;
        let response: TitleResponse = serde_json::from_str(body).unwrap();
        let lookup = response.into_lookup().unwrap();
        assert_eq!(
            lookup,
            MovieLookup::Found(MovieDetail {
                title: "Inception".to_string(),
                year: "2010".to_string(),
                imdb_rating: "8.8".to_string(),
                poster: "https://img/inception.jpg".to_string(),
            })
        );
    }

    #[test]
    fn test_not_found_response() {
        let body = r#"{"Response":"False","Error":"Movie not found!"}"#;
        let response: TitleResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            response.into_lookup().unwrap(),
            MovieLookup::NotFound {
                reason: Some("Movie not found!".to_string())
            }
        );
    }

    #[test]
    fn test_missing_field() {
        let body = r#"{"Title":"Inception","Year":"2010","Response":"True"}"#;
        let response: TitleResponse = serde_json::from_str(body).unwrap();
        assert!(matches!(
            response.into_lookup(),
            Err(crate::OmdbError::MissingField("imdbRating"))
        ));
    }
}

use std::path::{Path, PathBuf};

use maud::{html, Markup};
use thiserror::Error;

use crate::config::SiteConfig;
use crate::models::{MovieRecord, Rating};

pub const TITLE_PLACEHOLDER: &str = "__TEMPLATE_TITLE__";
pub const GRID_PLACEHOLDER: &str = "__TEMPLATE_MOVIE_GRID__";

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("{operation} '{path}': {source}")]
    Io {
        operation: &'static str,
        path: String,
        source: std::io::Error,
    },
}

impl SiteError {
    fn io(operation: &'static str, path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            operation,
            path: path.display().to_string(),
            source,
        }
    }
}

/// Renders the collection into the gallery template.
pub struct SiteGenerator {
    template_path: PathBuf,
    output_path: PathBuf,
    page_title: String,
}

impl SiteGenerator {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            template_path: config.template_path.clone(),
            output_path: config.output_path.clone(),
            page_title: config.page_title.clone(),
        }
    }

    /// Substitute the page title and movie grid into `template`.
    pub fn render(&self, records: &[MovieRecord], template: &str) -> String {
        for placeholder in [TITLE_PLACEHOLDER, GRID_PLACEHOLDER] {
            if !template.contains(placeholder) {
                tracing::warn!(placeholder, "Template has no placeholder");
            }
        }

        let title = html! { (self.page_title) }.into_string();
        template
            .replace(TITLE_PLACEHOLDER, &title)
            .replace(GRID_PLACEHOLDER, &movie_grid(records).into_string())
    }

    /// Read the template, render it and overwrite the output file.
    pub async fn generate(&self, records: &[MovieRecord]) -> Result<&Path, SiteError> {
        let template = tokio::fs::read_to_string(&self.template_path)
            .await
            .map_err(|e| SiteError::io("Failed to read template", &self.template_path, e))?;

        let page = self.render(records, &template);

        if let Some(parent) = self.output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| SiteError::io("Failed to create directory", parent, e))?;
        }
        tokio::fs::write(&self.output_path, page)
            .await
            .map_err(|e| SiteError::io("Failed to write", &self.output_path, e))?;

        tracing::info!(
            path = %self.output_path.display(),
            movies = records.len(),
            "Generated website"
        );
        Ok(&self.output_path)
    }
}

/// One `<li class="movie">` per record inside an ordered list.
pub fn movie_grid(records: &[MovieRecord]) -> Markup {
    html! {
        ol."movie-grid" {
            @for movie in records {
                li."movie" {
                    img."movie-poster" src=(movie.poster) alt=(format!("{} poster", movie.title));
                    div."movie-title" { (movie.title) }
                    div."movie-year" { (movie.year) }
                    div."movie-rating" { "Rating: " (Rating(movie.rating).to_string()) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str =
        "<html><head><title>__TEMPLATE_TITLE__</title></head><body><h1>__TEMPLATE_TITLE__</h1>__TEMPLATE_MOVIE_GRID__</body></html>";

    fn generator(dir: &Path) -> SiteGenerator {
        SiteGenerator::new(&SiteConfig {
            template_path: dir.join("index_template.html"),
            output_path: dir.join("out").join("index.html"),
            page_title: "My Movie Collection".to_string(),
        })
    }

    #[test]
    fn test_render_movies() {
        let dir = tempfile::tempdir().unwrap();
        let records = vec![
            MovieRecord::new("Inception", 2010, 8.8, "https://img/inception.jpg"),
            MovieRecord::new("Heat", 1995, 8.3, "N/A"),
        ];

        let page = generator(dir.path()).render(&records, TEMPLATE);
        assert!(page.contains("<title>My Movie Collection</title>"));
        assert!(page.contains("<h1>My Movie Collection</h1>"));
        assert!(page.contains(r#"src="https://img/inception.jpg""#));
        assert!(page.contains(r#"alt="Inception poster""#));
        assert!(page.contains(r#"<div class="movie-title">Heat</div>"#));
        assert!(page.contains(r#"<div class="movie-year">1995</div>"#));
        assert!(page.contains(r#"<div class="movie-rating">Rating: 8.8</div>"#));
        assert_eq!(page.matches(r#"<li class="movie">"#).count(), 2);
        assert!(!page.contains(TITLE_PLACEHOLDER));
        assert!(!page.contains(GRID_PLACEHOLDER));
    }

    #[test]
    fn test_rating_is_shown_as_stored() {
        let records = vec![
            MovieRecord::new("Alien", 1979, 7.25, "N/A"),
            MovieRecord::new("Heat", 1995, 8.0, "N/A"),
        ];
        let grid = movie_grid(&records).into_string();
        assert!(grid.contains(r#"<div class="movie-rating">Rating: 7.25</div>"#));
        assert!(grid.contains(r#"<div class="movie-rating">Rating: 8.0</div>"#));
    }

    #[test]
    fn test_render_escapes_titles() {
        let records = vec![MovieRecord::new("Tom & Jerry <3", 1992, 5.4, "N/A")];
        let grid = movie_grid(&records).into_string();
        assert!(grid.contains("Tom &amp; Jerry &lt;3"));
    }

    #[test]
    fn test_empty_collection_renders_empty_list() {
        assert_eq!(
            movie_grid(&[]).into_string(),
            r#"<ol class="movie-grid"></ol>"#
        );
    }

    #[tokio::test]
    async fn test_generate_writes_output() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::write(dir.path().join("index_template.html"), TEMPLATE)
            .await
            .unwrap();
        let site = generator(dir.path());

        let path = site.generate(&[]).await.unwrap().to_path_buf();
        let written = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(written.contains(r#"<ol class="movie-grid"></ol>"#));

        let records = vec![MovieRecord::new("Up", 2009, 8.3, "N/A")];
        site.generate(&records).await.unwrap();
        let rewritten = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(rewritten.contains(r#"<div class="movie-title">Up</div>"#));
        assert!(!rewritten.contains(r#"<ol class="movie-grid"></ol>"#));
    }

    #[tokio::test]
    async fn test_missing_template_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = generator(dir.path()).generate(&[]).await.unwrap_err();
        let SiteError::Io { operation, .. } = err;
        assert_eq!(operation, "Failed to read template");
    }
}

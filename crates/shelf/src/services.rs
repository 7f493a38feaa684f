mod metadata;
pub mod report;
mod site;

pub use metadata::{FetchError, MetadataFetcher, OmdbFetcher};
pub use report::{RatingStats, RecordFilter, ReportError};
pub use site::{SiteError, SiteGenerator, GRID_PLACEHOLDER, TITLE_PLACEHOLDER};

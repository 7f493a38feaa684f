mod movie;

pub use movie::{MovieRecord, Rating, POSTER_PLACEHOLDER};

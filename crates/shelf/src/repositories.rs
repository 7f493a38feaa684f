mod movie;

pub use movie::{AddOutcome, DeleteOutcome, MovieRepository, UpdateOutcome};

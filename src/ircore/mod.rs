pub mod common;
pub mod error;
pub mod matrix;
pub mod index;
pub mod query;
pub mod utils;
pub mod ranking;
pub mod engine;

pub use common::{DocId, Frequency, Score, RankingAlgorithm};
pub use error::{Error, Result};

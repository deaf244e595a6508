use std::io;
use crate::ircore::common::DocId;

/// Errors raised while loading a matrix, building the index or scoring.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Query term list was empty.
    #[error("empty query")]
    EmptyQuery,
    /// The collection has no documents.
    #[error("document count must be greater than zero")]
    EmptyCollection,
    /// A term's frequency vector does not have one entry per document.
    #[error("term '{term}' has {found} frequencies, expected {expected}")]
    ShapeMismatch {
        term: String,
        expected: usize,
        found: usize,
    },
    /// A document's total term count does not fit in a frequency.
    #[error("length of document D{} overflows", .doc + 1)]
    FrequencyOverflow { doc: DocId },
    #[error("unsupported matrix file format: {0}")]
    UnsupportedFormat(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(Error::EmptyQuery.to_string(), "empty query");
        let err = Error::ShapeMismatch {
            term: "duck".to_string(),
            expected: 5,
            found: 4,
        };
        assert_eq!(err.to_string(), "term 'duck' has 4 frequencies, expected 5");
        assert_eq!(
            Error::UnsupportedFormat("toml".to_string()).to_string(),
            "unsupported matrix file format: toml"
        );
        assert_eq!(Error::FrequencyOverflow { doc: 0 }.to_string(), "length of document D1 overflows");
    }
}

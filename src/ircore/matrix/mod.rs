pub mod loader;

use std::collections::BTreeMap;
use serde::{Serialize, Deserialize};
use once_cell::sync::Lazy;
use crate::ircore::common::Frequency;
use crate::ircore::error::{Error, Result};

/// Term-document frequency matrix: one frequency per document for every term,
/// document order shared by all terms.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct TermDocMatrix {
    // when absent the count is taken from the frequency vectors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    doc_count: Option<usize>,
    terms: BTreeMap<String, Vec<Frequency>>,
}

// 6 terms, 5 documents
static SAMPLE: Lazy<TermDocMatrix> = Lazy::new(|| {
    let mut matrix = TermDocMatrix::new(5);
    matrix.insert("beijing", vec![0, 1, 0, 0, 1]);
    matrix.insert("dish", vec![0, 0, 0, 1, 1]);
    matrix.insert("duck", vec![0, 0, 2, 2, 1]);
    matrix.insert("rabbit", vec![0, 0, 1, 2, 0]);
    matrix.insert("recipe", vec![1, 2, 0, 1, 1]);
    matrix.insert("roast", vec![0, 1, 1, 0, 0]);
    matrix
});

impl TermDocMatrix {
    pub fn new(doc_count: usize) -> Self {
        TermDocMatrix {
            doc_count: Some(doc_count),
            terms: BTreeMap::new(),
        }
    }

    /// The built-in worked example collection.
    pub fn sample() -> &'static TermDocMatrix {
        &SAMPLE
    }

    pub fn insert(&mut self, term: &str, frequencies: Vec<Frequency>) -> Option<Vec<Frequency>> {
        self.terms.insert(term.to_owned(), frequencies)
    }

    pub fn with_doc_count(mut self, doc_count: usize) -> Self {
        self.doc_count = Some(doc_count);
        self
    }

    pub fn get_doc_count(&self) -> usize {
        match self.doc_count {
            Some(count) => count,
            None => self.terms.values().next().map_or(0, |freqs| freqs.len()),
        }
    }

    pub fn get_term_count(&self) -> usize {
        self.terms.len()
    }

    pub fn rows(&self) -> impl Iterator<Item = (&String, &Vec<Frequency>)> {
        self.terms.iter()
    }

    /// Checks the matrix shape and returns the document count.
    pub fn validate(&self) -> Result<usize> {
        let doc_count = self.get_doc_count();
        if doc_count == 0 {
            return Err(Error::EmptyCollection);
        }
        for (term, freqs) in &self.terms {
            if freqs.len() != doc_count {
                return Err(Error::ShapeMismatch {
                    term: term.clone(),
                    expected: doc_count,
                    found: freqs.len(),
                });
            }
        }
        Ok(doc_count)
    }
}

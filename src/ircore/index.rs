pub mod posting;

use std::collections::HashMap;
use std::cmp::Reverse;
pub use posting::Posting;
use crate::ircore::common::{DocId, Frequency};
use crate::ircore::matrix::TermDocMatrix;
use crate::ircore::error::{Error, Result};

/// Read-only inverted index built once from a term-document matrix.
#[derive(Debug)]
pub struct InvertedIndex {
    // term -> postings, ascending doc id, frequency > 0 only
    postings_lists: HashMap<String, Vec<Posting>>,
    // number of tokens of a document, doc id is used as vector index
    document_length: Vec<Frequency>,
    total_document_length: u64,
    // N, supplied by the matrix rather than counted from postings
    document_count: usize,
}

pub struct IndexStats {
    pub document_count: usize,
    pub term_count: usize,
    // total document length in tokens
    pub total_document_length: u64,
    pub average_document_length: f64,
    // collection frequency per term, most frequent first
    pub term_freq: Vec<(String, u64)>,
}

impl InvertedIndex {
    pub fn build_from(matrix: &TermDocMatrix) -> Result<Self> {
        let document_count = matrix.validate()?;
        let mut index = InvertedIndex {
            postings_lists: HashMap::new(),
            document_length: vec![0; document_count],
            total_document_length: 0,
            document_count: document_count,
        };
        for (term, freqs) in matrix.rows() {
            let postings = index.postings_lists.entry(term.clone()).or_insert_with(Vec::new);
            for (doc, &freq) in freqs.iter().enumerate() {
                if freq > 0 {
                    postings.push(Posting::new(doc as DocId, freq));
                    index.document_length[doc] = index.document_length[doc].checked_add(freq)
                        .ok_or(Error::FrequencyOverflow { doc: doc as DocId })?;
                    index.total_document_length += freq as u64;
                }
            }
            if postings.is_empty() {
                log::warn!("term '{}' does not occur in any document", term);
            }
        }
        log::debug!("indexed {} terms over {} documents", index.postings_lists.len(), document_count);
        Ok(index)
    }

    /// All indexed terms, sorted.
    pub fn terms(&self) -> Vec<&str> {
        let mut terms: Vec<&str> = self.postings_lists.keys().map(|t| t.as_str()).collect();
        terms.sort_unstable();
        terms
    }

    /// Postings of `term`, empty when the term is unknown.
    pub fn postings(&self, term: &str) -> &[Posting] {
        self.postings_lists.get(term)
            .map(|postings| postings.as_slice())
            .unwrap_or(&[])
    }

    // get: the number of documents in the collection containing the term
    pub fn get_document_frequency(&self, term: &str) -> usize {
        self.postings(term).len()
    }

    // get: document length, None for an id outside the collection
    pub fn get_document_length(&self, doc: DocId) -> Option<Frequency> {
        self.document_length.get(doc as usize).copied()
    }

    // get: total number of documents (N)
    pub fn get_document_count(&self) -> usize {
        self.document_count
    }

    pub fn stats(&self) -> IndexStats {
        let mut term_freq: Vec<(String, u64)> = self.postings_lists.iter()
            .map(|(term, postings)| {
                let occurrences = postings.iter()
                    .fold(0u64, |sum, posting| sum + posting.get_term_frequency() as u64);
                (term.clone(), occurrences)
            })
            .collect();
        term_freq.sort_by(|a, b| Reverse(a.1).cmp(&Reverse(b.1)).then_with(|| a.0.cmp(&b.0)));
        IndexStats {
            document_count: self.document_count,
            term_count: self.postings_lists.len(),
            total_document_length: self.total_document_length,
            average_document_length: self.total_document_length as f64 / self.document_count as f64,
            term_freq: term_freq,
        }
    }
}

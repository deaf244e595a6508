use std::collections::HashMap;
use crate::ircore::common::{DocId, Score};
use crate::ircore::index::{InvertedIndex, Posting};
use crate::ircore::query::Query;
use crate::ircore::utils::sparse_vector::{SparseVector, SparseVectorOp};

// TF = ftd / ld
// IDF = log10(N / Nt), 0 when Nt is 0
//   ftd: frequency of term t in document d
//   ld: length of document d, in tokens
//   N: total count of documents
//   Nt: number of documents containing term t
pub trait TfIdf {
    fn idf(&self, term: &str) -> Score;
    fn tf(&self, posting: &Posting) -> Score;
    fn tf_idf(&self, term: &str, posting: &Posting) -> Score;
    fn document_norms(&self) -> DocumentNorms;
    fn query_tfidf_vector<'q>(&self, query: &'q Query) -> SparseVector<&'q str>;
}

/// Euclidean length of every document's TF-IDF vector, doc id is the vector index.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentNorms {
    norms: Vec<Score>,
}

impl DocumentNorms {
    pub fn get(&self, doc: DocId) -> Option<Score> {
        self.norms.get(doc as usize).copied()
    }

    pub fn len(&self) -> usize {
        self.norms.len()
    }
}

impl TfIdf for InvertedIndex {
    fn idf(&self, term: &str) -> Score {
        let document_frequency = self.get_document_frequency(term);
        if document_frequency == 0 {
            return 0.0;
        }
        (self.get_document_count() as Score / document_frequency as Score).log10()
    }

    fn tf(&self, posting: &Posting) -> Score {
        match self.get_document_length(posting.get_doc_id()) {
            Some(length) if length > 0 => posting.get_term_frequency() as Score / length as Score,
            _ => 0.0,
        }
    }

    fn tf_idf(&self, term: &str, posting: &Posting) -> Score {
        self.tf(posting) * self.idf(term)
    }

    fn document_norms(&self) -> DocumentNorms {
        let mut sums = vec![0.0; self.get_document_count()];
        for term in self.terms() {
            let idf = self.idf(term);
            for posting in self.postings(term) {
                let tfidf = self.tf(posting) * idf;
                sums[posting.get_doc_id() as usize] += tfidf * tfidf;
            }
        }
        let norms: Vec<Score> = sums.into_iter().map(Score::sqrt).collect();
        for (doc, norm) in norms.iter().enumerate() {
            log::debug!("D{} norm {:.6}", doc + 1, norm);
        }
        DocumentNorms { norms }
    }

    // one dimension per distinct query term, weight count / query length * idf
    fn query_tfidf_vector<'q>(&self, query: &'q Query) -> SparseVector<&'q str> {
        let query_length = query.len() as Score;
        let mut query_tfidf: SparseVector<&'q str> = HashMap::new();
        for (term, count) in query.term_counts() {
            query_tfidf.vec_add(term, count as Score / query_length * self.idf(term));
        }
        query_tfidf
    }
}

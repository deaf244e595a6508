use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use crate::ircore::common::DocId;
use crate::ircore::index::{InvertedIndex, Posting};
use crate::ircore::query::Query;
use crate::ircore::utils::sparse_vector::{SparseVector, SparseVectorOp};
use super::tfidf::{TfIdf, DocumentNorms};
use super::ScoreMap;

/// Document-at-a-time variant of the cosine scorer.
///
/// Keeps one cursor per distinct query term and merges the posting lists in
/// document id order, so each candidate document is scored completely before
/// the next one is visited. Produces the same scores as `score_tt`.
pub(crate) fn score_dt(index: &InvertedIndex, norms: &DocumentNorms, query: &Query) -> ScoreMap {
    let mut scores: ScoreMap = HashMap::new();
    let query_tfidf = index.query_tfidf_vector(query);
    let query_norm = query_tfidf.vec_len();
    if norms.len() != index.get_document_count() {
        log::error!("{} document norms for {} documents", norms.len(), index.get_document_count());
    }

    let lists: Vec<(&str, &[Posting])> = query_tfidf.keys()
        .map(|term| (*term, index.postings(term)))
        .filter(|(_, postings)| !postings.is_empty())
        .collect();
    let mut positions = vec![0usize; lists.len()];
    // (current doc id, cursor), smallest doc id on top
    let mut heap: BinaryHeap<Reverse<(DocId, usize)>> = lists.iter()
        .enumerate()
        .map(|(cursor, (_, postings))| Reverse((postings[0].get_doc_id(), cursor)))
        .collect();

    while let Some(Reverse((doc, _))) = heap.peek().copied() {
        let mut doc_tfidf: SparseVector<&str> = HashMap::new();
        while let Some(&Reverse((next_doc, cursor))) = heap.peek() {
            if next_doc != doc {
                break;
            }
            heap.pop();
            let (term, postings) = lists[cursor];
            doc_tfidf.vec_add(term, index.tf_idf(term, &postings[positions[cursor]]));
            positions[cursor] += 1;
            if let Some(next) = postings.get(positions[cursor]) {
                heap.push(Reverse((next.get_doc_id(), cursor)));
            }
        }
        let dot = query_tfidf.vec_dot(&doc_tfidf);
        let score = match norms.get(doc) {
            _ if dot == 0.0 => 0.0,
            Some(doc_norm) if doc_norm > 0.0 => dot / (query_norm * doc_norm),
            _ => {
                log::error!("D{} has no document norm, scored 0", doc + 1);
                0.0
            }
        };
        scores.insert(doc, score);
    }
    scores
}

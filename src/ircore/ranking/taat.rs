use std::collections::HashMap;
use crate::ircore::common::Score;
use crate::ircore::index::InvertedIndex;
use crate::ircore::query::Query;
use crate::ircore::utils::sparse_vector::SparseVectorOp;
use super::tfidf::{TfIdf, DocumentNorms};
use super::ScoreMap;

// Term-at-a-time cosine scoring:
// for each query term occurrence t, for each posting (d, ftd) of t
//   score[d] += (1/n * idf(t)) * (ftd/ld * idf(t)) / (|q| * |d|)
//   n: number of tokens in the query
//   |q|: query norm over distinct terms
//   |d|: precomputed document norm
pub(crate) fn score_tt(index: &InvertedIndex, norms: &DocumentNorms, query: &Query) -> ScoreMap {
    let mut scores: ScoreMap = HashMap::new();
    let query_length = query.len() as Score;
    let query_norm = index.query_tfidf_vector(query).vec_len();
    log::debug!("query of {} terms, norm {:.6}", query.len(), query_norm);
    if norms.len() != index.get_document_count() {
        log::error!("{} document norms for {} documents", norms.len(), index.get_document_count());
    }

    for term in query.get_terms() {
        let postings = index.postings(term);
        if postings.is_empty() {
            log::warn!("term '{}' is not in the index", term);
            continue;
        }
        let idf = index.idf(term);
        let tfidf_tq = idf / query_length;
        for posting in postings {
            let doc = posting.get_doc_id();
            let tfidf_td = index.tf(posting) * idf;
            let weight = tfidf_tq * tfidf_td;
            let score = scores.entry(doc).or_insert(0.0);
            // idf 0 contributes nothing, and is the only way a norm can be 0
            if weight != 0.0 {
                match norms.get(doc) {
                    Some(doc_norm) if doc_norm > 0.0 => *score += weight / (query_norm * doc_norm),
                    _ => log::error!("D{} has no document norm, contribution skipped", doc + 1),
                }
            }
        }
    }
    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ircore::common::DocId;
    use crate::ircore::matrix::TermDocMatrix;

    const EPSILON: Score = 1e-9;

    fn setup() -> (InvertedIndex, DocumentNorms) {
        let idx = InvertedIndex::build_from(TermDocMatrix::sample()).unwrap();
        let norms = idx.document_norms();
        (idx, norms)
    }

    fn assert_same_scores(a: &ScoreMap, b: &ScoreMap) {
        assert_eq!(a.len(), b.len());
        for (doc, score) in a {
            assert!((score - b[doc]).abs() <= EPSILON, "D{} {} != {}", doc + 1, score, b[doc]);
        }
    }

    #[test]
    fn test_score_tt() {
        let (idx, norms) = setup();
        let query = Query::new(["beijing", "duck", "recipe"]).unwrap();
        let scores = score_tt(&idx, &norms, &query);
        assert_eq!(scores.len(), 5);
        // DocumentID 1     2     3     4     5
        // Similarity 0.208 0.639 0.295 0.232 0.760
        let expected: [(DocId, Score); 5] = [(0, 0.208053), (1, 0.638922), (2, 0.294880), (3, 0.231714), (4, 0.760314)];
        for (doc, score) in expected {
            assert!((scores[&doc] - score).abs() <= 5e-6);
        }
    }

    #[test]
    fn test_score_tt_is_idempotent() {
        let (idx, norms) = setup();
        let query = Query::new(["duck", "duck", "recipe"]).unwrap();
        let first = score_tt(&idx, &norms, &query);
        let second = score_tt(&idx, &norms, &query);
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_term_does_not_change_scores() {
        let (idx, norms) = setup();
        let query = Query::new(["beijing", "duck", "recipe"]).unwrap();
        let with_unknown = Query::new(["beijing", "pizza", "duck", "recipe"]).unwrap();
        assert_same_scores(&score_tt(&idx, &norms, &query), &score_tt(&idx, &norms, &with_unknown));
        let only_unknown = Query::new(["pizza"]).unwrap();
        assert!(score_tt(&idx, &norms, &only_unknown).is_empty());
    }

    #[test]
    fn test_term_order_invariance() {
        let (idx, norms) = setup();
        let query = Query::new(["duck", "roast", "duck", "recipe"]).unwrap();
        let reordered = Query::new(["recipe", "duck", "duck", "roast"]).unwrap();
        assert_same_scores(&score_tt(&idx, &norms, &query), &score_tt(&idx, &norms, &reordered));
    }

    #[test]
    fn test_repeated_terms() {
        let (idx, norms) = setup();
        let query = Query::new(["duck", "duck", "recipe"]).unwrap();
        let scores = score_tt(&idx, &norms, &query);
        assert_eq!(scores.len(), 5);
        assert!((scores[&2] - 0.604872).abs() <= 5e-6);
        assert!((scores[&1] - 0.069485).abs() <= 5e-6);
    }

    #[test]
    fn test_single_term_is_cosine_of_its_weight() {
        let (idx, norms) = setup();
        let query = Query::new(["roast"]).unwrap();
        let scores = score_tt(&idx, &norms, &query);
        assert_eq!(scores.len(), 2);
        for posting in idx.postings("roast") {
            let doc = posting.get_doc_id();
            let expected = idx.tf_idf("roast", posting) / norms.get(doc).unwrap();
            assert!((scores[&doc] - expected).abs() <= EPSILON);
        }
    }

    #[test]
    fn test_zero_idf_terms_never_produce_nan() {
        let mut matrix = TermDocMatrix::new(2);
        matrix.insert("common", vec![1, 1]);
        matrix.insert("duck", vec![0, 3]);
        let idx = InvertedIndex::build_from(&matrix).unwrap();
        let norms = idx.document_norms();
        let query = Query::new(["common"]).unwrap();
        let scores = score_tt(&idx, &norms, &query);
        assert_eq!(scores.len(), 2);
        assert!(scores.values().all(|score| *score == 0.0));
        let query = Query::new(["common", "duck"]).unwrap();
        let scores = score_tt(&idx, &norms, &query);
        assert_eq!(scores[&0], 0.0);
        assert!((scores[&1] - 1.0).abs() <= EPSILON);
    }

    #[test]
    fn test_norms_of_another_index_never_produce_inf() {
        let (idx, _) = setup();
        let mut matrix = TermDocMatrix::new(2);
        matrix.insert("duck", vec![1, 0]);
        matrix.insert("roast", vec![0, 1]);
        let small_norms = InvertedIndex::build_from(&matrix).unwrap().document_norms();
        let query = Query::new(["beijing", "duck", "recipe"]).unwrap();
        let scores = score_tt(&idx, &small_norms, &query);
        assert_eq!(scores.len(), 5);
        assert!(scores.values().all(|score| score.is_finite()));
        assert_eq!(scores[&4], 0.0);
    }
}

use std::path::Path;
use crate::ircore::common::{RankingAlgorithm, Score};
use crate::ircore::error::Result;
use crate::ircore::index::{InvertedIndex, IndexStats, Posting};
use crate::ircore::matrix::TermDocMatrix;
use crate::ircore::query::Query;
use crate::ircore::ranking::{self, DocScore, ScoreMap, Scorer};
use crate::ircore::ranking::tfidf::{TfIdf, DocumentNorms};

/// Inverted index plus the document norms precomputed from it.
#[derive(Debug)]
pub struct Engine {
    index: InvertedIndex,
    norms: DocumentNorms,
}

impl Engine {
    pub fn build_from(matrix: &TermDocMatrix) -> Result<Self> {
        let index = InvertedIndex::build_from(matrix)?;
        let norms = index.document_norms();
        log::info!("index of {} documents built", index.get_document_count());
        Ok(Engine { index, norms })
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        Self::build_from(&TermDocMatrix::load_from(path)?)
    }

    pub fn doc_count(&self) -> usize {
        self.index.get_document_count()
    }

    pub fn get_index(&self) -> &InvertedIndex {
        &self.index
    }

    pub fn get_document_norms(&self) -> &DocumentNorms {
        &self.norms
    }

    pub fn terms(&self) -> Vec<&str> {
        self.index.terms()
    }

    pub fn postings(&self, term: &str) -> &[Posting] {
        self.index.postings(term)
    }

    pub fn idf(&self, term: &str) -> Score {
        self.index.idf(term)
    }

    pub fn score_tt(&self, query: &Query) -> ScoreMap {
        ranking::taat::score_tt(&self.index, &self.norms, query)
    }

    pub fn stats(&self) -> IndexStats {
        self.index.stats()
    }

    /// Scores `terms` and returns the documents ranked, most relevant first.
    pub fn exec_query<S: AsRef<str>>(&self, terms: &[S], ranking: RankingAlgorithm) -> Result<Vec<DocScore>> {
        let query = Query::new(terms.iter().map(|term| term.as_ref()))?;
        let scores = self.score(&query, ranking);
        Ok(ranking::ranked(&scores))
    }

    // one line per document with nonzero score, at most `top` lines
    pub fn display(ranked: &[DocScore], top: Option<usize>) -> Vec<String> {
        ranked.iter()
            .filter(|doc| doc.score != 0.0)
            .take(top.unwrap_or(usize::MAX))
            .map(|doc| doc.to_string())
            .collect()
    }
}

impl Scorer for Engine {
    fn score(&self, query: &Query, ranking: RankingAlgorithm) -> ScoreMap {
        let scorer = ranking::scorer_for(ranking);
        scorer(&self.index, &self.norms, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ircore::error::Error;

    fn sample_engine() -> Engine {
        Engine::build_from(TermDocMatrix::sample()).unwrap()
    }

    #[test]
    fn test_worked_example() {
        let engine = sample_engine();
        let docs = engine.exec_query(&["beijing", "duck", "recipe"], RankingAlgorithm::Default).unwrap();
        assert_eq!(Engine::display(&docs, None), vec![
            "D5: 0.76", "D2: 0.639", "D3: 0.295", "D4: 0.232", "D1: 0.208"]);
    }

    #[test]
    fn test_document_at_a_time_ranking() {
        let engine = sample_engine();
        let docs = engine.exec_query(&["beijing", "duck", "recipe"], RankingAlgorithm::DocumentAtATime).unwrap();
        assert_eq!(Engine::display(&docs, None), vec![
            "D5: 0.76", "D2: 0.639", "D3: 0.295", "D4: 0.232", "D1: 0.208"]);
    }

    #[test]
    fn test_display_top() {
        let engine = sample_engine();
        let docs = engine.exec_query(&["beijing", "duck", "recipe"], RankingAlgorithm::TermAtATime).unwrap();
        assert_eq!(Engine::display(&docs, Some(2)), vec!["D5: 0.76", "D2: 0.639"]);
        assert!(Engine::display(&docs, Some(0)).is_empty());
    }

    #[test]
    fn test_display_skips_zero_scores() {
        let mut matrix = TermDocMatrix::new(3);
        matrix.insert("common", vec![1, 1, 1]);
        matrix.insert("duck", vec![0, 2, 0]);
        let engine = Engine::build_from(&matrix).unwrap();
        let docs = engine.exec_query(&["common", "duck"], RankingAlgorithm::Default).unwrap();
        assert_eq!(docs.len(), 3);
        assert_eq!(Engine::display(&docs, None), vec!["D2: 1"]);
    }

    #[test]
    fn test_load_from_file() {
        let engine = Engine::load_from(Path::new("./sample_matrix/beijing.yaml")).unwrap();
        assert_eq!(engine.doc_count(), 5);
        assert_eq!(engine.terms().len(), 6);
        assert_eq!(engine.postings("beijing").len(), 2);
        assert!((engine.idf("beijing") - 0.397940).abs() <= 5e-6);
        let docs = engine.exec_query(&["roast"], RankingAlgorithm::Default).unwrap();
        assert_eq!(Engine::display(&docs, None), vec!["D2: 0.669", "D3: 0.555"]);
    }

    #[test]
    fn test_empty_query() {
        let engine = sample_engine();
        let terms: [&str; 0] = [];
        assert!(matches!(engine.exec_query(&terms, RankingAlgorithm::Default), Err(Error::EmptyQuery)));
    }

    #[test]
    fn test_unknown_terms_only() {
        let engine = sample_engine();
        let docs = engine.exec_query(&["pizza", "pasta"], RankingAlgorithm::Default).unwrap();
        assert!(docs.is_empty());
    }

    #[test]
    fn test_score_tt_matches_scorer() {
        let engine = sample_engine();
        let query = Query::new(["duck", "rabbit"]).unwrap();
        assert_eq!(engine.score_tt(&query), engine.score(&query, RankingAlgorithm::TermAtATime));
        assert_eq!(engine.get_document_norms().len(), engine.doc_count());
        assert_eq!(engine.get_index().get_document_count(), 5);
        assert_eq!(engine.stats().term_count, 6);
    }

    #[test]
    fn test_document_lengths_and_norms() {
        let engine = sample_engine();
        let index = engine.get_index();
        let norms = engine.get_document_norms();
        assert_eq!(index.get_document_length(3), Some(6));
        assert!((norms.get(4).unwrap() - 0.153159).abs() <= 5e-6);
        assert_eq!(index.get_document_length(5), None);
        assert_eq!(norms.get(5), None);
    }
}

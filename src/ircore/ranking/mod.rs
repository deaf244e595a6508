pub mod tfidf;
pub mod taat;
pub mod daat;

use std::collections::HashMap;
use std::fmt;
use crate::ircore::common::{DocId, Score, RankingAlgorithm};
use crate::ircore::index::InvertedIndex;
use crate::ircore::query::Query;
use tfidf::DocumentNorms;

pub type ScoreMap = HashMap<DocId, Score>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DocScore {
    pub docid: DocId,
    pub score: Score,
}

// rendered 1-based, score rounded to 3 decimals
impl fmt::Display for DocScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "D{}: {}", self.docid + 1, (self.score * 1000.0).round() / 1000.0)
    }
}

pub trait Scorer {
    fn score(&self, query: &Query, ranking: RankingAlgorithm) -> ScoreMap;
}

type ScoreFn = fn(&InvertedIndex, &DocumentNorms, &Query) -> ScoreMap;

pub(crate) fn scorer_for(ranking: RankingAlgorithm) -> ScoreFn {
    match ranking {
        RankingAlgorithm::Default => taat::score_tt,
        RankingAlgorithm::TermAtATime => taat::score_tt,
        RankingAlgorithm::DocumentAtATime => daat::score_dt,
    }
}

/// Sorts by descending score, equal scores by ascending document id.
pub fn ranked(scores: &ScoreMap) -> Vec<DocScore> {
    let mut ranked: Vec<DocScore> = scores.iter()
        .map(|(&docid, &score)| DocScore { docid, score })
        .collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.docid.cmp(&b.docid)));
    ranked
}

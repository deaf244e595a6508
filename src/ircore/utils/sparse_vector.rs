use crate::ircore::common::Score;
use std::collections::HashMap;
use std::hash::Hash;

pub type SparseVector<K> = HashMap<K, Score>;

pub trait SparseVectorOp<K> {
    fn vec_len(&self) -> Score;
    fn vec_add(&mut self, id: K, value: Score) -> Score;
    fn vec_get(&self, id: &K) -> Score;
    fn vec_dot(&self, other: &Self) -> Score;
}

impl<K: Eq + Hash> SparseVectorOp<K> for SparseVector<K> {
    fn vec_len(&self) -> Score {
        let mut length = 0.0;
        for v in self.values() {
            length += v * v;
        }
        length.sqrt()
    }
    // accumulate into a dimension, returns the new value
    fn vec_add(&mut self, id: K, value: Score) -> Score {
        let entry = self.entry(id).or_insert(0.0);
        *entry += value;
        *entry
    }
    fn vec_get(&self, id: &K) -> Score {
        match self.get(id) {
            Some(value) => *value,
            None => Score::default(),
        }
    }
    fn vec_dot(&self, other: &Self) -> Score {
        let (sv1, sv2) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        let mut result = 0.0;
        for (id, sv1_value) in sv1.iter() {
            if let Some(sv2_value) = sv2.get(id) {
                result += sv1_value * sv2_value;
            }
        }
        result
    }
}

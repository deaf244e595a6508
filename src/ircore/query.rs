use std::collections::BTreeMap;
use crate::ircore::error::{Error, Result};

/// Ordered query terms, repetitions kept.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    terms: Vec<String>,
}

impl Query {
    pub fn new<I, S>(terms: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let terms: Vec<String> = terms.into_iter().map(Into::into).collect();
        if terms.is_empty() {
            return Err(Error::EmptyQuery);
        }
        Ok(Query { terms })
    }

    pub fn get_terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    // distinct terms with the number of times each occurs in the query
    pub fn term_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for term in &self.terms {
            counts.entry(term.as_str())
                .and_modify(|count| *count += 1)
                .or_insert(1);
        }
        counts
    }
}

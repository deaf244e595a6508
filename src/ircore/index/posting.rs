use crate::ircore::common::{DocId, Frequency};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Posting {
    doc_id: DocId,
    term_frequency: Frequency,
}

impl Posting {
    pub fn new(doc_id: DocId, term_frequency: Frequency) -> Self {
        Posting {
            doc_id: doc_id,
            term_frequency: term_frequency,
        }
    }
    pub fn get_doc_id(&self) -> DocId {
        self.doc_id
    }
    pub fn get_term_frequency(&self) -> Frequency {
        self.term_frequency
    }
}

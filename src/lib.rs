//! Term-at-a-time TF-IDF vector-space retrieval over a small in-memory
//! term-document collection.
pub mod ircore;

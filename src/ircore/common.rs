// zero-based, D1 is document 0
pub type DocId = u32;
pub type Frequency = u32;
pub type Score = f64;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RankingAlgorithm {
    Default,
    TermAtATime,
    DocumentAtATime,
}

// supported matrix file extensions
pub const YAML_EXTENSIONS: [&str; 2] = ["yaml", "yml"];
pub const JSON_EXTENSIONS: [&str; 1] = ["json"];

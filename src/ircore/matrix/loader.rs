use std::fs;
use std::path::Path;
use super::TermDocMatrix;
use crate::ircore::common::{YAML_EXTENSIONS, JSON_EXTENSIONS};
use crate::ircore::error::{Error, Result};

impl TermDocMatrix {
    pub fn from_yaml_str(matrix_cfg: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(matrix_cfg)?)
    }

    pub fn from_json_str(matrix_cfg: &str) -> Result<Self> {
        Ok(serde_json::from_str(matrix_cfg)?)
    }

    /// Loads a matrix file, format chosen by extension, and checks its shape.
    pub fn load_from(path: &Path) -> Result<Self> {
        let extension = path.extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        let parse: fn(&str) -> Result<Self> = if YAML_EXTENSIONS.contains(&extension.as_str()) {
            Self::from_yaml_str
        } else if JSON_EXTENSIONS.contains(&extension.as_str()) {
            Self::from_json_str
        } else {
            return Err(Error::UnsupportedFormat(path.display().to_string()));
        };
        let matrix = parse(&fs::read_to_string(path)?)?;
        let doc_count = matrix.validate()?;
        log::info!("{}: {} terms, {} documents", path.display(), matrix.get_term_count(), doc_count);
        Ok(matrix)
    }
}

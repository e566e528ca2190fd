pub mod card;
pub mod community;
pub mod summarize;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Read and parse a JSON query record from disk.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Collection;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_json_valid() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "id": "c-1", "localId": 1, "name": "Maths" }}"#).unwrap();

        let collection: Collection = read_json(file.path()).unwrap();
        assert_eq!(collection.name, "Maths");
    }

    #[test]
    fn test_read_json_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_json::<Collection>(&dir.path().join("nope.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_read_json_invalid() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = read_json::<Collection>(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse JSON"));
    }
}

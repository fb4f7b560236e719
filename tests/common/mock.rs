//! Mock implementations for integration tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use graph_routes::domain::ports::DatasetReader;

/// Mock DatasetReader that serves content from an in-memory map.
pub struct MockDatasetReader {
    files: HashMap<PathBuf, String>,
}

impl MockDatasetReader {
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
        }
    }

    pub fn with_file(mut self, path: impl AsRef<Path>, content: impl Into<String>) -> Self {
        self.files
            .insert(path.as_ref().to_path_buf(), content.into());
        self
    }
}

impl Default for MockDatasetReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetReader for MockDatasetReader {
    fn read(&self, path: &Path) -> Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow!("File not found: {}", path.display()))
    }
}

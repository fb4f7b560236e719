use anyhow::Result;
use std::path::Path;

/// Dataset reader port (implemented by Infrastructure)
pub trait DatasetReader: Send + Sync {
    /// Read a whole dataset file as UTF-8 text.
    fn read(&self, path: &Path) -> Result<String>;
}

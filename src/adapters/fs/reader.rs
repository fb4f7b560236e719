use crate::domain::ports::DatasetReader;
use anyhow::{Context, Result};
use memmap2::Mmap;
use std::fs::File;
use std::path::Path;

/// File system dataset reader implementation
///
/// Datasets can be large (the full actor/movie list runs to millions of
/// lines), so non-empty files are memory mapped rather than buffered.
#[derive(Debug, Default)]
pub struct FileDatasetReader;

impl FileDatasetReader {
    pub fn new() -> Self {
        Self
    }
}

impl DatasetReader for FileDatasetReader {
    fn read(&self, path: &Path) -> Result<String> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open dataset file: {}", path.display()))?;
        let len = file
            .metadata()
            .with_context(|| format!("Failed to stat dataset file: {}", path.display()))?
            .len();
        // Mapping a zero-length file fails on some platforms
        if len == 0 {
            return Ok(String::new());
        }
        let mmap = unsafe {
            Mmap::map(&file)
                .with_context(|| format!("Failed to mmap dataset file: {}", path.display()))?
        };
        Ok(String::from_utf8_lossy(&mmap).into_owned())
    }
}

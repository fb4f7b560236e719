//! Line-oriented dataset parsing.
//!
//! Malformed lines are skipped and counted, never fatal. The only hard
//! failure is not being able to read a file at all.

pub mod cast;
pub mod pairs;
pub mod road;

use serde::{Deserialize, Serialize};

/// Line accounting for one dataset file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    /// Lines read, header included
    pub lines: usize,
    /// Records added to the graph
    pub accepted: usize,
    /// Lines with the wrong number of fields or unparsable values
    pub skipped: usize,
    /// Well-formed records the graph refused (duplicates, unknown names)
    pub rejected: usize,
}

/// Split a line on a single-character delimiter.
///
/// Empty fields between consecutive delimiters are kept; one trailing
/// delimiter does not produce an empty last field.
pub(crate) fn split_fields(line: &str, delimiter: char) -> Vec<&str> {
    line.strip_suffix(delimiter)
        .unwrap_or(line)
        .split(delimiter)
        .collect()
}

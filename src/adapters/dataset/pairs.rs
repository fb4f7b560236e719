//! Batch query files: a header line, then `From<TAB>To` per line.

use super::split_fields;

/// Parse every well-formed pair after the header, in file order.
pub fn parse_pairs(text: &str) -> Vec<(String, String)> {
    text.lines()
        .skip(1)
        .filter_map(|line| match split_fields(line, '\t').as_slice() {
            &[from, to] => Some((from.to_string(), to.to_string())),
            _ => None,
        })
        .collect()
}

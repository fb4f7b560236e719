//! Query outcomes shared by the actor and map searches.
//!
//! An invalid query and an unreachable destination are both normal results,
//! so neither is reported through `Result`.

use std::fmt;

/// Why a query was not attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidQuery {
    /// One of the endpoint names was the empty string.
    EmptyName,
    /// The named endpoint is not part of the graph.
    UnknownName(String),
}

impl fmt::Display for InvalidQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidQuery::EmptyName => write!(f, "empty name"),
            InvalidQuery::UnknownName(name) => write!(f, "unknown name: {}", name),
        }
    }
}

/// Result of a point-to-point search.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome<T> {
    Found(T),
    /// Both endpoints exist but the frontier was exhausted.
    NoPath,
    /// No traversal was attempted.
    Invalid(InvalidQuery),
}

impl<T> QueryOutcome<T> {
    pub fn found(self) -> Option<T> {
        match self {
            QueryOutcome::Found(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, QueryOutcome::Found(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> QueryOutcome<U> {
        match self {
            QueryOutcome::Found(value) => QueryOutcome::Found(f(value)),
            QueryOutcome::NoPath => QueryOutcome::NoPath,
            QueryOutcome::Invalid(reason) => QueryOutcome::Invalid(reason),
        }
    }
}

/// Validate a pair of endpoint names against a lookup, empty names first.
pub(crate) fn resolve_endpoints<I>(
    from: &str,
    to: &str,
    lookup: impl Fn(&str) -> Option<I>,
) -> Result<(I, I), InvalidQuery> {
    if from.is_empty() || to.is_empty() {
        return Err(InvalidQuery::EmptyName);
    }
    let source = lookup(from).ok_or_else(|| InvalidQuery::UnknownName(from.to_string()))?;
    let target = lookup(to).ok_or_else(|| InvalidQuery::UnknownName(to.to_string()))?;
    Ok((source, target))
}

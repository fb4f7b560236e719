//! graph-routes library: actor collaboration paths and weighted map queries.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod domain;

//! Shared test utilities for integration tests.
//! Included by each test file with `mod common;`.
#![allow(dead_code)]

pub mod fixtures;
pub mod mock;

pub mod dataset;
pub mod fs;

pub mod batch;
pub mod dto;
pub mod engine;

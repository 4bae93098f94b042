//! Test helpers shared across crates in the outcome-wrapper workspace.
//!
//! This crate provides a sample error type, `rstest` fixtures and message
//! assertions.

pub mod errors;
pub mod fixtures;
pub mod text;

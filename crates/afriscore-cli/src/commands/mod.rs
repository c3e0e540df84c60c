//! CLI command implementations.

pub mod detect;
pub mod score;

//! Shared helpers.

pub mod date;
pub mod exec;
pub mod git;

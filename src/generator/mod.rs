//! Output generators.
//!
//! - **Feed**: RSS 2.0 / Atom 1.0 serialization of an assembled feed

pub mod feed;

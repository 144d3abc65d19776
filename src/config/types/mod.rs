//! Configuration utility types.
//!
//! | Module  | Purpose                             |
//! |---------|-------------------------------------|
//! | `error` | Configuration errors and diagnostics |
//! | `field` | Dotted setting paths for messages   |

mod error;
mod field;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError};
pub use field::FieldPath;

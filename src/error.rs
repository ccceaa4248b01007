//! Error types for glob compilation
//!
//! Only compiling a glob can fail. A path that does not match is reported as
//! `None` by the matcher, and every navigation operation is total.

use thiserror::Error;

/// Errors raised while compiling a route glob.
///
/// These are programmer errors: route tables are static, so a caller should
/// treat them as fatal for the route definition instead of ignoring the
/// route.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// A parameter name does not start with a letter or contains a
    /// character that is not alphanumeric.
    #[error("invalid parameter name ':{name}' in glob '{glob}': unexpected character '{offending}'")]
    BadParameterName {
        /// The glob being compiled
        glob: String,
        /// The declared parameter name, without the `:` and `?` markers
        name: String,
        /// The first character that made the name invalid
        offending: char,
    },

    /// A `:` (or `:?`) segment without any name.
    #[error("empty parameter name in glob '{glob}'")]
    EmptyParameterName {
        /// The glob being compiled
        glob: String,
    },
}

impl PatternError {
    /// The glob that failed to compile.
    pub fn glob(&self) -> &str {
        match self {
            PatternError::BadParameterName { glob, .. }
            | PatternError::EmptyParameterName { glob } => glob,
        }
    }
}

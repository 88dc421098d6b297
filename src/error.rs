// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Errors that can surface during plugin activation.
///
/// There is deliberately no recovery machinery here: every failure travels
/// up to [`crate::plugin::run`], which logs it once and stops. The plugin
/// ends up partially initialized rather than retrying.
#[derive(Debug, Clone)]
pub enum Error {
    /// A host query failed or returned a malformed response.
    Host(String),
    /// A bundled translation asset could not be parsed.
    Locale(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Host(e) => write!(f, "Host Error: {}", e),
            Error::Locale(e) => write!(f, "Locale Error: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

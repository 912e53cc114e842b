//! Errors from parsing or running scripts.

pub mod parse;
mod runtime;

pub use parse::{print_parse_error, LineError, LineErrorKind, ParseError};
pub use runtime::RuntimeError;

//! Errors from running compiled actions.

use crate::error::ParseError;

use thiserror::Error;

#[derive(Debug, Error)]
/// Error from advancing an action.
pub enum RuntimeError {
    /// A choice bubble finished without a choice being submitted to it.
    #[error("choice prompt finished without a selection being made")]
    NoSelection,
    /// The submitted choice does not correspond to a branch.
    #[error("selected choice {index} is out of range for {num_choices} choices")]
    InvalidSelection { index: usize, num_choices: usize },
    /// A script could not be parsed and was not scheduled.
    #[error("cannot run an invalid script: {0}")]
    InvalidScript(#[from] ParseError),
}

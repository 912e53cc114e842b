use crate::utils::MetaData;

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(Deserialize, Serialize))]
#[error("[{meta_data}] WARNING: {warning}")]
/// Log message with additional information.
pub struct LogMessage {
    /// Logged warning.
    pub warning: Warning,
    /// Information of where the message originated from.
    pub meta_data: MetaData,
}

impl LogMessage {
    pub(crate) fn new(warning: Warning, meta_data: &MetaData) -> Self {
        LogMessage {
            warning,
            meta_data: *meta_data,
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(Deserialize, Serialize))]
/// A detected non-fatal error.
pub enum Warning {
    /// A boolean parameter was stored into an actor which does not declare it.
    ///
    /// The assignment is kept and will be performed when the script runs.
    #[error("actor '{actor}' has no parameter '{parameter}': the value is stored anyway")]
    UnknownParameter { actor: String, parameter: String },
    /// The same label was used twice in one choice block.
    ///
    /// Content below the second label replaces the content of the first, which keeps
    /// its position among the branches.
    #[error("choice branch '{label}' appears more than once: only the last content is kept")]
    DuplicateBranch { label: String },
}

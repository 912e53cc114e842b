//! Utilities and derives used elsewhere in the library.

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(Deserialize, Serialize))]
/// Information about the origin of an item.
///
/// To be used to present errors and warnings from parsing, allowing access to where
/// in the script text they originated from.
pub struct MetaData {
    /// Which line in the original script the item originated from.
    ///
    /// Blank lines are counted, so the index always refers to the raw text.
    pub line_index: u32,
}

impl fmt::Display for MetaData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "line {}", self.line_index + 1)
    }
}

impl From<usize> for MetaData {
    fn from(line_index: usize) -> Self {
        MetaData {
            line_index: line_index as u32,
        }
    }
}

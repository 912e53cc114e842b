//! Errors from parsing script lines into statements.

use crate::{consts::CHOICE_END_MARKER, utils::MetaData};

use std::fmt::{self, Write};

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
#[error("could not parse script: found {} invalid line(s)", .errors.len())]
/// Error from reading a script.
///
/// Parsing does not stop at the first broken statement. Every error that was found
/// is collected here, in the order of the lines they were found in. A full print out
/// can be made through [`print_parse_error`][crate::error::print_parse_error].
pub struct ParseError {
    /// All errors found while parsing.
    pub errors: Vec<LineError>,
}

#[derive(Clone, Debug, Error, PartialEq)]
#[error("({meta_data}) {kind}: '{line}'")]
/// Error from parsing an individual line in a script.
pub struct LineError {
    /// Line that caused the error.
    pub line: String,
    /// Kind of error.
    pub kind: LineErrorKind,
    /// Information about the origin of the line that caused this error.
    pub meta_data: MetaData,
}

#[derive(Clone, Debug, Error, PartialEq)]
/// Variants of line errors.
pub enum LineErrorKind {
    /// Line could not be split into its expected fields.
    #[error("malformed line, expected `{expected}`")]
    MalformedLine { expected: &'static str },
    /// No actor with the name could be found.
    #[error("could not find actor '{name}'")]
    UnknownActor { name: String },
    /// Actor was found but has no animation with the name.
    #[error("actor '{actor}' has no animation '{animation}'")]
    UnknownAnimation { actor: String, animation: String },
    /// Variable to store into does not exist in the context.
    #[error("could not find variable '{name}'")]
    UnknownVariable { name: String },
    /// Stored value was not one of the boolean literals.
    #[error("only 'True' or 'False' can be stored, found '{value}'")]
    InvalidLiteral { value: String },
    /// Store target had more than a single `.` separator.
    #[error("could not read store target '{target}'")]
    InvalidTarget { target: String },
    /// A choice block was not closed before the script ended.
    #[error("choice block is missing its closing '{}' line", CHOICE_END_MARKER)]
    MissingTerminator,
    /// Indented content was found before the first branch label of a choice.
    #[error("choice block has content before its first branch")]
    MisplacedContent,
    /// A branch label had no content below it.
    #[error("choice branch '{label}' has no content")]
    EmptyBranch { label: String },
    /// A choice block had no branches at all.
    #[error("choice block has no branches")]
    NoBranches,
}

impl LineError {
    pub(crate) fn new(line: &str, kind: LineErrorKind, meta_data: MetaData) -> Self {
        LineError {
            line: line.to_string(),
            kind,
            meta_data,
        }
    }
}

impl ParseError {
    /// Iterate over the kinds of all collected errors.
    pub fn kinds(&self) -> impl Iterator<Item = &LineErrorKind> {
        self.errors.iter().map(|err| &err.kind)
    }
}

impl From<Vec<LineError>> for ParseError {
    fn from(errors: Vec<LineError>) -> Self {
        ParseError { errors }
    }
}

impl From<LineError> for ParseError {
    fn from(error: LineError) -> Self {
        ParseError {
            errors: vec![error],
        }
    }
}

/// Get a string containing all errors encountered while parsing a script.
///
/// Each error is printed on a separate line along with the number of the line it was found in.
/// Only the first error in each statement is guaranteed to be present: a choice block which
/// is missing its terminator is not split into branches, so errors inside of it are not found.
pub fn print_parse_error(error: &ParseError) -> Result<String, fmt::Error> {
    let mut buffer = String::new();

    for line_error in &error.errors {
        writeln!(&mut buffer, "{}", line_error)?;
    }

    Ok(buffer)
}

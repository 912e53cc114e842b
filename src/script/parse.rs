//! Parsing of script lines into statements.
//!
//! The parser walks a [`LineCursor`][crate::script::LineCursor] over the script, classifies
//! each line and hands the cursor to the statement parser of that kind. Most statements
//! are a single line. Choices consume their whole block, up to and including the `END`
//! line, and parse the content of every branch as a script of its own.
//!
//! A broken statement does not stop the parser. Errors from all statements are collected
//! so that a script can be validated in a single pass, but any error makes the whole parse
//! fail: a partially parsed script is never returned.

mod animation;
mod choice;
mod dialogue;
mod utils;
mod variable;

use crate::{
    error::{LineError, ParseError},
    script::{
        classify, split_script_lines, LineCursor, Script, ScriptLine, Statement, StatementKind,
    },
    stage::Stage,
    warnings::Logger,
};

use animation::parse_animation;
use choice::parse_choice;
use dialogue::parse_dialogue;
use variable::parse_store_variable;

#[derive(Clone, Debug)]
/// Successfully parsed script along with any warnings found while parsing it.
pub struct ParseOutput {
    pub script: Script,
    pub log: Logger,
}

/// Read a script from a string.
///
/// Every name in the script is resolved against the `stage`. All errors that are found
/// are returned together. Line terminators may be either `\n` or `\r\n`.
pub fn read_script_from_string(content: &str, stage: &Stage) -> Result<ParseOutput, ParseError> {
    let content = content.replace('\r', "");
    let lines = split_script_lines(&content);

    let mut log = Logger::default();

    match parse_lines(&lines, stage, &mut log) {
        Ok(script) => Ok(ParseOutput { script, log }),
        Err(errors) => {
            for error in &errors {
                log::warn!("{}", error);
            }

            Err(ParseError::from(errors))
        }
    }
}

/// Parse a set of lines into a script.
///
/// Used both for the full script and for the content of choice branches.
fn parse_lines(
    lines: &[ScriptLine],
    stage: &Stage,
    log: &mut Logger,
) -> Result<Script, Vec<LineError>> {
    let mut cursor = LineCursor::new(lines);

    let mut statements = Vec::new();
    let mut errors = Vec::new();

    while let Some(line) = cursor.next() {
        match parse_statement(line, &mut cursor, stage, log) {
            Ok(statement) => statements.push(statement),
            Err(mut statement_errors) => errors.append(&mut statement_errors),
        }
    }

    if errors.is_empty() {
        Ok(Script { statements })
    } else {
        Err(errors)
    }
}

/// Parse the statement which starts at `line`.
///
/// The cursor is positioned after `line`. Statements which span several lines consume
/// the rest of their lines from it.
fn parse_statement<'a>(
    line: ScriptLine<'a>,
    cursor: &mut LineCursor<'a>,
    stage: &Stage,
    log: &mut Logger,
) -> Result<Statement, Vec<LineError>> {
    match classify(line.text) {
        StatementKind::Dialogue => parse_dialogue(&line, stage)
            .map(Statement::Dialogue)
            .map_err(|err| vec![err]),
        StatementKind::Animation => parse_animation(&line, stage).map(Statement::Animation),
        StatementKind::StoreVariable => parse_store_variable(&line, stage, log)
            .map(Statement::StoreVariable)
            .map_err(|err| vec![err]),
        StatementKind::Choice => parse_choice(line, cursor, stage, log).map(Statement::Choice),
    }
}

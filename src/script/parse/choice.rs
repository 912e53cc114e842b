//! Parse choice blocks.
//!
//! A choice block is read in three steps:
//!
//! 1.  The header (`?Actor`) names the actor the choice is shown above.
//! 2.  Every following line up to the first line which is exactly `END` is collected
//!     into the body of the block. The `END` line is consumed as well.
//! 3.  The body is split into branches. Unindented lines are branch labels and lines
//!     starting with a single space belong to the most recent label. The space is
//!     removed and the content of each branch is parsed as a script of its own, which
//!     is what allows choices to be nested.
//!
//! An unknown actor in the header does not stop the block from being read. The cursor
//! always ends up after the `END` line, so statements after the block parse as usual.

use crate::{
    consts::{BRANCH_INDENT, CHOICE_END_MARKER, CHOICE_MARKER},
    error::{LineError, LineErrorKind},
    script::{
        parse::{parse_lines, utils::find_actor, utils::line_error},
        Branch, ChoiceBlock, LineCursor, ScriptLine,
    },
    stage::Stage,
    warnings::{Logger, Warning},
};

#[derive(Clone, Debug, PartialEq)]
/// Label and unparsed content of a single branch.
struct RawBranch<'a> {
    label: ScriptLine<'a>,
    content: Vec<ScriptLine<'a>>,
}

/// Parse a choice block which starts at `header`.
pub fn parse_choice<'a>(
    header: ScriptLine<'a>,
    cursor: &mut LineCursor<'a>,
    stage: &Stage,
    log: &mut Logger,
) -> Result<ChoiceBlock, Vec<LineError>> {
    let name = header
        .text
        .strip_prefix(CHOICE_MARKER)
        .unwrap_or(header.text);

    let mut errors = Vec::new();

    let actor = find_actor(name, &header, stage)
        .map_err(|err| errors.push(err))
        .ok();

    let body = match extract_choice_block(&header, cursor) {
        Ok(body) => body,
        Err(err) => {
            errors.push(err);
            return Err(errors);
        }
    };

    let raw_branches = match split_into_branches(&header, &body, log) {
        Ok(raw_branches) => raw_branches,
        Err(err) => {
            errors.push(err);
            return Err(errors);
        }
    };

    let mut branches = Vec::with_capacity(raw_branches.len());

    for RawBranch { label, content } in raw_branches {
        if content.is_empty() {
            errors.push(line_error(
                &label,
                LineErrorKind::EmptyBranch {
                    label: label.text.to_string(),
                },
            ));

            continue;
        }

        match parse_lines(&content, stage, log) {
            Ok(script) => branches.push(Branch {
                label: label.text.to_string(),
                script,
            }),
            Err(mut branch_errors) => errors.append(&mut branch_errors),
        }
    }

    match actor {
        Some(actor) if errors.is_empty() => Ok(ChoiceBlock {
            actor,
            branches,
            meta_data: header.meta_data,
        }),
        _ => Err(errors),
    }
}

/// Collect the lines of a choice block, consuming its terminating line.
fn extract_choice_block<'a>(
    header: &ScriptLine<'a>,
    cursor: &mut LineCursor<'a>,
) -> Result<Vec<ScriptLine<'a>>, LineError> {
    let mut body = Vec::new();

    for line in cursor {
        if line.text == CHOICE_END_MARKER {
            return Ok(body);
        }

        body.push(line);
    }

    Err(line_error(header, LineErrorKind::MissingTerminator))
}

/// Split the body of a choice block into branches, in the order their labels appear.
///
/// A label which appears a second time starts its branch over from empty, keeping its
/// original position. Indentation is removed from content lines and content which is
/// empty after that is dropped.
fn split_into_branches<'a>(
    header: &ScriptLine<'a>,
    body: &[ScriptLine<'a>],
    log: &mut Logger,
) -> Result<Vec<RawBranch<'a>>, LineError> {
    let mut branches: Vec<RawBranch> = Vec::new();
    let mut current: Option<usize> = None;

    for line in body {
        if let Some(content) = line.text.strip_prefix(BRANCH_INDENT) {
            let index = current.ok_or_else(|| line_error(line, LineErrorKind::MisplacedContent))?;

            if !content.is_empty() {
                branches[index]
                    .content
                    .push(ScriptLine::new(content, line.meta_data));
            }
        } else if let Some(index) = branches
            .iter()
            .position(|branch| branch.label.text == line.text)
        {
            log.add_warning(
                Warning::DuplicateBranch {
                    label: line.text.to_string(),
                },
                &line.meta_data,
            );

            branches[index].content.clear();
            current = Some(index);
        } else {
            branches.push(RawBranch {
                label: *line,
                content: Vec::new(),
            });

            current = Some(branches.len() - 1);
        }
    }

    if branches.is_empty() {
        Err(line_error(header, LineErrorKind::NoBranches))
    } else {
        Ok(branches)
    }
}

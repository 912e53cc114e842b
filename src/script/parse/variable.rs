use crate::{
    consts::{
        ASSIGNMENT_MARKER, FALSE_LITERAL, PARAMETER_SEPARATOR, TRUE_LITERAL, VALUE_CLOSE,
        VALUE_OPEN,
    },
    error::{LineError, LineErrorKind},
    script::{
        parse::utils::{find_actor, line_error, STORE_FORM},
        Assignment, ScriptLine, StoreTarget,
    },
    stage::Stage,
    warnings::{Logger, Warning},
};

/// Parse a line which stores a value: `[True] -> Target`.
///
/// The target is either the name of a context variable or `Actor.Parameter`. A missing
/// context variable is an error. A missing actor parameter is logged as a warning and the
/// assignment is kept, since actors are allowed to receive parameters they do not declare.
pub fn parse_store_variable(
    line: &ScriptLine,
    stage: &Stage,
    log: &mut Logger,
) -> Result<Assignment, LineError> {
    let (value, target) = line
        .text
        .split_once(ASSIGNMENT_MARKER)
        .ok_or_else(|| malformed(line))?;

    let value = parse_value(value, line)?;
    let target = parse_target(target, line, stage, log)?;

    Ok(Assignment { target, value })
}

fn malformed(line: &ScriptLine) -> LineError {
    line_error(
        line,
        LineErrorKind::MalformedLine {
            expected: STORE_FORM,
        },
    )
}

/// Parse the bracketed boolean literal.
fn parse_value(content: &str, line: &ScriptLine) -> Result<bool, LineError> {
    let literal = content
        .strip_prefix(VALUE_OPEN)
        .and_then(|content| content.strip_suffix(VALUE_CLOSE))
        .ok_or_else(|| malformed(line))?;

    match literal {
        TRUE_LITERAL => Ok(true),
        FALSE_LITERAL => Ok(false),
        other => Err(line_error(
            line,
            LineErrorKind::InvalidLiteral {
                value: other.to_string(),
            },
        )),
    }
}

/// Resolve the store target.
fn parse_target(
    target: &str,
    line: &ScriptLine,
    stage: &Stage,
    log: &mut Logger,
) -> Result<StoreTarget, LineError> {
    let segments = target.split(PARAMETER_SEPARATOR).collect::<Vec<_>>();

    match segments.as_slice() {
        [name] => stage
            .variables
            .find_variable(name)
            .map(|cell| StoreTarget::Variable {
                name: name.to_string(),
                cell,
            })
            .ok_or_else(|| {
                line_error(
                    line,
                    LineErrorKind::UnknownVariable {
                        name: name.to_string(),
                    },
                )
            }),
        [actor_name, parameter] => {
            let actor = find_actor(actor_name, line, stage)?;

            if !actor.handle.has_bool_parameter(parameter) {
                log.add_warning(
                    Warning::UnknownParameter {
                        actor: actor_name.to_string(),
                        parameter: parameter.to_string(),
                    },
                    &line.meta_data,
                );
            }

            Ok(StoreTarget::Parameter {
                actor,
                parameter: parameter.to_string(),
            })
        }
        _ => Err(line_error(
            line,
            LineErrorKind::InvalidTarget {
                target: target.to_string(),
            },
        )),
    }
}

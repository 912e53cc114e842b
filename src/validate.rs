//! Check scripts against a stage without running them.

use crate::{
    error::ParseError,
    script::{read_script_from_string, ParseOutput},
    stage::Stage,
    warnings::Logger,
};

/// Parse a script and report whether it can be run against the given stage.
///
/// Every actor, animation and variable in the script must exist. Returns the warnings
/// from parsing if the script is valid, otherwise all found errors.
///
/// Validation has no side effects: nothing is played, shown or stored.
pub fn validate_script(content: &str, stage: &Stage) -> Result<Logger, ParseError> {
    let ParseOutput { log, .. } = read_script_from_string(content, stage)?;

    Ok(log)
}

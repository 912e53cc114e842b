use crate::{
    error::{LineError, LineErrorKind},
    script::{
        parse::utils::{find_actor, line_error, split_actor_and_text, DIALOGUE_FORM},
        DialogueLine, ScriptLine,
    },
    stage::Stage,
};

/// Parse a line of dialogue: `Actor: text`.
///
/// The text is kept exactly as written, including any colons.
pub fn parse_dialogue(line: &ScriptLine, stage: &Stage) -> Result<DialogueLine, LineError> {
    let (name, text) = split_actor_and_text(line.text).ok_or_else(|| {
        line_error(
            line,
            LineErrorKind::MalformedLine {
                expected: DIALOGUE_FORM,
            },
        )
    })?;

    let actor = find_actor(name, line, stage)?;

    Ok(DialogueLine {
        actor,
        text: text.to_string(),
        meta_data: line.meta_data,
    })
}

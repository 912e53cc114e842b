use crate::{
    consts::{ANIMATION_MARKER, CUE_SEPARATOR},
    error::{LineError, LineErrorKind},
    script::{
        parse::utils::{find_actor, line_error, split_actor_and_text, CUE_FORM},
        AnimationCue, ScriptLine,
    },
    stage::Stage,
};

/// Parse a line of animations: `!Actor: Animation, Actor: Animation`.
///
/// Every actor and animation must exist for the line to parse. Errors from all pairs
/// are returned.
pub fn parse_animation(
    line: &ScriptLine,
    stage: &Stage,
) -> Result<Vec<AnimationCue>, Vec<LineError>> {
    let content = line
        .text
        .strip_prefix(ANIMATION_MARKER)
        .unwrap_or(line.text);

    let mut cues = Vec::new();
    let mut errors = Vec::new();

    for pair in content.split(CUE_SEPARATOR) {
        match parse_cue(pair, line, stage) {
            Ok(cue) => cues.push(cue),
            Err(err) => errors.push(err),
        }
    }

    if errors.is_empty() {
        Ok(cues)
    } else {
        Err(errors)
    }
}

/// Parse a single `Actor: Animation` pair.
fn parse_cue(pair: &str, line: &ScriptLine, stage: &Stage) -> Result<AnimationCue, LineError> {
    let (name, animation) = split_actor_and_text(pair).ok_or_else(|| {
        line_error(
            line,
            LineErrorKind::MalformedLine { expected: CUE_FORM },
        )
    })?;

    let actor = find_actor(name, line, stage)?;
    let animation = animation.trim();

    if !actor.handle.has_animation(animation) {
        return Err(line_error(
            line,
            LineErrorKind::UnknownAnimation {
                actor: name.to_string(),
                animation: animation.to_string(),
            },
        ));
    }

    Ok(AnimationCue {
        actor,
        animation: animation.to_string(),
    })
}

use crate::{
    consts::ACTOR_SEPARATOR,
    error::{LineError, LineErrorKind},
    script::ScriptLine,
    stage::{ActorRef, Stage},
};

pub const DIALOGUE_FORM: &str = "Actor: text";
pub const CUE_FORM: &str = "Actor: Animation";
pub const STORE_FORM: &str = "[True] -> Target";

/// Construct an error for the given line.
pub fn line_error(line: &ScriptLine, kind: LineErrorKind) -> LineError {
    LineError::new(line.text, kind, line.meta_data)
}

/// Split content at the first actor separator into the actor name and the remainder.
///
/// Any further separators are kept in the remainder.
pub fn split_actor_and_text(content: &str) -> Option<(&str, &str)> {
    content.split_once(ACTOR_SEPARATOR)
}

/// Look up an actor by name.
pub fn find_actor(name: &str, line: &ScriptLine, stage: &Stage) -> Result<ActorRef, LineError> {
    stage
        .actors
        .find_actor(name)
        .map(|handle| ActorRef::new(name, handle))
        .ok_or_else(|| {
            line_error(
                line,
                LineErrorKind::UnknownActor {
                    name: name.to_string(),
                },
            )
        })
}

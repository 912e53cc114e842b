//! Reading scripts into statements and compiling statements into actions.
//!
//! # Script format
//! Scripts are read line by line. Blank lines are ignored and carriage returns are removed
//! before the text is split into lines. The first character of a line decides what kind of
//! statement it is:
//!
//! ```text
//! Fox: Hello there!                   // dialogue, shown above `Fox`
//! !Fox: Wave, Owl: Hop                // animations, played at the same time
//! [True] -> MetFox                    // store into a context variable
//! [False] -> Fox.Sleeping             // store into an actor's boolean parameter
//! ?Fox                                // choice, asked above `Fox`
//! I like you
//!  Fox: I've heard that one before
//! I love you
//!  !Fox: Blush
//! END
//! ```
//!
//! Choice branches are the unindented lines of a choice block. The lines indented by one
//! space below a branch are its content, which is read as a script of its own after the
//! indentation has been removed. Branch content may contain further choices, which are
//! closed by their own (indented) `END` line.
//!
//! # Validation
//! Every actor, animation and variable is looked up while the script is parsed. A script
//! that parses can therefore not fail to find anything once it runs, unless the world
//! changed in between.

mod compile;
mod cursor;
mod kind;
mod parse;
mod statement;

pub use cursor::{split_script_lines, LineCursor, ScriptLine};
pub use kind::{classify, StatementKind};
pub use parse::{read_script_from_string, ParseOutput};
pub use statement::{
    AnimationCue, Assignment, Branch, ChoiceBlock, DialogueLine, Script, Statement, StoreTarget,
};

use crate::{
    action::BoxedAction,
    error::ParseError,
    settings::Settings,
    stage::{BubbleSpawner, Stage},
};

use std::rc::Rc;

/// Read a script and compile it into a single action.
///
/// Warnings from parsing are emitted through the `log` facade and otherwise dropped. Use
/// [`read_script_from_string`][crate::script::read_script_from_string] to inspect them.
///
/// An empty script compiles into an action which finishes on its first advance.
pub fn read_action_from_string(
    content: &str,
    stage: &Stage,
    bubbles: &Rc<dyn BubbleSpawner>,
    settings: &Settings,
) -> Result<BoxedAction, ParseError> {
    let ParseOutput { script, .. } = read_script_from_string(content, stage)?;

    Ok(script.into_action(bubbles, settings))
}

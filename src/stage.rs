//! Interfaces to the world that scripts act upon.
//!
//! A script names actors, their animations and parameters, and variables. None of these are
//! owned by the script: they are looked up through the traits in this module when the script
//! is parsed, and acted upon through the same handles when it runs.

mod actor;
mod bubble;
mod context;
mod transcript;

pub use actor::{Actor, ActorHandle, ActorRef, ActorResolver, Position};
pub use bubble::{BubbleSpawner, ChoiceSelection};
pub use context::{BoolCell, DialogueContext, VariableStore};
pub use transcript::{TranscriptBubbles, TranscriptEntry};

/// Everything the parser needs to resolve names in a script.
#[derive(Clone, Copy)]
pub struct Stage<'a> {
    /// Lookup of actors by name.
    pub actors: &'a dyn ActorResolver,
    /// Lookup of boolean variables by name.
    pub variables: &'a dyn VariableStore,
}

impl<'a> Stage<'a> {
    pub fn new(actors: &'a dyn ActorResolver, variables: &'a dyn VariableStore) -> Self {
        Stage { actors, variables }
    }
}

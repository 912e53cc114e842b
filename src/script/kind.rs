use crate::consts::{ANIMATION_MARKER, CHOICE_MARKER, STORE_VARIABLE_MARKER};

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde_support", derive(Deserialize, Serialize))]
/// The kinds of statements that a script line can hold.
pub enum StatementKind {
    /// `Actor: text`
    Dialogue,
    /// `!Actor: Animation, Actor: Animation`
    Animation,
    /// `?Actor`, followed by a choice block.
    Choice,
    /// `[True] -> Target`
    StoreVariable,
}

impl StatementKind {
    /// Marker which starts a line of this kind, if any.
    pub fn marker(&self) -> Option<char> {
        match self {
            StatementKind::Dialogue => None,
            StatementKind::Animation => Some(ANIMATION_MARKER),
            StatementKind::Choice => Some(CHOICE_MARKER),
            StatementKind::StoreVariable => Some(STORE_VARIABLE_MARKER),
        }
    }
}

/// Determine which kind of statement a line holds from its first character.
///
/// Lines without a marker are dialogue. Lines should not be empty: callers are expected
/// to filter out blank lines first. An empty line is classified as dialogue.
pub fn classify(line: &str) -> StatementKind {
    match line.chars().next() {
        Some(ANIMATION_MARKER) => StatementKind::Animation,
        Some(CHOICE_MARKER) => StatementKind::Choice,
        Some(STORE_VARIABLE_MARKER) => StatementKind::StoreVariable,
        _ => StatementKind::Dialogue,
    }
}

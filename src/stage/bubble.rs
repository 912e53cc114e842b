use crate::{action::BoxedAction, stage::Position};

use std::{cell::Cell, rc::Rc};

#[derive(Clone, Debug, Default)]
/// Slot which a choice bubble submits the player's selection into.
///
/// The script that opened the bubble holds a clone and reads the selection once the
/// bubble's action has finished.
pub struct ChoiceSelection(Rc<Cell<Option<usize>>>);

impl ChoiceSelection {
    pub fn new() -> Self {
        ChoiceSelection::default()
    }

    /// Submit the index of the selected choice.
    ///
    /// Should be called exactly once per bubble. A second call replaces the first selection.
    pub fn select(&self, index: usize) {
        self.0.set(Some(index));
    }

    /// The submitted index, if any.
    pub fn selected(&self) -> Option<usize> {
        self.0.get()
    }
}

/// Presents dialogue and choices to the player.
pub trait BubbleSpawner {
    /// Show a line of text at a position.
    ///
    /// The returned action finishes when the player has advanced past the line.
    fn show_line(&self, text: &str, position: Position) -> BoxedAction;

    /// Show a set of choices at a position.
    ///
    /// The returned action finishes after the player's selection has been submitted
    /// through `selection`.
    fn show_choices(
        &self,
        labels: &[String],
        position: Position,
        selection: ChoiceSelection,
    ) -> BoxedAction;
}

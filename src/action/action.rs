use crate::error::RuntimeError;

use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Result of advancing an action by one tick.
pub enum Progress {
    /// The action has more work to do and should be advanced again next tick.
    Running,
    /// The action is finished. It should not be advanced again.
    Done,
}

impl Progress {
    pub fn is_done(&self) -> bool {
        *self == Progress::Done
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Input signals raised during a single tick.
///
/// Signals are edge triggered: a signal is only set in the tick that the player
/// pressed the corresponding button.
pub struct Input {
    /// Advance a line of dialogue or confirm the highlighted choice.
    pub submit: bool,
    /// Highlight the next choice.
    pub next: bool,
    /// Highlight the previous choice.
    pub previous: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
/// Everything an action can observe about the current tick.
pub struct Frame {
    /// Time passed since the previous tick.
    pub delta: Duration,
    /// Input raised during this tick.
    pub input: Input,
}

impl Frame {
    /// Create a frame with the given time step and no input.
    pub fn new(delta: Duration) -> Self {
        Frame {
            delta,
            input: Input::default(),
        }
    }

    /// Set the input of the frame.
    pub fn with_input(mut self, input: Input) -> Self {
        self.input = input;
        self
    }

    /// Create a frame in which the player pressed submit.
    pub fn submit(delta: Duration) -> Self {
        Frame::new(delta).with_input(Input {
            submit: true,
            ..Input::default()
        })
    }
}

/// A computation which runs over any number of ticks.
///
/// # Contract
/// *   `advance` is called at most once per tick with that tick's `Frame`.
/// *   An action must not have any effect before its first call to `advance`.
/// *   Once `Progress::Done` has been returned the action must not be advanced again.
///     Combinators in this crate uphold this for their children.
/// *   An error is fatal for the action and everything it is a part of.
pub trait Action {
    fn advance(&mut self, frame: &Frame) -> Result<Progress, RuntimeError>;
}

/// Convenience type for actions which are passed around and composed.
pub type BoxedAction = Box<dyn Action>;

impl<F> Action for F
where
    F: FnMut(&Frame) -> Result<Progress, RuntimeError>,
{
    fn advance(&mut self, frame: &Frame) -> Result<Progress, RuntimeError> {
        self(frame)
    }
}

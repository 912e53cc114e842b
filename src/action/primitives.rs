//! Leaf actions: waiting for time, waiting for a condition and instant effects.

use crate::{
    action::{Action, BoxedAction, Frame, Progress},
    error::RuntimeError,
};

use std::time::Duration;

/// Wait until a fixed amount of time has passed.
pub struct Wait {
    duration: Duration,
    elapsed: Duration,
}

impl Wait {
    pub fn new(duration: Duration) -> Self {
        Wait {
            duration,
            elapsed: Duration::default(),
        }
    }
}

impl Action for Wait {
    fn advance(&mut self, frame: &Frame) -> Result<Progress, RuntimeError> {
        self.elapsed += frame.delta;

        if self.elapsed >= self.duration {
            Ok(Progress::Done)
        } else {
            Ok(Progress::Running)
        }
    }
}

/// Wait until a condition holds for a frame.
///
/// The condition is checked on every advance, including the first.
pub struct WaitUntil<F> {
    condition: F,
}

impl<F> WaitUntil<F>
where
    F: FnMut(&Frame) -> bool,
{
    pub fn new(condition: F) -> Self {
        WaitUntil { condition }
    }
}

impl<F> Action for WaitUntil<F>
where
    F: FnMut(&Frame) -> bool,
{
    fn advance(&mut self, frame: &Frame) -> Result<Progress, RuntimeError> {
        if (self.condition)(frame) {
            Ok(Progress::Done)
        } else {
            Ok(Progress::Running)
        }
    }
}

/// Perform an instant effect.
///
/// The effect is applied on the first advance. The action still takes a full tick and
/// reports that it is done on the tick after.
pub struct Effect<F> {
    effect: Option<F>,
}

impl<F> Effect<F>
where
    F: FnOnce(),
{
    pub fn new(effect: F) -> Self {
        Effect {
            effect: Some(effect),
        }
    }
}

impl<F> Action for Effect<F>
where
    F: FnOnce(),
{
    fn advance(&mut self, _: &Frame) -> Result<Progress, RuntimeError> {
        match self.effect.take() {
            Some(effect) => {
                effect();
                Ok(Progress::Running)
            }
            None => Ok(Progress::Done),
        }
    }
}

/// Construct an action when it is first advanced.
///
/// Collaborators may start their work (spawning a bubble, playing an animation) as soon as
/// they are asked for an action. Deferring the request keeps that work from happening before
/// the action is reached.
pub struct Deferred<F> {
    state: DeferredState<F>,
}

enum DeferredState<F> {
    Pending(F),
    Started(BoxedAction),
    Empty,
}

impl<F> Deferred<F>
where
    F: FnOnce() -> BoxedAction,
{
    pub fn new(create: F) -> Self {
        Deferred {
            state: DeferredState::Pending(create),
        }
    }
}

impl<F> Action for Deferred<F>
where
    F: FnOnce() -> BoxedAction,
{
    fn advance(&mut self, frame: &Frame) -> Result<Progress, RuntimeError> {
        if let DeferredState::Pending(_) = self.state {
            if let DeferredState::Pending(create) =
                std::mem::replace(&mut self.state, DeferredState::Empty)
            {
                self.state = DeferredState::Started(create());
            }
        }

        match &mut self.state {
            DeferredState::Started(action) => action.advance(frame),
            _ => Ok(Progress::Done),
        }
    }
}

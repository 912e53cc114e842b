//! Sequential and parallel composition of actions.
//!
//! Both combinators own their children. Nothing is handed to an outside scheduler, so a
//! composed action is advanced exactly like a leaf: once per tick with the tick's `Frame`.
//!
//! # Fan-out
//! A `Parallel` advances every unfinished child on every tick, in the order the children
//! were given (left to right). All children therefore start in the same tick. This also
//! holds for a pairwise fold: `parallel(parallel(a, b), c)` advances the inner `Parallel`,
//! which advances `a` and `b`, and then `c`, all within the first tick. If two children
//! finish in the same tick the effects of the left one land first.

use crate::{
    action::{Action, BoxedAction, Frame, Progress},
    error::RuntimeError,
};

use std::collections::VecDeque;

/// Runs its children one after another.
///
/// When a child finishes, the next child is started within the same tick. An empty
/// sequence finishes on its first advance and works as a no-op.
pub struct Sequence {
    actions: VecDeque<BoxedAction>,
}

impl Sequence {
    pub fn new(actions: Vec<BoxedAction>) -> Self {
        Sequence {
            actions: actions.into(),
        }
    }

    /// Number of children which have not yet finished.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl Action for Sequence {
    fn advance(&mut self, frame: &Frame) -> Result<Progress, RuntimeError> {
        while let Some(action) = self.actions.front_mut() {
            match action.advance(frame)? {
                Progress::Running => return Ok(Progress::Running),
                Progress::Done => {
                    self.actions.pop_front();
                }
            }
        }

        Ok(Progress::Done)
    }
}

/// Runs its children concurrently and finishes when all of them have finished.
pub struct Parallel {
    actions: Vec<Option<BoxedAction>>,
}

impl Parallel {
    pub fn new(actions: Vec<BoxedAction>) -> Self {
        Parallel {
            actions: actions.into_iter().map(Some).collect(),
        }
    }

    /// Number of children which have not yet finished.
    pub fn len(&self) -> usize {
        self.actions.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Action for Parallel {
    fn advance(&mut self, frame: &Frame) -> Result<Progress, RuntimeError> {
        for slot in self.actions.iter_mut() {
            if let Some(action) = slot {
                if action.advance(frame)?.is_done() {
                    *slot = None;
                }
            }
        }

        if self.is_empty() {
            Ok(Progress::Done)
        } else {
            Ok(Progress::Running)
        }
    }
}

/// Run `first` to completion, then `second`.
pub fn sequence(first: BoxedAction, second: BoxedAction) -> BoxedAction {
    Box::new(Sequence::new(vec![first, second]))
}

/// Run `first` and `second` concurrently.
pub fn parallel(first: BoxedAction, second: BoxedAction) -> BoxedAction {
    Box::new(Parallel::new(vec![first, second]))
}

/// Fold any number of actions into a single `Sequence`.
pub fn sequence_all<I>(actions: I) -> BoxedAction
where
    I: IntoIterator<Item = BoxedAction>,
{
    Box::new(Sequence::new(actions.into_iter().collect()))
}

/// Fold any number of actions into a single `Parallel` which starts all of them at once.
pub fn parallel_all<I>(actions: I) -> BoxedAction
where
    I: IntoIterator<Item = BoxedAction>,
{
    Box::new(Parallel::new(actions.into_iter().collect()))
}

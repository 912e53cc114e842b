//! Tick driven runner for actions.

use crate::{
    action::{BoxedAction, Frame, Progress},
    error::RuntimeError,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Identifier of a task in a `Scheduler`.
pub struct TaskId(u64);

/// Runs any number of actions side by side, advancing each once per tick.
///
/// The scheduler is owned and ticked by the surrounding application, typically once per
/// rendered frame. It is the only place that actions are started from: nothing in the
/// crate keeps a global scheduler around.
#[derive(Default)]
pub struct Scheduler {
    tasks: Vec<(TaskId, BoxedAction)>,
    next_id: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Scheduler::default()
    }

    /// Add an action to run. It is first advanced on the next tick.
    pub fn spawn(&mut self, action: BoxedAction) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;

        log::debug!("spawning task {:?}", id);
        self.tasks.push((id, action));

        id
    }

    /// Advance every task by one tick, in the order they were spawned.
    ///
    /// Finished tasks are removed. A task which returns an error is removed as well and
    /// the first error of the tick is returned after all other tasks have been advanced.
    pub fn tick(&mut self, frame: &Frame) -> Result<(), RuntimeError> {
        let mut first_error = None;

        self.tasks.retain_mut(|(id, action)| {
            let progress = action.advance(frame);

            match progress {
                Ok(Progress::Running) => true,
                Ok(Progress::Done) => {
                    log::debug!("task {:?} finished", id);
                    false
                }
                Err(err) => {
                    log::error!("task {:?} failed: {}", id, err);

                    if first_error.is_none() {
                        first_error = Some(err);
                    }

                    false
                }
            }
        });

        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Whether the task has been spawned and has not yet finished.
    pub fn is_running(&self, id: TaskId) -> bool {
        self.tasks.iter().any(|(task, _)| *task == id)
    }

    /// Whether no tasks are running.
    pub fn is_idle(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of running tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }
}

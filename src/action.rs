//! Suspendable units of work and the ways to combine them.
//!
//! Every parsed statement is compiled into an [`Action`][crate::action::Action]. Actions are
//! advanced once per tick by whoever owns them (usually a
//! [`Scheduler`][crate::Scheduler]) and report whether they are still running.
//! They never block: waiting for time to pass, for input or for a child action is modelled
//! by returning [`Progress::Running`][crate::action::Progress] until the wait is over.

mod action;
mod compose;
mod primitives;

pub use action::{Action, BoxedAction, Frame, Input, Progress};
pub use compose::{parallel, parallel_all, sequence, sequence_all, Parallel, Sequence};
pub use primitives::{Deferred, Effect, Wait, WaitUntil};

//! Scripted dialogue and cutscenes for games.
//!
//! Scripts are short, line based texts which make actors speak, play animations, store
//! boolean flags and ask the player to choose between branches:
//!
//! ```text
//! Fox: Hello there!
//! !Fox: Wave, Owl: Hop
//! [True] -> MetFox
//! ?Fox
//! I like you
//!  Fox: Thank you!
//! I love you
//!  !Fox: Blush
//! END
//! ```
//!
//! A script is parsed against a [`Stage`][crate::stage::Stage], which resolves every actor,
//! animation and variable up front. A script that refers to anything which does not exist
//! fails to parse as a whole and is never partially run. See [`script`][crate::script] for
//! the full format.
//!
//! Parsed scripts compile into a single [`Action`][crate::action::Action]: a suspendable
//! unit of work which is advanced once per tick with a [`Frame`][crate::action::Frame] of
//! elapsed time and player input. Actions are composed sequentially and in parallel, and
//! run on a [`Scheduler`][crate::Scheduler] that the application ticks.
//!
//! The world itself is reached through a few traits: [`Actor`][crate::stage::Actor] for
//! characters, [`VariableStore`][crate::stage::VariableStore] for flags and
//! [`BubbleSpawner`][crate::stage::BubbleSpawner] for presenting text and choices. The
//! crate comes with [`DialogueContext`][crate::DialogueContext] for variables and the
//! headless [`TranscriptBubbles`][crate::TranscriptBubbles] for text.
//!
//! # Example
//! ```
//! use cuescript::{read_action_from_string, DialogueContext, Frame, Settings, Stage};
//! use cuescript::stage::{ActorHandle, BubbleSpawner};
//! use cuescript::TranscriptBubbles;
//!
//! use std::{collections::HashMap, rc::Rc};
//!
//! let actors = HashMap::<String, ActorHandle>::new();
//! let context = DialogueContext::new().with_variable("MetFox", false);
//!
//! let settings = Settings::instant();
//! let bubbles: Rc<dyn BubbleSpawner> = Rc::new(TranscriptBubbles::new(&settings));
//!
//! let stage = Stage::new(&actors, &context);
//! let mut action = read_action_from_string("[True] -> MetFox", &stage, &bubbles, &settings)
//!     .unwrap();
//!
//! while !action.advance(&Frame::default()).unwrap().is_done() {}
//!
//! assert_eq!(context.get("MetFox"), Some(true));
//! ```
//!
//! # Features
//! *   `serde_support`: `Serialize` and `Deserialize` for settings, transcripts, warnings
//!     and line metadata.

mod consts;
mod dialogue;
mod scheduler;
mod settings;
mod utils;
mod validate;

pub mod action;
pub mod error;
pub mod script;
pub mod stage;
pub mod warnings;

#[cfg(test)]
pub(crate) mod testing;

pub use action::{Action, BoxedAction, Frame, Input, Progress};
pub use dialogue::Dialogue;
pub use error::{ParseError, RuntimeError};
pub use scheduler::{Scheduler, TaskId};
pub use script::{read_action_from_string, read_script_from_string, ParseOutput, Script};
pub use settings::Settings;
pub use stage::{DialogueContext, Stage, TranscriptBubbles, TranscriptEntry};
pub use utils::MetaData;
pub use validate::validate_script;
pub use warnings::{Logger, Warning};

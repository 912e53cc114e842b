//! Component which holds a script and starts it on demand.

use crate::{
    action::BoxedAction,
    error::{ParseError, RuntimeError},
    scheduler::{Scheduler, TaskId},
    script::read_action_from_string,
    settings::Settings,
    stage::{ActorResolver, BubbleSpawner, Stage, VariableStore},
    validate::validate_script,
    warnings::Logger,
};

use std::rc::Rc;

/// A script together with everything that it needs to run.
///
/// The script is parsed again every time that it is started, so changes to the actors or
/// variables between runs are picked up. Nothing from a previous run is kept.
///
/// # Example
/// ```
/// use cuescript::{Dialogue, DialogueContext, Frame, Scheduler, Settings, TranscriptBubbles};
/// use cuescript::stage::ActorHandle;
///
/// use std::{collections::HashMap, rc::Rc};
///
/// let settings = Settings::instant();
/// let bubbles = TranscriptBubbles::new(&settings);
/// let context = DialogueContext::new().with_variable("MetFox", false);
///
/// let dialogue = Dialogue::new(
///     "[True] -> MetFox",
///     Rc::new(HashMap::<String, ActorHandle>::new()),
///     Rc::new(context.clone()),
///     Rc::new(bubbles),
/// )
/// .with_settings(settings);
///
/// let mut scheduler = Scheduler::new();
/// dialogue.trigger(&mut scheduler).unwrap();
///
/// while !scheduler.is_idle() {
///     scheduler.tick(&Frame::default()).unwrap();
/// }
///
/// assert_eq!(context.get("MetFox"), Some(true));
/// ```
pub struct Dialogue {
    script: String,
    settings: Settings,
    actors: Rc<dyn ActorResolver>,
    variables: Rc<dyn VariableStore>,
    bubbles: Rc<dyn BubbleSpawner>,
}

impl Dialogue {
    pub fn new(
        script: &str,
        actors: Rc<dyn ActorResolver>,
        variables: Rc<dyn VariableStore>,
        bubbles: Rc<dyn BubbleSpawner>,
    ) -> Self {
        Dialogue {
            script: script.to_string(),
            settings: Settings::default(),
            actors,
            variables,
            bubbles,
        }
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Replace the script. It is not validated until it is used.
    pub fn set_script(&mut self, script: &str) {
        self.script = script.to_string();
    }

    pub fn script(&self) -> &str {
        &self.script
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Check that the script can run, returning its warnings or every error.
    pub fn validate(&self) -> Result<Logger, ParseError> {
        let log = validate_script(&self.script, &self.stage())?;

        log::info!("script is valid ({} warning(s))", log.warnings.len());

        Ok(log)
    }

    /// Parse the script into a fresh action.
    pub fn create_action(&self) -> Result<BoxedAction, ParseError> {
        read_action_from_string(&self.script, &self.stage(), &self.bubbles, &self.settings)
    }

    /// Parse the script and spawn it on the scheduler.
    ///
    /// An invalid script is not scheduled: the parse error is returned instead.
    pub fn trigger(&self, scheduler: &mut Scheduler) -> Result<TaskId, RuntimeError> {
        let action = self.create_action()?;

        Ok(scheduler.spawn(action))
    }

    fn stage(&self) -> Stage {
        Stage::new(self.actors.as_ref(), self.variables.as_ref())
    }
}

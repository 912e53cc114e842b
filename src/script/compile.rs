//! Compile parsed statements into actions.
//!
//! | Statement       | Action                                                      |
//! |-----------------|-------------------------------------------------------------|
//! | Script, branch  | `Sequence` of the statements                                |
//! | Dialogue        | `Speak`: toggle the talking parameter around a line bubble  |
//! | Animation       | `Parallel` of the animations, each deferred until started   |
//! | StoreVariable   | `Effect` which assigns the value                            |
//! | Choice          | `ChoicePrompt`: a choice bubble, then the selected branch   |

use crate::{
    action::{parallel_all, sequence_all, Action, BoxedAction, Deferred, Effect, Frame, Progress},
    error::RuntimeError,
    script::{AnimationCue, Assignment, ChoiceBlock, DialogueLine, Script, Statement, StoreTarget},
    settings::Settings,
    stage::{ActorRef, BubbleSpawner, ChoiceSelection},
};

use std::rc::Rc;

impl Script {
    /// Compile the script into a single action which runs its statements in order.
    pub fn into_action(self, bubbles: &Rc<dyn BubbleSpawner>, settings: &Settings) -> BoxedAction {
        sequence_all(
            self.statements
                .into_iter()
                .map(|statement| statement.into_action(bubbles, settings)),
        )
    }
}

impl Statement {
    /// Compile the statement into an action.
    pub fn into_action(self, bubbles: &Rc<dyn BubbleSpawner>, settings: &Settings) -> BoxedAction {
        match self {
            Statement::Dialogue(line) => Box::new(Speak::new(line, bubbles, settings)),
            Statement::Animation(cues) => parallel_all(cues.into_iter().map(play_cue)),
            Statement::StoreVariable(assignment) => store(assignment),
            Statement::Choice(block) => Box::new(ChoicePrompt::new(block, bubbles, settings)),
        }
    }
}

fn play_cue(cue: AnimationCue) -> BoxedAction {
    let AnimationCue { actor, animation } = cue;

    Box::new(Deferred::new(move || {
        log::debug!("'{}' plays animation '{}'", actor.name, animation);
        actor.handle.play(&animation)
    }))
}

fn store(assignment: Assignment) -> BoxedAction {
    let Assignment { target, value } = assignment;

    Box::new(Effect::new(move || match target {
        StoreTarget::Variable { name, cell } => {
            log::debug!("storing {} into variable '{}'", value, name);
            cell.set(value);
        }
        StoreTarget::Parameter { actor, parameter } => {
            log::debug!("storing {} into '{}.{}'", value, actor.name, parameter);
            actor.handle.set_bool(&parameter, value);
        }
    }))
}

/// Show a line of dialogue above an actor.
///
/// If the actor declares the talking parameter it is set while the bubble is open. The
/// parameter is checked when the line starts, not when it was parsed. If the action is
/// dropped before the bubble closes the parameter is left set.
struct Speak {
    actor: ActorRef,
    text: String,
    bubbles: Rc<dyn BubbleSpawner>,
    talking_parameter: String,
    bubble_height: f32,
    state: SpeakState,
}

enum SpeakState {
    Pending,
    Speaking {
        bubble: BoxedAction,
        is_talking: bool,
    },
    Finished,
}

impl Speak {
    fn new(line: DialogueLine, bubbles: &Rc<dyn BubbleSpawner>, settings: &Settings) -> Self {
        Speak {
            actor: line.actor,
            text: line.text,
            bubbles: bubbles.clone(),
            talking_parameter: settings.talking_parameter.clone(),
            bubble_height: settings.bubble_height,
            state: SpeakState::Pending,
        }
    }

    fn start(&self) -> SpeakState {
        let actor = &self.actor.handle;

        let is_talking = actor.has_bool_parameter(&self.talking_parameter);

        if is_talking {
            actor.set_bool(&self.talking_parameter, true);
        }

        let position = actor.position().raised(self.bubble_height);
        let bubble = self.bubbles.show_line(&self.text, position);

        SpeakState::Speaking { bubble, is_talking }
    }
}

impl Action for Speak {
    fn advance(&mut self, frame: &Frame) -> Result<Progress, RuntimeError> {
        if let SpeakState::Pending = self.state {
            self.state = self.start();
        }

        match &mut self.state {
            SpeakState::Speaking { bubble, is_talking } => {
                if !bubble.advance(frame)?.is_done() {
                    return Ok(Progress::Running);
                }

                if *is_talking {
                    self.actor.handle.set_bool(&self.talking_parameter, false);
                }

                self.state = SpeakState::Finished;

                Ok(Progress::Done)
            }
            _ => Ok(Progress::Done),
        }
    }
}

/// Put a choice to the player and run the selected branch.
struct ChoicePrompt {
    actor: ActorRef,
    labels: Vec<String>,
    branches: Vec<BoxedAction>,
    selection: ChoiceSelection,
    bubbles: Rc<dyn BubbleSpawner>,
    bubble_height: f32,
    state: PromptState,
}

enum PromptState {
    Pending,
    Choosing(BoxedAction),
    Following(BoxedAction),
    Finished,
}

impl ChoicePrompt {
    fn new(block: ChoiceBlock, bubbles: &Rc<dyn BubbleSpawner>, settings: &Settings) -> Self {
        let labels = block.labels();

        let branches = block
            .branches
            .into_iter()
            .map(|branch| branch.script.into_action(bubbles, settings))
            .collect();

        ChoicePrompt {
            actor: block.actor,
            labels,
            branches,
            selection: ChoiceSelection::new(),
            bubbles: bubbles.clone(),
            bubble_height: settings.bubble_height,
            state: PromptState::Pending,
        }
    }

    /// Take the action of the selected branch.
    fn take_selected_branch(&mut self) -> Result<BoxedAction, RuntimeError> {
        let index = self.selection.selected().ok_or(RuntimeError::NoSelection)?;
        let num_choices = self.branches.len();

        log::debug!(
            "'{}' chose '{}'",
            self.actor.name,
            self.labels.get(index).map(String::as_str).unwrap_or("")
        );

        std::mem::take(&mut self.branches)
            .into_iter()
            .nth(index)
            .ok_or(RuntimeError::InvalidSelection { index, num_choices })
    }
}

impl Action for ChoicePrompt {
    fn advance(&mut self, frame: &Frame) -> Result<Progress, RuntimeError> {
        if let PromptState::Pending = self.state {
            let position = self.actor.handle.position().raised(self.bubble_height);
            let bubble = self
                .bubbles
                .show_choices(&self.labels, position, self.selection.clone());

            self.state = PromptState::Choosing(bubble);
        }

        if let PromptState::Choosing(bubble) = &mut self.state {
            if !bubble.advance(frame)?.is_done() {
                return Ok(Progress::Running);
            }

            // The selected branch starts in the same tick that the choice was submitted
            self.state = PromptState::Following(self.take_selected_branch()?);
        }

        match &mut self.state {
            PromptState::Following(branch) => {
                if !branch.advance(frame)?.is_done() {
                    return Ok(Progress::Running);
                }

                self.state = PromptState::Finished;

                Ok(Progress::Done)
            }
            _ => Ok(Progress::Done),
        }
    }
}

#![allow(dead_code)]

use cuescript::{
    action::{Action, BoxedAction, Frame, Input, Progress},
    stage::{Actor, ActorHandle, BubbleSpawner, Position},
    DialogueContext, RuntimeError, Settings, Stage, TranscriptBubbles,
};

use std::{cell::RefCell, collections::HashMap, rc::Rc};

pub type Events = Rc<RefCell<Vec<String>>>;

/// Actor which records every animation and parameter change.
pub struct Puppet {
    name: String,
    position: Position,
    animations: Vec<(String, u32)>,
    parameters: RefCell<HashMap<String, bool>>,
    events: Events,
}

impl Puppet {
    pub fn new(name: &str, events: &Events) -> Self {
        Puppet {
            name: name.to_string(),
            position: Position::default(),
            animations: Vec::new(),
            parameters: RefCell::new(HashMap::new()),
            events: events.clone(),
        }
    }

    /// Add an animation which finishes after the given number of ticks.
    pub fn with_animation(mut self, animation: &str, ticks: u32) -> Self {
        self.animations.push((animation.to_string(), ticks));
        self
    }

    pub fn with_parameter(self, parameter: &str) -> Self {
        self.parameters
            .borrow_mut()
            .insert(parameter.to_string(), false);
        self
    }

    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.position = Position::new(x, y);
        self
    }

    pub fn parameter(&self, parameter: &str) -> Option<bool> {
        self.parameters.borrow().get(parameter).copied()
    }
}

impl Actor for Puppet {
    fn has_animation(&self, animation: &str) -> bool {
        self.animations.iter().any(|(name, _)| name == animation)
    }

    fn has_bool_parameter(&self, parameter: &str) -> bool {
        self.parameters.borrow().contains_key(parameter)
    }

    fn play(&self, animation: &str) -> BoxedAction {
        let ticks = self
            .animations
            .iter()
            .find(|(name, _)| name == animation)
            .map(|(_, ticks)| *ticks)
            .unwrap_or(1);

        let label = format!("{} {}", self.name, animation);
        let events = self.events.clone();
        let mut advanced = 0;

        events.borrow_mut().push(format!("start {}", label));

        Box::new(move |_: &Frame| -> Result<Progress, RuntimeError> {
            advanced += 1;

            if advanced >= ticks {
                events.borrow_mut().push(format!("end {}", label));
                Ok(Progress::Done)
            } else {
                Ok(Progress::Running)
            }
        })
    }

    fn set_bool(&self, parameter: &str, value: bool) {
        self.events
            .borrow_mut()
            .push(format!("set {}.{} {}", self.name, parameter, value));

        self.parameters
            .borrow_mut()
            .insert(parameter.to_string(), value);
    }

    fn position(&self) -> Position {
        self.position
    }
}

/// A small scene with actors, variables and headless bubbles.
///
/// *   `Fox` at (1, 0): animations `Wave` (2 ticks) and `Blush` (3 ticks), parameter `Talking`.
/// *   `Owl` at (4, 0): animation `Hop` (1 tick).
/// *   `Bear` at (8, 0): animation `Roar` (2 ticks), parameter `Sleeping`.
/// *   Variables `MetFox` and `Brave`, both false.
pub struct Scene {
    pub puppets: HashMap<String, Rc<Puppet>>,
    pub actors: HashMap<String, ActorHandle>,
    pub context: DialogueContext,
    pub settings: Settings,
    pub transcript: TranscriptBubbles,
    pub bubbles: Rc<dyn BubbleSpawner>,
    pub events: Events,
}

impl Scene {
    pub fn new() -> Self {
        let events = Events::default();

        let puppets = vec![
            Puppet::new("Fox", &events)
                .with_animation("Wave", 2)
                .with_animation("Blush", 3)
                .with_parameter("Talking")
                .at(1.0, 0.0),
            Puppet::new("Owl", &events).with_animation("Hop", 1).at(4.0, 0.0),
            Puppet::new("Bear", &events)
                .with_animation("Roar", 2)
                .with_parameter("Sleeping")
                .at(8.0, 0.0),
        ];

        let puppets = puppets
            .into_iter()
            .map(|puppet| (puppet.name.clone(), Rc::new(puppet)))
            .collect::<HashMap<_, _>>();

        let actors = puppets
            .iter()
            .map(|(name, puppet)| (name.clone(), puppet.clone() as ActorHandle))
            .collect();

        let context = DialogueContext::new()
            .with_variable("MetFox", false)
            .with_variable("Brave", false);

        let settings = Settings::instant();
        let transcript = TranscriptBubbles::new(&settings);
        let bubbles: Rc<dyn BubbleSpawner> = Rc::new(transcript.clone());

        Scene {
            puppets,
            actors,
            context,
            settings,
            transcript,
            bubbles,
            events,
        }
    }

    pub fn stage(&self) -> Stage {
        Stage::new(&self.actors, &self.context)
    }

    pub fn events(&self) -> Vec<String> {
        self.events.borrow().clone()
    }
}

pub fn submit() -> Input {
    Input {
        submit: true,
        ..Input::default()
    }
}

pub fn next() -> Input {
    Input {
        next: true,
        ..Input::default()
    }
}

pub fn previous() -> Input {
    Input {
        previous: true,
        ..Input::default()
    }
}

/// Advance an action with the given input every tick until it finishes.
///
/// Returns the number of ticks that it took.
pub fn run_with(action: &mut BoxedAction, input: Input) -> Result<usize, RuntimeError> {
    let frame = Frame::default().with_input(input);

    for tick in 1..=1000 {
        if action.advance(&frame)?.is_done() {
            return Ok(tick);
        }
    }

    panic!("action did not finish within 1000 ticks");
}

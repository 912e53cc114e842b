//! Actors and stages used by the unit tests.

use crate::{
    action::{BoxedAction, Frame, Progress},
    error::RuntimeError,
    stage::{Actor, ActorHandle, DialogueContext, Position, Stage},
};

use std::{cell::RefCell, collections::HashMap, rc::Rc};

pub type Events = Rc<RefCell<Vec<String>>>;

/// Actor with a fixed set of animations and parameters which records what is done to it.
pub struct MockActor {
    name: String,
    animations: Vec<String>,
    parameters: RefCell<HashMap<String, bool>>,
    /// Number of ticks that every animation takes.
    animation_ticks: u32,
    events: Events,
}

impl MockActor {
    pub fn new(name: &str, animations: &[&str], parameters: &[&str], events: &Events) -> Self {
        MockActor {
            name: name.to_string(),
            animations: animations.iter().map(|name| name.to_string()).collect(),
            parameters: RefCell::new(
                parameters
                    .iter()
                    .map(|name| (name.to_string(), false))
                    .collect(),
            ),
            animation_ticks: 2,
            events: events.clone(),
        }
    }

    pub fn parameter(&self, parameter: &str) -> Option<bool> {
        self.parameters.borrow().get(parameter).copied()
    }
}

impl Actor for MockActor {
    fn has_animation(&self, animation: &str) -> bool {
        self.animations.iter().any(|name| name == animation)
    }

    fn has_bool_parameter(&self, parameter: &str) -> bool {
        self.parameters.borrow().contains_key(parameter)
    }

    fn play(&self, animation: &str) -> BoxedAction {
        let label = format!("{} {}", self.name, animation);
        let events = self.events.clone();
        let ticks = self.animation_ticks;
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
        Position::default()
    }
}

/// Scene with the actors `Fox`, `Owl` and `Rock` and a context with the variable `Flag`.
///
/// *   `Fox` has the animations `Wave` and `Blush` and the parameter `Talking`.
/// *   `Owl` has the animation `Hop` and no parameters.
/// *   `Rock` has nothing.
pub struct Fixture {
    pub actors: HashMap<String, ActorHandle>,
    pub mocks: HashMap<String, Rc<MockActor>>,
    pub context: DialogueContext,
    pub events: Events,
}

impl Fixture {
    pub fn new() -> Self {
        let events = Events::default();

        let mocks = vec![
            MockActor::new("Fox", &["Wave", "Blush"], &["Talking"], &events),
            MockActor::new("Owl", &["Hop"], &[], &events),
            MockActor::new("Rock", &[], &[], &events),
        ]
        .into_iter()
        .map(|actor| (actor.name.clone(), Rc::new(actor)))
        .collect::<HashMap<_, _>>();

        let actors = mocks
            .iter()
            .map(|(name, actor)| (name.clone(), actor.clone() as ActorHandle))
            .collect();

        Fixture {
            actors,
            mocks,
            context: DialogueContext::new().with_variable("Flag", false),
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

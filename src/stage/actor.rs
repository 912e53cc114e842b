use crate::action::BoxedAction;

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

use std::{collections::HashMap, fmt, rc::Rc};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(Deserialize, Serialize))]
/// Position of an actor or bubble in the world.
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Position { x, y }
    }

    /// Return the position moved upwards by `height`.
    pub fn raised(self, height: f32) -> Self {
        Position {
            y: self.y + height,
            ..self
        }
    }
}

/// An animatable entity which scripts can refer to by name.
///
/// Methods take `&self` since handles are shared between every action that refers to
/// the actor. Implementations which mutate state are expected to use interior mutability.
pub trait Actor {
    /// Whether the actor can play the named animation.
    fn has_animation(&self, animation: &str) -> bool;

    /// Whether the actor declares a boolean parameter with the name.
    fn has_bool_parameter(&self, parameter: &str) -> bool;

    /// Play an animation. The returned action finishes when the animation has finished.
    ///
    /// Only called for animations which `has_animation` accepted.
    fn play(&self, animation: &str) -> BoxedAction;

    /// Set a boolean parameter. The effect is immediate.
    fn set_bool(&self, parameter: &str, value: bool);

    /// Current position of the actor, used to place bubbles above it.
    fn position(&self) -> Position;
}

/// Shared handle to an actor.
pub type ActorHandle = Rc<dyn Actor>;

/// Lookup of actors by name.
pub trait ActorResolver {
    fn find_actor(&self, name: &str) -> Option<ActorHandle>;
}

impl ActorResolver for HashMap<String, ActorHandle> {
    fn find_actor(&self, name: &str) -> Option<ActorHandle> {
        self.get(name).cloned()
    }
}

#[derive(Clone)]
/// Actor handle along with the name it was found by.
pub struct ActorRef {
    pub name: String,
    pub handle: ActorHandle,
}

impl ActorRef {
    pub fn new(name: &str, handle: ActorHandle) -> Self {
        ActorRef {
            name: name.to_string(),
            handle,
        }
    }
}

impl fmt::Debug for ActorRef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("ActorRef").field(&self.name).finish()
    }
}

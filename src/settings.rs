//! Settings for running scripts.

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde_support", serde(default))]
/// Settings which affect how a script is run.
///
/// With the `serde_support` feature settings can be read from configuration. Missing
/// fields are filled in from the defaults.
pub struct Settings {
    /// Boolean actor parameter which is set while the actor is speaking.
    ///
    /// Actors which do not declare the parameter speak without it being touched.
    pub talking_parameter: String,
    /// Distance above an actor's position at which its bubbles are placed.
    pub bubble_height: f32,
    /// Time from a bubble appearing until its text starts to be revealed.
    pub open_delay: Duration,
    /// Time between revealing each character of a bubble's text.
    pub reveal_delay: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            talking_parameter: "Talking".to_string(),
            bubble_height: 2.0,
            open_delay: Duration::from_millis(100),
            reveal_delay: Duration::from_millis(20),
        }
    }
}

impl Settings {
    /// Settings with no bubble delays, which shows text as soon as a bubble is opened.
    pub fn instant() -> Self {
        Settings {
            open_delay: Duration::default(),
            reveal_delay: Duration::default(),
            ..Settings::default()
        }
    }
}

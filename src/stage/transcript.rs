//! Headless bubbles which record what was shown.
//!
//! `TranscriptBubbles` behaves like an on-screen bubble spawner without drawing anything:
//! text is revealed one character at a time after a short opening delay, lines wait for
//! the player to submit, and choice bubbles let the player move between labels before
//! submitting one. Everything that is shown is kept in a transcript, which makes the type
//! useful for tests, tools and text frontends.

use crate::{
    action::{Action, BoxedAction, Frame, Progress, Wait},
    error::RuntimeError,
    settings::Settings,
    stage::{BubbleSpawner, ChoiceSelection, Position},
};

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

use std::{cell::RefCell, rc::Rc, time::Duration};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(Deserialize, Serialize))]
/// Record of a single bubble.
pub enum TranscriptEntry {
    /// A line of dialogue was opened.
    Line { text: String, position: Position },
    /// A choice was submitted.
    Choice {
        labels: Vec<String>,
        selected: usize,
        position: Position,
    },
}

#[derive(Clone, Debug)]
/// Bubble spawner which keeps a transcript instead of drawing.
pub struct TranscriptBubbles {
    open_delay: Duration,
    reveal_delay: Duration,
    transcript: Rc<RefCell<Vec<TranscriptEntry>>>,
    display: Rc<RefCell<String>>,
}

impl TranscriptBubbles {
    pub fn new(settings: &Settings) -> Self {
        TranscriptBubbles {
            open_delay: settings.open_delay,
            reveal_delay: settings.reveal_delay,
            transcript: Rc::new(RefCell::new(Vec::new())),
            display: Rc::new(RefCell::new(String::new())),
        }
    }

    /// All bubbles recorded so far.
    pub fn entries(&self) -> Vec<TranscriptEntry> {
        self.transcript.borrow().clone()
    }

    /// Text of all dialogue lines recorded so far.
    pub fn lines(&self) -> Vec<String> {
        self.transcript
            .borrow()
            .iter()
            .filter_map(|entry| match entry {
                TranscriptEntry::Line { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    /// Text currently visible in the open bubble.
    pub fn displayed(&self) -> String {
        self.display.borrow().clone()
    }

    fn reveal(&self, text: &str) -> Reveal {
        Reveal {
            characters: text.chars().collect(),
            revealed: 0,
            elapsed: Duration::default(),
            delay: self.reveal_delay,
            display: self.display.clone(),
        }
    }
}

impl BubbleSpawner for TranscriptBubbles {
    fn show_line(&self, text: &str, position: Position) -> BoxedAction {
        Box::new(LineBubble {
            entry: Some(TranscriptEntry::Line {
                text: text.to_string(),
                position,
            }),
            opening: Wait::new(self.open_delay),
            reveal: self.reveal(text),
            stage: LineStage::Opening,
            transcript: self.transcript.clone(),
            display: self.display.clone(),
        })
    }

    fn show_choices(
        &self,
        labels: &[String],
        position: Position,
        selection: ChoiceSelection,
    ) -> BoxedAction {
        Box::new(ChoiceBubble {
            labels: labels.to_vec(),
            position,
            highlighted: 0,
            opening: Some(Wait::new(self.open_delay)),
            reveal: None,
            selection,
            bubbles: self.clone(),
        })
    }
}

/// Progressively fill the display with text.
struct Reveal {
    characters: Vec<char>,
    revealed: usize,
    elapsed: Duration,
    delay: Duration,
    display: Rc<RefCell<String>>,
}

impl Action for Reveal {
    fn advance(&mut self, frame: &Frame) -> Result<Progress, RuntimeError> {
        let mut display = self.display.borrow_mut();

        if self.revealed == 0 {
            display.clear();
        }

        self.elapsed += frame.delta;

        while self.revealed < self.characters.len() && self.elapsed >= self.delay {
            display.push(self.characters[self.revealed]);

            self.revealed += 1;
            self.elapsed -= self.delay;
        }

        if self.revealed == self.characters.len() {
            Ok(Progress::Done)
        } else {
            Ok(Progress::Running)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum LineStage {
    Opening,
    Revealing,
    Waiting,
}

struct LineBubble {
    entry: Option<TranscriptEntry>,
    opening: Wait,
    reveal: Reveal,
    stage: LineStage,
    transcript: Rc<RefCell<Vec<TranscriptEntry>>>,
    display: Rc<RefCell<String>>,
}

impl Action for LineBubble {
    fn advance(&mut self, frame: &Frame) -> Result<Progress, RuntimeError> {
        match self.stage {
            LineStage::Opening => {
                if self.opening.advance(frame)?.is_done() {
                    if let Some(entry) = self.entry.take() {
                        self.transcript.borrow_mut().push(entry);
                    }

                    self.display.borrow_mut().clear();
                    self.stage = LineStage::Revealing;
                }

                Ok(Progress::Running)
            }
            LineStage::Revealing => {
                // Input in the tick the text finishes does not dismiss the bubble
                if self.reveal.advance(frame)?.is_done() {
                    self.stage = LineStage::Waiting;
                }

                Ok(Progress::Running)
            }
            LineStage::Waiting if frame.input.submit => {
                self.display.borrow_mut().clear();
                Ok(Progress::Done)
            }
            LineStage::Waiting => Ok(Progress::Running),
        }
    }
}

struct ChoiceBubble {
    labels: Vec<String>,
    position: Position,
    highlighted: usize,
    opening: Option<Wait>,
    reveal: Option<Reveal>,
    selection: ChoiceSelection,
    bubbles: TranscriptBubbles,
}

impl ChoiceBubble {
    fn highlight(&mut self, index: usize) {
        self.highlighted = index;
        self.reveal = Some(self.bubbles.reveal(&self.labels[index]));
    }
}

impl Action for ChoiceBubble {
    fn advance(&mut self, frame: &Frame) -> Result<Progress, RuntimeError> {
        if self.labels.is_empty() {
            return Ok(Progress::Done);
        }

        if let Some(opening) = self.opening.as_mut() {
            if !opening.advance(frame)?.is_done() {
                return Ok(Progress::Running);
            }

            self.opening = None;
            self.highlight(0);

            return Ok(Progress::Running);
        }

        if let Some(reveal) = self.reveal.as_mut() {
            if reveal.advance(frame)?.is_done() {
                self.reveal = None;
            }

            return Ok(Progress::Running);
        }

        let num_choices = self.labels.len();

        if frame.input.submit {
            self.selection.select(self.highlighted);

            self.bubbles
                .transcript
                .borrow_mut()
                .push(TranscriptEntry::Choice {
                    labels: self.labels.clone(),
                    selected: self.highlighted,
                    position: self.position,
                });

            self.bubbles.display.borrow_mut().clear();

            return Ok(Progress::Done);
        }

        if frame.input.next {
            self.highlight((self.highlighted + 1) % num_choices);
        } else if frame.input.previous {
            self.highlight((self.highlighted + num_choices - 1) % num_choices);
        }

        Ok(Progress::Running)
    }
}

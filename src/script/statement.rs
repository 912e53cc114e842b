//! Parsed statements with every name resolved.

use crate::{
    script::StatementKind,
    stage::{ActorRef, BoolCell},
    utils::MetaData,
};

#[derive(Clone, Debug, Default)]
/// Ordered list of statements, run one after another.
pub struct Script {
    pub statements: Vec<Statement>,
}

impl Script {
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<Statement> {
        self.statements.iter()
    }
}

#[derive(Clone, Debug)]
/// Single statement of a script.
pub enum Statement {
    Dialogue(DialogueLine),
    /// Animations which are played at the same time.
    Animation(Vec<AnimationCue>),
    StoreVariable(Assignment),
    Choice(ChoiceBlock),
}

impl Statement {
    pub fn kind(&self) -> StatementKind {
        match self {
            Statement::Dialogue(..) => StatementKind::Dialogue,
            Statement::Animation(..) => StatementKind::Animation,
            Statement::StoreVariable(..) => StatementKind::StoreVariable,
            Statement::Choice(..) => StatementKind::Choice,
        }
    }
}

#[derive(Clone, Debug)]
/// Line of text spoken by an actor.
pub struct DialogueLine {
    pub actor: ActorRef,
    /// Text exactly as it was written after the actor separator.
    pub text: String,
    pub meta_data: MetaData,
}

#[derive(Clone, Debug)]
/// Single animation to play on an actor.
pub struct AnimationCue {
    pub actor: ActorRef,
    /// Name of an animation that the actor was verified to have.
    pub animation: String,
}

#[derive(Clone, Debug)]
/// Boolean value to store.
pub struct Assignment {
    pub target: StoreTarget,
    pub value: bool,
}

#[derive(Clone, Debug)]
/// Where an assignment stores its value.
pub enum StoreTarget {
    /// Variable from the dialogue context.
    Variable { name: String, cell: BoolCell },
    /// Boolean parameter of an actor.
    ///
    /// The parameter is not required to exist on the actor.
    Parameter { actor: ActorRef, parameter: String },
}

#[derive(Clone, Debug)]
/// Choice put to the player, with a script for each possible answer.
pub struct ChoiceBlock {
    /// Actor that the choice bubble is shown above.
    pub actor: ActorRef,
    /// Branches in the order they were written.
    pub branches: Vec<Branch>,
    pub meta_data: MetaData,
}

impl ChoiceBlock {
    /// Labels of all branches, in the order they are presented.
    pub fn labels(&self) -> Vec<String> {
        self.branches
            .iter()
            .map(|branch| branch.label.clone())
            .collect()
    }
}

#[derive(Clone, Debug)]
/// Single answer to a choice.
pub struct Branch {
    /// Text presented to the player.
    pub label: String,
    /// Script which is run if the branch is selected.
    pub script: Script,
}

//! Named boolean variables which scripts can store into.

use std::{cell::Cell, collections::HashMap, rc::Rc};

/// Shared, mutable boolean variable.
pub type BoolCell = Rc<Cell<bool>>;

/// Lookup of boolean variables by exact name.
///
/// Lookups must not create variables: a missing name is reported as `None`.
pub trait VariableStore {
    fn find_variable(&self, name: &str) -> Option<BoolCell>;
}

#[derive(Clone, Debug, Default)]
/// Set of named boolean variables that a script can refer to.
///
/// Names are case sensitive and unique. Variables are kept in the order they were added.
/// Cells are shared with the scripts that were parsed against the context, so a value that
/// a running script stores is immediately visible through the context.
pub struct DialogueContext {
    variables: Vec<(String, BoolCell)>,
}

impl DialogueContext {
    pub fn new() -> Self {
        DialogueContext::default()
    }

    /// Add a variable with an initial value and return its cell.
    ///
    /// If the variable already exists its value is set and the existing cell is returned.
    pub fn add_variable(&mut self, name: &str, value: bool) -> BoolCell {
        if let Some(cell) = self.find_variable(name) {
            cell.set(value);
            return cell;
        }

        let cell = Rc::new(Cell::new(value));
        self.variables.push((name.to_string(), cell.clone()));

        cell
    }

    /// Builder variant of `add_variable`.
    pub fn with_variable(mut self, name: &str, value: bool) -> Self {
        self.add_variable(name, value);
        self
    }

    /// Current value of a variable.
    pub fn get(&self, name: &str) -> Option<bool> {
        self.find_variable(name).map(|cell| cell.get())
    }

    /// Names of all variables in the order they were added.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.variables.iter().map(|(name, _)| name.as_str())
    }

    /// Copy the current values of all variables.
    ///
    /// Together with [`restore`][DialogueContext::restore] this lets an outside save system
    /// persist the state that scripts have written.
    pub fn snapshot(&self) -> HashMap<String, bool> {
        self.variables
            .iter()
            .map(|(name, cell)| (name.clone(), cell.get()))
            .collect()
    }

    /// Set variables from a snapshot.
    ///
    /// Only variables which exist in the context are set. Names in the snapshot which are
    /// unknown to the context are ignored.
    pub fn restore(&self, snapshot: &HashMap<String, bool>) {
        for (name, cell) in &self.variables {
            if let Some(value) = snapshot.get(name) {
                cell.set(*value);
            }
        }
    }
}

impl VariableStore for DialogueContext {
    fn find_variable(&self, name: &str) -> Option<BoolCell> {
        self.variables
            .iter()
            .find(|(variable, _)| variable == name)
            .map(|(_, cell)| cell.clone())
    }
}

// Statement markers
pub const ANIMATION_MARKER: char = '!';
pub const CHOICE_MARKER: char = '?';
pub const STORE_VARIABLE_MARKER: char = '[';

// Separators
pub const ACTOR_SEPARATOR: &'static str = ": ";
pub const CUE_SEPARATOR: &'static str = ", ";
pub const ASSIGNMENT_MARKER: &'static str = " -> ";
pub const PARAMETER_SEPARATOR: char = '.';

// Stored values
pub const VALUE_OPEN: char = '[';
pub const VALUE_CLOSE: char = ']';
pub const TRUE_LITERAL: &'static str = "True";
pub const FALSE_LITERAL: &'static str = "False";

// Choice blocks
pub const CHOICE_END_MARKER: &'static str = "END";
pub const BRANCH_INDENT: char = ' ';

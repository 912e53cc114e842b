//! Splitting of script text into lines and forward iteration over them.

use crate::utils::MetaData;

#[derive(Clone, Copy, Debug, PartialEq)]
/// Single non-empty line of a script.
pub struct ScriptLine<'a> {
    /// Content of the line, without any line terminator.
    pub text: &'a str,
    /// Origin of the line in the script text.
    pub meta_data: MetaData,
}

impl<'a> ScriptLine<'a> {
    pub fn new(text: &'a str, meta_data: MetaData) -> Self {
        ScriptLine { text, meta_data }
    }
}

/// Split script text into its non-empty lines.
///
/// The text should already have had its carriage returns removed. Line indices in the
/// returned meta data count the empty lines, so they refer to the original text.
pub fn split_script_lines(content: &str) -> Vec<ScriptLine> {
    content
        .split('\n')
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(i, line)| ScriptLine::new(line, MetaData::from(i)))
        .collect()
}

#[derive(Clone, Debug)]
/// Forward-only cursor over the lines of a script.
///
/// The cursor is shared by mutable reference between the statement parsers. A parser
/// that needs more than a single line (such as a choice block) advances the same cursor
/// as its caller, so every line is read exactly once.
pub struct LineCursor<'a> {
    lines: &'a [ScriptLine<'a>],
    index: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(lines: &'a [ScriptLine<'a>]) -> Self {
        LineCursor { lines, index: 0 }
    }

    /// Look at the next line without consuming it.
    pub fn peek(&self) -> Option<ScriptLine<'a>> {
        self.lines.get(self.index).copied()
    }

    /// Number of lines which have been consumed.
    pub fn position(&self) -> usize {
        self.index
    }

    pub fn is_exhausted(&self) -> bool {
        self.index >= self.lines.len()
    }
}

impl<'a> Iterator for LineCursor<'a> {
    type Item = ScriptLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.peek()?;
        self.index += 1;

        Some(line)
    }
}

use crate::{
    utils::MetaData,
    warnings::{LogMessage, Warning},
};

#[derive(Clone, Debug, Default, PartialEq)]
/// Collection of warnings found while parsing a script.
pub struct Logger {
    /// Non-fatal errors, in the order they were found.
    pub warnings: Vec<LogMessage>,
}

impl Logger {
    pub(crate) fn add_warning(&mut self, warning: Warning, meta_data: &MetaData) {
        let message = LogMessage::new(warning, meta_data);
        log::warn!("{}", message);

        self.warnings.push(message);
    }

    /// Create an iterator over the logged messages.
    ///
    /// Messages are visited in the order of their line numbers.
    pub fn iter(&self) -> LoggerIter {
        let mut messages = self.warnings.iter().collect::<Vec<_>>();
        messages.sort_by_key(|message| message.meta_data.line_index);

        LoggerIter {
            messages: messages.into_iter(),
        }
    }

    /// Whether or not any warnings were logged.
    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }
}

pub struct LoggerIter<'a> {
    messages: std::vec::IntoIter<&'a LogMessage>,
}

impl<'a> Iterator for LoggerIter<'a> {
    type Item = &'a LogMessage;

    fn next(&mut self) -> Option<Self::Item> {
        self.messages.next()
    }
}

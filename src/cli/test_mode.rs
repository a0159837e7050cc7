use std::collections::VecDeque;

use crate::cli::io::Console;
use crate::cli::output::MessageKind;
use crate::errors::CliError;

/// In-memory console with queued answers and captured output lines.
///
/// Once the queue is empty every further prompt behaves like a closed input.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    prompts: Vec<String>,
    messages: Vec<(MessageKind, String)>,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Output lines in the order they were written.
    pub fn lines(&self) -> Vec<&str> {
        self.messages.iter().map(|(_, line)| line.as_str()).collect()
    }

    pub fn messages(&self) -> &[(MessageKind, String)] {
        &self.messages
    }

    /// Prompt labels shown so far; they are not part of [`lines`](Self::lines).
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }

    pub fn clear_output(&mut self) {
        self.messages.clear();
        self.prompts.clear();
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, label: &str) -> Result<Option<String>, CliError> {
        self.prompts.push(label.to_string());
        Ok(self.inputs.pop_front())
    }

    fn write_message(&mut self, kind: MessageKind, message: &str) -> Result<(), CliError> {
        self.messages.push((kind, message.to_string()));
        Ok(())
    }
}

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use rustyline::{error::ReadlineError, DefaultEditor};

use crate::cli::output::{apply_style, MessageKind, OutputPreferences};
use crate::config::Config;
use crate::errors::CliError;

/// Line-oriented conversation with the customer.
///
/// Prompts are not output lines: only [`Console::write_message`] produces the
/// lines that make up the console protocol.
pub trait Console {
    /// Shows `label` and waits for one line. `None` means the input was closed.
    fn read_line(&mut self, label: &str) -> Result<Option<String>, CliError>;

    /// Writes one complete output line.
    fn write_message(&mut self, kind: MessageKind, message: &str) -> Result<(), CliError>;

    fn info(&mut self, message: &str) -> Result<(), CliError> {
        self.write_message(MessageKind::Info, message)
    }

    fn success(&mut self, message: &str) -> Result<(), CliError> {
        self.write_message(MessageKind::Success, message)
    }

    fn warning(&mut self, message: &str) -> Result<(), CliError> {
        self.write_message(MessageKind::Warning, message)
    }

    fn error(&mut self, message: &str) -> Result<(), CliError> {
        self.write_message(MessageKind::Error, message)
    }
}

/// Interactive console backed by a `rustyline` editor.
pub struct TerminalConsole {
    editor: DefaultEditor,
    preferences: OutputPreferences,
    history_enabled: bool,
}

impl TerminalConsole {
    pub fn new(config: &Config) -> Result<Self, CliError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
            preferences: OutputPreferences::from_config(config),
            history_enabled: config.history_enabled,
        })
    }
}

impl Console for TerminalConsole {
    fn read_line(&mut self, label: &str) -> Result<Option<String>, CliError> {
        match self.editor.readline(label) {
            Ok(line) => {
                if self.history_enabled && !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str()).ok();
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write_message(&mut self, kind: MessageKind, message: &str) -> Result<(), CliError> {
        let formatted = apply_style(kind, message, &self.preferences);
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{formatted}")?;
        stdout.flush()?;
        Ok(())
    }
}

/// Non-interactive console: answers come line by line from a reader, prompts
/// are suppressed and output is plain text.
pub struct ScriptConsole<R, W> {
    reader: R,
    writer: W,
}

impl ScriptConsole<StdinLock<'static>, Stdout> {
    pub fn from_stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ScriptConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Console for ScriptConsole<R, W> {
    fn read_line(&mut self, label: &str) -> Result<Option<String>, CliError> {
        let mut buffer = String::new();
        if self.reader.read_line(&mut buffer)? == 0 {
            tracing::debug!(prompt = label, "script input exhausted");
            return Ok(None);
        }
        let line = buffer.trim_end_matches(['\n', '\r']).to_string();
        Ok(Some(line))
    }

    fn write_message(&mut self, _kind: MessageKind, message: &str) -> Result<(), CliError> {
        writeln!(self.writer, "{message}")?;
        self.writer.flush()?;
        Ok(())
    }
}

use colored::Colorize;

use crate::config::Config;

/// Message categories used by the console front ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutputPreferences {
    pub color_enabled: bool,
    pub high_contrast_mode: bool,
    pub plain_output: bool,
}

impl OutputPreferences {
    pub fn from_config(config: &Config) -> Self {
        Self {
            color_enabled: config.ui_color_enabled,
            high_contrast_mode: config.accessibility.high_contrast,
            plain_output: config.accessibility.plain_output,
        }
    }

    /// No styling at all; used for scripted sessions.
    pub fn plain() -> Self {
        Self {
            color_enabled: false,
            high_contrast_mode: false,
            plain_output: true,
        }
    }
}

/// Applies terminal styling without touching the message text.
pub fn apply_style(kind: MessageKind, message: &str, prefs: &OutputPreferences) -> String {
    if prefs.plain_output || !prefs.color_enabled {
        return message.to_string();
    }

    if prefs.high_contrast_mode {
        return match kind {
            MessageKind::Info => message.to_string(),
            _ => message.bold().to_string(),
        };
    }

    match kind {
        MessageKind::Info => message.to_string(),
        MessageKind::Success => message.bright_green().to_string(),
        MessageKind::Warning => message.bright_yellow().to_string(),
        MessageKind::Error => message.bright_red().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_output_keeps_text_verbatim() {
        let prefs = OutputPreferences::plain();
        for kind in [
            MessageKind::Info,
            MessageKind::Success,
            MessageKind::Warning,
            MessageKind::Error,
        ] {
            assert_eq!(
                apply_style(kind, "Welcome, Alice Smith.", &prefs),
                "Welcome, Alice Smith."
            );
        }
    }

    #[test]
    fn disabled_colour_is_plain() {
        let mut config = Config::default();
        config.ui_color_enabled = false;
        let prefs = OutputPreferences::from_config(&config);
        assert_eq!(apply_style(MessageKind::Error, "nope", &prefs), "nope");
    }

    #[test]
    fn styled_output_still_contains_message() {
        colored::control::set_override(true);
        let prefs = OutputPreferences::from_config(&Config::default());
        let styled = apply_style(MessageKind::Success, "done", &prefs);
        assert!(styled.contains("done"));
        assert_ne!(styled, "done");
        colored::control::unset_override();
    }
}

//! Terminal-backed collaborator implementations for the action dispatcher.
//!
//! The core's `GatewayActions` speaks to traits; this module supplies the
//! CLI's implementations: notifications on stderr, confirmations through
//! `dialoguer`, and navigation intents printed as console routes.

use owo_colors::OwoColorize;

use magview_core::{ConfirmPrompt, CoreError, Navigator, Notifier, Severity};

/// Writes notifications to stderr, colored by severity when enabled.
pub struct StderrNotifier {
    color: bool,
}

impl StderrNotifier {
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl Notifier for StderrNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        if !self.color {
            eprintln!("{message}");
            return;
        }
        match severity {
            Severity::Info => eprintln!("{}", message.cyan()),
            Severity::Warning => eprintln!("{}", message.yellow()),
            Severity::Error => eprintln!("{}", message.red()),
        }
    }
}

/// Interactive yes/no prompt, auto-approving when `--yes` was passed.
pub struct DialoguerConfirm {
    assume_yes: bool,
}

impl DialoguerConfirm {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl ConfirmPrompt for DialoguerConfirm {
    async fn confirm(&self, message: &str) -> Result<bool, CoreError> {
        if self.assume_yes {
            return Ok(true);
        }
        dialoguer::Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact()
            .map_err(|e| CoreError::Prompt {
                message: e.to_string(),
            })
    }
}

/// Prints navigation intents as console routes, one per line.
pub struct PrintNavigator;

impl Navigator for PrintNavigator {
    fn navigate(&self, path: &str) {
        println!("{path}");
    }
}

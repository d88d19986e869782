//! Blocking user prompts.
//!
//! Destructive catalog actions go through a yes/no confirmation gate, and
//! misuse (acting on an empty selection) is reported with a blocking
//! prompt. Both are provided by the hosting shell through [`Dialog`].

/// Confirmation gate and prompt provided by the hosting shell.
pub trait Dialog {
    /// Asks a yes/no question. Returns `true` when the user accepts.
    fn confirm(&mut self, message: &str) -> bool;

    /// Shows a message the user has to dismiss.
    fn alert(&mut self, message: &str);
}

/// A [`Dialog`] with a fixed answer that records every message it was shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptedDialog {
    answer: bool,
    confirmations: Vec<String>,
    alerts: Vec<String>,
}

impl ScriptedDialog {
    /// A dialog that accepts every confirmation.
    #[must_use]
    pub const fn accepting() -> Self {
        Self {
            answer: true,
            confirmations: Vec::new(),
            alerts: Vec::new(),
        }
    }

    /// A dialog that declines every confirmation.
    #[must_use]
    pub const fn declining() -> Self {
        Self {
            answer: false,
            confirmations: Vec::new(),
            alerts: Vec::new(),
        }
    }

    /// Questions asked so far.
    #[must_use]
    pub fn confirmations(&self) -> &[String] {
        &self.confirmations
    }

    /// Alerts shown so far.
    #[must_use]
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }
}

impl Dialog for ScriptedDialog {
    fn confirm(&mut self, message: &str) -> bool {
        self.confirmations.push(message.to_string());
        self.answer
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}

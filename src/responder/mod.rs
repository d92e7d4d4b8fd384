//! Intent Responder
//!
//! Maps free-text input to a reply string plus an optional shell action, with
//! small conversational state (active games, user profile) owned here and
//! mutated nowhere else. Dispatch is an explicit ordered rule table — see
//! `rules.rs` for the table and why its order matters.

mod games;
mod rules;
mod state;

pub use state::{ConversationState, UserProfile};

use chrono::Local;

use crate::host::Host;

/// What the responder wants the shell to do beyond showing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellAction {
    /// Show the reply, then terminate after the quit grace period.
    Quit,
}

/// A single turn's outcome.
#[derive(Debug)]
pub struct Reply {
    pub text: String,
    pub action: Option<ShellAction>,
}

impl Reply {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            action: None,
        }
    }
}

/// Keyword-matching responder over an injected [`Host`].
pub struct Responder {
    pub(crate) state: ConversationState,
    pub(crate) host: Box<dyn Host>,
}

impl Responder {
    pub fn new(host: Box<dyn Host>) -> Self {
        Self {
            state: ConversationState::default(),
            host,
        }
    }

    /// Dispatch `text` to the first matching rule.
    ///
    /// The caller trims and lower-cases the input; predicates assume that.
    pub fn respond(&mut self, text: &str) -> Reply {
        for rule in rules::RULES {
            if (rule.matches)(text, &self.state) {
                tracing::debug!(rule = rule.name, "dispatching input");
                return (rule.handle)(self, text);
            }
        }
        // The table ends in a catch-all; this line never runs.
        Reply::text(rules::FALLBACK_TEXT)
    }

    /// Timestamp + battery + CPU/memory + a random fact. Shared between the
    /// "summary" rule and the hourly unprompted summary.
    pub fn summary(&mut self) -> String {
        let now_line = Local::now()
            .format("It's %H:%M on %A, %B %d, %Y.")
            .to_string();
        let battery_line = match self.host.battery() {
            Some(b) => format!(
                "Battery at {:.0}%, {}.",
                b.percent,
                rules::charging_word(b.charging)
            ),
            None => "Battery info not available.".to_string(),
        };
        let snap = self.host.cpu_memory();
        let usage_line = format!(
            "CPU: {:.1}%, Memory: {:.1}%.",
            snap.cpu_percent, snap.memory_percent
        );
        format!(
            "{now_line}\n{battery_line}\n{usage_line}\nFun fact: {}",
            rules::random_fact()
        )
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &ConversationState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut ConversationState {
        &mut self.state
    }
}

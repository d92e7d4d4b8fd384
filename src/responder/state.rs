//! Conversational state carried across turns.
//!
//! Owned by the shell, mutated only inside `Responder::respond`. Nothing here
//! is persisted — the pet forgets everything on exit.

/// Per-session conversational state.
///
/// The two game fields are deliberately independent: starting one game does
/// not cancel the other, matching the pet's long-standing behavior.
#[derive(Debug, Clone, Default)]
pub struct ConversationState {
    /// Secret of an active number-guessing game.
    pub guess_secret: Option<i64>,
    /// Whether a rock-paper-scissors round is awaiting the user's move.
    pub rps_active: bool,
    pub profile: UserProfile,
}

/// Small set of remembered facts about the user.
#[derive(Debug, Clone, Default)]
pub struct UserProfile {
    pub name: Option<String>,
    pub favorite_color: Option<String>,
    pub birthday: Option<String>,
}

impl UserProfile {
    /// Render the profile, substituting "unknown" for unset fields.
    pub fn describe(&self) -> String {
        format!(
            "Your name is {}, your favorite color is {}, and your birthday is {}.",
            self.name.as_deref().unwrap_or("unknown"),
            self.favorite_color.as_deref().unwrap_or("unknown"),
            self.birthday.as_deref().unwrap_or("unknown"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_empty_profile() {
        let profile = UserProfile::default();
        assert_eq!(
            profile.describe(),
            "Your name is unknown, your favorite color is unknown, and your birthday is unknown."
        );
    }

    #[test]
    fn test_describe_partial_profile() {
        let profile = UserProfile {
            name: Some("Alice".into()),
            favorite_color: None,
            birthday: Some("june 1".into()),
        };
        let text = profile.describe();
        assert!(text.contains("Alice"));
        assert!(text.contains("your favorite color is unknown"));
        assert!(text.contains("june 1"));
    }
}

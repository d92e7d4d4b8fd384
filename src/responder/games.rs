//! The two built-in text games: number guessing and rock-paper-scissors.
//!
//! Pure logic only — random choices and state changes happen in the rule
//! handlers so these functions stay table-testable.

/// Result of comparing a "guess N" message against the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GuessOutcome {
    TooLow,
    TooHigh,
    Correct,
    /// Second token missing or not an integer. The game stays active.
    Malformed,
}

/// Parse the second whitespace-separated token of `text` as the guess and
/// compare it to `secret`.
pub(crate) fn evaluate_guess(text: &str, secret: i64) -> GuessOutcome {
    let Some(token) = text.split_whitespace().nth(1) else {
        return GuessOutcome::Malformed;
    };
    match token.parse::<i64>() {
        Ok(n) if n < secret => GuessOutcome::TooLow,
        Ok(n) if n > secret => GuessOutcome::TooHigh,
        Ok(_) => GuessOutcome::Correct,
        Err(_) => GuessOutcome::Malformed,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RpsMove {
    Rock,
    Paper,
    Scissors,
}

impl RpsMove {
    pub(crate) const ALL: [RpsMove; 3] = [RpsMove::Rock, RpsMove::Paper, RpsMove::Scissors];

    pub(crate) fn parse(text: &str) -> Option<Self> {
        match text {
            "rock" => Some(RpsMove::Rock),
            "paper" => Some(RpsMove::Paper),
            "scissors" => Some(RpsMove::Scissors),
            _ => None,
        }
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            RpsMove::Rock => "rock",
            RpsMove::Paper => "paper",
            RpsMove::Scissors => "scissors",
        }
    }

    /// Standard beats relation: rock > scissors > paper > rock.
    fn beats(self, other: Self) -> bool {
        matches!(
            (self, other),
            (RpsMove::Rock, RpsMove::Scissors)
                | (RpsMove::Paper, RpsMove::Rock)
                | (RpsMove::Scissors, RpsMove::Paper)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RpsVerdict {
    Tie,
    UserWins,
    BotWins,
}

impl RpsVerdict {
    pub(crate) fn sentence(self) -> &'static str {
        match self {
            RpsVerdict::Tie => "It's a tie!",
            RpsVerdict::UserWins => "You win!",
            RpsVerdict::BotWins => "I win!",
        }
    }
}

pub(crate) fn resolve_rps(user: RpsMove, bot: RpsMove) -> RpsVerdict {
    if user == bot {
        RpsVerdict::Tie
    } else if user.beats(bot) {
        RpsVerdict::UserWins
    } else {
        RpsVerdict::BotWins
    }
}

//! The ordered intent rule table.
//!
//! Dispatch is first-match-wins over this list, and order is load-bearing:
//! the predicates are substring tests with overlapping vocabularies, so
//! "battery problem" must reach the battery rule before the fix-tip rule ever
//! sees "problem". Reorder with care.

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::host::{LaunchOutcome, RecentFiles};
use crate::util::{capitalize_first, truncate_chars};

use super::games::{self, GuessOutcome, RpsMove};
use super::state::ConversationState;
use super::{Reply, Responder, ShellAction};

/// One dispatch rule: a named predicate over (input, state) and the handler
/// that runs when it is the first to match.
pub(super) struct Rule {
    pub name: &'static str,
    pub matches: fn(&str, &ConversationState) -> bool,
    pub handle: fn(&mut Responder, &str) -> Reply,
}

const FUN_FACTS: [&str; 3] = [
    "Honey never spoils.",
    "Octopuses have three hearts.",
    "Bananas are berries, but strawberries aren't.",
];

/// Keyword → tip, checked in order; the first key contained in the input
/// wins.
const FIX_TIPS: [(&str, &str); 5] = [
    ("slow", "Try restarting your PC and closing unused apps."),
    (
        "internet",
        "Check your router or try resetting your network adapter.",
    ),
    (
        "battery",
        "Try calibrating your battery or replace if it's old.",
    ),
    ("crash", "Update your drivers and check for overheating."),
    (
        "disk",
        "You can free up space by running Disk Cleanup or deleting temp files.",
    ),
];

pub(super) const FALLBACK_TEXT: &str = "Sorry, I don't understand. Try asking something else.";

const CLIPBOARD_PREVIEW_CHARS: usize = 300;
const RECENT_FILES_LIMIT: usize = 3;

fn contains_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| text.contains(n))
}

fn is_any(text: &str, options: &[&str]) -> bool {
    options.iter().any(|o| text == *o)
}

pub(super) static RULES: &[Rule] = &[
    Rule {
        name: "time_date",
        matches: |t, _| contains_any(t, &["time", "date"]),
        handle: handle_time,
    },
    Rule {
        name: "battery",
        matches: |t, _| t.contains("battery"),
        handle: handle_battery,
    },
    Rule {
        name: "health",
        matches: |t, _| contains_any(t, &["health", "cpu", "memory"]),
        handle: handle_health,
    },
    Rule {
        name: "fix_tip",
        matches: |t, _| contains_any(t, &["fix", "slow", "problem", "crash", "disk"]),
        handle: handle_fix_tip,
    },
    Rule {
        name: "cleanup",
        matches: |t, _| contains_any(t, &["run cleanup", "open cleanup", "clean"]),
        handle: handle_cleanup,
    },
    Rule {
        name: "fun_fact",
        matches: |t, _| contains_any(t, &["fun fact", "fact"]),
        handle: handle_fun_fact,
    },
    Rule {
        name: "summary",
        matches: |t, _| contains_any(t, &["summary", "status report", "how am i doing"]),
        handle: handle_summary,
    },
    Rule {
        name: "open_app",
        matches: |t, _| t.starts_with("open "),
        handle: handle_open_app,
    },
    Rule {
        name: "clipboard",
        matches: |t, _| contains_any(t, &["clipboard", "read clipboard"]),
        handle: handle_clipboard,
    },
    Rule {
        name: "goodbye",
        matches: |t, _| is_any(t, &["exit", "quit", "close", "bye"]),
        handle: handle_goodbye,
    },
    Rule {
        name: "guess_start",
        matches: |t, _| contains_any(t, &["play guess", "guess number"]),
        handle: handle_guess_start,
    },
    Rule {
        name: "guess_move",
        matches: |t, s| s.guess_secret.is_some() && t.starts_with("guess"),
        handle: handle_guess_move,
    },
    Rule {
        name: "rps_start",
        matches: |t, _| contains_any(t, &["rock paper scissors", "play rps"]),
        handle: handle_rps_start,
    },
    Rule {
        name: "rps_move",
        matches: |t, s| s.rps_active && RpsMove::parse(t).is_some(),
        handle: handle_rps_move,
    },
    Rule {
        name: "set_name",
        matches: |t, _| t.starts_with("my name is "),
        handle: handle_set_name,
    },
    Rule {
        name: "set_color",
        matches: |t, _| t.starts_with("my favorite color is "),
        handle: handle_set_color,
    },
    Rule {
        name: "set_birthday",
        matches: |t, _| t.contains("my birthday is"),
        handle: handle_set_birthday,
    },
    Rule {
        name: "profile",
        matches: |t, _| t.contains("what do you know about me"),
        handle: handle_profile,
    },
    Rule {
        name: "recent_files",
        matches: |t, _| contains_any(t, &["recent files", "show recent"]),
        handle: handle_recent_files,
    },
    Rule {
        name: "wifi",
        matches: |t, _| contains_any(t, &["wifi info", "wifi status", "network info"]),
        handle: handle_wifi,
    },
    Rule {
        name: "greeting",
        matches: |t, _| is_any(t, &["hi", "hello"]),
        handle: handle_greeting,
    },
    Rule {
        name: "mute",
        matches: |t, _| is_any(t, &["mute audio", "mute sound"]),
        handle: handle_mute,
    },
    Rule {
        name: "unmute",
        matches: |t, _| is_any(t, &["unmute audio", "unmute sound"]),
        handle: handle_unmute,
    },
    Rule {
        name: "fallback",
        matches: |_, _| true,
        handle: handle_fallback,
    },
];

// ── Handlers ─────────────────────────────────────────────────────────────────

fn handle_time(_r: &mut Responder, _text: &str) -> Reply {
    Reply::text(
        chrono::Local::now()
            .format("It's %H:%M on %A, %B %d, %Y.")
            .to_string(),
    )
}

pub(super) fn charging_word(charging: bool) -> &'static str {
    if charging { "charging" } else { "on battery" }
}

fn handle_battery(r: &mut Responder, _text: &str) -> Reply {
    match r.host.battery() {
        Some(b) => Reply::text(format!(
            "Battery is at {:.0}% and {}.",
            b.percent,
            charging_word(b.charging)
        )),
        None => Reply::text("Battery info not available."),
    }
}

fn handle_health(r: &mut Responder, _text: &str) -> Reply {
    let snap = r.host.cpu_memory();
    Reply::text(format!(
        "CPU usage is {:.1}%. Memory usage is {:.1}%.",
        snap.cpu_percent, snap.memory_percent
    ))
}

fn handle_fix_tip(_r: &mut Responder, text: &str) -> Reply {
    for (key, tip) in FIX_TIPS {
        if text.contains(key) {
            return Reply::text(tip);
        }
    }
    Reply::text("Try restarting your computer or checking for updates.")
}

fn handle_cleanup(r: &mut Responder, _text: &str) -> Reply {
    match r.host.launch_cleanup() {
        Ok(()) => Reply::text("Launching Disk Cleanup..."),
        Err(e) => Reply::text(format!("Failed to launch Disk Cleanup: {e}")),
    }
}

fn handle_fun_fact(_r: &mut Responder, _text: &str) -> Reply {
    Reply::text(random_fact())
}

/// Uniform pick from the fact list. Also used by the summary composition.
pub(super) fn random_fact() -> &'static str {
    let mut rng = rand::rng();
    FUN_FACTS.choose(&mut rng).copied().unwrap_or(FUN_FACTS[0])
}

fn handle_summary(r: &mut Responder, _text: &str) -> Reply {
    Reply::text(r.summary())
}

fn handle_open_app(r: &mut Responder, text: &str) -> Reply {
    let name = text.strip_prefix("open ").unwrap_or("").trim();
    match r.host.launch_app(name) {
        LaunchOutcome::Launched(app) => {
            Reply::text(format!("Launching {}...", capitalize_first(&app)))
        }
        LaunchOutcome::Unknown => Reply::text(format!("I don't know how to open {name}.")),
        LaunchOutcome::Failed(e) => Reply::text(format!("Couldn't launch {name}: {e}")),
    }
}

fn handle_clipboard(r: &mut Responder, _text: &str) -> Reply {
    match r.host.read_clipboard() {
        Ok(Some(text)) => Reply::text(format!(
            "Clipboard says:\n{}",
            truncate_chars(&text, CLIPBOARD_PREVIEW_CHARS)
        )),
        Ok(None) => Reply::text("Clipboard is empty or not text."),
        Err(e) => {
            tracing::warn!("Clipboard read failed: {e}");
            Reply::text("Sorry, I couldn't read the clipboard.")
        }
    }
}

fn handle_goodbye(_r: &mut Responder, _text: &str) -> Reply {
    Reply {
        text: "Goodbye! Shutting down...".to_string(),
        action: Some(ShellAction::Quit),
    }
}

fn handle_guess_start(r: &mut Responder, _text: &str) -> Reply {
    r.state.guess_secret = Some(rand::rng().random_range(1..=10));
    Reply::text("I'm thinking of a number between 1 and 10. Try to guess it!")
}

fn handle_guess_move(r: &mut Responder, text: &str) -> Reply {
    let Some(secret) = r.state.guess_secret else {
        return handle_fallback(r, text);
    };
    match games::evaluate_guess(text, secret) {
        GuessOutcome::TooLow => Reply::text("Too low! Try again."),
        GuessOutcome::TooHigh => Reply::text("Too high! Try again."),
        GuessOutcome::Correct => {
            r.state.guess_secret = None;
            Reply::text("Correct! You guessed it!")
        }
        GuessOutcome::Malformed => Reply::text("Please type like: guess 5"),
    }
}

fn handle_rps_start(r: &mut Responder, _text: &str) -> Reply {
    r.state.rps_active = true;
    Reply::text("Let's play Rock, Paper, Scissors! Type your move: rock, paper, or scissors.")
}

fn handle_rps_move(r: &mut Responder, text: &str) -> Reply {
    let Some(user) = RpsMove::parse(text) else {
        return handle_fallback(r, text);
    };
    let mut rng = rand::rng();
    let bot = RpsMove::ALL
        .choose(&mut rng)
        .copied()
        .unwrap_or(RpsMove::Rock);
    let verdict = games::resolve_rps(user, bot);
    r.state.rps_active = false;
    Reply::text(format!(
        "You chose {}, I chose {}. {}",
        user.as_str(),
        bot.as_str(),
        verdict.sentence()
    ))
}

fn handle_set_name(r: &mut Responder, text: &str) -> Reply {
    let name = capitalize_first(text.strip_prefix("my name is ").unwrap_or("").trim());
    let reply = format!("Nice to meet you, {name}!");
    r.state.profile.name = Some(name);
    Reply::text(reply)
}

fn handle_set_color(r: &mut Responder, text: &str) -> Reply {
    let color = text
        .strip_prefix("my favorite color is ")
        .unwrap_or("")
        .trim()
        .to_string();
    let reply = format!("I'll remember that your favorite color is {color}.");
    r.state.profile.favorite_color = Some(color);
    Reply::text(reply)
}

fn handle_set_birthday(r: &mut Responder, text: &str) -> Reply {
    // Everything after the last occurrence of the phrase is the date.
    let date = text
        .split("my birthday is")
        .last()
        .unwrap_or("")
        .trim()
        .to_string();
    let reply = format!("Got it! Your birthday is on {date}.");
    r.state.profile.birthday = Some(date);
    Reply::text(reply)
}

fn handle_profile(r: &mut Responder, _text: &str) -> Reply {
    Reply::text(r.state.profile.describe())
}

fn handle_recent_files(r: &mut Responder, _text: &str) -> Reply {
    match r.host.recent_documents(RECENT_FILES_LIMIT) {
        RecentFiles::MissingDir => Reply::text("I couldn't find the Documents folder."),
        RecentFiles::Empty => Reply::text("No recent files found."),
        RecentFiles::Entries(entries) => {
            let listing = entries
                .iter()
                .map(|e| format!("{} ({})", e.name, e.modified.format("%Y-%m-%d %H:%M")))
                .collect::<Vec<_>>()
                .join("\n");
            Reply::text(format!(
                "Here are your {} most recent files in Documents:\n{listing}",
                entries.len()
            ))
        }
    }
}

fn handle_wifi(r: &mut Responder, _text: &str) -> Reply {
    match r.host.wifi() {
        Ok(w) if w.is_complete() => Reply::text(format!(
            "Wi-Fi '{}' is {} with signal strength {}.",
            w.ssid.unwrap_or_default(),
            w.state.unwrap_or_default(),
            w.signal.unwrap_or_default()
        )),
        Ok(_) => Reply::text("Could not retrieve complete Wi-Fi information."),
        Err(e) => {
            tracing::warn!("Wi-Fi query failed: {e}");
            Reply::text("Sorry, I couldn't get the Wi-Fi information.")
        }
    }
}

fn handle_greeting(_r: &mut Responder, _text: &str) -> Reply {
    Reply::text("Hello.")
}

fn handle_mute(r: &mut Responder, _text: &str) -> Reply {
    match r.host.set_mute(true) {
        Ok(()) => Reply::text("Audio muted."),
        Err(e) => {
            tracing::warn!("Mute failed: {e}");
            Reply::text("Sorry, I couldn't mute the audio.")
        }
    }
}

fn handle_unmute(r: &mut Responder, _text: &str) -> Reply {
    match r.host.set_mute(false) {
        Ok(()) => Reply::text("Audio unmuted."),
        Err(e) => {
            tracing::warn!("Unmute failed: {e}");
            Reply::text("Sorry, I couldn't unmute the audio.")
        }
    }
}

fn handle_fallback(_r: &mut Responder, _text: &str) -> Reply {
    Reply::text(FALLBACK_TEXT)
}

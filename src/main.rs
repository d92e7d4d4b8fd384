//! deskpet — terminal virtual-pet assistant.
//!
//! An animated text-art avatar that blinks and talks, a speech bubble with a
//! typewriter reveal, a single-line input, and a keyword responder over
//! system state (battery, CPU, memory, Wi-Fi) and small OS actions (launch
//! apps, mute audio, read the clipboard, run disk cleanup) — plus two tiny
//! text games.

mod animation;
mod bubble;
mod config;
mod host;
mod responder;
mod timing;
mod tui;
mod util;

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Terminal virtual-pet assistant.
#[derive(Parser, Debug)]
#[command(name = "deskpet", version, about)]
struct Cli {
    /// Idle sprite frame (text art)
    idle: PathBuf,
    /// Talking sprite frame (text art)
    talk: PathBuf,
    /// Blinking sprite frame (text art)
    blink: PathBuf,
    /// Log file path (defaults to ~/.deskpet/deskpet.log)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Startup contract: all three sprite files must exist before the terminal
    // is touched. One diagnostic line per missing file.
    let mut missing = false;
    for path in [&cli.idle, &cli.talk, &cli.blink] {
        if !path.exists() {
            eprintln!("Missing sprite file: {}", path.display());
            missing = true;
        }
    }
    if missing {
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("deskpet error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

#[tokio::main]
async fn run(cli: Cli) -> Result<()> {
    let _log_guard = init_logging(cli.log_file.as_deref())?;
    tracing::info!("deskpet v{VERSION} starting");

    let sprites = tui::SpriteSet::load(&cli.idle, &cli.talk, &cli.blink)?;
    tui::run(sprites).await
}

/// Route tracing to a file — the terminal belongs to the TUI.
fn init_logging(log_file: Option<&Path>) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let path = log_file
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config::deskpet_home().join("deskpet.log"));
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)?;

    let (writer, guard) = tracing_appender::non_blocking(file);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Ok(guard)
}

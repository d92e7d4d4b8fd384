//! Terminal Shell
//!
//! Hosts the avatar, bubble, and input line in a ratatui frame loop driven by
//! a tokio select over the crossterm event stream and fixed interval ticks:
//! frame redraw, autonomous blink, hourly summary, and the delayed quit after
//! a goodbye.

mod sprite;
mod ui;

pub use sprite::SpriteSet;

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::DefaultTerminal;

use crate::animation::AnimationController;
use crate::bubble::Bubble;
use crate::host::DesktopHost;
use crate::responder::{Responder, ShellAction};
use crate::timing::{BLINK_INTERVAL, FRAME_INTERVAL, QUIT_DELAY, SUMMARY_INTERVAL};

/// Everything the shell owns. All component state lives on this one task —
/// there is no shared-state locking anywhere in the app.
pub struct App {
    sprites: SpriteSet,
    avatar: AnimationController,
    bubble: Bubble,
    responder: Responder,
    input: String,
    quit_at: Option<Instant>,
    running: bool,
}

/// Enter the terminal, run the app to completion, restore the terminal.
pub async fn run(sprites: SpriteSet) -> Result<()> {
    let mut terminal = ratatui::init();
    let result = App::new(sprites).event_loop(&mut terminal).await;
    ratatui::restore();
    result
}

impl App {
    pub fn new(sprites: SpriteSet) -> Self {
        Self {
            sprites,
            avatar: AnimationController::new(),
            bubble: Bubble::new(),
            responder: Responder::new(Box::new(DesktopHost::new())),
            input: String::new(),
            quit_at: None,
            running: true,
        }
    }

    async fn event_loop(mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        let mut events = EventStream::new();
        let start = tokio::time::Instant::now();
        let mut frame_tick = tokio::time::interval(FRAME_INTERVAL);
        // interval() fires immediately; anchor the slow timers one period out
        // so the pet doesn't blink and report a summary at startup.
        let mut blink_tick = tokio::time::interval_at(start + BLINK_INTERVAL, BLINK_INTERVAL);
        let mut summary_tick = tokio::time::interval_at(start + SUMMARY_INTERVAL, SUMMARY_INTERVAL);

        tracing::info!("Shell started");
        terminal.draw(|frame| ui::draw(frame, &self))?;

        while self.running {
            tokio::select! {
                _ = frame_tick.tick() => {
                    let now = Instant::now();
                    self.avatar.tick(now);
                    self.bubble.tick(now);
                    if let Some(at) = self.quit_at
                        && now >= at
                    {
                        self.running = false;
                    }
                    terminal.draw(|frame| ui::draw(frame, &self))?;
                }
                _ = blink_tick.tick() => {
                    self.avatar.blink_once(Instant::now());
                }
                _ = summary_tick.tick() => {
                    self.show_summary();
                }
                maybe_event = events.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(e)) => tracing::warn!("Input stream error: {e}"),
                        None => self.running = false,
                    }
                    terminal.draw(|frame| ui::draw(frame, &self))?;
                }
            }
        }

        tracing::info!("Shell stopped");
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event
            && key.kind == KeyEventKind::Press
        {
            self.handle_key(key);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false;
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Esc => self.input.clear(),
            KeyCode::Char(c) => self.input.push(c),
            _ => {}
        }
    }

    /// Submit the input line: normalize, dispatch, talk, show the reply.
    fn submit(&mut self) {
        let text = self.input.trim().to_lowercase();
        self.input.clear();
        if text.is_empty() {
            return;
        }

        tracing::debug!(input = %text, "submitting");
        let reply = self.responder.respond(&text);

        let now = Instant::now();
        self.avatar.talk(now);
        self.bubble.show(reply.text, now);

        if reply.action == Some(ShellAction::Quit) {
            // Keep the goodbye on screen for the grace period before exiting.
            self.quit_at = Some(now + QUIT_DELAY);
            tracing::info!("Goodbye requested, quitting shortly");
        }
    }

    /// The unprompted status summary, on the hourly tick.
    fn show_summary(&mut self) {
        let summary = self.responder.summary();
        let now = Instant::now();
        self.avatar.talk(now);
        self.bubble.show(summary, now);
    }
}

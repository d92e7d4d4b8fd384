//! Sprite frame loading and selection.
//!
//! The avatar is three text-art frames (idle, talk, blink) loaded once at
//! startup. Frame dimensions drive the avatar pane's layout.

use std::path::Path;

use anyhow::{Context, Result};

use crate::animation::SpriteState;

/// The three avatar frames, pre-loaded and measured.
#[derive(Debug)]
pub struct SpriteSet {
    idle: String,
    talk: String,
    blink: String,
    width: u16,
    height: u16,
}

impl SpriteSet {
    pub fn load(idle: &Path, talk: &Path, blink: &Path) -> Result<Self> {
        let idle = load_frame(idle)?;
        let talk = load_frame(talk)?;
        let blink = load_frame(blink)?;

        let width = [&idle, &talk, &blink]
            .iter()
            .flat_map(|f| f.lines())
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0) as u16;
        let height = [&idle, &talk, &blink]
            .iter()
            .map(|f| f.lines().count())
            .max()
            .unwrap_or(0) as u16;

        Ok(Self {
            idle,
            talk,
            blink,
            width,
            height,
        })
    }

    /// The frame to render for a sprite state.
    pub fn frame(&self, state: SpriteState) -> &str {
        match state {
            SpriteState::Idle => &self.idle,
            SpriteState::Talking => &self.talk,
            SpriteState::Blinking => &self.blink,
        }
    }

    /// Widest line across all frames, in characters.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Tallest frame, in lines.
    pub fn height(&self) -> u16 {
        self.height
    }
}

fn load_frame(path: &Path) -> Result<String> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read sprite frame {}", path.display()))?;
    Ok(text.trim_end_matches('\n').to_string())
}

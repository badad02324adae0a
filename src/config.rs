//! Startup configuration from the command line.

use std::path::PathBuf;

use clap::Parser;

use crate::entities::{Size, INVADER_SIZE};
use crate::error::ConfigError;
use crate::formation::{COLUMNS, DANGER_LINE, ORIGIN, SPACING, STEP_X};
use crate::player::PLAYER_SIZE;

pub const MAX_FPS: u32 = 1000;

/// Largest accepted world dimension on either axis.
pub const MAX_WORLD_EXTENT: u32 = 16_384;

#[derive(Parser, Debug, Clone)]
#[command(name = "invaders")]
#[command(about = "Fixed-formation space shooter in the terminal")]
pub struct Args {
    /// Window (terminal) title
    #[arg(long, default_value = "Space Invaders")]
    pub title: String,

    /// World width in game units
    #[arg(long, default_value_t = 830)]
    pub width: u32,

    /// World height in game units
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Frame-rate cap
    #[arg(long, default_value_t = 60)]
    pub fps: u32,

    /// Write log records to this file (filter via RUST_LOG)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub title: String,
    pub world: Size,
    pub fps: u32,
    pub log_file: Option<PathBuf>,
}

/// Narrowest world the starting grid can take one step in.
pub fn min_world_width() -> u32 {
    let rightmost = ORIGIN.x + SPACING.x * (COLUMNS as i32 - 1) + INVADER_SIZE.width as i32;
    (rightmost + STEP_X) as u32
}

/// Shortest world that keeps the danger line above the player lane.
pub fn min_world_height() -> u32 {
    (DANGER_LINE + PLAYER_SIZE.height as i32 + 1) as u32
}

impl Args {
    pub fn into_config(self) -> Result<GameConfig, ConfigError> {
        if self.fps == 0 || self.fps > MAX_FPS {
            return Err(ConfigError::FrameRate {
                fps: self.fps,
                max: MAX_FPS,
            });
        }
        if self.width > MAX_WORLD_EXTENT || self.height > MAX_WORLD_EXTENT {
            return Err(ConfigError::WorldTooLarge {
                width: self.width,
                height: self.height,
                max: MAX_WORLD_EXTENT,
            });
        }
        if self.width < min_world_width() {
            return Err(ConfigError::WorldTooNarrow {
                width: self.width,
                min: min_world_width(),
            });
        }
        if self.height < min_world_height() {
            return Err(ConfigError::WorldTooShort {
                height: self.height,
                min: min_world_height(),
            });
        }
        Ok(GameConfig {
            title: self.title,
            world: Size::new(self.width, self.height),
            fps: self.fps,
            log_file: self.log_file,
        })
    }
}

//! Draw requests the simulation issues each frame.
//!
//! Implementors decide how a sprite looks; the game only hands over what to
//! draw and the world rectangle it occupies.

use std::io;

use crate::entities::{InvaderKind, Rect, Vec2};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sprite {
    Invader(InvaderKind),
    Player,
    Missile,
}

/// Full-screen background for each state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backdrop {
    Menu,
    Playfield,
    Victory,
    GameOver,
}

pub trait RenderSink {
    fn backdrop(&mut self, backdrop: Backdrop) -> io::Result<()>;

    fn sprite(&mut self, sprite: Sprite, rect: Rect) -> io::Result<()>;

    fn button(&mut self, label: &str, rect: Rect, hovered: bool) -> io::Result<()>;

    fn text(&mut self, at: Vec2, text: &str) -> io::Result<()>;
}

//! Test doubles for the input and render contracts.

#![allow(dead_code)]

use std::collections::HashSet;
use std::io;

use invaders::entities::{Rect, Vec2};
use invaders::input::{InputSource, LogicalKey, PointerEvent};
use invaders::render::{Backdrop, RenderSink, Sprite};

#[derive(Default)]
pub struct ScriptedInput {
    pub held: HashSet<LogicalKey>,
    pub pointer: Vec<PointerEvent>,
}

impl ScriptedInput {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn holding(keys: &[LogicalKey]) -> Self {
        Self {
            held: keys.iter().copied().collect(),
            pointer: Vec::new(),
        }
    }

    /// Queues a move onto `point` followed by a primary release there.
    pub fn click(&mut self, point: Vec2) {
        self.pointer.push(PointerEvent::Moved(point));
        self.pointer.push(PointerEvent::Released(point));
    }
}

impl InputSource for ScriptedInput {
    fn is_down(&self, key: LogicalKey) -> bool {
        self.held.contains(&key)
    }

    fn drain_pointer_events(&mut self) -> Vec<PointerEvent> {
        std::mem::take(&mut self.pointer)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Backdrop(Backdrop),
    Sprite(Sprite, Rect),
    Button(String, Rect, bool),
    Text(Vec2, String),
}

#[derive(Default)]
pub struct RecordingSink {
    pub calls: Vec<DrawCall>,
}

impl RecordingSink {
    pub fn sprites(&self, wanted: fn(&Sprite) -> bool) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Sprite(s, _) if wanted(s)))
            .count()
    }
}

impl RenderSink for RecordingSink {
    fn backdrop(&mut self, backdrop: Backdrop) -> io::Result<()> {
        self.calls.push(DrawCall::Backdrop(backdrop));
        Ok(())
    }

    fn sprite(&mut self, sprite: Sprite, rect: Rect) -> io::Result<()> {
        self.calls.push(DrawCall::Sprite(sprite, rect));
        Ok(())
    }

    fn button(&mut self, label: &str, rect: Rect, hovered: bool) -> io::Result<()> {
        self.calls.push(DrawCall::Button(label.to_string(), rect, hovered));
        Ok(())
    }

    fn text(&mut self, at: Vec2, text: &str) -> io::Result<()> {
        self.calls.push(DrawCall::Text(at, text.to_string()));
        Ok(())
    }
}

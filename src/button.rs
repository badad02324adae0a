//! Clickable menu buttons.

use crate::entities::{Rect, Size, Vec2};

/// What activating a button asks the game to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    StartGame,
    BackToMenu,
}

#[derive(Clone, Debug)]
pub struct Button {
    label: String,
    rect: Rect,
    hovered: bool,
    action: ButtonAction,
}

impl Button {
    /// `anchor` is the label's baseline origin; the clickable rectangle sits
    /// just above it, one unit wider on each side than `size`.
    pub fn new(anchor: Vec2, size: Size, label: impl Into<String>, action: ButtonAction) -> Self {
        let height = size.height as i32;
        let rect = Rect::new(
            Vec2::new(anchor.x - 1, anchor.y - (height - 1)),
            Size::new(size.width + 2, size.height),
        );
        Self {
            label: label.into(),
            rect,
            hovered: false,
            action,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn action(&self) -> ButtonAction {
        self.action
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub fn is_pointer_over(&self, point: Vec2) -> bool {
        self.rect.contains(point)
    }

    /// Activation happens on a primary-button release over the button.
    pub fn try_click(&self, point: Vec2) -> Option<ButtonAction> {
        self.is_pointer_over(point).then_some(self.action)
    }
}

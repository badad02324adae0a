//! What the simulation needs from an input device.

use crate::entities::Vec2;

/// The three keys the game reacts to during play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LogicalKey {
    MoveLeft,
    MoveRight,
    Shoot,
}

/// Pointer activity in world coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEvent {
    /// Motion with or without a button held.
    Moved(Vec2),
    /// The primary button was released at this point.
    Released(Vec2),
}

pub trait InputSource {
    /// Level-triggered: true every frame the key is down.
    fn is_down(&self, key: LogicalKey) -> bool;

    /// Pointer events since the previous call, oldest first.
    fn drain_pointer_events(&mut self) -> Vec<PointerEvent>;
}

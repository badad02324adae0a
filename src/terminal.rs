//! Terminal input: turns crossterm events into held keys and world-space
//! pointer events.
//!
//! Held-key model: instead of acting on each key event individually, we
//! record the frame of the last press/repeat for every key.  A key counts as
//! down while that record is fresh (within `HOLD_WINDOW` frames).
//!
//! Works on two classes of terminal:
//! * **Keyboard-enhancement capable** (kitty protocol): proper
//!   `Press` / `Repeat` / `Release` events, so keys are removed on release.
//! * **Classic terminals**: only `Press` events (OS key-repeat shows as
//!   repeated `Press`).  Keys expire after `HOLD_WINDOW` frames of silence;
//!   at 60 FPS that is ≈133 ms, longer than the OS repeat interval, so the
//!   key stays live while it keeps generating repeats.

use std::collections::HashMap;
use std::sync::mpsc;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use invaders::input::{InputSource, LogicalKey, PointerEvent};

use crate::display::Viewport;

/// A key is considered held if its last press/repeat arrived within this
/// many frames.
const HOLD_WINDOW: u64 = 8;

pub struct TerminalInput {
    key_frame: HashMap<KeyCode, u64>,
    pointer_events: Vec<PointerEvent>,
    frame: u64,
    quit: bool,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self {
            key_frame: HashMap::new(),
            pointer_events: Vec::new(),
            frame: 0,
            quit: false,
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Drains every pending terminal event (non-blocking) for this frame.
    pub fn pump(&mut self, rx: &mpsc::Receiver<Event>, viewport: &Viewport) {
        self.frame += 1;
        while let Ok(event) = rx.try_recv() {
            match event {
                Event::Key(key) => self.on_key(key),
                Event::Mouse(mouse) => self.on_mouse(mouse, viewport),
                _ => {}
            }
        }
    }

    fn on_key(&mut self, KeyEvent { code, kind, modifiers, .. }: KeyEvent) {
        match kind {
            KeyEventKind::Press => {
                self.key_frame.insert(code, self.frame);
                match code {
                    KeyCode::Esc => self.quit = true,
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        self.quit = true
                    }
                    _ => {}
                }
            }
            KeyEventKind::Repeat => {
                self.key_frame.insert(code, self.frame);
            }
            KeyEventKind::Release => {
                self.key_frame.remove(&code);
            }
        }
    }

    fn on_mouse(&mut self, mouse: MouseEvent, viewport: &Viewport) {
        let point = viewport.to_world(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.pointer_events.push(PointerEvent::Moved(point));
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.pointer_events.push(PointerEvent::Released(point));
            }
            _ => {}
        }
    }

    fn is_held(&self, key: &KeyCode) -> bool {
        self.key_frame
            .get(key)
            .map(|&last| self.frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    fn any_held(&self, keys: &[KeyCode]) -> bool {
        keys.iter().any(|k| self.is_held(k))
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for TerminalInput {
    fn is_down(&self, key: LogicalKey) -> bool {
        match key {
            LogicalKey::MoveLeft => self.any_held(&[
                KeyCode::Left,
                KeyCode::Char('q'),
                KeyCode::Char('Q'),
                KeyCode::Char('a'),
                KeyCode::Char('A'),
            ]),
            LogicalKey::MoveRight => {
                self.any_held(&[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')])
            }
            LogicalKey::Shoot => self.any_held(&[
                KeyCode::Char(' '),
                KeyCode::Up,
                KeyCode::Char('z'),
                KeyCode::Char('Z'),
            ]),
        }
    }

    fn drain_pointer_events(&mut self) -> Vec<PointerEvent> {
        std::mem::take(&mut self.pointer_events)
    }
}

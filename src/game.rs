//! Top-level state machine: Menu → Playing → Victory | GameOver → Menu.
//!
//! The `Playing` variant owns the round's formation, so entering any other
//! state drops it and starting a round always builds a fresh one.  A
//! transition takes effect inside the frame that detects it.

use std::io;
use std::time::Instant;

use crate::button::{Button, ButtonAction};
use crate::entities::{GameState, Size, Vec2};
use crate::formation::Formation;
use crate::input::{InputSource, PointerEvent};
use crate::render::{Backdrop, RenderSink, Sprite};

pub const VERSION_LABEL: &str = "Version: 1.0";
pub const VERSION_POSITION: Vec2 = Vec2::new(10, 580);

const START_ANCHOR: Vec2 = Vec2::new(375, 350);
const START_SIZE: Size = Size::new(90, 16);
const RETURN_ANCHOR: Vec2 = Vec2::new(375, 400);
const RETURN_SIZE: Size = Size::new(110, 16);

enum Phase {
    Menu,
    Playing(Box<Formation>),
    Victory,
    GameOver,
}

pub struct Game {
    world: Size,
    phase: Phase,
    buttons: Vec<Button>,
    pointer: Vec2,
}

impl Game {
    pub fn new(world: Size) -> Self {
        Self {
            world,
            phase: Phase::Menu,
            buttons: menu_buttons(),
            pointer: Vec2::default(),
        }
    }

    pub fn state(&self) -> GameState {
        match self.phase {
            Phase::Menu => GameState::Menu,
            Phase::Playing(_) => GameState::Playing,
            Phase::Victory => GameState::Victory,
            Phase::GameOver => GameState::GameOver,
        }
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn formation(&self) -> Option<&Formation> {
        match &self.phase {
            Phase::Playing(formation) => Some(&**formation),
            _ => None,
        }
    }

    pub fn formation_mut(&mut self) -> Option<&mut Formation> {
        match &mut self.phase {
            Phase::Playing(formation) => Some(&mut **formation),
            _ => None,
        }
    }

    // ── Per-frame dispatch ───────────────────────────────────────────────────

    pub fn frame<I: InputSource + ?Sized>(&mut self, input: &mut I, now: Instant) {
        match self.state() {
            GameState::Menu | GameState::Victory | GameState::GameOver => {
                self.screen_with_buttons(input)
            }
            GameState::Playing => self.play(input, now),
        }
    }

    /// Menu and end screens: pointer handling, activation, hover.
    fn screen_with_buttons<I: InputSource + ?Sized>(&mut self, input: &mut I) {
        if let Some(action) = self.process_events(input) {
            self.activate(action);
        }
        self.update_hover();
    }

    fn play<I: InputSource + ?Sized>(&mut self, input: &mut I, now: Instant) {
        // Clicks mid-round are discarded; only the pointer position is kept.
        for event in input.drain_pointer_events() {
            if let PointerEvent::Moved(point) = event {
                self.pointer = point;
            }
        }

        let Phase::Playing(formation) = &mut self.phase else {
            return;
        };
        formation.play(&*input, now);

        let next = if formation.reached_danger_line() {
            Some(Phase::GameOver)
        } else if formation.invader_count() == 0 {
            Some(Phase::Victory)
        } else {
            None
        };
        if let Some(next) = next {
            self.enter_end_screen(next);
        }
    }

    // ── Transitions ──────────────────────────────────────────────────────────

    fn activate(&mut self, action: ButtonAction) {
        match action {
            ButtonAction::StartGame => self.enter_playing(),
            ButtonAction::BackToMenu => self.enter_menu(),
        }
    }

    fn enter_playing(&mut self) {
        let mut formation = Formation::new(self.world);
        formation.populate();
        self.phase = Phase::Playing(Box::new(formation));
        self.buttons.clear();
        log::info!("state -> {:?}", self.state());
    }

    fn enter_end_screen(&mut self, phase: Phase) {
        self.phase = phase;
        self.buttons = vec![Button::new(
            RETURN_ANCHOR,
            RETURN_SIZE,
            "Back to menu",
            ButtonAction::BackToMenu,
        )];
        log::info!("state -> {:?}", self.state());
    }

    fn enter_menu(&mut self) {
        self.phase = Phase::Menu;
        self.buttons = menu_buttons();
        log::info!("state -> {:?}", self.state());
    }

    // ── Pointer handling ─────────────────────────────────────────────────────

    /// Tracks the pointer and returns the first button activated this frame.
    fn process_events<I: InputSource + ?Sized>(&mut self, input: &mut I) -> Option<ButtonAction> {
        let mut activated = None;
        for event in input.drain_pointer_events() {
            match event {
                PointerEvent::Moved(point) => self.pointer = point,
                PointerEvent::Released(point) => {
                    if activated.is_none() {
                        activated = self.buttons.iter().find_map(|b| b.try_click(point));
                    }
                }
            }
        }
        activated
    }

    fn update_hover(&mut self) {
        let pointer = self.pointer;
        for button in &mut self.buttons {
            button.set_hovered(button.is_pointer_over(pointer));
        }
    }

    // ── Rendering ────────────────────────────────────────────────────────────

    pub fn render<S: RenderSink + ?Sized>(&self, sink: &mut S) -> io::Result<()> {
        match &self.phase {
            Phase::Menu => {
                sink.backdrop(Backdrop::Menu)?;
                self.render_buttons(sink)?;
                sink.text(VERSION_POSITION, VERSION_LABEL)?;
            }
            Phase::Playing(formation) => {
                sink.backdrop(Backdrop::Playfield)?;
                for invader in formation.invaders() {
                    sink.sprite(Sprite::Invader(invader.kind()), invader.footprint())?;
                }
                let player = formation.player();
                sink.sprite(Sprite::Player, player.rect())?;
                for projectile in player.projectiles() {
                    sink.sprite(Sprite::Missile, projectile.rect())?;
                }
            }
            Phase::Victory => {
                sink.backdrop(Backdrop::Victory)?;
                self.render_buttons(sink)?;
            }
            Phase::GameOver => {
                sink.backdrop(Backdrop::GameOver)?;
                self.render_buttons(sink)?;
            }
        }
        Ok(())
    }

    fn render_buttons<S: RenderSink + ?Sized>(&self, sink: &mut S) -> io::Result<()> {
        for button in &self.buttons {
            sink.button(button.label(), button.rect(), button.is_hovered())?;
        }
        Ok(())
    }
}

fn menu_buttons() -> Vec<Button> {
    vec![Button::new(
        START_ANCHOR,
        START_SIZE,
        "Start Game",
        ButtonAction::StartGame,
    )]
}

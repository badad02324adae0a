//! Formation controller: the invader grid, its sweep-and-drop movement, and
//! the player ship it fights against.
//!
//! The whole grid moves as one body.  Each tick it either steps sideways by
//! `STEP_X` or, when that step would cross the travel limit, drops by
//! `STEP_Y` and reverses.  Bounds are recomputed from live invaders only, so
//! a thinned-out formation travels further before turning.

use std::time::Instant;

use crate::entities::{Direction, Invader, InvaderKind, Size, Vec2};
use crate::input::{InputSource, LogicalKey};
use crate::player::{Player, TravelBounds, PLAYER_SIZE};

// ── Tuning ───────────────────────────────────────────────────────────────────

pub const STEP_X: i32 = 10;
pub const STEP_Y: i32 = 20;

pub const ROWS: usize = 3;
pub const COLUMNS: usize = 6;
pub const SPACING: Vec2 = Vec2::new(80, 60);
pub const ORIGIN: Vec2 = Vec2::new(10, 10);

/// Horizontal distance the ship covers per tick while a move key is held.
pub const PLAYER_STEP: i32 = 5;

/// An invader at or below this Y ends the round.
pub const DANGER_LINE: i32 = 490;

// ── Per-tick decisions ───────────────────────────────────────────────────────

/// What the formation did on a movement update.  Exactly one per tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    Step,
    Drop,
}

/// The single player action taken in a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerCommand {
    Move(Vec2),
    Shoot,
}

impl PlayerCommand {
    /// Only one key acts per tick: left wins over right, right over shoot.
    pub fn from_input<I: InputSource + ?Sized>(input: &I) -> Option<Self> {
        if input.is_down(LogicalKey::MoveLeft) {
            Some(PlayerCommand::Move(Vec2::new(-PLAYER_STEP, 0)))
        } else if input.is_down(LogicalKey::MoveRight) {
            Some(PlayerCommand::Move(Vec2::new(PLAYER_STEP, 0)))
        } else if input.is_down(LogicalKey::Shoot) {
            Some(PlayerCommand::Shoot)
        } else {
            None
        }
    }
}

// ── Formation ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Formation {
    rows: Vec<Vec<Invader>>,
    direction: Direction,
    travel_limit: i32,
    player: Player,
}

impl Formation {
    /// An empty formation for a world of the given size, with the player
    /// centred on the bottom edge.  Call `populate` to spawn the grid.
    pub fn new(world: Size) -> Self {
        let width = i32::try_from(world.width).unwrap_or(i32::MAX);
        let height = i32::try_from(world.height).unwrap_or(i32::MAX);
        let player_x = (width - PLAYER_SIZE.width as i32 / 2) / 2;
        let player_y = height - PLAYER_SIZE.height as i32;
        let player = Player::new(
            Vec2::new(player_x, player_y),
            TravelBounds { min: 0, max: width },
        );
        Self {
            rows: Vec::new(),
            direction: Direction::Right,
            travel_limit: width,
            player,
        }
    }

    /// Replaces the grid with a fresh `ROWS` x `COLUMNS` block.
    pub fn populate(&mut self) {
        self.rows = (0..ROWS)
            .map(|row| {
                let kind = InvaderKind::for_row(row);
                let y = ORIGIN.y + SPACING.y * row as i32;
                (0..COLUMNS)
                    .map(|col| {
                        let x = ORIGIN.x + SPACING.x * col as i32;
                        Invader::new(Vec2::new(x, y), kind)
                    })
                    .collect()
            })
            .collect();
        self.direction = Direction::Right;
    }

    /// Installs an arbitrary grid, keeping the current direction.
    pub fn replace_invaders(&mut self, rows: Vec<Vec<Invader>>) {
        self.rows = rows;
    }

    pub fn rows(&self) -> &[Vec<Invader>] {
        &self.rows
    }

    pub fn invaders(&self) -> impl Iterator<Item = &Invader> {
        self.rows.iter().flatten()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Min and max leading-edge X across live invaders for the current
    /// direction, or `None` when the grid is empty.
    pub fn bounds(&self) -> Option<(i32, i32)> {
        self.invaders()
            .map(|inv| inv.leading_edge(self.direction).x)
            .fold(None, |acc, x| match acc {
                None => Some((x, x)),
                Some((min, max)) => Some((min.min(x), max.max(x))),
            })
    }

    pub fn update_movement(&mut self) -> Advance {
        let Some((min, max)) = self.bounds() else {
            return Advance::Step;
        };
        let blocked = match self.direction {
            Direction::Right => max + STEP_X > self.travel_limit,
            Direction::Left => min - STEP_X < 0,
        };
        if blocked {
            self.move_all(Vec2::new(0, STEP_Y));
            self.direction = self.direction.reversed();
            log::debug!("formation dropped, now heading {:?}", self.direction);
            Advance::Drop
        } else {
            self.move_all(Vec2::new(STEP_X * self.direction.sign(), 0));
            Advance::Step
        }
    }

    fn move_all(&mut self, delta: Vec2) {
        for invader in self.rows.iter_mut().flatten() {
            invader.move_by(delta);
        }
    }

    /// Removes every invader a missile has reached, consuming one missile
    /// per kill.  Emptied rows stay in place.  Returns the number removed.
    pub fn kill_invaders(&mut self) -> usize {
        let player = &mut self.player;
        let mut killed = 0;
        for row in &mut self.rows {
            row.retain(|invader| {
                let hit = player.is_invader_hit(&invader.footprint());
                if hit {
                    killed += 1;
                }
                !hit
            });
        }
        if killed > 0 {
            log::debug!("{} invader(s) destroyed, {} left", killed, self.invader_count());
        }
        killed
    }

    /// Largest Y among live invaders, the one closest to the player.
    pub fn lowest_invader_y(&self) -> Option<i32> {
        self.invaders().map(|inv| inv.position().y).max()
    }

    pub fn invader_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    pub fn reached_danger_line(&self) -> bool {
        self.lowest_invader_y()
            .map(|y| y >= DANGER_LINE)
            .unwrap_or(false)
    }

    pub fn apply_command(&mut self, command: PlayerCommand, now: Instant) {
        match command {
            PlayerCommand::Move(delta) => {
                self.player.move_by(delta);
            }
            PlayerCommand::Shoot => {
                self.player.shoot(now);
            }
        }
    }

    /// One simulation tick: resolve hits, advance missiles, move the grid,
    /// then act on player input.
    pub fn play<I: InputSource + ?Sized>(&mut self, input: &I, now: Instant) {
        self.kill_invaders();
        self.player.advance_projectiles();
        self.update_movement();
        if let Some(command) = PlayerCommand::from_input(input) {
            self.apply_command(command, now);
        }
    }
}

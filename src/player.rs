//! The player ship: a lane-bound entity with a rate-limited missile pool.

use std::time::{Duration, Instant};

use crate::entities::{Entity, Projectile, Rect, Size, Vec2};

pub const PLAYER_SIZE: Size = Size::new(40, 24);

/// Minimum wall-clock time between two shots.
pub const SHOOT_COOLDOWN: Duration = Duration::from_millis(500);

pub const MAX_PROJECTILES: usize = 10;

/// Spawn offset of a new missile relative to the ship's position.
pub const MUZZLE_OFFSET: Vec2 = Vec2::new(0, -10);

/// Inclusive horizontal interval the ship must stay within.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TravelBounds {
    pub min: i32,
    pub max: i32,
}

#[derive(Clone, Debug)]
pub struct Player {
    body: Entity,
    bounds: TravelBounds,
    last_shot: Option<Instant>,
    projectiles: Vec<Projectile>,
}

impl Player {
    pub fn new(position: Vec2, bounds: TravelBounds) -> Self {
        Self {
            body: Entity::new(position, PLAYER_SIZE),
            bounds,
            last_shot: None,
            projectiles: Vec::new(),
        }
    }

    pub fn position(&self) -> Vec2 {
        self.body.position()
    }

    pub fn rect(&self) -> Rect {
        self.body.rect()
    }

    pub fn bounds(&self) -> TravelBounds {
        self.bounds
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    /// Moves by `delta` unless the result would leave the travel bounds, in
    /// which case the whole move is dropped.  Returns whether it moved.
    pub fn move_by(&mut self, delta: Vec2) -> bool {
        let target = self.body.position() + delta;
        let width = self.body.size().width as i32;
        if target.x < self.bounds.min || target.x + width > self.bounds.max {
            return false;
        }
        self.body.set_position(target);
        true
    }

    /// The pool check is `<=`, so one missile beyond `MAX_PROJECTILES` can be
    /// live before shooting blocks.
    pub fn can_shoot(&self, now: Instant) -> bool {
        let cooled = self
            .last_shot
            .map(|at| now.saturating_duration_since(at) >= SHOOT_COOLDOWN)
            .unwrap_or(true);
        cooled && self.projectiles.len() <= MAX_PROJECTILES
    }

    /// Fires a missile if allowed.  Returns whether one was fired.
    pub fn shoot(&mut self, now: Instant) -> bool {
        if !self.can_shoot(now) {
            return false;
        }
        self.last_shot = Some(now);
        self.projectiles
            .push(Projectile::new(self.body.position() + MUZZLE_OFFSET));
        log::trace!("shot fired, {} missiles live", self.projectiles.len());
        true
    }

    /// Drops missiles already above the top edge, then moves the rest one step.
    pub fn advance_projectiles(&mut self) {
        self.projectiles.retain(|p| !p.is_off_screen());
        for projectile in &mut self.projectiles {
            projectile.advance();
        }
    }

    /// Consumes the first missile overlapping `target`, if any.
    pub fn is_invader_hit(&mut self, target: &Rect) -> bool {
        match self.projectiles.iter().position(|p| p.is_colliding(target)) {
            Some(index) => {
                self.projectiles.remove(index);
                true
            }
            None => false,
        }
    }
}

//! Game entity types: world geometry plus the small structs that carry it.
//!
//! Coordinates are world units with the origin at the top-left corner and
//! Y growing downward.  Every entity's position is its top-left corner.

use std::ops::{Add, AddAssign};

// ── Geometry ─────────────────────────────────────────────────────────────────

/// A 2D signed integer coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

impl Vec2 {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

/// Non-negative extent of an entity's occupied rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub position: Vec2,
    pub size: Size,
}

impl Rect {
    pub const fn new(position: Vec2, size: Size) -> Self {
        Self { position, size }
    }

    pub fn left(&self) -> i32 {
        self.position.x
    }

    pub fn right(&self) -> i32 {
        self.position.x + self.size.width as i32
    }

    pub fn top(&self) -> i32 {
        self.position.y
    }

    pub fn bottom(&self) -> i32 {
        self.position.y + self.size.height as i32
    }

    /// Bounding-box overlap, inclusive at the boundaries: rectangles whose
    /// edges merely touch count as overlapping.
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(self.right() < other.left()
            || self.left() > other.right()
            || self.bottom() < other.top()
            || self.top() > other.bottom())
    }

    /// Inclusive point containment.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }
}

// ── Entity ───────────────────────────────────────────────────────────────────

/// Position plus a fixed per-kind size; the movement and collision primitive
/// shared by every on-screen object.
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    position: Vec2,
    size: Size,
}

impl Entity {
    pub fn new(position: Vec2, size: Size) -> Self {
        Self { position, size }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Absolute placement.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.position, self.size)
    }

    pub fn is_colliding(&self, other: &Rect) -> bool {
        self.rect().overlaps(other)
    }
}

// ── Projectiles ──────────────────────────────────────────────────────────────

pub const PROJECTILE_SIZE: Size = Size::new(4, 12);

/// Upward distance covered per tick.
pub const PROJECTILE_STEP: f32 = 7.5;

/// A player missile travelling straight up.
///
/// The vertical position is tracked fractionally so the 7.5-unit step does
/// not drift; the entity's integer position is its floor.
#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    body: Entity,
    y: f32,
}

impl Projectile {
    pub fn new(position: Vec2) -> Self {
        Self {
            body: Entity::new(position, PROJECTILE_SIZE),
            y: position.y as f32,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.body.position()
    }

    pub fn rect(&self) -> Rect {
        self.body.rect()
    }

    pub fn advance(&mut self) {
        self.y -= PROJECTILE_STEP;
        let x = self.body.position().x;
        self.body.set_position(Vec2::new(x, self.y.floor() as i32));
    }

    pub fn is_off_screen(&self) -> bool {
        self.y < 0.0
    }

    pub fn is_colliding(&self, other: &Rect) -> bool {
        self.body.is_colliding(other)
    }
}

// ── Invaders ─────────────────────────────────────────────────────────────────

pub const INVADER_SIZE: Size = Size::new(40, 30);

/// Visual variant; the formation assigns one kind per row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvaderKind {
    Squid,
    Crab,
    Octopus,
}

impl InvaderKind {
    pub fn for_row(row: usize) -> Self {
        match row % 3 {
            0 => InvaderKind::Squid,
            1 => InvaderKind::Crab,
            _ => InvaderKind::Octopus,
        }
    }
}

/// Horizontal travel direction of the formation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn sign(self) -> i32 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Invader {
    body: Entity,
    kind: InvaderKind,
}

impl Invader {
    pub fn new(position: Vec2, kind: InvaderKind) -> Self {
        Self {
            body: Entity::new(position, INVADER_SIZE),
            kind,
        }
    }

    pub fn kind(&self) -> InvaderKind {
        self.kind
    }

    pub fn position(&self) -> Vec2 {
        self.body.position()
    }

    /// Leading edge in the direction of travel: the right edge when moving
    /// right, the left edge (the position itself) when moving left.
    pub fn leading_edge(&self, direction: Direction) -> Vec2 {
        match direction {
            Direction::Right => self.position() + Vec2::new(self.body.size().width as i32, 0),
            Direction::Left => self.position(),
        }
    }

    /// Relative displacement.
    pub fn move_by(&mut self, delta: Vec2) {
        let position = self.body.position() + delta;
        self.body.set_position(position);
    }

    pub fn footprint(&self) -> Rect {
        self.body.rect()
    }
}

// ── Game state ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    Menu,
    Playing,
    Victory,
    GameOver,
}

use std::time::{Duration, Instant};

use invaders::entities::{Rect, Size, Vec2, PROJECTILE_SIZE};
use invaders::player::*;

fn make_player() -> Player {
    Player::new(Vec2::new(100, 500), TravelBounds { min: 0, max: 300 })
}

/// Fires `count` shots, each a full cooldown after the previous one.
/// Returns the time of the last shot.
fn fire_spaced(player: &mut Player, start: Instant, count: u32) -> Instant {
    let mut now = start;
    for i in 0..count {
        now = start + SHOOT_COOLDOWN * i;
        assert!(player.shoot(now), "shot {} refused", i);
    }
    now
}

// ── Movement ──────────────────────────────────────────────────────────────────

#[test]
fn move_within_bounds_applies_delta() {
    let mut p = make_player();
    assert!(p.move_by(Vec2::new(-5, 0)));
    assert_eq!(p.position(), Vec2::new(95, 500));
    assert!(p.move_by(Vec2::new(5, 0)));
    assert_eq!(p.position(), Vec2::new(100, 500));
}

#[test]
fn move_to_exact_edges_is_allowed() {
    let mut p = Player::new(Vec2::new(5, 0), TravelBounds { min: 0, max: 300 });
    assert!(p.move_by(Vec2::new(-5, 0)));
    assert_eq!(p.position().x, 0);

    let right_edge = 300 - PLAYER_SIZE.width as i32;
    let mut p = Player::new(Vec2::new(right_edge - 5, 0), TravelBounds { min: 0, max: 300 });
    assert!(p.move_by(Vec2::new(5, 0)));
    assert_eq!(p.position().x, right_edge);
}

#[test]
fn overshooting_move_is_rejected_not_clamped() {
    let mut p = Player::new(Vec2::new(3, 0), TravelBounds { min: 0, max: 300 });
    assert!(!p.move_by(Vec2::new(-5, 0)));
    assert_eq!(p.position(), Vec2::new(3, 0));

    let right_edge = 300 - PLAYER_SIZE.width as i32;
    let mut p = Player::new(Vec2::new(right_edge - 2, 0), TravelBounds { min: 0, max: 300 });
    assert!(!p.move_by(Vec2::new(5, 0)));
    assert_eq!(p.position().x, right_edge - 2);
}

// ── Shooting ──────────────────────────────────────────────────────────────────

#[test]
fn first_shot_is_always_allowed() {
    let p = make_player();
    assert!(p.can_shoot(Instant::now()));
}

#[test]
fn shot_spawns_missile_above_ship() {
    let mut p = make_player();
    assert!(p.shoot(Instant::now()));
    assert_eq!(p.projectiles().len(), 1);
    assert_eq!(p.projectiles()[0].position(), Vec2::new(100, 490));
}

#[test]
fn cooldown_blocks_second_shot_within_half_second() {
    let mut p = make_player();
    let t0 = Instant::now();
    assert!(p.can_shoot(t0));
    assert!(p.shoot(t0));
    assert_eq!(p.projectiles().len(), 1);

    let soon = t0 + Duration::from_millis(499);
    assert!(!p.can_shoot(soon));
    assert!(!p.shoot(soon));
    assert_eq!(p.projectiles().len(), 1);

    assert!(p.can_shoot(t0 + SHOOT_COOLDOWN));
}

#[test]
fn capacity_allows_one_missile_past_the_cap() {
    let mut p = make_player();
    let t0 = Instant::now();

    let last = fire_spaced(&mut p, t0, MAX_PROJECTILES as u32);
    assert_eq!(p.projectiles().len(), MAX_PROJECTILES);

    // Exactly at the cap the `<=` check still lets one more through.
    let next = last + SHOOT_COOLDOWN;
    assert!(p.can_shoot(next));
    assert!(p.shoot(next));
    assert_eq!(p.projectiles().len(), MAX_PROJECTILES + 1);

    let after = next + SHOOT_COOLDOWN;
    assert!(!p.can_shoot(after));
    assert!(!p.shoot(after));
    assert_eq!(p.projectiles().len(), MAX_PROJECTILES + 1);
}

// ── Missile lifecycle ─────────────────────────────────────────────────────────

#[test]
fn advance_moves_every_missile() {
    let mut p = make_player();
    let t0 = Instant::now();
    p.shoot(t0);
    p.move_by(Vec2::new(50, 0));
    p.shoot(t0 + SHOOT_COOLDOWN);

    p.advance_projectiles();
    let ys: Vec<i32> = p.projectiles().iter().map(|m| m.position().y).collect();
    assert_eq!(ys, vec![482, 482]); // 490 - 7.5, floored
}

#[test]
fn off_screen_missile_is_pruned_on_next_pass() {
    let mut p = Player::new(Vec2::new(100, 15), TravelBounds { min: 0, max: 300 });
    p.shoot(Instant::now()); // spawns at y = 5
    p.advance_projectiles(); // y = -2.5, now off screen
    assert_eq!(p.projectiles().len(), 1);
    assert!(p.projectiles()[0].is_off_screen());

    p.advance_projectiles();
    assert!(p.projectiles().is_empty());

    // Nothing left to hit with.
    let target = Rect::new(Vec2::new(90, -20), Size::new(40, 40));
    assert!(!p.is_invader_hit(&target));
}

#[test]
fn hit_consumes_exactly_one_missile() {
    let mut p = make_player();
    let t0 = Instant::now();
    p.shoot(t0);
    p.shoot(t0 + SHOOT_COOLDOWN);
    assert_eq!(p.projectiles().len(), 2);

    // Both missiles sit on the same spot; only one is spent per call.
    let target = Rect::new(Vec2::new(100, 480), Size::new(40, 30));
    assert!(p.is_invader_hit(&target));
    assert_eq!(p.projectiles().len(), 1);
    assert!(p.is_invader_hit(&target));
    assert!(p.projectiles().is_empty());
    assert!(!p.is_invader_hit(&target));
}

#[test]
fn miss_leaves_missiles_untouched() {
    let mut p = make_player();
    p.shoot(Instant::now());
    let far = Rect::new(Vec2::new(250, 0), Size::new(10, 10));
    assert!(!p.is_invader_hit(&far));
    assert_eq!(p.projectiles().len(), 1);
    assert_eq!(p.projectiles()[0].rect().size, PROJECTILE_SIZE);
}

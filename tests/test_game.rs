use fleet_defense::entities::{Alien, Bullet, Rect};
use fleet_defense::fleet::build_fleet;
use fleet_defense::game::{Game, GameMode, HIT_FREEZE_TICKS};

use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_game() -> Game {
    let mut rng = StdRng::seed_from_u64(42);
    Game::new(100.0, 40.0, 0, &mut rng)
}

/// An alien parked on top of the ship, to force a contact this tick.
fn contact_alien(game: &Game) -> Alien {
    Alien::new(&game.settings, game.ship.rect.x, game.ship.rect.y)
}

fn bullet_at(x: f64, y: f64) -> Bullet {
    Bullet {
        rect: Rect::new(x, y, 1.0, 1.0),
    }
}

// ── Idle ──────────────────────────────────────────────────────────────────────

#[test]
fn new_game_is_idle_and_inert() {
    let mut game = make_game();
    assert_eq!(game.mode, GameMode::Idle);
    assert!(game.fleet.is_empty());

    game.fire();
    assert!(game.bullets.is_empty()); // fire is Active-only

    game.toggle_pause(); // invalid transition: silently ignored
    assert_eq!(game.mode, GameMode::Idle);

    game.tick(); // nothing simulates outside Active
    assert!(game.fleet.is_empty());
}

#[test]
fn start_game_builds_the_session() {
    let mut game = make_game();
    game.start_game();

    assert_eq!(game.mode, GameMode::Active);
    assert_eq!(game.fleet.len(), build_fleet(&game.settings).len());
    assert!(game.bullets.is_empty());
    assert_eq!(game.stats.score, 0);
    assert_eq!(game.stats.level, 1);
    assert_eq!(game.stats.ships_left, game.settings.ship_limit);
    assert_eq!(game.ship.rect.mid_x(), 50.0);
}

// ── Pause ─────────────────────────────────────────────────────────────────────

#[test]
fn pause_freezes_and_resumes() {
    let mut game = make_game();
    game.start_game();

    game.toggle_pause();
    assert_eq!(game.mode, GameMode::Paused);

    game.set_movement(false, true);
    let x0 = game.ship.rect.x;
    let fleet_x0 = game.fleet[0].rect.x;
    game.tick();
    assert_eq!(game.ship.rect.x, x0); // no motion while paused
    assert_eq!(game.fleet[0].rect.x, fleet_x0);

    game.toggle_pause();
    assert_eq!(game.mode, GameMode::Active);
    game.tick();
    assert_ne!(game.ship.rect.x, x0);
}

#[test]
fn pause_is_ignored_when_game_over() {
    let mut game = make_game();
    game.mode = GameMode::GameOver;
    game.toggle_pause();
    assert_eq!(game.mode, GameMode::GameOver);
}

// ── Restart ───────────────────────────────────────────────────────────────────

#[test]
fn restart_from_game_over_resets_progress_but_not_high_score() {
    let mut game = make_game();
    game.start_game();
    game.stats.score = 10;
    game.stats.high_score = 77;
    game.settings.increase_speed();
    game.mode = GameMode::GameOver;

    game.start_game();

    assert_eq!(game.mode, GameMode::Active);
    assert_eq!(game.stats.score, 0);
    assert_eq!(game.stats.level, 1);
    assert_eq!(game.stats.high_score, 77);
    assert_eq!(game.settings.dynamic.alien_points, 50); // dynamic reset
}

// ── Firing ────────────────────────────────────────────────────────────────────

#[test]
fn fire_caps_at_bullets_allowed() {
    let mut game = make_game();
    game.start_game();

    for _ in 0..game.settings.dynamic.bullets_allowed {
        game.fire();
    }
    assert_eq!(game.bullets.len(), 3);

    game.fire(); // 4th is a no-op
    assert_eq!(game.bullets.len(), 3);
}

#[test]
fn fire_is_a_noop_during_the_hit_freeze() {
    let mut game = make_game();
    game.start_game();
    game.freeze_ticks = 5;

    game.fire();
    assert!(game.bullets.is_empty());
}

// ── Life loss ─────────────────────────────────────────────────────────────────

#[test]
fn ship_hit_with_ships_remaining_rebuilds_and_freezes() {
    let mut game = make_game();
    game.start_game();
    assert_eq!(game.stats.ships_left, 2);

    game.fleet = vec![contact_alien(&game)];
    game.bullets = vec![bullet_at(80.0, 20.0)];
    game.ship.rect.x = 10.0;
    game.tick();

    assert_eq!(game.stats.ships_left, 1);
    assert_eq!(game.mode, GameMode::Active);
    assert_eq!(game.fleet.len(), build_fleet(&game.settings).len());
    assert!(game.bullets.is_empty());
    assert_eq!(game.ship.rect.mid_x(), 50.0); // recentered
    assert_eq!(game.freeze_ticks, HIT_FREEZE_TICKS);
}

#[test]
fn losing_the_last_ship_ends_the_game_without_rebuilding() {
    let mut game = make_game();
    game.start_game();
    game.stats.ships_left = 1;

    game.fleet = vec![contact_alien(&game)];
    game.tick();

    assert_eq!(game.mode, GameMode::GameOver);
    assert_eq!(game.stats.ships_left, 0);
    assert_eq!(game.fleet.len(), 1); // no rebuild
}

#[test]
fn freeze_counts_down_before_the_simulation_resumes() {
    let mut game = make_game();
    game.start_game();
    game.freeze_ticks = 2;
    game.set_movement(false, true);
    let x0 = game.ship.rect.x;

    game.tick();
    assert_eq!(game.freeze_ticks, 1);
    assert_eq!(game.ship.rect.x, x0);

    game.tick();
    assert_eq!(game.freeze_ticks, 0);
    assert_eq!(game.ship.rect.x, x0);

    game.tick(); // freeze over, motion resumes
    assert_eq!(game.ship.rect.x, x0 + game.settings.dynamic.ship_speed);
}

// ── Fleet cleared ─────────────────────────────────────────────────────────────

#[test]
fn clearing_the_fleet_escalates_and_rebuilds() {
    let mut game = make_game();
    game.start_game();
    let ship_speed_before = game.settings.dynamic.ship_speed;

    // Single remaining alien with a bullet about to hit it.
    game.fleet = vec![Alien::new(&game.settings, 10.0, 5.0)];
    game.bullets = vec![bullet_at(10.5, 5.5)];
    game.tick();

    assert_eq!(game.stats.score, 50); // points at pre-escalation value
    assert_eq!(game.stats.high_score, 50);
    assert_eq!(game.stats.level, 2);
    assert!(game.bullets.is_empty()); // remaining bullets cleared
    assert_eq!(game.fleet.len(), build_fleet(&game.settings).len());
    assert!((game.settings.dynamic.ship_speed - ship_speed_before * 1.1).abs() < 1e-9);
    assert_eq!(game.settings.dynamic.alien_points, 75);
}

#[test]
fn score_grows_by_kills_times_point_value() {
    let mut game = make_game();
    game.start_game();

    // Three aliens, three bullets, all far from edges and the ship.
    game.fleet = vec![
        Alien::new(&game.settings, 10.0, 5.0),
        Alien::new(&game.settings, 30.0, 5.0),
        Alien::new(&game.settings, 50.0, 5.0),
        Alien::new(&game.settings, 70.0, 20.0), // survivor
    ];
    game.bullets = vec![
        bullet_at(10.5, 5.5),
        bullet_at(30.5, 5.5),
        bullet_at(50.5, 5.5),
    ];
    game.tick();

    assert_eq!(game.stats.score, 3 * game.settings.dynamic.alien_points);
    assert_eq!(game.fleet.len(), 1);
    assert_eq!(game.stats.level, 1); // fleet not cleared, no escalation
}

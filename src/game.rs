/// The game state machine and per-tick orchestration.
///
/// Exactly one simulation path is live at a time: only `Active` runs
/// entity updates and collision resolution.  `Idle`, `Paused` and
/// `GameOver` still render the current snapshot but never mutate it.

use log::info;
use rand::Rng;

use crate::combat::{fleet_reached_ship, resolve_bullet_hits};
use crate::config::Settings;
use crate::entities::{Alien, Bullet, Ship, Star};
use crate::fleet::{build_fleet, update_fleet};
use crate::stats::GameStats;

/// Simulation ticks the game stays frozen after a ship is hit.
/// A tick counter rather than a sleep, so input keeps draining and a
/// quit command always short-circuits the freeze.
pub const HIT_FREEZE_TICKS: u32 = 30;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameMode {
    /// Pre-game: decorative screen only.
    Idle,
    /// Simulation running.
    Active,
    /// Simulation frozen, same render as Active minus motion.
    Paused,
    /// Terminal until a new-game command restarts into Active.
    GameOver,
}

pub struct Game {
    pub settings: Settings,
    pub stats: GameStats,
    pub mode: GameMode,
    pub ship: Ship,
    pub bullets: Vec<Bullet>,
    pub fleet: Vec<Alien>,
    pub stars: Vec<Star>,
    /// Remaining ticks of the post-hit freeze; simulation updates are
    /// suspended while > 0.
    pub freeze_ticks: u32,
}

impl Game {
    /// Build a game session in `Idle`.  Stars are scattered exactly once
    /// here and never regenerated; the RNG is injected so tests can seed
    /// it.
    pub fn new(screen_width: f64, screen_height: f64, high_score: u32, rng: &mut impl Rng) -> Self {
        let settings = Settings::new(screen_width, screen_height);
        let stats = GameStats::new(&settings, high_score);
        let ship = Ship::new(&settings);
        let stars = Star::scatter(&settings, rng);

        Game {
            settings,
            stats,
            mode: GameMode::Idle,
            ship,
            bullets: Vec::new(),
            fleet: Vec::new(),
            stars,
            freeze_ticks: 0,
        }
    }

    /// Start a new game.  Legal from Idle and GameOver only; a no-op in
    /// any other mode.
    pub fn start_game(&mut self) {
        if self.mode != GameMode::Idle && self.mode != GameMode::GameOver {
            return;
        }

        self.settings.initialize_dynamic_settings();
        self.stats.reset(&self.settings);
        self.bullets.clear();
        self.fleet = build_fleet(&self.settings);
        self.ship.moving_left = false;
        self.ship.moving_right = false;
        self.ship.recenter(&self.settings);
        self.freeze_ticks = 0;
        self.mode = GameMode::Active;
        info!("new game started, fleet of {}", self.fleet.len());
    }

    /// Toggle between Active and Paused.  Any other mode: no-op.
    pub fn toggle_pause(&mut self) {
        self.mode = match self.mode {
            GameMode::Active => GameMode::Paused,
            GameMode::Paused => GameMode::Active,
            other => other,
        };
    }

    /// Set the ship's movement-intent flags from held input.
    pub fn set_movement(&mut self, left: bool, right: bool) {
        self.ship.moving_left = left;
        self.ship.moving_right = right;
    }

    /// Fire a bullet from the ship's top-center.  No-op unless Active and
    /// unfrozen, and no-op once the live bullet count has reached the
    /// configured cap.
    pub fn fire(&mut self) {
        if self.mode != GameMode::Active || self.freeze_ticks > 0 {
            return;
        }
        if self.bullets.len() >= self.settings.dynamic.bullets_allowed {
            return;
        }
        self.bullets.push(Bullet::new(&self.settings, &self.ship));
    }

    /// Advance the simulation by one tick.  Only Active ticks; during the
    /// post-hit freeze the counter runs down and nothing else moves.
    pub fn tick(&mut self) {
        if self.mode != GameMode::Active {
            return;
        }
        if self.freeze_ticks > 0 {
            self.freeze_ticks -= 1;
            return;
        }

        self.ship.update(&self.settings);

        for bullet in self.bullets.iter_mut() {
            bullet.update(&self.settings);
        }
        self.bullets.retain(|bullet| !bullet.off_screen());

        update_fleet(&mut self.fleet, &mut self.settings);

        let destroyed = resolve_bullet_hits(&mut self.bullets, &mut self.fleet, &self.settings);
        if destroyed > 0 {
            self.stats.score += destroyed * self.settings.dynamic.alien_points;
            self.stats.check_high_score();
        }

        if self.fleet.is_empty() {
            self.on_fleet_cleared();
        }

        if fleet_reached_ship(&self.fleet, &self.ship, &self.settings) {
            self.ship_hit();
        }
    }

    /// An empty fleet is rebuilt before the tick completes, with the
    /// speed/score escalation and a level increment.
    fn on_fleet_cleared(&mut self) {
        self.bullets.clear();
        self.settings.increase_speed();
        self.fleet = build_fleet(&self.settings);
        self.stats.level += 1;
        info!("fleet cleared, level {}", self.stats.level);
    }

    /// The ship-hit consequence, applied at most once per tick.
    fn ship_hit(&mut self) {
        self.stats.ships_left -= 1;

        if self.stats.ships_left == 0 {
            self.mode = GameMode::GameOver;
            info!("game over, final score {}", self.stats.score);
            return;
        }

        self.bullets.clear();
        self.fleet = build_fleet(&self.settings);
        self.ship.recenter(&self.settings);
        self.freeze_ticks = HIT_FREEZE_TICKS;
        info!("ship hit, {} ships left", self.stats.ships_left);
    }
}

/// All tunable game parameters.
///
/// A `Settings` value is created once per process and passed by reference
/// into every component — there is no ambient global.  Static fields are
/// fixed for the process lifetime; everything that resets at the start of
/// a game (and escalates as fleets are cleared) lives in the nested
/// `DynamicSettings` so re-initialization is a single assignment.

use crossterm::style::Color;

/// Settings that change throughout a game: reset via
/// `Settings::initialize_dynamic_settings` at every new-game start and
/// scaled up by `Settings::increase_speed` each time a fleet is cleared.
#[derive(Clone, Debug, PartialEq)]
pub struct DynamicSettings {
    /// Ship horizontal speed, cells per tick.
    pub ship_speed: f64,
    /// Bullet upward speed, cells per tick.
    pub bullet_speed: f64,
    /// When set, bullets survive hits and can destroy several aliens.
    pub bullets_piercing: bool,
    pub bullet_color: Color,
    /// Max bullets alive at once — firing past this is a no-op.
    pub bullets_allowed: usize,
    /// Fleet horizontal speed, cells per tick.
    pub alien_speed: f64,
    /// +1.0 = rightward, -1.0 = leftward.  Shared by the whole fleet.
    pub fleet_direction: f64,
    /// Score awarded per alien destroyed.
    pub alien_points: u32,
}

impl DynamicSettings {
    fn session_start() -> Self {
        DynamicSettings {
            ship_speed: 1.0,
            bullet_speed: 0.8,
            bullets_piercing: false,
            bullet_color: Color::Cyan,
            bullets_allowed: 3,
            alien_speed: 0.25,
            fleet_direction: 1.0,
            alien_points: 50,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Settings {
    // Screen bounds (terminal cells, fractional positions allowed).
    pub screen_width: f64,
    pub screen_height: f64,

    // Static ship settings
    pub ship_width: f64,
    pub ship_height: f64,
    /// Lives per game.
    pub ship_limit: u32,

    // Static bullet settings
    pub bullet_width: f64,
    pub bullet_height: f64,

    // Static alien settings
    pub alien_width: f64,
    pub alien_height: f64,
    /// How far the whole fleet descends when it touches an edge.
    pub fleet_drop_distance: f64,

    // Background star settings
    pub star_size: f64,
    pub stars_allowed: usize,

    /// Speed multiplier applied each time a fleet is cleared.
    pub speedup_scale: f64,
    /// Alien point-value multiplier applied each time a fleet is cleared.
    pub score_scale: f64,

    pub dynamic: DynamicSettings,
}

impl Settings {
    pub fn new(screen_width: f64, screen_height: f64) -> Self {
        Settings {
            screen_width,
            screen_height,
            ship_width: 3.0,
            ship_height: 2.0,
            ship_limit: 2,
            bullet_width: 1.0,
            bullet_height: 1.0,
            alien_width: 3.0,
            alien_height: 2.0,
            fleet_drop_distance: 1.0,
            star_size: 1.0,
            stars_allowed: 50,
            speedup_scale: 1.1,
            score_scale: 1.5,
            dynamic: DynamicSettings::session_start(),
        }
    }

    /// Reset everything that changes during a game back to its
    /// session-start value.  Called at the start of every game.
    pub fn initialize_dynamic_settings(&mut self) {
        self.dynamic = DynamicSettings::session_start();
    }

    /// Escalate difficulty after a fleet is cleared: speeds scale by
    /// `speedup_scale`, alien point value by `score_scale` (truncated).
    pub fn increase_speed(&mut self) {
        self.dynamic.ship_speed *= self.speedup_scale;
        self.dynamic.bullet_speed *= self.speedup_scale;
        self.dynamic.alien_speed *= self.speedup_scale;

        self.dynamic.alien_points = (self.dynamic.alien_points as f64 * self.score_scale) as u32;
    }
}

/// Game entity types and their per-tick self-update rules.
///
/// Positions are continuous (`f64`) and only rounded to terminal cells at
/// draw time.  Every entity exposes its axis-aligned bounding box through
/// the `Sprite` trait; all collision checks go through `Rect::intersects`.

use rand::Rng;

use crate::config::Settings;

// ── Bounding boxes ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rect { x, y, width, height }
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn mid_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Axis-aligned overlap test — the single collision primitive.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Shared renderable contract: anything with a bounding box on screen.
/// No shared state beyond this — each entity carries its own fields.
pub trait Sprite {
    fn rect(&self) -> Rect;
}

// ── Ship ──────────────────────────────────────────────────────────────────────

/// The player ship.  One instance per game session; repositioned (never
/// recreated) after a life is lost.
#[derive(Clone, Debug)]
pub struct Ship {
    pub rect: Rect,
    pub moving_right: bool,
    pub moving_left: bool,
}

impl Ship {
    pub fn new(settings: &Settings) -> Self {
        let mut ship = Ship {
            rect: Rect::new(0.0, 0.0, settings.ship_width, settings.ship_height),
            moving_right: false,
            moving_left: false,
        };
        ship.recenter(settings);
        ship
    }

    /// Move along X according to the intent flags, clamped so the
    /// bounding box never exits the screen.
    pub fn update(&mut self, settings: &Settings) {
        if self.moving_right {
            self.rect.x += settings.dynamic.ship_speed;
        }
        if self.moving_left {
            self.rect.x -= settings.dynamic.ship_speed;
        }
        self.rect.x = self
            .rect
            .x
            .clamp(0.0, settings.screen_width - self.rect.width);
    }

    /// Bottom-center of the screen — used at game start and after a hit.
    pub fn recenter(&mut self, settings: &Settings) {
        self.rect.x = (settings.screen_width - self.rect.width) / 2.0;
        self.rect.y = settings.screen_height - self.rect.height;
    }
}

impl Sprite for Ship {
    fn rect(&self) -> Rect {
        self.rect
    }
}

// ── Bullets ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Bullet {
    pub rect: Rect,
}

impl Bullet {
    /// Spawn at the ship's current top-center.
    pub fn new(settings: &Settings, ship: &Ship) -> Self {
        Bullet {
            rect: Rect::new(
                ship.rect.mid_x() - settings.bullet_width / 2.0,
                ship.rect.top() - settings.bullet_height,
                settings.bullet_width,
                settings.bullet_height,
            ),
        }
    }

    /// Move up the screen.
    pub fn update(&mut self, settings: &Settings) {
        self.rect.y -= settings.dynamic.bullet_speed;
    }

    /// True once the bottom edge has left the top of the visible area.
    pub fn off_screen(&self) -> bool {
        self.rect.bottom() < 0.0
    }
}

impl Sprite for Bullet {
    fn rect(&self) -> Rect {
        self.rect
    }
}

// ── Fleet units ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Alien {
    pub rect: Rect,
}

impl Alien {
    pub fn new(settings: &Settings, x: f64, y: f64) -> Self {
        Alien {
            rect: Rect::new(x, y, settings.alien_width, settings.alien_height),
        }
    }

    /// Advance along X in the fleet's shared direction.
    pub fn update(&mut self, settings: &Settings) {
        self.rect.x += settings.dynamic.alien_speed * settings.dynamic.fleet_direction;
    }

    /// At or past either screen edge.
    pub fn at_edge(&self, settings: &Settings) -> bool {
        self.rect.left() <= 0.0 || self.rect.right() >= settings.screen_width
    }
}

impl Sprite for Alien {
    fn rect(&self) -> Rect {
        self.rect
    }
}

// ── Background stars ──────────────────────────────────────────────────────────

/// Purely cosmetic.  Generated once at game construction, never mutated.
#[derive(Clone, Debug)]
pub struct Star {
    pub rect: Rect,
    /// Rotation angle in degrees — only affects the glyph chosen at draw.
    pub angle: f64,
}

impl Star {
    /// Scatter the configured number of stars across the screen.  The RNG
    /// is injected so tests can supply a seeded source.
    pub fn scatter(settings: &Settings, rng: &mut impl Rng) -> Vec<Star> {
        (0..settings.stars_allowed)
            .map(|_| Star {
                rect: Rect::new(
                    rng.gen_range(0.0..settings.screen_width),
                    rng.gen_range(0.0..settings.screen_height),
                    settings.star_size,
                    settings.star_size,
                ),
                angle: rng.gen_range(0.0..360.0),
            })
            .collect()
    }
}

impl Sprite for Star {
    fn rect(&self) -> Rect {
        self.rect
    }
}

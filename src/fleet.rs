/// Fleet formation layout and per-tick advancement.

use crate::config::Settings;
use crate::entities::Alien;

/// Lay out the grid formation.  Fully deterministic for a given screen
/// and alien size: the cursor starts at `(w, h)`, units are placed
/// left-to-right with spacing `2w` while the next placement stays inside
/// `screen_width - 2w`, rows advance by `2h` while the next row stays
/// inside `screen_height - 3h`.
pub fn build_fleet(settings: &Settings) -> Vec<Alien> {
    let w = settings.alien_width;
    let h = settings.alien_height;

    let mut fleet = Vec::new();
    let mut y = h;
    while y < settings.screen_height - 3.0 * h {
        let mut x = w;
        while x < settings.screen_width - 2.0 * w {
            fleet.push(Alien::new(settings, x, y));
            x += 2.0 * w;
        }
        y += 2.0 * h;
    }
    fleet
}

/// Advance the whole fleet by one tick.
///
/// If any unit touches an edge, the shared direction flips and every unit
/// drops by the configured distance — exactly once per tick, no matter
/// how many units are at the edge.  All units then advance horizontally.
pub fn update_fleet(fleet: &mut [Alien], settings: &mut Settings) {
    if fleet.iter().any(|alien| alien.at_edge(settings)) {
        settings.dynamic.fleet_direction = -settings.dynamic.fleet_direction;
        for alien in fleet.iter_mut() {
            alien.rect.y += settings.fleet_drop_distance;
        }
    }

    for alien in fleet.iter_mut() {
        alien.update(settings);
    }
}

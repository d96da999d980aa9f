/// Collision resolution between bullets, the fleet and the ship.
///
/// Pure over the collections it is handed: no scoring or state-machine
/// side effects here — callers apply the consequences.

use crate::config::Settings;
use crate::entities::{Alien, Bullet, Ship, Sprite};

/// Resolve every overlapping (bullet, alien) pair.  The alien is always
/// destroyed; the bullet is consumed unless piercing is enabled, in which
/// case it survives and may hit further aliens.  Returns the number of
/// aliens destroyed so the caller can award `alien_points` per kill.
///
/// Removal is `retain`-based — collections are never mutated while being
/// index-iterated.
pub fn resolve_bullet_hits(
    bullets: &mut Vec<Bullet>,
    fleet: &mut Vec<Alien>,
    settings: &Settings,
) -> u32 {
    let mut destroyed: u32 = 0;

    bullets.retain(|bullet| {
        let before = fleet.len();
        fleet.retain(|alien| !alien.rect.intersects(&bullet.rect));
        let hits = before - fleet.len();
        destroyed += hits as u32;

        settings.dynamic.bullets_piercing || hits == 0
    });

    destroyed
}

/// True when the fleet has reached the ship: any alien overlaps the
/// ship's bounding box, or any alien's bottom edge has reached the bottom
/// of the screen.  The caller triggers the ship-hit consequence at most
/// once per tick regardless of how many aliens qualify.
pub fn fleet_reached_ship(fleet: &[Alien], ship: &Ship, settings: &Settings) -> bool {
    fleet.iter().any(|alien| {
        alien.rect.intersects(&ship.rect()) || alien.rect.bottom() >= settings.screen_height
    })
}

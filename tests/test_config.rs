use fleet_defense::config::Settings;

// ── Construction defaults ─────────────────────────────────────────────────────

#[test]
fn new_settings_take_screen_bounds() {
    let s = Settings::new(120.0, 40.0);
    assert_eq!(s.screen_width, 120.0);
    assert_eq!(s.screen_height, 40.0);
}

#[test]
fn new_settings_dynamic_session_defaults() {
    let s = Settings::new(120.0, 40.0);
    assert_eq!(s.dynamic.bullets_allowed, 3);
    assert!(!s.dynamic.bullets_piercing);
    assert_eq!(s.dynamic.fleet_direction, 1.0);
    assert_eq!(s.dynamic.alien_points, 50);
}

// ── increase_speed ────────────────────────────────────────────────────────────

#[test]
fn increase_speed_scales_all_speeds() {
    let mut s = Settings::new(120.0, 40.0);
    s.dynamic.ship_speed = 10.0;
    s.dynamic.bullet_speed = 5.0;
    s.dynamic.alien_speed = 5.0;

    s.increase_speed();

    // speedup_scale is 1.1
    assert!((s.dynamic.ship_speed - 11.0).abs() < 1e-9);
    assert!((s.dynamic.bullet_speed - 5.5).abs() < 1e-9);
    assert!((s.dynamic.alien_speed - 5.5).abs() < 1e-9);
}

#[test]
fn increase_speed_scales_points_with_truncation() {
    let mut s = Settings::new(120.0, 40.0);
    assert_eq!(s.dynamic.alien_points, 50);

    s.increase_speed();
    assert_eq!(s.dynamic.alien_points, 75); // 50 * 1.5

    s.increase_speed();
    assert_eq!(s.dynamic.alien_points, 112); // 75 * 1.5 = 112.5, truncated
}

#[test]
fn increase_speed_leaves_static_fields_alone() {
    let mut s = Settings::new(120.0, 40.0);
    let (w, h, limit) = (s.alien_width, s.alien_height, s.ship_limit);

    s.increase_speed();

    assert_eq!(s.alien_width, w);
    assert_eq!(s.alien_height, h);
    assert_eq!(s.ship_limit, limit);
}

// ── initialize_dynamic_settings ───────────────────────────────────────────────

#[test]
fn reinitialize_resets_only_dynamic_fields() {
    let mut s = Settings::new(120.0, 40.0);
    let fresh = s.dynamic.clone();

    s.increase_speed();
    s.increase_speed();
    s.dynamic.fleet_direction = -1.0;
    s.dynamic.bullets_piercing = true;
    assert_ne!(s.dynamic, fresh);

    s.initialize_dynamic_settings();
    assert_eq!(s.dynamic, fresh);
    assert_eq!(s.screen_width, 120.0); // static untouched
}

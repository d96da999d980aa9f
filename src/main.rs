use std::collections::HashMap;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        MouseButton, MouseEvent, MouseEventKind, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use log::{error, info};
use rand::thread_rng;

use fleet_defense::display;
use fleet_defense::game::{Game, GameMode};

const FRAME: Duration = Duration::from_millis(16); // ≈60 Hz

// ── Simultaneous-input constants ──────────────────────────────────────────────

/// Min frames between shots while Space is held.
/// 8 frames @ 60 Hz ≈ 7.5 shots/sec (keeps the bullet cap meaningful).
const SHOOT_COOLDOWN: u32 = 8;

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so the window is always refreshed
/// before expiry while the key is actually down.
const HOLD_WINDOW: u64 = 8;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

// ── High-score persistence ────────────────────────────────────────────────────

fn high_score_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".fleet_defense_score")
}

/// Unreadable or corrupt score files are treated as "no high score yet".
fn load_high_score() -> u32 {
    std::fs::read_to_string(high_score_path())
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0)
}

fn save_high_score(score: u32) {
    if let Err(e) = std::fs::write(high_score_path(), score.to_string()) {
        error!("failed to save high score: {}", e);
    }
}

// ── Frame loop ────────────────────────────────────────────────────────────────

/// Input model: a `key_frame` map records the frame number of the last
/// press/repeat event for every key.  Each frame the still-"fresh" keys
/// drive the ship's movement-intent flags and the fire action, so moving
/// and shooting work simultaneously on both keyboard-enhancement capable
/// and classic terminals.
fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<()> {
    let (width, height) = terminal::size()?;
    let mut rng = thread_rng();

    let mut persisted_high_score = load_high_score();
    let mut game = Game::new(width as f64, height as f64, persisted_high_score, &mut rng);

    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut shoot_cooldown: u32 = 0;
    let mut frame: u64 = 0;
    let mut running = true;

    while running {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(KeyEvent { code, kind, modifiers, .. }) => match kind {
                    KeyEventKind::Press => {
                        key_frame.insert(code.clone(), frame);
                        match code {
                            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                                running = false;
                            }
                            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                                running = false;
                            }
                            KeyCode::Enter
                                if game.mode == GameMode::Idle
                                    || game.mode == GameMode::GameOver =>
                            {
                                game.start_game();
                                out.execute(cursor::Hide)?;
                            }
                            KeyCode::Char('p') | KeyCode::Char('P') => {
                                game.toggle_pause();
                            }
                            _ => {}
                        }
                    }
                    // Repeat: refresh timestamp so the key stays "held"
                    KeyEventKind::Repeat => {
                        key_frame.insert(code.clone(), frame);
                    }
                    // Release: remove key immediately (keyboard-enhancement path)
                    KeyEventKind::Release => {
                        key_frame.remove(&code);
                    }
                },
                Event::Mouse(MouseEvent {
                    kind: MouseEventKind::Down(MouseButton::Left),
                    column,
                    row,
                    ..
                }) => {
                    if game.mode == GameMode::Idle || game.mode == GameMode::GameOver {
                        let (bx, by, bw, bh) = display::play_button_area(&game);
                        if column >= bx && column < bx + bw && row >= by && row < by + bh {
                            game.start_game();
                            out.execute(cursor::Hide)?;
                        }
                    }
                }
                _ => {}
            }
        }

        // ── Apply held-key actions every frame ────────────────────────────────
        if game.mode == GameMode::Active {
            let left = is_held(&key_frame, &KeyCode::Left, frame)
                || is_held(&key_frame, &KeyCode::Char('a'), frame)
                || is_held(&key_frame, &KeyCode::Char('A'), frame);
            let right = is_held(&key_frame, &KeyCode::Right, frame)
                || is_held(&key_frame, &KeyCode::Char('d'), frame)
                || is_held(&key_frame, &KeyCode::Char('D'), frame);
            game.set_movement(left, right);

            let shoot = is_held(&key_frame, &KeyCode::Char(' '), frame);
            if shoot_cooldown == 0 && shoot {
                game.fire();
                shoot_cooldown = SHOOT_COOLDOWN;
            }
        }
        shoot_cooldown = shoot_cooldown.saturating_sub(1);

        let mode_before = game.mode;
        game.tick();

        // Entering GameOver: surface the cursor again and persist a beaten
        // high score right away.
        if mode_before != GameMode::GameOver && game.mode == GameMode::GameOver {
            out.execute(cursor::Show)?;
            if game.stats.high_score > persisted_high_score {
                save_high_score(game.stats.high_score);
                persisted_high_score = game.stats.high_score;
            }
        }

        display::render(out, &game)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            std::thread::sleep(FRAME - elapsed);
        }
    }

    // Quit always wins, even mid-freeze; persist before tearing down.
    if game.stats.high_score > persisted_high_score {
        save_high_score(game.stats.high_score);
    }
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    // Terminal UI owns stdout, so logs go to a file.
    if simple_logging::log_to_file("fleet_defense.log", log::LevelFilter::Info).is_err() {
        eprintln!("warning: could not open log file, continuing without logs");
    }
    info!("starting fleet defense");

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(event::EnableMouseCapture)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the frame loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(e) => {
                error!("input thread terminating: {}", e);
                break;
            }
        }
    });

    let result = run(&mut out, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(event::DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    info!("exiting");
    result
}

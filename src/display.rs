/// Rendering layer — all terminal drawing lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game; no game logic is performed.  Continuous entity positions are
/// rounded to terminal cells only at this boundary.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use crate::entities::{Rect, Star};
use crate::game::{Game, GameMode};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_HIGH: Color = Color::DarkYellow;
const C_HUD_LEVEL: Color = Color::Green;
const C_HUD_LIVES: Color = Color::Red;
const C_SHIP: Color = Color::White;
const C_ALIEN: Color = Color::Green;
const C_STAR: Color = Color::DarkGrey;
const C_HINT: Color = Color::DarkGrey;

/// Round a continuous coordinate to a terminal cell.
fn cell(v: f64) -> u16 {
    v.round().max(0.0) as u16
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame for whatever mode the game is in.
pub fn render<W: Write>(out: &mut W, game: &Game) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_stars(out, &game.stars)?;

    match game.mode {
        GameMode::Idle => draw_title_screen(out, game)?,
        GameMode::Active | GameMode::Paused | GameMode::GameOver => {
            for alien in &game.fleet {
                draw_alien(out, &alien.rect)?;
            }
            for bullet in &game.bullets {
                out.queue(cursor::MoveTo(cell(bullet.rect.x), cell(bullet.rect.y)))?;
                out.queue(style::SetForegroundColor(game.settings.dynamic.bullet_color))?;
                out.queue(Print("│"))?;
            }
            draw_ship(out, &game.ship.rect)?;
            draw_hud(out, game)?;

            if game.mode == GameMode::Paused {
                draw_paused(out, game)?;
            }
            if game.mode == GameMode::GameOver {
                draw_game_over(out, game)?;
            }
        }
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, cell(game.settings.screen_height).saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Background ────────────────────────────────────────────────────────────────

fn draw_stars<W: Write>(out: &mut W, stars: &[Star]) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_STAR))?;
    for star in stars {
        // The rotation angle only picks the glyph
        let glyph = match star.angle as u32 {
            0..=89 => '·',
            90..=179 => '+',
            180..=269 => '*',
            _ => '✦',
        };
        out.queue(cursor::MoveTo(cell(star.rect.x), cell(star.rect.y)))?;
        out.queue(Print(glyph))?;
    }
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_ship<W: Write>(out: &mut W, rect: &Rect) -> std::io::Result<()> {
    // Sprite (2 rows, 3 cols):
    //    ▲      ← tip
    //   ◢█◣     ← hull
    out.queue(style::SetForegroundColor(C_SHIP))?;
    out.queue(cursor::MoveTo(cell(rect.x) + 1, cell(rect.y)))?;
    out.queue(Print("▲"))?;
    out.queue(cursor::MoveTo(cell(rect.x), cell(rect.y) + 1))?;
    out.queue(Print("◢█◣"))?;
    Ok(())
}

fn draw_alien<W: Write>(out: &mut W, rect: &Rect) -> std::io::Result<()> {
    // Sprite (2 rows, 3 cols):
    //   /O\
    //   \_/
    out.queue(style::SetForegroundColor(C_ALIEN))?;
    out.queue(cursor::MoveTo(cell(rect.x), cell(rect.y)))?;
    out.queue(Print("/O\\"))?;
    out.queue(cursor::MoveTo(cell(rect.x), cell(rect.y) + 1))?;
    out.queue(Print("\\_/"))?;
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, game: &Game) -> std::io::Result<()> {
    let width = cell(game.settings.screen_width);

    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score: {:>8}", game.stats.score)))?;

    out.queue(cursor::MoveTo(18, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_HIGH))?;
    out.queue(Print(format!("Best: {}", game.stats.high_score)))?;

    let level_str = format!("[ LEVEL {} ]", game.stats.level);
    let lx = (width / 2).saturating_sub(level_str.len() as u16 / 2);
    out.queue(cursor::MoveTo(lx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LEVEL))?;
    out.queue(Print(&level_str))?;

    let hearts: String = "♥".repeat(game.stats.ships_left as usize);
    let lives_text = format!("Ships: {}", hearts);
    let rx = width.saturating_sub(lives_text.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(&lives_text))?;

    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

/// The clickable PLAY button as terminal cells `(x, y, width, height)`.
/// Shared with the input layer so pointer-down events can be hit-tested.
pub fn play_button_area(game: &Game) -> (u16, u16, u16, u16) {
    let cx = cell(game.settings.screen_width) / 2;
    let cy = cell(game.settings.screen_height) / 2;
    (cx.saturating_sub(5), cy, 10, 1)
}

fn draw_title_screen<W: Write>(out: &mut W, game: &Game) -> std::io::Result<()> {
    let cx = cell(game.settings.screen_width) / 2;
    let cy = cell(game.settings.screen_height) / 2;

    let title = "★  FLEET  DEFENSE  ★";
    out.queue(cursor::MoveTo(
        cx.saturating_sub(title.chars().count() as u16 / 2),
        cy.saturating_sub(5),
    ))?;
    out.queue(style::SetForegroundColor(Color::Cyan))?;
    out.queue(Print(title))?;

    if game.stats.high_score > 0 {
        let hs = format!("Best Score: {}", game.stats.high_score);
        out.queue(cursor::MoveTo(
            cx.saturating_sub(hs.chars().count() as u16 / 2),
            cy.saturating_sub(3),
        ))?;
        out.queue(style::SetForegroundColor(Color::Yellow))?;
        out.queue(Print(&hs))?;
    }

    let (bx, by, _, _) = play_button_area(game);
    out.queue(cursor::MoveTo(bx, by))?;
    out.queue(style::SetForegroundColor(Color::Black))?;
    out.queue(style::SetBackgroundColor(Color::Green))?;
    out.queue(Print("   PLAY   "))?;
    out.queue(style::SetBackgroundColor(Color::Reset))?;

    let hint = "← → : Move   SPACE : Fire   P : Pause   ENTER / click : Play   Q : Quit";
    out.queue(cursor::MoveTo(
        cx.saturating_sub(hint.chars().count() as u16 / 2),
        cy + 3,
    ))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(hint))?;

    Ok(())
}

fn draw_paused<W: Write>(out: &mut W, game: &Game) -> std::io::Result<()> {
    let lines = ["╔══════════╗", "║  PAUSED  ║", "╚══════════╝"];
    draw_centered_box(out, game, &lines, Color::Yellow)
}

fn draw_game_over<W: Write>(out: &mut W, game: &Game) -> std::io::Result<()> {
    let score_line = format!("Final Score: {}", game.stats.score);
    let cx = cell(game.settings.screen_width) / 2;
    let start = cell(game.settings.screen_height) / 2;

    let frame = ["╔══════════════════╗", "║    GAME  OVER    ║", "╚══════════════════╝"];
    for (i, line) in frame.iter().enumerate() {
        let col = cx.saturating_sub(line.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start.saturating_sub(2) + i as u16))?;
        out.queue(style::SetForegroundColor(Color::Red))?;
        out.queue(Print(*line))?;
    }

    out.queue(cursor::MoveTo(
        cx.saturating_sub(score_line.chars().count() as u16 / 2),
        start + 2,
    ))?;
    out.queue(style::SetForegroundColor(Color::Yellow))?;
    out.queue(Print(&score_line))?;

    let hint = "ENTER - Play Again   Q - Quit";
    out.queue(cursor::MoveTo(
        cx.saturating_sub(hint.chars().count() as u16 / 2),
        start + 4,
    ))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print(hint))?;

    Ok(())
}

fn draw_centered_box<W: Write>(
    out: &mut W,
    game: &Game,
    lines: &[&str],
    color: Color,
) -> std::io::Result<()> {
    let cx = cell(game.settings.screen_width) / 2;
    let start = (cell(game.settings.screen_height) / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, line) in lines.iter().enumerate() {
        let col = cx.saturating_sub(line.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start + i as u16))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(*line))?;
    }
    Ok(())
}

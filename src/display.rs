//! Terminal renderer
//!
//! Scales the 1280x720 world onto the terminal grid and draws each entity
//! kind as a colored glyph. Row 0 is reserved for the HUD.

use std::io::Write;

use crossterm::{
    QueueableCommand, cursor,
    style::{self, Color, Print},
    terminal,
};
use glam::Vec2;

use astro_blitz::consts::*;
use astro_blitz::highscores::HighScores;
use astro_blitz::render::Renderer;
use astro_blitz::sim::{Rect, Rgba, SpriteId};

pub struct TermRenderer<W: Write> {
    out: W,
    cols: u16,
    rows: u16,
}

impl<W: Write> TermRenderer<W> {
    pub fn new(out: W) -> std::io::Result<Self> {
        let (cols, rows) = terminal::size()?;
        Ok(Self { out, cols, rows })
    }

    /// Clear and re-measure; call once per frame before submitting the world
    pub fn begin_frame(&mut self) -> std::io::Result<()> {
        let (cols, rows) = terminal::size()?;
        self.cols = cols;
        self.rows = rows;
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    pub fn end_frame(&mut self) -> std::io::Result<()> {
        self.out.queue(style::ResetColor)?;
        self.out.flush()
    }

    /// World position to terminal cell; None when off the visible grid
    fn cell(&self, pos: Vec2) -> Option<(u16, u16)> {
        let field_rows = self.rows.saturating_sub(1).max(1);
        let col = (pos.x / WORLD_WIDTH * self.cols as f32) as i32;
        let row = (pos.y / WORLD_HEIGHT * field_rows as f32) as i32 + 1;
        if col < 0 || col >= self.cols as i32 || row < 1 || row >= self.rows as i32 {
            return None;
        }
        Some((col as u16, row as u16))
    }

    /// Queue a single glyph; I/O errors surface at flush time
    fn put(&mut self, pos: Vec2, glyph: char, color: Color) {
        if let Some((col, row)) = self.cell(pos) {
            let _ = self.out.queue(cursor::MoveTo(col, row));
            let _ = self.out.queue(style::SetForegroundColor(color));
            let _ = self.out.queue(Print(glyph));
        }
    }

    fn line(&mut self, col: u16, row: u16, color: Color, text: &str) {
        let _ = self.out.queue(cursor::MoveTo(col, row));
        let _ = self.out.queue(style::SetForegroundColor(color));
        let _ = self.out.queue(Print(text.to_string()));
    }
}

impl<W: Write> Renderer for TermRenderer<W> {
    fn draw_sprite(&mut self, sprite: SpriteId, pos: Vec2) {
        let (glyph, color) = match sprite {
            SpriteId::Player => ('▶', Color::Cyan),
            SpriteId::PlayerBullet => ('─', Color::White),
            SpriteId::Enemy => ('◀', Color::Red),
            SpriteId::EnemyBullet => ('•', Color::Magenta),
            SpriteId::Explosion => ('*', Color::Yellow),
        };
        self.put(pos, glyph, color);
    }

    fn draw_tinted(&mut self, _sprite: SpriteId, pos: Vec2, color: Rgba) {
        // Fold the (possibly over-bright) alpha into the channel values
        let fade = (color.a as f32 / 255.0).clamp(0.0, 1.0);
        let tint = Color::Rgb {
            r: (color.r as f32 * fade) as u8,
            g: (color.g as f32 * fade) as u8,
            b: (color.b as f32 * fade) as u8,
        };
        self.put(pos, '*', tint);
    }

    fn draw_region(&mut self, _sprite: SpriteId, src: Rect, pos: Vec2) {
        // One block-quadrant glyph per shard, picked by its source quadrant
        let glyph = match (src.pos.x > 0.0, src.pos.y > 0.0) {
            (false, false) => '▘',
            (true, false) => '▝',
            (false, true) => '▖',
            (true, true) => '▗',
        };
        self.put(pos, glyph, Color::DarkGrey);
    }

    fn draw_background(&mut self, tick: u64) {
        // Deterministic scrolling starfield: row, speed and phase of every
        // star come from hashing its index
        let cols = self.cols.max(1) as i64;
        let field_rows = self.rows.saturating_sub(1).max(1) as u64;
        let stars = (self.cols as u32 / 2).min(160);

        for i in 0..stars {
            let hash = (i as u64)
                .wrapping_mul(2654435761)
                .wrapping_add(0x9e3779b9);
            let row = 1 + (hash % field_rows) as u16;
            let speed = 1 + ((hash >> 16) % 3) as i64;
            let base = ((hash >> 8) % cols as u64) as i64;
            let col = (base - tick as i64 * speed).rem_euclid(cols) as u16;
            let glyph = if speed == 3 { '·' } else { '.' };
            if row < self.rows {
                let _ = self.out.queue(cursor::MoveTo(col, row));
                let _ = self.out.queue(style::SetForegroundColor(Color::DarkGrey));
                let _ = self.out.queue(Print(glyph));
            }
        }
    }

    fn draw_hud(&mut self, score: u32, highscore: u32) {
        let text = format!("SCORE {score:06}   HIGH {highscore:06}");
        self.line(1, 0, Color::White, &text);

        let hint = "[H] scores  [Q] quit";
        let col = self.cols.saturating_sub(hint.len() as u16 + 1);
        self.line(col, 0, Color::DarkGrey, hint);
    }

    fn draw_highscores(&mut self, table: &HighScores) {
        let cx = self.cols / 2;
        let top = (self.rows / 2).saturating_sub(7);

        let title = "★  HIGH SCORES  ★";
        self.line(
            cx.saturating_sub(title.chars().count() as u16 / 2),
            top,
            Color::Cyan,
            title,
        );

        if table.is_empty() {
            self.line(cx.saturating_sub(9), top + 2, Color::DarkGrey, "no scores yet");
        }
        for (i, entry) in table.entries.iter().enumerate() {
            let row = top + 2 + i as u16;
            let text = format!("{:>2}. {:>8}", i + 1, entry.score);
            self.line(cx.saturating_sub(7), row, Color::Yellow, &text);
        }

        self.line(
            cx.saturating_sub(11),
            top + 14,
            Color::DarkGrey,
            "[H] back to the fight",
        );
    }
}

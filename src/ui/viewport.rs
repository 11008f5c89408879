//! Viewport scaling from logical playfield units to terminal cells.
//!
//! The playfield is `GAME_WIDTH` x `GAME_HEIGHT` logical units with the
//! ground band at the bottom. A terminal cell is roughly twice as tall as it
//! is wide, so one row covers two columns' worth of units.

use crate::core::constants::{GAME_HEIGHT, GAME_WIDTH, GROUND_HEIGHT};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

/// Smallest playfield that still reads as a game.
pub const MIN_PLAYFIELD_COLS: u16 = 24;
pub const MIN_PLAYFIELD_ROWS: u16 = 8;

/// Placement of the scaled playfield inside a terminal area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Top-left cell of the playfield.
    pub x: u16,
    pub y: u16,
    /// Playfield size in cells.
    pub cols: u16,
    pub rows: u16,
    /// Columns per logical unit. Rows per unit is half of this.
    pub scale: f64,
}

impl Viewport {
    /// Largest uniform scale that fits `area`, centered horizontally and
    /// anchored to the bottom so the ground sits on the status bar.
    pub fn fit(area: Rect) -> Self {
        let scale = (area.width as f64 / GAME_WIDTH).min(area.height as f64 * 2.0 / GAME_HEIGHT);
        let cols = ((GAME_WIDTH * scale).round() as u16).min(area.width);
        let rows = ((GAME_HEIGHT * scale / 2.0).round() as u16).min(area.height);

        Self {
            x: area.x + (area.width - cols) / 2,
            y: area.y + (area.height - rows),
            cols,
            rows,
            scale,
        }
    }

    pub fn is_usable(&self) -> bool {
        self.cols >= MIN_PLAYFIELD_COLS && self.rows >= MIN_PLAYFIELD_ROWS
    }

    pub fn area(&self) -> Rect {
        Rect::new(self.x, self.y, self.cols, self.rows)
    }

    /// Playfield-relative column of a logical x coordinate. May be off-screen.
    pub fn to_col(&self, x: f64) -> i32 {
        (x * self.scale).floor() as i32
    }

    /// Playfield-relative row holding a point `height` units above the
    /// ground line. May be off-screen.
    pub fn to_row(&self, height: f64) -> i32 {
        let from_bottom = ((GROUND_HEIGHT + height) * self.scale / 2.0).floor() as i32;
        self.rows as i32 - 1 - from_bottom
    }

    /// First row of the ground band.
    pub fn ground_row(&self) -> i32 {
        self.to_row(0.0) + 1
    }

    /// Cells covered by `width` units, at least one.
    pub fn span_cols(&self, width: f64) -> i32 {
        ((width * self.scale).round() as i32).max(1)
    }

    /// Rows covered by `height` units, at least one.
    pub fn span_rows(&self, height: f64) -> i32 {
        ((height * self.scale / 2.0).round() as i32).max(1)
    }
}

/// Render a "terminal too small" message in place of the playfield.
pub fn render_too_small(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled(
            "Terminal too small",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Have: {}x{}", area.width, area.height),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "Please resize your terminal.",
            Style::default().fg(Color::White),
        )),
    ];

    let y = area.y + area.height.saturating_sub(3) / 2;
    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, Rect::new(area.x, y, area.width, area.height.min(3)));
}

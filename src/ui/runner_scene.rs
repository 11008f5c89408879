//! Runner game scene rendering.
//!
//! Uses a cell buffer for per-character color control. The runner,
//! obstacles, and ground are drawn into a 2D grid sized by the viewport and
//! then stamped row-by-row as Paragraph widgets.

use super::game_common::{
    create_game_layout, render_banner, render_info_panel_frame, render_status_bar, score_readout,
};
use super::viewport::{render_too_small, Viewport};
use crate::core::constants::{
    OBSTACLE_HEIGHT, OBSTACLE_WIDTH, PLAYER_HEIGHT, PLAYER_WIDTH, PLAYER_X,
};
use crate::core::event_log::EventLog;
use crate::runner::{ObstacleKind, RunState, RunnerGame};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const GROUND_CHAR: char = '▓';
const GROUND_SUB: char = '░';
const RUNNER_COLOR: Color = Color::LightYellow;
const INFO_PANEL_WIDTH: u16 = 24;

/// Render the whole runner screen.
pub fn render_runner_scene(frame: &mut Frame, area: Rect, game: &RunnerGame, log: &EventLog) {
    let layout = create_game_layout(frame, area, " Bhaisaur ", Color::LightYellow, INFO_PANEL_WIDTH);

    let viewport = Viewport::fit(layout.content);
    if viewport.is_usable() {
        render_play_field(frame, &viewport, game);
        match game.state {
            RunState::Idle => render_start_prompt(frame, viewport.area()),
            RunState::Dead => render_reaction_banner(frame, viewport.area(), game),
            RunState::Playing => {}
        }
    } else {
        render_too_small(frame, layout.content);
    }

    render_status_bar_content(frame, layout.status_bar, game);

    if layout.info_panel.width > 0 {
        render_info_panel(frame, layout.info_panel, game, log);
    }
}

/// Cell in the render buffer with foreground and background colors.
#[derive(Clone, Copy)]
struct Cell {
    ch: char,
    fg: Color,
    bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

struct CellBuffer {
    cells: Vec<Vec<Cell>>,
    cols: i32,
    rows: i32,
}

impl CellBuffer {
    fn new(cols: u16, rows: u16) -> Self {
        Self {
            cells: vec![vec![Cell::default(); cols as usize]; rows as usize],
            cols: cols as i32,
            rows: rows as i32,
        }
    }

    /// Write a cell, silently dropping anything off-screen.
    fn put(&mut self, col: i32, row: i32, ch: char, fg: Color) {
        if col < 0 || row < 0 || col >= self.cols || row >= self.rows {
            return;
        }
        let cell = &mut self.cells[row as usize][col as usize];
        cell.ch = ch;
        cell.fg = fg;
    }

    fn put_str(&mut self, col: i32, row: i32, text: &str, fg: Color) {
        for (i, ch) in text.chars().enumerate() {
            self.put(col + i as i32, row, ch, fg);
        }
    }

    /// Stamp the buffer into the frame, merging runs of equal style into spans.
    fn render(self, frame: &mut Frame, area: Rect) {
        for (row_idx, row_data) in self.cells.into_iter().enumerate() {
            let mut spans: Vec<Span> = Vec::new();
            let mut current_fg = Color::Reset;
            let mut current_bg = Color::Reset;
            let mut current_text = String::new();

            for cell in row_data {
                if (cell.fg != current_fg || cell.bg != current_bg) && !current_text.is_empty() {
                    spans.push(Span::styled(
                        std::mem::take(&mut current_text),
                        Style::default().fg(current_fg).bg(current_bg),
                    ));
                }
                current_fg = cell.fg;
                current_bg = cell.bg;
                current_text.push(cell.ch);
            }
            if !current_text.is_empty() {
                spans.push(Span::styled(
                    current_text,
                    Style::default().fg(current_fg).bg(current_bg),
                ));
            }

            let row_area = Rect::new(area.x, area.y + row_idx as u16, area.width, 1);
            frame.render_widget(Paragraph::new(Line::from(spans)), row_area);
        }
    }
}

/// Render the playfield: ground, obstacles, runner, score readout.
fn render_play_field(frame: &mut Frame, viewport: &Viewport, game: &RunnerGame) {
    let mut buffer = CellBuffer::new(viewport.cols, viewport.rows);

    // ── Ground band, textured so the scroll is visible ────────────────
    let ground_row = viewport.ground_row();
    let scroll = (game.frame as f64 * game.speed * viewport.scale).round() as i32;
    for row in ground_row.max(0)..buffer.rows {
        for col in 0..buffer.cols {
            if row == ground_row {
                buffer.cells[row as usize][col as usize] = Cell {
                    ch: GROUND_CHAR,
                    fg: Color::Rgb(110, 90, 60),
                    bg: Color::Rgb(50, 40, 30),
                };
            } else if (col + scroll).rem_euclid(7) == (row * 3) % 7 {
                buffer.put(col, row, GROUND_SUB, Color::Rgb(70, 55, 40));
            }
        }
    }

    // ── Obstacles ─────────────────────────────────────────────────────
    let obs_w = viewport.span_cols(OBSTACLE_WIDTH);
    let obs_h = viewport.span_rows(OBSTACLE_HEIGHT);
    for obstacle in &game.obstacles {
        let (ch, fg) = match obstacle.kind {
            ObstacleKind::Ground => ('|', Color::Rgb(60, 150, 60)),
            ObstacleKind::Air => ('V', Color::Rgb(170, 90, 170)),
        };
        let left = viewport.to_col(obstacle.x);
        let bottom = viewport.to_row(obstacle.vertical_offset);
        for dy in 0..obs_h {
            for dx in 0..obs_w {
                buffer.put(left + dx, bottom - dy, ch, fg);
            }
        }
    }

    // ── Runner ────────────────────────────────────────────────────────
    let runner_col = viewport.to_col(PLAYER_X);
    let runner_w = viewport.span_cols(PLAYER_WIDTH);
    let runner_h = viewport.span_rows(PLAYER_HEIGHT);
    let foot_row = viewport.to_row(game.player.vertical_offset);
    let dead = game.state == RunState::Dead;
    let color = if dead { Color::Red } else { RUNNER_COLOR };
    let stride = (game.frame / 6) % 2 == 0;

    for dy in 0..runner_h {
        for dx in 0..runner_w {
            let ch = if dy == 0 && game.player.is_grounded() && game.is_playing() {
                // Alternating legs while running
                match (dx % 2 == 0, stride) {
                    (true, true) | (false, false) => '▀',
                    _ => ' ',
                }
            } else if dy == runner_h - 1 && dx == runner_w - 2 {
                if dead {
                    'x'
                } else {
                    'o'
                }
            } else {
                '█'
            };
            if ch != ' ' {
                buffer.put(runner_col + dx, foot_row - dy, ch, color);
            }
        }
    }

    // ── Score readout (top-right) ─────────────────────────────────────
    let readout = score_readout(game.high_score, game.score);
    let start = buffer.cols - readout.chars().count() as i32 - 1;
    buffer.put_str(start, 0, &readout, Color::White);
    buffer.put_str(start, 0, "HI", Color::DarkGray);

    buffer.render(frame, viewport.area());
}

/// Render the status bar below the playfield.
fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &RunnerGame) {
    match game.state {
        RunState::Idle => render_status_bar(
            frame,
            area,
            "Ready",
            Color::LightYellow,
            &[("[Space/Up]", "Start"), ("[Q]", "Quit")],
        ),
        RunState::Playing => render_status_bar(
            frame,
            area,
            "Run!",
            Color::LightYellow,
            &[("[Space/Up]", "Jump"), ("[Q]", "Quit")],
        ),
        RunState::Dead if game.can_retry() => render_status_bar(
            frame,
            area,
            "Out!",
            Color::Red,
            &[("[Space/Up]", "Retry"), ("[Q]", "Quit")],
        ),
        RunState::Dead => render_status_bar(frame, area, "Out!", Color::Red, &[("[Q]", "Quit")]),
    }
}

/// Render the info panel on the right side.
fn render_info_panel(frame: &mut Frame, area: Rect, game: &RunnerGame, log: &EventLog) {
    let inner = render_info_panel_frame(frame, area);
    let config = &game.config;

    let speed_pct = if config.max_speed > config.initial_speed {
        ((game.speed - config.initial_speed) / (config.max_speed - config.initial_speed) * 100.0)
            .round() as u32
    } else {
        0
    };

    let label = |text: &'static str| Span::styled(text, Style::default().fg(Color::DarkGray));

    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            label("Attempt: "),
            Span::styled(
                game.attempts.to_string(),
                Style::default().fg(Color::LightYellow),
            ),
        ]),
        Line::from(vec![
            label("Score: "),
            Span::styled(
                game.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            label("Best: "),
            Span::styled(game.high_score.to_string(), Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            label("Speed: "),
            Span::styled(
                format!("{:.1} ({}%)", game.speed, speed_pct),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            label("Air: "),
            Span::styled(
                if config.air_obstacles { "on" } else { "off" },
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Log:",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let room = (inner.height as usize).saturating_sub(lines.len());
    for entry in log.entries().rev().take(room) {
        let style = if entry.is_highlight {
            Style::default().fg(Color::LightYellow)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(Span::styled(entry.message.clone(), style)));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Render the "Press Space to Start" prompt centered on the playfield.
fn render_start_prompt(frame: &mut Frame, area: Rect) {
    let prompt = "[ Press Space/Up to Start ]";
    if area.height < 3 || (area.width as usize) < prompt.len() {
        return;
    }

    let x = area.x + (area.width - prompt.len() as u16) / 2;
    let y = area.y + area.height / 3;
    let line = Paragraph::new(Line::from(Span::styled(
        prompt,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(line, Rect::new(x, y, prompt.len() as u16, 1));
}

/// Death reaction: a banner over the frozen playfield. The retry prompt
/// only appears once the cooldown has elapsed.
fn render_reaction_banner(frame: &mut Frame, area: Rect, game: &RunnerGame) {
    let mut body = vec![Line::from(Span::styled(
        format!("Score {}", game.score),
        Style::default().fg(Color::White),
    ))];

    if game.score > 0 && game.score == game.high_score {
        body.push(Line::from(Span::styled(
            "Best run yet!",
            Style::default().fg(Color::Cyan),
        )));
    }

    body.push(if game.can_retry() {
        Line::from(Span::styled(
            "[ Press Space to Retry ]",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(
            format!(
                "Catching breath... {:.1}s",
                game.retry_cooldown_remaining_ms as f64 / 1000.0
            ),
            Style::default().fg(Color::DarkGray),
        ))
    });

    render_banner(frame, area, "OUCH!", Color::Red, body);
}

//! Rendering layer: all terminal output lives here.
//!
//! The game draws in world units; `Viewport` scales those onto whatever
//! terminal grid is available this frame.  No game logic is performed.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Attribute, Color, Print},
    terminal,
    QueueableCommand,
};
use invaders::entities::{InvaderKind, Rect, Size, Vec2};
use invaders::formation::DANGER_LINE;
use invaders::render::{Backdrop, RenderSink, Sprite};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_TITLE: Color = Color::Cyan;
const C_PLAYER: Color = Color::White;
const C_SQUID: Color = Color::Magenta;
const C_CRAB: Color = Color::Green;
const C_OCTOPUS: Color = Color::Red;
const C_MISSILE: Color = Color::Cyan;
const C_DANGER: Color = Color::DarkRed;
const C_BUTTON: Color = Color::White;
const C_TEXT: Color = Color::Grey;
const C_HINT: Color = Color::DarkGrey;

const HINT: &str = "← → / Q D : Move   SPACE / Z : Shoot   ESC : Quit";

// ── World ↔ terminal mapping ─────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
    pub world: Size,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16, world: Size) -> Self {
        Self { cols, rows, world }
    }

    /// Cell under a world point, or `None` when it falls off the grid.
    pub fn to_cell(&self, point: Vec2) -> Option<(u16, u16)> {
        if point.x < 0 || point.y < 0 {
            return None;
        }
        let col = i64::from(point.x) * i64::from(self.cols) / i64::from(self.world.width.max(1));
        let row = i64::from(point.y) * i64::from(self.rows) / i64::from(self.world.height.max(1));
        if col >= i64::from(self.cols) || row >= i64::from(self.rows) {
            return None;
        }
        Some((col as u16, row as u16))
    }

    /// World point at the centre of a cell.
    pub fn to_world(&self, col: u16, row: u16) -> Vec2 {
        let x = (2 * i64::from(col) + 1) * i64::from(self.world.width)
            / (2 * i64::from(self.cols.max(1)));
        let y = (2 * i64::from(row) + 1) * i64::from(self.world.height)
            / (2 * i64::from(self.rows.max(1)));
        Vec2::new(x as i32, y as i32)
    }

    /// Number of terminal rows a world rectangle covers, at least one.
    fn row_span(&self, rect: &Rect) -> u16 {
        let rows = i64::from(rect.size.height) * i64::from(self.rows)
            / i64::from(self.world.height.max(1));
        rows.max(1) as u16
    }
}

// ── Renderer ─────────────────────────────────────────────────────────────────

pub struct TerminalRenderer<'a, W: Write> {
    out: &'a mut W,
    viewport: Viewport,
}

impl<'a, W: Write> TerminalRenderer<'a, W> {
    /// Starts a frame by clearing the screen.
    pub fn begin(out: &'a mut W, viewport: Viewport) -> std::io::Result<Self> {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
        Ok(Self { out, viewport })
    }

    /// Parks the cursor in a harmless spot and flushes the frame.
    pub fn finish(self) -> std::io::Result<()> {
        self.out.queue(style::ResetColor)?;
        self.out
            .queue(cursor::MoveTo(0, self.viewport.rows.saturating_sub(1)))?;
        self.out.flush()
    }

    fn print_at(&mut self, col: u16, row: u16, color: Color, text: &str) -> std::io::Result<()> {
        self.out.queue(cursor::MoveTo(col, row))?;
        self.out.queue(style::SetForegroundColor(color))?;
        self.out.queue(Print(text))?;
        Ok(())
    }

    fn print_centred(&mut self, row: u16, color: Color, text: &str) -> std::io::Result<()> {
        let col = (self.viewport.cols / 2).saturating_sub(text.chars().count() as u16 / 2);
        self.print_at(col, row, color, text)
    }

    /// Top bar and side walls; the bottom rows belong to the player lane.
    fn draw_border(&mut self) -> std::io::Result<()> {
        let w = self.viewport.cols as usize;

        self.print_at(0, 0, C_BORDER, &format!("┌{}┐", "─".repeat(w.saturating_sub(2))))?;
        for row in 1..self.viewport.rows.saturating_sub(1) {
            self.print_at(0, row, C_BORDER, "│")?;
            self.print_at(self.viewport.cols.saturating_sub(1), row, C_BORDER, "│")?;
        }
        Ok(())
    }

    fn draw_danger_line(&mut self) -> std::io::Result<()> {
        if let Some((_, row)) = self.viewport.to_cell(Vec2::new(0, DANGER_LINE)) {
            let w = self.viewport.cols.saturating_sub(2) as usize;
            self.print_at(1, row, C_DANGER, &"┄".repeat(w))?;
        }
        Ok(())
    }

    fn draw_hint(&mut self) -> std::io::Result<()> {
        let row = self.viewport.rows.saturating_sub(1);
        self.print_at(1, row, C_HINT, HINT)
    }

    fn draw_banner(&mut self, lines: &[&str], color: Color) -> std::io::Result<()> {
        let start = (self.viewport.rows / 3).saturating_sub(lines.len() as u16 / 2);
        for (i, line) in lines.iter().enumerate() {
            self.print_centred(start + i as u16, color, line)?;
        }
        Ok(())
    }
}

impl<W: Write> RenderSink for TerminalRenderer<'_, W> {
    fn backdrop(&mut self, backdrop: Backdrop) -> std::io::Result<()> {
        match backdrop {
            Backdrop::Menu => {
                self.draw_banner(&["★  SPACE  INVADERS  ★"], C_TITLE)?;
                self.draw_hint()?;
            }
            Backdrop::Playfield => {
                self.draw_border()?;
                self.draw_danger_line()?;
                self.draw_hint()?;
            }
            Backdrop::Victory => self.draw_banner(
                &[
                    "╔════════════════════╗",
                    "║      VICTORY       ║",
                    "╚════════════════════╝",
                ],
                Color::Green,
            )?,
            Backdrop::GameOver => self.draw_banner(
                &[
                    "╔════════════════════╗",
                    "║    GAME  OVER      ║",
                    "╚════════════════════╝",
                ],
                Color::Red,
            )?,
        }
        Ok(())
    }

    fn sprite(&mut self, sprite: Sprite, rect: Rect) -> std::io::Result<()> {
        let Some((col, row)) = self.viewport.to_cell(rect.position) else {
            return Ok(());
        };
        let tall = self.viewport.row_span(&rect) > 1 && row + 1 < self.viewport.rows;
        match sprite {
            Sprite::Invader(kind) => {
                let (color, top, bottom) = match kind {
                    InvaderKind::Squid => (C_SQUID, "/▼\\", "╱ ╲"),
                    InvaderKind::Crab => (C_CRAB, "«▼»", "╚═╝"),
                    InvaderKind::Octopus => (C_OCTOPUS, "(◎)", "╰─╯"),
                };
                self.print_at(col, row, color, top)?;
                if tall {
                    self.print_at(col, row + 1, color, bottom)?;
                }
            }
            Sprite::Player => {
                if tall {
                    self.print_at(col + 1, row, C_PLAYER, "▲")?;
                    self.print_at(col, row + 1, C_PLAYER, "/█\\")?;
                } else {
                    self.print_at(col, row, C_PLAYER, "/▲\\")?;
                }
            }
            Sprite::Missile => self.print_at(col, row, C_MISSILE, "║")?,
        }
        Ok(())
    }

    fn button(&mut self, label: &str, rect: Rect, hovered: bool) -> std::io::Result<()> {
        let Some((col, row)) = self.viewport.to_cell(rect.position) else {
            return Ok(());
        };
        if hovered {
            self.out.queue(style::SetAttribute(Attribute::Reverse))?;
        }
        self.print_at(col, row, C_BUTTON, &format!("[ {} ]", label))?;
        self.out.queue(style::SetAttribute(Attribute::Reset))?;
        Ok(())
    }

    fn text(&mut self, at: Vec2, text: &str) -> std::io::Result<()> {
        if let Some((col, row)) = self.viewport.to_cell(at) {
            self.print_at(col, row, C_TEXT, text)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_and_cells_round_trip_through_cell_centres() {
        let vp = Viewport::new(83, 40, Size::new(830, 600));
        assert_eq!(vp.to_cell(Vec2::new(0, 0)), Some((0, 0)));
        assert_eq!(vp.to_cell(Vec2::new(415, 300)), Some((41, 20)));
        assert_eq!(vp.to_world(41, 20), Vec2::new(415, 307));
        assert_eq!(vp.to_cell(vp.to_world(12, 7)), Some((12, 7)));
    }

    #[test]
    fn points_off_the_grid_have_no_cell() {
        let vp = Viewport::new(83, 40, Size::new(830, 600));
        assert_eq!(vp.to_cell(Vec2::new(-1, 10)), None);
        assert_eq!(vp.to_cell(Vec2::new(830, 10)), None);
        assert_eq!(vp.to_cell(Vec2::new(10, 600)), None);
    }
}

//! Headless character-grid render target
//!
//! Scales screen space down to a fixed grid of cells. Used by the demo
//! binary and handy for eyeballing a state in test output.

use core::fmt;

use glam::Vec2;

use super::{Align, Color, RenderTarget};
use crate::sim::Rect;

const EMPTY: char = ' ';
const SOLID: char = '#';
const ROUND: char = 'o';

pub struct AsciiCanvas {
    cols: usize,
    rows: usize,
    scale: Vec2,
    cells: Vec<char>,
}

impl AsciiCanvas {
    /// A `cols` x `rows` grid covering a `screen_width` x `screen_height` screen
    pub fn new(cols: usize, rows: usize, screen_width: f32, screen_height: f32) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            cols,
            rows,
            scale: Vec2::new(cols as f32 / screen_width, rows as f32 / screen_height),
            cells: vec![EMPTY; cols * rows],
        }
    }

    pub fn cell(&self, col: usize, row: usize) -> Option<char> {
        (col < self.cols && row < self.rows).then(|| self.cells[row * self.cols + col])
    }

    fn set(&mut self, col: i64, row: i64, c: char) {
        if col >= 0 && row >= 0 && (col as usize) < self.cols && (row as usize) < self.rows {
            self.cells[row as usize * self.cols + col as usize] = c;
        }
    }

    fn cell_is_empty(&self, col: i64, row: i64) -> bool {
        col >= 0 && row >= 0 && self.cell(col as usize, row as usize) == Some(EMPTY)
    }

    fn to_cell(&self, p: Vec2) -> (i64, i64) {
        let scaled = p * self.scale;
        (scaled.x.floor() as i64, scaled.y.floor() as i64)
    }

    /// Cell span covered by `rect`, at least one cell on each axis
    fn span(&self, rect: Rect) -> (i64, i64, i64, i64) {
        let (c0, r0) = self.to_cell(Vec2::new(rect.left(), rect.top()));
        let c1 = ((rect.right() * self.scale.x).ceil() as i64 - 1).max(c0);
        let r1 = ((rect.bottom() * self.scale.y).ceil() as i64 - 1).max(r0);
        (c0, r0, c1, r1)
    }

    fn fill(&mut self, rect: Rect, c: char) {
        let (c0, r0, c1, r1) = self.span(rect);
        for row in r0..=r1 {
            for col in c0..=c1 {
                self.set(col, row, c);
            }
        }
    }
}

impl RenderTarget for AsciiCanvas {
    fn clear(&mut self, _color: Color) {
        self.cells.fill(EMPTY);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        // A character grid cannot blend; translucent layers are skipped
        if color[3] < 1.0 {
            return;
        }
        self.fill(rect, SOLID);
    }

    fn fill_ellipse(&mut self, rect: Rect, color: Color) {
        if color[3] < 1.0 {
            return;
        }
        self.fill(rect, ROUND);
    }

    /// Lines only fill empty cells so they never hide the ball or paddles
    fn line(&mut self, from: Vec2, to: Vec2, _color: Color) {
        let (c0, r0) = self.to_cell(from);
        let (c1, r1) = self.to_cell(to);
        let glyph = if c0 == c1 {
            '|'
        } else if r0 == r1 {
            '-'
        } else {
            '*'
        };

        let steps = (c1 - c0).abs().max((r1 - r0).abs()).max(1);
        for i in 0..=steps {
            let col = c0 + (c1 - c0) * i / steps;
            let row = r0 + (r1 - r0) * i / steps;
            if self.cell_is_empty(col, row) {
                self.set(col, row, glyph);
            }
        }
    }

    fn text(&mut self, text: &str, pos: Vec2, _size: f32, align: Align, _color: Color) {
        let (mut col, row) = self.to_cell(pos);
        if align == Align::Center {
            col -= text.chars().count() as i64 / 2;
        }
        for (i, c) in text.chars().enumerate() {
            self.set(col + i as i64, row, c);
        }
    }
}

impl fmt::Display for AsciiCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.cols).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: String = row.iter().collect();
            write!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

/// Character-cell canvas for wireframe rendering
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::Write;

use poly3d_core::projection::{CANVAS_HEIGHT, CANVAS_WIDTH};

/// Character used for wireframe strokes.
const STROKE: char = '█';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    ch: char,
    fg: Color,
    bg: Color,
}

const BLANK: Cell = Cell {
    ch: ' ',
    fg: Color::White,
    bg: Color::Black,
};

/// Maps the fixed logical canvas onto a terminal-sized cell buffer.
///
/// Drawing calls take canvas coordinates; the scaling to cells happens
/// internally, so callers never see the terminal resolution.
pub struct Canvas {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(cols: u16, rows: u16) -> Self {
        let cols = cols.max(1) as usize;
        let rows = rows.max(1) as usize;
        Self {
            cols,
            rows,
            cells: vec![BLANK; cols * rows],
        }
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = BLANK;
        }
    }

    fn col_of(&self, x: f64) -> isize {
        (x * self.cols as f64 / f64::from(CANVAS_WIDTH)).round() as isize
    }

    fn row_of(&self, y: f64) -> isize {
        (y * self.rows as f64 / f64::from(CANVAS_HEIGHT)).round() as isize
    }

    /// Map a terminal cell reported by a mouse event back to canvas
    /// coordinates. Uses the cell center so hit tests are stable.
    pub fn pointer_pos(&self, col: u16, row: u16) -> (i32, i32) {
        let x = (f64::from(col) + 0.5) * f64::from(CANVAS_WIDTH) / self.cols as f64;
        let y = (f64::from(row) + 0.5) * f64::from(CANVAS_HEIGHT) / self.rows as f64;
        (x as i32, y as i32)
    }

    fn plot(&mut self, col: isize, row: isize, cell: Cell) {
        if col >= 0 && col < self.cols as isize && row >= 0 && row < self.rows as isize {
            self.cells[row as usize * self.cols + col as usize] = cell;
        }
    }

    /// Draw a line segment between two canvas points. Off-canvas parts are
    /// clipped cell by cell.
    pub fn line(&mut self, from: (f64, f64), to: (f64, f64), color: Color) {
        let (mut c0, mut r0) = (self.col_of(from.0), self.row_of(from.1));
        let (c1, r1) = (self.col_of(to.0), self.row_of(to.1));
        let dc = (c1 - c0).abs();
        let dr = -(r1 - r0).abs();
        let sc = if c0 < c1 { 1 } else { -1 };
        let sr = if r0 < r1 { 1 } else { -1 };
        let mut err = dc + dr;
        let cell = Cell {
            ch: STROKE,
            fg: color,
            bg: Color::Black,
        };

        loop {
            self.plot(c0, r0, cell);
            if c0 == c1 && r0 == r1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dr {
                err += dr;
                c0 += sc;
            }
            if e2 <= dc {
                err += dc;
                r0 += sr;
            }
        }
    }

    /// Fill a canvas-space rectangle with a background color.
    pub fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        let c1 = self.col_of(f64::from(x + width)) - 1;
        let r1 = self.row_of(f64::from(y + height)) - 1;
        let cell = Cell {
            ch: ' ',
            fg: Color::Black,
            bg: color,
        };
        for row in self.row_of(f64::from(y))..=r1 {
            for col in self.col_of(f64::from(x))..=c1 {
                self.plot(col, row, cell);
            }
        }
    }

    /// Draw a text label starting at a canvas position.
    pub fn text(&mut self, x: i32, y: i32, label: &str, fg: Color, bg: Color) {
        let row = self.row_of(f64::from(y));
        let mut col = self.col_of(f64::from(x));
        for ch in label.chars() {
            self.plot(col, row, Cell { ch, fg, bg });
            col += 1;
        }
    }

    /// Queue the whole buffer to the writer, one row at a time.
    pub fn present<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for row in 0..self.rows {
            writer.queue(cursor::MoveTo(0, row as u16))?;
            for col in 0..self.cols {
                let cell = self.cells[row * self.cols + col];
                writer.queue(SetForegroundColor(cell.fg))?;
                writer.queue(SetBackgroundColor(cell.bg))?;
                writer.queue(Print(cell.ch))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell_at(canvas: &Canvas, col: usize, row: usize) -> Cell {
        canvas.cells[row * canvas.cols + col]
    }

    #[test]
    fn clear_resets_every_cell() {
        let mut canvas = Canvas::new(16, 9);
        canvas.line((0.0, 0.0), (1279.0, 719.0), Color::White);
        canvas.clear();
        assert!(canvas.cells.iter().all(|&cell| cell == BLANK));
    }

    #[test]
    fn line_plots_both_endpoints() {
        let mut canvas = Canvas::new(16, 9);
        canvas.line((0.0, 0.0), (1279.0, 0.0), Color::White);
        assert_eq!(cell_at(&canvas, 0, 0).ch, STROKE);
        assert_eq!(cell_at(&canvas, 15, 0).ch, STROKE);
    }

    #[test]
    fn off_canvas_lines_are_clipped_not_fatal() {
        let mut canvas = Canvas::new(16, 9);
        canvas.line((-200.0, -100.0), (1400.0, 800.0), Color::White);
        canvas.line((640.0, -50.0), (640.0, 750.0), Color::White);
    }

    #[test]
    fn fill_rect_covers_the_mapped_cells() {
        let mut canvas = Canvas::new(128, 72);
        // 1280x720 onto 128x72 is a flat 10x scale
        canvas.fill_rect(50, 50, 120, 40, Color::White);
        assert_eq!(cell_at(&canvas, 5, 5).bg, Color::White);
        assert_eq!(cell_at(&canvas, 16, 8).bg, Color::White);
        assert_eq!(cell_at(&canvas, 17, 9).bg, Color::Black);
        assert_eq!(cell_at(&canvas, 4, 5).bg, Color::Black);
    }

    #[test]
    fn pointer_maps_back_into_the_rect_it_was_drawn_at() {
        let canvas = Canvas::new(128, 72);
        let (x, y) = canvas.pointer_pos(10, 7);
        assert!((50..170).contains(&x));
        assert!((50..90).contains(&y));
    }

    #[test]
    fn text_is_clipped_at_the_canvas_edge() {
        let mut canvas = Canvas::new(16, 9);
        canvas.text(1200, 300, "long label running off", Color::Black, Color::White);
        assert_eq!(cell_at(&canvas, 15, 4).ch, 'l');
    }
}

/// Character-grid drawing surface for terminal rendering
use crossterm::{
    cursor,
    style::{Color as TermColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    QueueableCommand,
};
use rgb::RGB8;
use std::io::Write;
use wire3d_core::{Color, DrawSurface, BLACK, WHITE};

/// Virtual pixel height the grid is scaled to, matching the classic 600px viewer
pub const VIEWPORT_HEIGHT: f64 = 600.0;

/// Terminal cells are roughly twice as tall as they are wide
const CELL_ASPECT: f64 = 2.0;

/// Cell coordinates beyond this are treated like non-finite points
const CELL_LIMIT: f64 = 65536.0;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    ch: char,
    color: Color,
}

const BLANK: Cell = Cell {
    ch: ' ',
    color: WHITE,
};

/// A [`DrawSurface`] that rasterizes stroked paths into terminal cells.
///
/// Drawing happens in virtual pixels; each cell covers
/// `px_per_col x px_per_row` of them.
pub struct TerminalCanvas {
    cols: usize,
    rows: usize,
    px_per_row: f64,
    px_per_col: f64,
    cells: Vec<Cell>,
    background: Color,
    color: Color,
    origin: (f64, f64),
    path: Vec<(f64, f64)>,
    subpath_start: Option<usize>,
}

pub(crate) fn term_color(c: RGB8) -> TermColor {
    TermColor::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

impl TerminalCanvas {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self::with_viewport_height(cols, rows, VIEWPORT_HEIGHT)
    }

    pub fn with_viewport_height(cols: usize, rows: usize, viewport_height: f64) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        let px_per_row = viewport_height / rows as f64;
        Self {
            cols,
            rows,
            px_per_row,
            px_per_col: px_per_row / CELL_ASPECT,
            cells: vec![BLANK; cols * rows],
            background: BLACK,
            color: WHITE,
            origin: (0.0, 0.0),
            path: Vec::new(),
            subpath_start: None,
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Character and color at a cell, if it is inside the grid
    pub fn cell(&self, col: usize, row: usize) -> Option<(char, Color)> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        let cell = self.cells[row * self.cols + col];
        Some((cell.ch, cell.color))
    }

    /// Number of non-blank cells
    pub fn inked(&self) -> usize {
        self.cells.iter().filter(|c| c.ch != ' ').count()
    }

    /// The grid as plain text, one line per row
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity((self.cols + 1) * self.rows);
        for row in self.cells.chunks(self.cols) {
            out.extend(row.iter().map(|c| c.ch));
            out.push('\n');
        }
        out
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.queue(SetBackgroundColor(term_color(self.background)))?;
        for (y, row) in self.cells.chunks(self.cols).enumerate() {
            writer.queue(cursor::MoveTo(0, y as u16))?;
            let mut current = None;
            for cell in row {
                if current != Some(cell.color) {
                    writer.queue(SetForegroundColor(term_color(cell.color)))?;
                    current = Some(cell.color);
                }
                writer.queue(Print(cell.ch))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }

    fn to_cell(&self, (x, y): (f64, f64)) -> Option<(i64, i64)> {
        let col = (x / self.px_per_col).floor();
        let row = (y / self.px_per_row).floor();
        if !(col.abs() < CELL_LIMIT && row.abs() < CELL_LIMIT) {
            return None;
        }
        Some((col as i64, row as i64))
    }

    fn plot(&mut self, col: i64, row: i64, ch: char) {
        if col < 0 || row < 0 || col >= self.cols as i64 || row >= self.rows as i64 {
            return;
        }
        self.cells[row as usize * self.cols + col as usize] = Cell {
            ch,
            color: self.color,
        };
    }

    fn segment(&mut self, from: (f64, f64), to: (f64, f64)) {
        let (Some((mut x0, mut y0)), Some((mut x1, mut y1))) = (self.to_cell(from), self.to_cell(to))
        else {
            return;
        };
        let ch = stroke_char(x1 - x0, y1 - y0);

        let steep = (x0 - x1).abs() < (y0 - y1).abs();
        if steep {
            std::mem::swap(&mut x0, &mut y0);
            std::mem::swap(&mut x1, &mut y1);
        }
        if x0 > x1 {
            std::mem::swap(&mut x0, &mut x1);
            std::mem::swap(&mut y0, &mut y1);
        }

        let dx = x1 - x0;
        let derror2 = (y1 - y0).abs() * 2;
        let mut error2 = 0;
        let mut y = y0;
        for x in x0..=x1 {
            if steep {
                self.plot(y, x, ch);
            } else {
                self.plot(x, y, ch);
            }
            error2 += derror2;
            if error2 > dx {
                y += if y1 > y0 { 1 } else { -1 };
                error2 -= dx * 2;
            }
        }
    }
}

/// Pick a glyph that follows the segment direction, y pointing down
fn stroke_char(dx: i64, dy: i64) -> char {
    let (ax, ay) = (dx.abs(), dy.abs());
    if ax == 0 && ay == 0 {
        '+'
    } else if ax > 2 * ay {
        '-'
    } else if ay > 2 * ax {
        '|'
    } else if (dx > 0) == (dy > 0) {
        '\\'
    } else {
        '/'
    }
}

impl DrawSurface for TerminalCanvas {
    fn width(&self) -> f64 {
        self.cols as f64 * self.px_per_col
    }

    fn height(&self) -> f64 {
        self.rows as f64 * self.px_per_row
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn begin_path(&mut self) {
        self.path.clear();
        self.subpath_start = None;
    }

    fn move_to(&mut self, x: f64, y: f64) {
        // a lone move_to starts a new subpath; mark the break with NaN
        if !self.path.is_empty() {
            self.path.push((f64::NAN, f64::NAN));
        }
        self.subpath_start = Some(self.path.len());
        self.path.push((x + self.origin.0, y + self.origin.1));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        if self.subpath_start.is_none() {
            self.subpath_start = Some(self.path.len());
        }
        self.path.push((x + self.origin.0, y + self.origin.1));
    }

    fn close_path(&mut self) {
        if let Some(start) = self.subpath_start {
            let first = self.path[start];
            self.path.push(first);
        }
    }

    fn stroke(&mut self) {
        let path = std::mem::take(&mut self.path);
        for pair in path.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            if from.0.is_finite() && from.1.is_finite() && to.0.is_finite() && to.1.is_finite() {
                self.segment(from, to);
            }
        }
        self.path = path;
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.origin.0 += dx;
        self.origin.1 += dy;
    }

    fn clear(&mut self, background: Color) {
        self.background = background;
        self.cells.fill(BLANK);
    }
}

use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

use crate::game::draw::BACKGROUND_COLOR;
use crate::game::{Canvas, GameConfig, Position, Rgb};

/// Terminal columns used by one grid cell
pub const CELL_WIDTH: u16 = 2;

/// Colors a painted cell was drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaintedCell {
    pub fill: Rgb,
    pub border: Rgb,
}

/// Persistent grid of painted cells.
///
/// Cells keep their color until explicitly cleared, so the game only paints
/// what changed each tick. Renders as a ratatui widget.
#[derive(Debug, Clone)]
pub struct CellBuffer {
    columns: i32,
    rows: i32,
    cell_size: i32,
    cells: Vec<Option<PaintedCell>>,
}

impl CellBuffer {
    /// Empty buffer sized for a validated config
    pub fn new(config: &GameConfig) -> Self {
        Self {
            columns: config.columns(),
            rows: config.rows(),
            cell_size: config.cell_size,
            cells: vec![None; config.cell_count()],
        }
    }

    /// Terminal area needed to show every cell, saturating at `u16::MAX`
    pub fn size(&self) -> (u16, u16) {
        let columns = u16::try_from(self.columns).unwrap_or(u16::MAX);
        let rows = u16::try_from(self.rows).unwrap_or(u16::MAX);
        (columns.saturating_mul(CELL_WIDTH), rows)
    }

    pub fn cell(&self, column: i32, row: i32) -> Option<PaintedCell> {
        self.index(column, row).and_then(|i| self.cells[i])
    }

    /// Color painted at a field position
    pub fn at(&self, position: Position) -> Option<PaintedCell> {
        let (column, row) = position.cell_index(self.cell_size);
        self.cell(column, row)
    }

    pub fn painted_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    fn index(&self, column: i32, row: i32) -> Option<usize> {
        let inside = (0..self.columns).contains(&column) && (0..self.rows).contains(&row);
        inside.then(|| (row * self.columns + column) as usize)
    }

    fn slot(&mut self, position: Position) -> Option<&mut Option<PaintedCell>> {
        let (column, row) = position.cell_index(self.cell_size);
        self.index(column, row).map(|i| &mut self.cells[i])
    }
}

impl Canvas for CellBuffer {
    fn draw_cell(&mut self, position: Position, fill: Rgb, border: Rgb) {
        if let Some(slot) = self.slot(position) {
            *slot = Some(PaintedCell { fill, border });
        }
    }

    fn clear_cell(&mut self, position: Position) {
        if let Some(slot) = self.slot(position) {
            *slot = None;
        }
    }

    fn clear(&mut self) {
        self.cells.fill(None);
    }
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

impl Widget for &CellBuffer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let background = color(BACKGROUND_COLOR);

        for (row, y) in (0..self.rows).zip(area.y..area.bottom()) {
            let xs = (area.x..area.right()).step_by(CELL_WIDTH as usize);
            for (column, x) in (0..self.columns).zip(xs) {
                if x.saturating_add(CELL_WIDTH) > area.right() {
                    break;
                }

                let (symbols, fg, bg) = match self.cell(column, row) {
                    Some(painted) => (["[", "]"], color(painted.border), color(painted.fill)),
                    None => ([" ", " "], background, background),
                };

                for (offset, symbol) in symbols.iter().enumerate() {
                    if let Some(cell) = buf.cell_mut((x + offset as u16, y)) {
                        cell.set_symbol(symbol).set_fg(fg).set_bg(bg);
                    }
                }
            }
        }
    }
}

//! Terminal canvas: a [`Surface`] backed by a ratatui buffer.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
};

use crate::color::blend;
use crate::particle::Viewport;
use crate::surface::Surface;

/// Default logical width of one terminal cell.
pub const DEFAULT_CELL_WIDTH: f32 = 8.0;
/// Default logical height of one terminal cell.
pub const DEFAULT_CELL_HEIGHT: f32 = 16.0;

/// Font sizes at or above this render bold.
const BOLD_FONT_SIZE: f32 = 20.0;
/// Font sizes below this render dim.
const DIM_FONT_SIZE: f32 = 13.0;

/// Draws particle text into the cells of `area`.
///
/// One cell covers `cell_width` x `cell_height` logical pixels. Opacity is
/// emulated by blending the fill color toward `background`.
#[derive(Debug)]
pub struct TerminalCanvas<'a> {
    buffer: &'a mut Buffer,
    area: Rect,
    cell_width: f32,
    cell_height: f32,
    background: Color,
    alpha: f32,
    fill: Color,
    font_size: f32,
}

impl<'a> TerminalCanvas<'a> {
    /// Create a canvas over `area` of `buffer` with the given cell size.
    pub fn new(buffer: &'a mut Buffer, area: Rect, cell_width: f32, cell_height: f32) -> Self {
        Self {
            buffer,
            area,
            cell_width,
            cell_height,
            background: Color::Black,
            alpha: 1.0,
            fill: Color::White,
            font_size: DEFAULT_CELL_HEIGHT,
        }
    }

    /// Use a different color to fade toward.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Logical size covered by `area`.
    pub fn viewport_for(area: Rect, cell_width: f32, cell_height: f32) -> Viewport {
        Viewport::new(
            area.width as f32 * cell_width,
            area.height as f32 * cell_height,
        )
    }

    /// Logical centre of the cell at absolute terminal position `(column, row)`.
    pub fn cell_center(
        area: Rect,
        cell_width: f32,
        cell_height: f32,
        column: u16,
        row: u16,
    ) -> (f32, f32) {
        let col = column.saturating_sub(area.x) as f32;
        let row = row.saturating_sub(area.y) as f32;
        ((col + 0.5) * cell_width, (row + 0.5) * cell_height)
    }

    /// Logical size of this canvas.
    pub fn viewport(&self) -> Viewport {
        Self::viewport_for(self.area, self.cell_width, self.cell_height)
    }

    fn style(&self) -> Style {
        let mut style = Style::new().fg(blend(self.fill, self.background, self.alpha));
        if self.font_size >= BOLD_FONT_SIZE {
            style = style.add_modifier(Modifier::BOLD);
        } else if self.font_size < DIM_FONT_SIZE {
            style = style.add_modifier(Modifier::DIM);
        }
        style
    }
}

impl Surface for TerminalCanvas<'_> {
    fn clear(&mut self) {
        for y in self.area.top()..self.area.bottom() {
            for x in self.area.left()..self.area.right() {
                if let Some(cell) = self.buffer.cell_mut((x, y)) {
                    cell.reset();
                }
            }
        }
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.alpha = alpha.clamp(0.0, 1.0);
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill = color;
    }

    fn set_font(&mut self, size: f32) {
        self.font_size = size;
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        // Fully faded text would only paint background-colored glyphs.
        if self.alpha <= 0.0 || text.is_empty() {
            return;
        }

        let col = (x / self.cell_width).floor();
        let row = (y / self.cell_height).floor();
        if col < 0.0 || row < 0.0 || col >= self.area.width as f32 || row >= self.area.height as f32
        {
            return;
        }

        let col = col as u16;
        let row = row as u16;
        let max_width = (self.area.width - col) as usize;
        let style = self.style();
        self.buffer.set_stringn(
            self.area.x + col,
            self.area.y + row,
            text,
            max_width,
            style,
        );
    }
}

//! Drawing surface abstraction.

use ratatui::style::Color;

/// A 2D surface particles draw onto.
///
/// Coordinates are logical pixels. State set through the `set_*` methods
/// applies to every following [`fill_text`](Surface::fill_text) call until
/// changed again.
pub trait Surface {
    /// Erase everything drawn so far.
    fn clear(&mut self);

    /// Opacity (0.0-1.0) applied to subsequent text.
    fn set_global_alpha(&mut self, alpha: f32);

    /// Color of subsequent text.
    fn set_fill_color(&mut self, color: Color);

    /// Font size of subsequent text, in logical pixels.
    fn set_font(&mut self, size: f32);

    /// Draw `text` with its origin at `(x, y)`.
    fn fill_text(&mut self, text: &str, x: f32, y: f32);
}

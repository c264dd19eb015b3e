//! Color utility functions for fading particles on the terminal canvas.

use ratatui::style::Color;

/// Resolve a color to RGB components.
///
/// Named colors use the xterm default palette. `Reset` resolves to white,
/// matching the usual default foreground of a dark terminal.
pub fn to_rgb(color: Color) -> (u8, u8, u8) {
    match color {
        Color::Rgb(r, g, b) => (r, g, b),
        Color::Black => (0, 0, 0),
        Color::Red => (205, 0, 0),
        Color::Green => (0, 205, 0),
        Color::Yellow => (205, 205, 0),
        Color::Blue => (0, 0, 238),
        Color::Magenta => (205, 0, 205),
        Color::Cyan => (0, 205, 205),
        Color::Gray => (229, 229, 229),
        Color::DarkGray => (127, 127, 127),
        Color::LightRed => (255, 0, 0),
        Color::LightGreen => (0, 255, 0),
        Color::LightYellow => (255, 255, 0),
        Color::LightBlue => (92, 92, 255),
        Color::LightMagenta => (255, 0, 255),
        Color::LightCyan => (0, 255, 255),
        Color::White | Color::Reset => (255, 255, 255),
        Color::Indexed(i) => indexed_to_rgb(i),
    }
}

/// Blend `fg` over `bg` with the given alpha (0.0-1.0).
pub fn blend(fg: Color, bg: Color, alpha: f32) -> Color {
    let alpha = alpha.clamp(0.0, 1.0);
    let (fr, fg_, fb) = to_rgb(fg);
    let (br, bg_, bb) = to_rgb(bg);

    let mix = |f: u8, b: u8| (b as f32 + (f as f32 - b as f32) * alpha).round() as u8;

    Color::Rgb(mix(fr, br), mix(fg_, bg_), mix(fb, bb))
}

/// Convert an xterm 256-color index to RGB.
fn indexed_to_rgb(index: u8) -> (u8, u8, u8) {
    match index {
        0..=15 => {
            const BASE: [Color; 16] = [
                Color::Black,
                Color::Red,
                Color::Green,
                Color::Yellow,
                Color::Blue,
                Color::Magenta,
                Color::Cyan,
                Color::Gray,
                Color::DarkGray,
                Color::LightRed,
                Color::LightGreen,
                Color::LightYellow,
                Color::LightBlue,
                Color::LightMagenta,
                Color::LightCyan,
                Color::White,
            ];
            to_rgb(BASE[index as usize])
        }
        // 6x6x6 color cube
        16..=231 => {
            let i = index - 16;
            let level = |v: u8| if v == 0 { 0 } else { 55 + v * 40 };
            (level(i / 36), level((i / 6) % 6), level(i % 6))
        }
        // Grayscale ramp
        232..=255 => {
            let v = 8 + (index - 232) * 10;
            (v, v, v)
        }
    }
}

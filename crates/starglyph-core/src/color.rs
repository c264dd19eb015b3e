//! Particle colors: parsing user input and the preset palette.

use std::str::FromStr;

use ratatui::style::Color;

use crate::error::{CoreError, Result};

/// Parse a color from a hex code (`#rgb` or `#rrggbb`) or a color name.
///
/// Names are resolved by ratatui (`"red"`, `"light-blue"`, `"gray"`, ...).
pub fn parse_color(input: &str) -> Result<Color> {
    let trimmed = input.trim();
    if let Some(hex) = trimmed.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| CoreError::InvalidColor(input.to_string()));
    }
    Color::from_str(trimmed).map_err(|_| CoreError::InvalidColor(input.to_string()))
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        // #rgb expands each nibble: #fa0 == #ffaa00
        3 => {
            let mut channels = hex
                .chars()
                .map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
            let r = channels.next()??;
            let g = channels.next()??;
            let b = channels.next()??;
            Some(Color::Rgb(r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

/// Preset particle colors cycled by the color control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorPreset {
    #[default]
    White,
    Gold,
    Cyan,
    Magenta,
    Orange,
    Lime,
    Sky,
}

impl ColorPreset {
    /// All presets in cycle order.
    pub const ALL: [ColorPreset; 7] = [
        ColorPreset::White,
        ColorPreset::Gold,
        ColorPreset::Cyan,
        ColorPreset::Magenta,
        ColorPreset::Orange,
        ColorPreset::Lime,
        ColorPreset::Sky,
    ];

    /// Cycle to the next preset.
    pub fn next(self) -> Self {
        match self {
            ColorPreset::White => ColorPreset::Gold,
            ColorPreset::Gold => ColorPreset::Cyan,
            ColorPreset::Cyan => ColorPreset::Magenta,
            ColorPreset::Magenta => ColorPreset::Orange,
            ColorPreset::Orange => ColorPreset::Lime,
            ColorPreset::Lime => ColorPreset::Sky,
            ColorPreset::Sky => ColorPreset::White,
        }
    }

    /// Cycle to the previous preset.
    pub fn prev(self) -> Self {
        match self {
            ColorPreset::White => ColorPreset::Sky,
            ColorPreset::Gold => ColorPreset::White,
            ColorPreset::Cyan => ColorPreset::Gold,
            ColorPreset::Magenta => ColorPreset::Cyan,
            ColorPreset::Orange => ColorPreset::Magenta,
            ColorPreset::Lime => ColorPreset::Orange,
            ColorPreset::Sky => ColorPreset::Lime,
        }
    }

    /// Hex code of the preset.
    pub fn hex(self) -> &'static str {
        match self {
            ColorPreset::White => "#ffffff",
            ColorPreset::Gold => "#ffd700",
            ColorPreset::Cyan => "#00ffff",
            ColorPreset::Magenta => "#ff00ff",
            ColorPreset::Orange => "#ff8c00",
            ColorPreset::Lime => "#7fff00",
            ColorPreset::Sky => "#87ceeb",
        }
    }

    /// Convert preset to a ratatui color.
    pub fn color(self) -> Color {
        match self {
            ColorPreset::White => Color::Rgb(255, 255, 255),
            ColorPreset::Gold => Color::Rgb(255, 215, 0),
            ColorPreset::Cyan => Color::Rgb(0, 255, 255),
            ColorPreset::Magenta => Color::Rgb(255, 0, 255),
            ColorPreset::Orange => Color::Rgb(255, 140, 0),
            ColorPreset::Lime => Color::Rgb(127, 255, 0),
            ColorPreset::Sky => Color::Rgb(135, 206, 235),
        }
    }

    /// Find the preset matching a color, if any.
    pub fn from_color(color: Color) -> Option<Self> {
        Self::ALL.into_iter().find(|preset| preset.color() == color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_colors() {
        assert_eq!(parse_color("#fff"), Ok(Color::Rgb(255, 255, 255)));
        assert_eq!(parse_color("#fa0"), Ok(Color::Rgb(255, 170, 0)));
        assert_eq!(parse_color("#87ceeb"), Ok(Color::Rgb(135, 206, 235)));
        assert_eq!(parse_color("  #000000 "), Ok(Color::Rgb(0, 0, 0)));
    }

    #[test]
    fn test_parse_named_colors() {
        assert_eq!(parse_color("red"), Ok(Color::Red));
        assert_eq!(parse_color("white"), Ok(Color::White));
    }

    #[test]
    fn test_parse_invalid_colors() {
        assert!(parse_color("#ff").is_err());
        assert!(parse_color("#gggggg").is_err());
        assert!(parse_color("not-a-color").is_err());
        assert_eq!(
            parse_color("#12345"),
            Err(CoreError::InvalidColor("#12345".to_string()))
        );
    }

    #[test]
    fn test_preset_cycle() {
        let mut preset = ColorPreset::default();
        for _ in 0..ColorPreset::ALL.len() {
            preset = preset.next();
        }
        assert_eq!(preset, ColorPreset::White);
        assert_eq!(ColorPreset::White.prev(), ColorPreset::Sky);
        assert_eq!(ColorPreset::Gold.prev().next(), ColorPreset::Gold);
    }

    #[test]
    fn test_preset_hex_matches_color() {
        for preset in ColorPreset::ALL {
            assert_eq!(parse_color(preset.hex()), Ok(preset.color()));
            assert_eq!(ColorPreset::from_color(preset.color()), Some(preset));
        }
        assert_eq!(ColorPreset::from_color(Color::Red), None);
    }
}

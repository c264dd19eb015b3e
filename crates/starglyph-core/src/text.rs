//! Text presets offered by the text control.

/// Preset glyphs and words a particle can display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextPreset {
    #[default]
    Star,
    Sparkle,
    Asterisk,
    Plus,
    Dot,
    Rust,
    Zero,
    One,
    Hola,
}

impl TextPreset {
    /// All presets in cycle order.
    pub const ALL: [TextPreset; 9] = [
        TextPreset::Star,
        TextPreset::Sparkle,
        TextPreset::Asterisk,
        TextPreset::Plus,
        TextPreset::Dot,
        TextPreset::Rust,
        TextPreset::Zero,
        TextPreset::One,
        TextPreset::Hola,
    ];

    /// The rendered text.
    pub fn text(self) -> &'static str {
        match self {
            TextPreset::Star => "★",
            TextPreset::Sparkle => "✦",
            TextPreset::Asterisk => "*",
            TextPreset::Plus => "+",
            TextPreset::Dot => "·",
            TextPreset::Rust => "Rust",
            TextPreset::Zero => "0",
            TextPreset::One => "1",
            TextPreset::Hola => "Hola",
        }
    }

    /// Cycle to the next preset.
    pub fn next(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Cycle to the previous preset.
    pub fn prev(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Find the preset rendering exactly `text`, if any.
    pub fn from_text(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|preset| preset.text() == text)
    }

    fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|&preset| preset == self)
            .unwrap_or(0)
    }
}

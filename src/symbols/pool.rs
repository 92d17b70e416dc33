//! Symbol pools and the presets shipped with the crate.

use unicode_segmentation::UnicodeSegmentation;

/// Default symbols for light pixels.
pub const EMOJI_LIGHT: &str = "🍀😀";

/// Default symbols for dark pixels.
pub const EMOJI_DARK: &str = "🐳🐬🐋🐟";

/// Ordered list of grapheme clusters that may stand in for one pixel class.
///
/// Each entry is one user-perceived character, so multi-code-point emoji
/// (skin tones, ZWJ sequences, flags) are never split apart.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SymbolPool {
    symbols: Vec<String>,
}

impl SymbolPool {
    /// Split `text` into extended grapheme clusters.
    pub fn from_text(text: &str) -> Self {
        Self {
            symbols: text.graphemes(true).map(str::to_owned).collect(),
        }
    }

    /// Build a pool from already separated symbols.
    pub fn from_symbols<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            symbols: symbols.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbol at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.symbols.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(String::as_str)
    }

    /// Concatenate the pool back into a single string.
    pub fn to_text(&self) -> String {
        self.symbols.concat()
    }

    pub(crate) fn as_slice(&self) -> &[String] {
        &self.symbols
    }
}

/// Named pairs of light/dark pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SymbolPreset {
    /// Clovers and smileys on a sea of whales
    #[default]
    Emoji,
    /// Hollow and filled squares
    Blocks,
    /// Plain ASCII for terminals without emoji fonts
    Ascii,
}

impl SymbolPreset {
    /// Light and dark symbol text for this preset.
    pub fn texts(&self) -> (&'static str, &'static str) {
        match self {
            SymbolPreset::Emoji => (EMOJI_LIGHT, EMOJI_DARK),
            SymbolPreset::Blocks => ("□", "■"),
            SymbolPreset::Ascii => (" .", "#@"),
        }
    }

    /// Light and dark pools for this preset.
    pub fn pools(&self) -> (SymbolPool, SymbolPool) {
        let (light, dark) = self.texts();
        (SymbolPool::from_text(light), SymbolPool::from_text(dark))
    }

    pub fn name(&self) -> &'static str {
        match self {
            SymbolPreset::Emoji => "emoji",
            SymbolPreset::Blocks => "blocks",
            SymbolPreset::Ascii => "ascii",
        }
    }

    /// Look up a preset by its name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "emoji" => Some(SymbolPreset::Emoji),
            "blocks" => Some(SymbolPreset::Blocks),
            "ascii" => Some(SymbolPreset::Ascii),
            _ => None,
        }
    }
}

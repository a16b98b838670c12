//! Color themes and the ANSI escapes built from them.
//!
//! A theme is a TOML document with a `name` and a `[colors]` table of
//! `"#rrggbb"` strings, one per [`ThemeColors`] field (`header_bg` may be
//! omitted). `catppuccin-mocha` (dark, default) and `catppuccin-latte`
//! (light) are compiled in from `themes/`; the `theme_file` option loads any
//! other file of the same shape.

use crate::domain::error::{MarqueeError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "catppuccin-mocha";

const BUILT_IN: [(&str, &str); 2] = [
    ("catppuccin-mocha", include_str!("../../themes/catppuccin-mocha.toml")),
    ("catppuccin-latte", include_str!("../../themes/catppuccin-latte.toml")),
];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colors (`"#rrggbb"`) for every UI element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Footer, subtitles, secondary columns.
    pub text_dim: String,

    pub border: String,
    pub search_bar_border: String,

    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,

    /// Favorite marker on result cards and in the header.
    pub favorite_fg: String,
    /// Frame of the detail modal and favorites overlay.
    pub overlay_border: String,
    /// Error line in the detail modal.
    pub error_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name, or `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        BUILT_IN
            .iter()
            .find(|(builtin, _)| *builtin == name)
            .and_then(|(_, source)| toml::from_str(source).ok())
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`MarqueeError::Theme`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| MarqueeError::Theme(format!("failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| MarqueeError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// 24-bit foreground escape for `hex`.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        truecolor(38, hex)
    }

    /// 24-bit background escape for `hex`.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        truecolor(48, hex)
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\x1b[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\x1b[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\x1b[0m"
    }
}

/// SGR escape selecting an RGB color; `layer` is 38 (fg) or 48 (bg).
/// Anything but `#rrggbb` renders as white.
fn truecolor(layer: u8, hex: &str) -> String {
    let digits = hex.trim().trim_start_matches('#');
    let [r, g, b] = match u32::from_str_radix(digits, 16) {
        Ok(packed) if digits.len() == 6 => {
            let [_, r, g, b] = packed.to_be_bytes();
            [r, g, b]
        }
        _ => [u8::MAX; 3],
    };
    format!("\x1b[{layer};2;{r};{g};{b}m")
}

impl Default for Theme {
    /// The built-in `catppuccin-mocha` theme.
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse, which the tests rule out.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).expect("built-in catppuccin-mocha theme should always parse")
    }
}

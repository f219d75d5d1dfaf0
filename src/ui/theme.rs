//! Theme management and ANSI escape sequence generation.
//!
//! Themes are TOML files. Four Catppuccin variants are compiled in; a custom
//! file can be supplied through the `theme_file` setting.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha` (default)
//! - `catppuccin-latte`
//! - `catppuccin-frappe`
//! - `catppuccin-macchiato`
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#585b70"
//! search_bar_focused = "#f5c2e7"
//! button_enabled = "#a6e3a1"
//! button_disabled = "#585b70"
//! empty_state_fg = "#89b4fa"
//! modal_border = "#cba6f7"
//! modal_bg = "#181825"
//! toast_fg = "#1e1e2e"
//! toast_bg = "#f38ba8"
//! ```

use crate::domain::error::{GalleryError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const MOCHA: &str = include_str!("../../themes/catppuccin-mocha.toml");
const LATTE: &str = include_str!("../../themes/catppuccin-latte.toml");
const FRAPPE: &str = include_str!("../../themes/catppuccin-frappe.toml");
const MACCHIATO: &str = include_str!("../../themes/catppuccin-macchiato.toml");

/// Color scheme for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette.
    pub colors: ThemeColors,
}

/// Hex colors for every UI element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text.
    pub header_fg: String,
    /// Optional header background.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Selected row foreground.
    pub selection_fg: String,
    /// Selected row background.
    pub selection_bg: String,

    /// Normal text.
    pub text_normal: String,
    /// Dimmed text (footer, column headers, disabled hints).
    pub text_dim: String,

    /// Separator lines.
    pub border: String,

    /// Search box frame while unfocused.
    pub search_bar_border: String,
    /// Search box frame while focused.
    pub search_bar_focused: String,

    /// Enabled pagination button.
    pub button_enabled: String,
    /// Disabled pagination button.
    pub button_disabled: String,

    /// Loading, exhausted and empty messages.
    pub empty_state_fg: String,

    /// Detail dialog frame.
    pub modal_border: String,
    /// Detail dialog fill.
    pub modal_bg: String,

    /// Toast text.
    pub toast_fg: String,
    /// Toast fill.
    pub toast_bg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// # Examples
    ///
    /// ```
    /// use zgallery::ui::Theme;
    ///
    /// assert_eq!(Theme::from_name("catppuccin-latte").unwrap().name, "catppuccin-latte");
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => MOCHA,
            "catppuccin-latte" => LATTE,
            "catppuccin-frappe" => FRAPPE,
            "catppuccin-macchiato" => MACCHIATO,
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Theme`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| GalleryError::Theme(format!("cannot read {}: {e}", path.display())))?;

        toml::from_str(&contents)
            .map_err(|e| GalleryError::Theme(format!("cannot parse {}: {e}", path.display())))
    }

    /// Converts `#rrggbb` to RGB, falling back to white on bad input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// 24-bit foreground escape sequence.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// Bold.
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Dim.
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Reset all attributes.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Catppuccin Mocha.
    ///
    /// Falls back to a palette built from Mocha's colors if the bundled file
    /// somehow fails to parse.
    fn default() -> Self {
        Self::from_name("catppuccin-mocha").unwrap_or_else(|| Self {
            name: "catppuccin-mocha".to_string(),
            colors: ThemeColors {
                header_fg: "#cdd6f4".to_string(),
                header_bg: None,
                selection_fg: "#1e1e2e".to_string(),
                selection_bg: "#f5c2e7".to_string(),
                text_normal: "#cdd6f4".to_string(),
                text_dim: "#6c7086".to_string(),
                border: "#45475a".to_string(),
                search_bar_border: "#585b70".to_string(),
                search_bar_focused: "#f5c2e7".to_string(),
                button_enabled: "#a6e3a1".to_string(),
                button_disabled: "#585b70".to_string(),
                empty_state_fg: "#89b4fa".to_string(),
                modal_border: "#cba6f7".to_string(),
                modal_bg: "#181825".to_string(),
                toast_fg: "#1e1e2e".to_string(),
                toast_bg: "#f38ba8".to_string(),
            },
        })
    }
}

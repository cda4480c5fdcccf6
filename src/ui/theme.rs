//! Color theme for the link widgets.
//!
//! Rendering code references semantic [`Theme`] fields instead of hardcoded
//! `ratatui::style::Color` values, so hosts can restyle every widget by
//! swapping the active theme.

use ratatui::style::Color;

/// Semantic color roles used by the widget views.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Human-readable name, matchable via [`Theme::by_name`].
    pub name: &'static str,

    /// Primary text (plain labels, non-link names).
    pub fg: Color,
    /// Muted text (tooltip summaries, disabled affordances, separators).
    pub fg_dim: Color,
    /// Link text: file names that open something when activated.
    pub link: Color,
    /// Interactive controls (play/stop, settings, toggles).
    pub control: Color,
    /// Success status glyphs.
    pub success: Color,
    /// Error status glyphs and the remove control.
    pub error: Color,
    /// Background for the selected row in a list.
    pub selection_bg: Color,
}

impl Theme {
    /// All built-in themes, in display order.
    pub fn all() -> &'static [Theme] {
        &BUILT_IN_THEMES
    }

    /// Find a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        BUILT_IN_THEMES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// The default theme (Catppuccin Mocha).
    pub fn default_theme() -> &'static Theme {
        &BUILT_IN_THEMES[0]
    }
}

static BUILT_IN_THEMES: [Theme; 4] = [
    // 0 - Catppuccin Mocha (default)
    Theme {
        name: "Catppuccin Mocha",
        fg: Color::Rgb(205, 214, 244),        // text
        fg_dim: Color::Rgb(108, 112, 134),    // overlay0
        link: Color::Rgb(137, 180, 250),      // blue
        control: Color::Rgb(249, 226, 175),   // yellow
        success: Color::Rgb(166, 227, 161),   // green
        error: Color::Rgb(243, 139, 168),     // red
        selection_bg: Color::Rgb(69, 71, 90), // surface1
    },
    // 1 - Dracula
    Theme {
        name: "Dracula",
        fg: Color::Rgb(248, 248, 242),
        fg_dim: Color::Rgb(98, 114, 164),
        link: Color::Rgb(139, 233, 253),    // cyan
        control: Color::Rgb(241, 250, 140), // yellow
        success: Color::Rgb(80, 250, 123),
        error: Color::Rgb(255, 85, 85),
        selection_bg: Color::Rgb(68, 71, 90),
    },
    // 2 - Nord
    Theme {
        name: "Nord",
        fg: Color::Rgb(216, 222, 233),
        fg_dim: Color::Rgb(76, 86, 106),
        link: Color::Rgb(136, 192, 208),    // frost
        control: Color::Rgb(235, 203, 139), // yellow
        success: Color::Rgb(163, 190, 140),
        error: Color::Rgb(191, 97, 106),
        selection_bg: Color::Rgb(67, 76, 94),
    },
    // 3 - Gruvbox Dark
    Theme {
        name: "Gruvbox Dark",
        fg: Color::Rgb(235, 219, 178),
        fg_dim: Color::Rgb(146, 131, 116),
        link: Color::Rgb(131, 165, 152),   // aqua
        control: Color::Rgb(250, 189, 47), // yellow
        success: Color::Rgb(184, 187, 38),
        error: Color::Rgb(251, 73, 52),
        selection_bg: Color::Rgb(80, 73, 69),
    },
];

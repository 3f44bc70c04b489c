use ratatui::style::Color;

/// All colors used by the quote form, grouped by purpose.
/// Swap between presets (Dark / Light) to adapt to the terminal background.
#[derive(Debug, Clone)]
pub struct Theme {
    // ── Form chrome ───────────────────────────────────────────────
    pub border: Color,
    pub border_focused: Color,
    pub title: Color,

    // ── Search input ──────────────────────────────────────────────
    pub input_text: Color,
    pub input_placeholder: Color,
    pub toggle: Color,

    // ── List rows ─────────────────────────────────────────────────
    pub row_text: Color,
    pub row_focused: Color,
    pub row_focused_bg: Color,
    pub row_selected_marker: Color,
    pub divider: Color,
    pub placeholder: Color,

    // ── Chips ─────────────────────────────────────────────────────
    pub chip_text: Color,
    pub chip_bg: Color,
    pub chip_remove: Color,

    // ── Status ────────────────────────────────────────────────────
    pub announcement: Color,
    pub error: Color,
    pub muted: Color,
    pub key_hint: Color,
}

impl Theme {
    /// Dark theme for terminals with a dark background.
    pub fn dark() -> Self {
        Self {
            border: Color::Cyan,
            border_focused: Color::Yellow,
            title: Color::Yellow,

            input_text: Color::White,
            input_placeholder: Color::DarkGray,
            toggle: Color::Cyan,

            row_text: Color::White,
            row_focused: Color::Yellow,
            row_focused_bg: Color::DarkGray,
            row_selected_marker: Color::Green,
            divider: Color::DarkGray,
            placeholder: Color::DarkGray,

            chip_text: Color::White,
            chip_bg: Color::Blue,
            chip_remove: Color::LightRed,

            announcement: Color::Cyan,
            error: Color::Red,
            muted: Color::DarkGray,
            key_hint: Color::Green,
        }
    }

    /// Light theme for terminals with a light background.
    pub fn light() -> Self {
        Self {
            border: Color::Blue,
            border_focused: Color::Rgb(180, 100, 0),
            title: Color::Rgb(180, 100, 0),

            input_text: Color::Rgb(30, 30, 30),
            input_placeholder: Color::Gray,
            toggle: Color::Blue,

            row_text: Color::Rgb(30, 30, 30),
            row_focused: Color::Rgb(30, 30, 30),
            row_focused_bg: Color::Rgb(220, 220, 200),
            row_selected_marker: Color::Rgb(0, 120, 0),
            divider: Color::Gray,
            placeholder: Color::Gray,

            chip_text: Color::White,
            chip_bg: Color::Rgb(40, 90, 180),
            chip_remove: Color::Rgb(255, 210, 210),

            announcement: Color::Blue,
            error: Color::Rgb(200, 40, 40),
            muted: Color::Gray,
            key_hint: Color::Rgb(0, 120, 0),
        }
    }

    /// Detect theme from the `QUOTE_TUI_THEME` environment variable.
    ///
    /// Set `QUOTE_TUI_THEME=light` for light terminals. Defaults to dark.
    pub fn detect() -> Self {
        Self::from_preference(std::env::var("QUOTE_TUI_THEME").ok().as_deref())
    }

    /// Create a theme from a preference string ("light" or "dark").
    /// Returns dark for any unrecognized or `None` value.
    pub fn from_preference(pref: Option<&str>) -> Self {
        match pref {
            Some("light") => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Returns true if this is the dark theme variant.
    pub fn is_dark(&self) -> bool {
        self.input_text == Color::White
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}

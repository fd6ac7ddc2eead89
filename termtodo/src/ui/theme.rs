//! Theme palettes and styling for the TUI.
//!
//! Two palettes (dark and light) back the theme toggle. All widgets style
//! themselves through the active [`Theme`] rather than hardcoding colors.

use ratatui::style::{Color, Modifier, Style};
use termtodo_core::{NoticeKind, Priority};

/// Which of the two visual modes is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    /// Light background, dark text.
    Light,
    /// Dark background, light text.
    Dark,
}

impl ThemeMode {
    /// Parses a mode from its lowercase name ("light" / "dark").
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Lowercase name, also the value stored in the config file.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Sun/moon indicator for the header.
    #[must_use]
    pub const fn indicator(self) -> &'static str {
        match self {
            Self::Light => "\u{2600}",
            Self::Dark => "\u{263e}",
        }
    }
}

/// Color palette for one visual mode.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Screen background.
    pub background: Color,
    /// Primary text.
    pub text: Color,
    /// Dimmed text (metadata, hints).
    pub text_muted: Color,
    /// Accent for titles and the selection highlight.
    pub accent: Color,
    /// Success role (added toasts, low priority).
    pub success: Color,
    /// Warning role (deleted toasts, medium priority).
    pub warning: Color,
    /// Error role (rejection toasts, high priority).
    pub error: Color,
    /// Info role (toggle toasts).
    pub info: Color,
    /// Unfocused borders.
    pub border: Color,
    /// Background of the selected list row.
    pub selection_bg: Color,
    /// Status bar background.
    pub bar_bg: Color,
}

impl Theme {
    /// Dark palette (the default).
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            background: Color::Rgb(26, 26, 46),
            text: Color::White,
            text_muted: Color::Gray,
            accent: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            info: Color::Rgb(100, 140, 180),
            border: Color::DarkGray,
            selection_bg: Color::Rgb(40, 40, 60),
            bar_bg: Color::Rgb(30, 30, 50),
        }
    }

    /// Light palette.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            background: Color::Rgb(235, 230, 240),
            text: Color::Black,
            text_muted: Color::Rgb(110, 110, 120),
            accent: Color::Blue,
            success: Color::Rgb(0, 130, 60),
            warning: Color::Rgb(170, 120, 0),
            error: Color::Rgb(190, 30, 30),
            info: Color::Rgb(40, 90, 150),
            border: Color::Rgb(170, 165, 180),
            selection_bg: Color::Rgb(210, 205, 225),
            bar_bg: Color::Rgb(215, 210, 230),
        }
    }

    /// Palette for the given mode.
    #[must_use]
    pub const fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Normal text style.
    #[must_use]
    pub fn normal(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Dimmed text style (dates, hints, metadata).
    #[must_use]
    pub fn dimmed(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Bold text style.
    #[must_use]
    pub fn bold(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    /// Panel/header title style.
    #[must_use]
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Border style, highlighted when the element is focused.
    #[must_use]
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.border)
        }
    }

    /// Selected list row style.
    #[must_use]
    pub fn selected(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Completed task title style (struck through, dimmed).
    #[must_use]
    pub fn completed(&self) -> Style {
        Style::default()
            .fg(self.text_muted)
            .add_modifier(Modifier::CROSSED_OUT)
    }

    /// Style for a priority badge.
    ///
    /// Total over `Option<Priority>`: the `None` arm is the muted fallback
    /// treatment for priorities that failed to parse.
    #[must_use]
    pub fn priority_style(&self, priority: Option<Priority>) -> Style {
        match priority {
            Some(Priority::High) => Style::default()
                .fg(self.error)
                .add_modifier(Modifier::BOLD),
            Some(Priority::Medium) => Style::default().fg(self.warning),
            Some(Priority::Low) => Style::default().fg(self.success),
            None => Style::default().fg(self.text_muted),
        }
    }

    /// Style for a toast of the given severity.
    #[must_use]
    pub fn notice_style(&self, kind: NoticeKind) -> Style {
        let fg = match kind {
            NoticeKind::Success => self.success,
            NoticeKind::Info => self.info,
            NoticeKind::Warning => self.warning,
            NoticeKind::Error => self.error,
        };
        Style::default()
            .fg(fg)
            .bg(self.bar_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Status bar style.
    #[must_use]
    pub fn status_bar(&self) -> Style {
        Style::default().fg(self.text).bg(self.bar_bg)
    }

    /// Input cursor style (inverted block).
    #[must_use]
    pub fn input_cursor(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }
}

//! Centralized colors for the desktop chrome.
//!
//! Two palettes (dark and light) plus the wallpaper presets. Kept as small
//! helper functions taking the active theme so call sites stay terse.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(format!("unknown theme `{other}`")),
        }
    }
}

/// Named desktop background presets, each a single base tone; a cell only
/// has one background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Wallpaper {
    #[default]
    Default,
    Light,
    Sunset,
    Ocean,
    Forest,
    Midnight,
}

impl Wallpaper {
    pub const ALL: [Wallpaper; 6] = [
        Wallpaper::Default,
        Wallpaper::Light,
        Wallpaper::Sunset,
        Wallpaper::Ocean,
        Wallpaper::Forest,
        Wallpaper::Midnight,
    ];

    /// Next preset in declaration order, wrapping at the end. Backs the
    /// start-menu wallpaper entry.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|preset| *preset == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Wallpaper::Default => "default",
            Wallpaper::Light => "light",
            Wallpaper::Sunset => "sunset",
            Wallpaper::Ocean => "ocean",
            Wallpaper::Forest => "forest",
            Wallpaper::Midnight => "midnight",
        }
    }

    pub fn background(self) -> Color {
        match self {
            Wallpaper::Default => Color::Rgb(16, 16, 40),
            Wallpaper::Light => Color::Rgb(232, 232, 235),
            Wallpaper::Sunset => Color::Rgb(255, 120, 90),
            Wallpaper::Ocean => Color::Rgb(8, 100, 130),
            Wallpaper::Forest => Color::Rgb(36, 90, 68),
            Wallpaper::Midnight => Color::Rgb(20, 26, 48),
        }
    }
}

impl std::str::FromStr for Wallpaper {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Wallpaper::ALL
            .into_iter()
            .find(|preset| preset.as_str() == value)
            .ok_or_else(|| format!("unknown wallpaper `{value}`"))
    }
}

// Taskbar / panel

pub fn taskbar_bg(theme: Theme) -> Color {
    match theme {
        Theme::Dark => Color::Rgb(28, 28, 36),
        Theme::Light => Color::Rgb(210, 210, 214),
    }
}

pub fn taskbar_fg(theme: Theme) -> Color {
    match theme {
        Theme::Dark => Color::Gray,
        Theme::Light => Color::Black,
    }
}

pub fn taskbar_active_bg(theme: Theme) -> Color {
    match theme {
        Theme::Dark => Color::Rgb(10, 100, 220),
        Theme::Light => Color::Rgb(10, 120, 240),
    }
}

pub fn taskbar_active_fg(_theme: Theme) -> Color {
    Color::White
}

// Start menu

pub fn menu_bg(theme: Theme) -> Color {
    match theme {
        Theme::Dark => Color::Rgb(40, 40, 52),
        Theme::Light => Color::Rgb(225, 225, 230),
    }
}

pub fn menu_fg(theme: Theme) -> Color {
    match theme {
        Theme::Dark => Color::White,
        Theme::Light => Color::Black,
    }
}

pub fn menu_selected_bg(theme: Theme) -> Color {
    taskbar_active_bg(theme)
}

pub fn menu_selected_fg(_theme: Theme) -> Color {
    Color::White
}

// Window chrome

pub fn header_bg(theme: Theme, focused: bool) -> Color {
    match (theme, focused) {
        (_, true) => taskbar_active_bg(theme),
        (Theme::Dark, false) => Color::DarkGray,
        (Theme::Light, false) => Color::Gray,
    }
}

pub fn header_fg(_theme: Theme, _focused: bool) -> Color {
    Color::White
}

pub fn window_bg(theme: Theme) -> Color {
    match theme {
        Theme::Dark => Color::Rgb(24, 24, 30),
        Theme::Light => Color::Rgb(245, 245, 247),
    }
}

pub fn window_fg(theme: Theme) -> Color {
    match theme {
        Theme::Dark => Color::Gray,
        Theme::Light => Color::Black,
    }
}

pub fn window_border(theme: Theme) -> Color {
    match theme {
        Theme::Dark => Color::DarkGray,
        Theme::Light => Color::Gray,
    }
}

// Desktop surface

pub fn icon_fg(theme: Theme) -> Color {
    match theme {
        Theme::Dark => Color::White,
        Theme::Light => Color::Black,
    }
}

pub fn particle_fg(theme: Theme) -> Color {
    match theme {
        Theme::Dark => Color::Rgb(90, 90, 130),
        Theme::Light => Color::Rgb(170, 170, 190),
    }
}

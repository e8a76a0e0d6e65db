// SPDX-License-Identifier: MPL-2.0
//! Theme selection and the color scheme used by the catalog views.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    pub surface_page: Color,
    pub surface_card: Color,
    pub surface_status: Color,

    pub text_primary: Color,
    pub card_border: Color,

    pub overlay_background: Color,
    pub overlay_text: Color,

    pub error: Color,
}

impl ColorScheme {
    /// Light scheme: slate text on near-white surfaces.
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_page: palette::SLATE_50,
            surface_card: palette::WHITE,
            surface_status: palette::SLATE_100,

            text_primary: palette::SLATE_700,
            card_border: palette::SLATE_700,

            overlay_background: palette::SLATE_700,
            overlay_text: palette::WHITE,

            error: palette::ERROR_500,
        }
    }

    /// Dark scheme.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_page: palette::GRAY_900,
            surface_card: Color::from_rgb(0.15, 0.15, 0.15),
            surface_status: Color::from_rgb(0.2, 0.2, 0.2),

            text_primary: palette::GRAY_100,
            card_border: palette::GRAY_400,

            overlay_background: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::PRIMARY_600
            },
            overlay_text: palette::WHITE,

            error: palette::ERROR_500,
        }
    }

    #[must_use]
    pub fn for_dark(is_dark: bool) -> Self {
        if is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// Next mode in the light -> dark -> system cycle.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
            ThemeMode::System => ThemeMode::Light,
        }
    }

    /// Lowercase name, as written in `settings.toml`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }

    /// The iced theme matching this mode.
    #[must_use]
    pub fn to_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! Language and theme changes made from the toolbar are written back to
//! `settings.toml`, leaving the catalog section as the user wrote it.

use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::theming::ThemeMode;
use unic_langid::LanguageIdentifier;

/// Notification key pushed when preferences cannot be written.
pub const SAVE_ERROR_KEY: &str = "notification-config-save-error";

/// Persists the theme mode and current locale.
///
/// Returns the notification key to show when saving fails. Skipped under
/// test so unit tests never touch the user's config directory.
pub fn persist_preferences(theme_mode: ThemeMode, locale: &LanguageIdentifier) -> Option<&'static str> {
    if cfg!(test) {
        return None;
    }

    let (mut cfg, load_warning) = config::load();
    if load_warning.is_some() {
        tracing::warn!("settings.toml is unreadable; preferences not saved");
        return Some(SAVE_ERROR_KEY);
    }
    cfg.general.theme_mode = theme_mode;
    cfg.general.language = Some(locale.to_string());

    match config::save(&cfg) {
        Ok(()) => None,
        Err(error) => {
            tracing::warn!(%error, "failed to save preferences");
            Some(SAVE_ERROR_KEY)
        }
    }
}

/// Applies the newly selected locale and persists it to config.
pub fn apply_language_change(
    i18n: &mut I18n,
    theme_mode: ThemeMode,
    locale: LanguageIdentifier,
) -> Option<&'static str> {
    i18n.set_locale(locale);
    persist_preferences(theme_mode, i18n.current_locale())
}

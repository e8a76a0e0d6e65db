// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::catalog;
use crate::ui::notifications;
use std::time::Instant;
use unic_langid::LanguageIdentifier;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Catalog(catalog::Message),
    Notification(notifications::NotificationMessage),
    LanguageSelected(LanguageIdentifier),
    CycleThemeMode,
    Tick(Instant), // Periodic tick for toast auto-dismiss and slow-fetch checks
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
///
/// Catalog values given here take precedence over `settings.toml`.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `ko`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_SHELF_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Products per page.
    pub page_size: Option<usize>,
    /// Number of pages before the end of data.
    pub pages: Option<u32>,
    /// Simulated latency per page in milliseconds.
    pub latency_ms: Option<u64>,
    /// 1-based page whose first fetch fails.
    pub fail_page: Option<u32>,
}

// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the catalog component to localization, theming and
//! the toast manager, and translates the CLI flags and `settings.toml` into
//! the catalog source used for the session.

mod message;
pub mod paths;
mod persistence;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::SharedCatalogSource;
use crate::config::{self, Config};
use crate::domain::catalog::PageIndex;
use crate::i18n::fluent::I18n;
use crate::infrastructure::{MockCatalog, MockCatalogConfig};
use crate::ui::catalog;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    catalog: catalog::State,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("items", &self.catalog.items().len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 360;
pub const MIN_WINDOW_WIDTH: u32 = 420;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires the boot function to be `Fn`; the flags are only
    // consumed by the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Merges CLI flags over the `[catalog]` section of the config.
fn catalog_config(flags: &Flags, config: &Config) -> MockCatalogConfig {
    MockCatalogConfig {
        page_size: flags
            .page_size
            .map_or_else(|| config.catalog.page_size(), config::clamp_page_size),
        page_count: flags
            .pages
            .map_or_else(|| config.catalog.page_count(), config::clamp_page_count),
        latency: flags.latency_ms.map_or_else(
            || config.catalog.latency(),
            |ms| Duration::from_millis(config::clamp_latency_ms(ms)),
        ),
        failing_pages: flags
            .fail_page
            .map(|page| PageIndex::new(page.saturating_sub(1)))
            .into_iter()
            .collect(),
    }
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());

        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let source_config = catalog_config(&flags, &config);
        tracing::info!(
            page_size = source_config.page_size,
            page_count = source_config.page_count,
            latency_ms = source_config.latency.as_millis() as u64,
            "starting catalog"
        );
        let source: SharedCatalogSource = Arc::new(MockCatalog::new(source_config));

        Self::with_source(i18n, &config, source, config_warning)
    }

    /// Builds the app around an arbitrary catalog source and requests the
    /// first page.
    fn with_source(
        i18n: I18n,
        config: &Config,
        source: SharedCatalogSource,
        config_warning: Option<String>,
    ) -> (Self, Task<Message>) {
        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            catalog: catalog::State::new(source, config.catalog.slow_fetch_warning()),
            notifications: notifications::Manager::new(),
        };

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        let task = app.catalog.start().map(Message::Catalog);
        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(
            self.catalog.is_loading(),
            self.notifications.has_notifications(),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            theme_mode: &mut self.theme_mode,
            catalog: &mut self.catalog,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Catalog(catalog_message) => {
                update::handle_catalog_message(&mut ctx, catalog_message)
            }
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::LanguageSelected(locale) => update::handle_language_selected(&mut ctx, locale),
            Message::CycleThemeMode => update::handle_cycle_theme_mode(&mut ctx),
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            theme_mode: self.theme_mode,
            catalog: &self.catalog,
            notifications: &self.notifications,
        })
    }
}

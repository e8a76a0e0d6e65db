// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Component messages are forwarded to their owners; the effects they return
//! are translated into notifications here.

use super::{persistence, Message};
use crate::i18n::fluent::I18n;
use crate::ui::catalog;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use iced::Task;
use std::time::Instant;
use unic_langid::LanguageIdentifier;

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub theme_mode: &'a mut ThemeMode,
    pub catalog: &'a mut catalog::State,
    pub notifications: &'a mut notifications::Manager,
}

/// 1-based page number shown to the user.
fn display_page(page: crate::domain::catalog::PageIndex) -> String {
    (u64::from(page.value()) + 1).to_string()
}

pub fn handle_catalog_message(
    ctx: &mut UpdateContext<'_>,
    message: catalog::Message,
) -> Task<Message> {
    let (effect, task) = ctx.catalog.handle_message(message);
    apply_catalog_effect(ctx.notifications, effect);
    task.map(Message::Catalog)
}

fn apply_catalog_effect(notifications: &mut notifications::Manager, effect: catalog::Effect) {
    match effect {
        catalog::Effect::None => {}
        catalog::Effect::PageApplied => notifications.clear_fetch_errors(),
        catalog::Effect::FetchFailed(error) => {
            notifications.clear_fetch_errors();
            notifications.push(
                Notification::error("notification-fetch-error")
                    .with_arg("page", display_page(error.page())),
            );
        }
        catalog::Effect::Exhausted { count } => {
            notifications.clear_fetch_errors();
            notifications.push(
                Notification::info("notification-catalog-exhausted")
                    .with_arg("count", count.to_string()),
            );
        }
        catalog::Effect::SlowFetch(page) => {
            notifications.push(
                Notification::warning("notification-fetch-slow")
                    .with_arg("page", display_page(page)),
            );
        }
    }
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    ctx.notifications.tick();
    let effect = ctx.catalog.check_slow_fetch(now);
    apply_catalog_effect(ctx.notifications, effect);
    Task::none()
}

pub fn handle_language_selected(
    ctx: &mut UpdateContext<'_>,
    locale: LanguageIdentifier,
) -> Task<Message> {
    if let Some(key) = persistence::apply_language_change(ctx.i18n, *ctx.theme_mode, locale) {
        ctx.notifications.push(Notification::warning(key));
    }
    Task::none()
}

pub fn handle_cycle_theme_mode(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    *ctx.theme_mode = ctx.theme_mode.next();
    tracing::debug!(mode = ctx.theme_mode.as_str(), "theme mode changed");
    if let Some(key) = persistence::persist_preferences(*ctx.theme_mode, ctx.i18n.current_locale())
    {
        ctx.notifications.push(Notification::warning(key));
    }
    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::PageIndex;
    use crate::domain::error::CatalogError;

    #[test]
    fn fetch_failure_pushes_one_error_with_one_based_page() {
        let mut manager = notifications::Manager::new();
        let error = CatalogError::Unavailable {
            page: PageIndex::new(2),
            reason: "offline".to_string(),
        };

        apply_catalog_effect(&mut manager, catalog::Effect::FetchFailed(error.clone()));
        apply_catalog_effect(&mut manager, catalog::Effect::FetchFailed(error));

        assert_eq!(manager.visible_count(), 1);
        let toast = manager.visible().next().expect("toast");
        assert_eq!(toast.message_key(), "notification-fetch-error");
        assert_eq!(toast.message_args(), &[("page".to_string(), "3".to_string())]);
    }

    #[test]
    fn applied_page_clears_fetch_errors() {
        let mut manager = notifications::Manager::new();
        apply_catalog_effect(&mut manager, catalog::Effect::SlowFetch(PageIndex::FIRST));
        assert_eq!(manager.visible_count(), 1);

        apply_catalog_effect(&mut manager, catalog::Effect::PageApplied);
        assert_eq!(manager.visible_count(), 0);
    }

    #[test]
    fn exhaustion_reports_product_count() {
        let mut manager = notifications::Manager::new();
        apply_catalog_effect(&mut manager, catalog::Effect::Exhausted { count: 50 });

        let toast = manager.visible().next().expect("toast");
        assert_eq!(toast.message_key(), "notification-catalog-exhausted");
        assert_eq!(toast.message_args(), &[("count".to_string(), "50".to_string())]);
    }

    #[test]
    fn none_effect_leaves_notifications_alone() {
        let mut manager = notifications::Manager::new();
        apply_catalog_effect(&mut manager, catalog::Effect::None);
        assert!(!manager.has_notifications());
    }
}

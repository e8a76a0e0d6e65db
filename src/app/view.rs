// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The window is a slim toolbar above the product list, with toasts stacked
//! over everything.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::catalog;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::{self, Toast};
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::widget::{button, pick_list, Column, Container, Row, Stack, Text};
use iced::{alignment::Vertical, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
    pub catalog: &'a catalog::State,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let colors = ColorScheme::for_dark(ctx.theme_mode.is_dark());

    let toolbar = view_toolbar(ctx.i18n, ctx.theme_mode);

    let catalog_view = ctx
        .catalog
        .view(catalog::ViewEnv {
            i18n: ctx.i18n,
            colors,
        })
        .map(Message::Catalog);

    let content = Column::new()
        .push(toolbar)
        .push(catalog_view)
        .width(Length::Fill)
        .height(Length::Fill);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(content)
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_toolbar<'a>(i18n: &'a I18n, theme_mode: ThemeMode) -> Element<'a, Message> {
    let language = pick_list(
        i18n.available_locales.as_slice(),
        Some(i18n.current_locale().clone()),
        Message::LanguageSelected,
    )
    .text_size(typography::BODY);

    let theme = button(
        Text::new(i18n.tr_with_args("toolbar-theme", &[("mode", theme_mode.as_str())]))
            .size(typography::BODY),
    )
    .on_press(Message::CycleThemeMode)
    .style(button::secondary);

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(i18n.tr("toolbar-language")).size(typography::BODY))
        .push(language)
        .push(theme);

    Container::new(row)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::MD])
        .into()
}

// SPDX-License-Identifier: MPL-2.0
//! Product list rendering: item cards, status row and the running total.

use super::component::{Message, State, ViewEnv, SCROLLABLE_ID};
use crate::application::pagination::Status;
use crate::domain::catalog::{Price, Product};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, radius, shadow, sizing, spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::widget::{
    button, container, keyed_column, sensor, Column, Container, Id, Row, Scrollable, Space, Stack,
    Text,
};
use iced::{
    alignment::{Horizontal, Vertical},
    Background, Border, Color, Element, Length, Theme,
};

pub fn view<'a>(state: &'a State, env: ViewEnv<'a>) -> Element<'a, Message> {
    let colors = &env.colors;

    let title = Text::new(env.i18n.tr("catalog-title"))
        .size(typography::TITLE_LG)
        .color(colors.text_primary);

    let items = keyed_column(
        state
            .items()
            .iter()
            .map(|product| (product.id.value(), product_card(product, env.i18n, colors))),
    )
    .spacing(spacing::XS);

    let content = Column::new()
        .push(title)
        .push(items)
        .push(sentinel(state, env.i18n, colors))
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .max_width(sizing::LIST_MAX_WIDTH);

    let list = Scrollable::new(Container::new(content).center_x(Length::Fill))
        .id(Id::new(SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill);

    let page_color = colors.surface_page;
    let surface = Container::new(list)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(page_color)),
            ..Default::default()
        });

    Stack::new()
        .push(surface)
        .push(total_overlay(state.total_price(), env.i18n, colors))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// The status row with a zero-height marker on its bottom edge.
///
/// Only the marker is watched, so a report means the whole row is on
/// screen. It is keyed on the item count: when the list grows while the
/// marker stays in view, it reports again on the next redraw.
fn sentinel<'a>(state: &State, i18n: &I18n, colors: &ColorScheme) -> Element<'a, Message> {
    let marker = sensor(
        Space::new()
            .width(Length::Fill)
            .height(Length::Fixed(0.0)),
    )
    .key(state.items().len())
    .on_show(|_size| Message::SentinelShown)
    .on_hide(Message::SentinelHidden);

    Column::new()
        .push(status_row(state.status(), i18n, colors))
        .push(marker)
        .into()
}

fn product_card<'a>(
    product: &Product,
    i18n: &I18n,
    colors: &ColorScheme,
) -> Element<'a, Message> {
    let price = product.price.to_string();
    let label = i18n.tr_with_args(
        "catalog-item",
        &[("name", product.name.as_str()), ("price", price.as_str())],
    );

    let background = colors.surface_card;
    let border_color = colors.card_border;

    Container::new(
        Text::new(label)
            .size(typography::BODY_LG)
            .color(colors.text_primary),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(move |_theme: &Theme| card_style(background, border_color))
    .into()
}

fn card_style(background: Color, border_color: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            color: border_color,
            width: border::WIDTH_MD,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

/// The last row of the list. Its height is fixed in every state.
fn status_row<'a>(status: Status<'_>, i18n: &I18n, colors: &ColorScheme) -> Element<'a, Message> {
    let label = Text::new(status_text(status, i18n))
        .size(typography::BODY)
        .color(match status {
            Status::Failed(_) => colors.error,
            _ => colors.text_primary,
        });

    let mut row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(label);

    if matches!(status, Status::Failed(_)) {
        row = row.push(
            button(Text::new(i18n.tr("catalog-retry")).size(typography::BODY))
                .on_press(Message::Retry)
                .padding([spacing::XXS / 2.0, spacing::SM])
                .style(button::primary),
        );
    }

    let background = colors.surface_status;
    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::STATUS_ROW_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(background)),
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

fn status_text(status: Status<'_>, i18n: &I18n) -> String {
    match status {
        Status::Idle | Status::Loading(_) => i18n.tr("catalog-status-loading"),
        Status::Exhausted => i18n.tr("catalog-status-end"),
        Status::Failed(error) => {
            let page = (u64::from(error.page().value()) + 1).to_string();
            format!(
                "{} {}",
                i18n.tr_with_args("catalog-status-error", &[("page", page.as_str())]),
                i18n.tr(error.i18n_key())
            )
        }
    }
}

/// Badge with the running total, pinned to the top-right corner.
fn total_overlay<'a>(total: Price, i18n: &I18n, colors: &ColorScheme) -> Element<'a, Message> {
    let total = total.to_string();
    let background = colors.overlay_background;
    let text_color: Color = colors.overlay_text;

    let badge = Container::new(
        Text::new(i18n.tr_with_args("catalog-total", &[("total", total.as_str())]))
            .size(typography::TITLE_MD)
            .color(text_color),
    )
    .padding([spacing::XS, spacing::MD])
    .style(move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        ..Default::default()
    });

    Container::new(badge)
        .width(Length::Fill)
        .align_x(Horizontal::Right)
        .padding(spacing::MD)
        .into()
}

// SPDX-License-Identifier: MPL-2.0
//! Catalog component encapsulating state and update logic.

use crate::application::pagination::{
    Controller, Effect as PaginationEffect, Status, VisibilitySensor,
};
use crate::application::port::{FetchResult, SharedCatalogSource};
use crate::domain::catalog::{PageIndex, Price, Product};
use crate::domain::error::CatalogError;
use crate::i18n::fluent::I18n;
use crate::ui::catalog::view;
use crate::ui::theming::ColorScheme;
use iced::{Element, Task};
use std::time::{Duration, Instant};

/// Identifier used for the product list scrollable.
pub const SCROLLABLE_ID: &str = "catalog-scrollable";

/// Messages emitted by the catalog widgets and its fetch tasks.
#[derive(Debug, Clone)]
pub enum Message {
    /// The bottom edge of the status row scrolled into view, or the list
    /// grew while it was in view.
    SentinelShown,
    /// The bottom edge of the status row left the viewport.
    SentinelHidden,
    /// The user asked to fetch the failed page again.
    Retry,
    /// A fetch task finished.
    PageLoaded {
        page: PageIndex,
        result: FetchResult,
    },
}

/// Side effects the application should perform after a catalog update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// A page was appended; earlier fetch errors are obsolete.
    PageApplied,
    /// The fetch for a page failed and the list is waiting for a retry.
    FetchFailed(CatalogError),
    /// The source reported the end of data.
    Exhausted { count: usize },
    /// The fetch for this page has been running for longer than the
    /// configured warning threshold.
    SlowFetch(PageIndex),
}

/// Environment information required to render the catalog.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    pub colors: ColorScheme,
}

/// Complete catalog component state.
pub struct State {
    source: SharedCatalogSource,
    controller: Controller,
    sensor: VisibilitySensor,
    loading_started_at: Option<Instant>,
    slow_warned: bool,
    slow_fetch_warning: Duration,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("controller", &self.controller)
            .field("sensor", &self.sensor)
            .field("loading_started_at", &self.loading_started_at)
            .finish_non_exhaustive()
    }
}

impl State {
    #[must_use]
    pub fn new(source: SharedCatalogSource, slow_fetch_warning: Duration) -> Self {
        Self {
            source,
            controller: Controller::new(),
            sensor: VisibilitySensor::new(),
            loading_started_at: None,
            slow_warned: false,
            slow_fetch_warning,
        }
    }

    /// Fetches the first page. Called once when the component is mounted.
    pub fn start(&mut self) -> Task<Message> {
        let effect = self.controller.start();
        self.perform(effect)
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::SentinelShown => {
                if self.sensor.observe(true) {
                    let effect = self.controller.load_more();
                    return (Effect::None, self.perform(effect));
                }
                (Effect::None, Task::none())
            }
            Message::SentinelHidden => {
                let _ = self.sensor.observe(false);
                (Effect::None, Task::none())
            }
            Message::Retry => {
                let effect = self.controller.retry();
                (Effect::None, self.perform(effect))
            }
            Message::PageLoaded { page, result } => self.handle_page_loaded(page, result),
        }
    }

    fn handle_page_loaded(
        &mut self,
        page: PageIndex,
        result: FetchResult,
    ) -> (Effect, Task<Message>) {
        match self.controller.apply(page, result) {
            PaginationEffect::Applied {
                added, exhausted, ..
            } => {
                self.finish_loading();
                if exhausted {
                    self.sensor.detach();
                    return (
                        Effect::Exhausted {
                            count: self.controller.items().len(),
                        },
                        Task::none(),
                    );
                }
                if self.sensor.rearm(added > 0) {
                    let effect = self.controller.load_more();
                    return (Effect::PageApplied, self.perform(effect));
                }
                (Effect::PageApplied, Task::none())
            }
            PaginationEffect::Failed(error) => {
                self.finish_loading();
                (Effect::FetchFailed(error), Task::none())
            }
            PaginationEffect::Stale(_) | PaginationEffect::None | PaginationEffect::Fetch(_) => {
                (Effect::None, Task::none())
            }
        }
    }

    /// Reports a fetch that has outlived the warning threshold, once per fetch.
    pub fn check_slow_fetch(&mut self, now: Instant) -> Effect {
        if self.slow_warned {
            return Effect::None;
        }
        let (Some(page), Some(started_at)) = (self.controller.in_flight(), self.loading_started_at)
        else {
            return Effect::None;
        };
        if now.saturating_duration_since(started_at) < self.slow_fetch_warning {
            return Effect::None;
        }
        self.slow_warned = true;
        Effect::SlowFetch(page)
    }

    fn perform(&mut self, effect: PaginationEffect) -> Task<Message> {
        let PaginationEffect::Fetch(page) = effect else {
            return Task::none();
        };
        self.loading_started_at = Some(Instant::now());
        self.slow_warned = false;

        let fetch = self.source.fetch(page);
        Task::perform(fetch, move |result| Message::PageLoaded { page, result })
    }

    fn finish_loading(&mut self) {
        self.loading_started_at = None;
        self.slow_warned = false;
    }

    #[must_use]
    pub fn status(&self) -> Status<'_> {
        self.controller.status()
    }

    #[must_use]
    pub fn items(&self) -> &[Product] {
        self.controller.items()
    }

    #[must_use]
    pub fn total_price(&self) -> Price {
        self.controller.total_price()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.controller.is_loading()
    }

    #[must_use]
    pub fn is_sensor_attached(&self) -> bool {
        self.sensor.is_attached()
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        view::view(self, env)
    }
}

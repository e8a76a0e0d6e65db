// SPDX-License-Identifier: MPL-2.0
//! Pagination state machine.
//!
//! Two phases: loading is enabled until a page reports `is_end`, after which
//! the controller is terminal and ignores every further signal and result.
//! Within the enabled phase at most one fetch is in flight. Results are
//! tagged with the page they were requested for and only the result for the
//! page currently in flight is applied, which keeps the product list in
//! page-ascending order.

use crate::application::port::FetchResult;
use crate::domain::catalog::{total_price, PageIndex, Price, Product};
use crate::domain::error::CatalogError;

/// What the caller has to do after a controller transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Nothing changed.
    None,
    /// Dispatch a fetch for this page and feed the result to
    /// [`Controller::apply`].
    Fetch(PageIndex),
    /// A page was appended.
    Applied {
        page: PageIndex,
        /// Number of products appended (may be zero).
        added: usize,
        /// The page closed the catalog; the controller is now terminal.
        exhausted: bool,
    },
    /// The fetch for `page` failed. The page stays current until retried.
    Failed(CatalogError),
    /// A result arrived for a page that is not in flight and was dropped.
    Stale(PageIndex),
}

/// Coarse state used by the renderer for the status row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status<'a> {
    /// Loading is enabled and nothing is in flight.
    Idle,
    /// A fetch for this page is in flight.
    Loading(PageIndex),
    /// The last fetch failed and is waiting for a retry.
    Failed(&'a CatalogError),
    /// The source reported the end of data.
    Exhausted,
}

/// Owns page state and the accumulated product list.
#[derive(Debug, Default)]
pub struct Controller {
    current_page: PageIndex,
    is_end: bool,
    started: bool,
    in_flight: Option<PageIndex>,
    failure: Option<CatalogError>,
    items: Vec<Product>,
}

impl Controller {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests the first page. Only the first call has an effect.
    pub fn start(&mut self) -> Effect {
        if self.started {
            return Effect::None;
        }
        self.started = true;
        self.current_page = PageIndex::FIRST;
        self.dispatch()
    }

    /// Handles a load-more signal from the visibility sensor.
    ///
    /// Ignored before [`start`](Self::start), after the end of data, while a
    /// fetch is in flight, and while a failed page awaits a retry.
    pub fn load_more(&mut self) -> Effect {
        if !self.started || self.is_end || self.in_flight.is_some() || self.failure.is_some() {
            return Effect::None;
        }
        let next = self.current_page.next();
        if next == self.current_page {
            return Effect::None;
        }
        self.current_page = next;
        self.dispatch()
    }

    /// Re-dispatches the page whose fetch failed.
    pub fn retry(&mut self) -> Effect {
        if self.failure.take().is_none() {
            return Effect::None;
        }
        self.dispatch()
    }

    /// Applies the result of the fetch for `page`.
    pub fn apply(&mut self, page: PageIndex, result: FetchResult) -> Effect {
        if self.in_flight != Some(page) {
            tracing::debug!(%page, "dropping result for a page that is not in flight");
            return Effect::Stale(page);
        }
        self.in_flight = None;

        match result {
            Ok(batch) => {
                let added = batch.items.len();
                self.items.extend(batch.items);
                self.is_end = batch.is_end;
                tracing::debug!(%page, added, is_end = batch.is_end, "page applied");
                Effect::Applied {
                    page,
                    added,
                    exhausted: batch.is_end,
                }
            }
            Err(error) => {
                tracing::warn!(%page, %error, "page fetch failed");
                self.failure = Some(error.clone());
                Effect::Failed(error)
            }
        }
    }

    fn dispatch(&mut self) -> Effect {
        let page = self.current_page;
        self.in_flight = Some(page);
        tracing::debug!(%page, "dispatching fetch");
        Effect::Fetch(page)
    }

    #[must_use]
    pub fn status(&self) -> Status<'_> {
        if self.is_end {
            Status::Exhausted
        } else if let Some(error) = &self.failure {
            Status::Failed(error)
        } else if let Some(page) = self.in_flight {
            Status::Loading(page)
        } else {
            Status::Idle
        }
    }

    #[must_use]
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    #[must_use]
    pub fn total_price(&self) -> Price {
        total_price(&self.items)
    }

    #[must_use]
    pub fn current_page(&self) -> PageIndex {
        self.current_page
    }

    #[must_use]
    pub fn is_end(&self) -> bool {
        self.is_end
    }

    #[must_use]
    pub fn in_flight(&self) -> Option<PageIndex> {
        self.in_flight
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{Page, ProductId};

    fn page_of(first_id: u64, prices: &[u64], is_end: bool) -> Page {
        let items = prices
            .iter()
            .enumerate()
            .map(|(offset, price)| {
                let id = first_id + offset as u64;
                Product::new(ProductId::new(id), format!("Product {id}"), Price::new(*price))
            })
            .collect();
        Page::new(items, is_end)
    }

    fn failure(page: u32) -> CatalogError {
        CatalogError::Unavailable {
            page: PageIndex::new(page),
            reason: "offline".into(),
        }
    }

    #[test]
    fn start_fetches_first_page_once() {
        let mut controller = Controller::new();
        assert_eq!(controller.start(), Effect::Fetch(PageIndex::FIRST));
        assert_eq!(controller.start(), Effect::None);
        assert_eq!(controller.status(), Status::Loading(PageIndex::FIRST));
    }

    #[test]
    fn load_more_before_start_is_ignored() {
        let mut controller = Controller::new();
        assert_eq!(controller.load_more(), Effect::None);
        assert_eq!(controller.current_page(), PageIndex::FIRST);
    }

    #[test]
    fn load_more_while_in_flight_is_ignored() {
        let mut controller = Controller::new();
        controller.start();
        assert_eq!(controller.load_more(), Effect::None);
        assert_eq!(controller.current_page(), PageIndex::FIRST);
    }

    #[test]
    fn load_more_advances_one_page_after_apply() {
        let mut controller = Controller::new();
        controller.start();
        controller.apply(PageIndex::FIRST, Ok(page_of(1, &[10, 20], false)));

        assert_eq!(controller.load_more(), Effect::Fetch(PageIndex::new(1)));
        assert_eq!(controller.current_page(), PageIndex::new(1));
    }

    #[test]
    fn two_page_catalog_ends_with_total_35() {
        let mut controller = Controller::new();
        controller.start();
        let effect = controller.apply(PageIndex::FIRST, Ok(page_of(1, &[10, 20], false)));
        assert_eq!(
            effect,
            Effect::Applied {
                page: PageIndex::FIRST,
                added: 2,
                exhausted: false
            }
        );

        controller.load_more();
        let effect = controller.apply(PageIndex::new(1), Ok(page_of(3, &[5], true)));
        assert_eq!(
            effect,
            Effect::Applied {
                page: PageIndex::new(1),
                added: 1,
                exhausted: true
            }
        );

        assert_eq!(controller.items().len(), 3);
        assert_eq!(controller.total_price(), Price::new(35));
        assert_eq!(controller.status(), Status::Exhausted);
    }

    #[test]
    fn terminal_state_is_absorbing() {
        let mut controller = Controller::new();
        controller.start();
        controller.apply(PageIndex::FIRST, Ok(page_of(1, &[1], true)));

        assert_eq!(controller.load_more(), Effect::None);
        assert_eq!(controller.retry(), Effect::None);
        assert_eq!(
            controller.apply(PageIndex::new(1), Ok(page_of(2, &[1], false))),
            Effect::Stale(PageIndex::new(1))
        );
        assert!(controller.is_end());
        assert_eq!(controller.items().len(), 1);
    }

    #[test]
    fn empty_page_does_not_stall() {
        let mut controller = Controller::new();
        controller.start();
        controller.apply(PageIndex::FIRST, Ok(page_of(1, &[], false)));

        assert!(controller.items().is_empty());
        assert_eq!(controller.load_more(), Effect::Fetch(PageIndex::new(1)));
    }

    #[test]
    fn result_for_other_page_is_stale() {
        let mut controller = Controller::new();
        controller.start();

        let effect = controller.apply(PageIndex::new(3), Ok(page_of(1, &[7], false)));
        assert_eq!(effect, Effect::Stale(PageIndex::new(3)));
        assert!(controller.items().is_empty());
        assert_eq!(controller.in_flight(), Some(PageIndex::FIRST));
    }

    #[test]
    fn duplicate_result_is_applied_once() {
        let mut controller = Controller::new();
        controller.start();
        controller.apply(PageIndex::FIRST, Ok(page_of(1, &[7], false)));
        let effect = controller.apply(PageIndex::FIRST, Ok(page_of(1, &[7], false)));

        assert_eq!(effect, Effect::Stale(PageIndex::FIRST));
        assert_eq!(controller.items().len(), 1);
    }

    #[test]
    fn failure_blocks_load_more_until_retry() {
        let mut controller = Controller::new();
        controller.start();
        controller.apply(PageIndex::FIRST, Ok(page_of(1, &[1], false)));
        controller.load_more();

        let effect = controller.apply(PageIndex::new(1), Err(failure(1)));
        assert_eq!(effect, Effect::Failed(failure(1)));
        assert!(matches!(controller.status(), Status::Failed(_)));
        assert_eq!(controller.load_more(), Effect::None);

        assert_eq!(controller.retry(), Effect::Fetch(PageIndex::new(1)));
        assert_eq!(controller.status(), Status::Loading(PageIndex::new(1)));
    }

    #[test]
    fn retry_without_failure_does_nothing() {
        let mut controller = Controller::new();
        controller.start();
        assert_eq!(controller.retry(), Effect::None);
    }

    #[test]
    fn failed_first_page_can_be_retried() {
        let mut controller = Controller::new();
        controller.start();
        controller.apply(PageIndex::FIRST, Err(failure(0)));

        assert_eq!(controller.retry(), Effect::Fetch(PageIndex::FIRST));
        controller.apply(PageIndex::FIRST, Ok(page_of(1, &[4, 6], false)));
        assert_eq!(controller.total_price(), Price::new(10));
        assert_eq!(controller.status(), Status::Idle);
    }

    #[test]
    fn list_keeps_page_order() {
        let mut controller = Controller::new();
        controller.start();
        controller.apply(PageIndex::FIRST, Ok(page_of(1, &[1, 1], false)));
        controller.load_more();
        controller.apply(PageIndex::new(1), Ok(page_of(3, &[1, 1], false)));
        controller.load_more();
        controller.apply(PageIndex::new(2), Ok(page_of(5, &[1], false)));

        let ids: Vec<u64> = controller.items().iter().map(|p| p.id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }
}

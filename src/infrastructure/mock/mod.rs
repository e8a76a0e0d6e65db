// SPDX-License-Identifier: MPL-2.0
//! Deterministic in-process catalog.
//!
//! Stands in for a product backend. Pages are generated from their index, so
//! the same page always yields the same products. A simulated latency makes
//! the loading state observable, and individual pages can be set to fail
//! once to exercise the retry path.

use crate::application::port::{CatalogSource, FetchResult};
use crate::config::{DEFAULT_LATENCY_MS, DEFAULT_PAGE_COUNT, DEFAULT_PAGE_SIZE};
use crate::domain::catalog::{Page, PageIndex, Price, Product, ProductId};
use crate::domain::error::CatalogError;
use futures_util::future::{BoxFuture, FutureExt};
use std::collections::HashSet;
use std::sync::Mutex;
use std::time::Duration;

/// Lowest generated price.
const MIN_PRICE: u64 = 10;

/// Number of distinct generated prices above [`MIN_PRICE`].
const PRICE_SPREAD: u64 = 91;

/// Multiplier that scatters consecutive products across the price range.
const PRICE_STRIDE: u64 = 37;

/// Shape of the generated catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct MockCatalogConfig {
    /// Products per page.
    pub page_size: usize,
    /// Number of non-empty pages; the last one reports the end of data.
    pub page_count: u32,
    /// Delay before each page resolves.
    pub latency: Duration,
    /// Pages whose first fetch fails.
    pub failing_pages: Vec<PageIndex>,
}

impl Default for MockCatalogConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_count: DEFAULT_PAGE_COUNT,
            latency: Duration::from_millis(DEFAULT_LATENCY_MS),
            failing_pages: Vec::new(),
        }
    }
}

/// Generated catalog implementing [`CatalogSource`].
#[derive(Debug)]
pub struct MockCatalog {
    page_size: usize,
    page_count: u32,
    latency: Duration,
    pending_failures: Mutex<HashSet<PageIndex>>,
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::new(MockCatalogConfig::default())
    }
}

impl MockCatalog {
    #[must_use]
    pub fn new(config: MockCatalogConfig) -> Self {
        Self {
            page_size: config.page_size,
            page_count: config.page_count,
            latency: config.latency,
            pending_failures: Mutex::new(config.failing_pages.into_iter().collect()),
        }
    }

    /// Builds the page at `page` without any latency or failure injection.
    #[must_use]
    pub fn page(&self, page: PageIndex) -> Page {
        if page.value() >= self.page_count {
            return Page::terminal();
        }

        let first = u64::from(page.value()) * self.page_size as u64;
        let items = (first..first + self.page_size as u64)
            .map(generate_product)
            .collect();
        let is_end = page.value() + 1 == self.page_count;

        Page::new(items, is_end)
    }

    /// Consumes a pending one-shot failure for `page`, if any.
    fn take_failure(&self, page: PageIndex) -> bool {
        self.pending_failures
            .lock()
            .map(|mut pending| pending.remove(&page))
            .unwrap_or(false)
    }
}

impl CatalogSource for MockCatalog {
    fn fetch(&self, page: PageIndex) -> BoxFuture<'static, FetchResult> {
        let latency = self.latency;
        let result = if self.take_failure(page) {
            Err(CatalogError::Unavailable {
                page,
                reason: "simulated outage".to_string(),
            })
        } else {
            Ok(self.page(page))
        };

        async move {
            if !latency.is_zero() {
                tokio::time::sleep(latency).await;
            }
            result
        }
        .boxed()
    }
}

/// Product at zero-based catalog position `n`.
fn generate_product(n: u64) -> Product {
    let id = n + 1;
    let price = MIN_PRICE + (n.wrapping_mul(PRICE_STRIDE)) % PRICE_SPREAD;
    Product::new(ProductId::new(id), format!("Product {id}"), Price::new(price))
}

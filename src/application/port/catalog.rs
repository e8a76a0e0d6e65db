// SPDX-License-Identifier: MPL-2.0
//! Catalog source port definition.
//!
//! This module defines the [`CatalogSource`] trait: given a page index, a
//! source produces one [`Page`] of products together with the end-of-data
//! flag. Infrastructure adapters (the mock generator, test doubles)
//! implement it.

use crate::domain::catalog::{Page, PageIndex};
use crate::domain::error::CatalogError;
use futures_util::future::BoxFuture;
use std::sync::Arc;

/// Result of a single page fetch.
pub type FetchResult = Result<Page, CatalogError>;

/// Paginated product source.
///
/// Implementations must be idempotent per page: fetching the same index
/// twice yields the same products in the same order. The returned future is
/// `'static` so it can be handed to `Task::perform` without borrowing the
/// source.
pub trait CatalogSource: Send + Sync {
    /// Fetches the page at `page`.
    fn fetch(&self, page: PageIndex) -> BoxFuture<'static, FetchResult>;
}

/// Shared handle to a catalog source, cloned into every fetch task.
pub type SharedCatalogSource = Arc<dyn CatalogSource>;

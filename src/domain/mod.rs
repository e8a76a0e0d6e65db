// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) so the pagination
//! rules can be tested without a window or an async runtime.
//!
//! # Modules
//!
//! - [`catalog`]: Catalog types ([`Product`](catalog::Product), [`Page`](catalog::Page),
//!   [`Price`](catalog::Price), [`PageIndex`](catalog::PageIndex))
//! - [`error`]: Domain error types ([`CatalogError`](error::CatalogError))

pub mod catalog;
pub mod error;

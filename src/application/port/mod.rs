// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`catalog`]: Paginated product source
//!
//! # Design Notes
//!
//! - Traits use domain types only (no Iced types)
//! - Traits are `Send + Sync` so a source can be shared with fetch tasks
//! - Methods return boxed `'static` futures; callers wrap them in Iced's `Task`

pub mod catalog;

pub use catalog::{CatalogSource, FetchResult, SharedCatalogSource};

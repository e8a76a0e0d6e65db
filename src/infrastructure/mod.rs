// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`mock`]: Generated catalog (implements [`CatalogSource`])
//!
//! [`CatalogSource`]: crate::application::port::CatalogSource

pub mod mock;

pub use mock::{MockCatalog, MockCatalogConfig};

// SPDX-License-Identifier: MPL-2.0
//! `iced_shelf` is an infinite-scroll product list built with the Iced GUI
//! framework.
//!
//! Products are fetched page by page from a catalog source as the end of the
//! list scrolls into view, and a running total of their prices stays pinned
//! above the list.
//!
//! # Layers
//!
//! - [`domain`]: products, pages and catalog errors
//! - [`application`]: the catalog source port and the pagination state machine
//! - [`infrastructure`]: the generated in-process catalog
//! - [`ui`] and [`app`]: the iced component, toasts and the window shell

#![doc(html_root_url = "https://docs.rs/iced_shelf/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;

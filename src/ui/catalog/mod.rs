// SPDX-License-Identifier: MPL-2.0
//! Infinite-scroll product list.
//!
//! The component owns the pagination controller and the visibility sensor,
//! turns sentinel reports into fetches and renders the accumulated products
//! with a running total pinned above the list.

pub mod component;
pub mod view;

pub use component::{Effect, Message, State, ViewEnv, SCROLLABLE_ID};

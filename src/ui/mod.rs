// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! owns its state, handles its own messages and reports side effects to the
//! application as an `Effect`.
//!
//! - [`catalog`] - Infinite-scroll product list with the running total
//! - [`notifications`] - Toast notification system for user feedback
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode and view color schemes

pub mod catalog;
pub mod design_tokens;
pub mod notifications;
pub mod theming;

// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`pagination`]: The incremental loading state machine and its
//!   visibility sensor
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer drives application layer services
//!
//! # Example
//!
//! ```ignore
//! use iced_shelf::application::pagination::{Controller, Effect};
//!
//! let mut controller = Controller::new();
//! let Effect::Fetch(page) = controller.start() else { unreachable!() };
//! // dispatch a fetch for `page`, then feed the result back:
//! let effect = controller.apply(page, result);
//! ```

pub mod pagination;
pub mod port;

// SPDX-License-Identifier: MPL-2.0
//! Scroll-triggered incremental loading.
//!
//! - [`Controller`]: owns the page index, the end-of-data flag and the
//!   accumulated products; decides when a fetch is dispatched and whether a
//!   fetch result is applied.
//! - [`VisibilitySensor`]: turns a stream of "is the sentinel visible"
//!   observations into edge-triggered load-more signals.
//!
//! Neither type performs I/O. The presentation layer forwards sentinel
//! show/hide reports to the sensor, sensor signals to the controller, and turns
//! [`Effect::Fetch`] into an async task whose result comes back through
//! [`Controller::apply`].

mod controller;
mod sensor;

pub use controller::{Controller, Effect, Status};
pub use sensor::VisibilitySensor;

// SPDX-License-Identifier: MPL-2.0
//! Catalog domain types.

mod newtypes;
mod types;

pub use newtypes::{PageIndex, Price, ProductId};
pub use types::{total_price, Page, Product};

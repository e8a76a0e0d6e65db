// SPDX-License-Identifier: MPL-2.0
//! Catalog newtypes.
//!
//! Identifiers and amounts are wrapped so a page index can never be passed
//! where a product id or a price is expected.

use std::fmt;
use std::iter::Sum;

// =============================================================================
// ProductId
// =============================================================================

/// Unique identifier of a product, stable across fetches of the same page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(u64);

impl ProductId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Price
// =============================================================================

/// Non-negative price in whole currency units.
///
/// The unsigned representation makes negative prices unrepresentable.
/// Sums saturate instead of wrapping so a pathological source cannot make
/// the running total roll over to a small number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);

    #[must_use]
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub const fn saturating_add(self, other: Price) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Price::ZERO, Price::saturating_add)
    }
}

impl<'a> Sum<&'a Price> for Price {
    fn sum<I: Iterator<Item = &'a Price>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// PageIndex
// =============================================================================

/// Zero-based index of a page in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct PageIndex(u32);

impl PageIndex {
    /// The page fetched unconditionally on mount.
    pub const FIRST: PageIndex = PageIndex(0);

    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Returns the following page index, saturating at `u32::MAX`.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for PageIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_sum_adds_amounts() {
        let prices = [Price::new(10), Price::new(20), Price::new(5)];
        let total: Price = prices.iter().sum();
        assert_eq!(total, Price::new(35));
    }

    #[test]
    fn price_sum_of_nothing_is_zero() {
        let total: Price = std::iter::empty::<Price>().sum();
        assert_eq!(total, Price::ZERO);
    }

    #[test]
    fn price_sum_saturates() {
        let total: Price = [Price::new(u64::MAX), Price::new(1)].into_iter().sum();
        assert_eq!(total.value(), u64::MAX);
    }

    #[test]
    fn page_index_next_increments_by_one() {
        assert_eq!(PageIndex::FIRST.next(), PageIndex::new(1));
        assert_eq!(PageIndex::new(41).next().value(), 42);
    }

    #[test]
    fn page_index_next_saturates() {
        assert_eq!(PageIndex::new(u32::MAX).next(), PageIndex::new(u32::MAX));
    }
}

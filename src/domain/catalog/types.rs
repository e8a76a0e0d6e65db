// SPDX-License-Identifier: MPL-2.0
//! Products and the pages that carry them.

use super::newtypes::{Price, ProductId};

/// A product as returned by a catalog source. Never mutated after fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: Price) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

/// One batch of products plus the end-of-data flag reported with it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Page {
    pub items: Vec<Product>,
    pub is_end: bool,
}

impl Page {
    #[must_use]
    pub fn new(items: Vec<Product>, is_end: bool) -> Self {
        Self { items, is_end }
    }

    /// A page with no items that closes the catalog.
    #[must_use]
    pub fn terminal() -> Self {
        Self {
            items: Vec::new(),
            is_end: true,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Sum of all prices in `products`.
#[must_use]
pub fn total_price(products: &[Product]) -> Price {
    products.iter().map(|product| product.price).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, price: u64) -> Product {
        Product::new(ProductId::new(id), format!("Product {id}"), Price::new(price))
    }

    #[test]
    fn total_price_of_empty_list_is_zero() {
        assert_eq!(total_price(&[]), Price::ZERO);
    }

    #[test]
    fn total_price_sums_all_products() {
        let products = vec![product(1, 10), product(2, 20), product(3, 5)];
        assert_eq!(total_price(&products), Price::new(35));
    }

    #[test]
    fn total_price_is_stable_across_recomputation() {
        let products = vec![product(1, 99), product(2, 1)];
        assert_eq!(total_price(&products), total_price(&products));
    }

    #[test]
    fn terminal_page_is_empty_and_ends() {
        let page = Page::terminal();
        assert!(page.is_empty());
        assert!(page.is_end);
        assert_eq!(page.len(), 0);
    }
}

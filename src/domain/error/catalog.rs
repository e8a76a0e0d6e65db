// SPDX-License-Identifier: MPL-2.0
//! Errors reported by catalog sources.

use crate::domain::catalog::PageIndex;
use std::fmt;

/// Failure to produce a page.
///
/// The controller treats every variant the same way (the page is marked as
/// failed and can be retried); the variants exist so the status row and the
/// toast can say what went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The source could not be reached or refused the request.
    Unavailable { page: PageIndex, reason: String },

    /// The source answered with data that could not be turned into a page.
    Malformed { page: PageIndex, reason: String },
}

impl CatalogError {
    /// Page the failed request was for.
    #[must_use]
    pub fn page(&self) -> PageIndex {
        match self {
            CatalogError::Unavailable { page, .. } | CatalogError::Malformed { page, .. } => *page,
        }
    }

    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            CatalogError::Unavailable { .. } => "error-catalog-unavailable",
            CatalogError::Malformed { .. } => "error-catalog-malformed",
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Unavailable { page, reason } => {
                write!(f, "Page {page} unavailable: {reason}")
            }
            CatalogError::Malformed { page, reason } => {
                write!(f, "Page {page} malformed: {reason}")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_is_reported_for_every_variant() {
        let unavailable = CatalogError::Unavailable {
            page: PageIndex::new(3),
            reason: "offline".into(),
        };
        let malformed = CatalogError::Malformed {
            page: PageIndex::new(4),
            reason: "bad price".into(),
        };
        assert_eq!(unavailable.page(), PageIndex::new(3));
        assert_eq!(malformed.page(), PageIndex::new(4));
    }

    #[test]
    fn i18n_keys_are_distinct() {
        let unavailable = CatalogError::Unavailable {
            page: PageIndex::FIRST,
            reason: String::new(),
        };
        let malformed = CatalogError::Malformed {
            page: PageIndex::FIRST,
            reason: String::new(),
        };
        assert_ne!(unavailable.i18n_key(), malformed.i18n_key());
    }

    #[test]
    fn display_mentions_page_and_reason() {
        let err = CatalogError::Unavailable {
            page: PageIndex::new(2),
            reason: "timeout".into(),
        };
        let text = err.to_string();
        assert!(text.contains('2'));
        assert!(text.contains("timeout"));
    }
}

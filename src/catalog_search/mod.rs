//! Catalog search over remote video catalogs.
//!
//! This module provides the result type shared by all catalog backends, the
//! error type for failed searches and the trait implemented by search
//! providers.
mod biliintl;
mod biliintl_types;

pub use biliintl::{BiliIntlProvider, build_search_url, decode_search_response};

use thiserror::Error;

/// Errors that can occur during a catalog search.
///
/// Every variant is reported to the user as the same generic message. The
/// underlying cause stays available through [`std::error::Error::source`].
#[derive(Debug, Error)]
pub enum SearchError {
    /// The HTTP client could not be constructed
    #[error("search failed")]
    ClientSetup(#[source] reqwest::Error),

    /// The request could not be sent or timed out
    #[error("search failed")]
    Request(#[source] reqwest::Error),

    /// The server answered with a status other than 200
    #[error("search failed")]
    UnexpectedStatus(u16),

    /// The response body could not be read
    #[error("search failed")]
    Body(#[source] reqwest::Error),

    /// The response body was not valid search JSON
    #[error("search failed")]
    Parse(#[source] serde_json::Error),
}

impl SearchError {
    /// Describes the failure including its cause, for diagnostics
    pub fn detail(&self) -> String {
        match self {
            SearchError::ClientSetup(e) => format!("failed to build HTTP client: {}", e),
            SearchError::Request(e) => format!("request failed: {}", e),
            SearchError::UnexpectedStatus(status) => format!("unexpected HTTP status {}", status),
            SearchError::Body(e) => format!("failed to read response body: {}", e),
            SearchError::Parse(e) => format!("failed to parse response: {}", e),
        }
    }
}

/// A single title returned by a catalog search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResultItem {
    /// Identifier of the series season in the remote catalog
    pub season_id: i64,
    /// Display title
    pub title: String,
    /// URL of the cover image
    pub cover: String,
}

/// Trait for providers that can search a video catalog by keyword.
pub trait CatalogSearch {
    /// Searches the catalog for the given keyword.
    ///
    /// Returns the first page of results in the order the catalog delivered
    /// them.
    fn search(&self, keyword: &str) -> Result<Vec<SearchResultItem>, SearchError>;
}

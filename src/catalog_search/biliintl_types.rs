//! biliintl API response types for deserialization.
//!
//! These structures mirror the JSON envelope returned by the app gateway.
//! Absent fields fall back to their zero value.
use serde::Deserialize;

/// The top-level response from the typed search endpoint.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct BiliIntlSearchResponse {
    /// Gateway status code (0 on success)
    pub code: i64,
    /// Human readable status message
    pub message: String,
    /// Cache lifetime hint
    pub ttl: i64,
    /// The actual search payload
    pub data: BiliIntlSearchData,
}

/// Paging information and results of a search.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct BiliIntlSearchData {
    pub pages: i64,
    pub total: i64,
    /// Matches of the current page (null when there are none)
    #[serde(deserialize_with = "null_as_empty")]
    pub items: Vec<BiliIntlSearchItem>,
}

/// A single season matched by the search.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct BiliIntlSearchItem {
    pub season_id: i64,
    pub title: String,
    pub cover: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<BiliIntlSearchItem>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let items: Option<Vec<BiliIntlSearchItem>> = Option::deserialize(deserializer)?;
    Ok(items.unwrap_or_default())
}

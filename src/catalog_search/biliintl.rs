//! biliintl catalog search provider implementation.
use super::biliintl_types::{BiliIntlSearchItem, BiliIntlSearchResponse};
use super::{CatalogSearch, SearchError, SearchResultItem};
use crate::config::SearchConfig;
use reqwest::Url;
use reqwest::blocking::Client;
use tracing::{debug, trace};

/// Search provider for the biliintl app gateway.
///
/// The provider owns a single blocking HTTP client, so consecutive searches
/// reuse pooled connections to the gateway.
pub struct BiliIntlProvider {
    client: Client,
    config: SearchConfig,
    endpoint: Url,
}

impl BiliIntlProvider {
    /// Creates a new provider from the given configuration.
    ///
    /// The endpoint is expected to be valid; see [`SearchConfig::validate`].
    pub fn new(config: SearchConfig, endpoint: Url) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .pool_max_idle_per_host(config.max_idle_per_host)
            .pool_idle_timeout(config.idle_timeout)
            .no_gzip()
            .build()
            .map_err(SearchError::ClientSetup)?;

        Ok(Self {
            client,
            config,
            endpoint,
        })
    }

    /// Converts a wire item to our result structure.
    fn convert_item(item: BiliIntlSearchItem) -> SearchResultItem {
        SearchResultItem {
            season_id: item.season_id,
            title: item.title,
            cover: item.cover,
        }
    }
}

/// Builds the search URL for a keyword.
///
/// The keyword is form-encoded into the `keyword` parameter, so decoding the
/// query yields the keyword unchanged.
pub fn build_search_url(endpoint: &Url, config: &SearchConfig, keyword: &str) -> Url {
    let highlight = if config.highlight { "1" } else { "0" };
    let result_type = config.result_type.to_string();

    let mut url = endpoint.clone();
    url.query_pairs_mut()
        .clear()
        .append_pair("platform", &config.platform)
        .append_pair("s_locale", &config.locale)
        .append_pair("keyword", keyword)
        .append_pair("highlight", highlight)
        .append_pair("type", &result_type);
    url
}

/// Interprets a raw gateway response.
///
/// Anything but status 200 with a decodable body is a failure.
pub fn decode_search_response(
    status: u16,
    body: &[u8],
) -> Result<Vec<SearchResultItem>, SearchError> {
    if status != 200 {
        return Err(SearchError::UnexpectedStatus(status));
    }

    let response: BiliIntlSearchResponse =
        serde_json::from_slice(body).map_err(SearchError::Parse)?;

    debug!(
        code = response.code,
        message = %response.message,
        ttl = response.ttl,
        pages = response.data.pages,
        total = response.data.total,
        "decoded search response"
    );

    Ok(response
        .data
        .items
        .into_iter()
        .map(BiliIntlProvider::convert_item)
        .collect())
}

impl CatalogSearch for BiliIntlProvider {
    fn search(&self, keyword: &str) -> Result<Vec<SearchResultItem>, SearchError> {
        let url = build_search_url(&self.endpoint, &self.config, keyword);
        debug!(%url, "sending search request");

        let response = self
            .client
            .get(url)
            .send()
            .map_err(SearchError::Request)?;

        let status = response.status().as_u16();
        let body = response.bytes().map_err(SearchError::Body)?;
        trace!(status, bytes = body.len(), "received search response");

        decode_search_response(status, &body)
    }
}

//! bili_search - Interactive keyword search for the Bilibili international catalog
//!
//! This library provides the search client for the biliintl app gateway, the
//! keyword input handling and the console report used by the `bili_search`
//! binary.

mod catalog_search;
mod config;
mod input;
pub mod logging;
mod report;

pub use catalog_search::{
    BiliIntlProvider, CatalogSearch, SearchError, SearchResultItem, build_search_url,
    decode_search_response,
};
pub use config::{ConfigError, DEFAULT_BASE_URL, DEFAULT_LOCALE, SEARCH_PATH, SearchConfig};
pub use input::{InputError, normalize_line, read_keyword};
pub use report::{write_banner, write_failure, write_prompt, write_results};

use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::{debug, info};

/// Top-level error type for setting up a search session
#[derive(Debug, Error)]
pub enum BiliSearchError {
    /// The configuration is invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The search client could not be created
    #[error("Search client error: {}", .0.detail())]
    Search(#[from] SearchError),
}

/// Validates the configuration and creates a ready-to-use provider
///
/// # Examples
///
/// ```no_run
/// use bili_search::{connect, CatalogSearch, SearchConfig};
///
/// let provider = connect(SearchConfig::default()).unwrap();
/// for item in provider.search("Demo Show").unwrap() {
///     println!("({}) {}", item.season_id, item.title);
/// }
/// ```
pub fn connect(config: SearchConfig) -> Result<BiliIntlProvider, BiliSearchError> {
    let endpoint = config.validate()?;
    info!(%endpoint, "using search endpoint");
    Ok(BiliIntlProvider::new(config, endpoint)?)
}

/// Runs the interactive read-search-print loop
///
/// Prints the banner, then prompts for keywords until an empty line or the
/// end of `input` is reached. Read and search failures are reported on
/// `output` and the loop continues with the next prompt.
///
/// # Arguments
///
/// * `input` - Source of keyword lines
/// * `output` - Destination for prompts and results
/// * `provider` - The catalog to search, reused for every keyword
///
/// # Returns
///
/// `Ok(())` once the user ends the session, or an error if `output` fails
pub fn run_session<R, W, S>(input: &mut R, output: &mut W, provider: &S) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    S: CatalogSearch + ?Sized,
{
    write_banner(output)?;

    loop {
        write_prompt(output)?;

        let keyword = match read_keyword(input) {
            Ok(Some(keyword)) => keyword,
            Ok(None) => {
                debug!("empty input, ending session");
                return Ok(());
            }
            Err(e) => {
                debug!("{}", e);
                write_failure(output, &e)?;
                continue;
            }
        };

        match provider.search(&keyword) {
            Ok(items) => {
                info!(keyword = %keyword, count = items.len(), "search completed");
                write_results(output, &items)?;
            }
            Err(e) => {
                debug!(keyword = %keyword, "{}", e.detail());
                write_failure(output, &e)?;
            }
        }
    }
}

use bili_search::{DEFAULT_BASE_URL, DEFAULT_LOCALE, SearchConfig, connect, logging, run_session};
use clap::Parser;
use std::io;
use std::process::ExitCode;
use std::time::Duration;

/// Interactive keyword search for the Bilibili international anime catalog.
///
/// Enter a keyword at the prompt to list matching seasons. An empty line exits.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Base URL of the app gateway
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Locale sent with every search
    #[arg(long, default_value = DEFAULT_LOCALE)]
    locale: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    /// Increase diagnostic output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn search_config(&self) -> SearchConfig {
        SearchConfig {
            base_url: self.base_url.clone(),
            locale: self.locale.clone(),
            timeout: Duration::from_secs(self.timeout),
            ..SearchConfig::default()
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let provider = match connect(cli.search_config()) {
        Ok(provider) => provider,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    match run_session(&mut stdin.lock(), &mut stdout.lock(), &provider) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error writing output: {}", e);
            ExitCode::FAILURE
        }
    }
}

//! Address-Parser-RS command line runner
//!
//! Looks up suggestions for one partial address and prints them as JSON.

use address_parser_rs::{AddressParser, Settings, SuggestionOptions};
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

struct Args {
    config: Option<PathBuf>,
    limit: Option<u32>,
    query: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = match parse_args(std::env::args().skip(1))? {
        Some(args) => args,
        None => return Ok(()),
    };

    let mut settings = load_settings(args.config.as_deref())?;
    if args.limit.is_some() {
        settings.suggestions.limit = args.limit;
    }

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting address-parser-rs v{}", address_parser_rs::VERSION);

    let parser = AddressParser::from_settings(&settings).context(
        "Failed to create provider (set ADDRESS_PARSER_API_KEY or provider.api_key)",
    )?;

    let options: SuggestionOptions = settings.suggestions.options();
    let suggestions = parser.get_suggestions(&args.query, &options).await?;
    info!("Found {} suggestions for {:?}", suggestions.len(), args.query);

    println!("{}", serde_json::to_string_pretty(&suggestions)?);
    Ok(())
}

/// Parse command line arguments; `None` means usage or version was printed
fn parse_args(mut iter: impl Iterator<Item = String>) -> Result<Option<Args>> {
    let mut config = None;
    let mut limit = None;
    let mut words = Vec::new();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_usage();
                return Ok(None);
            }
            "-V" | "--version" => {
                println!("address-parser-rs {}", address_parser_rs::VERSION);
                return Ok(None);
            }
            "-c" | "--config" => {
                let path = iter.next().context("--config requires a file path")?;
                config = Some(PathBuf::from(path));
            }
            "-l" | "--limit" => {
                let value = iter.next().context("--limit requires a number")?;
                limit = Some(value.parse().context("--limit must be a positive integer")?);
            }
            _ => words.push(arg),
        }
    }

    if words.is_empty() {
        print_usage();
        anyhow::bail!("missing address query");
    }

    Ok(Some(Args {
        config,
        limit,
        query: words.join(" "),
    }))
}

/// Load settings from file or use defaults
fn load_settings(explicit: Option<&std::path::Path>) -> Result<Settings> {
    if let Some(path) = explicit {
        let mut settings = Settings::from_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?;
        settings.merge_env();
        return Ok(settings);
    }

    let mut paths = Vec::new();
    if let Ok(path) = std::env::var("ADDRESS_PARSER_SETTINGS_PATH") {
        paths.push(PathBuf::from(path));
    }
    paths.push(PathBuf::from("settings.yml"));
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("address-parser-rs/settings.yml"));
    }

    for path in paths.iter() {
        if path.exists() {
            let mut settings = Settings::from_file(path)
                .with_context(|| format!("Failed to load {}", path.display()))?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    let mut settings = Settings::default();
    settings.merge_env();
    Ok(settings)
}

/// Print usage information
fn print_usage() {
    println!(
        r#"
Address-Parser-RS v{}
Australian address suggestions from the TomTom Search API

USAGE:
    address-parser-rs [OPTIONS] <QUERY>...

OPTIONS:
    -c, --config <FILE>    Path to configuration file
    -l, --limit <N>        Maximum number of suggestions (default 10)
    -h, --help             Print help information
    -V, --version          Print version information

ENVIRONMENT VARIABLES:
    ADDRESS_PARSER_SETTINGS_PATH  Path to settings.yml
    ADDRESS_PARSER_API_KEY        TomTom API key
    ADDRESS_PARSER_PROVIDER       Provider type (tomtom)
    ADDRESS_PARSER_BASE_URL       Override the provider base URL
    ADDRESS_PARSER_TIMEOUT_MS     Request timeout in milliseconds
    ADDRESS_PARSER_LIMIT          Default suggestion limit
    ADDRESS_PARSER_LOG_LEVEL      Log filter when RUST_LOG is unset
"#,
        address_parser_rs::VERSION
    );
}

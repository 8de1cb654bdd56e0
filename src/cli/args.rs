use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

/// Command-line arguments accepted by the `laf-search` binary.
#[derive(Parser, Debug)]
#[command(
    name = "laf-search",
    version,
    about = "Live search client for lost-and-found reports"
)]
pub(crate) struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "LAF_SEARCH_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        short = 'b',
        long = "base-url",
        value_name = "URL",
        env = "LAF_SEARCH_BASE_URL",
        help = "Backend base URL (default: http://localhost:8080)"
    )]
    pub(crate) base_url: Option<String>,
    #[arg(
        long = "timeout-ms",
        value_name = "MS",
        help = "HTTP request timeout in milliseconds (default: 10000)"
    )]
    pub(crate) timeout_ms: Option<u64>,
    #[arg(
        long = "quiet-period-ms",
        value_name = "MS",
        help = "Debounce quiet period in milliseconds (default: 200)"
    )]
    pub(crate) quiet_period_ms: Option<u64>,
    #[arg(
        short = 'o',
        long,
        value_enum,
        default_value_t = OutputFormat::Plain,
        help = "Output format for one-shot modes (default: plain)"
    )]
    pub(crate) output: OutputFormat,
    #[arg(
        long,
        value_name = "QUERY",
        conflicts_with_all = ["latest", "stats"],
        help = "Run a single search and exit"
    )]
    pub(crate) once: Option<String>,
    #[arg(
        long,
        conflicts_with = "stats",
        help = "Print the most recent reports and exit"
    )]
    pub(crate) latest: bool,
    #[arg(long, help = "Print per-category report counts and exit")]
    pub(crate) stats: bool,
    #[arg(
        long = "print-config",
        help = "Print the effective configuration before running"
    )]
    pub(crate) print_config: bool,
}

/// Output formats supported by the one-shot modes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Plain,
    Json,
}

/// Parse command line arguments into the strongly typed [`CliArgs`]
/// structure.
pub(crate) fn parse_cli() -> CliArgs {
    CliArgs::parse()
}

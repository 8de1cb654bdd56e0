mod args;
mod output;

pub(crate) use args::{CliArgs, OutputFormat, parse_cli};
pub(crate) use output::{print_reports, print_reports_json, print_stats, print_stats_json};

mod cli;
mod prompt;
mod settings;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use tracing_subscriber::{EnvFilter, fmt};

use cli::{OutputFormat, parse_cli};
use laf_search::{HttpBackend, LiveSearch};
use settings::ResolvedConfig;

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cli = parse_cli();
    let resolved = settings::load(&cli)?;

    if cli.print_config {
        resolved.print_summary();
    }

    let backend = Arc::new(
        HttpBackend::new(&resolved.base_url, resolved.timeout)
            .context("failed to construct backend client")?,
    );

    if cli.latest {
        return run_latest(cli.output, &backend);
    }
    if cli.stats {
        return run_stats(cli.output, &backend);
    }
    if let Some(query) = cli.once.as_deref() {
        return run_once(cli.output, backend, query, &resolved);
    }

    prompt::run(backend, &resolved)
}

/// Dispatch a single query through the coordinator and print the resolved
/// result set.
fn run_once(
    format: OutputFormat,
    backend: Arc<HttpBackend>,
    query: &str,
    settings: &ResolvedConfig,
) -> Result<()> {
    let mut search = LiveSearch::with_quiet_period(backend, settings.quiet_period);
    search.search_now(query);

    let grace = settings.timeout + settings.quiet_period + Duration::from_secs(1);
    if !search.wait(grace) {
        bail!(
            "search for '{query}' did not resolve within {} ms",
            grace.as_millis()
        );
    }

    let view = search.view();
    match format {
        OutputFormat::Plain => {
            if view.no_results {
                println!("No reports matching '{query}'");
            } else {
                cli::print_reports(&view.results);
            }
        }
        OutputFormat::Json => cli::print_reports_json(&view.results)?,
    }
    Ok(())
}

fn run_latest(format: OutputFormat, backend: &HttpBackend) -> Result<()> {
    let reports = backend
        .latest_reports()
        .context("failed to fetch recent reports")?;
    match format {
        OutputFormat::Plain => cli::print_reports(&reports),
        OutputFormat::Json => cli::print_reports_json(&reports)?,
    }
    Ok(())
}

fn run_stats(format: OutputFormat, backend: &HttpBackend) -> Result<()> {
    let stats = backend
        .category_stats()
        .context("failed to fetch category statistics")?;
    match format {
        OutputFormat::Plain => cli::print_stats(&stats),
        OutputFormat::Json => cli::print_stats_json(&stats)?,
    }
    Ok(())
}

use std::time::Duration;

use anyhow::{Result, ensure};
use serde::Deserialize;

use laf_search::search::DEFAULT_QUIET_PERIOD;

use super::resolved::ResolvedConfig;
use crate::cli::CliArgs;

const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Mirror of the configuration file representation before CLI overrides
/// and validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
    backend: BackendSection,
    search: SearchSection,
}

/// Backend connection options as they are read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct BackendSection {
    base_url: Option<String>,
    timeout_ms: Option<u64>,
}

/// Search tuning options prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SearchSection {
    quiet_period_ms: Option<u64>,
}

impl RawConfig {
    /// Fold explicit CLI flags over whatever the file/env sources produced.
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(base_url) = &cli.base_url {
            self.backend.base_url = Some(base_url.clone());
        }
        if let Some(timeout_ms) = cli.timeout_ms {
            self.backend.timeout_ms = Some(timeout_ms);
        }
        if let Some(quiet_period_ms) = cli.quiet_period_ms {
            self.search.quiet_period_ms = Some(quiet_period_ms);
        }
    }

    /// Validate and fill defaults, producing the application-ready config.
    pub(super) fn resolve(self) -> Result<ResolvedConfig> {
        let base_url = self
            .backend
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        ensure!(!base_url.is_empty(), "backend.base_url must not be empty");
        ensure!(
            base_url.starts_with("http://") || base_url.starts_with("https://"),
            "backend.base_url must start with http:// or https:// (got '{base_url}')"
        );

        let timeout_ms = self.backend.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS);
        ensure!(
            timeout_ms > 0,
            "backend.timeout_ms must be greater than zero"
        );

        let quiet_period = self
            .search
            .quiet_period_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_QUIET_PERIOD);

        Ok(ResolvedConfig {
            base_url,
            timeout: Duration::from_millis(timeout_ms),
            quiet_period,
        })
    }
}

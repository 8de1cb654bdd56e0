//! Configuration loading: config files, environment variables and CLI
//! flags, resolved into one validated structure.

mod raw;
mod resolved;
mod sources;

use anyhow::{Result, anyhow};

use crate::cli::CliArgs;
use raw::RawConfig;
pub(crate) use resolved::ResolvedConfig;
use sources::build_config;

/// Load configuration by combining CLI arguments, config files and
/// environment variables.
pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
    let builder = build_config(cli)?;
    let mut raw: RawConfig = builder
        .try_deserialize()
        .map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
    raw.apply_cli_overrides(cli);
    raw.resolve()
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::time::Duration;

    use clap::Parser;
    use tempfile::{Builder, NamedTempFile};

    use super::*;

    fn cli_with_args(args: &[&str]) -> CliArgs {
        let mut full = vec!["laf-search"];
        full.extend_from_slice(args);
        CliArgs::parse_from(full)
    }

    fn toml_file() -> NamedTempFile {
        Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file")
    }

    #[test]
    fn defaults_apply_without_any_sources() {
        let cli = cli_with_args(&["--no-config"]);
        let resolved = load(&cli).expect("loads");

        assert_eq!(resolved.base_url, "http://localhost:8080");
        assert_eq!(resolved.quiet_period, Duration::from_millis(200));
        assert_eq!(resolved.timeout, Duration::from_millis(10_000));
    }

    #[test]
    fn config_file_values_are_merged() {
        let mut file = toml_file();
        writeln!(
            file,
            "[backend]\nbase_url = \"https://reports.example.com/\"\n\n[search]\nquiet_period_ms = 350"
        )
        .expect("writes");

        let path = file.path().to_string_lossy().to_string();
        let cli = cli_with_args(&["--no-config", "--config", &path]);
        let resolved = load(&cli).expect("loads");

        assert_eq!(resolved.base_url, "https://reports.example.com");
        assert_eq!(resolved.quiet_period, Duration::from_millis(350));
    }

    #[test]
    fn cli_flags_override_config_files() {
        let mut file = toml_file();
        writeln!(file, "[backend]\nbase_url = \"https://reports.example.com\"").expect("writes");

        let path = file.path().to_string_lossy().to_string();
        let cli = cli_with_args(&[
            "--no-config",
            "--config",
            &path,
            "--base-url",
            "http://127.0.0.1:9000",
        ]);
        let resolved = load(&cli).expect("loads");

        assert_eq!(resolved.base_url, "http://127.0.0.1:9000");
    }
}

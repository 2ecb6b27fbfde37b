// src/logging.rs

//! Logging setup for the `tss-config` binary (`tracing-subscriber` fmt
//! layer on stderr, so stdout carries only the processed config).

use anyhow::{Result, anyhow};
use tracing::Level;
use tracing_subscriber::fmt;

/// Environment variable consulted when no `--log-level` is given.
pub const LOG_ENV_VAR: &str = "TSS_CONFIG_LOG";

/// Install the global subscriber at the level chosen by [`resolve_level`].
pub fn init_logging(cli_level: Option<Level>) -> Result<()> {
    let env_value = std::env::var(LOG_ENV_VAR).ok();
    let level = resolve_level(cli_level, env_value.as_deref());

    fmt()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}

/// `--log-level` wins, then a parseable env value, then `INFO`.
///
/// Env values use `tracing`'s own level names (`error` … `trace`, any case,
/// or `1`–`5`); anything else is ignored.
pub fn resolve_level(cli_level: Option<Level>, env_value: Option<&str>) -> Level {
    cli_level
        .or_else(|| env_value.and_then(|raw| raw.trim().parse().ok()))
        .unwrap_or(Level::INFO)
}

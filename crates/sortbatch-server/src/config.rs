//! Server configuration from CLI flags.

use std::time::Duration;

use clap::Parser;

use sortbatch_core::{ExecutorOptions, ResultOrder};

/// sortbatch: sort batches of integer arrays over HTTP.
#[derive(Parser, Debug, Clone)]
#[command(name = "sortbatch-server", version, about)]
pub struct ServerConfig {
    /// Address to bind to.
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, default_value = "8000")]
    pub port: u16,

    /// Simulated work per task after sorting (e.g., "1s", "500ms", "0").
    #[arg(long, default_value = "1s", value_parser = parse_duration)]
    pub simulated_work: Duration,

    /// Worker pool size for the concurrent endpoint (0 = 2 x CPUs).
    #[arg(short, long, default_value = "0")]
    pub workers: usize,

    /// Result order of the concurrent endpoint: completion or input.
    #[arg(long, default_value = "completion")]
    pub result_order: ResultOrder,
}

impl ServerConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Get the socket address string.
    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Executor options derived from the flags.
    #[must_use]
    pub fn executor_options(&self) -> ExecutorOptions {
        ExecutorOptions {
            simulated_work: self.simulated_work,
            max_workers: self.workers,
            result_order: self.result_order,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            simulated_work: sortbatch_core::DEFAULT_SIMULATED_WORK,
            workers: 0,
            result_order: ResultOrder::Completion,
        }
    }
}

/// Parse a duration string like "1s", "500ms", "2m" or bare seconds.
pub fn parse_duration(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    let invalid = || format!("invalid duration: {s:?}");

    if let Some(ms) = s.strip_suffix("ms") {
        let n: u64 = ms.parse().map_err(|_| invalid())?;
        Ok(Duration::from_millis(n))
    } else if let Some(mins) = s.strip_suffix('m') {
        let n: u64 = mins.parse().map_err(|_| invalid())?;
        let secs = n.checked_mul(60).ok_or_else(invalid)?;
        Ok(Duration::from_secs(secs))
    } else if let Some(secs) = s.strip_suffix('s') {
        let n: u64 = secs.parse().map_err(|_| invalid())?;
        Ok(Duration::from_secs(n))
    } else {
        let n: u64 = s.parse().map_err(|_| invalid())?;
        Ok(Duration::from_secs(n))
    }
}

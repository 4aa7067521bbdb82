//! Watch command - polls a parameter through the cache

use std::time::Duration;

use chrono::Utc;
use clap::Args;
use tokio::signal;
use tracing::{error, info};

use crate::domain::parameter::ParameterCache;
use crate::domain::DomainError;

/// Arguments for the watch command
#[derive(Args, Debug, Clone)]
pub struct WatchArgs {
    /// Parameter name to poll
    pub key: String,

    /// Seconds between reads
    #[arg(long, default_value_t = 5)]
    pub interval_secs: u64,

    /// Stop after this many reads (runs until Ctrl+C when omitted)
    #[arg(long)]
    pub iterations: Option<u64>,

    /// Decrypt SecureString values (`true`/`false`, defaults to config)
    #[arg(long)]
    pub decrypt: Option<bool>,
}

/// Run the watch command
pub async fn run(args: WatchArgs) -> anyhow::Result<()> {
    let cache = super::bootstrap().await?;
    let decrypt = super::resolve_decrypt(args.decrypt, cache.defaults());
    let period = Duration::from_secs(args.interval_secs);

    info!(key = %args.key, decrypt, "Watching parameter");

    tokio::select! {
        _ = poll_parameter(&cache, &args.key, decrypt, period, args.iterations, print_read) => {}
        _ = signal::ctrl_c() => {
            info!("Received Ctrl+C, stopping watch");
        }
    }

    Ok(())
}

fn print_read(key: &str, result: &Result<String, DomainError>) {
    match result {
        Ok(value) => println!("{} {}={}", Utc::now().to_rfc3339(), key, value),
        Err(e) => error!(error = %e, "Failed to read parameter"),
    }
}

/// Reads `key` every `period`, handing each result to `on_read`.
///
/// Errors do not stop the loop. Returns the number of successful reads.
pub async fn poll_parameter<F>(
    cache: &dyn ParameterCache,
    key: &str,
    decrypt: bool,
    period: Duration,
    iterations: Option<u64>,
    mut on_read: F,
) -> u64
where
    F: FnMut(&str, &Result<String, DomainError>),
{
    let mut reads = 0;
    let mut successes = 0;

    loop {
        let result = cache.get_with_option(key, decrypt).await;
        if result.is_ok() {
            successes += 1;
        }
        on_read(key, &result);

        reads += 1;
        if iterations.is_some_and(|limit| reads >= limit) {
            return successes;
        }

        tokio::time::sleep(period).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parameter::MockParameterCache;
    use crate::domain::FetchError;

    #[tokio::test]
    async fn test_poll_stops_after_iterations() {
        let mut cache = MockParameterCache::new();
        cache
            .expect_get_with_option()
            .withf(|key, decrypt| key == "/feature/flag" && !*decrypt)
            .times(3)
            .returning(|_, _| Ok("on".to_string()));

        let mut seen = Vec::new();
        let successes = poll_parameter(
            &cache,
            "/feature/flag",
            false,
            Duration::ZERO,
            Some(3),
            |_, result| seen.push(result.as_ref().ok().cloned()),
        )
        .await;

        assert_eq!(successes, 3);
        assert_eq!(seen, vec![Some("on".to_string()); 3]);
    }

    #[tokio::test]
    async fn test_poll_continues_after_errors() {
        let mut cache = MockParameterCache::new();
        let mut calls = 0;
        cache
            .expect_get_with_option()
            .times(2)
            .returning(move |key, _| {
                calls += 1;
                if calls == 1 {
                    Err(DomainError::fetch(key, FetchError::service("throttled")))
                } else {
                    Ok("v".to_string())
                }
            });

        let successes =
            poll_parameter(&cache, "/k", true, Duration::ZERO, Some(2), |_, _| {}).await;

        assert_eq!(successes, 1);
    }
}

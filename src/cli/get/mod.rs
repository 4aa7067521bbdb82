//! Get command - reads parameters once

use clap::Args;
use futures::future::try_join_all;

use crate::domain::parameter::ParameterCache;
use crate::domain::DomainError;

/// Arguments for the get command
#[derive(Args, Debug, Clone)]
pub struct GetArgs {
    /// Parameter names to read
    #[arg(required = true)]
    pub keys: Vec<String>,

    /// Decrypt SecureString values (`true`/`false`, defaults to config)
    #[arg(long)]
    pub decrypt: Option<bool>,

    /// Refresh every key from the store before reading
    #[arg(long)]
    pub force: bool,

    /// Print a JSON object instead of key=value lines
    #[arg(long)]
    pub json: bool,
}

/// Run the get command
pub async fn run(args: GetArgs) -> anyhow::Result<()> {
    let cache = super::bootstrap().await?;
    let decrypt = super::resolve_decrypt(args.decrypt, cache.defaults());

    let values = read_parameters(&cache, &args.keys, decrypt, args.force).await?;

    if args.json {
        let object: serde_json::Map<String, serde_json::Value> = values
            .into_iter()
            .map(|(key, value)| (key, serde_json::Value::String(value)))
            .collect();
        println!("{}", serde_json::to_string_pretty(&object)?);
    } else {
        for (key, value) in values {
            println!("{}={}", key, value);
        }
    }

    Ok(())
}

/// Reads every key through the cache, in input order
pub async fn read_parameters(
    cache: &dyn ParameterCache,
    keys: &[String],
    decrypt: bool,
    force: bool,
) -> Result<Vec<(String, String)>, DomainError> {
    if force {
        for key in keys {
            cache.force_refresh_with_option(key, decrypt).await?;
        }
    }

    try_join_all(keys.iter().map(|key| async move {
        cache
            .get_with_option(key, decrypt)
            .await
            .map(|value| (key.clone(), value))
    }))
    .await
}

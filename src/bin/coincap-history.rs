//! CLI entry point: print the most recent prices of an asset's history.
//!
//! ```bash
//! coincap-history 1day/BTC --top 10
//! coincap-history --asset ETH --period 7day -n 5 --json
//! ```

use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use coincap_history::prelude::*;

const DEFAULT_KEY: &str = "1day/BTC";
const DEFAULT_TOP: usize = 10;

#[derive(Parser)]
#[command(
    name = "coincap-history",
    version,
    about = "Show the most recent entries of a CoinCap asset history"
)]
struct Cli {
    /// History key, e.g. `1day/BTC`
    #[arg(default_value = DEFAULT_KEY)]
    key: String,

    /// Asset symbol; combined with --period to build the key instead of KEY
    #[arg(long, conflicts_with = "key")]
    asset: Option<String>,

    /// History window: all, 1day, 7day, 30day, 90day, 180day, 365day
    #[arg(long, default_value = "1day")]
    period: Period,

    /// Number of records to show, newest first
    #[arg(short = 'n', long = "top", default_value_t = DEFAULT_TOP)]
    top: usize,

    /// API base URL
    #[arg(long, default_value = DEFAULT_API_URL)]
    base_url: String,

    /// Request timeout in seconds (none by default)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Render dates in local time instead of UTC
    #[arg(long)]
    local: bool,

    /// Print the selected records as JSON instead of display lines
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn history_key(&self) -> HistoryKey {
        match &self.asset {
            Some(asset) => HistoryKey::new(self.period, &AssetId::from(asset.as_str())),
            None => HistoryKey::from(self.key.as_str()),
        }
    }

    fn display_tz(&self) -> DisplayTz {
        if self.local {
            DisplayTz::Local
        } else {
            DisplayTz::Utc
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut builder = CoincapClient::builder().base_url(&cli.base_url);
    if let Some(secs) = cli.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    let client = builder.build().context("failed to build client")?;

    let key = cli.history_key();
    tracing::info!(%key, top = cli.top, "Fetching history");

    if cli.json {
        let records = client
            .history()
            .latest(&key, cli.top)
            .await
            .with_context(|| format!("failed to load history for {}", key))?;
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    let lines = client
        .history()
        .process_in(&key, cli.top, cli.display_tz())
        .await
        .with_context(|| format!("failed to process history for {}", key))?;

    for line in lines {
        println!("{}", line);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("coincap-history").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn test_defaults_to_one_day_btc() {
        let cli = parse(&[]);
        assert_eq!(cli.history_key().as_str(), DEFAULT_KEY);
        assert_eq!(cli.top, DEFAULT_TOP);
        assert_eq!(cli.display_tz(), DisplayTz::Utc);
    }

    #[test]
    fn test_positional_key_is_passed_through() {
        let cli = parse(&["30day/ETH", "-n", "3", "--local"]);
        assert_eq!(cli.history_key().as_str(), "30day/ETH");
        assert_eq!(cli.top, 3);
        assert_eq!(cli.display_tz(), DisplayTz::Local);
    }

    #[test]
    fn test_asset_and_period_build_the_key() {
        let cli = parse(&["--asset", "ETH", "--period", "7day"]);
        assert_eq!(cli.history_key().as_str(), "7day/ETH");

        let cli = parse(&["--asset", "ETH"]);
        assert_eq!(cli.history_key().as_str(), "1day/ETH");
    }

    #[test]
    fn test_all_period_drops_the_prefix() {
        let cli = parse(&["--asset", "BTC", "--period", "all"]);
        assert_eq!(cli.history_key().as_str(), "BTC");
    }

    #[test]
    fn test_key_and_asset_conflict() {
        let result = Cli::try_parse_from(["coincap-history", "7day/BTC", "--asset", "ETH"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_period_is_rejected() {
        let result = Cli::try_parse_from(["coincap-history", "--asset", "BTC", "--period", "2day"]);
        assert!(result.is_err());
    }
}

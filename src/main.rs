//! `bitopro-report`: query BitoPro and print the results as JSON.
//!
//! Run with: cargo run --bin bitopro-report -- --report balance --balance-output balance.json

use std::path::PathBuf;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use bitopro_api_client::auth::EnvCredentials;
use bitopro_api_client::rate_limit::RateLimitConfig;
use bitopro_api_client::report::{
    ClientOptions, DEFAULT_DEPOSIT_CURRENCY, DEFAULT_PAIR, ReportKind, Runner, RunnerConfig,
    build_client,
};

#[derive(Parser, Debug)]
#[command(name = "bitopro-report")]
#[command(about = "Run read-only BitoPro queries and print the results")]
struct Args {
    /// Reports to run (repeatable or comma-separated)
    #[arg(
        long = "report",
        value_enum,
        env = "BITOPRO_REPORTS",
        value_delimiter = ',',
        default_values = ["currencies", "trading-pairs"]
    )]
    reports: Vec<ReportKind>,

    /// Pair for the tickers, trades, order-book and orders reports
    #[arg(long, env = "BITOPRO_PAIR", default_value = DEFAULT_PAIR)]
    pair: String,

    /// Currency for the deposit-history report
    #[arg(long, env = "BITOPRO_DEPOSIT_CURRENCY", default_value = DEFAULT_DEPOSIT_CURRENCY)]
    deposit_currency: String,

    /// Write balances whose available amount is not "0" to this file (implies the balance report)
    #[arg(long, env = "BITOPRO_BALANCE_OUTPUT")]
    balance_output: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, env = "BITOPRO_BASE_URL")]
    base_url: Option<String>,

    /// Retries for transient HTTP failures
    #[arg(long, default_value_t = 3)]
    max_retries: u32,

    /// Disable client-side rate limiting
    #[arg(long)]
    no_rate_limit: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bitopro_api_client=info,bitopro_report=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = RunnerConfig::new(args.reports)
        .pair(args.pair)
        .deposit_currency(args.deposit_currency);
    if let Some(path) = args.balance_output {
        config = config.balance_output(path);
    }

    let credentials = EnvCredentials::try_from_env().map(EnvCredentials::into_credentials);
    if credentials.is_none() && config.planned_reports().iter().any(|r| r.is_private()) {
        warn!("BITOPRO_API_KEY or BITOPRO_API_SECRET not set; private reports will fail");
    }

    let options = ClientOptions {
        base_url: args.base_url,
        max_retries: args.max_retries,
        rate_limit: if args.no_rate_limit {
            RateLimitConfig::disabled()
        } else {
            RateLimitConfig::default()
        },
    };
    let client = build_client(credentials, options)?;

    info!(reports = ?config.planned_reports(), "starting run");
    let report = Runner::new(client, config).run().await?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

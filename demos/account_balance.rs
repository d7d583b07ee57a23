//! Example: Reading the account balance.
//!
//! Requires `BITOPRO_API_KEY` and `BITOPRO_API_SECRET` in the environment or a
//! `.env` file. `BITOPRO_EMAIL` is optional.
//!
//! Run with: cargo run --example account_balance

use std::sync::Arc;

use bitopro_api_client::auth::EnvCredentials;
use bitopro_api_client::report::BalanceSummary;
use bitopro_api_client::rest::BitoProRestClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();

    let credentials = EnvCredentials::from_env()?;
    let client = BitoProRestClient::builder()
        .credentials(Arc::new(credentials))
        .build();

    println!("=== Account Balance ===");
    let balances = client.get_account_balance().await?;
    for balance in &balances {
        println!(
            "{}: amount={}, available={}, stake={}",
            balance.currency,
            balance.amount,
            balance.available,
            balance.stake.as_deref().unwrap_or("-")
        );
    }

    // Same filter the report runner uses for balance.json
    println!("\n=== Available Summary ===");
    let summary = BalanceSummary::from_balances(&balances);
    println!("{}", summary.to_json_pretty()?);

    Ok(())
}

//! Example: Fetching public market data from BitoPro.
//!
//! This example reads currencies, trading pairs, a ticker, recent trades and
//! the order book without authentication.
//!
//! Run with: cargo run --example public_data

use bitopro_api_client::rest::BitoProRestClient;
use bitopro_api_client::rest::public::OrderBookRequest;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Public endpoints need no credentials
    let client = BitoProRestClient::new();

    println!("=== Currencies ===");
    let currencies = client.get_currencies().await?;
    for currency in currencies.iter().take(5) {
        println!(
            "{}: deposit={}, withdraw={}",
            currency.currency, currency.deposit, currency.withdraw
        );
    }

    println!("\n=== Trading Pairs ===");
    let pairs = client.get_trading_pairs().await?;
    for pair in pairs.iter().filter(|p| !p.maintain).take(5) {
        println!("{}: base={}, quote={}", pair.pair, pair.base, pair.quote);
    }

    println!("\n=== Ticker (ETH/TWD) ===");
    let ticker = client.get_ticker("ETH_TWD").await?;
    println!("Last: {}", ticker.last_price);
    println!("24h high: {:?}", ticker.high24hr);
    println!("24h low: {:?}", ticker.low24hr);
    println!("24h volume: {:?}", ticker.volume24hr);

    println!("\n=== Recent Trades (ETH/TWD) ===");
    let trades = client.get_trades("eth_twd").await?;
    for trade in trades.iter().take(5) {
        let side = if trade.is_buyer { "buy" } else { "sell" };
        println!("{} {} @ {} ({})", side, trade.amount, trade.price, trade.timestamp);
    }

    println!("\n=== Order Book (ETH/TWD, top 5) ===");
    let book = client
        .get_order_book(&OrderBookRequest::new("eth_twd").limit(5))
        .await?;
    println!("Best ask: {:?}", book.best_ask());
    println!("Best bid: {:?}", book.best_bid());
    if let (Some(ask), Some(bid)) = (book.best_ask(), book.best_bid()) {
        println!("Spread: {}", ask - bid);
    }

    Ok(())
}

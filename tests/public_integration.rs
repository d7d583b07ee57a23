use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use bitopro_api_client::error::BitoProError;
use bitopro_api_client::rest::BitoProRestClient;
use bitopro_api_client::rest::public::OrderBookRequest;
use rust_decimal::Decimal;

fn build_public_client(server: &MockServer) -> BitoProRestClient {
    BitoProRestClient::builder()
        .base_url(server.uri())
        .max_retries(0)
        .build()
}

#[tokio::test]
async fn test_get_currencies() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "data": [{
            "currency": "btc",
            "withdrawFee": "0.00050000",
            "minWithdraw": "0.00100000",
            "maxWithdraw": "100.00000000",
            "maxDailyWithdraw": "200.00000000",
            "withdraw": true,
            "deposit": true,
            "depositConfirmation": "2"
        }]
    });

    Mock::given(method("GET"))
        .and(path("/provisioning/currencies"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let currencies = client.get_currencies().await.unwrap();
    assert_eq!(currencies.len(), 1);
    assert_eq!(currencies[0].currency, "btc");
    assert_eq!(currencies[0].withdraw_fee, Some("0.0005".parse().unwrap()));
    assert_eq!(currencies[0].deposit_confirmation.as_deref(), Some("2"));
}

#[tokio::test]
async fn test_get_trading_pairs() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "data": [{
            "pair": "eth_usdt",
            "base": "eth",
            "quote": "usdt",
            "basePrecision": "8",
            "quotePrecision": "2",
            "minLimitBaseAmount": "0.005",
            "maxLimitBaseAmount": "500",
            "minMarketBuyQuoteAmount": "10",
            "orderOpenLimit": "200",
            "maintain": false,
            "orderBookQuotePrecision": "2",
            "orderBookQuoteScaleLevel": "5",
            "amountPrecision": "4"
        }]
    });

    Mock::given(method("GET"))
        .and(path("/provisioning/trading-pairs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let pairs = client.get_trading_pairs().await.unwrap();
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].pair, "eth_usdt");
    assert_eq!(pairs[0].quote, "usdt");
    assert!(!pairs[0].maintain);
}

#[tokio::test]
async fn test_get_ticker_lowercases_pair() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "data": {
            "pair": "eth_usdt",
            "lastPrice": "2450.12",
            "isBuyer": false,
            "priceChange24hr": "1.5",
            "volume24hr": "320.5",
            "high24hr": "2500",
            "low24hr": "2400"
        }
    });

    Mock::given(method("GET"))
        .and(path("/tickers/eth_usdt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let ticker = client.get_ticker("ETH_USDT").await.unwrap();
    assert_eq!(ticker.pair, "eth_usdt");
    assert_eq!(ticker.last_price, "2450.12".parse::<Decimal>().unwrap());
    assert_eq!(ticker.high24hr, Some(Decimal::from(2500)));
}

#[tokio::test]
async fn test_get_all_tickers() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "data": [
            {"pair": "btc_twd", "lastPrice": "3000000", "isBuyer": true},
            {"pair": "eth_twd", "lastPrice": "80000", "isBuyer": false}
        ]
    });

    Mock::given(method("GET"))
        .and(path("/tickers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let tickers = client.get_tickers().await.unwrap();
    assert_eq!(tickers.len(), 2);
    assert!(tickers.iter().all(|t| t.pair.ends_with("_twd")));
}

#[tokio::test]
async fn test_get_trades() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "data": [
            {"timestamp": 1_700_000_000, "price": "80000", "amount": "0.25", "isBuyer": true},
            {"timestamp": 1_699_999_990, "price": "79990", "amount": "1", "isBuyer": false}
        ]
    });

    Mock::given(method("GET"))
        .and(path("/trades/eth_twd"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let trades = client.get_trades("ETH_TWD").await.unwrap();
    assert_eq!(trades.len(), 2);
    assert_eq!(trades[0].timestamp, 1_700_000_000);
    assert_eq!(trades[0].amount, "0.25".parse::<Decimal>().unwrap());
    assert!(!trades[1].is_buyer);
}

#[tokio::test]
async fn test_get_order_book_with_limit() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "asks": [{"price": "3000100", "amount": "0.1", "count": 1, "total": "0.1"}],
        "bids": [{"price": "2999900", "amount": "0.2", "count": 2, "total": "0.2"}]
    });

    Mock::given(method("GET"))
        .and(path("/order-book/btc_twd"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let book = client
        .get_order_book(&OrderBookRequest::new("btc_twd").limit(5))
        .await
        .unwrap();
    assert_eq!(book.best_ask(), Some(Decimal::from(3_000_100)));
    assert_eq!(book.bids[0].count, 2);
}

#[tokio::test]
async fn test_public_request_sends_no_auth_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/provisioning/currencies"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": []})))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    assert!(client.get_currencies().await.unwrap().is_empty());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("x-bitopro-apikey").is_none());
    assert!(requests[0].headers.get("x-bitopro-signature").is_none());
}

#[tokio::test]
async fn test_api_error_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tickers/nope_twd"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(serde_json::json!({"error": "pair not found"})),
        )
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    match client.get_ticker("nope_twd").await {
        Err(BitoProError::Api(error)) => {
            assert!(error.is_not_found());
            assert_eq!(error.message, "pair not found");
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_rate_limit_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/provisioning/trading-pairs"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "2"))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let result = client.get_trading_pairs().await;
    assert!(matches!(
        result,
        Err(BitoProError::RateLimitExceeded {
            retry_after_ms: Some(2000)
        })
    ));
}

#[tokio::test]
async fn test_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/provisioning/currencies"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let result = client.get_currencies().await;
    assert!(matches!(result, Err(BitoProError::InvalidResponse(_))));
}

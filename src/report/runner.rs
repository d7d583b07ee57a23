//! Sequential report runner.

use std::cmp::Reverse;
use std::collections::{BTreeSet, HashSet};
use std::path::PathBuf;

use serde::Serialize;
use tracing::{info, instrument};

use crate::error::BitoProError;
use crate::report::BalanceSummary;
use crate::rest::BitoProClient;
use crate::rest::private::{
    AllOrdersRequest, Balance, DepositHistory, DepositHistoryRequest, Order, OrderStatusKind,
};
use crate::rest::public::{Currency, OrderBook, OrderBookRequest, Ticker, Trade, TradingPair};

/// Default pair for pair-scoped reports.
pub const DEFAULT_PAIR: &str = "eth_usdt";
/// Default currency for the deposit history report.
pub const DEFAULT_DEPOSIT_CURRENCY: &str = "twd";
/// Number of orders requested by the orders report.
pub const ORDERS_LIMIT: u32 = 1000;

/// A query the runner can perform.
///
/// Variants are declared in execution order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum ReportKind {
    /// Supported currencies.
    Currencies,
    /// Listed trading pairs.
    TradingPairs,
    /// Ticker of the configured pair.
    Tickers,
    /// Recent trades of the configured pair.
    Trades,
    /// Order book of the configured pair.
    OrderBook,
    /// Account balances (authenticated).
    Balance,
    /// Deposit history of the configured currency (authenticated).
    DepositHistory,
    /// Orders of the configured pair (authenticated).
    Orders,
}

impl ReportKind {
    /// Whether the report needs API credentials.
    pub fn is_private(self) -> bool {
        matches!(self, Self::Balance | Self::DepositHistory | Self::Orders)
    }
}

/// What the runner should query and where to write the balance summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Reports to run. Run in [`ReportKind`] order, each at most once.
    pub reports: BTreeSet<ReportKind>,
    /// Pair used by the ticker, trades, order book and orders reports.
    pub pair: String,
    /// Currency used by the deposit history report.
    pub deposit_currency: String,
    /// Where to write the balance summary. Implies the balance report.
    pub balance_output: Option<PathBuf>,
}

impl RunnerConfig {
    /// Create a configuration running `reports` with default pair and currency.
    pub fn new(reports: impl IntoIterator<Item = ReportKind>) -> Self {
        Self {
            reports: reports.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Set the pair for pair-scoped reports.
    pub fn pair(mut self, pair: impl Into<String>) -> Self {
        self.pair = pair.into();
        self
    }

    /// Set the currency for the deposit history report.
    pub fn deposit_currency(mut self, currency: impl Into<String>) -> Self {
        self.deposit_currency = currency.into();
        self
    }

    /// Write the balance summary to `path` once balances are fetched.
    pub fn balance_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.balance_output = Some(path.into());
        self
    }

    /// The reports that will actually run, in order.
    pub fn planned_reports(&self) -> Vec<ReportKind> {
        let mut reports = self.reports.clone();
        if self.balance_output.is_some() {
            reports.insert(ReportKind::Balance);
        }
        reports.into_iter().collect()
    }
}

impl Default for RunnerConfig {
    /// Currencies and trading pairs, no balance file.
    fn default() -> Self {
        Self {
            reports: [ReportKind::Currencies, ReportKind::TradingPairs].into(),
            pair: DEFAULT_PAIR.to_string(),
            deposit_currency: DEFAULT_DEPOSIT_CURRENCY.to_string(),
            balance_output: None,
        }
    }
}

/// Results of a run. Only the reports that ran are present.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunReport {
    /// Supported currencies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currencies: Option<Vec<Currency>>,
    /// Listed trading pairs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trading_pairs: Option<Vec<TradingPair>>,
    /// Ticker of the configured pair.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticker: Option<Ticker>,
    /// Recent trades of the configured pair.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trades: Option<Vec<Trade>>,
    /// Order book of the configured pair.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_book: Option<OrderBook>,
    /// Account balances.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balances: Option<Vec<Balance>>,
    /// Balances with something available, present whenever balances were fetched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance_summary: Option<BalanceSummary>,
    /// Deposit history of the configured currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deposit_history: Option<DepositHistory>,
    /// Orders of the configured pair, newest first.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orders: Option<Vec<Order>>,
}

/// Runs the configured reports against one client, one after another.
#[derive(Debug)]
pub struct Runner<C> {
    client: C,
    config: RunnerConfig,
}

impl<C: BitoProClient> Runner<C> {
    /// Bind a runner to a client for its whole lifetime.
    pub fn new(client: C, config: RunnerConfig) -> Self {
        Self { client, config }
    }

    /// The client this runner queries.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// The runner configuration.
    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Run every planned report in order.
    ///
    /// The first error aborts the run. The balance file is written as soon as
    /// the balance report succeeds, so it survives a later failure.
    pub async fn run(&self) -> Result<RunReport, BitoProError> {
        let mut report = RunReport::default();

        for kind in self.config.planned_reports() {
            self.run_one(kind, &mut report).await?;
        }

        Ok(report)
    }

    #[instrument(skip(self, report), fields(pair = %self.config.pair))]
    async fn run_one(&self, kind: ReportKind, report: &mut RunReport) -> Result<(), BitoProError> {
        let pair = self.config.pair.as_str();

        match kind {
            ReportKind::Currencies => {
                let currencies = self.client.get_currencies().await?;
                info!(count = currencies.len(), "fetched currencies");
                report.currencies = Some(currencies);
            }
            ReportKind::TradingPairs => {
                let pairs = self.client.get_trading_pairs().await?;
                info!(count = pairs.len(), "fetched trading pairs");
                report.trading_pairs = Some(pairs);
            }
            ReportKind::Tickers => {
                let ticker = self.client.get_ticker(pair).await?;
                info!(last_price = %ticker.last_price, "fetched ticker");
                report.ticker = Some(ticker);
            }
            ReportKind::Trades => {
                let trades = self.client.get_trades(pair).await?;
                info!(count = trades.len(), "fetched trades");
                report.trades = Some(trades);
            }
            ReportKind::OrderBook => {
                let book = self.client.get_order_book(&OrderBookRequest::new(pair)).await?;
                info!(asks = book.asks.len(), bids = book.bids.len(), "fetched order book");
                report.order_book = Some(book);
            }
            ReportKind::Balance => {
                let balances = self.client.get_account_balance().await?;
                let summary = BalanceSummary::from_balances(&balances);
                info!(
                    currencies = balances.len(),
                    available = summary.balance.len(),
                    "fetched account balance"
                );
                if let Some(path) = &self.config.balance_output {
                    summary.write_to(path)?;
                    info!(path = %path.display(), "balance summary written");
                }
                report.balances = Some(balances);
                report.balance_summary = Some(summary);
            }
            ReportKind::DepositHistory => {
                let request = DepositHistoryRequest::new(self.config.deposit_currency.as_str());
                let history = self.client.get_deposit_history(&request).await?;
                info!(
                    currency = %self.config.deposit_currency,
                    count = history.data.len(),
                    "fetched deposit history"
                );
                report.deposit_history = Some(history);
            }
            ReportKind::Orders => {
                let request = AllOrdersRequest::new(pair)
                    .status_kind(OrderStatusKind::All)
                    .limit(ORDERS_LIMIT);
                let mut orders = self.client.get_all_orders(&request).await?;
                let mut seen = HashSet::new();
                orders.retain(|order| seen.insert(order.id.clone()));
                orders.sort_by_key(|order| Reverse(order.created_timestamp.unwrap_or_default()));
                info!(count = orders.len(), "fetched orders");
                report.orders = Some(orders);
            }
        }

        Ok(())
    }
}

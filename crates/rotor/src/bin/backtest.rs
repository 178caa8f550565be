//! Sector-rotation backtest CLI.
//!
//! Fetches adjusted closes for the SPDR sector universe from Yahoo
//! Finance, runs the low-volatility rotation strategy, and prints the
//! resulting allocation and portfolio summary.
//!
//! Usage: `cargo run --bin backtest --features cli -- [--lookback N] [--top-k K] [--years N]`

use std::{collections::BTreeMap, env};

use ndarray::Array2;
use rotor::{
    engine::{EngineConfig, WeightEngine},
    primitives::{Date, PriceTable, Symbol},
};
use time::{Duration, OffsetDateTime};
use yahoo_finance_api as yahoo;

/// Benchmark used for the trend filter; never held directly.
const BENCHMARK: &str = "SPY";

/// SPDR sector funds, the investable universe.
const SECTORS: &[&str] =
    &["XLB", "XLC", "XLE", "XLF", "XLI", "XLK", "XLP", "XLRE", "XLU", "XLV", "XLY"];

/// Default history to fetch.
const DEFAULT_YEARS: i64 = 6;

/// Trading days per year, for annualization.
const TRADING_DAYS_PER_YEAR: f64 = 252.0;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    let lookback = parse_flag(&args, "--lookback").unwrap_or(252);
    let top_k = parse_flag(&args, "--top-k").unwrap_or(2);
    let years = parse_flag(&args, "--years").unwrap_or(DEFAULT_YEARS as usize) as i64;

    println!("Fetching {} years of history for {} assets...\n", years, SECTORS.len() + 1);
    let prices = fetch_price_table(years).await?;
    println!(
        "Price table: {} trading days x {} assets ({} to {})",
        prices.len(),
        prices.n_assets(),
        prices.dates()[0],
        prices.dates()[prices.len() - 1],
    );

    let config = EngineConfig { lookback, top_k, gamma: 0.0 };
    let mut engine = WeightEngine::new(prices, BENCHMARK, config)?;
    let results = engine.results()?;

    println!("\n=== Final Allocations ===\n");
    println!("{}", results.weights_dataframe()?.tail(Some(5)));

    println!("\n=== Portfolio Summary ===\n");
    print_summary(results.portfolio.values().iter().copied());

    Ok(())
}

/// Parse `--flag value` from the argument list.
fn parse_flag(args: &[String], flag: &str) -> Option<usize> {
    args.iter().position(|a| a == flag).and_then(|i| args.get(i + 1)).and_then(|v| v.parse().ok())
}

/// Fetch adjusted closes for the full universe and align them on the union
/// of observed trading days. Days where an asset has no quote stay NaN;
/// the engine treats those conservatively.
async fn fetch_price_table(years: i64) -> Result<PriceTable, Box<dyn std::error::Error>> {
    let provider = yahoo::YahooConnector::new()?;
    let end = OffsetDateTime::now_utc();
    let start = end - Duration::days(years * 365);

    let universe: Vec<&str> = std::iter::once(BENCHMARK).chain(SECTORS.iter().copied()).collect();
    let n_assets = universe.len();

    let mut rows: BTreeMap<Date, Vec<f64>> = BTreeMap::new();
    for (j, symbol) in universe.iter().enumerate() {
        let response = provider.get_quote_history(symbol, start, end).await?;
        let quotes = response.quotes()?;
        println!("  {} - {} quotes", symbol, quotes.len());

        for quote in &quotes {
            let date = chrono::DateTime::from_timestamp(quote.timestamp as i64, 0)
                .ok_or("quote timestamp out of range")?
                .date_naive();
            rows.entry(date).or_insert_with(|| vec![f64::NAN; n_assets])[j] = quote.adjclose;
        }
    }

    let dates: Vec<Date> = rows.keys().copied().collect();
    let mut values = Array2::from_elem((dates.len(), n_assets), f64::NAN);
    for (i, prices) in rows.values().enumerate() {
        for (j, &price) in prices.iter().enumerate() {
            values[[i, j]] = price;
        }
    }

    let symbols: Vec<Symbol> = universe.iter().map(|&s| Symbol::new(s)).collect();
    Ok(PriceTable::new(dates, symbols, values)?)
}

/// Print cumulative and annualized performance of the daily return series.
fn print_summary(returns: impl Iterator<Item = f64>) {
    let returns: Vec<f64> = returns.collect();
    let n = returns.len();
    if n < 2 {
        println!("not enough data");
        return;
    }

    let cumulative: f64 = returns.iter().map(|r| 1.0 + r).product::<f64>() - 1.0;
    let mean = returns.iter().sum::<f64>() / n as f64;
    let var =
        returns.iter().map(|r| (r - mean) * (r - mean)).sum::<f64>() / (n - 1) as f64;
    let ann_return = mean * TRADING_DAYS_PER_YEAR;
    let ann_vol = var.sqrt() * TRADING_DAYS_PER_YEAR.sqrt();
    let sharpe = if ann_vol > 0.0 { ann_return / ann_vol } else { 0.0 };

    let mut peak = 1.0_f64;
    let mut equity = 1.0_f64;
    let mut max_drawdown = 0.0_f64;
    for r in &returns {
        equity *= 1.0 + r;
        peak = peak.max(equity);
        max_drawdown = max_drawdown.max(1.0 - equity / peak);
    }

    println!("{:<20} {:>10.2}%", "Cumulative return", cumulative * 100.0);
    println!("{:<20} {:>10.2}%", "Annualized return", ann_return * 100.0);
    println!("{:<20} {:>10.2}%", "Annualized vol", ann_vol * 100.0);
    println!("{:<20} {:>10.2}", "Sharpe ratio", sharpe);
    println!("{:<20} {:>10.2}%", "Max drawdown", max_drawdown * 100.0);
}

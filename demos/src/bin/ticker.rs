//! Demo 1: Public Ticker
//!
//! Showcases: unauthenticated market data, response headers
//!
//! Run: cargo run --bin ticker -- KRW BTC

use coinone_rest::CoinoneRestClient;
use colored::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let quote = args.next().unwrap_or_else(|| "KRW".to_string());
    let target = args.next().unwrap_or_else(|| "BTC".to_string());

    println!("{}", "═".repeat(60).cyan());
    println!("{}", format!("  COINONE TICKER {}/{}", target, quote).cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let client = CoinoneRestClient::new()?;
    let response = client.get_ticker(&quote, &target).await?;

    match response.body["tickers"].get(0) {
        Some(ticker) => {
            for field in ["last", "high", "low", "quote_volume", "target_volume"] {
                let value = ticker.get(field).map(display_value).unwrap_or_else(|| "-".into());
                println!("  {:<14} {}", field.white().bold(), value);
            }
        }
        None => println!("{}", serde_json::to_string_pretty(&response.body)?),
    }

    if let Some(date) = response.header("date") {
        println!("\n  {} {}", "server date:".dimmed(), date);
    }

    Ok(())
}

/// Strings print bare, everything else as JSON
fn display_value(value: &serde_json::Value) -> String {
    value.as_str().map(str::to_owned).unwrap_or_else(|| value.to_string())
}

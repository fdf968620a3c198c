//! Demo 2: Signed Balance Query
//!
//! Showcases: private v2.1 signing, rate-limit handling
//!
//! Run: COINONE_ACCESS_TOKEN=... COINONE_SECRET_KEY=... cargo run --bin balance

use coinone_rest::{CoinoneRestClient, Credentials, RestError};
use colored::*;
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let credentials = Credentials::from_env()?;
    let client = CoinoneRestClient::with_credentials(credentials)?;

    let response = match client.get_balance_all().await {
        Ok(response) => response,
        Err(RestError::RateLimited { message, .. }) => {
            eprintln!("{} {} (back off and retry later)", "rate limited:".yellow().bold(), message);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    println!("  {:<8} {:>20} {:>20}", "CURRENCY".white().bold(), "AVAILABLE".white().bold(), "LIMIT".white().bold());
    println!("  {}", "─".repeat(50));

    let balances = response.body["balances"].as_array().cloned().unwrap_or_default();
    for balance in balances {
        let field = |name: &str| -> Decimal {
            balance[name].as_str().and_then(|s| s.parse().ok()).unwrap_or_default()
        };
        let (available, limit) = (field("available"), field("limit"));
        if available.is_zero() && limit.is_zero() {
            continue;
        }
        let currency = balance["currency"].as_str().unwrap_or("?");
        println!("  {:<8} {:>20} {:>20}", currency.cyan(), available, limit);
    }

    Ok(())
}

//! Types for Coinone REST API requests

use crate::error::{RestError, RestResult};
use coinone_auth::RequestParams;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Market Data Types
// ============================================================================

/// Candle interval for the chart endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartInterval {
    #[serde(rename = "1m")]
    OneMinute,
    #[serde(rename = "3m")]
    ThreeMinutes,
    #[serde(rename = "5m")]
    FiveMinutes,
    #[serde(rename = "10m")]
    TenMinutes,
    #[serde(rename = "15m")]
    FifteenMinutes,
    #[serde(rename = "30m")]
    ThirtyMinutes,
    #[serde(rename = "1h")]
    OneHour,
    #[serde(rename = "2h")]
    TwoHours,
    #[serde(rename = "4h")]
    FourHours,
    #[serde(rename = "6h")]
    SixHours,
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "1w")]
    OneWeek,
    #[serde(rename = "1mon")]
    OneMonth,
}

impl ChartInterval {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneMinute => "1m",
            Self::ThreeMinutes => "3m",
            Self::FiveMinutes => "5m",
            Self::TenMinutes => "10m",
            Self::FifteenMinutes => "15m",
            Self::ThirtyMinutes => "30m",
            Self::OneHour => "1h",
            Self::TwoHours => "2h",
            Self::FourHours => "4h",
            Self::SixHours => "6h",
            Self::OneDay => "1d",
            Self::OneWeek => "1w",
            Self::OneMonth => "1mon",
        }
    }
}

impl fmt::Display for ChartInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Trading Types
// ============================================================================

/// Order side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "BUY"),
            Self::Sell => write!(f, "SELL"),
        }
    }
}

/// Order type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    Limit,
    Market,
    StopLimit,
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Limit => write!(f, "LIMIT"),
            Self::Market => write!(f, "MARKET"),
            Self::StopLimit => write!(f, "STOP_LIMIT"),
        }
    }
}

/// Order request for `POST /v2.1/order`
///
/// Optional fields are only sent when set.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRequest {
    /// Quote currency (e.g., "KRW")
    pub quote_currency: String,
    /// Target currency (e.g., "BTC")
    pub target_currency: String,
    pub side: OrderSide,
    pub order_type: OrderType,
    /// Limit price
    pub price: Option<Decimal>,
    /// Quantity in the target currency
    pub qty: Option<Decimal>,
    /// Amount in the quote currency (market buys)
    pub amount: Option<Decimal>,
    pub post_only: Option<bool>,
    pub limit_price: Option<Decimal>,
    pub trigger_price: Option<Decimal>,
    /// Client-assigned order identifier
    pub user_order_id: Option<String>,
}

impl OrderRequest {
    fn base(
        quote_currency: impl Into<String>,
        target_currency: impl Into<String>,
        side: OrderSide,
        order_type: OrderType,
    ) -> Self {
        Self {
            quote_currency: quote_currency.into(),
            target_currency: target_currency.into(),
            side,
            order_type,
            price: None,
            qty: None,
            amount: None,
            post_only: None,
            limit_price: None,
            trigger_price: None,
            user_order_id: None,
        }
    }

    /// Create a limit order
    pub fn limit(
        quote_currency: impl Into<String>,
        target_currency: impl Into<String>,
        side: OrderSide,
        price: Decimal,
        qty: Decimal,
    ) -> Self {
        let mut order = Self::base(quote_currency, target_currency, side, OrderType::Limit);
        order.price = Some(price);
        order.qty = Some(qty);
        order
    }

    /// Create a market buy spending `amount` of the quote currency
    pub fn market_buy(
        quote_currency: impl Into<String>,
        target_currency: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        let mut order = Self::base(quote_currency, target_currency, OrderSide::Buy, OrderType::Market);
        order.amount = Some(amount);
        order
    }

    /// Create a market sell of `qty` target currency
    pub fn market_sell(
        quote_currency: impl Into<String>,
        target_currency: impl Into<String>,
        qty: Decimal,
    ) -> Self {
        let mut order = Self::base(quote_currency, target_currency, OrderSide::Sell, OrderType::Market);
        order.qty = Some(qty);
        order
    }

    /// Create a stop-limit order
    pub fn stop_limit(
        quote_currency: impl Into<String>,
        target_currency: impl Into<String>,
        side: OrderSide,
        price: Decimal,
        qty: Decimal,
        trigger_price: Decimal,
    ) -> Self {
        let mut order = Self::base(quote_currency, target_currency, side, OrderType::StopLimit);
        order.price = Some(price);
        order.qty = Some(qty);
        order.trigger_price = Some(trigger_price);
        order
    }

    pub fn post_only(mut self, post_only: bool) -> Self {
        self.post_only = Some(post_only);
        self
    }

    pub fn limit_price(mut self, limit_price: Decimal) -> Self {
        self.limit_price = Some(limit_price);
        self
    }

    pub fn user_order_id(mut self, id: impl Into<String>) -> Self {
        self.user_order_id = Some(id.into());
        self
    }

    /// Check required fields and value ranges
    pub fn validate(&self) -> RestResult<()> {
        if self.quote_currency.is_empty() || self.target_currency.is_empty() {
            return Err(RestError::InvalidParameter(
                "quote_currency and target_currency are required".into(),
            ));
        }

        let decimals = [
            ("price", self.price),
            ("qty", self.qty),
            ("amount", self.amount),
            ("limit_price", self.limit_price),
            ("trigger_price", self.trigger_price),
        ];
        for (name, value) in decimals {
            if let Some(value) = value {
                if value <= Decimal::ZERO {
                    return Err(RestError::InvalidParameter(format!("{} must be positive", name)));
                }
            }
        }

        match self.order_type {
            OrderType::Limit if self.price.is_none() || self.qty.is_none() => Err(
                RestError::InvalidParameter("LIMIT orders require price and qty".into()),
            ),
            OrderType::Market if self.amount.is_none() && self.qty.is_none() => Err(
                RestError::InvalidParameter("MARKET orders require amount or qty".into()),
            ),
            OrderType::StopLimit
                if self.price.is_none() || self.qty.is_none() || self.trigger_price.is_none() =>
            {
                Err(RestError::InvalidParameter(
                    "STOP_LIMIT orders require price, qty and trigger_price".into(),
                ))
            }
            _ => Ok(()),
        }
    }

    /// Ordered request parameters
    pub fn to_params(&self) -> RequestParams {
        RequestParams::new()
            .with("quote_currency", self.quote_currency.as_str())
            .with("target_currency", self.target_currency.as_str())
            .with("side", self.side.to_string())
            .with("type", self.order_type.to_string())
            .with_decimal_opt("price", self.price)
            .with_decimal_opt("qty", self.qty)
            .with_decimal_opt("amount", self.amount)
            .with_opt("post_only", self.post_only)
            .with_decimal_opt("limit_price", self.limit_price)
            .with_decimal_opt("trigger_price", self.trigger_price)
            .with_opt("user_order_id", self.user_order_id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::Value;

    #[test]
    fn test_limit_order_params_order() {
        let order = OrderRequest::limit("KRW", "BTC", OrderSide::Buy, dec!(50000000), dec!(0.001))
            .post_only(true)
            .user_order_id("abc-1");
        let params = order.to_params();

        assert_eq!(
            params.keys().collect::<Vec<_>>(),
            vec!["quote_currency", "target_currency", "side", "type", "price", "qty", "post_only", "user_order_id"]
        );
        assert_eq!(params.get("side"), Some(&Value::from("BUY")));
        assert_eq!(params.get("type"), Some(&Value::from("LIMIT")));
        assert_eq!(params.get("price"), Some(&Value::from("50000000")));
        assert_eq!(params.get("qty"), Some(&Value::from("0.001")));
        assert_eq!(params.get("post_only"), Some(&Value::Bool(true)));
    }

    #[test]
    fn test_market_buy_uses_amount() {
        let order = OrderRequest::market_buy("KRW", "ETH", dec!(10000));
        let params = order.to_params();

        assert_eq!(params.get("amount"), Some(&Value::from("10000")));
        assert!(params.get("qty").is_none());
        assert!(order.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let mut order = OrderRequest::limit("KRW", "BTC", OrderSide::Sell, dec!(1), dec!(1));
        assert!(order.validate().is_ok());

        order.qty = None;
        assert!(matches!(order.validate(), Err(RestError::InvalidParameter(_))));

        let negative = OrderRequest::market_sell("KRW", "BTC", dec!(-1));
        assert!(negative.validate().is_err());

        let stop = OrderRequest::stop_limit("KRW", "BTC", OrderSide::Sell, dec!(100), dec!(1), dec!(101));
        assert!(stop.validate().is_ok());
        assert_eq!(stop.to_params().get("type"), Some(&Value::from("STOP_LIMIT")));

        let empty = OrderRequest::market_buy("", "BTC", dec!(1));
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(serde_json::to_string(&OrderType::StopLimit).unwrap(), "\"STOP_LIMIT\"");
        assert_eq!(serde_json::to_string(&OrderSide::Sell).unwrap(), "\"SELL\"");
        assert_eq!(serde_json::to_string(&ChartInterval::OneMonth).unwrap(), "\"1mon\"");
        assert_eq!(ChartInterval::FifteenMinutes.to_string(), "15m");
    }
}

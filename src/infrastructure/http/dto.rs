use crate::domain::errors::{AppError, NetworkResult};
use crate::domain::market_data::{Asset, Price, PriceHistory, Timestamp};
use serde::Deserialize;
use std::collections::HashMap;

/// `{ "usd": 64000.12 }`
#[derive(Debug, Deserialize)]
pub struct UsdQuoteDto {
    pub usd: f64,
}

/// `/simple/price` body: `{ "<coin-id>": { "usd": <number> } }`
pub type SimplePriceDto = HashMap<String, UsdQuoteDto>;

/// `/coins/<id>/market_chart` body. Only `prices` is used.
#[derive(Debug, Deserialize)]
pub struct MarketChartDto {
    pub prices: Vec<(f64, f64)>,
}

pub fn parse_spot_price(body: &str, asset: Asset) -> NetworkResult<Price> {
    let quotes: SimplePriceDto = serde_json::from_str(body)?;
    let quote = quotes.get(asset.api_id()).ok_or_else(|| {
        AppError::ParseError(format!("response has no `{}.usd` field", asset.api_id()))
    })?;
    validated(Price::new(quote.usd))
}

pub fn parse_market_chart(body: &str) -> NetworkResult<PriceHistory> {
    let chart: MarketChartDto = serde_json::from_str(body)?;
    let samples = chart
        .prices
        .into_iter()
        .map(|(ts, price)| {
            if !ts.is_finite() {
                return Err(AppError::ParseError(format!("invalid timestamp {}", ts)));
            }
            Ok((Timestamp::from_millis(ts as i64), validated(Price::new(price))?))
        })
        .collect::<NetworkResult<Vec<_>>>()?;
    PriceHistory::from_samples(samples)
}

fn validated(price: Price) -> NetworkResult<Price> {
    if price.is_valid() {
        Ok(price)
    } else {
        Err(AppError::ValidationError(format!("invalid price {}", price.value())))
    }
}

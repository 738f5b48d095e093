use crate::domain::errors::NetworkResult;
use crate::domain::market_data::{Asset, Price, PriceHistory};

/// Source of spot prices and daily history.
///
/// Implementations are polled on the single browser thread, so the futures
/// are not required to be `Send`.
#[allow(async_fn_in_trait)]
pub trait MarketDataRepository {
    /// Current USD price of `asset`.
    async fn fetch_spot_price(&self, asset: Asset) -> NetworkResult<Price>;

    /// Trailing daily USD history of `asset`.
    async fn fetch_price_history(&self, asset: Asset) -> NetworkResult<PriceHistory>;
}

use super::dto::{parse_market_chart, parse_spot_price};
use crate::config::PopupConfig;
use crate::domain::errors::{AppError, NetworkResult};
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::market_data::{Asset, MarketDataRepository, Price, PriceHistory};
use gloo_net::http::Request;

/// REST client for the CoinGecko price and market-chart endpoints.
///
/// One request per call: no caching, no retries.
#[derive(Debug, Clone)]
pub struct CoinGeckoRestClient {
    config: PopupConfig,
}

impl Default for CoinGeckoRestClient {
    fn default() -> Self {
        Self::new(PopupConfig::default())
    }
}

impl CoinGeckoRestClient {
    pub fn new(config: PopupConfig) -> Self {
        Self { config }
    }

    pub fn spot_price_url(&self, asset: Asset) -> String {
        format!(
            "{}/simple/price?ids={}&vs_currencies={}",
            self.config.api_base_url,
            asset.api_id(),
            self.config.vs_currency
        )
    }

    pub fn market_chart_url(&self, asset: Asset) -> String {
        format!(
            "{}/coins/{}/market_chart?vs_currency={}&days={}&interval={}",
            self.config.api_base_url,
            asset.api_id(),
            self.config.vs_currency,
            self.config.history_days,
            self.config.history_interval
        )
    }

    async fn get_body(&self, url: &str) -> NetworkResult<String> {
        get_logger().debug(LogComponent::Infrastructure("CoinGecko"), &format!("GET {url}"));

        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| AppError::NetworkError(format!("Failed to send request: {e}")))?;

        if !response.ok() {
            return Err(AppError::NetworkError(format!(
                "HTTP error: {} {}",
                response.status(),
                response.status_text()
            )));
        }

        response
            .text()
            .await
            .map_err(|e| AppError::NetworkError(format!("Failed to read response body: {e}")))
    }
}

impl MarketDataRepository for CoinGeckoRestClient {
    async fn fetch_spot_price(&self, asset: Asset) -> NetworkResult<Price> {
        let body = self.get_body(&self.spot_price_url(asset)).await?;
        let price = parse_spot_price(&body, asset)?;
        get_logger().debug(
            LogComponent::Infrastructure("CoinGecko"),
            &format!("{} spot price {}", asset, price.value()),
        );
        Ok(price)
    }

    async fn fetch_price_history(&self, asset: Asset) -> NetworkResult<PriceHistory> {
        let body = self.get_body(&self.market_chart_url(asset)).await?;
        let history = parse_market_chart(&body)?;
        get_logger().debug(
            LogComponent::Infrastructure("CoinGecko"),
            &format!("{} history: {} daily points", asset, history.len()),
        );
        Ok(history)
    }
}

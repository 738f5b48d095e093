use crate::domain::chart::LineColor;
use crate::domain::market_data::Asset;

pub const COINGECKO_API_BASE: &str = "https://api.coingecko.com/api/v3";

/// Static popup settings. `Default` holds the production values.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupConfig {
    pub api_base_url: String,
    pub vs_currency: String,
    pub history_days: u32,
    pub history_interval: String,
    /// Canvas size used when the element has no layout size yet.
    pub fallback_width: u32,
    pub fallback_height: u32,
    pub bitcoin_color: String,
    pub ethereum_color: String,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            api_base_url: COINGECKO_API_BASE.to_string(),
            vs_currency: "usd".to_string(),
            history_days: 30,
            history_interval: "daily".to_string(),
            fallback_width: 320,
            fallback_height: 200,
            bitcoin_color: "blue".to_string(),
            ethereum_color: "purple".to_string(),
        }
    }
}

impl PopupConfig {
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_canvas_size(mut self, width: u32, height: u32) -> Self {
        self.fallback_width = width;
        self.fallback_height = height;
        self
    }

    pub fn line_color(&self, asset: Asset) -> LineColor {
        match asset {
            Asset::Bitcoin => LineColor::new(self.bitcoin_color.as_str()),
            Asset::Ethereum => LineColor::new(self.ethereum_color.as_str()),
        }
    }
}

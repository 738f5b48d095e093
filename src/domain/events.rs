use crate::domain::market_data::Asset;
use std::fmt::Debug;

/// Base trait for all domain events
pub trait DomainEvent: Debug + Clone {
    fn event_type(&self) -> &'static str;

    /// `key=value` pairs attached to the log line.
    fn metadata(&self) -> String;
}

/// Events emitted while the popup loads and switches assets
#[derive(Debug, Clone, PartialEq)]
pub enum PopupEvent {
    AssetSelected { asset: Asset, generation: u64 },
    PriceDisplayed { asset: Asset, price: f64 },
    HistoryDisplayed { asset: Asset, points: usize },
    StaleResponseDiscarded { asset: Asset, generation: u64, current_generation: u64 },
    FetchFailed { asset: Asset, what: &'static str, reason: String },
}

impl DomainEvent for PopupEvent {
    fn event_type(&self) -> &'static str {
        match self {
            PopupEvent::AssetSelected { .. } => "AssetSelected",
            PopupEvent::PriceDisplayed { .. } => "PriceDisplayed",
            PopupEvent::HistoryDisplayed { .. } => "HistoryDisplayed",
            PopupEvent::StaleResponseDiscarded { .. } => "StaleResponseDiscarded",
            PopupEvent::FetchFailed { .. } => "FetchFailed",
        }
    }

    fn metadata(&self) -> String {
        match self {
            PopupEvent::AssetSelected { asset, generation } => {
                format!("asset={} generation={}", asset, generation)
            }
            PopupEvent::PriceDisplayed { asset, price } => format!("asset={} price={:.2}", asset, price),
            PopupEvent::HistoryDisplayed { asset, points } => format!("asset={} points={}", asset, points),
            PopupEvent::StaleResponseDiscarded { asset, generation, current_generation } => format!(
                "asset={} generation={} current_generation={}",
                asset, generation, current_generation
            ),
            PopupEvent::FetchFailed { asset, what, reason } => {
                format!("asset={} what={} reason={}", asset, what, reason)
            }
        }
    }
}

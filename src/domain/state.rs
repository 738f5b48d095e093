use crate::domain::market_data::{Asset, Price};

/// Identifies one in-flight fetch: the asset it was issued for and the
/// selection generation current at issue time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken {
    pub asset: Asset,
    pub generation: u64,
}

/// Popup selection state machine: showing-bitcoin <-> showing-ethereum.
#[derive(Debug, Clone, Default)]
pub struct PopupState {
    asset: Asset,
    generation: u64,
    last_price: Option<Price>,
}

impl PopupState {
    pub fn new(asset: Asset) -> Self {
        Self { asset, generation: 0, last_price: None }
    }

    pub fn asset(&self) -> Asset {
        self.asset
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Switch to `asset`. Returns `None` when it is already shown; otherwise
    /// starts a new generation, forgets the previous asset's price and
    /// returns the token for the fetches the switch triggers.
    pub fn select(&mut self, asset: Asset) -> Option<RequestToken> {
        if asset == self.asset {
            return None;
        }
        self.asset = asset;
        self.generation += 1;
        self.last_price = None;
        Some(self.current_token())
    }

    /// Token for a fetch issued without changing the selection.
    pub fn current_token(&self) -> RequestToken {
        RequestToken { asset: self.asset, generation: self.generation }
    }

    /// Whether a result fetched under `token` may still reach the UI.
    pub fn is_current(&self, token: &RequestToken) -> bool {
        token.generation == self.generation && token.asset == self.asset
    }

    pub fn record_price(&mut self, price: Price) {
        self.last_price = Some(price);
    }

    pub fn last_price(&self) -> Option<Price> {
        self.last_price
    }
}

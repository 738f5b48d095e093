use crate::domain::market_data::Asset;

/// What the popup shows for the selected asset. Derived from the asset,
/// never read back to decide which asset is selected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetView {
    pub asset: Asset,
    pub title: String,
    pub input_placeholder: String,
    pub show_switch_to_eth: bool,
    pub show_switch_to_btc: bool,
}

impl AssetView {
    pub fn for_asset(asset: Asset) -> Self {
        let input_placeholder = match asset {
            Asset::Bitcoin => "BTC amount",
            Asset::Ethereum => "ETH Amount",
        };
        Self {
            asset,
            title: format!("{} Price", asset.display_name()),
            input_placeholder: input_placeholder.to_string(),
            show_switch_to_eth: asset == Asset::Bitcoin,
            show_switch_to_btc: asset == Asset::Ethereum,
        }
    }
}

impl Default for AssetView {
    fn default() -> Self {
        Self::for_asset(Asset::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_switch_button_is_visible() {
        for asset in [Asset::Bitcoin, Asset::Ethereum] {
            let view = AssetView::for_asset(asset);
            assert!(view.show_switch_to_eth ^ view.show_switch_to_btc);
        }
    }

    #[test]
    fn ethereum_labels() {
        let view = AssetView::for_asset(Asset::Ethereum);
        assert_eq!(view.title, "Ethereum Price");
        assert_eq!(view.input_placeholder, "ETH Amount");
        assert!(view.show_switch_to_btc);
    }
}

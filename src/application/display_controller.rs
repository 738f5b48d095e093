use crate::config::PopupConfig;
use crate::domain::{
    chart::{ChartConfig, ChartInstance, ChartSurface},
    errors::{NetworkResult, RenderingResult},
    logging::{LogComponent, get_logger},
    market_data::{Asset, ConversionService, Price, PriceHistory},
};
use crate::view_state::AssetView;

pub const PRICE_ERROR_TEXT: &str = "Error fetching price";
pub const HISTORY_ERROR_TEXT: &str = "Error fetching price history";

/// Text-level UI the popup writes to.
pub trait PopupView {
    fn show_asset(&self, view: &AssetView);
    fn set_price_text(&self, text: &str);
    fn set_usd_output(&self, text: &str);
    /// Raw contents of the amount input.
    fn amount_input(&self) -> String;
}

/// Writes fetched values into the view and owns the one chart instance.
pub struct DisplayController<V, S: ChartSurface> {
    view: V,
    surface: S,
    chart: Option<S::Instance>,
    conversion: ConversionService,
    config: PopupConfig,
}

impl<V: PopupView, S: ChartSurface> DisplayController<V, S> {
    pub fn new(view: V, surface: S, config: PopupConfig) -> Self {
        Self { view, surface, chart: None, conversion: ConversionService::new(), config }
    }

    pub fn has_chart(&self) -> bool {
        self.chart.is_some()
    }

    pub fn show_asset(&self, asset: Asset) {
        self.view.show_asset(&AssetView::for_asset(asset));
    }

    /// Price label plus conversion output, or the error text.
    pub fn show_price(&self, result: &NetworkResult<Price>) {
        match result {
            Ok(price) => {
                self.view.set_price_text(&price.to_usd_string());
                self.update_conversion(*price);
            }
            Err(e) => {
                get_logger().error(LogComponent::Application("Display"), &format!("price fetch failed: {e}"));
                self.view.set_price_text(PRICE_ERROR_TEXT);
            }
        }
    }

    /// Recompute the USD output from the current input and `price`.
    pub fn update_conversion(&self, price: Price) {
        let output = self.conversion.convert_to_usd(&self.view.amount_input(), price);
        self.view.set_usd_output(&output);
    }

    pub fn clear_conversion(&self) {
        self.view.set_usd_output("");
    }

    /// Chart for `history`, or the error message on the cleared canvas.
    pub fn show_history(&mut self, asset: Asset, result: &NetworkResult<PriceHistory>) {
        let outcome = match result {
            Ok(history) => {
                let config = ChartConfig::price_line(
                    history,
                    &format!("{} (USD)", asset.display_name()),
                    self.config.line_color(asset),
                );
                self.replace_chart(config)
            }
            Err(e) => {
                get_logger().error(
                    LogComponent::Application("Display"),
                    &format!("price history fetch failed: {e}"),
                );
                self.destroy_chart();
                self.surface.show_message(HISTORY_ERROR_TEXT)
            }
        };
        if let Err(e) = outcome {
            get_logger().error(LogComponent::Application("Display"), &format!("chart rendering failed: {e}"));
        }
    }

    /// Destroy the current chart, then draw `config` as the new one.
    pub fn replace_chart(&mut self, config: ChartConfig) -> RenderingResult<()> {
        self.destroy_chart();
        self.chart = Some(self.surface.create(config)?);
        Ok(())
    }

    pub fn destroy_chart(&mut self) {
        if let Some(chart) = self.chart.take() {
            chart.destroy();
        }
    }
}

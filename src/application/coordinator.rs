use std::cell::RefCell;

use crate::application::display_controller::{DisplayController, PopupView};
use crate::config::PopupConfig;
use crate::domain::{
    chart::ChartSurface,
    events::{DomainEvent, PopupEvent},
    logging::{LogComponent, LogLevel, get_logger},
    market_data::{Asset, MarketDataRepository},
    state::{PopupState, RequestToken},
};
use crate::event_utils::is_submit_key;

/// Wires user actions to fetches and display updates.
///
/// All methods take `&self` so several loads can be in flight at once on
/// the browser thread. Interior state is only borrowed between awaits.
pub struct PopupCoordinator<R, V, S: ChartSurface> {
    repository: R,
    state: RefCell<PopupState>,
    display: RefCell<DisplayController<V, S>>,
}

impl<R, V, S> PopupCoordinator<R, V, S>
where
    R: MarketDataRepository,
    V: PopupView,
    S: ChartSurface,
{
    pub fn new(repository: R, view: V, surface: S, config: PopupConfig) -> Self {
        get_logger().info(LogComponent::Application("PopupCoordinator"), "Creating popup coordinator");
        Self {
            repository,
            state: RefCell::new(PopupState::default()),
            display: RefCell::new(DisplayController::new(view, surface, config)),
        }
    }

    pub fn current_asset(&self) -> Asset {
        self.state.borrow().asset()
    }

    pub fn has_chart(&self) -> bool {
        self.display.borrow().has_chart()
    }

    /// Show and load the initially selected asset.
    pub async fn initial_load(&self) {
        let token = self.state.borrow().current_token();
        self.display.borrow().show_asset(token.asset);
        self.load(token).await;
    }

    /// Switch-button handler. Selecting the shown asset does nothing.
    pub async fn switch_asset(&self, asset: Asset) {
        let Some(token) = self.state.borrow_mut().select(asset) else {
            crate::log_debug!(LogComponent::Application("PopupCoordinator"), "{asset} already shown");
            return;
        };
        emit(&PopupEvent::AssetSelected { asset, generation: token.generation });
        self.display.borrow().show_asset(asset);
        self.load(token).await;
    }

    /// Keypress handler of the amount input: on Enter, refresh the price of
    /// the current asset and recompute the USD output.
    pub async fn handle_key(&self, key: &str) {
        if !is_submit_key(key) {
            return;
        }
        let token = self.state.borrow().current_token();
        let result = self.repository.fetch_spot_price(token.asset).await;
        if !self.accept(&token) {
            return;
        }

        match result {
            Ok(price) => {
                self.state.borrow_mut().record_price(price);
                self.display.borrow().update_conversion(price);
            }
            Err(e) => {
                emit(&PopupEvent::FetchFailed { asset: token.asset, what: "price", reason: e.to_string() });
                let fallback = self.state.borrow().last_price();
                let display = self.display.borrow();
                match fallback {
                    Some(price) => display.update_conversion(price),
                    None => display.clear_conversion(),
                }
            }
        }
    }

    /// Price and history for `token`, concurrently. Either may finish first.
    async fn load(&self, token: RequestToken) {
        futures::join!(self.refresh_price(token), self.refresh_history(token));
    }

    async fn refresh_price(&self, token: RequestToken) {
        let result = self.repository.fetch_spot_price(token.asset).await;
        if !self.accept(&token) {
            return;
        }
        match &result {
            Ok(price) => {
                self.state.borrow_mut().record_price(*price);
                emit(&PopupEvent::PriceDisplayed { asset: token.asset, price: price.value() });
            }
            Err(e) => {
                emit(&PopupEvent::FetchFailed { asset: token.asset, what: "price", reason: e.to_string() })
            }
        }
        self.display.borrow().show_price(&result);
    }

    async fn refresh_history(&self, token: RequestToken) {
        let result = self.repository.fetch_price_history(token.asset).await;
        if !self.accept(&token) {
            return;
        }
        match &result {
            Ok(history) => emit(&PopupEvent::HistoryDisplayed { asset: token.asset, points: history.len() }),
            Err(e) => emit(&PopupEvent::FetchFailed {
                asset: token.asset,
                what: "history",
                reason: e.to_string(),
            }),
        }
        self.display.borrow_mut().show_history(token.asset, &result);
    }

    /// Whether a response fetched under `token` may be shown.
    fn accept(&self, token: &RequestToken) -> bool {
        let state = self.state.borrow();
        if state.is_current(token) {
            return true;
        }
        emit(&PopupEvent::StaleResponseDiscarded {
            asset: token.asset,
            generation: token.generation,
            current_generation: state.generation(),
        });
        false
    }
}

fn emit(event: &PopupEvent) {
    let level = match event {
        PopupEvent::FetchFailed { .. } => LogLevel::Warn,
        PopupEvent::StaleResponseDiscarded { .. } => LogLevel::Debug,
        _ => LogLevel::Info,
    };
    get_logger().log_with_metadata(
        level,
        LogComponent::Application("PopupCoordinator"),
        event.event_type(),
        &event.metadata(),
    );
}

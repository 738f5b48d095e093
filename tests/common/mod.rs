#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crypto_price_popup::application::{PopupCoordinator, PopupView};
use crypto_price_popup::config::PopupConfig;
use crypto_price_popup::domain::{
    chart::{ChartConfig, ChartInstance, ChartSurface},
    errors::{AppError, NetworkResult, RenderingResult},
    market_data::{Asset, MarketDataRepository, Price, PriceHistory, Timestamp},
};
use crypto_price_popup::view_state::AssetView;
use futures::channel::oneshot;

pub const DAY_MS: i64 = 86_400_000;
/// 2023-11-14T00:00:00Z
pub const NOV_14_2023: i64 = 1_699_920_000_000;

pub type TestPopup = PopupCoordinator<FakeRepository, RecordingView, FakeSurface>;

/// Popup wired to fakes; the returned handles observe the same state.
pub fn popup(repository: &FakeRepository) -> (Rc<TestPopup>, RecordingView, FakeSurface) {
    let view = RecordingView::default();
    let surface = FakeSurface::default();
    let popup = PopupCoordinator::new(repository.clone(), view.clone(), surface.clone(), PopupConfig::default());
    (Rc::new(popup), view, surface)
}

/// Repository answering bitcoin at $30000 and ethereum at $2000, each with
/// a three day history.
pub fn market() -> FakeRepository {
    let repository = FakeRepository::default();
    repository.set_price(Asset::Bitcoin, 30000.0);
    repository.set_history(Asset::Bitcoin, &daily(NOV_14_2023, &[29000.0, 29500.5, 30000.0]));
    repository.set_price(Asset::Ethereum, 2000.0);
    repository.set_history(Asset::Ethereum, &daily(NOV_14_2023, &[1900.0, 1950.25, 2000.0]));
    repository
}

/// One sample per day starting at `start_ms`.
pub fn daily(start_ms: i64, prices: &[f64]) -> Vec<(i64, f64)> {
    prices.iter().enumerate().map(|(i, p)| (start_ms + i as i64 * DAY_MS, *p)).collect()
}

#[derive(Debug, Clone, Default)]
pub struct ViewSnapshot {
    pub title: String,
    pub placeholder: String,
    pub show_switch_to_eth: bool,
    pub show_switch_to_btc: bool,
    pub price_text: String,
    pub usd_output: String,
    pub amount: String,
    pub asset_views_shown: usize,
}

#[derive(Clone, Default)]
pub struct RecordingView {
    inner: Rc<RefCell<ViewSnapshot>>,
}

impl RecordingView {
    pub fn snapshot(&self) -> ViewSnapshot {
        self.inner.borrow().clone()
    }

    pub fn type_amount(&self, amount: &str) {
        self.inner.borrow_mut().amount = amount.to_string();
    }
}

impl PopupView for RecordingView {
    fn show_asset(&self, view: &AssetView) {
        let mut inner = self.inner.borrow_mut();
        inner.title = view.title.clone();
        inner.placeholder = view.input_placeholder.clone();
        inner.show_switch_to_eth = view.show_switch_to_eth;
        inner.show_switch_to_btc = view.show_switch_to_btc;
        inner.asset_views_shown += 1;
    }

    fn set_price_text(&self, text: &str) {
        self.inner.borrow_mut().price_text = text.to_string();
    }

    fn set_usd_output(&self, text: &str) {
        self.inner.borrow_mut().usd_output = text.to_string();
    }

    fn amount_input(&self) -> String {
        self.inner.borrow().amount.clone()
    }
}

#[derive(Debug, Default)]
pub struct SurfaceLog {
    pub live: usize,
    pub created: usize,
    pub destroyed: usize,
    pub last_config: Option<ChartConfig>,
    pub message: Option<String>,
}

/// Chart surface that only counts instances.
#[derive(Clone, Default)]
pub struct FakeSurface {
    log: Rc<RefCell<SurfaceLog>>,
}

impl FakeSurface {
    pub fn live(&self) -> usize {
        self.log.borrow().live
    }

    pub fn created(&self) -> usize {
        self.log.borrow().created
    }

    pub fn destroyed(&self) -> usize {
        self.log.borrow().destroyed
    }

    pub fn last_config(&self) -> Option<ChartConfig> {
        self.log.borrow().last_config.clone()
    }

    pub fn message(&self) -> Option<String> {
        self.log.borrow().message.clone()
    }
}

pub struct FakeChart {
    log: Rc<RefCell<SurfaceLog>>,
}

impl ChartInstance for FakeChart {
    fn destroy(self) {
        let mut log = self.log.borrow_mut();
        log.live -= 1;
        log.destroyed += 1;
    }
}

impl ChartSurface for FakeSurface {
    type Instance = FakeChart;

    fn create(&self, config: ChartConfig) -> RenderingResult<FakeChart> {
        let mut log = self.log.borrow_mut();
        log.live += 1;
        log.created += 1;
        log.last_config = Some(config);
        log.message = None;
        Ok(FakeChart { log: self.log.clone() })
    }

    fn show_message(&self, message: &str) -> RenderingResult<()> {
        self.log.borrow_mut().message = Some(message.to_string());
        Ok(())
    }
}

#[derive(Default)]
struct RepositoryState {
    prices: HashMap<Asset, NetworkResult<Price>>,
    histories: HashMap<Asset, NetworkResult<PriceHistory>>,
    gated: HashSet<Asset>,
    waiting: Vec<(Asset, oneshot::Sender<()>)>,
    price_calls: usize,
    history_calls: usize,
}

/// Scripted market data. Gated assets hold their responses until released.
#[derive(Clone, Default)]
pub struct FakeRepository {
    state: Rc<RefCell<RepositoryState>>,
}

impl FakeRepository {
    pub fn set_price(&self, asset: Asset, price: f64) {
        self.state.borrow_mut().prices.insert(asset, Ok(Price::from(price)));
    }

    pub fn fail_price(&self, asset: Asset) {
        let error = AppError::NetworkError("HTTP 429: Too Many Requests".to_string());
        self.state.borrow_mut().prices.insert(asset, Err(error));
    }

    pub fn set_history(&self, asset: Asset, samples: &[(i64, f64)]) {
        let history = PriceHistory::from_samples(
            samples.iter().map(|(t, p)| (Timestamp::from_millis(*t), Price::from(*p))),
        );
        self.state.borrow_mut().histories.insert(asset, history);
    }

    pub fn fail_history(&self, asset: Asset) {
        let error = AppError::NetworkError("HTTP 500: Internal Server Error".to_string());
        self.state.borrow_mut().histories.insert(asset, Err(error));
    }

    pub fn gate(&self, asset: Asset) {
        self.state.borrow_mut().gated.insert(asset);
    }

    /// Ungate `asset` and let every held request for it complete.
    pub fn release(&self, asset: Asset) {
        let mut state = self.state.borrow_mut();
        state.gated.remove(&asset);
        let (ready, held): (Vec<_>, Vec<_>) = state.waiting.drain(..).partition(|(a, _)| *a == asset);
        state.waiting = held;
        for (_, sender) in ready {
            let _ = sender.send(());
        }
    }

    pub fn waiting(&self) -> usize {
        self.state.borrow().waiting.len()
    }

    pub fn price_calls(&self) -> usize {
        self.state.borrow().price_calls
    }

    pub fn history_calls(&self) -> usize {
        self.state.borrow().history_calls
    }

    async fn hold(&self, asset: Asset) {
        let receiver = {
            let mut state = self.state.borrow_mut();
            if !state.gated.contains(&asset) {
                return;
            }
            let (sender, receiver) = oneshot::channel();
            state.waiting.push((asset, sender));
            receiver
        };
        let _ = receiver.await;
    }
}

impl MarketDataRepository for FakeRepository {
    async fn fetch_spot_price(&self, asset: Asset) -> NetworkResult<Price> {
        self.state.borrow_mut().price_calls += 1;
        self.hold(asset).await;
        self.state
            .borrow()
            .prices
            .get(&asset)
            .cloned()
            .unwrap_or_else(|| Err(AppError::NetworkError(format!("no price for {asset}"))))
    }

    async fn fetch_price_history(&self, asset: Asset) -> NetworkResult<PriceHistory> {
        self.state.borrow_mut().history_calls += 1;
        self.hold(asset).await;
        self.state
            .borrow()
            .histories
            .get(&asset)
            .cloned()
            .unwrap_or_else(|| Err(AppError::NetworkError(format!("no history for {asset}"))))
    }
}

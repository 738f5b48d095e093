use leptos::*;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

use crate::{
    application::{PopupCoordinator, PopupView},
    config::PopupConfig,
    domain::{
        logging::{LogComponent, get_logger},
        market_data::Asset,
    },
    infrastructure::{http::CoinGeckoRestClient, rendering::CanvasChartSurface},
    view_state::AssetView,
};

/// Id of the chart canvas; the chart surface looks it up in the document.
pub const PRICE_CHART_ID: &str = "price-chart";

/// `PopupView` backed by Leptos signals; the markup subscribes to them.
#[derive(Clone, Copy)]
pub struct SignalView {
    pub asset_view: RwSignal<AssetView>,
    pub price_text: RwSignal<String>,
    pub usd_output: RwSignal<String>,
    pub amount: RwSignal<String>,
}

impl SignalView {
    pub fn new() -> Self {
        Self {
            asset_view: create_rw_signal(AssetView::default()),
            price_text: create_rw_signal(String::new()),
            usd_output: create_rw_signal(String::new()),
            amount: create_rw_signal(String::new()),
        }
    }
}

impl Default for SignalView {
    fn default() -> Self {
        Self::new()
    }
}

impl PopupView for SignalView {
    fn show_asset(&self, view: &AssetView) {
        self.asset_view.set(view.clone());
    }

    fn set_price_text(&self, text: &str) {
        self.price_text.set(text.to_string());
    }

    fn set_usd_output(&self, text: &str) {
        self.usd_output.set(text.to_string());
    }

    fn amount_input(&self) -> String {
        self.amount.get_untracked()
    }
}

type Popup = PopupCoordinator<CoinGeckoRestClient, SignalView, CanvasChartSurface>;

/// The extension popup: asset title, price, 30-day chart, switch buttons
/// and the amount converter.
#[component]
pub fn App() -> impl IntoView {
    let config = PopupConfig::default();
    let ui = SignalView::new();
    let coordinator: Rc<Popup> = Rc::new(PopupCoordinator::new(
        CoinGeckoRestClient::new(config.clone()),
        ui,
        CanvasChartSurface::new(PRICE_CHART_ID, &config),
        config,
    ));
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Initial bitcoin load, once the canvas exists.
    let initial = coordinator.clone();
    create_effect(move |loaded: Option<bool>| {
        if loaded == Some(true) {
            return true;
        }
        if canvas_ref.get().is_none() {
            return false;
        }
        get_logger().info(LogComponent::Presentation("App"), "canvas mounted, loading bitcoin");
        let popup = initial.clone();
        spawn_local(async move { popup.initial_load().await });
        true
    });

    let switching = coordinator.clone();
    let switch_to = move |asset: Asset| {
        let popup = switching.clone();
        let on_click = move |_: ev::MouseEvent| {
            let popup = popup.clone();
            spawn_local(async move { popup.switch_asset(asset).await });
        };
        on_click
    };
    let on_switch_to_eth = switch_to(Asset::Ethereum);
    let on_switch_to_btc = switch_to(Asset::Bitcoin);

    let keys = coordinator;
    let on_keypress = move |ev: ev::KeyboardEvent| {
        let popup = keys.clone();
        let key = ev.key();
        spawn_local(async move { popup.handle_key(&key).await });
    };
    let on_input = move |ev: ev::Event| ui.amount.set(event_target_value(&ev));

    view! {
        <style>
            {r#"
            .crypto-popup {
                font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
                width: 320px;
                padding: 12px;
            }

            .crypto-popup h2 {
                margin: 0 0 4px 0;
                font-size: 16px;
            }

            .price {
                font-size: 24px;
                font-weight: 700;
                margin: 0 0 8px 0;
            }

            .chart-container {
                position: relative;
                height: 200px;
            }

            .chart-container canvas {
                width: 100%;
                height: 100%;
            }

            .switches,
            .controls {
                display: flex;
                gap: 8px;
                margin-top: 8px;
            }
            "#}
        </style>
        <div class="crypto-popup">
            <h2 id="crypto-name">{move || ui.asset_view.with(|v| v.title.clone())}</h2>
            <p id="price" class="price">{move || ui.price_text.get()}</p>
            <div class="chart-container">
                <canvas id=PRICE_CHART_ID node_ref=canvas_ref></canvas>
            </div>
            <div class="switches">
                <button
                    id="switch-to-eth"
                    hidden=move || !ui.asset_view.with(|v| v.show_switch_to_eth)
                    on:click=on_switch_to_eth
                >
                    "Switch to ETH"
                </button>
                <button
                    id="switch-to-btc"
                    hidden=move || !ui.asset_view.with(|v| v.show_switch_to_btc)
                    on:click=on_switch_to_btc
                >
                    "Switch to BTC"
                </button>
            </div>
            <div class="controls">
                <input
                    id="crypto-input"
                    type="text"
                    placeholder=move || ui.asset_view.with(|v| v.input_placeholder.clone())
                    on:input=on_input
                    on:keypress=on_keypress
                />
                <span id="usd-output">{move || ui.usd_output.get()}</span>
            </div>
        </div>
    }
}

#![cfg(target_arch = "wasm32")]

use crypto_price_popup::app::App;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn element(selector: &str) -> web_sys::Element {
    gloo::utils::document().query_selector(selector).unwrap().unwrap()
}

#[wasm_bindgen_test]
fn switch_buttons_share_a_row() {
    leptos::mount_to_body(App);

    let eth_row = element("#switch-to-eth").parent_element().unwrap();
    let btc_row = element("#switch-to-btc").parent_element().unwrap();
    assert_eq!(eth_row.class_name(), "switches");
    assert!(eth_row.is_same_node(Some(&btc_row)));

    let input_row = element("#crypto-input").parent_element().unwrap();
    assert_eq!(input_row.class_name(), "controls");

    assert!(!element("#switch-to-eth").has_attribute("hidden"));
    assert!(element("#switch-to-btc").has_attribute("hidden"));
    assert_eq!(element("#crypto-name").text_content().as_deref(), Some("Bitcoin Price"));
}

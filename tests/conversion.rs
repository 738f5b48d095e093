mod common;

use common::{market, popup};
use crypto_price_popup::domain::market_data::{Asset, ConversionService, Price, parse_amount};
use futures::executor::block_on;
use quickcheck_macros::quickcheck;

fn convert(input: &str, price: f64) -> String {
    ConversionService::new().convert_to_usd(input, Price::from(price))
}

#[test]
fn converts_amounts() {
    assert_eq!(convert("2", 30000.0), "$60000.00");
    assert_eq!(convert("0.5", 2000.0), "$1000.00");
    assert_eq!(convert("abc", 30000.0), "");
    assert_eq!(convert("", 30000.0), "");
}

#[test]
fn numeric_prefix_is_used() {
    assert_eq!(convert("2abc", 100.0), "$200.00");
    assert_eq!(convert("  1.5 BTC", 10.0), "$15.00");
    assert_eq!(convert("1e2", 3.0), "$300.00");
    assert_eq!(parse_amount(".25"), Some(0.25));
    assert_eq!(parse_amount("-3"), Some(-3.0));
    assert_eq!(parse_amount("e5"), None);
}

#[test]
fn exact_half_cent_rounds_up() {
    assert_eq!(convert("0.5", 30000.25), "$15000.13");
    assert_eq!(convert("1", 30000.125), "$30000.13");
}

#[test]
fn price_label_rounds_half_cent_up() {
    let repository = market();
    repository.set_price(Asset::Bitcoin, 30000.125);
    let (popup, view, _surface) = popup(&repository);

    block_on(popup.initial_load());

    assert_eq!(view.snapshot().price_text, "$30000.13");
}

#[test]
fn infinite_product_clears_output() {
    assert_eq!(convert("Infinity", 2000.0), "");
    assert_eq!(convert("1e308", 1e10), "");
}

#[quickcheck]
fn output_is_dollars_with_two_decimals(amount: u32, cents: u32) -> bool {
    let out = convert(&amount.to_string(), cents as f64 / 100.0);
    let decimals = out.rsplit('.').next().map(str::len);
    out.starts_with('$') && decimals == Some(2)
}

#[quickcheck]
fn whole_amounts_match_product(amount: u16, price: u16) -> bool {
    convert(&amount.to_string(), price as f64) == format!("${}.00", amount as u64 * price as u64)
}

#[test]
fn enter_converts_with_fresh_price() {
    let repository = market();
    let (popup, view, _surface) = popup(&repository);
    block_on(popup.initial_load());

    view.type_amount("2");
    repository.set_price(Asset::Bitcoin, 31000.0);
    block_on(popup.handle_key("Enter"));

    assert_eq!(view.snapshot().usd_output, "$62000.00");
}

#[test]
fn other_keys_do_not_fetch() {
    let repository = market();
    let (popup, view, _surface) = popup(&repository);
    block_on(popup.initial_load());
    let calls = repository.price_calls();

    view.type_amount("2");
    block_on(popup.handle_key("2"));

    assert_eq!(repository.price_calls(), calls);
    assert_eq!(view.snapshot().usd_output, "");
}

#[test]
fn enter_uses_current_asset() {
    let repository = market();
    let (popup, view, _surface) = popup(&repository);
    block_on(popup.initial_load());
    block_on(popup.switch_asset(Asset::Ethereum));

    view.type_amount("3");
    block_on(popup.handle_key("Enter"));

    assert_eq!(view.snapshot().usd_output, "$6000.00");
}

#[test]
fn failed_enter_falls_back_to_last_price() {
    let repository = market();
    let (popup, view, _surface) = popup(&repository);
    block_on(popup.initial_load());

    view.type_amount("2");
    repository.fail_price(Asset::Bitcoin);
    block_on(popup.handle_key("Enter"));

    assert_eq!(view.snapshot().usd_output, "$60000.00");
}

#[test]
fn failed_enter_without_price_clears_output() {
    let repository = market();
    repository.fail_price(Asset::Bitcoin);
    let (popup, view, _surface) = popup(&repository);
    block_on(popup.initial_load());

    view.type_amount("2");
    block_on(popup.handle_key("Enter"));

    assert_eq!(view.snapshot().usd_output, "");
}

#[test]
fn fetched_price_recomputes_existing_input() {
    let repository = market();
    let (popup, view, _surface) = popup(&repository);
    view.type_amount("2");

    block_on(popup.initial_load());
    assert_eq!(view.snapshot().usd_output, "$60000.00");

    block_on(popup.switch_asset(Asset::Ethereum));
    assert_eq!(view.snapshot().usd_output, "$4000.00");
}

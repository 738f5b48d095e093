use rust_decimal::prelude::*;

/// `value` rounded to `decimals` places like JS `Number.prototype.toFixed`:
/// nearest to the exact binary value, exact ties away from zero.
///
/// `None` for non-finite values and magnitudes beyond `Decimal`'s range.
pub fn round_fixed(value: f64, decimals: u32) -> Option<Decimal> {
    Decimal::from_f64_retain(value)
        .map(|exact| exact.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero))
}

/// [`round_fixed`] back as the nearest `f64`, via its decimal text.
/// Values it cannot represent pass through.
pub fn round_to_fixed(value: f64, decimals: u32) -> f64 {
    round_fixed(value, decimals)
        .and_then(|rounded| rounded.to_string().parse().ok())
        .unwrap_or(value)
}

/// `value` as text with exactly `decimals` fraction digits.
pub fn to_fixed(value: f64, decimals: u32) -> String {
    let places = decimals as usize;
    match round_fixed(value, decimals) {
        Some(rounded) => format!("{:.*}", places, rounded),
        None => format!("{:.*}", places, value),
    }
}

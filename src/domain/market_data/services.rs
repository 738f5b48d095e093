use crate::domain::market_data::Price;

/// Crypto amount to USD conversion.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConversionService;

impl ConversionService {
    pub fn new() -> Self {
        Self
    }

    /// `$<amount * price>` with two decimals, or an empty string when the
    /// input has no numeric prefix or the product is not finite.
    pub fn convert_to_usd(&self, input: &str, price: Price) -> String {
        match parse_amount(input) {
            Some(amount) => {
                let total = amount * price.value();
                if total.is_finite() { Price::new(total).to_usd_string() } else { String::new() }
            }
            None => String::new(),
        }
    }
}

/// Parse the longest numeric prefix of `input`, skipping leading whitespace.
///
/// Accepts an optional sign, digits with an optional fraction, an optional
/// exponent and the literal `Infinity`. Trailing garbage is ignored, so
/// `"2abc"` reads as `2`. Returns `None` when no digits lead the input.
pub fn parse_amount(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        return s[..end + "Infinity".len()].parse().ok();
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

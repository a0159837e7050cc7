//! Amount parsing and balance rendering for the ATM console.

use crate::errors::InputError;

/// Parses a typed amount. Surrounding whitespace is ignored and only finite
/// numbers are accepted.
pub fn parse_amount(raw: &str) -> Result<f64, InputError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or(InputError::NotANumber)
}

/// Renders a balance as the shortest round-trip real number. Plain decimals
/// always show a fractional part (`80.0`, `80.5`); exponents carry a sign and
/// at least two digits (`1e+16`, `1e-05`).
pub fn format_balance(value: f64) -> String {
    let rendered = format!("{value:?}");
    match rendered.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => rendered,
    }
}

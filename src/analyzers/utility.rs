/// Parses a raw field into a finite number.
///
/// Missing fields, empty strings and anything that does not parse as a finite
/// decimal all map to `None`.
pub fn coerce_number(raw: Option<&str>) -> Option<f64> {
    raw?.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Values at or beyond this magnitude carry no information past the second
/// decimal place, and their cent count would not fit an `f64` mantissa.
const ROUNDING_LIMIT: f64 = 1e15;

/// Rounds to two decimal places, resolving exact ties to the even digit.
///
/// The decision is made on the exact decimal expansion of `value`, so `2.675`
/// (stored as `2.67499...`) rounds down while `0.125` (an exact tie) rounds
/// to `0.12`.
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() || value.abs() >= ROUNDING_LIMIT {
        return value;
    }

    // 40 places is enough to expose every non-tie near a half-cent boundary.
    let expansion = format!("{:.40}", value.abs());
    let Some((whole, frac)) = expansion.split_once('.') else {
        return value;
    };
    let Ok(whole) = whole.parse::<u64>() else {
        return value;
    };

    let digits = frac.as_bytes();
    let mut cents = whole * 100 + u64::from(digits[0] - b'0') * 10 + u64::from(digits[1] - b'0');

    let rest = &digits[2..];
    let round_up = match rest.split_first() {
        Some((b'5', tail)) => tail.iter().any(|&d| d != b'0') || cents % 2 == 1,
        Some((&d, _)) => d > b'5',
        None => false,
    };
    if round_up {
        cents += 1;
    }

    let rounded = cents as f64 / 100.0;
    if value.is_sign_negative() {
        -rounded
    } else {
        rounded
    }
}

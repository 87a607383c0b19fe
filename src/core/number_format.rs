/// Formats a number the way the chart's host page prints it.
///
/// Integral values drop the fractional part, negative zero prints as `0`,
/// and non-finite values print as `NaN`, `Infinity` or `-Infinity`.
/// Magnitudes of at least `1e21` or below `1e-6` switch to exponent form
/// with an explicit sign (`1e+21`, `1.5e-7`).
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if value == 0.0 {
        return "0".to_owned();
    }
    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        return exponent_form(value);
    }
    format!("{value}")
}

fn exponent_form(value: f64) -> String {
    let shortest = format!("{value:e}");
    match shortest.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => shortest,
    }
}

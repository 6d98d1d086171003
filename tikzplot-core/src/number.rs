//! Number formatting for generated markup
//!
//! Coordinates and tangent coefficients are printed with the shortest
//! representation that round-trips, without a trailing `.0` for integral
//! values. Magnitudes of `1e21` and above or below `1e-6` switch to
//! exponent notation (`1e+21`, `1.5e-7`).

/// Format a number the way it is embedded in TikZ output
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // Also folds -0 into 0
        return "0".to_string();
    }
    if !value.is_finite() {
        return format!("{}", value);
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let formatted = format!("{:e}", value);
        return match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => formatted,
        };
    }

    format!("{}", value)
}

/// Round to a fixed number of decimal places, folding -0 into 0
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    let rounded = (value * factor).round() / factor;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

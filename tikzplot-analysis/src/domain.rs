//! Domain and tangent-point parsing

use tikzplot_core::{format_number, PlotError, PlotResult};

fn parse_finite(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Parse `"min:max"` into its bounds
///
/// Fails with `InvalidDomain` unless both parts are finite numbers and
/// `min < max`.
pub fn parse_domain(domain: &str) -> PlotResult<(f64, f64)> {
    let (min_text, max_text) = domain
        .split_once(':')
        .ok_or_else(|| PlotError::invalid_domain(domain, "expected min:max"))?;
    if max_text.contains(':') {
        return Err(PlotError::invalid_domain(domain, "expected exactly one ':'"));
    }

    let min = parse_finite(min_text)
        .ok_or_else(|| PlotError::invalid_domain(domain, format!("'{}' is not a number", min_text.trim())))?;
    let max = parse_finite(max_text)
        .ok_or_else(|| PlotError::invalid_domain(domain, format!("'{}' is not a number", max_text.trim())))?;

    if min >= max {
        return Err(PlotError::invalid_domain(domain, "min must be below max"));
    }

    Ok((min, max))
}

/// Parse a tangent point and check it lies in `[min, max]`
pub fn parse_tangent_point(point: &str, domain: (f64, f64)) -> PlotResult<f64> {
    let x = parse_finite(point)
        .ok_or_else(|| PlotError::invalid_tangent_point(point, "not a number"))?;

    let (min, max) = domain;
    if x < min || x > max {
        return Err(PlotError::invalid_tangent_point(
            point,
            format!("outside domain [{}, {}]", format_number(min), format_number(max)),
        ));
    }

    Ok(x)
}

//! Local extrema by derivative sign-change scan
//!
//! The domain is sampled at 100 uniform subdivisions. A strict sign change
//! between the derivative one step back and the derivative at the sample
//! marks an extremum; the sign of a second finite difference classifies it.
//! There is no refinement and no deduplication, so extrema between samples
//! can be missed and flat regions can report neighbours twice.

use crate::derivative::{derivative_of, STEP};
use crate::domain::parse_domain;
use serde::{Deserialize, Serialize};
use tikzplot_core::{round_to, PlotResult};
use tikzplot_expr::CompiledExpr;
use tracing::{debug, trace};

/// Number of uniform subdivisions of the domain
pub const SUBDIVISIONS: u32 = 100;

/// Decimal places kept in reported coordinates
const COORD_PLACES: i32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtremumKind {
    Minimum,
    Maximum,
}

impl ExtremumKind {
    pub fn label(&self) -> &'static str {
        match self {
            ExtremumKind::Minimum => "minimum",
            ExtremumKind::Maximum => "maximum",
        }
    }
}

impl std::fmt::Display for ExtremumKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Detected extremum, coordinates rounded to three decimals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExtremumPoint {
    pub x: f64,
    pub y: f64,
    pub kind: ExtremumKind,
}

/// Scan `[min, max]` for extrema of a compiled expression
///
/// Any evaluation failure aborts the whole scan. At most `SUBDIVISIONS`
/// samples are taken, even when `step` is too small to move `x`.
pub fn find_extrema_of(f: &CompiledExpr, min: f64, max: f64) -> PlotResult<Vec<ExtremumPoint>> {
    let step = (max - min) / f64::from(SUBDIVISIONS);
    let mut extrema = Vec::new();

    // Accumulated, not min + i*step: sample positions are part of the output
    let mut x = min + step;
    let mut samples = 0;
    while x < max - step && samples < SUBDIVISIONS {
        samples += 1;
        let before = derivative_of(f, x - step)?;
        let here = derivative_of(f, x)?;
        let after = derivative_of(f, x + step)?;
        trace!(x, before, here, after, "extrema scan sample");

        if (before < 0.0 && here > 0.0) || (before > 0.0 && here < 0.0) {
            let second = (derivative_of(f, x + STEP)? - here) / STEP;
            let kind = if second > 0.0 {
                ExtremumKind::Minimum
            } else {
                ExtremumKind::Maximum
            };
            let point = ExtremumPoint {
                x: round_to(x, COORD_PLACES),
                y: round_to(f.eval(x)?, COORD_PLACES),
                kind,
            };
            debug!(expression = f.source(), x = point.x, y = point.y, %kind, "extremum");
            extrema.push(point);
        }

        x += step;
    }

    Ok(extrema)
}

/// Scan expression text over a `"min:max"` domain
pub fn find_extrema(expression: &str, domain: &str) -> PlotResult<Vec<ExtremumPoint>> {
    let (min, max) = parse_domain(domain)?;
    let f = CompiledExpr::compile(expression)?;
    find_extrema_of(&f, min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tikzplot_core::ErrorKind;

    #[test]
    fn test_square_has_single_minimum_at_origin() {
        let extrema = find_extrema("x^2", "-5:5").unwrap();
        assert_eq!(extrema.len(), 1, "extrema: {:?}", extrema);
        let p = extrema[0];
        assert_eq!(p.kind, ExtremumKind::Minimum);
        assert!(p.x.abs() < 0.1, "x: {}", p.x);
        assert!(p.y.abs() < 0.01, "y: {}", p.y);
    }

    #[test]
    fn test_inverted_square_has_maximum() {
        let extrema = find_extrema("4 - x^2", "-5:5").unwrap();
        assert_eq!(extrema.len(), 1);
        assert_eq!(extrema[0].kind, ExtremumKind::Maximum);
        assert!((extrema[0].y - 4.0).abs() < 0.01);
    }

    #[test]
    fn test_cubic_has_maximum_then_minimum() {
        // x^3 - 3x has a maximum at -1 and a minimum at 1
        let extrema = find_extrema("x^3 - 3*x", "-3:3").unwrap();
        let kinds: Vec<ExtremumKind> = extrema.iter().map(|p| p.kind).collect();
        assert_eq!(kinds, vec![ExtremumKind::Maximum, ExtremumKind::Minimum]);
        assert!((extrema[0].x + 1.0).abs() < 0.1);
        assert!((extrema[1].x - 1.0).abs() < 0.1);
    }

    #[test]
    fn test_monotone_has_none() {
        assert!(find_extrema("x", "-1:1").unwrap().is_empty());
        assert!(find_extrema("exp(x)", "-2:2").unwrap().is_empty());
    }

    #[test]
    fn test_coordinates_rounded_to_three_places() {
        for p in find_extrema("sin(deg(x))", "-4:4").unwrap() {
            assert_eq!(p.x, round_to(p.x, 3));
            assert_eq!(p.y, round_to(p.y, 3));
        }
    }

    #[test]
    fn test_scan_fails_on_evaluation_error() {
        let err = find_extrema("sqrt(x)", "-1:1").unwrap_err();
        assert!(err.is(ErrorKind::EvaluationError), "got {:?}", err.kind);
    }

    #[test]
    fn test_scan_rejects_bad_inputs() {
        assert!(find_extrema("x^2", "5:-5").unwrap_err().is(ErrorKind::InvalidDomain));
        assert!(find_extrema("x^^2", "-5:5").unwrap_err().is(ErrorKind::InvalidExpression));
    }

    #[test]
    fn test_scan_ends_when_step_underflows() {
        // Neighbouring f64 values near 1e17 are 16 apart, so x += step stalls
        let extrema = find_extrema("x", "100000000000000000:100000000000000016").unwrap();
        assert!(extrema.is_empty());
    }

    #[test]
    fn test_scan_ends_on_tiny_domain_near_zero() {
        let extrema = find_extrema("x^2", "0:1e-320").unwrap();
        assert!(extrema.is_empty());
    }

    #[test]
    fn test_kind_labels_serialize_lowercase() {
        let json = serde_json::to_string(&ExtremumKind::Minimum).unwrap();
        assert_eq!(json, "\"minimum\"");
    }
}

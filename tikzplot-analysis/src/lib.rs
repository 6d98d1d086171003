//! tikzplot Analysis
//!
//! Numerical helpers behind the function annotations:
//! - domain and tangent-point parsing
//! - forward-difference derivatives and tangent lines
//! - sampling-based extrema detection
//!
//! Everything here is synchronous and pure apart from `tracing` output.

mod derivative;
mod domain;
mod extrema;

pub use derivative::{derivative, derivative_of, tangent_line, tangent_line_of, TangentLine, STEP};
pub use domain::{parse_domain, parse_tangent_point};
pub use extrema::{find_extrema, find_extrema_of, ExtremumKind, ExtremumPoint, SUBDIVISIONS};

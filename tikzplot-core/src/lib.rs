//! tikzplot Core - Fundamental types
//!
//! This crate provides the core types used throughout tikzplot:
//! - `SettingValue`: current value of a configurable setting
//! - `FunctionSpec`: one plotted function and its annotations
//! - `PlotError`: structured errors reported next to generated text

mod error;
mod function;
mod number;
mod value;

pub use error::{ErrorContext, ErrorKind, PlotError, PlotResult, Severity};
pub use function::{FunctionSpec, COLORS, DEFAULT_DOMAIN, THICKNESSES};
pub use number::{format_number, round_to};
pub use value::SettingValue;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        format_number, ErrorKind, FunctionSpec, PlotError, PlotResult, SettingValue, Severity,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    mod number_tests {
        use super::*;

        #[test]
        fn test_integers_have_no_fraction() {
            assert_eq!(format_number(10.0), "10");
            assert_eq!(format_number(-4.0), "-4");
        }

        #[test]
        fn test_negative_zero_prints_as_zero() {
            assert_eq!(format_number(-0.0), "0");
            assert_eq!(round_to(-0.0004, 3), 0.0);
            assert_eq!(format_number(round_to(-0.0004, 3)), "0");
        }

        #[test]
        fn test_shortest_round_trip() {
            assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
            assert_eq!(format_number(-0.5), "-0.5");
        }

        #[test]
        fn test_exponent_notation() {
            assert_eq!(format_number(1e21), "1e+21");
            assert_eq!(format_number(1.5e-7), "1.5e-7");
            assert_eq!(format_number(0.000001), "0.000001");
        }

        #[test]
        fn test_round_to_three_places() {
            assert_eq!(round_to(1.23456, 3), 1.235);
            assert_eq!(round_to(-2.0004, 3), -2.0);
        }
    }

    mod value_tests {
        use super::*;

        #[test]
        fn test_accessors() {
            assert_eq!(SettingValue::from(true).as_bool(), Some(true));
            assert_eq!(SettingValue::from(5).as_number(), Some(5.0));
            assert_eq!(SettingValue::from("T").as_text(), Some("T"));
            assert!(SettingValue::from(vec![FunctionSpec::new("x")])
                .as_functions()
                .is_some());
            assert_eq!(SettingValue::from("T").as_bool(), None);
        }

        #[test]
        fn test_only_true_enables() {
            assert!(SettingValue::Bool(true).is_enabled());
            assert!(!SettingValue::Bool(false).is_enabled());
            assert!(!SettingValue::Text("true".to_string()).is_enabled());
        }

        #[test]
        fn test_display() {
            assert_eq!(SettingValue::Number(10.0).to_string(), "10");
            assert_eq!(SettingValue::Text("x".to_string()).to_string(), "x");
            assert_eq!(SettingValue::Bool(false).to_string(), "false");
        }

        #[test]
        fn test_same_variant() {
            assert!(SettingValue::Number(1.0).same_variant(&SettingValue::Number(7.0)));
            assert!(!SettingValue::Number(1.0).same_variant(&SettingValue::Text("1".into())));
        }

        #[test]
        fn test_untagged_json() {
            let v: SettingValue = serde_json::from_str("true").unwrap();
            assert_eq!(v, SettingValue::Bool(true));
            let v: SettingValue = serde_json::from_str("7").unwrap();
            assert_eq!(v, SettingValue::Number(7.0));
            let v: SettingValue = serde_json::from_str("\"-0.5\"").unwrap();
            assert_eq!(v, SettingValue::Text("-0.5".to_string()));
            let v: SettingValue =
                serde_json::from_str(r#"[{"expression": "x^2", "showLegend": true}]"#).unwrap();
            let funcs = v.as_functions().unwrap();
            assert_eq!(funcs[0].expression, "x^2");
            assert!(funcs[0].show_legend);
            assert_eq!(funcs[0].domain, "-10:10", "missing fields take form defaults");
        }
    }

    mod function_tests {
        use super::*;

        #[test]
        fn test_form_defaults() {
            let f = FunctionSpec::default();
            assert_eq!(f.domain, "-10:10");
            assert_eq!(f.color, "black");
            assert_eq!(f.thickness, "thin");
            assert!(!f.tangent && !f.extrema && !f.fill && !f.dashed && !f.show_legend);
        }

        #[test]
        fn test_wants_tangent_requires_point() {
            let mut f = FunctionSpec::new("x");
            f.tangent = true;
            assert!(!f.wants_tangent());
            let f = f.with_tangent_at("2");
            assert!(f.wants_tangent());
        }

        #[test]
        fn test_camel_case_fields() {
            let f = FunctionSpec::new("x").with_tangent_at("1");
            let json = serde_json::to_value(&f).unwrap();
            assert_eq!(json["tangentPoint"], "1");
            assert_eq!(json["showLegend"], false);
        }
    }

    mod error_tests {
        use super::*;

        #[test]
        fn test_kind_codes() {
            let e = PlotError::invalid_domain("10:-10", "min must be below max");
            assert!(e.is(ErrorKind::InvalidDomain));
            assert!(e.to_string().starts_with("[INVALID_DOMAIN]"));
        }

        #[test]
        fn test_context_builders() {
            let e = PlotError::evaluation_error("division by zero")
                .in_function(2)
                .with_expression("1/x")
                .with_note("during extrema scan");
            let ctx = e.context.unwrap();
            assert_eq!(ctx.function, Some(2));
            assert_eq!(ctx.expression.as_deref(), Some("1/x"));
            assert_eq!(ctx.notes.len(), 1);
        }

        #[test]
        fn test_tangent_point_is_warning() {
            let e = PlotError::invalid_tangent_point("20", "outside [-10, 10]");
            assert_eq!(e.severity, Severity::Warning);
        }

        #[test]
        fn test_json_shape() {
            let json = PlotError::unknown_setting("titel").to_json();
            assert_eq!(json["kind"], "UNKNOWN_SETTING");
            assert_eq!(json["context"]["setting"], "titel");
        }
    }
}

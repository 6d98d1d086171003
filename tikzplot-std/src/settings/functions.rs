//! Plotted functions and their annotations
//!
//! Each function renders independently. A function whose expression or
//! domain is invalid is dropped entirely; a failing tangent or extrema
//! annotation is skipped while the base plot stays. Every failure is
//! reported on the fragment with the function's list position.

use tikzplot_analysis::{
    find_extrema_of, parse_domain, parse_tangent_point, tangent_line_of, ExtremumKind,
};
use tikzplot_expr::CompiledExpr;
use tikzplot_settings::prelude::*;
use tracing::{debug, warn};

pub const SAMPLES: u32 = 300;

pub fn functions() -> SettingDescriptor {
    SettingDescriptor::function_list(FUNCTIONS_ID, render_functions)
        .named("Functions", "Mathematical functions to plot")
        .in_category(Category::Function)
}

fn render_functions(value: &SettingValue) -> PlotResult<Fragment> {
    let list = value.as_functions().ok_or_else(|| {
        PlotError::new(
            ErrorKind::TypeMismatch,
            format!("expected Functions, got {}", value.type_name()),
        )
    })?;

    let mut blocks = Vec::with_capacity(list.len());
    let mut issues = Vec::new();

    for (index, spec) in list.iter().enumerate() {
        let mut skipped = Vec::new();
        match function_block(spec, &mut skipped) {
            Ok(block) => blocks.push(block),
            Err(err) => {
                warn!(function = index, expression = %spec.expression, error = %err, "function dropped");
                issues.push(err.in_function(index));
            }
        }
        for err in skipped {
            warn!(function = index, expression = %spec.expression, error = %err, "annotation skipped");
            issues.push(err.in_function(index));
        }
    }

    Ok(Fragment::with_issues(blocks.join("\n"), issues))
}

/// Markup for one function; annotation failures go to `skipped`
fn function_block(spec: &FunctionSpec, skipped: &mut Vec<PlotError>) -> PlotResult<String> {
    let f = CompiledExpr::compile(&spec.expression)?;
    let domain = parse_domain(&spec.domain)?;

    let mut code = format!(
        "\n\\addplot[domain={}, {}, samples={}] {{{}}};",
        spec.domain,
        style_clause(spec),
        SAMPLES,
        spec.expression
    );

    if spec.show_legend {
        code.push_str(&format!("\n\\addlegendentry{{\\({}\\)}}", spec.expression));
    }

    if spec.wants_tangent() {
        match tangent_annotation(spec, &f, domain) {
            Ok(text) => code.push_str(&text),
            Err(err) => skipped.push(err.with_note("tangent annotation skipped")),
        }
    }

    if spec.extrema {
        match extrema_annotation(spec, &f, domain) {
            Ok(text) => code.push_str(&text),
            Err(err) => skipped.push(err.with_note("extrema annotation skipped")),
        }
    }

    Ok(code)
}

/// `dashed`, fill, color and thickness, comma separated
pub fn style_clause(spec: &FunctionSpec) -> String {
    let mut style = Vec::with_capacity(4);
    if spec.dashed {
        style.push("dashed".to_string());
    }
    if spec.fill {
        style.push(format!("fill={}!20, fill opacity=0.3", spec.color));
    }
    style.push(spec.color.clone());
    style.push(spec.thickness.clone());
    style.join(", ")
}

fn tangent_annotation(spec: &FunctionSpec, f: &CompiledExpr, domain: (f64, f64)) -> PlotResult<String> {
    let x0 = parse_tangent_point(&spec.tangent_point, domain)?;
    let line = tangent_line_of(f, x0)?;
    Ok(format!(
        "\n\\addplot[{color}, dashed, domain={domain}] {{{line}}};\n\\addplot[{color}, only marks] coordinates {{({x},{y})}};",
        color = spec.color,
        domain = spec.domain,
        line = line,
        x = format_number(x0),
        y = format_number(line.y0),
    ))
}

fn extrema_annotation(spec: &FunctionSpec, f: &CompiledExpr, domain: (f64, f64)) -> PlotResult<String> {
    let points = find_extrema_of(f, domain.0, domain.1)?;
    if points.is_empty() {
        return Ok(String::new());
    }
    debug!(expression = %spec.expression, count = points.len(), "extrema found");

    let coordinates: Vec<String> = points
        .iter()
        .map(|p| format!("({},{})", format_number(p.x), format_number(p.y)))
        .collect();
    let mut code = format!(
        "\n\\addplot[{}, only marks, mark=*, mark size=4pt] coordinates {{{}}};",
        spec.color,
        coordinates.join(" ")
    );

    for p in &points {
        let (anchor, label_y) = match p.kind {
            ExtremumKind::Minimum => ("below", p.y - 1.0),
            ExtremumKind::Maximum => ("above", p.y + 1.0),
        };
        code.push_str(&format!(
            "\n\\node[{}] at (axis cs:{},{}) {{{}}};",
            anchor,
            format_number(p.x),
            format_number(label_y),
            p.kind
        ));
    }

    Ok(code)
}

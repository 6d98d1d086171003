//! Document preamble and closing

use super::toggle_value;
use tikzplot_settings::prelude::*;

pub const PREAMBLE: &str = "\n\\usepackage{pgfplots}\n\\pgfplotsset{compat=1.16}\n\\begin{document}\n\\begin{tikzpicture}\n \n\\begin{axis}[";
pub const BARE_OPENING: &str = "\n\\begin{document}\n\\begin{tikzpicture}\n ";
pub const CLOSING: &str = "\n\\end{axis}\\end{tikzpicture}\\end{document}";

/// 3D toggle, reserved: contributes no text
pub fn dimension() -> SettingDescriptor {
    SettingDescriptor::toggle("dimension", false, |value| {
        toggle_value(value)?;
        Ok(Fragment::empty())
    })
    .named("3D", "Whether the graph is drawn in 2D or 3D")
    .in_category(Category::Basic)
}

fn render_setup(value: &SettingValue) -> PlotResult<Fragment> {
    let text = if toggle_value(value)? { PREAMBLE } else { BARE_OPENING };
    Ok(Fragment::text(text))
}

pub fn document_setup() -> SettingDescriptor {
    SettingDescriptor::toggle("documentSetup", true, render_setup)
        .named("Use pgfplots", "Whether to include the pgfplots package and open the axis")
        .in_category(Category::Basic)
        .leading()
}

pub fn document_close() -> SettingDescriptor {
    SettingDescriptor::toggle("documentClose", true, |value| {
        toggle_value(value)?;
        Ok(Fragment::text(CLOSING))
    })
    .named("Document Close", "Include the document closing")
    .in_category(Category::Basic)
    .trailing()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tikzplot_core::ErrorKind;
    use tikzplot_settings::Placement;

    #[test]
    fn test_setup_fragments() {
        let setup = document_setup();
        let on = setup.render(&SettingValue::Bool(true)).unwrap().text;
        assert!(on.starts_with("\n\\usepackage{pgfplots}"));
        assert!(on.ends_with("\\begin{axis}["));

        let off = setup.render(&SettingValue::Bool(false)).unwrap().text;
        assert!(!off.contains("pgfplots"));
        assert!(off.contains("\\begin{tikzpicture}"));
    }

    #[test]
    fn test_bookend_placement() {
        assert_eq!(document_setup().placement, Placement::Leading);
        assert_eq!(document_close().placement, Placement::Trailing);
        assert_eq!(dimension().placement, Placement::Inline);
    }

    #[test]
    fn test_close_fragment() {
        let text = document_close().render(&SettingValue::Bool(true)).unwrap().text;
        assert_eq!(text, "\n\\end{axis}\\end{tikzpicture}\\end{document}");
    }

    #[test]
    fn test_dimension_is_silent() {
        assert_eq!(dimension().render(&SettingValue::Bool(true)).unwrap().text, "");
    }

    #[test]
    fn test_wrong_variant_is_rejected() {
        let err = document_setup().render(&SettingValue::from("yes")).unwrap_err();
        assert!(err.is(ErrorKind::TypeMismatch));
        assert_eq!(err.context.unwrap().setting.as_deref(), Some("documentSetup"));
    }
}

//! Source normalization

/// Drop `&nbsp;` markers and non-breaking spaces, trim every line and
/// remove empty lines
pub fn tidy(source: &str) -> String {
    source
        .replace("&nbsp;", "")
        .replace('\u{00A0}', "")
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tidy_drops_blank_lines() {
        assert_eq!(tidy("\n  a,\n\n   \n b\n"), "a,\nb");
    }

    #[test]
    fn test_tidy_strips_nbsp() {
        assert_eq!(tidy("x&nbsp;=1\n\u{00A0}\n y\u{00A0}"), "x=1\ny");
    }

    #[test]
    fn test_tidy_is_stable() {
        let once = tidy(" \\begin{axis}[\n  title={T},\n\n]");
        assert_eq!(tidy(&once), once);
        assert_eq!(tidy(""), "");
    }
}

use regex::Regex;
use std::sync::OnceLock;

static STRONG: OnceLock<Regex> = OnceLock::new();
static EMPHASIS: OnceLock<Regex> = OnceLock::new();
static LINK: OnceLock<Regex> = OnceLock::new();

/// Inline passes in application order. Strong must run before emphasis so
/// that `**x**` is not consumed as two single-asterisk spans.
static PASSES: [(&OnceLock<Regex>, &str, &str); 3] = [
    (&STRONG, r"\*\*(.+?)\*\*", "<strong>${1}</strong>"),
    (&EMPHASIS, r"\*(.+?)\*", "<em>${1}</em>"),
    (&LINK, r"\[([^\]]+)\]\(([^)]+)\)", r#"<a href="${2}" target="_blank" rel="noopener">${1}</a>"#),
];

/// Applies strong, emphasis and link spans to one line of text.
pub fn render(text: &str) -> String {
    let mut out = text.to_string();
    for &(cell, source, replacement) in PASSES.iter() {
        let re = cell.get_or_init(|| Regex::new(source).expect("inline pattern is valid"));
        if re.is_match(&out) {
            out = re.replace_all(&out, replacement).into_owned();
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strong_is_lazy() {
        assert_eq!(render("**a** and **b**"), "<strong>a</strong> and <strong>b</strong>");
    }

    #[test]
    fn strong_then_emphasis() {
        assert_eq!(render("**Email:** *soon*"), "<strong>Email:</strong> <em>soon</em>");
    }

    #[test]
    fn links_open_in_new_context() {
        assert_eq!(
            render("See [NAI Opt-Out](https://optout.networkadvertising.org/)."),
            "See <a href=\"https://optout.networkadvertising.org/\" target=\"_blank\" rel=\"noopener\">NAI Opt-Out</a>."
        );
    }

    #[test]
    fn emphasis_inside_link_text() {
        assert_eq!(
            render("[**bold**](https://x.test)"),
            "<a href=\"https://x.test\" target=\"_blank\" rel=\"noopener\"><strong>bold</strong></a>"
        );
    }

    #[test]
    fn unmatched_markers_are_kept() {
        assert_eq!(render("5 * 3"), "5 * 3");
        assert_eq!(render("[text] (no link)"), "[text] (no link)");
    }
}

//! Best-effort Markdown to HTML conversion for generated documents.
//!
//! The input is expected to be the output of [`crate::templates`]. Nothing is
//! escaped, so untrusted Markdown must be sanitized before it gets here.

mod html;
mod inline;
pub mod page;
mod scanner;

pub use page::render_page;
pub use scanner::parse;

/// Block-level structure recovered from the Markdown source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// `#`, `##` or `###` heading.
    Heading { level: u8, text: String },
    /// Consecutive text lines, later joined with line breaks.
    Paragraph(Vec<String>),
    /// `- ` and `N. ` items. Ordered and unordered lists are not distinguished.
    List(Vec<String>),
    /// Pipe-delimited rows with separator rows already removed. The first row
    /// is the header.
    Table(Vec<Vec<String>>),
    /// Lines that already start with a block-level HTML element.
    Html(Vec<String>),
}

/// Converts `markdown` to an HTML fragment, one block per line.
pub fn render(markdown: &str) -> String {
    html::emit(&parse(markdown))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emphasis_inside_paragraph() {
        assert_eq!(
            render("**bold** and *italic*"),
            "<p><strong>bold</strong> and <em>italic</em></p>"
        );
    }

    #[test]
    fn table_drops_separator_and_promotes_header() {
        let html = render("| A | B |\n|---|:-:|\n| 1 | 2 |\n");
        assert_eq!(
            html,
            "<table>\n<tr><th>A</th><th>B</th></tr>\n<tr><td>1</td><td>2</td></tr>\n</table>"
        );
    }

    #[test]
    fn blocks_are_joined_by_newlines() {
        let html = render("# Title\n\nFirst line\nsecond line\n\n- one\n2. two\n");
        assert_eq!(
            html,
            "<h1>Title</h1>\n<p>First line<br>second line</p>\n<ul>\n<li>one</li>\n<li>two</li>\n</ul>"
        );
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert_eq!(render(""), "");
        assert_eq!(render("\n\n  \n"), "");
    }
}

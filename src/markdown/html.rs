use super::{inline, Block};

/// Emits the HTML of `blocks`, separated by newlines.
pub fn emit(blocks: &[Block]) -> String {
    blocks.iter().map(block).collect::<Vec<_>>().join("\n")
}

fn block(block: &Block) -> String {
    match block {
        Block::Heading { level, text } => format!("<h{level}>{}</h{level}>", inline::render(text)),
        Block::Paragraph(lines) => {
            let body: Vec<String> = lines.iter().map(|line| inline::render(line)).collect();
            format!("<p>{}</p>", body.join("<br>"))
        }
        Block::List(items) => {
            let mut out = String::from("<ul>\n");
            for item in items {
                out.push_str(&format!("<li>{}</li>\n", inline::render(item)));
            }
            out.push_str("</ul>");
            out
        }
        Block::Table(rows) => {
            let mut out = String::from("<table>\n");
            for (index, row) in rows.iter().enumerate() {
                let tag = if index == 0 { "th" } else { "td" };
                out.push_str("<tr>");
                for cell in row {
                    out.push_str(&format!("<{tag}>{}</{tag}>", inline::render(cell)));
                }
                out.push_str("</tr>\n");
            }
            out.push_str("</table>");
            out
        }
        Block::Html(lines) => lines.join("\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_cells_get_inline_spans() {
        let html = emit(&[Block::Table(vec![
            vec!["Cookie".into(), "Purpose".into()],
            vec!["**_ga**".into(), "Distinguishes users".into()],
        ])]);
        assert_eq!(
            html,
            "<table>\n<tr><th>Cookie</th><th>Purpose</th></tr>\n<tr><td><strong>_ga</strong></td><td>Distinguishes users</td></tr>\n</table>"
        );
    }

    #[test]
    fn html_passes_through_untouched() {
        let html = emit(&[Block::Html(vec!["<div>**raw**</div>".into()])]);
        assert_eq!(html, "<div>**raw**</div>");
    }

    #[test]
    fn heading_level_is_kept() {
        let html = emit(&[Block::Heading { level: 2, text: "Contact Us".into() }]);
        assert_eq!(html, "<h2>Contact Us</h2>");
    }
}

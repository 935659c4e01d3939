mod utils;

#[cfg(test)]
mod tests {
    use crate::utils::acme_with;
    use serde_json::json;
    use shieldpage::markdown::{parse, render, render_page, Block};
    use shieldpage::templates::cookie_policy;
    use test_log::test;

    #[test]
    fn bold_and_italic_paragraph() {
        assert_eq!(render("**bold** and *italic*"), "<p><strong>bold</strong> and <em>italic</em></p>");
    }

    #[test]
    fn separator_row_is_dropped_and_header_promoted() {
        let html = render("| Cookie | Purpose |\n|---|---|\n| a | b |\n| c | d |");
        assert_eq!(html.matches("<tr>").count(), 3);
        assert!(html.contains("<tr><th>Cookie</th><th>Purpose</th></tr>"));
        assert!(html.contains("<tr><td>a</td><td>b</td></tr>"));
        assert!(!html.contains("---"));
    }

    #[test]
    fn ordered_items_render_unordered() {
        let html = render("1. Email us\n2. Wait");
        assert_eq!(html, "<ul>\n<li>Email us</li>\n<li>Wait</li>\n</ul>");
        assert!(!html.contains("<ol>"));
    }

    #[test]
    fn generated_cookie_policy_renders_cleanly() {
        let doc = cookie_policy(&acme_with(json!({ "usesAnalytics": true, "analyticsProvider": "Google Analytics" })));
        let html = render(&doc);
        assert!(html.starts_with("<h1>Cookie Policy</h1>\n<p><strong>Last Updated:</strong> January 1, 2026</p>"));
        assert!(html.contains("<tr><th>Cookie</th><th>Purpose</th><th>Duration</th></tr>"));
        assert!(html.contains("<a href=\"https://tools.google.com/dlpage/gaoptout\" target=\"_blank\" rel=\"noopener\">"));
        assert!(!html.contains("**"));
        assert!(!html.contains("<p></p>"));
    }

    #[test]
    fn every_table_run_has_one_header_row() {
        let doc = cookie_policy(&acme_with(json!({ "usesAnalytics": true, "usesAds": true })));
        let tables = parse(&doc)
            .into_iter()
            .filter_map(|block| match block {
                Block::Table(rows) => Some(rows),
                _ => None,
            })
            .collect::<Vec<_>>();
        assert_eq!(tables.len(), 4);
        for rows in tables {
            assert_eq!(rows[0], vec!["Cookie", "Purpose", "Duration"]);
            assert!(rows[1..].iter().all(|row| row[0] != "Cookie"));
        }
    }

    #[test]
    fn export_page_wraps_rendered_body() {
        let page = render_page("Cookie Policy", "# Cookie Policy\n\n*soon*").unwrap();
        assert!(page.contains("<title>Cookie Policy</title>"));
        assert!(page.contains("<h1>Cookie Policy</h1>\n<p><em>soon</em></p>"));
        assert!(page.trim_end().ends_with("</html>"));
    }
}

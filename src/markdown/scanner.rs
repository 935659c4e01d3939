use super::Block;
use regex::Regex;
use std::sync::OnceLock;

static HEADING: OnceLock<Regex> = OnceLock::new();
static LIST_ITEM: OnceLock<Regex> = OnceLock::new();
static TABLE_ROW: OnceLock<Regex> = OnceLock::new();
static SEPARATOR_CELL: OnceLock<Regex> = OnceLock::new();
static HTML_BLOCK: OnceLock<Regex> = OnceLock::new();

fn pattern(cell: &'static OnceLock<Regex>, source: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(source).expect("markdown block pattern is valid"))
}

/// One classified source line.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Blank,
    Heading(u8, &'a str),
    Item(&'a str),
    Row(Option<Vec<String>>),
    Html(&'a str),
    Text(&'a str),
}

fn classify(line: &str) -> Line<'_> {
    let line = line.trim_end();
    if line.trim().is_empty() {
        return Line::Blank;
    }
    if let Some(caps) = pattern(&HEADING, r"^(#{1,3}) (.+)$").captures(line) {
        let level = caps[1].len() as u8;
        let text = caps.get(2).map_or("", |m| m.as_str());
        return Line::Heading(level, text);
    }
    if let Some(caps) = pattern(&LIST_ITEM, r"^(?:- |\d+\. )(.+)$").captures(line) {
        return Line::Item(caps.get(1).map_or("", |m| m.as_str()));
    }
    if pattern(&TABLE_ROW, r"^\|.+\|$").is_match(line) {
        return Line::Row(table_cells(line));
    }
    if pattern(&HTML_BLOCK, r"^<(h[1-6]|ul|ol|table|div|blockquote)").is_match(line) {
        return Line::Html(line);
    }
    Line::Text(line.trim())
}

/// Splits a pipe row into trimmed, non-empty cells.
///
/// Returns `None` for alignment separator rows such as `|---|:-:|`.
fn table_cells(line: &str) -> Option<Vec<String>> {
    let cells: Vec<String> = line
        .split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(String::from)
        .collect();
    let separator = pattern(&SEPARATOR_CELL, r"^[-:]+$");
    if cells.iter().all(|cell| separator.is_match(cell)) {
        None
    } else {
        Some(cells)
    }
}

/// Line scanner holding the block currently being built.
#[derive(Default)]
struct Scanner {
    blocks: Vec<Block>,
    open: Option<Block>,
}

impl Scanner {
    fn feed(&mut self, line: Line<'_>) {
        match line {
            Line::Blank => self.close(),
            Line::Heading(level, text) => {
                self.close();
                self.blocks.push(Block::Heading { level, text: text.to_string() });
            }
            Line::Item(item) => {
                if let Some(Block::List(items)) = &mut self.open {
                    items.push(item.to_string());
                } else {
                    self.open(Block::List(vec![item.to_string()]));
                }
            }
            Line::Row(row) => {
                if let Some(Block::Table(rows)) = &mut self.open {
                    rows.extend(row);
                } else {
                    self.open(Block::Table(row.into_iter().collect()));
                }
            }
            Line::Html(raw) => {
                if let Some(Block::Html(lines)) = &mut self.open {
                    lines.push(raw.to_string());
                } else {
                    self.open(Block::Html(vec![raw.to_string()]));
                }
            }
            Line::Text(text) => match &mut self.open {
                Some(Block::Html(lines) | Block::Paragraph(lines)) => lines.push(text.to_string()),
                _ => self.open(Block::Paragraph(vec![text.to_string()])),
            },
        }
    }

    fn open(&mut self, block: Block) {
        self.close();
        self.open = Some(block);
    }

    fn close(&mut self) {
        match self.open.take() {
            // A run made only of separator rows leaves nothing to show.
            Some(Block::Table(rows)) if rows.is_empty() => {}
            Some(block) => self.blocks.push(block),
            None => {}
        }
    }

    fn finish(mut self) -> Vec<Block> {
        self.close();
        self.blocks
    }
}

/// Scans `markdown` line by line into blocks.
///
/// A heading always stands alone. List items and table rows group with
/// their neighbours of the same kind and interrupt an open paragraph. An
/// HTML block runs until the next blank line.
pub fn parse(markdown: &str) -> Vec<Block> {
    let mut scanner = Scanner::default();
    for line in markdown.lines() {
        scanner.feed(classify(line));
    }
    scanner.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_levels_stop_at_three() {
        assert_eq!(
            parse("### Deep\n#### Deeper\n#NoSpace"),
            vec![
                Block::Heading { level: 3, text: "Deep".into() },
                Block::Paragraph(vec!["#### Deeper".into(), "#NoSpace".into()]),
            ]
        );
    }

    #[test]
    fn separator_rows_dropped_anywhere_in_run() {
        let blocks = parse("| A | B |\n|---|---|\n| 1 | 2 |\n| :-- | --: |\n| 3 | 4 |");
        assert_eq!(
            blocks,
            vec![Block::Table(vec![
                vec!["A".into(), "B".into()],
                vec!["1".into(), "2".into()],
                vec!["3".into(), "4".into()],
            ])]
        );
    }

    #[test]
    fn separator_only_table_vanishes() {
        assert!(parse("|---|---|").is_empty());
    }

    #[test]
    fn list_interrupts_paragraph() {
        assert_eq!(
            parse("Intro:\n- a\n- b\nafter"),
            vec![
                Block::Paragraph(vec!["Intro:".into()]),
                Block::List(vec!["a".into(), "b".into()]),
                Block::Paragraph(vec!["after".into()]),
            ]
        );
    }

    #[test]
    fn numbered_and_bulleted_items_share_a_list() {
        assert_eq!(
            parse("1. first\n- second\n10. third"),
            vec![Block::List(vec!["first".into(), "second".into(), "third".into()])]
        );
    }

    #[test]
    fn html_block_runs_to_blank_line() {
        assert_eq!(
            parse("<div class=\"note\">\nkept as is\n</div>\n\ntext"),
            vec![
                Block::Html(vec!["<div class=\"note\">".into(), "kept as is".into(), "</div>".into()]),
                Block::Paragraph(vec!["text".into()]),
            ]
        );
    }

    #[test]
    fn inline_html_is_not_a_block() {
        assert_eq!(classify("<span>x</span>"), Line::Text("<span>x</span>"));
        assert_eq!(classify("<h4>x</h4>"), Line::Html("<h4>x</h4>"));
    }
}

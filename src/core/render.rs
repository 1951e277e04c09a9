// SentiView - core/render.rs
//
// Windowed rendering of filtered rows into a preview table, plus an HTML
// rendering of that table for headless use.
// Core layer: pure functions, no I/O.

use crate::core::model::{ParseResult, PreviewLimit, PreviewRow, PreviewTable};
use std::fmt::Write as _;

/// Render the first `limit` filtered rows.
///
/// Produces exactly `min(limit, rows)` lines. The result is rebuilt from
/// scratch on every call, so calling it again with the same arguments yields
/// an identical table.
pub fn render(result: &ParseResult, limit: PreviewLimit) -> PreviewTable {
    let rows = result
        .rows
        .iter()
        .take(limit.get())
        .enumerate()
        .map(|(i, row)| PreviewRow {
            display_index: i + 1,
            value: i,
            hit: row.field(result.columns.hit).to_string(),
            sentiment: row.field(result.columns.sentiment).to_string(),
        })
        .collect();
    PreviewTable { rows }
}

/// Render a preview table as an HTML `<table>`.
///
/// Column order: row number, selection checkbox (value = 0-based filtered
/// index), hit sentence, sentiment.
pub fn to_html(table: &PreviewTable) -> String {
    let mut out = String::with_capacity(256 + table.len() * 128);
    out.push_str("<table class=\"preview\">\n");
    out.push_str(
        "  <thead><tr><th>#</th><th></th><th>Hit Sentence</th><th>Sentiment</th></tr></thead>\n",
    );
    out.push_str("  <tbody>\n");
    for row in &table.rows {
        // Writing to a String cannot fail.
        let _ = writeln!(
            out,
            "    <tr><td>{}</td><td><input type=\"checkbox\" name=\"selected_rows\" value=\"{}\"></td><td>{}</td><td>{}</td></tr>",
            row.display_index,
            row.value,
            escape_html(&row.hit),
            escape_html(&row.sentiment),
        );
    }
    out.push_str("  </tbody>\n</table>\n");
    out
}

fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parser::parse_content;

    fn limit(n: usize) -> PreviewLimit {
        PreviewLimit::new(n).unwrap()
    }

    fn sample(n: usize) -> ParseResult {
        let mut raw = String::from("Sentiment\tHit Sentence\n");
        for i in 0..n {
            raw.push_str(&format!("s{i},hit {i}\n"));
        }
        parse_content(&raw).unwrap()
    }

    #[test]
    fn test_scenario_single_row() {
        let result =
            parse_content("Hit Sentence\tSentiment\nRT hello,positive\nhi there,negative").unwrap();
        let table = render(&result, limit(10));
        assert_eq!(
            table.rows,
            vec![PreviewRow {
                display_index: 1,
                value: 0,
                hit: "hi there".to_string(),
                sentiment: "negative".to_string(),
            }]
        );
    }

    #[test]
    fn test_limit_bounds_rows() {
        let result = sample(30);
        let table = render(&result, limit(25));
        assert_eq!(table.len(), 25);
        assert_eq!(table.rows[24].display_index, 25);
        assert_eq!(table.rows[24].value, 24);
        assert_eq!(table.rows[24].hit, "hit 24");
        assert_eq!(table.rows[24].sentiment, "s24");
    }

    #[test]
    fn test_limit_larger_than_rows_renders_all() {
        let result = sample(3);
        assert_eq!(render(&result, limit(100)).len(), 3);
    }

    #[test]
    fn test_render_is_idempotent_and_replacing() {
        let result = sample(12);
        let first = render(&result, limit(10));
        let again = render(&result, limit(10));
        assert_eq!(first, again);

        let smaller = render(&result, limit(5));
        assert_eq!(smaller.len(), 5);
        let larger = render(&result, limit(50));
        assert_eq!(larger.len(), 12);
    }

    #[test]
    fn test_missing_fields_render_empty() {
        let result = parse_content("Hit Sentence\tSentiment\nonly hit").unwrap();
        let table = render(&result, limit(10));
        assert_eq!(table.rows[0].hit, "only hit");
        assert_eq!(table.rows[0].sentiment, "");
    }

    #[test]
    fn test_html_contract_and_escaping() {
        let result =
            parse_content("Hit Sentence\tSentiment\n<b>Tom & \"Jerry\"</b>,positive").unwrap();
        let html = to_html(&render(&result, limit(10)));
        assert!(html.contains("<th>#</th><th></th><th>Hit Sentence</th><th>Sentiment</th>"));
        assert!(html.contains(
            "<td>1</td><td><input type=\"checkbox\" name=\"selected_rows\" value=\"0\"></td>"
        ));
        assert!(html.contains("&lt;b&gt;Tom &amp; &quot;Jerry&quot;&lt;/b&gt;"));
        assert!(!html.contains("<b>Tom"));
        assert_eq!(html.matches("<tr>").count(), 2);
    }
}

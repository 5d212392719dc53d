//! Layout adapters over [`RowSink`](crate::render::RowSink).
//!
//! The table and flex layouts are the two historical page variants; both
//! are thin string builders over the same engine output.

use crate::render::{RenderRow, RowSink};

/// Escape text for safe interpolation into markup
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Table-row layout: one `<tr>` per render row
#[derive(Debug, Default)]
pub struct HtmlTableSink {
    rows: Vec<String>,
}

impl HtmlTableSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The accumulated `<tbody>` markup
    pub fn finish(&self) -> String {
        format!("<tbody>{}</tbody>", self.rows.concat())
    }

    fn markup(row: &RenderRow) -> String {
        match row {
            RenderRow::Meta { left, right } => format!(
                "<tr class=\"meta\"><td>{}</td><td>{}</td></tr>",
                escape_html(left),
                escape_html(right)
            ),
            RenderRow::Verse { left, right } => format!(
                "<tr><td>{}</td><td>{}</td></tr>",
                escape_html(left),
                escape_html(right)
            ),
            RenderRow::Notice { message } => format!(
                "<tr class=\"notice\"><td colspan=\"2\">{}</td></tr>",
                escape_html(message)
            ),
        }
    }
}

impl RowSink for HtmlTableSink {
    fn append(&mut self, row: RenderRow) {
        self.rows.push(Self::markup(&row));
    }

    fn insert_top(&mut self, row: RenderRow) {
        self.rows.insert(0, Self::markup(&row));
    }
}

/// Flex-row layout: one `<div class="row">` per render row
#[derive(Debug, Default)]
pub struct HtmlFlexSink {
    rows: Vec<String>,
}

impl HtmlFlexSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The accumulated row markup
    pub fn finish(&self) -> String {
        self.rows.concat()
    }

    fn markup(row: &RenderRow) -> String {
        match row {
            RenderRow::Meta { left, right } => format!(
                "<div class=\"row meta\"><div class=\"cell main\">{}</div>\
                 <div class=\"cell second\">{}</div></div>",
                escape_html(left),
                escape_html(right)
            ),
            RenderRow::Verse { left, right } => format!(
                "<div class=\"row\"><div class=\"cell main\">{}</div>\
                 <div class=\"cell second\">{}</div></div>",
                escape_html(left),
                escape_html(right)
            ),
            RenderRow::Notice { message } => format!(
                "<div class=\"row notice\">{}</div>",
                escape_html(message)
            ),
        }
    }
}

impl RowSink for HtmlFlexSink {
    fn append(&mut self, row: RenderRow) {
        self.rows.push(Self::markup(&row));
    }

    fn insert_top(&mut self, row: RenderRow) {
        self.rows.insert(0, Self::markup(&row));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verse(left: &str, right: &str) -> RenderRow {
        RenderRow::Verse {
            left: left.to_string(),
            right: right.to_string(),
        }
    }

    #[test]
    fn test_table_layout() {
        let mut sink = HtmlTableSink::new();
        sink.append(verse("1 E eu, Néfi", "1 Moi, Néphi"));
        sink.insert_top(RenderRow::Meta {
            left: "Introdução".to_string(),
            right: "Introduction".to_string(),
        });
        let html = sink.finish();
        assert!(html.starts_with("<tbody><tr class=\"meta\">"));
        assert!(html.contains("<td>1 E eu, Néfi</td><td>1 Moi, Néphi</td>"));
    }

    #[test]
    fn test_flex_layout_notice() {
        let mut sink = HtmlFlexSink::new();
        sink.append(RenderRow::Notice {
            message: "Could not load".to_string(),
        });
        assert_eq!(
            sink.finish(),
            "<div class=\"row notice\">Could not load</div>"
        );
    }

    #[test]
    fn test_markup_is_escaped() {
        let mut sink = HtmlTableSink::new();
        sink.append(verse("<b>bold</b> & more", ""));
        let html = sink.finish();
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt; &amp; more"));
        assert!(!html.contains("<b>"));
    }
}

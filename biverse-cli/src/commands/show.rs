//! Show command: render one bilingual chapter page to the terminal

use anyhow::{bail, Context, Result};
use biverse_core::render::{RenderRow, RowBuffer, RowSink};
use biverse_core::sinks::{HtmlFlexSink, HtmlTableSink};
use biverse_core::{
    BookRegistry, EngineConfig, HttpContentService, PageEngine, PageRequest, PageView,
};
use std::sync::Arc;

/// Total line width of the text layout
const TEXT_WIDTH: usize = 96;

enum Layout {
    Text,
    Table,
    Flex,
}

impl Layout {
    fn parse(layout: &str) -> Result<Self> {
        match layout {
            "text" => Ok(Self::Text),
            "table" => Ok(Self::Table),
            "flex" => Ok(Self::Flex),
            other => bail!("Unknown layout '{}': expected text, table or flex", other),
        }
    }
}

/// Render a chapter with the requested layout
pub async fn show(
    book: &str,
    chapter: u32,
    main: Option<String>,
    second: Option<String>,
    layout: &str,
) -> Result<()> {
    let layout = Layout::parse(layout)?;
    let config = EngineConfig::from_env();
    let service = Arc::new(
        HttpContentService::new(&config).context("Failed to build content-service client")?,
    );
    let engine = PageEngine::new(BookRegistry::book_of_mormon(), config, service);

    let mut request = PageRequest::new(book, chapter);
    request.main = main;
    request.second = second;

    // A one-shot command is a single load sequence; no stale views to latch
    let mut buffer = RowBuffer::new();
    let view = engine.load(&request, &mut buffer).await;

    match layout {
        Layout::Text => {
            let mut sink = TerminalSink::new(TEXT_WIDTH);
            buffer.drain_into(&mut sink);
            print_text_page(&view, &sink.finish());
        }
        Layout::Table => {
            let mut sink = HtmlTableSink::new();
            buffer.drain_into(&mut sink);
            println!("{}", sink.finish());
        }
        Layout::Flex => {
            let mut sink = HtmlFlexSink::new();
            buffer.drain_into(&mut sink);
            println!("{}", sink.finish());
        }
    }

    Ok(())
}

fn print_text_page(view: &PageView, body: &str) {
    println!(
        "{} ({}) | {} / {}",
        view.header.book_name, view.header.chapter_label, view.main_language, view.second_language
    );
    println!("{}", "=".repeat(TEXT_WIDTH));
    println!("{}", body);
    println!("{}", "=".repeat(TEXT_WIDTH));

    let prev = view
        .nav
        .prev
        .as_ref()
        .map_or("-".to_string(), |r| r.to_string());
    let next = view
        .nav
        .next
        .as_ref()
        .map_or("-".to_string(), |r| r.to_string());
    println!("prev: {}   next: {}", prev, next);
}

/// Two-column terminal layout over the engine's row sink
pub struct TerminalSink {
    column_width: usize,
    blocks: Vec<String>,
}

impl TerminalSink {
    pub fn new(total_width: usize) -> Self {
        // Two columns and a 3-character gutter
        Self {
            column_width: (total_width.max(20) - 3) / 2,
            blocks: Vec::new(),
        }
    }

    pub fn finish(&self) -> String {
        self.blocks.join("\n\n")
    }

    fn block(&self, row: &RenderRow) -> String {
        match row {
            RenderRow::Meta { left, right } | RenderRow::Verse { left, right } => {
                side_by_side(left, right, self.column_width)
            }
            RenderRow::Notice { message } => format!("!! {}", message),
        }
    }
}

impl RowSink for TerminalSink {
    fn append(&mut self, row: RenderRow) {
        let block = self.block(&row);
        self.blocks.push(block);
    }

    fn insert_top(&mut self, row: RenderRow) {
        let block = self.block(&row);
        self.blocks.insert(0, block);
    }
}

/// Lay two texts out as aligned columns separated by a gutter
fn side_by_side(left: &str, right: &str, width: usize) -> String {
    let left_lines = wrap(left, width);
    let right_lines = wrap(right, width);
    let line_count = left_lines.len().max(right_lines.len()).max(1);

    (0..line_count)
        .map(|i| {
            let l = left_lines.get(i).map_or("", |s| s.as_str());
            let r = right_lines.get(i).map_or("", |s| s.as_str());
            format!("{} | {}", pad(l, width), r).trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Greedy word wrap; words longer than the width stay unbroken
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if line.is_empty() {
            line = word.to_string();
        } else if line.chars().count() + 1 + word.chars().count() <= width {
            line.push(' ');
            line.push_str(word);
        } else {
            lines.push(std::mem::take(&mut line));
            line = word.to_string();
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Pad to a char count, not a byte count, so accented text stays aligned
fn pad(text: &str, width: usize) -> String {
    let chars = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(chars)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_splits_on_words() {
        assert_eq!(wrap("one two three", 7), vec!["one two", "three"]);
        assert_eq!(wrap("", 7), Vec::<String>::new());
        // Overlong words stay unbroken
        assert_eq!(wrap("incompreensivelmente", 5), vec!["incompreensivelmente"]);
    }

    #[test]
    fn test_side_by_side_fills_missing_lines() {
        let block = side_by_side("um dois tres quatro", "un", 10);
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "um dois    | un");
        // The shorter side runs out and renders empty
        assert_eq!(lines[1], "tres       |");
        assert_eq!(lines[2], "quatro     |");
    }

    #[test]
    fn test_sink_orders_meta_first() {
        let mut sink = TerminalSink::new(40);
        sink.append(RenderRow::Verse {
            left: "verse".to_string(),
            right: "verset".to_string(),
        });
        sink.insert_top(RenderRow::Meta {
            left: "intro".to_string(),
            right: String::new(),
        });
        let out = sink.finish();
        assert!(out.find("intro").unwrap() < out.find("verse").unwrap());
    }
}

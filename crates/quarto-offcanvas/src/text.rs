/*
 * text.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Plain-text flattening of inlines and blocks.

use offcanvas_pandoc_types::{Block, Inline, QuoteType};

/// Longest trigger text kept verbatim.
const TRIGGER_TEXT_LIMIT: usize = 30;
/// Characters kept before the ellipsis when truncating.
const TRIGGER_TEXT_KEEP: usize = 27;
/// Characters of content considered when deriving a trigger text.
const TRIGGER_TEXT_SAMPLE: usize = 50;

/// Convert inlines to plain text.
pub fn stringify_inlines(inlines: &[Inline]) -> String {
    let mut result = String::new();
    push_inlines(inlines, &mut result);
    result
}

/// Convert blocks to plain text, one line per block.
pub fn stringify_blocks(blocks: &[Block]) -> String {
    let mut parts = Vec::new();
    for block in blocks {
        let text = stringify_block(block);
        if !text.is_empty() {
            parts.push(text);
        }
    }
    parts.join("\n")
}

fn stringify_block(block: &Block) -> String {
    match block {
        Block::Plain(content) | Block::Para(content) | Block::Header(_, _, content) => {
            stringify_inlines(content)
        }
        Block::LineBlock(lines) => lines
            .iter()
            .map(|line| stringify_inlines(line))
            .collect::<Vec<_>>()
            .join("\n"),
        Block::CodeBlock(_, text) => text.clone(),
        Block::BlockQuote(content) | Block::Div(_, content) | Block::Figure(_, _, content) => {
            stringify_blocks(content)
        }
        Block::OrderedList(_, items) | Block::BulletList(items) => items
            .iter()
            .map(|item| stringify_blocks(item))
            .collect::<Vec<_>>()
            .join("\n"),
        Block::DefinitionList(items) => items
            .iter()
            .map(|(term, defs)| {
                let mut text = stringify_inlines(term);
                for def in defs {
                    text.push('\n');
                    text.push_str(&stringify_blocks(def));
                }
                text
            })
            .collect::<Vec<_>>()
            .join("\n"),
        Block::Table(_, _, _, head, bodies, foot) => {
            let rows = head
                .1
                .iter()
                .chain(bodies.iter().flat_map(|body| body.2.iter().chain(body.3.iter())))
                .chain(foot.1.iter());
            rows.map(|row| {
                row.1
                    .iter()
                    .map(|cell| stringify_blocks(&cell.4))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
        }
        // Raw output and rules carry no readable text
        Block::RawBlock(_, _) | Block::HorizontalRule => String::new(),
    }
}

fn push_inlines(inlines: &[Inline], out: &mut String) {
    for inline in inlines {
        match inline {
            Inline::Str(text) => out.push_str(text),
            Inline::Space | Inline::SoftBreak | Inline::LineBreak => out.push(' '),
            Inline::Emph(content)
            | Inline::Underline(content)
            | Inline::Strong(content)
            | Inline::Strikeout(content)
            | Inline::Superscript(content)
            | Inline::Subscript(content)
            | Inline::SmallCaps(content)
            | Inline::Cite(_, content)
            | Inline::Link(_, content, _)
            | Inline::Image(_, content, _)
            | Inline::Span(_, content) => push_inlines(content, out),
            Inline::Quoted(quote_type, content) => {
                let (open, close) = match quote_type {
                    QuoteType::SingleQuote => ('\u{2018}', '\u{2019}'),
                    QuoteType::DoubleQuote => ('\u{201C}', '\u{201D}'),
                };
                out.push(open);
                push_inlines(content, out);
                out.push(close);
            }
            Inline::Code(_, text) | Inline::Math(_, text) => out.push_str(text),
            // Notes and raw markup are not part of the visible running text
            Inline::Note(_) | Inline::RawInline(_, _) => {}
        }
    }
}

/// Collapse runs of whitespace to single spaces and trim.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Derive a short trigger label from a note's flattened text.
///
/// The first 50 characters are considered; anything longer than 30
/// characters is cut to 27 characters plus `...`.
pub fn trigger_text_from_content(text: &str) -> String {
    let sample: String = collapse_whitespace(text)
        .chars()
        .take(TRIGGER_TEXT_SAMPLE)
        .collect();
    if sample.chars().count() > TRIGGER_TEXT_LIMIT {
        let kept: String = sample.chars().take(TRIGGER_TEXT_KEEP).collect();
        format!("{}...", kept)
    } else {
        sample
    }
}

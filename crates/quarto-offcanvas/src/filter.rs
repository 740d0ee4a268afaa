/*
 * filter.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Dispatch of offcanvas divs and margin notes.
 */

//! Offcanvas dispatch.
//!
//! Walks the document bottom-up and rewrites two kinds of element:
//!
//! - `::: {.offcanvas}` divs become a trigger plus a panel, wrapped in a
//!   plain grouping div.
//! - Margin content (`.column-margin`, `.aside`, `.margin-aside`) is moved
//!   into a panel when `overtake-margins` is on. A trigger marked with the
//!   original margin classes is left in its place, followed by the panel.
//!
//! Children are rewritten before their parent, so a panel nested inside
//! another panel is already synthesized when the outer one is partitioned.
//! Nothing is touched when the target cannot host offcanvas panels.
//!
//! Explicit panels are recognized on divs only. Spans carrying the
//! `offcanvas` class are left alone.

use offcanvas_pandoc_types::{Attr, Block, Caption, Inline, Pandoc, empty_attr};

use crate::Result;
use crate::context::OffcanvasContext;
use crate::options::{PanelConfig, TriggerPosition, local_value, resolve};
use crate::outline::protect_headings;
use crate::partition::{ContentSplit, partition_with_title};
use crate::synthesize::{synthesize, synthesize_inline, synthesize_trigger, trigger_markup};
use crate::text::{stringify_blocks, stringify_inlines, trigger_text_from_content};
use crate::transform::AstTransform;

/// Class marking an explicit panel.
pub const PANEL_CLASS: &str = "offcanvas";

/// Classes marking margin content.
pub const MARGIN_CLASSES: [&str; 3] = ["column-margin", "aside", "margin-aside"];

/// Trigger text and title used for margin panels with nothing better.
pub const MARGIN_PANEL_LABEL: &str = "Note";

/// What the dispatcher does with an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    ExplicitPanel,
    /// Margin content to overtake; holds the margin classes found.
    MarginCandidate(Vec<String>),
    Ordinary,
}

/// Classify an element by its attributes.
///
/// The panel class wins over margin classes. Margin classes only count
/// when `overtake_margins` is set.
pub fn classify(attr: &Attr, overtake_margins: bool) -> Classification {
    let classes = &attr.1;
    if classes.iter().any(|c| c == PANEL_CLASS) {
        return Classification::ExplicitPanel;
    }
    if overtake_margins {
        let markers: Vec<String> = classes
            .iter()
            .filter(|c| MARGIN_CLASSES.contains(&c.as_str()))
            .cloned()
            .collect();
        if !markers.is_empty() {
            return Classification::MarginCandidate(markers);
        }
    }
    Classification::Ordinary
}

fn panel_id(attr: &Attr, ctx: &mut OffcanvasContext) -> String {
    if attr.0.is_empty() {
        ctx.next_identifier()
    } else {
        ctx.reserve_identifier(&attr.0);
        attr.0.clone()
    }
}

fn marker_attr(markers: Vec<String>) -> Attr {
    (String::new(), markers, vec![])
}

/// Trigger text of a margin panel: local override, else derived from the
/// content, else the fallback label.
fn margin_trigger_text(attr: &Attr, content_text: impl FnOnce() -> String) -> String {
    if let Some(text) = local_value(&attr.2, "trigger-text") {
        return text.to_string();
    }
    let derived = trigger_text_from_content(&content_text());
    if derived.is_empty() {
        MARGIN_PANEL_LABEL.to_string()
    } else {
        derived
    }
}

/// Resolve options for a margin panel. Margin triggers are always shown.
fn margin_config(
    attr: &Attr,
    content_text: impl FnOnce() -> String,
    ctx: &mut OffcanvasContext,
) -> PanelConfig {
    let id = panel_id(attr, ctx);
    let mut config = resolve(id, &attr.2, &ctx.defaults, &mut ctx.warnings);
    config.trigger_position = TriggerPosition::Inline;
    config.trigger_text = margin_trigger_text(attr, content_text);
    config
}

fn explicit_panel(attr: Attr, content: Vec<Block>, ctx: &mut OffcanvasContext) -> Vec<Block> {
    let id = panel_id(&attr, ctx);
    let config = resolve(id, &attr.2, &ctx.defaults, &mut ctx.warnings);

    let split = partition_with_title(content, config.header_text.as_deref());
    let split = ContentSplit {
        header_text: split.header_text,
        body_blocks: protect_headings(split.body_blocks, Some(config.id.as_str())),
        footer_blocks: protect_headings(split.footer_blocks, None),
    };

    let container = synthesize(&config, split);
    match synthesize_trigger(&config) {
        Some(trigger) => vec![Block::Div(
            empty_attr(),
            vec![Block::raw_html(trigger), container],
        )],
        None => vec![container],
    }
}

fn margin_block(
    attr: Attr,
    content: Vec<Block>,
    markers: Vec<String>,
    ctx: &mut OffcanvasContext,
) -> Vec<Block> {
    let config = margin_config(&attr, || stringify_blocks(&content), ctx);
    let title = config
        .header_text
        .clone()
        .unwrap_or_else(|| MARGIN_PANEL_LABEL.to_string());
    let trigger = Block::Div(
        marker_attr(markers),
        vec![Block::raw_html(trigger_markup(&config))],
    );
    let split = ContentSplit {
        header_text: Some(title),
        body_blocks: content,
        footer_blocks: vec![],
    };
    tracing::debug!(id = %config.id, "Moving margin content into offcanvas panel");
    vec![trigger, synthesize(&config, split)]
}

fn margin_inline(
    attr: Attr,
    content: Vec<Inline>,
    markers: Vec<String>,
    ctx: &mut OffcanvasContext,
) -> Vec<Inline> {
    let config = margin_config(&attr, || stringify_inlines(&content), ctx);
    let title = config.header_text.as_deref().unwrap_or(MARGIN_PANEL_LABEL);
    let trigger = Inline::Span(
        marker_attr(markers),
        vec![Inline::raw_html(trigger_markup(&config))],
    );
    tracing::debug!(id = %config.id, "Moving margin note into offcanvas panel");
    let panel = synthesize_inline(&config, Some(title), content);
    vec![trigger, panel]
}

/// Rewrite one block. Returns the replacement sequence, which is the block
/// itself when nothing applies.
pub fn filter_block(block: Block, ctx: &mut OffcanvasContext) -> Vec<Block> {
    if !ctx.is_enabled() {
        return vec![block];
    }
    let (attr, content) = match block {
        Block::Div(attr, content) => (attr, content),
        other => return vec![other],
    };
    match classify(&attr, ctx.defaults.overtake_margins()) {
        Classification::ExplicitPanel => explicit_panel(attr, content, ctx),
        Classification::MarginCandidate(markers) => margin_block(attr, content, markers, ctx),
        Classification::Ordinary => vec![Block::Div(attr, content)],
    }
}

/// Rewrite one inline. Only margin spans are affected.
pub fn filter_inline(inline: Inline, ctx: &mut OffcanvasContext) -> Vec<Inline> {
    if !ctx.is_enabled() {
        return vec![inline];
    }
    let (attr, content) = match inline {
        Inline::Span(attr, content) => (attr, content),
        other => return vec![other],
    };
    match classify(&attr, ctx.defaults.overtake_margins()) {
        Classification::MarginCandidate(markers) => margin_inline(attr, content, markers, ctx),
        Classification::ExplicitPanel | Classification::Ordinary => {
            vec![Inline::Span(attr, content)]
        }
    }
}

/// Rewrite a block list, children first.
pub fn walk_blocks(blocks: Vec<Block>, ctx: &mut OffcanvasContext) -> Vec<Block> {
    let mut result = Vec::with_capacity(blocks.len());
    for block in blocks {
        let block = walk_block_children(block, ctx);
        result.extend(filter_block(block, ctx));
    }
    result
}

/// Rewrite an inline list, children first.
pub fn walk_inlines(inlines: Vec<Inline>, ctx: &mut OffcanvasContext) -> Vec<Inline> {
    let mut result = Vec::with_capacity(inlines.len());
    for inline in inlines {
        let inline = walk_inline_children(inline, ctx);
        result.extend(filter_inline(inline, ctx));
    }
    result
}

fn walk_items(items: Vec<Vec<Block>>, ctx: &mut OffcanvasContext) -> Vec<Vec<Block>> {
    items.into_iter().map(|item| walk_blocks(item, ctx)).collect()
}

fn walk_caption(caption: Caption, ctx: &mut OffcanvasContext) -> Caption {
    let Caption(short, long) = caption;
    let short = short.map(|inlines| walk_inlines(inlines, ctx));
    Caption(short, walk_blocks(long, ctx))
}

fn walk_block_children(block: Block, ctx: &mut OffcanvasContext) -> Block {
    match block {
        Block::Plain(content) => Block::Plain(walk_inlines(content, ctx)),
        Block::Para(content) => Block::Para(walk_inlines(content, ctx)),
        Block::LineBlock(lines) => Block::LineBlock(
            lines
                .into_iter()
                .map(|line| walk_inlines(line, ctx))
                .collect(),
        ),
        Block::Header(level, attr, content) => {
            Block::Header(level, attr, walk_inlines(content, ctx))
        }
        Block::BlockQuote(content) => Block::BlockQuote(walk_blocks(content, ctx)),
        Block::OrderedList(list_attr, items) => {
            Block::OrderedList(list_attr, walk_items(items, ctx))
        }
        Block::BulletList(items) => Block::BulletList(walk_items(items, ctx)),
        Block::DefinitionList(items) => Block::DefinitionList(
            items
                .into_iter()
                .map(|(term, defs)| (walk_inlines(term, ctx), walk_items(defs, ctx)))
                .collect(),
        ),
        Block::Figure(attr, caption, content) => {
            let caption = walk_caption(caption, ctx);
            Block::Figure(attr, caption, walk_blocks(content, ctx))
        }
        Block::Div(attr, content) => Block::Div(attr, walk_blocks(content, ctx)),
        Block::Table(attr, caption, specs, mut head, mut bodies, mut foot) => {
            let caption = walk_caption(caption, ctx);
            let rows = head
                .1
                .iter_mut()
                .chain(
                    bodies
                        .iter_mut()
                        .flat_map(|body| body.2.iter_mut().chain(body.3.iter_mut())),
                )
                .chain(foot.1.iter_mut());
            for row in rows {
                for cell in row.cells_mut() {
                    *cell = walk_blocks(std::mem::take(cell), ctx);
                }
            }
            Block::Table(attr, caption, specs, head, bodies, foot)
        }
        other @ (Block::CodeBlock(..) | Block::RawBlock(..) | Block::HorizontalRule) => other,
    }
}

fn walk_inline_children(inline: Inline, ctx: &mut OffcanvasContext) -> Inline {
    match inline {
        Inline::Emph(content) => Inline::Emph(walk_inlines(content, ctx)),
        Inline::Underline(content) => Inline::Underline(walk_inlines(content, ctx)),
        Inline::Strong(content) => Inline::Strong(walk_inlines(content, ctx)),
        Inline::Strikeout(content) => Inline::Strikeout(walk_inlines(content, ctx)),
        Inline::Superscript(content) => Inline::Superscript(walk_inlines(content, ctx)),
        Inline::Subscript(content) => Inline::Subscript(walk_inlines(content, ctx)),
        Inline::SmallCaps(content) => Inline::SmallCaps(walk_inlines(content, ctx)),
        Inline::Quoted(kind, content) => Inline::Quoted(kind, walk_inlines(content, ctx)),
        Inline::Cite(citations, content) => Inline::Cite(citations, walk_inlines(content, ctx)),
        Inline::Link(attr, content, target) => {
            Inline::Link(attr, walk_inlines(content, ctx), target)
        }
        Inline::Image(attr, content, target) => {
            Inline::Image(attr, walk_inlines(content, ctx), target)
        }
        Inline::Note(content) => Inline::Note(walk_blocks(content, ctx)),
        Inline::Span(attr, content) => Inline::Span(attr, walk_inlines(content, ctx)),
        other => other,
    }
}

/// Reserve every element id written in `blocks`, so generated panel ids
/// cannot collide with ids that appear later in the document.
pub fn reserve_ids(blocks: &[Block], ctx: &mut OffcanvasContext) {
    for block in blocks {
        reserve_block_ids(block, ctx);
    }
}

fn reserve_inline_ids(inlines: &[Inline], ctx: &mut OffcanvasContext) {
    for inline in inlines {
        match inline {
            Inline::Emph(content)
            | Inline::Underline(content)
            | Inline::Strong(content)
            | Inline::Strikeout(content)
            | Inline::Superscript(content)
            | Inline::Subscript(content)
            | Inline::SmallCaps(content)
            | Inline::Quoted(_, content)
            | Inline::Cite(_, content) => reserve_inline_ids(content, ctx),
            Inline::Link(attr, content, _)
            | Inline::Image(attr, content, _)
            | Inline::Span(attr, content) => {
                ctx.reserve_identifier(&attr.0);
                reserve_inline_ids(content, ctx);
            }
            Inline::Code(attr, _) => ctx.reserve_identifier(&attr.0),
            Inline::Note(content) => reserve_ids(content, ctx),
            _ => {}
        }
    }
}

fn reserve_caption_ids(caption: &Caption, ctx: &mut OffcanvasContext) {
    if let Some(short) = &caption.0 {
        reserve_inline_ids(short, ctx);
    }
    reserve_ids(&caption.1, ctx);
}

fn reserve_block_ids(block: &Block, ctx: &mut OffcanvasContext) {
    match block {
        Block::Plain(content) | Block::Para(content) => reserve_inline_ids(content, ctx),
        Block::LineBlock(lines) => {
            for line in lines {
                reserve_inline_ids(line, ctx);
            }
        }
        Block::CodeBlock(attr, _) => ctx.reserve_identifier(&attr.0),
        Block::Header(_, attr, content) => {
            ctx.reserve_identifier(&attr.0);
            reserve_inline_ids(content, ctx);
        }
        Block::BlockQuote(content) => reserve_ids(content, ctx),
        Block::OrderedList(_, items) | Block::BulletList(items) => {
            for item in items {
                reserve_ids(item, ctx);
            }
        }
        Block::DefinitionList(items) => {
            for (term, defs) in items {
                reserve_inline_ids(term, ctx);
                for def in defs {
                    reserve_ids(def, ctx);
                }
            }
        }
        Block::Figure(attr, caption, content) => {
            ctx.reserve_identifier(&attr.0);
            reserve_caption_ids(caption, ctx);
            reserve_ids(content, ctx);
        }
        Block::Div(attr, content) => {
            ctx.reserve_identifier(&attr.0);
            reserve_ids(content, ctx);
        }
        Block::Table(attr, caption, _, head, bodies, foot) => {
            ctx.reserve_identifier(&attr.0);
            reserve_caption_ids(caption, ctx);
            let rows = head
                .1
                .iter()
                .chain(bodies.iter().flat_map(|body| body.2.iter().chain(body.3.iter())))
                .chain(foot.1.iter());
            for row in rows {
                for cell in &row.1 {
                    reserve_ids(&cell.4, ctx);
                }
            }
        }
        Block::RawBlock(..) | Block::HorizontalRule => {}
    }
}

/// Rewrites panel divs and margin content.
pub struct OffcanvasTransform;

impl OffcanvasTransform {
    pub fn new() -> Self {
        Self
    }
}

impl Default for OffcanvasTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl AstTransform for OffcanvasTransform {
    fn name(&self) -> &str {
        "offcanvas"
    }

    fn transform(&self, ast: &mut Pandoc, ctx: &mut OffcanvasContext) -> Result<()> {
        if !ctx.is_enabled() {
            tracing::debug!(
                format = ctx.format.identifier.as_str(),
                bootstrap = ctx.format.has_bootstrap(),
                "Target cannot host offcanvas panels, leaving document unchanged"
            );
            return Ok(());
        }
        reserve_ids(&ast.blocks, ctx);
        let blocks = std::mem::take(&mut ast.blocks);
        ast.blocks = walk_blocks(blocks, ctx);
        Ok(())
    }
}

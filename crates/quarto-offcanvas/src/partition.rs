/*
 * partition.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Splitting panel content into header, body and footer.
//!
//! ```markdown
//! ::: {.offcanvas}
//! ## Title            <- header text (first heading before any divider)
//!
//! Body content.
//!
//! ---                <- first divider: body/footer boundary
//!
//! Footer content.
//! :::
//! ```

use offcanvas_pandoc_types::Block;

use crate::text::stringify_inlines;

/// Header text plus body and footer blocks, in original order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContentSplit {
    pub header_text: Option<String>,
    pub body_blocks: Vec<Block>,
    pub footer_blocks: Vec<Block>,
}

/// Partition blocks, taking the header text from the first heading.
pub fn partition(blocks: Vec<Block>) -> ContentSplit {
    partition_with_title(blocks, None)
}

/// Partition blocks in a single left-to-right pass.
///
/// With an explicit `title` the heading is not extracted and stays in the
/// body. Only the first `HorizontalRule` is a boundary; later ones are
/// ordinary content.
pub fn partition_with_title(blocks: Vec<Block>, title: Option<&str>) -> ContentSplit {
    let mut split = ContentSplit {
        header_text: title.map(str::to_string),
        ..ContentSplit::default()
    };
    let mut in_footer = false;

    for block in blocks {
        if in_footer {
            split.footer_blocks.push(block);
            continue;
        }
        match block {
            Block::HorizontalRule => in_footer = true,
            Block::Header(_, _, ref content) if split.header_text.is_none() => {
                split.header_text = Some(stringify_inlines(content));
            }
            other => split.body_blocks.push(other),
        }
    }

    split
}

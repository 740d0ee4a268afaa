/*
 * outline.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Keep panel headings out of the document outline.
//!
//! Headings inside a panel get the `unlisted` class, which the table of
//! contents skips. Level and text are left alone. When a scope is given,
//! heading ids are prefixed with it so their anchors stay unique even if
//! the same heading id appears in the main text.

use offcanvas_pandoc_types::{Attr, Block};

/// Class the TOC generator skips.
pub const UNLISTED_CLASS: &str = "unlisted";

/// Protect every heading in `blocks`, recursively.
pub fn protect_headings(blocks: Vec<Block>, scope: Option<&str>) -> Vec<Block> {
    blocks
        .into_iter()
        .map(|block| protect_block(block, scope))
        .collect()
}

fn protect_block(block: Block, scope: Option<&str>) -> Block {
    match block {
        Block::Header(level, attr, content) => {
            Block::Header(level, protect_attr(attr, scope), content)
        }
        Block::BlockQuote(content) => Block::BlockQuote(protect_headings(content, scope)),
        Block::Div(attr, content) => Block::Div(attr, protect_headings(content, scope)),
        Block::Figure(attr, caption, content) => {
            Block::Figure(attr, caption, protect_headings(content, scope))
        }
        Block::OrderedList(list_attr, items) => Block::OrderedList(
            list_attr,
            items
                .into_iter()
                .map(|item| protect_headings(item, scope))
                .collect(),
        ),
        Block::BulletList(items) => Block::BulletList(
            items
                .into_iter()
                .map(|item| protect_headings(item, scope))
                .collect(),
        ),
        Block::DefinitionList(items) => Block::DefinitionList(
            items
                .into_iter()
                .map(|(term, defs)| {
                    let defs = defs
                        .into_iter()
                        .map(|def| protect_headings(def, scope))
                        .collect();
                    (term, defs)
                })
                .collect(),
        ),
        Block::Table(attr, caption, specs, mut head, mut bodies, mut foot) => {
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
                    *cell = protect_headings(std::mem::take(cell), scope);
                }
            }
            Block::Table(attr, caption, specs, head, bodies, foot)
        }
        other => other,
    }
}

fn protect_attr(attr: Attr, scope: Option<&str>) -> Attr {
    let (mut id, mut classes, kvs) = attr;
    if !classes.iter().any(|c| c == UNLISTED_CLASS) {
        classes.push(UNLISTED_CLASS.to_string());
    }
    if let Some(scope) = scope {
        if !id.is_empty() {
            id = format!("{}-{}", scope, id);
        }
    }
    (id, classes, kvs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use offcanvas_pandoc_types::{Inline, empty_attr};

    fn header(id: &str, text: &str) -> Block {
        Block::Header(
            2,
            (id.to_string(), vec![], vec![]),
            vec![Inline::Str(text.to_string())],
        )
    }

    fn header_parts(block: &Block) -> (i32, &Attr, &Vec<Inline>) {
        match block {
            Block::Header(level, attr, content) => (*level, attr, content),
            other => panic!("Expected Header, got {:?}", other),
        }
    }

    #[test]
    fn test_heading_marked_unlisted_and_scoped() {
        let out = protect_headings(vec![header("setup", "Setup")], Some("oc-1"));
        let (level, attr, content) = header_parts(&out[0]);
        assert_eq!(level, 2);
        assert_eq!(attr.0, "oc-1-setup");
        assert_eq!(attr.1, vec!["unlisted"]);
        assert_eq!(content, &vec![Inline::Str("Setup".to_string())]);
    }

    #[test]
    fn test_unscoped_keeps_id() {
        let out = protect_headings(vec![header("setup", "Setup")], None);
        let (_, attr, _) = header_parts(&out[0]);
        assert_eq!(attr.0, "setup");
        assert_eq!(attr.1, vec!["unlisted"]);
    }

    #[test]
    fn test_heading_without_id_is_not_given_one() {
        let out = protect_headings(vec![header("", "Plain")], Some("oc-1"));
        let (_, attr, _) = header_parts(&out[0]);
        assert_eq!(attr.0, "");
    }

    #[test]
    fn test_unlisted_not_duplicated() {
        let block = Block::Header(
            3,
            (String::new(), vec!["unlisted".to_string()], vec![]),
            vec![],
        );
        let out = protect_headings(vec![block], None);
        let (_, attr, _) = header_parts(&out[0]);
        assert_eq!(attr.1, vec!["unlisted"]);
    }

    #[test]
    fn test_nested_headings_are_protected() {
        let blocks = vec![
            Block::BlockQuote(vec![header("a", "A")]),
            Block::BulletList(vec![vec![header("b", "B")]]),
            Block::Div(empty_attr(), vec![header("c", "C")]),
        ];
        let out = protect_headings(blocks, Some("p"));

        let Block::BlockQuote(quoted) = &out[0] else {
            panic!("Expected BlockQuote");
        };
        assert_eq!(header_parts(&quoted[0]).1.0, "p-a");

        let Block::BulletList(items) = &out[1] else {
            panic!("Expected BulletList");
        };
        assert_eq!(header_parts(&items[0][0]).1.0, "p-b");

        let Block::Div(_, inner) = &out[2] else {
            panic!("Expected Div");
        };
        assert_eq!(header_parts(&inner[0]).1.0, "p-c");
    }

    #[test]
    fn test_non_heading_blocks_unchanged() {
        let blocks = vec![
            Block::Para(vec![Inline::Str("x".to_string())]),
            Block::HorizontalRule,
        ];
        assert_eq!(protect_headings(blocks.clone(), Some("p")), blocks);
    }
}

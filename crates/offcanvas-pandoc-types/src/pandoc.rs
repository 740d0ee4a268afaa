/*
 * pandoc.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::block::Blocks;
use crate::meta::Meta;
use serde::{Deserialize, Serialize};

/// The pandoc-types API version this crate reads and writes.
pub const PANDOC_API_VERSION: [u32; 3] = [1, 23, 1];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pandoc {
    #[serde(rename = "pandoc-api-version")]
    pub api_version: Vec<u32>,
    pub meta: Meta,
    pub blocks: Blocks,
}

impl Pandoc {
    pub fn new(meta: Meta, blocks: Blocks) -> Self {
        Self {
            api_version: PANDOC_API_VERSION.to_vec(),
            meta,
            blocks,
        }
    }
}

impl Default for Pandoc {
    fn default() -> Self {
        Self::new(Meta::new(), Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::Block;

    #[test]
    fn test_read_pandoc_json_document() {
        let input = r#"{
            "pandoc-api-version": [1, 23, 1],
            "meta": {},
            "blocks": [
                {"t": "Para", "c": [
                    {"t": "Str", "c": "Hello"},
                    {"t": "Space"},
                    {"t": "Str", "c": "world"}
                ]},
                {"t": "HorizontalRule"}
            ]
        }"#;
        let doc: Pandoc = serde_json::from_str(input).unwrap();
        assert_eq!(doc.api_version, vec![1, 23, 1]);
        assert_eq!(doc.blocks.len(), 2);
        assert_eq!(doc.blocks[1], Block::HorizontalRule);
    }

    #[test]
    fn test_write_uses_api_version_key() {
        let json = serde_json::to_value(Pandoc::default()).unwrap();
        assert_eq!(json["pandoc-api-version"], serde_json::json!([1, 23, 1]));
        assert_eq!(json["blocks"], serde_json::json!([]));
    }
}

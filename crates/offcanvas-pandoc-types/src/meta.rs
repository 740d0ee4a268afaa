/*
 * meta.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::block::Blocks;
use crate::inline::Inlines;
use hashlink::LinkedHashMap;
use serde::{Deserialize, Serialize};

// Pandoc's MetaValue notably does not support numbers or nulls, so we don't either
// https://pandoc.org/lua-filters.html#type-metavalue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "t", content = "c")]
pub enum MetaValue {
    MetaMap(LinkedHashMap<String, MetaValue>),
    MetaList(Vec<MetaValue>),
    MetaBool(bool),
    MetaString(String),
    MetaInlines(Inlines),
    MetaBlocks(Blocks),
}

impl Default for MetaValue {
    fn default() -> Self {
        MetaValue::MetaMap(LinkedHashMap::new())
    }
}

pub type Meta = LinkedHashMap<String, MetaValue>;

impl MetaValue {
    /// Get a value by key if this is a MetaMap
    pub fn get(&self, key: &str) -> Option<&MetaValue> {
        match self {
            MetaValue::MetaMap(map) => map.get(key),
            _ => None,
        }
    }

    /// Short type name, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            MetaValue::MetaMap(_) => "map",
            MetaValue::MetaList(_) => "list",
            MetaValue::MetaBool(_) => "boolean",
            MetaValue::MetaString(_) => "string",
            MetaValue::MetaInlines(_) => "inlines",
            MetaValue::MetaBlocks(_) => "blocks",
        }
    }
}

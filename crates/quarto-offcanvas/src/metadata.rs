/*
 * metadata.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Metadata phase: read, validate and write back the document defaults.
 */

//! Metadata phase.
//!
//! Runs once before any content is transformed. The `offcanvas:` block is
//! validated, merged over the built-in defaults into the context, and then
//! replaced by the fully resolved option map so later stages (and anyone
//! inspecting the output) see the effective values.

use hashlink::LinkedHashMap;
use offcanvas_pandoc_types::{Meta, MetaValue, Pandoc};

use crate::Result;
use crate::context::{EXTENSION_NAME, OffcanvasContext};
use crate::dependency::offcanvas_dependency;
use crate::options::{DocumentDefaults, OptionKey};
use crate::schema::{OptionSchema, validate_options};
use crate::text::{stringify_blocks, stringify_inlines};
use crate::transform::AstTransform;

/// Flatten a scalar metadata value to the string form options use.
///
/// Returns `None` for lists and maps.
pub fn meta_scalar_text(value: &MetaValue) -> Option<String> {
    match value {
        MetaValue::MetaString(s) => Some(s.clone()),
        MetaValue::MetaBool(b) => Some(b.to_string()),
        MetaValue::MetaInlines(inlines) => Some(stringify_inlines(inlines)),
        MetaValue::MetaBlocks(blocks) => Some(stringify_blocks(blocks)),
        MetaValue::MetaList(_) | MetaValue::MetaMap(_) => None,
    }
}

/// Resolved defaults as a metadata map.
pub fn defaults_to_meta(defaults: &DocumentDefaults) -> MetaValue {
    let mut map = LinkedHashMap::new();
    for key in OptionKey::ALL {
        let raw = defaults.get(key);
        let value = if key.is_boolean() {
            MetaValue::MetaBool(raw == "true")
        } else {
            MetaValue::MetaString(raw.to_string())
        };
        map.insert(key.as_str().to_string(), value);
    }
    MetaValue::MetaMap(map)
}

/// Validate `meta`, merge it into `ctx.defaults` and write the result back.
pub fn transform_metadata(
    meta: &mut Meta,
    ctx: &mut OffcanvasContext,
    schema: &OptionSchema,
) -> Result<()> {
    validate_options(meta, EXTENSION_NAME, schema, &mut ctx.warnings)?;

    if let Some(MetaValue::MetaMap(options)) = meta.get(EXTENSION_NAME) {
        for (name, value) in options {
            let Some(key) = OptionKey::from_name(name) else {
                continue;
            };
            match meta_scalar_text(value) {
                Some(text) if !text.is_empty() => ctx.defaults.set(key, text),
                _ => {}
            }
        }
    }

    meta.replace(EXTENSION_NAME.to_string(), defaults_to_meta(&ctx.defaults));
    Ok(())
}

/// Metadata-phase transform.
///
/// Also registers the offcanvas stylesheet when the target can host panels.
pub struct OffcanvasMetadataTransform {
    schema: OptionSchema,
}

impl OffcanvasMetadataTransform {
    pub fn new() -> Result<Self> {
        Ok(Self::with_schema(OptionSchema::builtin()?))
    }

    pub fn with_schema(schema: OptionSchema) -> Self {
        Self { schema }
    }
}

impl AstTransform for OffcanvasMetadataTransform {
    fn name(&self) -> &str {
        "offcanvas-metadata"
    }

    fn transform(&self, ast: &mut Pandoc, ctx: &mut OffcanvasContext) -> Result<()> {
        transform_metadata(&mut ast.meta, ctx, &self.schema)?;
        if ctx.is_enabled() {
            ctx.add_html_dependency(offcanvas_dependency());
        }
        Ok(())
    }
}

/*
 * dependency.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Static HTML asset shipped with the filter.

use offcanvas_pandoc_types::{Block, Meta, MetaValue};

/// Metadata key whose contents Pandoc's HTML template places in `<head>`.
pub const HEADER_INCLUDES: &str = "header-includes";

/// Stylesheet bundled into the binary.
const OFFCANVAS_CSS: &str = include_str!("../resources/offcanvas.css");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stylesheet {
    /// File name the host should use when writing the stylesheet out
    pub name: String,
    pub contents: &'static str,
}

/// A named, versioned bundle of static assets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlDependency {
    pub name: String,
    pub version: String,
    pub stylesheets: Vec<Stylesheet>,
}

impl HtmlDependency {
    /// Inline `<style>` markup for every stylesheet, for hosts that cannot
    /// copy files next to the output.
    pub fn to_style_markup(&self) -> String {
        self.stylesheets
            .iter()
            .map(|sheet| {
                format!(
                    "<style data-dependency=\"{}\">\n{}</style>",
                    self.name, sheet.contents
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// The offcanvas stylesheet dependency.
pub fn offcanvas_dependency() -> HtmlDependency {
    HtmlDependency {
        name: "offcanvas".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        stylesheets: vec![Stylesheet {
            name: "offcanvas.css".to_string(),
            contents: OFFCANVAS_CSS,
        }],
    }
}

/// Append the style markup of `dependencies` to `header-includes`.
///
/// An existing scalar value is kept as the first list entry.
pub fn embed_dependencies(meta: &mut Meta, dependencies: &[HtmlDependency]) {
    if dependencies.is_empty() {
        return;
    }
    let mut includes = match meta.remove(HEADER_INCLUDES) {
        Some(MetaValue::MetaList(items)) => items,
        Some(other) => vec![other],
        None => Vec::new(),
    };
    for dependency in dependencies {
        includes.push(MetaValue::MetaBlocks(vec![Block::raw_html(
            dependency.to_style_markup(),
        )]));
    }
    meta.insert(HEADER_INCLUDES.to_string(), MetaValue::MetaList(includes));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offcanvas_dependency() {
        let dep = offcanvas_dependency();
        assert_eq!(dep.name, "offcanvas");
        assert_eq!(dep.stylesheets.len(), 1);
        assert!(dep.stylesheets[0].contents.contains(".offcanvas"));
    }

    #[test]
    fn test_style_markup() {
        let markup = offcanvas_dependency().to_style_markup();
        assert!(markup.starts_with("<style data-dependency=\"offcanvas\">"));
        assert!(markup.ends_with("</style>"));
    }

    #[test]
    fn test_embed_into_empty_meta() {
        let mut meta = Meta::new();
        embed_dependencies(&mut meta, &[offcanvas_dependency()]);
        let Some(MetaValue::MetaList(items)) = meta.get(HEADER_INCLUDES) else {
            panic!("Expected header-includes list");
        };
        assert_eq!(items.len(), 1);
        let MetaValue::MetaBlocks(blocks) = &items[0] else {
            panic!("Expected MetaBlocks");
        };
        assert!(matches!(
            &blocks[0],
            Block::RawBlock(format, text) if format == "html" && text.starts_with("<style")
        ));
    }

    #[test]
    fn test_embed_keeps_existing_includes() {
        let mut meta = Meta::new();
        meta.insert(
            HEADER_INCLUDES.to_string(),
            MetaValue::MetaString("<meta name=\"x\">".to_string()),
        );
        embed_dependencies(&mut meta, &[offcanvas_dependency()]);
        let Some(MetaValue::MetaList(items)) = meta.get(HEADER_INCLUDES) else {
            panic!("Expected header-includes list");
        };
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], MetaValue::MetaString("<meta name=\"x\">".to_string()));
    }

    #[test]
    fn test_embed_nothing_leaves_meta_alone() {
        let mut meta = Meta::new();
        embed_dependencies(&mut meta, &[]);
        assert!(meta.is_empty());
    }
}

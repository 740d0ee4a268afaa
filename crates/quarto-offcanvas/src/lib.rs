/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Bootstrap offcanvas panels for Quarto/Pandoc documents.
 */

//! Offcanvas filter.
//!
//! Turns `::: {.offcanvas}` divs into Bootstrap offcanvas panels with a
//! trigger, and optionally moves margin notes into panels so they do not
//! need a page margin. Document-wide defaults come from the `offcanvas:`
//! metadata key; each panel can override them with attributes.
//!
//! The work is split into two transforms run by a [`TransformPipeline`]
//! over a shared [`OffcanvasContext`]:
//!
//! - [`OffcanvasMetadataTransform`] resolves and writes back the defaults
//! - [`OffcanvasTransform`] rewrites the document body
//!
//! Both do nothing to the body when the target is not a scripted HTML
//! format with Bootstrap.

pub mod context;
pub mod dependency;
pub mod document;
pub mod error;
pub mod filter;
pub mod format;
pub mod metadata;
pub mod options;
pub mod outline;
pub mod partition;
pub mod schema;
pub mod synthesize;
pub mod text;
pub mod transform;

pub use context::{OffcanvasContext, WarningCollector, WarningSink};
pub use dependency::{HtmlDependency, embed_dependencies, offcanvas_dependency};
pub use document::{read_document, write_document};
pub use error::{OffcanvasError, Result};
pub use filter::OffcanvasTransform;
pub use format::{Format, FormatIdentifier};
pub use metadata::OffcanvasMetadataTransform;
pub use options::{DocumentDefaults, PanelConfig};
pub use transform::{AstTransform, TransformPipeline};

use offcanvas_pandoc_types::Pandoc;

/// The metadata phase followed by the content phase.
pub fn build_pipeline() -> Result<TransformPipeline> {
    let mut pipeline = TransformPipeline::new();
    pipeline.push(Box::new(OffcanvasMetadataTransform::new()?));
    pipeline.push(Box::new(OffcanvasTransform::new()));
    Ok(pipeline)
}

/// Run the whole filter over `ast` for `format`.
///
/// Returns the context so callers can inspect warnings and the HTML
/// dependencies that were registered.
pub fn render_offcanvas(ast: &mut Pandoc, format: Format) -> Result<OffcanvasContext> {
    let mut ctx = OffcanvasContext::new(format);
    build_pipeline()?.execute(ast, &mut ctx)?;
    Ok(ctx)
}

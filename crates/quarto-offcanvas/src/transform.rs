/*
 * transform.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Ordered AST transform pipeline.
 */

//! Transform pipeline.
//!
//! The filter runs as two transforms sharing one [`OffcanvasContext`]:
//!
//! 1. `offcanvas-metadata` resolves document defaults from `offcanvas:` metadata
//! 2. `offcanvas` rewrites panel divs and margin notes
//!
//! ```ignore
//! let mut pipeline = TransformPipeline::new();
//! pipeline.push(Box::new(OffcanvasMetadataTransform::new()?));
//! pipeline.push(Box::new(OffcanvasTransform::new()));
//! pipeline.execute(&mut ast, &mut ctx)?;
//! ```

use offcanvas_pandoc_types::Pandoc;

use crate::Result;
use crate::context::OffcanvasContext;

/// A single pass over the document.
///
/// Transforms are `Send + Sync` so a pipeline can be shared between
/// documents rendered on different threads; per-document state belongs in
/// the context, not in the transform.
pub trait AstTransform: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &str;

    /// Apply the transform.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be processed. Recoverable
    /// problems go to `ctx.warnings` instead.
    fn transform(&self, ast: &mut Pandoc, ctx: &mut OffcanvasContext) -> Result<()>;
}

/// Transforms executed in insertion order.
pub struct TransformPipeline {
    transforms: Vec<Box<dyn AstTransform>>,
}

impl TransformPipeline {
    pub fn new() -> Self {
        Self {
            transforms: Vec::new(),
        }
    }

    pub fn push(&mut self, transform: Box<dyn AstTransform>) {
        self.transforms.push(transform);
    }

    /// Run every transform in order.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first error.
    pub fn execute(&self, ast: &mut Pandoc, ctx: &mut OffcanvasContext) -> Result<()> {
        for transform in &self.transforms {
            tracing::debug!(transform = transform.name(), "Running transform");
            transform.transform(ast, ctx)?;
        }
        Ok(())
    }
}

impl Default for TransformPipeline {
    fn default() -> Self {
        Self::new()
    }
}

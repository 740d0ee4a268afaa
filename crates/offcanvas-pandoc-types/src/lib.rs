/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Pandoc AST type definitions for the offcanvas filter.
 *
 * The types mirror pandoc-types and serialize to the Pandoc JSON
 * interchange format, so a document can be read from and written
 * back to `pandoc --filter` without a custom reader or writer.
 */

pub mod attr;
pub mod block;
pub mod inline;
pub mod meta;
pub mod pandoc;

pub use attr::{Attr, attr_value, empty_attr, has_class, is_empty_attr};
pub use block::{
    Alignment, Block, Blocks, Caption, Cell, ColSpec, ColWidth, ListAttributes, ListNumberDelim,
    ListNumberStyle, Row, TableBody, TableFoot, TableHead,
};
pub use inline::{Citation, CitationMode, Inline, Inlines, MathType, QuoteType, Target};
pub use meta::{Meta, MetaValue};
pub use pandoc::{PANDOC_API_VERSION, Pandoc};

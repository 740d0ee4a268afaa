/*
 * document.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Reading and writing Pandoc JSON documents.

use std::io::{Read, Write};

use offcanvas_pandoc_types::Pandoc;

use crate::Result;

/// Parse a Pandoc JSON document from `reader`.
pub fn read_document(mut reader: impl Read) -> Result<Pandoc> {
    let mut source = String::new();
    reader.read_to_string(&mut source)?;
    Ok(serde_json::from_str(&source)?)
}

/// Serialize `ast` as Pandoc JSON to `writer`.
pub fn write_document(ast: &Pandoc, mut writer: impl Write) -> Result<()> {
    serde_json::to_writer(&mut writer, ast)?;
    writer.flush()?;
    Ok(())
}

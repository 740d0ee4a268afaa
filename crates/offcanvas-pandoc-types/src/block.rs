/*
 * block.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::attr::Attr;
use crate::inline::Inlines;
use serde::{Deserialize, Serialize};

pub type Blocks = Vec<Block>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "t", content = "c")]
pub enum Block {
    Plain(Inlines),
    Para(Inlines),
    LineBlock(Vec<Inlines>),
    CodeBlock(Attr, String),
    RawBlock(String, String),
    BlockQuote(Blocks),
    OrderedList(ListAttributes, Vec<Blocks>),
    BulletList(Vec<Blocks>),
    DefinitionList(Vec<(Inlines, Vec<Blocks>)>),
    Header(i32, Attr, Inlines),
    HorizontalRule,
    Table(Attr, Caption, Vec<ColSpec>, TableHead, Vec<TableBody>, TableFoot),
    Figure(Attr, Caption, Blocks),
    Div(Attr, Blocks),
}

impl Block {
    /// Raw HTML passthrough.
    pub fn raw_html(text: impl Into<String>) -> Self {
        Block::RawBlock("html".to_string(), text.into())
    }
}

/// `(start number, style, delimiter)`
pub type ListAttributes = (i32, ListNumberStyle, ListNumberDelim);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "t", content = "c")]
pub enum ListNumberStyle {
    DefaultStyle,
    Example,
    Decimal,
    LowerRoman,
    UpperRoman,
    LowerAlpha,
    UpperAlpha,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "t", content = "c")]
pub enum ListNumberDelim {
    DefaultDelim,
    Period,
    OneParen,
    TwoParens,
}

/// Caption: optional short caption and the full caption blocks.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Caption(pub Option<Inlines>, pub Blocks);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "t", content = "c")]
pub enum Alignment {
    AlignLeft,
    AlignRight,
    AlignCenter,
    AlignDefault,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "t", content = "c")]
pub enum ColWidth {
    ColWidth(f64),
    ColWidthDefault,
}

pub type ColSpec = (Alignment, ColWidth);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row(pub Attr, pub Vec<Cell>);

/// `(attr, alignment, row span, column span, content)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell(pub Attr, pub Alignment, pub i32, pub i32, pub Blocks);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableHead(pub Attr, pub Vec<Row>);

/// `(attr, row head columns, intermediate head rows, body rows)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableBody(pub Attr, pub i32, pub Vec<Row>, pub Vec<Row>);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableFoot(pub Attr, pub Vec<Row>);

impl Row {
    pub fn cells_mut(&mut self) -> impl Iterator<Item = &mut Blocks> {
        self.1.iter_mut().map(|cell| &mut cell.4)
    }
}

/*
 * inline.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::attr::Attr;
use crate::block::Blocks;
use serde::{Deserialize, Serialize};

pub type Inlines = Vec<Inline>;

/// Link or image target: `(url, title)`.
pub type Target = (String, String);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "t", content = "c")]
pub enum Inline {
    Str(String),
    Emph(Inlines),
    Underline(Inlines),
    Strong(Inlines),
    Strikeout(Inlines),
    Superscript(Inlines),
    Subscript(Inlines),
    SmallCaps(Inlines),
    Quoted(QuoteType, Inlines),
    Cite(Vec<Citation>, Inlines),
    Code(Attr, String),
    Space,
    SoftBreak,
    LineBreak,
    Math(MathType, String),
    RawInline(String, String),
    Link(Attr, Inlines, Target),
    Image(Attr, Inlines, Target),
    Note(Blocks),
    Span(Attr, Inlines),
}

impl Inline {
    /// Raw HTML passthrough.
    pub fn raw_html(text: impl Into<String>) -> Self {
        Inline::RawInline("html".to_string(), text.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "t", content = "c")]
pub enum QuoteType {
    SingleQuote,
    DoubleQuote,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "t", content = "c")]
pub enum MathType {
    DisplayMath,
    InlineMath,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "t", content = "c")]
pub enum CitationMode {
    AuthorInText,
    SuppressAuthor,
    NormalCitation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Citation {
    pub citation_id: String,
    pub citation_prefix: Inlines,
    pub citation_suffix: Inlines,
    pub citation_mode: CitationMode,
    pub citation_note_num: i64,
    pub citation_hash: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_str_roundtrips_pandoc_shape() {
        let inline = Inline::Str("hello".to_string());
        assert_eq!(
            serde_json::to_value(&inline).unwrap(),
            json!({"t": "Str", "c": "hello"})
        );
    }

    #[test]
    fn test_unit_variant_has_no_content() {
        assert_eq!(
            serde_json::to_value(Inline::Space).unwrap(),
            json!({"t": "Space"})
        );
        let parsed: Inline = serde_json::from_value(json!({"t": "SoftBreak"})).unwrap();
        assert_eq!(parsed, Inline::SoftBreak);
    }

    #[test]
    fn test_span_with_attr() {
        let parsed: Inline = serde_json::from_value(json!({
            "t": "Span",
            "c": [["note", ["aside"], [["k", "v"]]], [{"t": "Str", "c": "x"}]]
        }))
        .unwrap();
        match parsed {
            Inline::Span((id, classes, kvs), content) => {
                assert_eq!(id, "note");
                assert_eq!(classes, vec!["aside"]);
                assert_eq!(kvs, vec![("k".to_string(), "v".to_string())]);
                assert_eq!(content, vec![Inline::Str("x".to_string())]);
            }
            other => panic!("Expected Span, got {:?}", other),
        }
    }

    #[test]
    fn test_citation_field_names() {
        let parsed: Inline = serde_json::from_value(json!({
            "t": "Cite",
            "c": [
                [{
                    "citationId": "knuth",
                    "citationPrefix": [],
                    "citationSuffix": [],
                    "citationMode": {"t": "NormalCitation"},
                    "citationNoteNum": 1,
                    "citationHash": 0
                }],
                [{"t": "Str", "c": "[@knuth]"}]
            ]
        }))
        .unwrap();
        match parsed {
            Inline::Cite(citations, _) => {
                assert_eq!(citations[0].citation_id, "knuth");
                assert_eq!(citations[0].citation_mode, CitationMode::NormalCitation);
            }
            other => panic!("Expected Cite, got {:?}", other),
        }
    }
}

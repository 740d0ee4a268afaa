/*
 * schema.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Validation of the `offcanvas:` metadata block.
 */

//! Option schema and metadata validation.
//!
//! The schema ships as YAML next to the crate and is embedded at build
//! time. Type mismatches are fatal; unknown keys only warn. Enumerated
//! values (placement, responsive, ...) are checked later by the option
//! resolver, which falls back instead of failing.

use hashlink::LinkedHashMap;
use offcanvas_pandoc_types::{Meta, MetaValue};
use serde::Deserialize;

use crate::context::WarningSink;
use crate::error::{OffcanvasError, Result};
use crate::metadata::meta_scalar_text;

const SCHEMA_YAML: &str = include_str!("../schema/offcanvas.yml");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OptionType {
    String,
    Boolean,
    StringOrBoolean,
}

impl OptionType {
    fn describe(self) -> &'static str {
        match self {
            OptionType::String => "a string",
            OptionType::Boolean => "a boolean",
            OptionType::StringOrBoolean => "a string or boolean",
        }
    }

    fn accepts(self, value: &MetaValue) -> bool {
        match (self, value) {
            (_, MetaValue::MetaMap(_) | MetaValue::MetaList(_)) => false,
            (OptionType::String, MetaValue::MetaBool(_)) => false,
            (OptionType::String | OptionType::StringOrBoolean, _) => true,
            (OptionType::Boolean, MetaValue::MetaBool(_)) => true,
            (OptionType::Boolean, other) => {
                matches!(meta_scalar_text(other).as_deref(), Some("true" | "false"))
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OptionSpec {
    #[serde(rename = "type")]
    pub kind: OptionType,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OptionSchema {
    pub name: String,
    pub options: LinkedHashMap<String, OptionSpec>,
}

impl OptionSchema {
    /// The schema embedded in the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_yaml(SCHEMA_YAML)
    }

    pub fn from_yaml(source: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(source)?)
    }
}

/// Validate `meta[extension]` against `schema`.
///
/// A missing entry is valid. Anything other than a map, or a value of the
/// wrong type, aborts the run.
pub fn validate_options(
    meta: &Meta,
    extension: &str,
    schema: &OptionSchema,
    warnings: &mut impl WarningSink,
) -> Result<()> {
    let Some(value) = meta.get(extension) else {
        return Ok(());
    };
    let MetaValue::MetaMap(options) = value else {
        return Err(OffcanvasError::invalid_config(
            extension,
            format!("expected a map of options, found {}", value.kind()),
        ));
    };

    for (key, value) in options {
        let Some(spec) = schema.options.get(key) else {
            warnings.warn(format!(
                "Unknown option '{}' under '{}' metadata; ignoring it",
                key, extension
            ));
            continue;
        };
        if !spec.kind.accepts(value) {
            return Err(OffcanvasError::InvalidOption {
                extension: extension.to_string(),
                key: key.clone(),
                expected: spec.kind.describe().to_string(),
                found: value.kind().to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::OptionKey;
    use offcanvas_pandoc_types::Inline;

    fn meta_with(options: Vec<(&str, MetaValue)>) -> Meta {
        let mut map = LinkedHashMap::new();
        for (k, v) in options {
            map.insert(k.to_string(), v);
        }
        let mut meta = Meta::new();
        meta.insert("offcanvas".to_string(), MetaValue::MetaMap(map));
        meta
    }

    fn inlines(text: &str) -> MetaValue {
        MetaValue::MetaInlines(vec![Inline::Str(text.to_string())])
    }

    fn validate(meta: &Meta) -> (Result<()>, Vec<String>) {
        let schema = OptionSchema::builtin().unwrap();
        let mut warnings = Vec::new();
        let result = validate_options(meta, "offcanvas", &schema, &mut warnings);
        (result, warnings)
    }

    #[test]
    fn test_builtin_schema_covers_every_option() {
        let schema = OptionSchema::builtin().unwrap();
        assert_eq!(schema.name, "offcanvas");
        for key in OptionKey::ALL {
            assert!(
                schema.options.contains_key(key.as_str()),
                "schema is missing {}",
                key.as_str()
            );
        }
        assert_eq!(schema.options.len(), OptionKey::ALL.len());
        assert!(schema.options.values().all(|spec| !spec.description.is_empty()));
    }

    #[test]
    fn test_missing_block_is_valid() {
        let (result, warnings) = validate(&Meta::new());
        assert!(result.is_ok());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_valid_options() {
        let meta = meta_with(vec![
            ("placement", inlines("end")),
            ("scroll", MetaValue::MetaBool(true)),
            ("keyboard", inlines("false")),
            ("backdrop", MetaValue::MetaBool(false)),
            ("width", MetaValue::MetaString("50%".to_string())),
        ]);
        let (result, warnings) = validate(&meta);
        assert!(result.is_ok());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_non_map_block_is_fatal() {
        let mut meta = Meta::new();
        meta.insert("offcanvas".to_string(), inlines("yes"));
        let (result, _) = validate(&meta);
        assert!(matches!(result, Err(OffcanvasError::InvalidConfig { .. })));
    }

    #[test]
    fn test_wrong_type_is_fatal() {
        let meta = meta_with(vec![("scroll", inlines("sometimes"))]);
        let (result, _) = validate(&meta);
        match result {
            Err(OffcanvasError::InvalidOption { key, expected, .. }) => {
                assert_eq!(key, "scroll");
                assert_eq!(expected, "a boolean");
            }
            other => panic!("Expected InvalidOption, got {:?}", other),
        }

        let meta = meta_with(vec![("placement", MetaValue::MetaList(vec![]))]);
        assert!(validate(&meta).0.is_err());

        let meta = meta_with(vec![("width", MetaValue::MetaBool(true))]);
        assert!(validate(&meta).0.is_err());
    }

    #[test]
    fn test_unknown_key_warns() {
        let meta = meta_with(vec![("colour", inlines("red"))]);
        let (result, warnings) = validate(&meta);
        assert!(result.is_ok());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("colour"));
    }

    #[test]
    fn test_malformed_schema_is_an_error() {
        let result = OptionSchema::from_yaml("name: x\noptions:\n  a:\n    type: number\n");
        assert!(matches!(result, Err(OffcanvasError::Schema(_))));
    }
}

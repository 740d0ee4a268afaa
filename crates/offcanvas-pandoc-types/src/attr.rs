/*
 * attr.rs
 * Copyright (c) 2025 Posit, PBC
 */

/// Pandoc attributes: `(identifier, classes, key-value pairs)`.
///
/// Key-value pairs are kept as an ordered list because that is how the
/// Pandoc JSON format encodes them (`[["key", "value"], ...]`).
pub type Attr = (String, Vec<String>, Vec<(String, String)>);

pub fn empty_attr() -> Attr {
    (String::new(), vec![], vec![])
}

pub fn is_empty_attr(attr: &Attr) -> bool {
    attr.0.is_empty() && attr.1.is_empty() && attr.2.is_empty()
}

pub fn has_class(attr: &Attr, class: &str) -> bool {
    attr.1.iter().any(|c| c == class)
}

/// Look up a key-value attribute. The first occurrence wins.
pub fn attr_value<'a>(attr: &'a Attr, key: &str) -> Option<&'a str> {
    attr.2
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Attr {
        (
            "panel".to_string(),
            vec!["offcanvas".to_string(), "wide".to_string()],
            vec![
                ("placement".to_string(), "end".to_string()),
                ("placement".to_string(), "top".to_string()),
            ],
        )
    }

    #[test]
    fn test_empty_attr() {
        assert!(is_empty_attr(&empty_attr()));
        assert!(!is_empty_attr(&sample()));
    }

    #[test]
    fn test_has_class() {
        let attr = sample();
        assert!(has_class(&attr, "offcanvas"));
        assert!(has_class(&attr, "wide"));
        assert!(!has_class(&attr, "aside"));
    }

    #[test]
    fn test_attr_value_first_wins() {
        let attr = sample();
        assert_eq!(attr_value(&attr, "placement"), Some("end"));
        assert_eq!(attr_value(&attr, "width"), None);
    }

    #[test]
    fn test_attr_serializes_as_pandoc_triple() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                "panel",
                ["offcanvas", "wide"],
                [["placement", "end"], ["placement", "top"]]
            ])
        );
    }
}

/*
 * options.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Option keys, document defaults and per-panel option resolution.
 */

//! Option resolution.
//!
//! Every option is looked up in three tiers: the block's own attributes,
//! then the document defaults (`offcanvas:` metadata), then the built-in
//! constants the defaults were seeded with. Values are plain strings until
//! [`resolve`] turns them into a typed [`PanelConfig`]; booleans are the
//! literal strings `"true"` and `"false"`.

use crate::context::WarningSink;

/// Every recognized option key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKey {
    Placement,
    Width,
    Height,
    Backdrop,
    Scroll,
    Keyboard,
    TriggerText,
    TriggerClass,
    TriggerIcon,
    TriggerPosition,
    TriggerType,
    ShowClose,
    Responsive,
    OvertakeMargins,
}

impl OptionKey {
    pub const ALL: [OptionKey; 14] = [
        OptionKey::Placement,
        OptionKey::Width,
        OptionKey::Height,
        OptionKey::Backdrop,
        OptionKey::Scroll,
        OptionKey::Keyboard,
        OptionKey::TriggerText,
        OptionKey::TriggerClass,
        OptionKey::TriggerIcon,
        OptionKey::TriggerPosition,
        OptionKey::TriggerType,
        OptionKey::ShowClose,
        OptionKey::Responsive,
        OptionKey::OvertakeMargins,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OptionKey::Placement => "placement",
            OptionKey::Width => "width",
            OptionKey::Height => "height",
            OptionKey::Backdrop => "backdrop",
            OptionKey::Scroll => "scroll",
            OptionKey::Keyboard => "keyboard",
            OptionKey::TriggerText => "trigger-text",
            OptionKey::TriggerClass => "trigger-class",
            OptionKey::TriggerIcon => "trigger-icon",
            OptionKey::TriggerPosition => "trigger-position",
            OptionKey::TriggerType => "trigger-type",
            OptionKey::ShowClose => "show-close",
            OptionKey::Responsive => "responsive",
            OptionKey::OvertakeMargins => "overtake-margins",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == name)
    }

    /// Keys written back to metadata as booleans.
    pub fn is_boolean(self) -> bool {
        matches!(
            self,
            OptionKey::Scroll
                | OptionKey::Keyboard
                | OptionKey::ShowClose
                | OptionKey::OvertakeMargins
        )
    }
}

/// Document-wide option values, as strings.
///
/// Seeded from built-in constants, overwritten once from document metadata,
/// then only read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentDefaults {
    pub placement: String,
    pub width: String,
    pub height: String,
    pub backdrop: String,
    pub scroll: String,
    pub keyboard: String,
    pub trigger_text: String,
    pub trigger_class: String,
    pub trigger_icon: String,
    pub trigger_position: String,
    pub trigger_type: String,
    pub show_close: String,
    pub responsive: String,
    pub overtake_margins: String,
}

impl DocumentDefaults {
    /// The built-in constants.
    pub fn builtin() -> Self {
        Self {
            placement: "start".to_string(),
            width: "400px".to_string(),
            height: "30vh".to_string(),
            backdrop: "true".to_string(),
            scroll: "false".to_string(),
            keyboard: "true".to_string(),
            trigger_text: "Open".to_string(),
            trigger_class: "btn btn-primary".to_string(),
            trigger_icon: String::new(),
            trigger_position: "inline".to_string(),
            trigger_type: "button".to_string(),
            show_close: "true".to_string(),
            responsive: String::new(),
            overtake_margins: "false".to_string(),
        }
    }

    pub fn get(&self, key: OptionKey) -> &str {
        match key {
            OptionKey::Placement => &self.placement,
            OptionKey::Width => &self.width,
            OptionKey::Height => &self.height,
            OptionKey::Backdrop => &self.backdrop,
            OptionKey::Scroll => &self.scroll,
            OptionKey::Keyboard => &self.keyboard,
            OptionKey::TriggerText => &self.trigger_text,
            OptionKey::TriggerClass => &self.trigger_class,
            OptionKey::TriggerIcon => &self.trigger_icon,
            OptionKey::TriggerPosition => &self.trigger_position,
            OptionKey::TriggerType => &self.trigger_type,
            OptionKey::ShowClose => &self.show_close,
            OptionKey::Responsive => &self.responsive,
            OptionKey::OvertakeMargins => &self.overtake_margins,
        }
    }

    pub fn set(&mut self, key: OptionKey, value: String) {
        let slot = match key {
            OptionKey::Placement => &mut self.placement,
            OptionKey::Width => &mut self.width,
            OptionKey::Height => &mut self.height,
            OptionKey::Backdrop => &mut self.backdrop,
            OptionKey::Scroll => &mut self.scroll,
            OptionKey::Keyboard => &mut self.keyboard,
            OptionKey::TriggerText => &mut self.trigger_text,
            OptionKey::TriggerClass => &mut self.trigger_class,
            OptionKey::TriggerIcon => &mut self.trigger_icon,
            OptionKey::TriggerPosition => &mut self.trigger_position,
            OptionKey::TriggerType => &mut self.trigger_type,
            OptionKey::ShowClose => &mut self.show_close,
            OptionKey::Responsive => &mut self.responsive,
            OptionKey::OvertakeMargins => &mut self.overtake_margins,
        };
        *slot = value;
    }

    /// Whether marginal notes should be turned into panels.
    pub fn overtake_margins(&self) -> bool {
        self.overtake_margins == "true"
    }
}

impl Default for DocumentDefaults {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Viewport edge the panel slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Start,
    End,
    Top,
    Bottom,
}

impl Placement {
    pub fn as_str(self) -> &'static str {
        match self {
            Placement::Start => "start",
            Placement::End => "end",
            Placement::Top => "top",
            Placement::Bottom => "bottom",
        }
    }

    /// Start/end panels are sized by width, top/bottom panels by height.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Placement::Start | Placement::End)
    }
}

impl TryFrom<&str> for Placement {
    type Error = String;

    /// `left` and `right` are accepted as aliases for `start` and `end`.
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "start" | "left" => Ok(Placement::Start),
            "end" | "right" => Ok(Placement::End),
            "top" => Ok(Placement::Top),
            "bottom" => Ok(Placement::Bottom),
            _ => Err(format!(
                "Invalid placement '{}'; expected start, end, top or bottom. Using 'start'",
                s
            )),
        }
    }
}

/// Breakpoint below which the element behaves as an offcanvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Responsive {
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

impl Responsive {
    pub fn as_str(self) -> &'static str {
        match self {
            Responsive::Sm => "sm",
            Responsive::Md => "md",
            Responsive::Lg => "lg",
            Responsive::Xl => "xl",
            Responsive::Xxl => "xxl",
        }
    }
}

impl TryFrom<&str> for Responsive {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "sm" => Ok(Responsive::Sm),
            "md" => Ok(Responsive::Md),
            "lg" => Ok(Responsive::Lg),
            "xl" => Ok(Responsive::Xl),
            "xxl" => Ok(Responsive::Xxl),
            _ => Err(format!(
                "Invalid responsive breakpoint '{}'; expected sm, md, lg, xl or xxl. Ignoring it",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backdrop {
    True,
    False,
    Static,
}

impl Backdrop {
    /// Value for `data-bs-backdrop`; `None` for the framework default.
    pub fn data_attribute(self) -> Option<&'static str> {
        match self {
            Backdrop::True => None,
            Backdrop::False => Some("false"),
            Backdrop::Static => Some("static"),
        }
    }
}

impl TryFrom<&str> for Backdrop {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "true" => Ok(Backdrop::True),
            "false" => Ok(Backdrop::False),
            "static" => Ok(Backdrop::Static),
            _ => Err(format!(
                "Invalid backdrop '{}'; expected true, false or static. Using 'true'",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerPosition {
    /// Trigger is emitted where the panel was authored
    Inline,
    /// No trigger; the author wires one up elsewhere
    None,
}

impl TryFrom<&str> for TriggerPosition {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "inline" => Ok(TriggerPosition::Inline),
            "none" => Ok(TriggerPosition::None),
            _ => Err(format!(
                "Invalid trigger-position '{}'; expected inline or none. Using 'inline'",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerType {
    Button,
    Text,
}

impl TryFrom<&str> for TriggerType {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "button" => Ok(TriggerType::Button),
            "text" => Ok(TriggerType::Text),
            _ => Err(format!(
                "Invalid trigger-type '{}'; expected button or text. Using 'button'",
                s
            )),
        }
    }
}

/// Fully resolved options for one panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelConfig {
    pub id: String,
    pub placement: Placement,
    pub width: String,
    pub height: String,
    pub responsive: Option<Responsive>,
    pub backdrop: Backdrop,
    pub scroll: bool,
    pub keyboard: bool,
    pub show_close: bool,
    pub header_text: Option<String>,
    pub trigger_text: String,
    pub trigger_class: String,
    pub trigger_icon: String,
    pub trigger_position: TriggerPosition,
    pub trigger_type: TriggerType,
}

/// First non-empty value for `key` among the block attributes.
pub fn local_value<'a>(local: &'a [(String, String)], key: &str) -> Option<&'a str> {
    local
        .iter()
        .find(|(k, v)| k == key && !v.is_empty())
        .map(|(_, v)| v.as_str())
}

/// Resolve the options for one panel.
///
/// `local` are the block's key-value attributes. Unrecognized values of the
/// closed-set options (placement, responsive, backdrop, trigger-position,
/// trigger-type) fall back with a warning.
pub fn resolve(
    id: impl Into<String>,
    local: &[(String, String)],
    defaults: &DocumentDefaults,
    warnings: &mut impl WarningSink,
) -> PanelConfig {
    let pick = |key: OptionKey| {
        local_value(local, key.as_str()).unwrap_or_else(|| defaults.get(key))
    };

    let placement = Placement::try_from(pick(OptionKey::Placement)).unwrap_or_else(|message| {
        warnings.warn(message);
        Placement::Start
    });

    let responsive_raw = pick(OptionKey::Responsive);
    let responsive = if responsive_raw.is_empty() {
        None
    } else {
        match Responsive::try_from(responsive_raw) {
            Ok(breakpoint) => Some(breakpoint),
            Err(message) => {
                warnings.warn(message);
                None
            }
        }
    };

    let trigger_position = TriggerPosition::try_from(pick(OptionKey::TriggerPosition))
        .unwrap_or_else(|message| {
            warnings.warn(message);
            TriggerPosition::Inline
        });

    let backdrop = Backdrop::try_from(pick(OptionKey::Backdrop)).unwrap_or_else(|message| {
        warnings.warn(message);
        Backdrop::True
    });

    let trigger_type =
        TriggerType::try_from(pick(OptionKey::TriggerType)).unwrap_or_else(|message| {
            warnings.warn(message);
            TriggerType::Button
        });

    PanelConfig {
        id: id.into(),
        placement,
        width: pick(OptionKey::Width).to_string(),
        height: pick(OptionKey::Height).to_string(),
        responsive,
        backdrop,
        scroll: pick(OptionKey::Scroll) == "true",
        keyboard: pick(OptionKey::Keyboard) != "false",
        show_close: pick(OptionKey::ShowClose) != "false",
        header_text: local_value(local, "title").map(str::to_string),
        trigger_text: pick(OptionKey::TriggerText).to_string(),
        trigger_class: pick(OptionKey::TriggerClass).to_string(),
        trigger_icon: pick(OptionKey::TriggerIcon).to_string(),
        trigger_position,
        trigger_type,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn attrs(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn resolve_with(pairs: &[(&str, &str)]) -> (PanelConfig, Vec<String>) {
        let mut warnings = Vec::new();
        let config = resolve(
            "panel",
            &attrs(pairs),
            &DocumentDefaults::builtin(),
            &mut warnings,
        );
        (config, warnings)
    }

    #[test]
    fn test_builtin_defaults() {
        let (config, warnings) = resolve_with(&[]);
        assert!(warnings.is_empty());
        assert_eq!(config.id, "panel");
        assert_eq!(config.placement, Placement::Start);
        assert_eq!(config.width, "400px");
        assert_eq!(config.height, "30vh");
        assert_eq!(config.responsive, None);
        assert_eq!(config.backdrop, Backdrop::True);
        assert!(!config.scroll);
        assert!(config.keyboard);
        assert!(config.show_close);
        assert_eq!(config.header_text, None);
        assert_eq!(config.trigger_text, "Open");
        assert_eq!(config.trigger_class, "btn btn-primary");
        assert_eq!(config.trigger_icon, "");
        assert_eq!(config.trigger_position, TriggerPosition::Inline);
        assert_eq!(config.trigger_type, TriggerType::Button);
    }

    #[test]
    fn test_local_overrides_document_defaults() {
        let mut defaults = DocumentDefaults::builtin();
        defaults.set(OptionKey::Placement, "top".to_string());
        defaults.set(OptionKey::TriggerText, "Show".to_string());

        let mut warnings = Vec::new();
        let config = resolve(
            "p",
            &attrs(&[("placement", "bottom")]),
            &defaults,
            &mut warnings,
        );
        assert_eq!(config.placement, Placement::Bottom);
        // Not overridden locally, so the document default applies
        assert_eq!(config.trigger_text, "Show");
    }

    #[test]
    fn test_empty_local_value_inherits() {
        let (config, warnings) = resolve_with(&[("placement", ""), ("width", "")]);
        assert!(warnings.is_empty());
        assert_eq!(config.placement, Placement::Start);
        assert_eq!(config.width, "400px");
    }

    #[test]
    fn test_placement_aliases() {
        assert_eq!(resolve_with(&[("placement", "left")]).0.placement, Placement::Start);
        assert_eq!(resolve_with(&[("placement", "right")]).0.placement, Placement::End);
    }

    #[test]
    fn test_invalid_placement_warns_once() {
        let (config, warnings) = resolve_with(&[("placement", "diagonal")]);
        assert_eq!(config.placement, Placement::Start);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("diagonal"));
    }

    #[test]
    fn test_invalid_responsive_is_dropped_with_warning() {
        let (config, warnings) = resolve_with(&[("responsive", "huge")]);
        assert_eq!(config.responsive, None);
        assert_eq!(warnings.len(), 1);

        let (config, warnings) = resolve_with(&[("responsive", "lg")]);
        assert_eq!(config.responsive, Some(Responsive::Lg));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_invalid_trigger_position_warns() {
        let (config, warnings) = resolve_with(&[("trigger-position", "floating")]);
        assert_eq!(config.trigger_position, TriggerPosition::Inline);
        assert_eq!(warnings.len(), 1);

        let (config, _) = resolve_with(&[("trigger-position", "none")]);
        assert_eq!(config.trigger_position, TriggerPosition::None);
    }

    #[test]
    fn test_invalid_backdrop_and_trigger_type_warn() {
        let (config, warnings) =
            resolve_with(&[("backdrop", "sometimes"), ("trigger-type", "link")]);
        assert_eq!(config.backdrop, Backdrop::True);
        assert_eq!(config.trigger_type, TriggerType::Button);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("sometimes"));
        assert!(warnings[1].contains("link"));
    }

    #[test]
    fn test_valid_backdrop_and_trigger_type() {
        let (config, warnings) =
            resolve_with(&[("backdrop", "static"), ("trigger-type", "text")]);
        assert_eq!(config.backdrop, Backdrop::Static);
        assert_eq!(config.trigger_type, TriggerType::Text);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_booleans_are_literal_strings() {
        // Only the exact literal counts; no truthy coercion
        let (config, _) = resolve_with(&[("scroll", "yes"), ("keyboard", "0")]);
        assert!(!config.scroll);
        assert!(config.keyboard);

        let (config, _) = resolve_with(&[
            ("scroll", "true"),
            ("keyboard", "false"),
            ("show-close", "false"),
        ]);
        assert!(config.scroll);
        assert!(!config.keyboard);
        assert!(!config.show_close);
    }

    #[test]
    fn test_title_attribute_becomes_header_text() {
        let (config, _) = resolve_with(&[("title", "Settings")]);
        assert_eq!(config.header_text.as_deref(), Some("Settings"));
    }

    #[test]
    fn test_backdrop_data_attribute() {
        assert_eq!(Backdrop::True.data_attribute(), None);
        assert_eq!(Backdrop::False.data_attribute(), Some("false"));
        assert_eq!(Backdrop::Static.data_attribute(), Some("static"));
    }

    #[test]
    fn test_option_key_names_roundtrip() {
        for key in OptionKey::ALL {
            assert_eq!(OptionKey::from_name(key.as_str()), Some(key));
        }
        assert_eq!(OptionKey::from_name("title"), None);
    }

    #[test]
    fn test_document_defaults_get_set() {
        let mut defaults = DocumentDefaults::builtin();
        assert!(!defaults.overtake_margins());
        defaults.set(OptionKey::OvertakeMargins, "true".to_string());
        assert!(defaults.overtake_margins());
        assert_eq!(defaults.get(OptionKey::OvertakeMargins), "true");
    }

    proptest! {
        #[test]
        fn prop_placement_normalizes(
            raw in prop::sample::select(vec!["left", "right", "start", "end", "top", "bottom"])
        ) {
            let (config, warnings) = resolve_with(&[("placement", raw)]);
            prop_assert!(warnings.is_empty());
            let expected = match raw {
                "left" | "start" => Placement::Start,
                "right" | "end" => Placement::End,
                "top" => Placement::Top,
                _ => Placement::Bottom,
            };
            prop_assert_eq!(config.placement, expected);
        }

        #[test]
        fn prop_unknown_placement_falls_back(raw in "[a-z]{1,12}") {
            let known = ["left", "right", "start", "end", "top", "bottom"];
            prop_assume!(!known.contains(&raw.as_str()));
            let (config, warnings) = resolve_with(&[("placement", raw.as_str())]);
            prop_assert_eq!(config.placement, Placement::Start);
            prop_assert_eq!(warnings.len(), 1);
        }
    }
}

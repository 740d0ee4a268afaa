/*
 * synthesize.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Builds offcanvas panel nodes and trigger markup.
 */

//! Panel and trigger synthesis.
//!
//! A panel is emitted as nodes so the host writer renders the body content
//! normally:
//!
//! ```text
//! Div#id.offcanvas.offcanvas-{placement}[.offcanvas-{responsive}]
//!   Div.offcanvas-header   title + dismiss button (raw HTML)
//!   Div.offcanvas-body     body blocks
//!   Div.offcanvas-footer   footer blocks (only when present)
//! ```
//!
//! Inline panels (margin notes authored as spans) use the same shape with
//! `Span`s. Every piece of text interpolated into raw HTML goes through
//! [`escape_html`].

use offcanvas_pandoc_types::{Attr, Block, Inline};

use crate::options::{PanelConfig, TriggerPosition, TriggerType};
use crate::partition::ContentSplit;

const DISMISS_BUTTON: &str = concat!(
    "<button type=\"button\" class=\"btn-close\" ",
    "data-bs-dismiss=\"offcanvas\" aria-label=\"Close\"></button>"
);

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn class_attr(classes: &[&str]) -> Attr {
    (
        String::new(),
        classes.iter().map(|c| c.to_string()).collect(),
        vec![],
    )
}

/// Attributes of the outer panel element.
pub fn container_attr(config: &PanelConfig) -> Attr {
    let mut classes = vec![
        "offcanvas".to_string(),
        format!("offcanvas-{}", config.placement.as_str()),
    ];
    if let Some(breakpoint) = config.responsive {
        classes.push(format!("offcanvas-{}", breakpoint.as_str()));
    }

    let mut kvs = vec![
        ("tabindex".to_string(), "-1".to_string()),
        (
            "aria-labelledby".to_string(),
            format!("{}-label", config.id),
        ),
    ];
    if let Some(backdrop) = config.backdrop.data_attribute() {
        kvs.push(("data-bs-backdrop".to_string(), backdrop.to_string()));
    }
    if config.scroll {
        kvs.push(("data-bs-scroll".to_string(), "true".to_string()));
    }
    if !config.keyboard {
        kvs.push(("data-bs-keyboard".to_string(), "false".to_string()));
    }
    let (axis, size) = if config.placement.is_horizontal() {
        ("width", &config.width)
    } else {
        ("height", &config.height)
    };
    if !size.is_empty() {
        kvs.push(("style".to_string(), format!("{}:{};", axis, size)));
    }

    (config.id.clone(), classes, kvs)
}

fn title_markup(id: &str, title: Option<&str>, inline: bool) -> Option<String> {
    let title = title?;
    let id = escape_html(id);
    let title = escape_html(title);
    Some(if inline {
        format!(
            "<span class=\"offcanvas-title h5\" id=\"{}-label\">{}</span>",
            id, title
        )
    } else {
        format!("<h5 class=\"offcanvas-title\" id=\"{}-label\">{}</h5>", id, title)
    })
}

fn header_markup(config: &PanelConfig, title: Option<&str>, inline: bool) -> Vec<String> {
    let mut parts = Vec::new();
    if let Some(title) = title_markup(&config.id, title, inline) {
        parts.push(title);
    }
    if config.show_close {
        parts.push(DISMISS_BUTTON.to_string());
    }
    parts
}

/// Build the block-level panel from already partitioned (and protected) content.
///
/// The title comes from `split.header_text`.
pub fn synthesize(config: &PanelConfig, split: ContentSplit) -> Block {
    let header = Block::Div(
        class_attr(&["offcanvas-header"]),
        header_markup(config, split.header_text.as_deref(), false)
            .into_iter()
            .map(Block::raw_html)
            .collect(),
    );
    let mut children = vec![
        header,
        Block::Div(class_attr(&["offcanvas-body"]), split.body_blocks),
    ];
    if !split.footer_blocks.is_empty() {
        children.push(Block::Div(
            class_attr(&["offcanvas-footer"]),
            split.footer_blocks,
        ));
    }
    tracing::debug!(
        id = %config.id,
        placement = config.placement.as_str(),
        "Synthesized offcanvas panel"
    );
    Block::Div(container_attr(config), children)
}

/// Build an inline panel around `content`.
pub fn synthesize_inline(
    config: &PanelConfig,
    title: Option<&str>,
    content: Vec<Inline>,
) -> Inline {
    let header = Inline::Span(
        class_attr(&["offcanvas-header"]),
        header_markup(config, title, true)
            .into_iter()
            .map(Inline::raw_html)
            .collect(),
    );
    let body = Inline::Span(class_attr(&["offcanvas-body"]), content);
    tracing::debug!(id = %config.id, "Synthesized inline offcanvas panel");
    Inline::Span(container_attr(config), vec![header, body])
}

fn icon_markup(icon: &str) -> String {
    if icon.is_empty() {
        return String::new();
    }
    let name = icon.strip_prefix("bi-").unwrap_or(icon);
    format!(
        "<i class=\"bi bi-{}\" aria-hidden=\"true\"></i> ",
        escape_html(name)
    )
}

/// Markup for the control that opens the panel, regardless of trigger position.
pub fn trigger_markup(config: &PanelConfig) -> String {
    let id = escape_html(&config.id);
    let class = match config.trigger_class.as_str() {
        "" | "none" => String::new(),
        class => format!(" class=\"{}\"", escape_html(class)),
    };
    let toggle = format!(
        "data-bs-toggle=\"offcanvas\" data-bs-target=\"#{}\" aria-controls=\"{}\"",
        id, id
    );
    let label = format!(
        "{}{}",
        icon_markup(&config.trigger_icon),
        escape_html(&config.trigger_text)
    );

    match config.trigger_type {
        TriggerType::Button => format!(
            "<button type=\"button\"{} {}>{}</button>",
            class, toggle, label
        ),
        TriggerType::Text => format!(
            "<a href=\"#{}\" role=\"button\"{} {}>{}</a>",
            id, class, toggle, label
        ),
    }
}

/// Trigger markup, or `None` when the trigger position is `none`.
pub fn synthesize_trigger(config: &PanelConfig) -> Option<String> {
    match config.trigger_position {
        TriggerPosition::Inline => Some(trigger_markup(config)),
        TriggerPosition::None => None,
    }
}

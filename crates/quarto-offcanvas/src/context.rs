/*
 * context.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Per-document state threaded through the offcanvas transforms.
 */

//! Per-document filter context.
//!
//! One [`OffcanvasContext`] is built for each document run. It replaces
//! process-wide state: the document defaults, the identifier counter, the
//! registered HTML dependencies and the collected warnings all live here.

use std::collections::HashSet;

use crate::dependency::HtmlDependency;
use crate::format::Format;
use crate::options::DocumentDefaults;

/// Extension name used to attribute warnings and to find the metadata block.
pub const EXTENSION_NAME: &str = "offcanvas";

/// Receiver for non-fatal warnings.
///
/// Core functions take a sink instead of logging directly, so tests can
/// inspect warnings without capturing log output.
pub trait WarningSink {
    fn warn(&mut self, message: String);
}

impl WarningSink for Vec<String> {
    fn warn(&mut self, message: String) {
        self.push(message);
    }
}

/// Logs each warning through `tracing` and keeps a copy.
#[derive(Debug, Default)]
pub struct WarningCollector {
    messages: Vec<String>,
}

impl WarningCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl WarningSink for WarningCollector {
    fn warn(&mut self, message: String) {
        tracing::warn!(extension = EXTENSION_NAME, "{}", message);
        self.messages.push(message);
    }
}

/// Mutable state for one document run.
#[derive(Debug)]
pub struct OffcanvasContext {
    /// Target format for this run
    pub format: Format,

    /// Document-wide option defaults (built-in, then merged from metadata)
    pub defaults: DocumentDefaults,

    /// Non-fatal warnings collected during transforms
    pub warnings: WarningCollector,

    /// HTML dependencies registered by the transforms
    pub dependencies: Vec<HtmlDependency>,

    /// Last counter value handed out by [`next_identifier`](Self::next_identifier)
    last_id: u64,

    /// Every element id known to be in use, written or generated
    used_ids: HashSet<String>,
}

impl OffcanvasContext {
    pub fn new(format: Format) -> Self {
        Self {
            format,
            defaults: DocumentDefaults::builtin(),
            warnings: WarningCollector::new(),
            dependencies: Vec::new(),
            last_id: 0,
            used_ids: HashSet::new(),
        }
    }

    /// Whether the target can host offcanvas panels at all.
    pub fn is_enabled(&self) -> bool {
        self.format.supports_offcanvas()
    }

    /// Mark `id` as taken so [`next_identifier`](Self::next_identifier)
    /// never produces it. Empty ids are ignored.
    pub fn reserve_identifier(&mut self, id: &str) {
        if !id.is_empty() {
            self.used_ids.insert(id.to_string());
        }
    }

    /// Generate a fresh panel identifier (`oc-1`, `oc-2`, ...).
    ///
    /// Counter values whose id is already reserved are skipped, so a
    /// generated id never equals one the author wrote.
    pub fn next_identifier(&mut self) -> String {
        loop {
            self.last_id += 1;
            let id = format!("oc-{}", self.last_id);
            if self.used_ids.insert(id.clone()) {
                return id;
            }
        }
    }

    /// Register an HTML dependency. Registering the same name twice is a no-op.
    pub fn add_html_dependency(&mut self, dependency: HtmlDependency) {
        if self
            .dependencies
            .iter()
            .any(|existing| existing.name == dependency.name)
        {
            return;
        }
        tracing::debug!(name = %dependency.name, "Registering HTML dependency");
        self.dependencies.push(dependency);
    }
}

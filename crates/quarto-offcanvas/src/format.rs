/*
 * format.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Output format types and capability queries.
 */

//! Output format specification and capability queries.
//!
//! The filter only acts when the target can run Bootstrap's offcanvas
//! component: an HTML format with scripting (`html:js`) whose page carries
//! the Bootstrap framework.

/// Format identifier enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatIdentifier {
    /// HTML document
    Html,
    /// RevealJS slides
    Revealjs,
    /// Quarto dashboard
    Dashboard,
    /// EPUB (HTML content, no scripting)
    Epub,
    /// PDF / LaTeX
    Pdf,
    /// Word document
    Docx,
    /// Typst
    Typst,
    /// GitHub-flavored Markdown
    Gfm,
    /// CommonMark
    CommonMark,
    /// Anything else
    Custom,
}

impl FormatIdentifier {
    /// Get the format name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatIdentifier::Html => "html",
            FormatIdentifier::Revealjs => "revealjs",
            FormatIdentifier::Dashboard => "dashboard",
            FormatIdentifier::Epub => "epub",
            FormatIdentifier::Pdf => "pdf",
            FormatIdentifier::Docx => "docx",
            FormatIdentifier::Typst => "typst",
            FormatIdentifier::Gfm => "gfm",
            FormatIdentifier::CommonMark => "commonmark",
            FormatIdentifier::Custom => "custom",
        }
    }

    /// Check if this is an HTML-based format
    pub fn is_html_based(&self) -> bool {
        matches!(
            self,
            FormatIdentifier::Html
                | FormatIdentifier::Revealjs
                | FormatIdentifier::Dashboard
                | FormatIdentifier::Epub
        )
    }

    /// Check if this format's output runs JavaScript
    pub fn supports_js(&self) -> bool {
        matches!(
            self,
            FormatIdentifier::Html | FormatIdentifier::Revealjs | FormatIdentifier::Dashboard
        )
    }
}

impl TryFrom<&str> for FormatIdentifier {
    type Error = String;

    /// Accepts Quarto format names and Pandoc writer names. Pandoc extension
    /// suffixes (`html5+smart`, `gfm-raw_html`) are ignored.
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let base = s
            .split(['+', '-'])
            .next()
            .unwrap_or_default()
            .to_lowercase();
        match base.as_str() {
            "html" | "html4" | "html5" => Ok(FormatIdentifier::Html),
            "revealjs" => Ok(FormatIdentifier::Revealjs),
            "dashboard" => Ok(FormatIdentifier::Dashboard),
            "epub" | "epub2" | "epub3" => Ok(FormatIdentifier::Epub),
            "pdf" | "latex" | "beamer" => Ok(FormatIdentifier::Pdf),
            "docx" => Ok(FormatIdentifier::Docx),
            "typst" => Ok(FormatIdentifier::Typst),
            "gfm" | "markdown" => Ok(FormatIdentifier::Gfm),
            "commonmark" | "commonmark_x" => Ok(FormatIdentifier::CommonMark),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// A target format together with the capabilities the filter cares about.
#[derive(Debug, Clone)]
pub struct Format {
    /// Format identifier
    pub identifier: FormatIdentifier,

    /// Whether the rendered page includes Bootstrap
    pub bootstrap: bool,
}

impl Format {
    /// Create an HTML format (Bootstrap enabled, as in the default Quarto theme)
    pub fn html() -> Self {
        Self {
            identifier: FormatIdentifier::Html,
            bootstrap: true,
        }
    }

    /// Create a RevealJS format (no Bootstrap)
    pub fn revealjs() -> Self {
        Self {
            identifier: FormatIdentifier::Revealjs,
            bootstrap: false,
        }
    }

    /// Create a PDF format
    pub fn pdf() -> Self {
        Self {
            identifier: FormatIdentifier::Pdf,
            bootstrap: false,
        }
    }

    /// Resolve a target name as passed by Pandoc or Quarto.
    ///
    /// Unknown names become [`FormatIdentifier::Custom`]. Bootstrap is
    /// assumed for HTML documents and dashboards.
    pub fn from_target(target: &str) -> Self {
        let identifier = FormatIdentifier::try_from(target).unwrap_or(FormatIdentifier::Custom);
        Self {
            identifier,
            bootstrap: matches!(
                identifier,
                FormatIdentifier::Html | FormatIdentifier::Dashboard
            ),
        }
    }

    /// Override Bootstrap availability (e.g. `theme: none`)
    pub fn with_bootstrap(mut self, bootstrap: bool) -> Self {
        self.bootstrap = bootstrap;
        self
    }

    /// Format selector query.
    ///
    /// - `html`: any HTML-based format
    /// - `html:js`: HTML-based formats whose output runs scripts
    /// - anything else: exact format name
    pub fn is_format(&self, selector: &str) -> bool {
        match selector {
            "html" => self.identifier.is_html_based(),
            "html:js" => self.identifier.is_html_based() && self.identifier.supports_js(),
            other => self.identifier.as_str() == other,
        }
    }

    /// Whether the target page carries Bootstrap
    pub fn has_bootstrap(&self) -> bool {
        self.bootstrap && self.identifier.is_html_based()
    }

    /// The capability gate for every offcanvas transform.
    pub fn supports_offcanvas(&self) -> bool {
        self.is_format("html:js") && self.has_bootstrap()
    }
}

impl Default for Format {
    fn default() -> Self {
        Self::html()
    }
}

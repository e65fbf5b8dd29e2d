//! Structural checks on a loaded [`SiteConfig`].
//!
//! Problems are collected rather than returned one at a time, so a single
//! run reports everything wrong with the file. Field paths use the config's
//! own key spelling, e.g. `themeConfig.sidebar[0].children[3]`.

use std::collections::HashSet;
use std::fmt;

use crate::config::{LastUpdated, SiteConfig};

/// Deepest header level the theme pulls into the sidebar (h2 = 1, h3 = 2).
pub const MAX_SIDEBAR_DEPTH: u32 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub field: String,
    pub message: String,
    pub hint: Option<String>,
}

impl Diagnostic {
    fn new(severity: Severity, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            field: field.into(),
            message: message.into(),
            hint: None,
        }
    }

    fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{level}: [{}] {}", self.field, self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, "\n  hint: {hint}")?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.items.push(Diagnostic::new(Severity::Error, field, message));
    }

    pub fn error_with_hint(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.items
            .push(Diagnostic::new(Severity::Error, field, message).with_hint(hint));
    }

    pub fn warn(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.items.push(Diagnostic::new(Severity::Warning, field, message));
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter().filter(|d| d.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter().filter(|d| d.severity == Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    /// `Err` on any error, or on any diagnostic at all when `strict`.
    pub fn into_result(self, strict: bool) -> Result<Self, Self> {
        if self.has_errors() || (strict && !self.is_empty()) {
            Err(self)
        } else {
            Ok(self)
        }
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "config validation failed:")?;
        for item in &self.items {
            writeln!(f, "{item}")?;
        }
        let errors = self.errors().count();
        let warnings = self.warnings().count();
        write!(f, "found {errors} error(s), {warnings} warning(s)")
    }
}

impl std::error::Error for Diagnostics {}

pub fn validate(config: &SiteConfig) -> Diagnostics {
    let mut diag = Diagnostics::new();

    if config.base.is_empty() {
        diag.error_with_hint("base", "must not be empty", "use \"/\" to serve from the root");
    } else if !config.base.starts_with('/') || !config.base.ends_with('/') {
        diag.error_with_hint(
            "base",
            format!("`{}` must start and end with `/`", config.base),
            format!("try \"/{}/\"", config.base.trim_matches('/')),
        );
    }
    if config.title.trim().is_empty() {
        diag.error("title", "must not be empty");
    }
    if config.description.trim().is_empty() {
        diag.warn("description", "is empty; pages will have no meta description");
    }

    if let LastUpdated::Label(label) = config.last_updated() {
        if label.trim().is_empty() {
            diag.error_with_hint(
                "themeConfig.lastUpdated",
                "label must not be empty",
                "use `false` to turn the feature off",
            );
        }
    }

    for (i, nav) in config.nav().iter().enumerate() {
        if nav.text.trim().is_empty() {
            diag.error(format!("themeConfig.nav[{i}].text"), "must not be empty");
        }
        if nav.link.trim().is_empty() {
            diag.error(format!("themeConfig.nav[{i}].link"), "must not be empty");
        }
    }

    for (i, section) in config.sidebar().iter().enumerate() {
        let field = format!("themeConfig.sidebar[{i}]");
        if section.title.trim().is_empty() {
            diag.error(format!("{field}.title"), "must not be empty");
        }
        check_page_path(&mut diag, format!("{field}.path"), &section.path);

        if section.sidebar_depth > MAX_SIDEBAR_DEPTH {
            diag.warn(
                format!("{field}.sidebarDepth"),
                format!(
                    "{} is deeper than the {MAX_SIDEBAR_DEPTH} header levels the theme extracts",
                    section.sidebar_depth
                ),
            );
        }

        let mut seen = HashSet::new();
        for (j, child) in section.children.iter().enumerate() {
            let child_field = format!("{field}.children[{j}]");
            check_page_path(&mut diag, child_field.clone(), child);
            if !seen.insert(child.as_str()) {
                diag.warn(child_field, format!("`{child}` is listed more than once"));
            }
        }

        // A section without children is a single-page link to `path`.
        if !section.children.is_empty() && !section.children.contains(&section.path) {
            diag.warn(
                format!("{field}.path"),
                format!("`{}` is not one of the section's children", section.path),
            );
        }
    }

    diag
}

fn check_page_path(diag: &mut Diagnostics, field: String, path: &str) {
    if path.is_empty() {
        diag.error(field, "must not be empty");
    } else if !path.starts_with('/') {
        diag.error_with_hint(
            field,
            format!("`{path}` must begin with `/`"),
            format!("try \"/{path}\""),
        );
    }
}

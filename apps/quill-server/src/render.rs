//! Server-side HTML rendering with Handlebars.
//!
//! Page templates are `<dir>/*.hbs`, registered under their file stem.
//! Partials are `<dir>/partials/*.hbs`.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::DateTime;
use glob::glob;
use handlebars::{Handlebars, RenderError, handlebars_helper};
use serde::Serialize;

/// Fixed category list shown in the navigation and the admin form.
pub const CATEGORIES: [&str; 5] = ["Technology", "Lifestyle", "Travel", "Food", "Business"];

#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("Invalid template pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Failed to walk template directory: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("Failed to read template: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse template: {0}")]
    Parse(#[from] handlebars::TemplateError),

    #[error("No page templates found in {0}")]
    Empty(PathBuf),
}

/// `January 2, 2006` style date from an RFC 3339 timestamp.
pub fn format_date(value: &str) -> String {
    DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|_| value.to_string())
}

/// The first `length` characters followed by `...`, or `value` unchanged
/// when it is shorter than `length`.
pub fn truncate(value: &str, length: usize) -> String {
    if value.chars().count() < length {
        return value.to_string();
    }
    let mut out: String = value.chars().take(length).collect();
    out.push_str("...");
    out
}

handlebars_helper!(format_date_helper: |value: str| format_date(value));
handlebars_helper!(truncate_helper: |value: str, length: u64| truncate(value, length as usize));
handlebars_helper!(add_helper: |a: i64, b: i64| a + b);

/// Compiled page templates.
pub struct Templates {
    registry: Handlebars<'static>,
}

impl Templates {
    /// Load every page and partial under `dir`.
    pub fn load(dir: &Path) -> Result<Self, TemplateError> {
        let mut registry = Handlebars::new();
        registry.register_helper("formatDate", Box::new(format_date_helper));
        registry.register_helper("truncate", Box::new(truncate_helper));
        registry.register_helper("add", Box::new(add_helper));

        for (name, content) in read_templates(&dir.join("partials"))? {
            tracing::debug!(partial = %name, "Registering partial");
            registry.register_partial(&name, content)?;
        }

        let pages = read_templates(dir)?;
        if pages.is_empty() {
            return Err(TemplateError::Empty(dir.to_path_buf()));
        }
        for (name, content) in pages {
            tracing::debug!(template = %name, "Registering template");
            registry.register_template_string(&name, content)?;
        }

        Ok(Self { registry })
    }

    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, RenderError> {
        self.registry.render(name, data)
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.registry.has_template(name)
    }
}

fn read_templates(dir: &Path) -> Result<Vec<(String, String)>, TemplateError> {
    let pattern = dir.join("*.hbs");
    let mut templates = Vec::new();

    for entry in glob(&pattern.to_string_lossy())? {
        let path = entry?;
        let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        templates.push((name.to_string(), fs::read_to_string(&path)?));
    }

    Ok(templates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn templates() -> Templates {
        Templates::load(&Path::new(env!("CARGO_MANIFEST_DIR")).join("templates")).unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2006-01-02T15:04:05Z"), "January 2, 2006");
        assert_eq!(format_date("2024-11-30T00:00:00+00:00"), "November 30, 2024");
        assert_eq!(format_date("not a date"), "not a date");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly", 7), "exactly...");
        assert_eq!(truncate("a longer sentence", 8), "a longer...");
        assert_eq!(truncate("héllo wörld", 5), "héllo...");
    }

    #[test]
    fn test_load_registers_pages() {
        let templates = templates();
        assert!(templates.has_template("index"));
        assert!(templates.has_template("post"));
        assert!(templates.has_template("admin"));
    }

    #[test]
    fn test_helpers_in_templates() {
        let mut registry = Handlebars::new();
        registry.register_helper("formatDate", Box::new(format_date_helper));
        registry.register_helper("truncate", Box::new(truncate_helper));
        registry.register_helper("add", Box::new(add_helper));

        let out = registry
            .render_template(
                "{{formatDate ts}}|{{truncate body 3}}|{{add n 1}}",
                &json!({"ts": "2006-01-02T15:04:05Z", "body": "abcdef", "n": 4}),
            )
            .unwrap();
        assert_eq!(out, "January 2, 2006|abc...|5");
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let result = Templates::load(Path::new("/nonexistent/quill/templates"));
        assert!(matches!(result, Err(TemplateError::Empty(_))));
    }
}

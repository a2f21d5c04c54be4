//! Template engine wrapper.
//!
//! Loads every `.html` file under the configured templates directory at
//! startup and renders them by name at request time. Templates are addressed
//! by their path relative to the templates directory, e.g.
//! `website/index.html`.

use std::path::Path;

use tera::{Context, Tera};
use tracing::debug;

use crate::error::TemplateError;

/// Template engine holding the loaded template set.
#[derive(Debug)]
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Load all `.html` templates under `dir`.
    ///
    /// A template that fails to parse aborts the load; a directory with no
    /// templates loads an empty set.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, TemplateError> {
        let glob = format!("{}/**/*.html", dir.as_ref().display());
        let tera = Tera::new(&glob)?;

        debug!(
            "loaded {} template(s) from {}",
            tera.get_template_names().count(),
            dir.as_ref().display()
        );

        Ok(Self { tera })
    }

    /// Render the named template with an empty context.
    pub fn render(&self, name: &str) -> Result<String, TemplateError> {
        self.tera.render(name, &Context::new()).map_err(|e| {
            if matches!(e.kind, tera::ErrorKind::TemplateNotFound(_)) {
                TemplateError::NotFound {
                    name: name.to_string(),
                }
            } else {
                TemplateError::Engine(e)
            }
        })
    }

    /// Check whether a template with the given name was loaded.
    pub fn contains(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    fn fixture_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("website")).unwrap();
        fs::write(
            dir.path().join("website/index.html"),
            "<h1>Welcome</h1>\n",
        )
        .unwrap();
        dir
    }

    #[test]
    fn renders_loaded_template() {
        let dir = fixture_dir();
        let engine = TemplateEngine::load(dir.path()).unwrap();

        let html = engine.render("website/index.html").unwrap();
        assert_eq!(html, "<h1>Welcome</h1>\n");
    }

    #[test]
    fn contains_reports_loaded_names() {
        let dir = fixture_dir();
        let engine = TemplateEngine::load(dir.path()).unwrap();

        assert!(engine.contains("website/index.html"));
        assert!(!engine.contains("website/missing.html"));
    }

    #[test]
    fn missing_template_is_not_found() {
        let dir = fixture_dir();
        let engine = TemplateEngine::load(dir.path()).unwrap();

        let err = engine.render("website/missing.html").unwrap_err();
        assert!(matches!(err, TemplateError::NotFound { ref name } if name == "website/missing.html"));
    }

    #[test]
    fn empty_directory_loads_empty_set() {
        let dir = tempfile::tempdir().unwrap();
        let engine = TemplateEngine::load(dir.path()).unwrap();

        assert!(!engine.contains("website/index.html"));
    }

    #[test]
    fn template_variables_are_substituted() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("greet.html"),
            "{% set who = \"world\" %}Hello, {{ who }}!",
        )
        .unwrap();

        let engine = TemplateEngine::load(dir.path()).unwrap();
        assert_eq!(engine.render("greet.html").unwrap(), "Hello, world!");
    }
}

//! Template rendering for catalog descriptors.
//!
//! Templates use Jinja2 syntax with PascalCase field names, e.g.
//! `image: acme/{{ Project }}:{{ Tag }}`.
//!
//! Go `text/template` syntax is not accepted. Catalog repositories with
//! templates like `{{ .Tag }}` must drop the leading dot; anything else
//! beyond plain substitution (`{{ if }}`, `{{ range }}`) needs rewriting as
//! `{% if %}` / `{% for %}` blocks.

use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;

use crate::error::Result;

/// Values available to catalog templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TemplateContext {
    /// Selected image tag
    pub tag: String,
    /// CI build number
    pub build: u64,
    /// Normalized repository name
    pub project: String,
    /// Repository name as reported by CI
    pub github_repo: String,
    pub docker_repo: String,
    /// Effective branch slug
    pub branch: String,
}

/// Render a single template with the given context.
///
/// Undefined variables are errors, so a typo in a template fails the build
/// rather than publishing a descriptor with blank fields.
pub fn render(name: &str, source: &str, context: &TemplateContext) -> Result<String> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_keep_trailing_newline(true);
    env.add_template(name, source)?;

    let tmpl = env.get_template(name)?;
    Ok(tmpl.render(context)?)
}

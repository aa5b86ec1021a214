use regex::Regex;

use crate::boundary::CatalogWarning;
use crate::error::{CatalogError, Result};

/// Tag name that registries use for the moving "most recent" build.
pub const LATEST: &str = "latest";

/// Picks the tag a catalog entry is published under.
///
/// Rules, in priority order:
/// 1. First tag matched by `pattern` (unanchored search), if the pattern is
///    non-empty and compiles. An invalid pattern is logged and ignored.
/// 2. First tag that is not `latest`.
/// 3. First tag that is `latest`.
///
/// The result is always a verbatim member of `tags`.
///
/// # Errors
/// * [`CatalogError::NoValidTags`] - if `tags` is empty
///
/// # Examples
/// ```ignore
/// pick_tag(&["1.0.1-abc", "1.0.1", "latest"], "")                       // "1.0.1-abc"
/// pick_tag(&["1.0.1-abc", "1.0.1", "latest"], "[0-9]+[.][0-9]+[.][0-9]+$") // "1.0.1"
/// pick_tag(&["latest"], "[0-9]+$")                                        // "latest"
/// ```
pub fn pick_tag<S: AsRef<str>>(tags: &[S], pattern: &str) -> Result<String> {
    let tags: Vec<&str> = tags.iter().map(|t| t.as_ref()).collect();

    tracing::info!("Found the following tags:");
    for tag in &tags {
        tracing::info!("  {}", tag);
    }

    if let Some(re) = compile_pattern(pattern) {
        if let Some(tag) = tags.iter().copied().find(|t| re.is_match(t)) {
            tracing::debug!(tag, "using first regex matched tag");
            return Ok(tag.to_string());
        }
    }

    if let Some(tag) = tags.iter().copied().find(|t| *t != LATEST) {
        tracing::debug!(tag, "using first tag that is not 'latest'");
        return Ok(tag.to_string());
    }

    if let Some(tag) = tags.iter().copied().find(|t| *t == LATEST) {
        tracing::debug!("using 'latest' tag");
        return Ok(tag.to_string());
    }

    Err(CatalogError::NoValidTags)
}

/// Compiles the operator supplied pattern. `None` when empty or invalid.
fn compile_pattern(pattern: &str) -> Option<Regex> {
    if pattern.is_empty() {
        return None;
    }

    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            let warning = CatalogWarning::InvalidTagRegex {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            };
            tracing::warn!("{}", warning);
            None
        }
    }
}

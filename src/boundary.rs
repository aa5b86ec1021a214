use std::fmt;

/// Non-fatal conditions hit while building a catalog entry.
/// These are reported to the operator but never abort the run.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogWarning {
    /// The tag selection regex did not compile; selection falls back to the default rules
    InvalidTagRegex { pattern: String, reason: String },
    /// Rendering produced no difference in the catalog repository
    NoFilesChanged,
    /// Dry run requested; commit and push are skipped
    DryRun,
}

impl fmt::Display for CatalogWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogWarning::InvalidTagRegex { pattern, reason } => {
                write!(f, "Failed to compile tag regex '{}': {}", pattern, reason)
            }
            CatalogWarning::NoFilesChanged => {
                write!(f, "No files changed in catalog, nothing to commit")
            }
            CatalogWarning::DryRun => {
                write!(f, "Dry run enabled, skipping commit and push")
            }
        }
    }
}

//! Main workflow orchestration logic
//!
//! Keeps the catalog publishing sequence separate from CLI argument parsing so
//! it can be driven programmatically and tested against a mock repository.

use std::fs;
use std::path::{Path, PathBuf};

use crate::boundary::CatalogWarning;
use crate::catalog::{CatalogEntry, CatalogWriter};
use crate::config::Config;
use crate::domain::{pick_tag, BuildContext};
use crate::error::Result;
use crate::git::{CatalogRepository, Credentials};
use crate::render::TemplateContext;

/// Arguments for the catalog workflow
///
/// Mirrors the CLI Args but in a format suitable for orchestration logic.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogWorkflowArgs {
    /// Skip commit and push
    pub dry_run: bool,

    /// Directory the catalog repository is cloned under
    pub catalog_context: PathBuf,

    /// Catalog repository as `owner/repo`
    pub catalog_repo: String,

    /// Candidate image tags, in registry order
    pub tags: Vec<String>,

    /// Optional tag selection regex; empty disables it
    pub tag_regex: String,

    pub build: BuildContext,

    pub docker_repo: String,

    pub credentials: Credentials,
}

/// Result of a successful catalog workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// The tag written into the catalog entry
    pub tag: String,

    /// Effective branch slug
    pub branch: String,

    /// `<branch>/<build number>`
    pub build_dir: String,

    pub entry: CatalogEntry,

    /// Whether a commit was created and pushed
    pub committed: bool,
}

/// Main catalog workflow
///
/// Orchestrates the publishing process, each step depending on the previous:
/// 1. Select the tag (fails before touching disk)
/// 2. Derive the catalog path
/// 3. Clear any previous clone and clone the catalog repository
/// 4. Configure commit identity
/// 5. Write the catalog entry
/// 6. Add, commit and push if anything changed and this is not a dry run
///
/// # Arguments
///
/// * `args` - Workflow arguments
/// * `config` - Layout and git configuration
/// * `clone` - Clones a URL into a directory, yielding the repository handle
pub fn run_catalog_workflow<R, F>(
    args: &CatalogWorkflowArgs,
    config: &Config,
    clone: F,
) -> Result<WorkflowResult>
where
    R: CatalogRepository,
    F: FnOnce(&str, &Path) -> Result<R>,
{
    let tag = pick_tag(&args.tags, &args.tag_regex)?;
    tracing::info!("Using tag: {}", tag);

    let build = &args.build;
    let path = build.catalog_path();
    if build.is_release_branch() {
        tracing::info!(
            "Release branch detected. Using project '{}' as branch",
            path.project_slug
        );
    }

    let context = TemplateContext {
        tag: tag.clone(),
        build: build.build_number,
        project: path.project_slug.clone(),
        github_repo: build.repo.clone(),
        docker_repo: args.docker_repo.clone(),
        branch: path.branch_slug.clone(),
    };

    let repo_path = args.catalog_context.join(&config.layout.repo_dir);
    fs::create_dir_all(&args.catalog_context)?;
    if repo_path.exists() {
        tracing::debug!("Removing previous clone at {}", repo_path.display());
        fs::remove_dir_all(&repo_path)?;
    }

    let url = config.git.clone_url(&args.catalog_repo);
    let repo = clone(&url, &repo_path)?;
    repo.configure_identity(&args.credentials.username, &args.credentials.email)?;

    let entry = CatalogWriter::new(&repo_path, &config.layout).write_entry(&path, &context)?;

    let committed = if args.dry_run {
        tracing::info!("{}", CatalogWarning::DryRun);
        false
    } else if repo.has_pending_changes()? {
        repo.add_all()?;
        repo.commit(&config.git.commit_message_for(build.build_number))?;
        repo.push()?;
        true
    } else {
        tracing::info!("{}", CatalogWarning::NoFilesChanged);
        false
    };

    Ok(WorkflowResult {
        tag,
        branch: path.branch_slug,
        build_dir: path.build_dir,
        entry,
        committed,
    })
}

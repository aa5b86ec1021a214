use std::path::{Path, PathBuf};

use super::name::normalize;

/// CI build being published into the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildContext {
    pub branch: String,
    pub repo: String,
    pub build_number: u64,
    /// Branch published under the project name; empty disables the override
    pub release_branch: String,
}

impl BuildContext {
    /// Create a new build context
    pub fn new(
        branch: impl Into<String>,
        repo: impl Into<String>,
        build_number: u64,
        release_branch: impl Into<String>,
    ) -> Self {
        BuildContext {
            branch: branch.into(),
            repo: repo.into(),
            build_number,
            release_branch: release_branch.into(),
        }
    }

    /// Check if this build comes from the release branch
    pub fn is_release_branch(&self) -> bool {
        is_release(&self.branch, &self.release_branch)
    }

    pub fn project_slug(&self) -> String {
        normalize(&self.repo)
    }

    pub fn branch_slug(&self) -> String {
        normalize(&self.branch)
    }

    /// Branch slug the catalog entry is filed under
    pub fn effective_branch_slug(&self) -> String {
        if self.is_release_branch() {
            self.project_slug()
        } else {
            self.branch_slug()
        }
    }

    pub fn catalog_path(&self) -> CatalogPath {
        derive_path(
            &self.branch,
            &self.repo,
            self.build_number,
            &self.release_branch,
        )
    }
}

/// Location of one build inside the catalog, relative to the output root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPath {
    pub project_slug: String,
    /// Effective branch slug, i.e. the branch directory name
    pub branch_slug: String,
    pub build_number: u64,
    /// `<branch_slug>/<build_number>`
    pub build_dir: String,
}

impl CatalogPath {
    pub fn branch_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.branch_slug)
    }

    /// Resolved segment by segment so an empty branch slug stays under `root`.
    pub fn build_path(&self, root: &Path) -> PathBuf {
        self.branch_dir(root).join(self.build_number.to_string())
    }
}

/// Derives the catalog directories for a build.
///
/// A build on `release_branch` (exact match on the raw names, ignored when
/// `release_branch` is empty) is filed under the project slug instead of the
/// branch slug. Build directories are keyed by the CI build number.
pub fn derive_path(
    branch: &str,
    repo: &str,
    build_number: u64,
    release_branch: &str,
) -> CatalogPath {
    let project_slug = normalize(repo);
    let branch_slug = if is_release(branch, release_branch) {
        project_slug.clone()
    } else {
        normalize(branch)
    };
    let build_dir = format!("{}/{}", branch_slug, build_number);

    CatalogPath {
        project_slug,
        branch_slug,
        build_number,
        build_dir,
    }
}

fn is_release(branch: &str, release_branch: &str) -> bool {
    !release_branch.is_empty() && branch == release_branch
}

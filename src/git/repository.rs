use std::cell::RefCell;
use std::path::Path;

use git2::build::RepoBuilder;
use git2::{
    Cred, ErrorCode, FetchOptions, IndexAddOption, PushOptions, RemoteCallbacks,
    Repository as Git2Repo, Signature, StatusOptions,
};

use crate::error::{CatalogError, Result};
use crate::git::{CatalogRepository, Credentials};

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
    credentials: Credentials,
    remote: String,
}

/// Authenticate over HTTPS with the token as user name and an empty password.
fn remote_callbacks(credentials: &Credentials) -> RemoteCallbacks<'_> {
    let mut callbacks = RemoteCallbacks::new();
    callbacks.credentials(move |_url, _username_from_url, _allowed_types| {
        Cred::userpass_plaintext(&credentials.token, "")
    });
    callbacks
}

impl Git2Repository {
    /// Clone `url` into `dest`
    ///
    /// # Arguments
    /// * `url` - HTTPS clone URL
    /// * `dest` - Target directory, must not exist or be empty
    /// * `credentials` - Token used for clone and later pushes
    /// * `remote` - Remote name pushes go to
    pub fn clone(url: &str, dest: &Path, credentials: &Credentials, remote: &str) -> Result<Self> {
        tracing::info!("Cloning catalog repo: {}", url);

        let mut fetch_options = FetchOptions::new();
        fetch_options.remote_callbacks(remote_callbacks(credentials));

        let repo = RepoBuilder::new()
            .fetch_options(fetch_options)
            .clone(url, dest)
            .map_err(|e| CatalogError::remote(format!("Clone of {} failed: {}", url, e)))?;

        Ok(Git2Repository {
            repo,
            credentials: credentials.clone(),
            remote: remote.to_string(),
        })
    }

    /// Open an existing clone
    pub fn open<P: AsRef<Path>>(path: P, credentials: &Credentials, remote: &str) -> Result<Self> {
        let repo = Git2Repo::open(path)?;

        Ok(Git2Repository {
            repo,
            credentials: credentials.clone(),
            remote: remote.to_string(),
        })
    }

    fn signature(&self) -> Result<Signature<'static>> {
        self.repo.signature().map_err(|e| {
            CatalogError::config(format!("No commit identity configured: {}", e))
        })
    }
}

impl CatalogRepository for Git2Repository {
    fn configure_identity(&self, name: &str, email: &str) -> Result<()> {
        let mut config = self.repo.config()?;
        config.set_str("user.name", name)?;
        config.set_str("user.email", email)?;
        Ok(())
    }

    fn has_pending_changes(&self) -> Result<bool> {
        let mut options = StatusOptions::new();
        options.include_untracked(true).recurse_untracked_dirs(true);

        let statuses = self.repo.statuses(Some(&mut options))?;
        if statuses.is_empty() {
            tracing::info!("No files changed.");
            Ok(false)
        } else {
            tracing::info!("Files changed, add/commit/push changes.");
            Ok(true)
        }
    }

    fn add_all(&self) -> Result<()> {
        let mut index = self.repo.index()?;
        index.add_all(["*"].iter(), IndexAddOption::DEFAULT, None)?;
        index.update_all(["*"].iter(), None)?;
        index.write()?;
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<String> {
        let mut index = self.repo.index()?;
        let tree_oid = index.write_tree()?;
        let tree = self.repo.find_tree(tree_oid)?;
        let signature = self.signature()?;

        let parents = match self.repo.head() {
            Ok(head) => vec![head.peel_to_commit()?],
            Err(e) if e.code() == ErrorCode::UnbornBranch => vec![],
            Err(e) => return Err(e.into()),
        };
        let parent_refs: Vec<&git2::Commit> = parents.iter().collect();

        let oid = self.repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            message,
            &tree,
            &parent_refs,
        )?;

        tracing::info!("Committed {}", oid);
        Ok(oid.to_string())
    }

    fn push(&self) -> Result<()> {
        let head = self.repo.head()?;
        let branch = head
            .shorthand()
            .ok_or_else(|| CatalogError::remote("HEAD is not a named branch"))?;
        let refspec = format!("refs/heads/{}:refs/heads/{}", branch, branch);

        let mut remote = self
            .repo
            .find_remote(&self.remote)
            .map_err(|e| CatalogError::remote(format!("Cannot find remote: {}", e)))?;

        let rejected: RefCell<Option<String>> = RefCell::new(None);
        let mut callbacks = remote_callbacks(&self.credentials);
        callbacks.push_update_reference(|refname, status| {
            if let Some(status) = status {
                *rejected.borrow_mut() = Some(format!("{}: {}", refname, status));
            }
            Ok(())
        });

        let mut push_options = PushOptions::new();
        push_options.remote_callbacks(callbacks);

        tracing::info!("Pushing {} to {}", branch, self.remote);
        remote
            .push(&[refspec.as_str()], Some(&mut push_options))
            .map_err(|e| CatalogError::remote(format!("Push failed: {}", e)))?;

        if let Some(reason) = rejected.take() {
            return Err(CatalogError::remote(format!("Push rejected: {}", reason)));
        }
        Ok(())
    }
}

//! Git operations abstraction layer
//!
//! The workflow only needs a handful of operations on the cloned catalog
//! repository, captured by the [CatalogRepository] trait:
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A recording implementation for testing
//!
//! Cloning is a constructor on the concrete type, so the workflow receives it
//! as a closure and stays independent of `git2`.

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use std::fmt;

use crate::error::Result;

/// GitHub identity used to clone, commit and push
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub token: String,
    pub email: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("token", &"<redacted>")
            .field("email", &self.email)
            .finish()
    }
}

/// Operations on a cloned catalog repository
///
/// All methods return [crate::error::Result<T>]. Implementations map
/// underlying errors (like `git2::Error`) to [crate::error::CatalogError].
pub trait CatalogRepository {
    /// Set the author and committer identity for commits made by this tool
    ///
    /// The identity is stored in the repository's own configuration so the
    /// user's global git configuration is left alone.
    fn configure_identity(&self, name: &str, email: &str) -> Result<()>;

    /// Whether the working tree differs from HEAD, counting untracked files
    fn has_pending_changes(&self) -> Result<bool>;

    /// Stage every addition, modification and deletion in the working tree
    fn add_all(&self) -> Result<()>;

    /// Commit the index on top of HEAD
    ///
    /// # Returns
    /// * `Ok(String)` - The new commit id
    fn commit(&self, message: &str) -> Result<String>;

    /// Push the current branch to its remote
    fn push(&self) -> Result<()>;
}

impl<T: CatalogRepository + ?Sized> CatalogRepository for &T {
    fn configure_identity(&self, name: &str, email: &str) -> Result<()> {
        (**self).configure_identity(name, email)
    }

    fn has_pending_changes(&self) -> Result<bool> {
        (**self).has_pending_changes()
    }

    fn add_all(&self) -> Result<()> {
        (**self).add_all()
    }

    fn commit(&self, message: &str) -> Result<String> {
        (**self).commit(message)
    }

    fn push(&self) -> Result<()> {
        (**self).push()
    }
}

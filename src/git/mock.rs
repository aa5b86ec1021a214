use std::cell::{Cell, RefCell};

use crate::error::{CatalogError, Result};
use crate::git::CatalogRepository;

/// Operation recorded by [MockRepository]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedOp {
    ConfigureIdentity { name: String, email: String },
    AddAll,
    Commit { message: String },
    Push,
}

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    pending_changes: Cell<bool>,
    fail_push: bool,
    ops: RefCell<Vec<RecordedOp>>,
}

impl MockRepository {
    /// Create a new mock repository with no pending changes
    pub fn new() -> Self {
        MockRepository {
            pending_changes: Cell::new(false),
            fail_push: false,
            ops: RefCell::new(Vec::new()),
        }
    }

    /// Report pending changes until the next commit
    pub fn with_pending_changes(self) -> Self {
        self.pending_changes.set(true);
        self
    }

    /// Make `push` fail with a remote error
    pub fn with_failing_push(mut self) -> Self {
        self.fail_push = true;
        self
    }

    /// Operations performed so far, in call order
    pub fn ops(&self) -> Vec<RecordedOp> {
        self.ops.borrow().clone()
    }

    fn record(&self, op: RecordedOp) {
        self.ops.borrow_mut().push(op);
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogRepository for MockRepository {
    fn configure_identity(&self, name: &str, email: &str) -> Result<()> {
        self.record(RecordedOp::ConfigureIdentity {
            name: name.to_string(),
            email: email.to_string(),
        });
        Ok(())
    }

    fn has_pending_changes(&self) -> Result<bool> {
        Ok(self.pending_changes.get())
    }

    fn add_all(&self) -> Result<()> {
        self.record(RecordedOp::AddAll);
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<String> {
        self.record(RecordedOp::Commit {
            message: message.to_string(),
        });
        self.pending_changes.set(false);
        Ok("0".repeat(40))
    }

    fn push(&self) -> Result<()> {
        if self.fail_push {
            return Err(CatalogError::remote("Push failed: mock rejection"));
        }
        self.record(RecordedOp::Push);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_records_operations_in_order() {
        let repo = MockRepository::new().with_pending_changes();

        repo.configure_identity("ci-bot", "ci@example.com").unwrap();
        assert!(repo.has_pending_changes().unwrap());
        repo.add_all().unwrap();
        repo.commit("msg").unwrap();
        repo.push().unwrap();

        assert_eq!(
            repo.ops(),
            vec![
                RecordedOp::ConfigureIdentity {
                    name: "ci-bot".to_string(),
                    email: "ci@example.com".to_string(),
                },
                RecordedOp::AddAll,
                RecordedOp::Commit {
                    message: "msg".to_string()
                },
                RecordedOp::Push,
            ]
        );
        assert!(!repo.has_pending_changes().unwrap());
    }

    #[test]
    fn test_mock_default_is_clean() {
        let repo = MockRepository::default();
        assert!(!repo.has_pending_changes().unwrap());
        assert!(repo.ops().is_empty());
    }

    #[test]
    fn test_mock_failing_push() {
        let repo = MockRepository::new().with_failing_push();
        assert!(repo.push().is_err());
    }
}

pub mod orchestration;

pub use orchestration::{run_catalog_workflow, CatalogWorkflowArgs, WorkflowResult};

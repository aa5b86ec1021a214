//! Domain logic - pure selection and naming rules independent of git operations

pub mod build;
pub mod name;
pub mod tag;

pub use build::{derive_path, BuildContext, CatalogPath};
pub use name::normalize;
pub use tag::{pick_tag, LATEST};

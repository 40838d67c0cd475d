//! High-level operations
//!
//! - PackOperation: scan, resolve, validate and write a package
//! - DeployOperation: pack into a transient archive and upload it
//! - RetrieveOperation: download a published version and place it
//!
//! Every operation aborts on the first core failure; no archive is left
//! behind by a failed deploy or retrieve.

pub mod deploy;
pub mod pack;
pub mod retrieve;

pub use deploy::{DeployOperation, DeployOutcome};
pub use pack::{PackOperation, PackOptions, PackOutcome};
pub use retrieve::{RetrieveOperation, RetrieveOutcome};

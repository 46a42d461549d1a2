//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod cluster;
pub mod config;
pub mod error;

pub use cluster::{ClusterIdentifier, ContainerInstanceRef, InstanceDescriptor, TargetVersion};
pub use config::{ReconcileMode, UpdaterConfig, UpdaterConfigInput, VersionSource};
pub use error::{ConfigError, ReleaseError};

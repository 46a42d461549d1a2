//! Infrastructure layer — concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: the ECS control plane,
//! AWS session loading and the GitHub release lookup.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod ecs;
pub mod release;
pub mod session;

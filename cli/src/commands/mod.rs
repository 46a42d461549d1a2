//! Command implementations

pub mod reconcile;

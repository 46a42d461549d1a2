//! `TerminalReporter` — Presentation-layer implementation of `ReconcileReporter`.
//!
//! Wraps `&OutputContext` and implements the `application::ports::ReconcileReporter`
//! trait so the reconcile service can emit per-instance notices without
//! depending on any presentation type directly.

use owo_colors::OwoColorize as _;

use crate::application::ports::ReconcileReporter;
use crate::domain::{ContainerInstanceRef, TargetVersion};
use crate::output::{OutputContext, Styles};

/// Terminal reporter that wraps an `OutputContext`.
///
/// - `updating()` prints `"  → Updating container agent on {instance} to version: {target}"`
/// - `up_to_date()` prints `"  ✓ Container agent on {instance} up to date. Latest agent version is: {target}"`
/// - `outdated()` prints `"  ⚠ Container agent on {instance} is outdated: running {current}, target is {target}"`
pub struct TerminalReporter<'a> {
    ctx: &'a OutputContext,
}

impl<'a> TerminalReporter<'a> {
    /// Create a new `TerminalReporter` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }
}

impl ReconcileReporter for TerminalReporter<'_> {
    fn updating(&self, instance: &ContainerInstanceRef, target: &TargetVersion) {
        println!("{}", updating_line(&self.ctx.styles, instance, target));
    }

    fn outdated(
        &self,
        instance: &ContainerInstanceRef,
        current: Option<&str>,
        target: &TargetVersion,
    ) {
        println!(
            "{}",
            outdated_line(&self.ctx.styles, instance, current, target)
        );
    }

    fn up_to_date(&self, instance: &ContainerInstanceRef, target: &TargetVersion) {
        println!("{}", up_to_date_line(&self.ctx.styles, instance, target));
    }
}

pub(crate) fn updating_line(
    styles: &Styles,
    instance: &ContainerInstanceRef,
    target: &TargetVersion,
) -> String {
    format!(
        "  {} Updating container agent on {} to version: {target}",
        "→".style(styles.action),
        instance.style(styles.dim),
    )
}

pub(crate) fn up_to_date_line(
    styles: &Styles,
    instance: &ContainerInstanceRef,
    target: &TargetVersion,
) -> String {
    format!(
        "  {} Container agent on {} up to date. Latest agent version is: {target}",
        "✓".style(styles.success),
        instance.style(styles.dim),
    )
}

pub(crate) fn outdated_line(
    styles: &Styles,
    instance: &ContainerInstanceRef,
    current: Option<&str>,
    target: &TargetVersion,
) -> String {
    format!(
        "  {} Container agent on {} is outdated: running {}, target is {target}",
        "⚠".style(styles.warning),
        instance.style(styles.dim),
        current.unwrap_or("unknown"),
    )
}

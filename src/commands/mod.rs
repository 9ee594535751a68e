//! CLI command implementations

use anyhow::{bail, Result};
use console::{style, Emoji};
use std::path::Path;

use crate::scaffold::bootstrap::{self, LineStatus, Registration};
use crate::scaffold::render::RenderedArtifact;
use crate::scaffold::writer::WriteOutcome;

pub mod controller;
pub mod entity;
pub mod migration;
pub mod model;
pub mod routes;
pub mod views;

pub use controller::ControllerCommand;
pub use entity::EntityCommand;
pub use migration::MigrationCommand;
pub use model::ModelCommand;
pub use routes::RoutesCommand;
pub use views::{ViewsCommand, ViewsRoutersCommand};

pub(crate) static SUCCESS: Emoji = Emoji("✓", "√");

/// Print the per-artifact result line.
pub(crate) fn report_written(artifact: &RenderedArtifact, outcome: WriteOutcome) {
    println!(
        "  {} {} ({}, {})",
        SUCCESS,
        style(artifact.path.display()).dim(),
        artifact.kind,
        style(outcome).dim()
    );
}

/// Patch the bootstrap file and surface the result.
///
/// Whatever could be inserted has already been written back when a missing
/// anchor is reported, so the error leaves the file in its best achievable
/// state rather than rolling anything back.
pub(crate) fn apply_registration(root: &Path, registration: &Registration) -> Result<()> {
    let report = bootstrap::patch_bootstrap(root, registration)?;

    report_line(report.import, "import", &registration.import_line());
    report_line(report.register, "registration", &registration.use_line());

    if !report.is_complete() {
        bail!(
            "bootstrap file src/index.js is missing anchor marker(s): {}; \
             add the marker(s) and re-run",
            report
                .missing_anchors()
                .iter()
                .map(|anchor| format!("'{anchor}'"))
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    Ok(())
}

fn report_line(status: LineStatus, what: &str, line: &str) {
    match status {
        LineStatus::Inserted => println!(
            "  {} src/index.js: added {what} {}",
            SUCCESS,
            style(line).dim()
        ),
        LineStatus::AlreadyPresent => println!(
            "  {} src/index.js: {what} already exists, skipping",
            style("·").dim()
        ),
        LineStatus::AnchorMissing => println!(
            "  {} src/index.js: no insertion point found for {what}",
            style("✗").red()
        ),
    }
}

//! Bootstrap-file patching.
//!
//! Generated route modules are wired into the project's `src/index.js` by
//! inserting an import line and a registration line after two literal anchor
//! markers shipped in the starter's bootstrap. The file is handled as a
//! line-level intermediate representation: existing lines are deduplicated
//! by derived key (the route module they reference), not by whole-line
//! equality, so formatting drift never produces duplicate registrations.
//!
//! Patching is idempotent: applying the same registration twice yields a
//! file byte-identical to applying it once. A missing anchor is a distinct
//! error for the caller to surface, raised only after every insertion that
//! could be applied has been written back.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::naming;

/// Marker after which import lines are inserted.
pub const IMPORT_ANCHOR: &str = "//routes importes";
/// Marker after which registration lines are inserted.
pub const REGISTER_ANCHOR: &str = "// Use the  routes";

/// A route module to wire into the bootstrap file.
#[derive(Debug, Clone)]
pub struct Registration {
    /// Route module name, e.g. `TaskRoutes`.
    pub module: String,
    /// Mount base without the leading slash, e.g. `api/task`.
    pub mount: String,
}

impl Registration {
    /// Registration for an entity's API route module, mounted under `api/`.
    #[must_use]
    pub fn api(entity: &str) -> Self {
        Self {
            module: naming::routes_name(entity),
            mount: naming::api_base(entity),
        }
    }

    /// Registration for an entity's view route module.
    #[must_use]
    pub fn view(entity: &str) -> Self {
        Self {
            module: naming::view_routes_name(entity),
            mount: naming::view_base(entity),
        }
    }

    /// The import line inserted after [`IMPORT_ANCHOR`].
    #[must_use]
    pub fn import_line(&self) -> String {
        format!("const {m} = require('./routes/{m}');", m = self.module)
    }

    /// The registration line inserted after [`REGISTER_ANCHOR`].
    #[must_use]
    pub fn use_line(&self) -> String {
        format!("app.use('/{}', {});", self.mount, self.module)
    }

    /// An existing line already importing this route module?
    fn matches_import(&self, line: &str) -> bool {
        line.contains(&format!("require('./routes/{}')", self.module))
    }

    /// An existing line already registering this route module?
    fn matches_use(&self, line: &str) -> bool {
        line.contains("app.use(") && line.contains(&self.module)
    }
}

/// Outcome of one line insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStatus {
    Inserted,
    AlreadyPresent,
    AnchorMissing,
}

/// Per-line outcomes of one patch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchReport {
    pub import: LineStatus,
    pub register: LineStatus,
}

impl PatchReport {
    /// Anchors the patcher could not find, by marker text.
    #[must_use]
    pub fn missing_anchors(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.import == LineStatus::AnchorMissing {
            missing.push(IMPORT_ANCHOR);
        }
        if self.register == LineStatus::AnchorMissing {
            missing.push(REGISTER_ANCHOR);
        }
        missing
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_anchors().is_empty()
    }
}

/// Patch the bootstrap file under `root` with one registration.
///
/// The file is written back only when its content actually changed, so a
/// repeat run leaves both content and mtime-relevant state alone.
pub fn patch_bootstrap(root: &Path, registration: &Registration) -> Result<PatchReport> {
    let path = root.join(naming::bootstrap_path());
    let content = fs::read_to_string(&path)
        .with_context(|| format!("failed to read bootstrap file: {}", path.display()))?;

    let (patched, report) = apply(&content, registration);
    if patched != content {
        fs::write(&path, patched)
            .with_context(|| format!("failed to write bootstrap file: {}", path.display()))?;
    }

    Ok(report)
}

/// Pure patch step over the bootstrap content.
#[must_use]
pub fn apply(content: &str, registration: &Registration) -> (String, PatchReport) {
    let ends_with_newline = content.ends_with('\n');
    let mut lines: Vec<String> = content.lines().map(str::to_string).collect();

    let import = insert_after_anchor(
        &mut lines,
        IMPORT_ANCHOR,
        &registration.import_line(),
        |line| registration.matches_import(line),
    );
    let register = insert_after_anchor(
        &mut lines,
        REGISTER_ANCHOR,
        &registration.use_line(),
        |line| registration.matches_use(line),
    );

    let mut patched = lines.join("\n");
    if ends_with_newline {
        patched.push('\n');
    }

    (patched, PatchReport { import, register })
}

/// Insert `line` directly after the first line containing `anchor`, unless
/// an existing line already matches the registration's derived key.
fn insert_after_anchor(
    lines: &mut Vec<String>,
    anchor: &str,
    line: &str,
    already_present: impl Fn(&str) -> bool,
) -> LineStatus {
    if lines.iter().any(|l| already_present(l.as_str())) {
        return LineStatus::AlreadyPresent;
    }
    match lines.iter().position(|l| l.contains(anchor)) {
        Some(index) => {
            lines.insert(index + 1, line.to_string());
            LineStatus::Inserted
        }
        None => LineStatus::AnchorMissing,
    }
}

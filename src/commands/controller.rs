//! `controller`: CRUD controller generation.

use anyhow::Result;
use console::style;
use std::path::{Path, PathBuf};

use super::routes;
use crate::scaffold::collector::{FieldCollector, Prompt};
use crate::scaffold::naming;
use crate::scaffold::render::Renderer;
use crate::scaffold::writer;

/// Generate a controller for an existing model, then offer routes.
pub struct ControllerCommand {
    root: PathBuf,
}

impl ControllerCommand {
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn execute(&self, prompt: &mut dyn Prompt) -> Result<()> {
        let name = FieldCollector::collect_name(prompt, "Enter model name:")?;
        let renderer = Renderer::new()?;
        generate_with_cascade(&self.root, &renderer, &name, prompt)
    }
}

/// Generate the controller, then ask whether to continue into routes.
pub(crate) fn generate_with_cascade(
    root: &Path,
    renderer: &Renderer,
    entity: &str,
    prompt: &mut dyn Prompt,
) -> Result<()> {
    generate(root, renderer, entity)?;

    if prompt.confirm(
        &format!(
            "Do you want to create routes for {}?",
            naming::controller_name(entity)
        ),
        true,
    )? {
        routes::generate(root, renderer, entity)?;
    }

    Ok(())
}

/// Render and write the controller artifact.
pub(crate) fn generate(root: &Path, renderer: &Renderer, entity: &str) -> Result<()> {
    let artifact = renderer.render_controller(entity)?;
    let outcome = writer::write_artifact(root, &artifact)?;

    println!(
        "\n{} {}",
        style(naming::controller_name(entity)).cyan().bold(),
        style("created, composing the shared CRUD behaviors.").bold()
    );
    super::report_written(&artifact, outcome);

    Ok(())
}

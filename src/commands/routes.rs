//! `routes`: API route-module generation and bootstrap wiring.

use anyhow::Result;
use console::style;
use std::path::{Path, PathBuf};

use crate::scaffold::bootstrap::Registration;
use crate::scaffold::collector::{FieldCollector, Prompt};
use crate::scaffold::naming;
use crate::scaffold::render::Renderer;
use crate::scaffold::writer;

/// Generate the four-endpoint route module for an existing controller and
/// register it in the bootstrap file.
pub struct RoutesCommand {
    root: PathBuf,
}

impl RoutesCommand {
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn execute(&self, prompt: &mut dyn Prompt) -> Result<()> {
        let name = FieldCollector::collect_name(prompt, "Enter model name:")?;
        let renderer = Renderer::new()?;
        generate(&self.root, &renderer, &name)
    }
}

/// Render and write the route module, then wire it into the bootstrap.
pub(crate) fn generate(root: &Path, renderer: &Renderer, entity: &str) -> Result<()> {
    let artifact = renderer.render_routes(entity)?;
    let outcome = writer::write_artifact(root, &artifact)?;

    println!(
        "\n{} {}",
        style(naming::routes_name(entity)).cyan().bold(),
        style(format!(
            "routes created for controller {}",
            naming::controller_name(entity)
        ))
        .bold()
    );
    super::report_written(&artifact, outcome);

    super::apply_registration(root, &Registration::api(entity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scaffold::bootstrap::{IMPORT_ANCHOR, REGISTER_ANCHOR};
    use crate::scaffold::collector::{Answer, ScriptedPrompt};
    use std::fs;

    fn seed_bootstrap(root: &Path) {
        fs::create_dir_all(root.join("src")).unwrap();
        fs::write(
            root.join("src/index.js"),
            format!("const app = require('express')();\n{IMPORT_ANCHOR}\n{REGISTER_ANCHOR}\napp.listen(3000);\n"),
        )
        .unwrap();
    }

    #[test]
    fn routes_command_writes_module_and_patches_bootstrap() {
        let dir = tempfile::tempdir().unwrap();
        seed_bootstrap(dir.path());
        let mut prompt = ScriptedPrompt::new([Answer::text("Task")]);

        RoutesCommand::new(dir.path().to_path_buf())
            .execute(&mut prompt)
            .unwrap();

        assert!(dir.path().join(naming::routes_path("Task")).exists());
        let bootstrap = fs::read_to_string(dir.path().join("src/index.js")).unwrap();
        assert!(bootstrap.contains("const TaskRoutes = require('./routes/TaskRoutes');"));
        assert!(bootstrap.contains("app.use('/api/task', TaskRoutes);"));
    }

    #[test]
    fn missing_anchors_surface_as_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/index.js"), "const app = require('express')();\n").unwrap();
        let mut prompt = ScriptedPrompt::new([Answer::text("Task")]);

        let err = RoutesCommand::new(dir.path().to_path_buf())
            .execute(&mut prompt)
            .unwrap_err();

        assert!(err.to_string().contains("missing anchor marker"));
        assert!(err.to_string().contains(IMPORT_ANCHOR));
        assert!(err.to_string().contains(REGISTER_ANCHOR));
    }
}

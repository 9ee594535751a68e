//! `views` / `views-routers`: HTML admin view generation and wiring.
//!
//! `views` is the one place generation reads a previously generated artifact
//! back from disk: the model file is loaded and introspected instead of
//! re-collecting fields at the prompts, which makes the model a hard
//! dependency of the view.

use anyhow::Result;
use console::style;
use std::path::{Path, PathBuf};

use crate::scaffold::bootstrap::Registration;
use crate::scaffold::collector::{FieldCollector, Prompt};
use crate::scaffold::introspect;
use crate::scaffold::naming;
use crate::scaffold::render::Renderer;
use crate::scaffold::writer;

/// Generate the admin view for an existing model, then its serving routes.
pub struct ViewsCommand {
    root: PathBuf,
}

impl ViewsCommand {
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn execute(&self, prompt: &mut dyn Prompt) -> Result<()> {
        let name = FieldCollector::collect_name(prompt, "Enter model name for CRUD view:")?;

        // Missing model aborts before anything is written.
        let fields = introspect::load_model_fields(&self.root, &name)?;

        let renderer = Renderer::new()?;
        let artifact = renderer.render_view(&name, &fields)?;
        let outcome = writer::write_artifact(&self.root, &artifact)?;

        println!(
            "\n{} {}",
            style(&name).cyan().bold(),
            style("view created.").bold()
        );
        super::report_written(&artifact, outcome);

        // The view is only reachable through its serving routes.
        generate_view_routes(&self.root, &renderer, &name)
    }
}

/// Generate the view-serving route module and register it in the bootstrap.
pub struct ViewsRoutersCommand {
    root: PathBuf,
}

impl ViewsRoutersCommand {
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn execute(&self, prompt: &mut dyn Prompt) -> Result<()> {
        let name = FieldCollector::collect_name(prompt, "Enter model name for CRUD view route:")?;
        let renderer = Renderer::new()?;
        generate_view_routes(&self.root, &renderer, &name)
    }
}

pub(crate) fn generate_view_routes(root: &Path, renderer: &Renderer, entity: &str) -> Result<()> {
    let artifact = renderer.render_view_routes(entity)?;
    let outcome = writer::write_artifact(root, &artifact)?;

    println!(
        "\n{} {}",
        style(naming::view_routes_name(entity)).cyan().bold(),
        style(format!(
            "view route created; the page is served at /{}/page",
            naming::view_base(entity)
        ))
        .bold()
    );
    super::report_written(&artifact, outcome);

    super::apply_registration(root, &Registration::view(entity))
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
    fn views_without_a_model_fail_and_write_nothing() {
        let dir = tempfile::tempdir().unwrap();
        seed_bootstrap(dir.path());
        let mut prompt = ScriptedPrompt::new([Answer::text("Task")]);

        let err = ViewsCommand::new(dir.path().to_path_buf())
            .execute(&mut prompt)
            .unwrap_err();

        assert!(err.to_string().contains("has not been generated"));
        assert!(!dir.path().join(naming::view_path("Task")).exists());
        assert!(!dir.path().join(naming::view_routes_path("Task")).exists());
        let bootstrap = fs::read_to_string(dir.path().join("src/index.js")).unwrap();
        assert!(!bootstrap.contains("TaskViewRoutes"));
    }

    #[test]
    fn views_generate_page_routes_and_registration() {
        let dir = tempfile::tempdir().unwrap();
        seed_bootstrap(dir.path());
        fs::create_dir_all(dir.path().join("src/models")).unwrap();
        fs::write(
            dir.path().join("src/models/Task.js"),
            "const mongoose = require('mongoose');\n\n\
             const TaskSchema = new mongoose.Schema({\n\
               title: { type: String, required: true },\n\
             });\n\n\
             module.exports = mongoose.model('Task', TaskSchema);\n",
        )
        .unwrap();
        let mut prompt = ScriptedPrompt::new([Answer::text("Task")]);

        ViewsCommand::new(dir.path().to_path_buf())
            .execute(&mut prompt)
            .unwrap();

        let view = fs::read_to_string(dir.path().join(naming::view_path("Task"))).unwrap();
        assert!(view.contains(r#"name="title""#));
        assert!(dir.path().join(naming::view_routes_path("Task")).exists());
        let bootstrap = fs::read_to_string(dir.path().join("src/index.js")).unwrap();
        assert!(bootstrap.contains("app.use('/task', TaskViewRoutes);"));
    }
}

//! `entity`: plain data class plus the full CRUD chain, existence-gated.
//!
//! Unlike `model`/`crud`, this flow never regenerates a dependent artifact
//! that already exists on disk; it only fills the gaps, re-triggering the
//! upstream generator when a dependency artifact is missing.

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

use super::{controller, routes};
use crate::scaffold::collector::{FieldCollector, Prompt};
use crate::scaffold::naming;
use crate::scaffold::render::Renderer;
use crate::scaffold::writer;

pub struct EntityCommand {
    root: PathBuf,
}

impl EntityCommand {
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn execute(&self, prompt: &mut dyn Prompt) -> Result<()> {
        let spec = FieldCollector::collect(prompt)?;
        let renderer = Renderer::new()?;

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("failed to set progress style")?,
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));
        spinner.set_message(format!("Generating {} artifacts...", spec.name));

        let entity_class = renderer.render_entity_class(&spec)?;
        let entity_outcome = writer::write_artifact(&self.root, &entity_class)?;
        let model = renderer.render_model(&spec)?;
        let model_outcome = writer::write_artifact(&self.root, &model)?;

        spinner.finish_and_clear();

        println!(
            "\n{} {} {}",
            style("Entity").green().bold(),
            style(&spec.name).cyan().bold(),
            style(format!("created with fields: {}", spec.field_names().join(", "))).bold()
        );
        super::report_written(&entity_class, entity_outcome);
        super::report_written(&model, model_outcome);

        self.gated_controller(&renderer, &spec.name, prompt)?;
        self.gated_routes(&renderer, &spec.name, prompt)?;

        Ok(())
    }

    /// Skip controller generation when its file already exists.
    fn gated_controller(
        &self,
        renderer: &Renderer,
        entity: &str,
        prompt: &mut dyn Prompt,
    ) -> Result<()> {
        let path = naming::controller_path(entity);
        if self.root.join(&path).exists() {
            println!(
                "  {} {} already exists, skipping",
                style("·").dim(),
                style(path.display()).dim()
            );
            return Ok(());
        }

        if prompt.confirm(
            &format!("Do you want to create a controller for {entity}?"),
            true,
        )? {
            controller::generate(&self.root, renderer, entity)?;
        }
        Ok(())
    }

    /// Skip route generation when its file exists; otherwise make sure the
    /// controller dependency is in place first.
    fn gated_routes(
        &self,
        renderer: &Renderer,
        entity: &str,
        prompt: &mut dyn Prompt,
    ) -> Result<()> {
        let path = naming::routes_path(entity);
        if self.root.join(&path).exists() {
            println!(
                "  {} {} already exists, skipping",
                style("·").dim(),
                style(path.display()).dim()
            );
            return Ok(());
        }

        if prompt.confirm(&format!("Do you want to create routes for {entity}?"), true)? {
            if !self.root.join(naming::controller_path(entity)).exists() {
                println!(
                    "  {} {} is missing, generating it first",
                    style("·").dim(),
                    style(naming::controller_name(entity)).dim()
                );
                controller::generate(&self.root, renderer, entity)?;
            }
            routes::generate(&self.root, renderer, entity)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scaffold::bootstrap::{IMPORT_ANCHOR, REGISTER_ANCHOR};
    use crate::scaffold::collector::{Answer, ScriptedPrompt};
    use std::fs;
    use std::path::Path;

    fn seed_bootstrap(root: &Path) {
        fs::create_dir_all(root.join("src")).unwrap();
        fs::write(
            root.join("src/index.js"),
            format!("const app = require('express')();\n{IMPORT_ANCHOR}\n{REGISTER_ANCHOR}\napp.listen(3000);\n"),
        )
        .unwrap();
    }

    fn collect_answers() -> Vec<Answer> {
        vec![
            Answer::text("Task"),
            Answer::text("title"),
            Answer::Choice(0),
            Answer::Flag(true),
            Answer::Flag(false),
            Answer::Flag(true),
        ]
    }

    #[test]
    fn generates_entity_class_model_and_gated_chain() {
        let dir = tempfile::tempdir().unwrap();
        seed_bootstrap(dir.path());
        let mut answers = collect_answers();
        answers.push(Answer::Flag(true)); // controller
        answers.push(Answer::Flag(true)); // routes
        let mut prompt = ScriptedPrompt::new(answers);

        EntityCommand::new(dir.path().to_path_buf())
            .execute(&mut prompt)
            .unwrap();

        assert!(dir.path().join(naming::entity_path("Task")).exists());
        assert!(dir.path().join(naming::model_path("Task")).exists());
        assert!(dir.path().join(naming::controller_path("Task")).exists());
        assert!(dir.path().join(naming::routes_path("Task")).exists());
    }

    #[test]
    fn existing_controller_and_routes_are_skipped_without_prompting() {
        let dir = tempfile::tempdir().unwrap();
        seed_bootstrap(dir.path());
        fs::create_dir_all(dir.path().join("src/controllers")).unwrap();
        fs::write(
            dir.path().join(naming::controller_path("Task")),
            "// hand-edited\n",
        )
        .unwrap();
        fs::create_dir_all(dir.path().join("src/routes")).unwrap();
        fs::write(dir.path().join(naming::routes_path("Task")), "// hand-edited\n").unwrap();

        // No cascade answers: the gates must not prompt at all.
        let mut prompt = ScriptedPrompt::new(collect_answers());

        EntityCommand::new(dir.path().to_path_buf())
            .execute(&mut prompt)
            .unwrap();

        let controller =
            fs::read_to_string(dir.path().join(naming::controller_path("Task"))).unwrap();
        assert_eq!(controller, "// hand-edited\n");
    }

    #[test]
    fn missing_controller_is_regenerated_before_routes() {
        let dir = tempfile::tempdir().unwrap();
        seed_bootstrap(dir.path());
        fs::create_dir_all(dir.path().join("src/controllers")).unwrap();
        // Controller absent, routes absent: decline controller, accept routes.
        let mut answers = collect_answers();
        answers.push(Answer::Flag(false)); // decline controller
        answers.push(Answer::Flag(true)); // accept routes
        let mut prompt = ScriptedPrompt::new(answers);

        EntityCommand::new(dir.path().to_path_buf())
            .execute(&mut prompt)
            .unwrap();

        // Routes pulled the controller in as a dependency anyway.
        assert!(dir.path().join(naming::controller_path("Task")).exists());
        assert!(dir.path().join(naming::routes_path("Task")).exists());
    }
}

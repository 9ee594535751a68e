//! `model` / `crud`: interactive model generation with the cascade.

use anyhow::Result;
use console::style;
use std::path::PathBuf;

use super::controller;
use crate::scaffold::collector::{FieldCollector, Prompt};
use crate::scaffold::render::Renderer;
use crate::scaffold::writer;

/// Collect an entity at the prompts, generate its model, then cascade.
pub struct ModelCommand {
    root: PathBuf,
}

impl ModelCommand {
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn execute(&self, prompt: &mut dyn Prompt) -> Result<()> {
        let spec = FieldCollector::collect(prompt)?;
        let renderer = Renderer::new()?;

        let artifact = renderer.render_model(&spec)?;
        let outcome = writer::write_artifact(&self.root, &artifact)?;

        println!(
            "\n{} {} {}",
            style("Model").green().bold(),
            style(&spec.name).cyan().bold(),
            style(format!("created with fields: {}", spec.field_names().join(", "))).bold()
        );
        super::report_written(&artifact, outcome);

        if prompt.confirm(
            &format!("Do you want to create a controller for {}?", spec.name),
            true,
        )? {
            controller::generate_with_cascade(&self.root, &renderer, &spec.name, prompt)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scaffold::collector::{Answer, ScriptedPrompt};
    use crate::scaffold::naming;

    fn answers_through_timestamps() -> Vec<Answer> {
        vec![
            Answer::text("Task"),
            Answer::text("title"),
            Answer::Choice(0),
            Answer::Flag(true),
            Answer::Flag(false), // no more fields
            Answer::Flag(true),  // timestamps
        ]
    }

    #[test]
    fn declining_the_controller_stops_the_cascade() {
        let dir = tempfile::tempdir().unwrap();
        let mut answers = answers_through_timestamps();
        answers.push(Answer::Flag(false)); // no controller
        let mut prompt = ScriptedPrompt::new(answers);

        ModelCommand::new(dir.path().to_path_buf())
            .execute(&mut prompt)
            .unwrap();

        assert!(dir.path().join(naming::model_path("Task")).exists());
        assert!(!dir.path().join(naming::controller_path("Task")).exists());
    }

    #[test]
    fn declining_routes_keeps_the_controller() {
        let dir = tempfile::tempdir().unwrap();
        let mut answers = answers_through_timestamps();
        answers.push(Answer::Flag(true)); // controller
        answers.push(Answer::Flag(false)); // no routes
        let mut prompt = ScriptedPrompt::new(answers);

        ModelCommand::new(dir.path().to_path_buf())
            .execute(&mut prompt)
            .unwrap();

        assert!(dir.path().join(naming::controller_path("Task")).exists());
        assert!(!dir.path().join(naming::routes_path("Task")).exists());
    }
}

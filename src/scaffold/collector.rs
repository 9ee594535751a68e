//! Interactive field collection.
//!
//! The collector is an explicit state machine over the [`Prompt`] trait, so
//! the same logic runs against terminal prompts in production and against a
//! scripted front end in tests. It either yields a complete [`EntitySpec`]
//! or fails; there is no partial result to leak out of an abandoned session.

use anyhow::{bail, Result};
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use std::collections::VecDeque;

use super::entity::{is_valid_entity_name, EntitySpec, FieldSpec, LogicalType};

/// An interactive front end the collector asks its questions through.
pub trait Prompt {
    /// Free-text input. May return an empty string; validation and re-asking
    /// are the collector's job.
    fn input(&mut self, message: &str) -> Result<String>;

    /// Constrained selection; returns the chosen index into `items`.
    fn select(&mut self, message: &str, items: &[&str]) -> Result<usize>;

    /// Yes/no confirmation with a default answer.
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool>;
}

/// Terminal front end backed by dialoguer.
pub struct TerminalPrompt {
    theme: ColorfulTheme,
}

impl TerminalPrompt {
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt for TerminalPrompt {
    fn input(&mut self, message: &str) -> Result<String> {
        let answer: String = Input::with_theme(&self.theme)
            .with_prompt(message)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer)
    }

    fn select(&mut self, message: &str, items: &[&str]) -> Result<usize> {
        let index = Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(items)
            .default(0)
            .interact()?;
        Ok(index)
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        let answer = Confirm::with_theme(&self.theme)
            .with_prompt(message)
            .default(default)
            .interact()?;
        Ok(answer)
    }
}

/// A pre-seeded answer for [`ScriptedPrompt`].
#[derive(Debug, Clone)]
pub enum Answer {
    Text(String),
    Choice(usize),
    Flag(bool),
}

impl Answer {
    #[must_use]
    pub fn text(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Deterministic front end fed from pre-seeded answers, for tests and
/// non-interactive drivers.
pub struct ScriptedPrompt {
    answers: VecDeque<Answer>,
}

impl ScriptedPrompt {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
        }
    }

    fn next(&mut self, message: &str) -> Result<Answer> {
        match self.answers.pop_front() {
            Some(answer) => Ok(answer),
            None => bail!("scripted prompt ran out of answers at: {message}"),
        }
    }
}

impl Prompt for ScriptedPrompt {
    fn input(&mut self, message: &str) -> Result<String> {
        match self.next(message)? {
            Answer::Text(value) => Ok(value),
            other => bail!("expected a text answer for '{message}', got {other:?}"),
        }
    }

    fn select(&mut self, message: &str, items: &[&str]) -> Result<usize> {
        match self.next(message)? {
            Answer::Choice(index) if index < items.len() => Ok(index),
            Answer::Choice(index) => {
                bail!("choice {index} out of range for '{message}' ({} items)", items.len())
            }
            other => bail!("expected a choice answer for '{message}', got {other:?}"),
        }
    }

    fn confirm(&mut self, message: &str, _default: bool) -> Result<bool> {
        match self.next(message)? {
            Answer::Flag(value) => Ok(value),
            other => bail!("expected a yes/no answer for '{message}', got {other:?}"),
        }
    }
}

/// Collector states; transitions are driven by prompt answers only.
enum CollectState {
    CollectingFields,
    AskAddAnother,
    AskTimestamps,
    Done,
}

/// Builds an [`EntitySpec`] interactively.
pub struct FieldCollector;

impl FieldCollector {
    /// Run the full collection session: entity name, fields, timestamps.
    pub fn collect(prompt: &mut dyn Prompt) -> Result<EntitySpec> {
        let name = Self::collect_name(prompt, "Enter model name:")?;
        Self::collect_fields(prompt, name)
    }

    /// Prompt for a capitalized entity name, re-asking until valid.
    pub fn collect_name(prompt: &mut dyn Prompt, message: &str) -> Result<String> {
        loop {
            let name = prompt.input(message)?.trim().to_string();
            if name.is_empty() {
                println!("{}", style("Model name cannot be empty!").red());
                continue;
            }
            if !is_valid_entity_name(&name) {
                println!(
                    "{}",
                    style("Model name must be a capitalized identifier (e.g. Task, UserProfile).")
                        .red()
                );
                continue;
            }
            return Ok(name);
        }
    }

    /// The field-collection state machine, starting with one mandatory field.
    fn collect_fields(prompt: &mut dyn Prompt, name: String) -> Result<EntitySpec> {
        let mut fields: Vec<FieldSpec> = Vec::new();
        let mut timestamps = false;
        let mut state = CollectState::CollectingFields;

        loop {
            state = match state {
                CollectState::CollectingFields => {
                    let field = Self::collect_field(prompt, &fields)?;
                    fields.push(field);
                    CollectState::AskAddAnother
                }
                CollectState::AskAddAnother => {
                    if prompt.confirm("Do you want to add another field?", true)? {
                        CollectState::CollectingFields
                    } else {
                        CollectState::AskTimestamps
                    }
                }
                CollectState::AskTimestamps => {
                    timestamps = prompt.confirm("Do you want to add timestamps?", true)?;
                    CollectState::Done
                }
                CollectState::Done => {
                    return Ok(EntitySpec {
                        name,
                        fields,
                        timestamps,
                    });
                }
            };
        }
    }

    /// One iteration of `CollectingFields`: name, type, required flag.
    ///
    /// Empty and duplicate names are rejected at the prompt boundary and
    /// re-asked; nothing else is validated.
    fn collect_field(prompt: &mut dyn Prompt, existing: &[FieldSpec]) -> Result<FieldSpec> {
        let name = loop {
            let name = prompt.input("  Enter field name:")?.trim().to_string();
            if name.is_empty() {
                println!("{}", style("Field name cannot be empty!").red());
                continue;
            }
            if existing.iter().any(|f| f.name == name) {
                println!(
                    "{}",
                    style(format!("Field '{name}' is already defined!")).red()
                );
                continue;
            }
            break name;
        };

        let labels: Vec<&str> = LogicalType::ALL.iter().map(|t| t.label()).collect();
        let index = prompt.select("  Select field type:", &labels)?;
        let logical_type = LogicalType::ALL[index];

        let required = prompt.confirm("  Is the field required?", true)?;

        Ok(FieldSpec {
            name,
            logical_type,
            required,
        })
    }
}

//! crudforge CLI library

#![forbid(unsafe_code)]

pub mod commands;
pub mod scaffold;
pub mod templates;

pub use scaffold::collector::{Answer, FieldCollector, Prompt, ScriptedPrompt, TerminalPrompt};
pub use scaffold::entity::{EntitySpec, FieldSpec, LogicalType};
pub use scaffold::render::{ArtifactKind, RenderedArtifact, Renderer};

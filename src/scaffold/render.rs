//! Template rendering: `EntitySpec` in, artifact source text out.
//!
//! Every render function is pure and deterministic: the same input produces
//! byte-identical output on every run. No I/O, no prompting, no clocks.

use anyhow::{Context, Result};
use handlebars::Handlebars;
use serde::Serialize;
use serde_json::json;
use std::fmt;
use std::path::PathBuf;

use super::entity::EntitySpec;
use super::introspect::ViewField;
use super::naming;
use crate::templates;

/// The kinds of artifact this tool generates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Entity,
    Model,
    Controller,
    Routes,
    View,
    ViewRoutes,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Entity => "entity class",
            Self::Model => "model",
            Self::Controller => "controller",
            Self::Routes => "routes",
            Self::View => "view",
            Self::ViewRoutes => "view routes",
        };
        f.write_str(label)
    }
}

/// One rendered artifact, ready for the writer. Immutable once produced.
#[derive(Debug, Clone)]
pub struct RenderedArtifact {
    pub kind: ArtifactKind,
    /// Path relative to the project root.
    pub path: PathBuf,
    pub content: String,
}

/// One field row handed to the model template.
#[derive(Debug, Serialize)]
struct FieldRow<'a> {
    name: &'a str,
    storage_type: &'static str,
    required: bool,
}

/// Holds the configured template registry for one generation session.
pub struct Renderer {
    handlebars: Handlebars<'static>,
}

impl Renderer {
    /// Build a renderer with all artifact templates registered.
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();
        // Generated output is source code, never HTML-escaped text.
        handlebars.register_escape_fn(handlebars::no_escape);

        let sources = [
            ("model", templates::MODEL_TEMPLATE),
            ("entity", templates::ENTITY_CLASS_TEMPLATE),
            ("controller", templates::CONTROLLER_TEMPLATE),
            ("routes", templates::ROUTES_TEMPLATE),
            ("view", templates::VIEW_TEMPLATE),
            ("view_routes", templates::VIEW_ROUTES_TEMPLATE),
        ];
        for (name, source) in sources {
            handlebars
                .register_template_string(name, source)
                .with_context(|| format!("failed to register template: {name}"))?;
        }

        Ok(Self { handlebars })
    }

    fn render(&self, name: &str, context: &serde_json::Value) -> Result<String> {
        self.handlebars
            .render(name, context)
            .with_context(|| format!("failed to render template: {name}"))
    }

    /// Mongoose model module; field lines keep the operator's entry order.
    pub fn render_model(&self, spec: &EntitySpec) -> Result<RenderedArtifact> {
        let fields: Vec<FieldRow> = spec
            .fields
            .iter()
            .map(|f| FieldRow {
                name: &f.name,
                storage_type: f.logical_type.storage_token(),
                required: f.required,
            })
            .collect();
        let context = json!({
            "entity": spec.name,
            "fields": fields,
            "timestamps": spec.timestamps,
        });

        Ok(RenderedArtifact {
            kind: ArtifactKind::Model,
            path: naming::model_path(&spec.name),
            content: self.render("model", &context)?,
        })
    }

    /// Plain data class with no storage annotations.
    pub fn render_entity_class(&self, spec: &EntitySpec) -> Result<RenderedArtifact> {
        let fields: Vec<_> = spec.fields.iter().map(|f| json!({ "name": f.name })).collect();
        let context = json!({
            "entity": spec.name,
            "fields": fields,
            "field_list": spec.field_names().join(", "),
        });

        Ok(RenderedArtifact {
            kind: ArtifactKind::Entity,
            path: naming::entity_path(&spec.name),
            content: self.render("entity", &context)?,
        })
    }

    /// CRUD controller; shape is fixed, only the entity name varies.
    pub fn render_controller(&self, entity: &str) -> Result<RenderedArtifact> {
        let context = json!({ "entity": entity });

        Ok(RenderedArtifact {
            kind: ArtifactKind::Controller,
            path: naming::controller_path(entity),
            content: self.render("controller", &context)?,
        })
    }

    /// Express router with the four fixed CRUD endpoints.
    pub fn render_routes(&self, entity: &str) -> Result<RenderedArtifact> {
        let context = json!({
            "entity": entity,
            "controller": naming::controller_name(entity),
        });

        Ok(RenderedArtifact {
            kind: ArtifactKind::Routes,
            path: naming::routes_path(entity),
            content: self.render("routes", &context)?,
        })
    }

    /// Admin view over the introspected fields; fetch calls target the same
    /// base path the route module is mounted on.
    pub fn render_view(&self, entity: &str, fields: &[ViewField]) -> Result<RenderedArtifact> {
        let context = json!({
            "entity": entity,
            "api_base": naming::api_base(entity),
            "form_fields": form_fields_html(fields, None),
            "table_headers": table_headers_html(fields),
            "table_cells": table_cells_html(fields),
        });

        Ok(RenderedArtifact {
            kind: ArtifactKind::View,
            path: naming::view_path(entity),
            content: self.render("view", &context)?,
        })
    }

    /// Route module serving the HTML view.
    pub fn render_view_routes(&self, entity: &str) -> Result<RenderedArtifact> {
        let context = json!({ "entity": entity });

        Ok(RenderedArtifact {
            kind: ArtifactKind::ViewRoutes,
            path: naming::view_routes_path(entity),
            content: self.render("view_routes", &context)?,
        })
    }
}

/// Form inputs for the create modal; nested objects become fieldsets with
/// dotted input names, array attributes a single `name[]` input.
fn form_fields_html(fields: &[ViewField], parent: Option<&str>) -> String {
    let mut out = String::new();
    for field in fields {
        let full_name = parent.map_or_else(
            || field.name.clone(),
            |prefix| format!("{prefix}.{}", field.name),
        );

        if !field.children.is_empty() {
            out.push_str("                        <fieldset class=\"mb-3\">\n");
            out.push_str(&format!(
                "                            <legend>{}</legend>\n",
                field.name
            ));
            out.push_str(&form_fields_html(&field.children, Some(&full_name)));
            out.push_str("                        </fieldset>\n");
        } else if field.multiple {
            out.push_str("                        <div class=\"form-group mb-3\">\n");
            out.push_str(&format!(
                "                            <label for=\"{full_name}\">{} (multiple):</label>\n",
                field.name
            ));
            out.push_str(&format!(
                "                            <input class=\"form-control\" type=\"text\" name=\"{full_name}[]\" placeholder=\"Enter multiple {}\" />\n",
                field.name
            ));
            out.push_str("                        </div>\n");
        } else {
            let required = if field.required { " required" } else { "" };
            out.push_str("                        <div class=\"form-group mb-3\">\n");
            out.push_str(&format!(
                "                            <label for=\"{full_name}\">{}:</label>\n",
                field.name
            ));
            out.push_str(&format!(
                "                            <input class=\"form-control\" type=\"{}\" name=\"{full_name}\" placeholder=\"{}\"{required} />\n",
                field.input_type, field.name
            ));
            out.push_str("                        </div>\n");
        }
    }
    out
}

/// One table header per top-level attribute.
fn table_headers_html(fields: &[ViewField]) -> String {
    fields
        .iter()
        .map(|f| format!("                <th>{}</th>", f.name))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One table cell per top-level attribute, interpolated client-side.
fn table_cells_html(fields: &[ViewField]) -> String {
    fields
        .iter()
        .map(|f| format!("                    <td>${{item.{}}}</td>", f.name))
        .collect::<Vec<_>>()
        .join("\n")
}

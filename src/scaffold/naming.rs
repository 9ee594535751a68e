//! Naming derivation shared by every generator.
//!
//! All artifact names, output paths, and mount points derive from the entity
//! name through the functions in this module and nowhere else. The route
//! renderer, the view renderer, and the bootstrap patcher must agree on these
//! strings byte for byte, so none of them carries its own copy.

use convert_case::{Case, Casing};
use std::path::PathBuf;

/// Controller module name, e.g. `TaskController`.
#[must_use]
pub fn controller_name(entity: &str) -> String {
    format!("{entity}Controller")
}

/// API route module name, e.g. `TaskRoutes`.
#[must_use]
pub fn routes_name(entity: &str) -> String {
    format!("{entity}Routes")
}

/// View route module name, e.g. `TaskViewRoutes`.
#[must_use]
pub fn view_routes_name(entity: &str) -> String {
    format!("{entity}ViewRoutes")
}

/// Mount base for the generated API routes, e.g. `api/task`.
///
/// Also the base the generated view's fetch calls are built against.
#[must_use]
pub fn api_base(entity: &str) -> String {
    format!("api/{}", entity.to_case(Case::Flat))
}

/// Mount base for the view-serving routes, e.g. `task`.
#[must_use]
pub fn view_base(entity: &str) -> String {
    entity.to_case(Case::Flat)
}

/// `src/entities/<Name>.js`
#[must_use]
pub fn entity_path(entity: &str) -> PathBuf {
    PathBuf::from(format!("src/entities/{entity}.js"))
}

/// `src/models/<Name>.js`
#[must_use]
pub fn model_path(entity: &str) -> PathBuf {
    PathBuf::from(format!("src/models/{entity}.js"))
}

/// `src/controllers/<Name>Controller.js`
#[must_use]
pub fn controller_path(entity: &str) -> PathBuf {
    PathBuf::from(format!("src/controllers/{}.js", controller_name(entity)))
}

/// `src/routes/<Name>Routes.js`
#[must_use]
pub fn routes_path(entity: &str) -> PathBuf {
    PathBuf::from(format!("src/routes/{}.js", routes_name(entity)))
}

/// `src/routes/<Name>ViewRoutes.js`
#[must_use]
pub fn view_routes_path(entity: &str) -> PathBuf {
    PathBuf::from(format!("src/routes/{}.js", view_routes_name(entity)))
}

/// `src/views/<Name>.html`
#[must_use]
pub fn view_path(entity: &str) -> PathBuf {
    PathBuf::from(format!("src/views/{entity}.html"))
}

/// The application bootstrap file the patcher mutates.
#[must_use]
pub fn bootstrap_path() -> PathBuf {
    PathBuf::from("src/index.js")
}

//! hn-project: network definition files and validation.
//!
//! A definition lists components (with their variant settings) and the
//! connections between them. It is validated, then turned into a live
//! [`hn_network::Network`] with [`build_network`].

pub mod build;
pub mod schema;
pub mod validate;

pub use build::build_network;
pub use schema::*;
pub use validate::{LATEST_VERSION, ValidationError, validate_definition};

use std::path::Path;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Network error: {0}")]
    Network(#[from] hn_network::NetworkError),

    #[error("Connection {from} -> {to} was refused")]
    Connection { from: String, to: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &Path) -> ProjectResult<NetworkDef> {
    let content = std::fs::read_to_string(path)?;
    let def: NetworkDef = serde_yaml::from_str(&content)?;
    validate_definition(&def)?;
    tracing::debug!(path = %path.display(), name = def.name.as_str(), "loaded definition");
    Ok(def)
}

pub fn save_yaml(path: &Path, def: &NetworkDef) -> ProjectResult<()> {
    validate_definition(def)?;
    let content = serde_yaml::to_string(def)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> ProjectResult<NetworkDef> {
    let content = std::fs::read_to_string(path)?;
    let def: NetworkDef = serde_json::from_str(&content)?;
    validate_definition(&def)?;
    tracing::debug!(path = %path.display(), name = def.name.as_str(), "loaded definition");
    Ok(def)
}

pub fn save_json(path: &Path, def: &NetworkDef) -> ProjectResult<()> {
    validate_definition(def)?;
    let content = serde_json::to_string_pretty(def)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load by extension: `.json` is JSON, anything else YAML.
pub fn load(path: &Path) -> ProjectResult<NetworkDef> {
    if is_json(path) {
        load_json(path)
    } else {
        load_yaml(path)
    }
}

/// Save by extension: `.json` is JSON, anything else YAML.
pub fn save(path: &Path, def: &NetworkDef) -> ProjectResult<()> {
    if is_json(path) {
        save_json(path, def)
    } else {
        save_yaml(path, def)
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

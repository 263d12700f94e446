//! Definition validation logic.

use crate::schema::{ComponentDef, ComponentKindDef, ConnectionDef, NetworkDef};
use hn_core::{Real, Tolerances, nearly_equal};
use std::collections::{HashMap, HashSet};

pub const LATEST_VERSION: u32 = 1;

/// Proportions of a MultiSplit must sum to 1.0 within this tolerance.
pub const PROPORTION_SUM_TOL: Real = 1e-6;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate name: {name} in {context}")]
    DuplicateName { name: String, context: String },

    #[error("Missing reference: {name} in {context}")]
    MissingReference { name: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid connection {from} -> {to}: {reason}")]
    InvalidConnection {
        from: String,
        to: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_definition(def: &NetworkDef) -> Result<(), ValidationError> {
    if def.version == 0 || def.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: def.version,
        });
    }

    let mut kinds: HashMap<&str, &ComponentKindDef> = HashMap::new();
    for component in &def.components {
        if kinds.insert(component.name.as_str(), &component.kind).is_some() {
            return Err(ValidationError::DuplicateName {
                name: component.name.clone(),
                context: format!("network '{}' components", def.name),
            });
        }
        validate_component(component)?;
    }

    let mut used_slots: HashSet<(&str, usize)> = HashSet::new();
    let mut fed: HashSet<&str> = HashSet::new();
    for conn in &def.connections {
        validate_connection(conn, &kinds)?;
        if !used_slots.insert((conn.from.as_str(), conn.output)) {
            return Err(invalid(conn, "output slot already connected"));
        }
        if !fed.insert(conn.to.as_str()) {
            return Err(invalid(conn, "target already has an input"));
        }
    }

    Ok(())
}

fn validate_component(component: &ComponentDef) -> Result<(), ValidationError> {
    let name = &component.name;
    match &component.kind {
        ComponentKindDef::Source { flow } => {
            check_flow(&format!("component '{name}' flow"), *flow)?;
            if let Some(max) = component.max_flow {
                return Err(ValidationError::InvalidValue {
                    field: format!("component '{name}' max_flow"),
                    value: max.to_string(),
                    reason: "a Source has no input flow to limit".to_string(),
                });
            }
        }
        ComponentKindDef::MultiSplit { proportions } => {
            if proportions.is_empty() {
                return Err(ValidationError::InvalidValue {
                    field: format!("component '{name}' proportions"),
                    value: "[]".to_string(),
                    reason: "at least one output is required".to_string(),
                });
            }
            for &p in proportions {
                check_flow(&format!("component '{name}' proportion"), p)?;
            }
            let sum: Real = proportions.iter().sum();
            if !nearly_equal(sum, 1.0, Tolerances::absolute(PROPORTION_SUM_TOL)) {
                return Err(ValidationError::InvalidValue {
                    field: format!("component '{name}' proportions"),
                    value: format!("{proportions:?}"),
                    reason: format!("sum is {sum}, expected 1.0"),
                });
            }
        }
        ComponentKindDef::Tap { .. } | ComponentKindDef::Split | ComponentKindDef::Sink => {}
    }

    if let Some(max) = component.max_flow {
        check_flow(&format!("component '{name}' max_flow"), max)?;
    }
    Ok(())
}

fn validate_connection(
    conn: &ConnectionDef,
    kinds: &HashMap<&str, &ComponentKindDef>,
) -> Result<(), ValidationError> {
    let from = kinds
        .get(conn.from.as_str())
        .ok_or_else(|| ValidationError::MissingReference {
            name: conn.from.clone(),
            context: "connection from".to_string(),
        })?;
    let to = kinds
        .get(conn.to.as_str())
        .ok_or_else(|| ValidationError::MissingReference {
            name: conn.to.clone(),
            context: "connection to".to_string(),
        })?;

    if conn.from == conn.to {
        return Err(invalid(conn, "self connection"));
    }
    if matches!(to, ComponentKindDef::Source { .. }) {
        return Err(invalid(conn, "a Source cannot be fed"));
    }
    let outputs = from.output_count();
    if conn.output >= outputs {
        return Err(invalid(
            conn,
            &format!(
                "output {} out of range for {} with {} outputs",
                conn.output,
                from.type_name(),
                outputs
            ),
        ));
    }
    Ok(())
}

fn check_flow(field: &str, value: Real) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: "must be finite and non-negative".to_string(),
        });
    }
    Ok(())
}

fn invalid(conn: &ConnectionDef, reason: &str) -> ValidationError {
    ValidationError::InvalidConnection {
        from: conn.from.clone(),
        to: conn.to.clone(),
        reason: reason.to_string(),
    }
}

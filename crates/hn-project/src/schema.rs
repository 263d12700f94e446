//! Network definition file schema.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkDef {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub components: Vec<ComponentDef>,
    #[serde(default)]
    pub connections: Vec<ConnectionDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComponentDef {
    pub name: String,
    #[serde(flatten)]
    pub kind: ComponentKindDef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_flow: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind")]
pub enum ComponentKindDef {
    Source {
        flow: f64,
    },
    Tap {
        #[serde(default)]
        open: bool,
    },
    Split,
    MultiSplit {
        proportions: Vec<f64>,
    },
    Sink,
}

impl ComponentKindDef {
    pub fn type_name(&self) -> &'static str {
        match self {
            ComponentKindDef::Source { .. } => "Source",
            ComponentKindDef::Tap { .. } => "Tap",
            ComponentKindDef::Split => "Split",
            ComponentKindDef::MultiSplit { .. } => "MultiSplit",
            ComponentKindDef::Sink => "Sink",
        }
    }

    pub fn output_count(&self) -> usize {
        match self {
            ComponentKindDef::Source { .. } | ComponentKindDef::Tap { .. } => 1,
            ComponentKindDef::Split => 2,
            ComponentKindDef::MultiSplit { proportions } => proportions.len(),
            ComponentKindDef::Sink => 0,
        }
    }
}

/// Directed edge from output `output` of `from` into `to`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConnectionDef {
    pub from: String,
    pub to: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub output: usize,
}

fn is_zero(v: &usize) -> bool {
    *v == 0
}

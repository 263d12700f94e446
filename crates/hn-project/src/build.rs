//! Conversions between definitions and live networks.

use hn_network::{Component, ComponentKind, Network, validate_forest};

use crate::schema::{ComponentDef, ComponentKindDef, ConnectionDef, NetworkDef};
use crate::validate::{LATEST_VERSION, validate_definition};
use crate::{ProjectError, ProjectResult};

/// Validate `def` and build the network it describes.
///
/// Components are added in file order, which fixes the order sources are
/// simulated and rendered in.
pub fn build_network(def: &NetworkDef) -> ProjectResult<Network> {
    validate_definition(def)?;

    let mut net = Network::new();
    for comp in &def.components {
        let id = net.add(component_from_def(comp)?);
        if let ComponentKindDef::MultiSplit { proportions } = &comp.kind {
            net.set_proportions(id, proportions)?;
        }
        if comp.max_flow.is_some() {
            net.set_max_flow(id, comp.max_flow)?;
        }
    }

    for conn in &def.connections {
        let from = net.require(&conn.from)?;
        let to = net.require(&conn.to)?;
        if !net.connect_at(from, to, conn.output) {
            return Err(ProjectError::Connection {
                from: conn.from.clone(),
                to: conn.to.clone(),
            });
        }
    }

    validate_forest(&net)?;
    tracing::debug!(
        network = def.name.as_str(),
        components = net.len(),
        connections = def.connections.len(),
        "network built"
    );
    Ok(net)
}

fn component_from_def(def: &ComponentDef) -> ProjectResult<Component> {
    let component = match &def.kind {
        ComponentKindDef::Source { flow } => Component::try_source(&def.name, *flow)?,
        ComponentKindDef::Tap { open } => Component::tap(&def.name, *open),
        ComponentKindDef::Split => Component::split(&def.name),
        ComponentKindDef::MultiSplit { proportions } => {
            Component::multi_split(&def.name, proportions.len())
        }
        ComponentKindDef::Sink => Component::sink(&def.name),
    };
    Ok(component)
}

impl NetworkDef {
    /// Describe a live network, e.g. after topology edits.
    ///
    /// Connections are listed per component in insertion order, then by
    /// output slot.
    pub fn from_network(name: impl Into<String>, network: &Network) -> Self {
        let mut components = Vec::with_capacity(network.len());
        let mut connections = Vec::new();

        for (_, comp) in network.iter() {
            let kind = match comp.kind() {
                ComponentKind::Source { flow } => ComponentKindDef::Source { flow: *flow },
                ComponentKind::Tap { open } => ComponentKindDef::Tap { open: *open },
                ComponentKind::Split => ComponentKindDef::Split,
                ComponentKind::MultiSplit { proportions } => ComponentKindDef::MultiSplit {
                    proportions: proportions.clone(),
                },
                ComponentKind::Sink => ComponentKindDef::Sink,
            };
            components.push(ComponentDef {
                name: comp.name().to_string(),
                kind,
                max_flow: comp.max_flow(),
            });

            for (output, slot) in comp.outputs().iter().enumerate() {
                let Some(target) = slot.and_then(|t| network.component(t)) else {
                    continue;
                };
                connections.push(ConnectionDef {
                    from: comp.name().to_string(),
                    to: target.name().to_string(),
                    output,
                });
            }
        }

        Self {
            version: LATEST_VERSION,
            name: name.into(),
            components,
            connections,
        }
    }
}

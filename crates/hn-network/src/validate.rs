//! Forest invariant checks.

use std::collections::HashMap;

use hn_core::CompId;

use crate::error::{NetResult, NetworkError};
use crate::network::Network;

/// Check that the network's edges form a forest rooted at its sources.
///
/// Checks, in order:
/// - every output slot refers to a live component whose input points back
/// - every input refers to a live component listing this one as an output
/// - no component is fed by more than one slot
/// - sources have no input
/// - no input chain loops
pub fn validate_forest(network: &Network) -> NetResult<()> {
    let mut fed_by: HashMap<CompId, usize> = HashMap::new();

    for (id, comp) in network.iter() {
        for to in comp.live_outputs() {
            let target = network
                .component(to)
                .ok_or_else(|| NetworkError::DanglingRef {
                    from: comp.name().to_string(),
                    to,
                })?;
            if target.input() != Some(id) {
                return Err(NetworkError::BackRefMismatch {
                    name: target.name().to_string(),
                });
            }
            *fed_by.entry(to).or_default() += 1;
        }

        if let Some(pred) = comp.input() {
            if comp.kind().is_source() {
                return Err(NetworkError::SourceHasInput {
                    name: comp.name().to_string(),
                });
            }
            let feeds_us = network
                .component(pred)
                .is_some_and(|p| p.live_outputs().any(|o| o == id));
            if !feeds_us {
                return Err(NetworkError::BackRefMismatch {
                    name: comp.name().to_string(),
                });
            }
        }
    }

    for (to, count) in fed_by {
        if count > 1 {
            let name = network
                .component(to)
                .map(|c| c.name().to_string())
                .unwrap_or_default();
            return Err(NetworkError::SharedDescendant { name, count });
        }
    }

    for (id, comp) in network.iter() {
        if network.is_upstream(id, id) {
            return Err(NetworkError::Cycle {
                name: comp.name().to_string(),
            });
        }
    }

    Ok(())
}

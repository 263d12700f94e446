//! Topology editor: delete a component and re-wire its neighbours.

use hn_core::CompId;

use crate::component::Component;
use crate::error::{NetResult, NetworkError};
use crate::network::Network;

impl Network {
    /// Delete the first component named `name`, splicing its predecessor to
    /// its successor.
    ///
    /// Returns the removed component with its edges cleared. On error the
    /// network is left untouched:
    /// - `NotFound` if no component has that name
    /// - `MultipleLiveOutputs` for a split with more than one connected output
    pub fn delete(&mut self, name: &str) -> NetResult<Component> {
        let id = self.require(name)?;
        self.delete_id(id)
    }

    /// Same as [`delete`](Self::delete), addressed by id.
    pub fn delete_id(&mut self, id: CompId) -> NetResult<Component> {
        let comp = self.component(id).ok_or(NetworkError::UnknownId { id })?;
        let live: Vec<CompId> = comp.live_outputs().collect();
        if comp.kind().is_branch() && live.len() > 1 {
            tracing::debug!(name = comp.name(), live = live.len(), "delete refused");
            return Err(NetworkError::MultipleLiveOutputs {
                name: comp.name().to_string(),
                live: live.len(),
            });
        }

        let output = live.first().copied();
        let input = comp.input();

        match input {
            Some(pred) => {
                if let Some(p) = self.component_mut(pred) {
                    for slot in p.outputs.iter_mut().filter(|s| **s == Some(id)) {
                        *slot = output;
                    }
                }
                if let Some(out) = output.and_then(|o| self.component_mut(o)) {
                    out.input = Some(pred);
                }
            }
            None => {
                // Deleted node was a root: its successor becomes an orphan.
                if let Some(out) = output.and_then(|o| self.component_mut(o)) {
                    out.input = None;
                }
            }
        }

        let mut removed = self.take(id).ok_or(NetworkError::UnknownId { id })?;
        tracing::debug!(name = removed.name(), ?input, ?output, "component deleted");
        removed.clear_edges();
        debug_assert!(crate::validate_forest(self).is_ok());
        Ok(removed)
    }
}

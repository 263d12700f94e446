//! The network container: sole owner of every component.

use hn_core::{CompId, Real};

use crate::component::Component;
use crate::error::{NetResult, NetworkError};

/// An insertion-ordered collection of components and their connections.
///
/// Storage:
/// - `slots` is indexed by `CompId`; a deleted component leaves `None`
///   behind so ids are never reused and stale ids resolve to nothing.
///   The vector only grows, one entry per component ever added.
/// - `order` lists live ids in insertion order; every traversal that visits
///   "all components" (sources first of all) walks it.
#[derive(Debug, Clone, Default)]
pub struct Network {
    slots: Vec<Option<Component>>,
    order: Vec<CompId>,
    next_id: u32,
}

impl Network {
    /// Create a new empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a component and return its id.
    ///
    /// Any edges carried by `component` (e.g. from a snapshot clone) are
    /// dropped; connections are made with [`connect`](Self::connect).
    pub fn add(&mut self, mut component: Component) -> CompId {
        component.clear_edges();
        let id = CompId::from_index(self.next_id);
        self.next_id += 1;
        self.slots.push(Some(component));
        self.order.push(id);
        id
    }

    /// Number of live components.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Live ids in insertion order.
    pub fn ids(&self) -> &[CompId] {
        &self.order
    }

    /// Iterate over `(id, component)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (CompId, &Component)> + '_ {
        self.order
            .iter()
            .filter_map(|&id| self.component(id).map(|c| (id, c)))
    }

    /// Owned copy of every component in insertion order.
    ///
    /// Mutating the returned values never affects the network.
    pub fn snapshot(&self) -> Vec<Component> {
        self.iter().map(|(_, c)| c.clone()).collect()
    }

    /// Ids of every Source, in insertion order.
    pub fn sources(&self) -> impl Iterator<Item = CompId> + '_ {
        self.iter()
            .filter(|(_, c)| c.kind().is_source())
            .map(|(id, _)| id)
    }

    /// Get a component by id (returns None if it was deleted or never existed).
    pub fn component(&self, id: CompId) -> Option<&Component> {
        self.slots.get(id.slot()).and_then(Option::as_ref)
    }

    /// Mutable access for edge rewiring; callers outside the crate go
    /// through the `set_*` methods, which never touch edges.
    pub(crate) fn component_mut(&mut self, id: CompId) -> Option<&mut Component> {
        self.slots.get_mut(id.slot()).and_then(Option::as_mut)
    }

    fn stored_mut(&mut self, id: CompId) -> NetResult<&mut Component> {
        self.component_mut(id).ok_or(NetworkError::UnknownId { id })
    }

    /// Set the flow emitted by the Source `id`.
    pub fn set_flow(&mut self, id: CompId, flow: Real) -> NetResult<()> {
        self.stored_mut(id)?.set_flow(flow)
    }

    /// Open or close the Tap `id`.
    pub fn set_open(&mut self, id: CompId, open: bool) -> NetResult<()> {
        self.stored_mut(id)?.set_open(open)
    }

    /// Replace the proportions of the MultiSplit `id`.
    pub fn set_proportions(&mut self, id: CompId, values: &[Real]) -> NetResult<()> {
        self.stored_mut(id)?.set_proportions(values)
    }

    /// Set or clear the maximum accepted input flow of `id`.
    pub fn set_max_flow(&mut self, id: CompId, max_flow: Option<Real>) -> NetResult<()> {
        self.stored_mut(id)?.set_max_flow(max_flow)
    }

    /// Id of the first component (in insertion order) with the given name.
    pub fn find(&self, name: &str) -> Option<CompId> {
        self.iter().find(|(_, c)| c.name() == name).map(|(id, _)| id)
    }

    /// Like [`find`](Self::find), but reports a missing name as an error.
    pub fn require(&self, name: &str) -> NetResult<CompId> {
        self.find(name).ok_or_else(|| NetworkError::NotFound {
            name: name.to_string(),
        })
    }

    pub fn by_name(&self, name: &str) -> Option<&Component> {
        self.find(name).and_then(|id| self.component(id))
    }

    /// The predecessor of `id`, if any.
    pub fn input_of(&self, id: CompId) -> Option<CompId> {
        self.component(id).and_then(Component::input)
    }

    /// The first output of `id`.
    pub fn output_of(&self, id: CompId) -> Option<CompId> {
        self.component(id)
            .and_then(|c| c.outputs().first().copied())
            .flatten()
    }

    /// Owned copy of the output slots of `id` (empty if `id` is unknown).
    pub fn outputs_of(&self, id: CompId) -> Vec<Option<CompId>> {
        self.component(id)
            .map(|c| c.outputs().to_vec())
            .unwrap_or_default()
    }

    /// Connect the first output of `from` to `to`.
    pub fn connect(&mut self, from: CompId, to: CompId) -> bool {
        self.connect_at(from, to, 0)
    }

    /// Connect output `index` of `from` to `to`, and make `from` the input of `to`.
    ///
    /// Single-output variants ignore `index` and overwrite their only slot.
    /// Nothing happens (and `false` is returned) when:
    /// - either id is unknown, or `from == to`
    /// - `from` is a Sink, or `index` is out of range for a split
    /// - `to` is a Source
    /// - `to` is upstream of `from`, which would close a cycle
    ///
    /// A target that was already fed from elsewhere is moved: the old slot
    /// is cleared so the network stays a forest.
    pub fn connect_at(&mut self, from: CompId, to: CompId, index: usize) -> bool {
        let Some(slot) = self.check_connect(from, to, index) else {
            tracing::debug!(%from, %to, index, "connection refused");
            return false;
        };

        // Detach the component currently occupying the slot.
        if let Some(old) = self.outputs_of(from)[slot] {
            if let Some(c) = self.component_mut(old) {
                if c.input == Some(from) {
                    c.input = None;
                }
            }
        }

        // Detach the target from its previous predecessor.
        if let Some(prev) = self.input_of(to) {
            if let Some(p) = self.component_mut(prev) {
                for s in p.outputs.iter_mut().filter(|s| **s == Some(to)) {
                    *s = None;
                }
            }
        }

        if let Some(f) = self.component_mut(from) {
            f.outputs[slot] = Some(to);
        }
        if let Some(t) = self.component_mut(to) {
            t.input = Some(from);
        }
        true
    }

    fn check_connect(&self, from: CompId, to: CompId, index: usize) -> Option<usize> {
        if from == to {
            return None;
        }
        let source = self.component(from)?;
        let target = self.component(to)?;
        if target.kind().is_source() {
            return None;
        }
        let slot = source.resolve_slot(index)?;
        if self.is_upstream(to, from) {
            return None;
        }
        Some(slot)
    }

    /// Whether `ancestor` appears on the input chain above `id`.
    pub fn is_upstream(&self, ancestor: CompId, id: CompId) -> bool {
        let mut current = self.input_of(id);
        let mut steps = 0;
        while let Some(c) = current {
            if c == ancestor {
                return true;
            }
            steps += 1;
            if steps > self.order.len() {
                // Broken chain; treat as upstream so callers refuse the edit.
                return true;
            }
            current = self.input_of(c);
        }
        false
    }

    /// Take a component out of storage, keeping the order of the rest.
    ///
    /// Neighbour edges are the caller's business; see `editor`.
    pub(crate) fn take(&mut self, id: CompId) -> Option<Component> {
        let taken = self.slots.get_mut(id.slot())?.take()?;
        self.order.retain(|&other| other != id);
        Some(taken)
    }
}

//! Downstream leaf counting.

use hn_core::CompId;
use hn_network::{ComponentKind, Network};

/// Number of leaves below (and including) `id`.
///
/// - a Sink counts 1
/// - a Source or Tap forwards its output's count, 1 if unconnected
/// - a split sums its outputs' counts, each unconnected slot counting 1;
///   a MultiSplit without outputs is itself a leaf
///
/// An unknown id counts as a single dangling leaf.
pub fn sinks_downstream(network: &Network, id: CompId) -> usize {
    let Some(comp) = network.component(id) else {
        return 1;
    };
    let leaf = |slot: &Option<CompId>| slot.map_or(1, |next| sinks_downstream(network, next));

    match comp.kind() {
        ComponentKind::Sink => 1,
        ComponentKind::Source { .. } | ComponentKind::Tap { .. } => {
            comp.outputs().first().map_or(1, leaf)
        }
        ComponentKind::Split | ComponentKind::MultiSplit { .. } => {
            comp.outputs().iter().map(leaf).sum::<usize>().max(1)
        }
    }
}

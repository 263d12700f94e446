//! Recursive flow propagation.

use hn_core::{CompId, NO_FLOW, Real};
use hn_network::{ComponentKind, Network};

use crate::observer::SimulationObserver;

/// Counters gathered during one simulation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationSummary {
    /// Sources the pass started from.
    pub sources: usize,
    /// Components reported through `notify_flow`.
    pub visited: usize,
    /// Max-flow violations reported through `notify_flow_error`.
    pub violations: usize,
}

/// Simulate the whole network, starting at every Source in insertion order.
///
/// Components not reachable from a Source (orphans left by deleting a
/// Source) are never visited.
pub fn simulate<O>(network: &Network, observer: &mut O, check_max_flow: bool) -> SimulationSummary
where
    O: SimulationObserver + ?Sized,
{
    let mut summary = SimulationSummary::default();
    for src in network.sources() {
        tracing::debug!(source = %src, check_max_flow, "simulating from source");
        summary.sources += 1;
        visit(network, src, NO_FLOW, observer, check_max_flow, &mut summary);
    }
    tracing::debug!(
        sources = summary.sources,
        visited = summary.visited,
        violations = summary.violations,
        "simulation complete"
    );
    summary
}

/// Simulate the subtree below `id`, feeding it `in_flow`.
///
/// A Source ignores `in_flow` and emits its configured rate.
pub fn simulate_component<O>(
    network: &Network,
    id: CompId,
    in_flow: Real,
    observer: &mut O,
    check_max_flow: bool,
) -> SimulationSummary
where
    O: SimulationObserver + ?Sized,
{
    let mut summary = SimulationSummary::default();
    visit(network, id, in_flow, observer, check_max_flow, &mut summary);
    summary
}

fn visit<O>(
    network: &Network,
    id: CompId,
    in_flow: Real,
    observer: &mut O,
    check_max_flow: bool,
    summary: &mut SimulationSummary,
) where
    O: SimulationObserver + ?Sized,
{
    let Some(comp) = network.component(id) else {
        return;
    };
    let kind = comp.type_name();
    let name = comp.name();

    if check_max_flow {
        if let Some(max_flow) = comp.max_flow() {
            if in_flow > max_flow {
                tracing::warn!(kind, name, in_flow, max_flow, "max flow exceeded");
                summary.violations += 1;
                observer.notify_flow_error(kind, name, in_flow, max_flow);
            }
        }
    }

    let out_flows = out_flows(comp.kind(), in_flow);
    match comp.kind() {
        ComponentKind::Source { .. } => observer.notify_flow(kind, name, NO_FLOW, &out_flows),
        ComponentKind::Sink => observer.notify_flow(kind, name, in_flow, &[NO_FLOW]),
        _ => observer.notify_flow(kind, name, in_flow, &out_flows),
    }
    summary.visited += 1;

    // Unconnected slots end their branch silently.
    for (slot, &flow) in comp.outputs().iter().zip(&out_flows) {
        if let Some(next) = *slot {
            visit(network, next, flow, observer, check_max_flow, summary);
        }
    }
}

/// Per-variant flow rule: one entry per output slot.
fn out_flows(kind: &ComponentKind, in_flow: Real) -> Vec<Real> {
    match kind {
        ComponentKind::Source { flow } => vec![*flow],
        ComponentKind::Tap { open } => vec![if *open { in_flow } else { 0.0 }],
        ComponentKind::Split => vec![in_flow / 2.0; 2],
        ComponentKind::MultiSplit { proportions } => {
            proportions.iter().map(|p| in_flow * p).collect()
        }
        ComponentKind::Sink => Vec::new(),
    }
}

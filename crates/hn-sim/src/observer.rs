//! Observer interface and a recording implementation.

use hn_core::Real;

/// Receives per-component results of a simulation pass.
pub trait SimulationObserver {
    /// Called exactly once per visited component.
    ///
    /// `out_flows` has one entry per output slot; a Sink reports
    /// `[NO_FLOW]`, and a Source reports `NO_FLOW` as `in_flow`.
    fn notify_flow(&mut self, kind: &str, name: &str, in_flow: Real, out_flows: &[Real]);

    /// Called before `notify_flow` when the max-flow check is enabled and
    /// `in_flow` exceeds `max_flow`. Advisory only.
    fn notify_flow_error(&mut self, kind: &str, name: &str, in_flow: Real, max_flow: Real) {
        let _ = (kind, name, in_flow, max_flow);
    }
}

impl<O: SimulationObserver + ?Sized> SimulationObserver for &mut O {
    fn notify_flow(&mut self, kind: &str, name: &str, in_flow: Real, out_flows: &[Real]) {
        (**self).notify_flow(kind, name, in_flow, out_flows);
    }

    fn notify_flow_error(&mut self, kind: &str, name: &str, in_flow: Real, max_flow: Real) {
        (**self).notify_flow_error(kind, name, in_flow, max_flow);
    }
}

/// One flow notification.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowRecord {
    pub kind: String,
    pub name: String,
    pub in_flow: Real,
    pub out_flows: Vec<Real>,
}

/// Anything an observer can be told, in call order.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowEvent {
    Flow(FlowRecord),
    Error {
        kind: String,
        name: String,
        in_flow: Real,
        max_flow: Real,
    },
}

/// Observer that keeps every notification in order.
#[derive(Debug, Clone, Default)]
pub struct FlowRecorder {
    events: Vec<FlowEvent>,
}

impl FlowRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// All events in the order they were received.
    pub fn events(&self) -> &[FlowEvent] {
        &self.events
    }

    /// Flow notifications only.
    pub fn flows(&self) -> impl Iterator<Item = &FlowRecord> + '_ {
        self.events.iter().filter_map(|e| match e {
            FlowEvent::Flow(r) => Some(r),
            FlowEvent::Error { .. } => None,
        })
    }

    /// Number of max-flow violations reported.
    pub fn error_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, FlowEvent::Error { .. }))
            .count()
    }

    /// The first flow notification for `name`.
    pub fn flow_for(&self, name: &str) -> Option<&FlowRecord> {
        self.flows().find(|r| r.name == name)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl SimulationObserver for FlowRecorder {
    fn notify_flow(&mut self, kind: &str, name: &str, in_flow: Real, out_flows: &[Real]) {
        self.events.push(FlowEvent::Flow(FlowRecord {
            kind: kind.to_string(),
            name: name.to_string(),
            in_flow,
            out_flows: out_flows.to_vec(),
        }));
    }

    fn notify_flow_error(&mut self, kind: &str, name: &str, in_flow: Real, max_flow: Real) {
        self.events.push(FlowEvent::Error {
            kind: kind.to_string(),
            name: name.to_string(),
            in_flow,
            max_flow,
        });
    }
}

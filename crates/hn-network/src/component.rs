//! Component variants and their per-variant state.

use hn_core::{CompId, Real, ensure_flow};

use crate::error::{NetResult, NetworkError};

/// The closed set of component variants.
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentKind {
    /// Entry point emitting a configured flow rate.
    Source { flow: Real },
    /// Pass-through gated by an open/closed flag.
    Tap { open: bool },
    /// Fixed two-way 50/50 split.
    Split,
    /// N-way split by caller-specified proportions.
    ///
    /// The proportions are used as given; they are expected to sum to 1.0
    /// but are never re-normalised.
    MultiSplit { proportions: Vec<Real> },
    /// Terminal component.
    Sink,
}

impl ComponentKind {
    /// Canonical type name, as reported to observers and printed in layouts.
    pub fn type_name(&self) -> &'static str {
        match self {
            ComponentKind::Source { .. } => "Source",
            ComponentKind::Tap { .. } => "Tap",
            ComponentKind::Split => "Split",
            ComponentKind::MultiSplit { .. } => "MultiSplit",
            ComponentKind::Sink => "Sink",
        }
    }

    /// Number of output slots this variant owns.
    pub fn output_count(&self) -> usize {
        match self {
            ComponentKind::Source { .. } | ComponentKind::Tap { .. } => 1,
            ComponentKind::Split => 2,
            ComponentKind::MultiSplit { proportions } => proportions.len(),
            ComponentKind::Sink => 0,
        }
    }

    /// Split and MultiSplit fan out; everything else is a chain link or a leaf.
    pub fn is_branch(&self) -> bool {
        matches!(
            self,
            ComponentKind::Split | ComponentKind::MultiSplit { .. }
        )
    }

    pub fn is_source(&self) -> bool {
        matches!(self, ComponentKind::Source { .. })
    }
}

/// A single element of a hydraulic network.
///
/// The name is fixed at construction. Edges (`input`, `outputs`) are only
/// rewritten by [`Network`](crate::Network), which owns every component.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    name: String,
    kind: ComponentKind,
    max_flow: Option<Real>,
    pub(crate) input: Option<CompId>,
    pub(crate) outputs: Vec<Option<CompId>>,
}

impl Component {
    fn new(name: impl Into<String>, kind: ComponentKind) -> Self {
        let outputs = vec![None; kind.output_count()];
        Self {
            name: name.into(),
            kind,
            max_flow: None,
            input: None,
            outputs,
        }
    }

    /// A source emitting `flow` (e.g. cubic meters per hour).
    ///
    /// `flow` is stored unchecked. A NaN rate is indistinguishable from
    /// `NO_FLOW` downstream; use [`try_source`](Self::try_source) for
    /// values that come from outside the program.
    pub fn source(name: impl Into<String>, flow: Real) -> Self {
        Self::new(name, ComponentKind::Source { flow })
    }

    /// Like [`source`](Self::source), but applies the checks of
    /// [`set_flow`](Self::set_flow).
    pub fn try_source(name: impl Into<String>, flow: Real) -> NetResult<Self> {
        let flow = ensure_flow(flow, "source flow")?;
        Ok(Self::source(name, flow))
    }

    pub fn tap(name: impl Into<String>, open: bool) -> Self {
        Self::new(name, ComponentKind::Tap { open })
    }

    pub fn split(name: impl Into<String>) -> Self {
        Self::new(name, ComponentKind::Split)
    }

    /// A multi-way split with `outputs` slots, initially dividing flow evenly.
    pub fn multi_split(name: impl Into<String>, outputs: usize) -> Self {
        let share = if outputs == 0 {
            0.0
        } else {
            1.0 / outputs as Real
        };
        Self::new(
            name,
            ComponentKind::MultiSplit {
                proportions: vec![share; outputs],
            },
        )
    }

    pub fn sink(name: impl Into<String>) -> Self {
        Self::new(name, ComponentKind::Sink)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &ComponentKind {
        &self.kind
    }

    pub fn type_name(&self) -> &'static str {
        self.kind.type_name()
    }

    /// Maximum accepted input flow; `None` means unchecked.
    pub fn max_flow(&self) -> Option<Real> {
        self.max_flow
    }

    /// The predecessor feeding this component, if any.
    pub fn input(&self) -> Option<CompId> {
        self.input
    }

    /// Read-only view of the output slots; `None` marks an unconnected slot.
    pub fn outputs(&self) -> &[Option<CompId>] {
        &self.outputs
    }

    /// Connected outputs, in slot order.
    pub fn live_outputs(&self) -> impl Iterator<Item = CompId> + '_ {
        self.outputs.iter().flatten().copied()
    }

    /// Set the flow emitted by a Source.
    pub fn set_flow(&mut self, flow: Real) -> NetResult<()> {
        let flow = ensure_flow(flow, "source flow")?;
        match &mut self.kind {
            ComponentKind::Source { flow: f } => {
                *f = flow;
                Ok(())
            }
            other => Err(NetworkError::WrongKind {
                name: self.name.clone(),
                expected: "Source",
                actual: other.type_name(),
            }),
        }
    }

    /// Open or close a Tap.
    pub fn set_open(&mut self, open: bool) -> NetResult<()> {
        match &mut self.kind {
            ComponentKind::Tap { open: o } => {
                *o = open;
                Ok(())
            }
            other => Err(NetworkError::WrongKind {
                name: self.name.clone(),
                expected: "Tap",
                actual: other.type_name(),
            }),
        }
    }

    /// Replace the proportions of a MultiSplit.
    ///
    /// The count must match the number of outputs; the sum is not checked.
    pub fn set_proportions(&mut self, values: &[Real]) -> NetResult<()> {
        for &p in values {
            hn_core::ensure_finite(p, "proportion")?;
        }
        match &mut self.kind {
            ComponentKind::MultiSplit { proportions } => {
                if proportions.len() != values.len() {
                    return Err(NetworkError::ProportionCount {
                        name: self.name.clone(),
                        expected: proportions.len(),
                        got: values.len(),
                    });
                }
                proportions.copy_from_slice(values);
                Ok(())
            }
            other => Err(NetworkError::WrongKind {
                name: self.name.clone(),
                expected: "MultiSplit",
                actual: other.type_name(),
            }),
        }
    }

    /// Set or clear the maximum accepted input flow.
    ///
    /// Sources have no input, so they reject a ceiling.
    pub fn set_max_flow(&mut self, max_flow: Option<Real>) -> NetResult<()> {
        if self.kind.is_source() {
            return Err(NetworkError::WrongKind {
                name: self.name.clone(),
                expected: "non-Source component",
                actual: "Source",
            });
        }
        if let Some(m) = max_flow {
            ensure_flow(m, "max flow")?;
        }
        self.max_flow = max_flow;
        Ok(())
    }

    /// Index of the slot that a `connect` at `index` writes to, if any.
    pub(crate) fn resolve_slot(&self, index: usize) -> Option<usize> {
        match self.kind {
            ComponentKind::Source { .. } | ComponentKind::Tap { .. } => Some(0),
            ComponentKind::Split | ComponentKind::MultiSplit { .. } => {
                (index < self.outputs.len()).then_some(index)
            }
            ComponentKind::Sink => None,
        }
    }

    pub(crate) fn clear_edges(&mut self) {
        self.input = None;
        self.outputs.iter_mut().for_each(|slot| *slot = None);
    }
}

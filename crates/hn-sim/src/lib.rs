//! hn-sim: flow simulation over a hydronet network.
//!
//! A simulation pass starts at every Source (in insertion order) and pushes
//! flow downstream, reporting each visited component to a
//! [`SimulationObserver`]. With the max-flow check enabled, components whose
//! input exceeds their configured ceiling are reported first through
//! `notify_flow_error`; the pass never stops early.
//!
//! # Example
//!
//! ```
//! use hn_network::{Component, Network};
//! use hn_sim::{FlowRecorder, simulate};
//!
//! let mut net = Network::new();
//! let src = net.add(Component::source("src", 20.0));
//! let sp = net.add(Component::split("sp"));
//! let a = net.add(Component::sink("a"));
//! let b = net.add(Component::sink("b"));
//! net.connect(src, sp);
//! net.connect_at(sp, a, 0);
//! net.connect_at(sp, b, 1);
//!
//! let mut rec = FlowRecorder::default();
//! simulate(&net, &mut rec, false);
//! assert_eq!(rec.flow_for("a").unwrap().in_flow, 10.0);
//! ```

pub mod engine;
pub mod observer;

pub use engine::{SimulationSummary, simulate, simulate_component};
pub use observer::{FlowEvent, FlowRecord, FlowRecorder, SimulationObserver};

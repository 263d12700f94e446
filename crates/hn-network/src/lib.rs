//! hn-network: component graph for hydronet.
//!
//! Provides:
//! - The five component variants (Source, Tap, Split, MultiSplit, Sink)
//! - The `Network` container that owns every component and its edges
//! - The topology editor (`Network::delete`) with branch refusal
//! - Forest invariant checks
//!
//! Edges are `CompId`s into the network's storage, never owning pointers,
//! so the network is the single owner of every component.
//!
//! # Example
//!
//! ```
//! use hn_network::{Component, Network};
//!
//! let mut net = Network::new();
//! let src = net.add(Component::source("src", 20.0));
//! let tap = net.add(Component::tap("tap", true));
//! let sink = net.add(Component::sink("out"));
//! assert!(net.connect(src, tap));
//! assert!(net.connect(tap, sink));
//!
//! net.delete("tap").unwrap();
//! assert_eq!(net.outputs_of(src), vec![Some(sink)]);
//! assert_eq!(net.input_of(sink), Some(src));
//! ```

pub mod component;
pub mod editor;
pub mod error;
pub mod network;
pub mod validate;

// Re-exports for ergonomics
pub use component::{Component, ComponentKind};
pub use error::{NetResult, NetworkError};
pub use network::Network;
pub use validate::validate_forest;

//! hn-layout: ASCII tree diagrams of a hydronet network.
//!
//! One block is rendered per Source, in insertion order:
//!
//! ```text
//! [src]Source -> [sp]Split +-> [a]Sink
//!                          |
//!                          +-> [t]Tap -> [b]Sink
//! ```
//!
//! A subtree always occupies `2 * sinks_downstream - 1` rows, where every
//! Sink and every unconnected output (drawn as `*`) counts as one leaf.
//!
//! # Example
//!
//! ```
//! use hn_network::{Component, Network};
//!
//! let mut net = Network::new();
//! let src = net.add(Component::source("src", 1.0));
//! let k = net.add(Component::sink("k"));
//! net.connect(src, k);
//! assert_eq!(hn_layout::layout(&net), "[src]Source -> [k]Sink\n");
//! ```

pub mod render;
pub mod sinks;

pub use render::{layout, layout_from};
pub use sinks::sinks_downstream;

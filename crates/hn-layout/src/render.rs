//! Tree rendering.

use hn_core::CompId;
use hn_network::{ComponentKind, Network};

use crate::sinks::sinks_downstream;

/// Drawn in place of an unconnected output.
const DANGLING: &str = "*";

/// Render every Source's tree, in insertion order.
///
/// Every row ends with a newline, so blocks concatenate directly.
pub fn layout(network: &Network) -> String {
    let mut out = String::new();
    for src in network.sources() {
        out.push_str(&layout_from(network, src));
    }
    out
}

/// Render the tree below `id` as if it were a root.
pub fn layout_from(network: &Network, id: CompId) -> String {
    let mut out = String::new();
    for row in block(network, id) {
        out.push_str(&row);
        out.push('\n');
    }
    out
}

/// Rows for the subtree rooted at `id`, without left padding.
///
/// Callers indent continuation rows; the first row is placed right after
/// whatever connector the parent printed.
fn block(network: &Network, id: CompId) -> Vec<String> {
    let Some(comp) = network.component(id) else {
        return vec![DANGLING.to_string()];
    };

    match comp.kind() {
        ComponentKind::Sink => vec![format!("[{}]Sink", comp.name())],
        ComponentKind::Source { .. } | ComponentKind::Tap { .. } => {
            let head = format!("[{}]{} -> ", comp.name(), comp.type_name());
            let child = slot_block(network, comp.outputs().first().copied().flatten());
            chain(&head, child)
        }
        ComponentKind::Split | ComponentKind::MultiSplit { .. } => {
            let head = format!("[{}]{} ", comp.name(), comp.type_name());
            let indent = blanks(&head);
            let reserved = (2 * sinks_downstream(network, id)).saturating_sub(1);
            let mut rows = Vec::with_capacity(reserved);

            let outputs = comp.outputs();
            if outputs.is_empty() {
                rows.push(head);
                return rows;
            }
            let last = outputs.len() - 1;
            for (i, slot) in outputs.iter().enumerate() {
                let lead = if i == 0 { head.as_str() } else { indent.as_str() };
                let bar = if i == last { "    " } else { "|   " };
                for (j, row) in slot_block(network, *slot).into_iter().enumerate() {
                    if j == 0 {
                        rows.push(format!("{lead}+-> {row}"));
                    } else {
                        rows.push(format!("{indent}{bar}{row}"));
                    }
                }
                if i != last {
                    rows.push(format!("{indent}|"));
                }
            }
            debug_assert_eq!(rows.len(), reserved);
            rows
        }
    }
}

fn slot_block(network: &Network, slot: Option<CompId>) -> Vec<String> {
    match slot {
        Some(next) => block(network, next),
        None => vec![DANGLING.to_string()],
    }
}

/// Prefix the first child row with `head`, and align the rest under it.
fn chain(head: &str, child: Vec<String>) -> Vec<String> {
    let pad = blanks(head);
    child
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            if i == 0 {
                format!("{head}{row}")
            } else {
                format!("{pad}{row}")
            }
        })
        .collect()
}

fn blanks(s: &str) -> String {
    " ".repeat(s.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hn_network::Component;

    #[test]
    fn chain_aligns_continuations() {
        let rows = chain("[t]Tap -> ", vec!["a".into(), "b".into()]);
        assert_eq!(rows, vec!["[t]Tap -> a", "          b"]);
    }

    #[test]
    fn dangling_source_output() {
        let mut net = Network::new();
        net.add(Component::source("s", 1.0));
        assert_eq!(layout(&net), "[s]Source -> *\n");
    }

    #[test]
    fn split_with_dangling_branch() {
        let mut net = Network::new();
        let s = net.add(Component::source("s", 1.0));
        let sp = net.add(Component::split("sp"));
        let k = net.add(Component::sink("k"));
        net.connect(s, sp);
        net.connect_at(sp, k, 1);

        let expected = "\
[s]Source -> [sp]Split +-> *
                       |
                       +-> [k]Sink
";
        assert_eq!(layout(&net), expected);
    }

    #[test]
    fn nested_first_branch_carries_bar() {
        let mut net = Network::new();
        let s = net.add(Component::source("s", 1.0));
        let a = net.add(Component::split("a"));
        let b = net.add(Component::split("b"));
        let k1 = net.add(Component::sink("k1"));
        let k2 = net.add(Component::sink("k2"));
        let k3 = net.add(Component::sink("k3"));
        net.connect(s, a);
        net.connect_at(a, b, 0);
        net.connect_at(a, k3, 1);
        net.connect_at(b, k1, 0);
        net.connect_at(b, k2, 1);

        let expected = "\
[s]Source -> [a]Split +-> [b]Split +-> [k1]Sink
                      |            |
                      |            +-> [k2]Sink
                      |
                      +-> [k3]Sink
";
        assert_eq!(layout(&net), expected);
    }

    #[test]
    fn empty_multisplit_renders_head_only() {
        let mut net = Network::new();
        let s = net.add(Component::source("s", 1.0));
        let m = net.add(Component::multi_split("m", 0));
        net.connect(s, m);
        assert_eq!(layout(&net), "[s]Source -> [m]MultiSplit \n");
    }

    #[test]
    fn empty_multisplit_inside_split() {
        let mut net = Network::new();
        let s = net.add(Component::source("s", 1.0));
        let sp = net.add(Component::split("sp"));
        let m = net.add(Component::multi_split("m", 0));
        let k = net.add(Component::sink("k"));
        net.connect(s, sp);
        net.connect_at(sp, m, 0);
        net.connect_at(sp, k, 1);

        let expected = concat!(
            "[s]Source -> [sp]Split +-> [m]MultiSplit \n",
            "                       |\n",
            "                       +-> [k]Sink\n",
        );
        assert_eq!(layout(&net), expected);
    }
}

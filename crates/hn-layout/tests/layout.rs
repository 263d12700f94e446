//! Layout rendering over edited and multi-source networks.

use hn_layout::{layout, layout_from, sinks_downstream};
use hn_network::{Component, Network};

fn two_way() -> Network {
    let mut net = Network::new();
    let s = net.add(Component::source("src", 10.0));
    let sp = net.add(Component::split("sp"));
    let a = net.add(Component::sink("a"));
    let b = net.add(Component::sink("b"));
    net.connect(s, sp);
    net.connect_at(sp, a, 0);
    net.connect_at(sp, b, 1);
    net
}

#[test]
fn split_of_two_sinks_takes_three_rows() {
    let net = two_way();
    let src = net.find("src").unwrap();
    assert_eq!(sinks_downstream(&net, src), 2);

    let text = layout(&net);
    assert_eq!(text.lines().count(), 3);
    assert_eq!(
        text,
        "[src]Source -> [sp]Split +-> [a]Sink\n                         |\n                         +-> [b]Sink\n"
    );
}

#[test]
fn rendering_is_deterministic() {
    let net = two_way();
    assert_eq!(layout(&net), layout(&net));
}

#[test]
fn refused_delete_leaves_layout_unchanged() {
    let mut net = two_way();
    let before = layout(&net);
    assert!(net.delete("sp").is_err());
    assert_eq!(layout(&net), before);
}

#[test]
fn deleting_tap_shortens_chain() {
    let mut net = Network::new();
    let s = net.add(Component::source("s", 1.0));
    let t = net.add(Component::tap("t", true));
    let k = net.add(Component::sink("k"));
    net.connect(s, t);
    net.connect(t, k);
    assert_eq!(layout(&net), "[s]Source -> [t]Tap -> [k]Sink\n");

    net.delete("t").unwrap();
    assert_eq!(layout(&net), "[s]Source -> [k]Sink\n");
}

#[test]
fn one_block_per_source_in_insertion_order() {
    let mut net = Network::new();
    let s2 = net.add(Component::source("second", 1.0));
    let s1 = net.add(Component::source("first", 1.0));
    let k2 = net.add(Component::sink("k2"));
    let k1 = net.add(Component::sink("k1"));
    net.connect(s2, k2);
    net.connect(s1, k1);
    assert_eq!(
        layout(&net),
        "[second]Source -> [k2]Sink\n[first]Source -> [k1]Sink\n"
    );
    assert_eq!(layout_from(&net, s1), "[first]Source -> [k1]Sink\n");
}

#[test]
fn row_count_matches_leaf_count() {
    // src -> ms(4) -> [tap -> split(k1, *), k2, *, split(k3, k4)]
    let mut net = Network::new();
    let s = net.add(Component::source("src", 1.0));
    let ms = net.add(Component::multi_split("ms", 4));
    let t = net.add(Component::tap("t", false));
    let sp1 = net.add(Component::split("sp1"));
    let sp2 = net.add(Component::split("sp2"));
    let k1 = net.add(Component::sink("k1"));
    let k2 = net.add(Component::sink("k2"));
    let k3 = net.add(Component::sink("k3"));
    let k4 = net.add(Component::sink("k4"));
    net.connect(s, ms);
    net.connect_at(ms, t, 0);
    net.connect_at(ms, k2, 1);
    net.connect_at(ms, sp2, 3);
    net.connect(t, sp1);
    net.connect_at(sp1, k1, 0);
    net.connect_at(sp2, k3, 0);
    net.connect_at(sp2, k4, 1);

    let leaves = sinks_downstream(&net, s);
    assert_eq!(leaves, 6);
    let text = layout(&net);
    assert_eq!(text.lines().count(), 2 * leaves - 1);
    assert_eq!(text.matches('*').count(), 2);
    assert!(text.starts_with("[src]Source -> [ms]MultiSplit +-> [t]Tap -> [sp1]Split +-> [k1]Sink\n"));
}

#[test]
fn orphans_are_not_rendered() {
    let mut net = two_way();
    net.delete("src").unwrap();
    assert_eq!(layout(&net), "");
    let sp = net.find("sp").unwrap();
    assert_eq!(layout_from(&net, sp).lines().count(), 3);
}

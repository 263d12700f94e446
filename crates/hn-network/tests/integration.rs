//! Integration tests for hn-network.

use hn_network::{Component, ComponentKind, Network, NetworkError, validate_forest};

/// src -> tap -> sp -> (k1, ms -> (k2, k3, <open>))
fn sample() -> Network {
    let mut net = Network::new();
    let src = net.add(Component::source("src", 12.0));
    let tap = net.add(Component::tap("tap", true));
    let sp = net.add(Component::split("sp"));
    let k1 = net.add(Component::sink("k1"));
    let ms = net.add(Component::multi_split("ms", 3));
    let k2 = net.add(Component::sink("k2"));
    let k3 = net.add(Component::sink("k3"));

    assert!(net.connect(src, tap));
    assert!(net.connect(tap, sp));
    assert!(net.connect_at(sp, k1, 0));
    assert!(net.connect_at(sp, ms, 1));
    assert!(net.connect_at(ms, k2, 0));
    assert!(net.connect_at(ms, k3, 1));
    net
}

#[test]
fn sample_is_a_forest() {
    let net = sample();
    validate_forest(&net).unwrap();
    assert_eq!(net.sources().count(), 1);
    assert_eq!(net.len(), 7);
}

#[test]
fn delete_chain_then_branch_refusal() {
    let mut net = sample();
    let src = net.find("src").unwrap();
    let sp = net.find("sp").unwrap();

    net.delete("tap").unwrap();
    assert_eq!(net.output_of(src), Some(sp));
    assert_eq!(net.input_of(sp), Some(src));

    // Both split outputs are live.
    assert!(matches!(
        net.delete("sp"),
        Err(NetworkError::MultipleLiveOutputs { .. })
    ));
    // Two of three multisplit outputs are live.
    assert!(matches!(
        net.delete("ms"),
        Err(NetworkError::MultipleLiveOutputs { live: 2, .. })
    ));
    validate_forest(&net).unwrap();
}

#[test]
fn pruning_branch_allows_split_deletion() {
    let mut net = sample();
    let sp = net.find("sp").unwrap();
    let ms = net.find("ms").unwrap();

    net.delete("k2").unwrap();
    net.delete("ms").unwrap();
    let k3 = net.find("k3").unwrap();
    assert_eq!(net.outputs_of(sp)[1], Some(k3));
    assert_eq!(net.input_of(k3), Some(sp));
    assert!(net.component(ms).is_none());

    net.delete("k1").unwrap();
    net.delete("sp").unwrap();
    let tap = net.find("tap").unwrap();
    assert_eq!(net.output_of(tap), Some(k3));
    validate_forest(&net).unwrap();
}

#[test]
fn no_reference_to_deleted_component_survives() {
    let mut net = sample();
    let removed = net.find("tap").unwrap();
    net.delete("tap").unwrap();
    for (_, c) in net.iter() {
        assert_ne!(c.input(), Some(removed));
        assert!(c.outputs().iter().all(|o| *o != Some(removed)));
    }
}

#[test]
fn setters_through_network() {
    let mut net = sample();
    let tap = net.find("tap").unwrap();
    let ms = net.find("ms").unwrap();
    let k1 = net.find("k1").unwrap();
    net.set_open(tap, false).unwrap();
    net.set_proportions(ms, &[0.5, 0.25, 0.25]).unwrap();
    assert_eq!(
        net.by_name("tap").unwrap().kind(),
        &ComponentKind::Tap { open: false }
    );
    assert!(net.set_flow(k1, 2.0).is_err());
}

#[test]
fn replacing_a_component_copy_cannot_rewire_the_network() {
    let mut net = Network::new();
    let s = net.add(Component::source("s", 1.0));
    let t = net.add(Component::tap("t", true));
    let k = net.add(Component::sink("k"));
    net.connect(s, t);
    net.connect(t, k);

    // A detached copy can be reshaped freely; re-adding it starts unwired.
    let copy = net.snapshot().remove(1);
    let added = net.add(Component::split(copy.name()));
    assert_eq!(net.outputs_of(added), vec![None, None]);
    assert_eq!(net.input_of(added), None);

    assert_eq!(net.outputs_of(t), vec![Some(k)]);
    assert_eq!(net.input_of(t), Some(s));
    assert!(validate_forest(&net).is_ok());

    net.delete_id(k).unwrap();
    assert!(validate_forest(&net).is_ok());
    assert_eq!(net.outputs_of(t), vec![None]);
}

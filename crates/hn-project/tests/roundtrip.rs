use hn_project::schema::*;
use hn_project::{ProjectError, build_network, load_json, load_yaml, save, save_json, save_yaml};

fn simple() -> NetworkDef {
    NetworkDef {
        version: 1,
        name: "Simple".to_string(),
        components: vec![
            ComponentDef {
                name: "src".to_string(),
                kind: ComponentKindDef::Source { flow: 12.5 },
                max_flow: None,
            },
            ComponentDef {
                name: "tap".to_string(),
                kind: ComponentKindDef::Tap { open: false },
                max_flow: Some(3.0),
            },
            ComponentDef {
                name: "out".to_string(),
                kind: ComponentKindDef::Sink,
                max_flow: None,
            },
        ],
        connections: vec![
            ConnectionDef {
                from: "src".to_string(),
                to: "tap".to_string(),
                output: 0,
            },
            ConnectionDef {
                from: "tap".to_string(),
                to: "out".to_string(),
                output: 0,
            },
        ],
    }
}

#[test]
fn roundtrip_yaml_simple_network() {
    let def = simple();
    let path = std::env::temp_dir().join("hn_project_roundtrip_simple.yaml");

    save_yaml(&path, &def).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(def, loaded);
}

#[test]
fn roundtrip_json_simple_network() {
    let def = simple();
    let path = std::env::temp_dir().join("hn_project_roundtrip_simple.json");

    save_json(&path, &def).unwrap();
    let loaded = load_json(&path).unwrap();

    assert_eq!(def, loaded);
}

#[test]
fn save_refuses_invalid_definition() {
    let mut def = simple();
    def.connections[1].to = "nowhere".to_string();
    let path = std::env::temp_dir().join("hn_project_roundtrip_invalid.yaml");

    let err = save(&path, &def).unwrap_err();
    assert!(matches!(err, ProjectError::Validation(_)));
}

#[test]
fn edited_network_saves_and_reloads() {
    let mut net = build_network(&simple()).unwrap();
    net.delete("tap").unwrap();

    let edited = NetworkDef::from_network("Simple", &net);
    let path = std::env::temp_dir().join("hn_project_roundtrip_edited.yaml");
    save(&path, &edited).unwrap();

    let reloaded = load_yaml(&path).unwrap();
    assert_eq!(reloaded.components.len(), 2);
    assert_eq!(reloaded.connections.len(), 1);
    assert_eq!(reloaded.connections[0].from, "src");
    assert_eq!(reloaded.connections[0].to, "out");
}

#[test]
fn malformed_yaml_reports_parse_error() {
    let path = std::env::temp_dir().join("hn_project_roundtrip_malformed.yaml");
    std::fs::write(&path, "version: [not a number\n").unwrap();
    assert!(matches!(load_yaml(&path), Err(ProjectError::Yaml(_))));
}

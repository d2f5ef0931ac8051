//! Fixture file lock tests.
//!
//! Proves:
//! 1. A world written to disk in fixture form and loaded back searches
//!    exactly like the built-in world (same topology, same trace)
//! 2. Cost-less edges in a fixture are derived with the declared unit
//! 3. The fixture digest binds the document, not its formatting

use pathlab_harness::config::ScrubberConfig;
use pathlab_harness::contract::GraphWorld;
use pathlab_harness::fixture::{load_graph_file, FixtureError};
use pathlab_harness::scrubber::Scrubber;
use pathlab_harness::worlds::reference::Reference;
use pathlab_kernel::graph::GraphError;

fn write(dir: &tempfile::TempDir, name: &str, value: &serde_json::Value) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, serde_json::to_vec_pretty(value).unwrap()).unwrap();
    path
}

#[test]
fn reference_world_round_trips_through_a_file() {
    let graph = Reference.graph().unwrap();
    let mut doc = graph.to_json_value();
    doc["start"] = serde_json::json!(Reference.default_start());
    doc["goal"] = serde_json::json!(Reference.default_goal());

    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "reference_copy.json", &doc);
    let loaded = load_graph_file(&path, None).unwrap();
    assert_eq!(loaded.world_id(), "reference_copy");
    assert_eq!(
        loaded.graph().unwrap().topology_digest().unwrap(),
        graph.topology_digest().unwrap()
    );

    let config = ScrubberConfig::default();
    let mut from_file = Scrubber::for_world(&loaded, &config).unwrap();
    let mut builtin = Scrubber::for_world(&Reference, &config).unwrap();
    assert_eq!(from_file.max_iterations_count(), builtin.max_iterations_count());
    from_file.seek(from_file.max_iterations_count()).unwrap();
    builtin.seek(builtin.max_iterations_count()).unwrap();
    assert_eq!(
        from_file.problem().trace().digest().unwrap(),
        builtin.problem().trace().digest().unwrap()
    );
}

#[test]
fn unweighted_edges_use_declared_unit() {
    let doc = serde_json::json!({
        "unit_distance": 10,
        "nodes": [{"id": "A", "x": 0, "y": 0}, {"id": "B", "x": 30, "y": 40}],
        "edges": [["A", "B"]],
    });
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "unit.json", &doc);

    // Fixture unit wins over the fallback.
    let world = load_graph_file(&path, Some(32)).unwrap();
    let graph = world.graph().unwrap();
    let a = graph.index_of("A").unwrap();
    let b = graph.index_of("B").unwrap();
    assert_eq!(graph.edge_cost(a, b), 5);
    assert_eq!(graph.unit_distance(), Some(10));

    // The heuristic follows the fixture's unit unless the config pins one.
    let scrubber = Scrubber::for_world(&world, &ScrubberConfig::default()).unwrap();
    assert_eq!(scrubber.problem().policy().unit_distance, 10);
    assert_eq!(scrubber.problem().estimate_to("A", "B").unwrap(), 5);
}

#[test]
fn cost_less_edge_without_any_unit_is_rejected() {
    let doc = serde_json::json!({
        "nodes": [{"id": "A", "x": 0, "y": 0}, {"id": "B", "x": 30, "y": 40}],
        "edges": [["A", "B"]],
    });
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "bare.json", &doc);
    let err = load_graph_file(&path, None).unwrap_err();
    assert!(matches!(
        err,
        FixtureError::Decode(GraphError::MissingCost { .. })
    ));
}

#[test]
fn digest_binds_content_not_formatting() {
    let doc = Reference.graph().unwrap().to_json_value();
    let dir = tempfile::tempdir().unwrap();
    let pretty = write(&dir, "pretty.json", &doc);
    let compact = dir.path().join("compact.json");
    std::fs::write(&compact, serde_json::to_vec(&doc).unwrap()).unwrap();

    let a = load_graph_file(&pretty, None).unwrap();
    let b = load_graph_file(&compact, None).unwrap();
    assert_eq!(a.digest(), b.digest());

    let mut changed = doc.clone();
    changed["nodes"][0]["x"] = serde_json::json!(51);
    let c = load_graph_file(&write(&dir, "changed.json", &changed), None).unwrap();
    assert_ne!(a.digest(), c.digest());
}

//! Integration tests for parsing Kubernetes API data.

use civo_core::find::find_match;
use civo_kubernetes::models::KubernetesCluster;
use std::fs;
use std::path::PathBuf;

/// Get the path to the test fixtures directory.
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load_cluster() -> KubernetesCluster {
    let fixture_path = fixtures_dir().join("cluster.json");
    let json_data = fs::read_to_string(&fixture_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read fixture at {}: {}",
            fixture_path.display(),
            e
        )
    });
    serde_json::from_str(&json_data)
        .unwrap_or_else(|e| panic!("Failed to deserialize cluster: {}", e))
}

#[test]
fn test_cluster_summary_fields() {
    let cluster = load_cluster();

    assert_eq!(cluster.name.as_deref(), Some("production"));
    assert_eq!(cluster.ready, Some(true));
    assert_eq!(cluster.num_target_nodes, Some(2));
    assert!(cluster.kubeconfig.as_deref().unwrap().starts_with("apiVersion"));
    assert!(cluster.built_at.is_some());
}

#[test]
fn test_cluster_nodes_and_pools() {
    let cluster = load_cluster();

    assert_eq!(cluster.instances.len(), 2);
    assert_eq!(cluster.pools.len(), 1);
    assert_eq!(cluster.pools[0].instance_names.len(), 2);
    assert_eq!(
        cluster.pools[0].labels["kubernetes.civo.com/node-pool"],
        "node-pool"
    );

    let node = find_match(cluster.instances.clone(), "pool-b").unwrap();
    assert_eq!(node.id, "a1b2c3d4-0000-4000-8000-000000000002");
    assert!(node.tags.is_empty());
}

#[test]
fn test_required_pools_with_null_collections() {
    let cluster = load_cluster();

    let required = &cluster.required_pools[0];
    assert_eq!(required.count, 2);
    assert!(required.labels.is_empty());
    assert!(required.taints.is_empty());
}

#[test]
fn test_conditions_and_applications() {
    let cluster = load_cluster();

    assert_eq!(cluster.conditions.len(), 2);
    assert_eq!(cluster.conditions[1].reason.as_deref(), Some("AllNodesReady"));
    assert_eq!(cluster.installed_applications[0].installed, Some(true));
}

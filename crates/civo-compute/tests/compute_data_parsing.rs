//! Integration tests for parsing compute API data.
//!
//! These tests check that the civo-compute models deserialize representative
//! provider responses.

use civo_compute::models::{Instance, Region};
use civo_core::find::find_match;
use civo_core::PaginatedList;
use std::fs;
use std::path::PathBuf;

/// Get the path to the test fixtures directory.
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load_fixture(name: &str) -> String {
    let fixture_path = fixtures_dir().join(name);
    fs::read_to_string(&fixture_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read fixture at {}: {}",
            fixture_path.display(),
            e
        )
    })
}

#[test]
fn test_deserialize_instance_page() {
    let json_data = load_fixture("instance_list.json");

    let page: PaginatedList<Instance> = serde_json::from_str(&json_data)
        .unwrap_or_else(|e| panic!("Failed to deserialize instance list: {}", e));

    assert_eq!(page.page, 1);
    assert_eq!(page.per_page, 15);
    assert_eq!(page.items.len(), 2, "Expected 2 instances in test data");
}

#[test]
fn test_full_instance_fields() {
    let page: PaginatedList<Instance> =
        serde_json::from_str(&load_fixture("instance_list.json")).unwrap();
    let api = &page.items[0];

    assert_eq!(api.hostname, "api-1.example.com");
    assert_eq!(api.size.as_deref(), Some("g3.medium"));
    assert_eq!(api.tags, vec!["api", "production"]);
    assert!(api.volume_backed);
    assert_eq!(api.cpu_cores, Some(2));
    assert_eq!(api.subnets.len(), 1);
    assert_eq!(api.subnets[0].name.as_deref(), Some("api-subnet"));
    assert!(api.created_at.is_some());
}

#[test]
fn test_sparse_instance_fields() {
    let page: PaginatedList<Instance> =
        serde_json::from_str(&load_fixture("instance_list.json")).unwrap();
    let worker = &page.items[1];

    assert_eq!(worker.status.as_deref(), Some("SHUTOFF"));
    assert_eq!(worker.public_ip, None);
    assert!(worker.subnets.is_empty());
    assert!(worker.created_at.is_none());
}

#[test]
fn test_instance_search_by_hostname() {
    let page: PaginatedList<Instance> =
        serde_json::from_str(&load_fixture("instance_list.json")).unwrap();

    let found = find_match(page.items, "WORKER").unwrap();
    assert_eq!(found.id, "c288bf50-3045-4b4e-9a3f-3f7e5d2b0a12");
}

#[test]
fn test_region_features_default_when_missing() {
    let regions: Vec<Region> = serde_json::from_str(&load_fixture("region_list.json")).unwrap();

    assert_eq!(regions.len(), 2);
    assert!(regions[0].default);
    assert!(regions[1].out_of_capacity);
    assert!(!regions[1].features.paas);
    assert!(!regions[1].features.public_ip_node_pools);
}

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;
use crate::claims::{ClaimMetadata, ClaimType};

fn test_config(controller_url: String) -> PineconeConfig {
    PineconeConfig {
        api_key: "pc-test".to_string(),
        controller_url,
        index_name: "health-claims".to_string(),
    }
}

fn sample_entry(id: &str) -> VectorEntry {
    VectorEntry {
        id: id.to_string(),
        values: vec![0.1, 0.2],
        metadata: ClaimMetadata {
            scope: "bloed".to_string(),
            nutrient: "Vitamin D".to_string(),
            claim: "Toegestaan: helps bones".to_string(),
            claim_type: ClaimType::Allowed,
        },
    }
}

async fn mount_describe(server: &MockServer, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/indexes/health-claims"))
        .and(header("Api-Key", "pc-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "health-claims",
            "dimension": 1536,
            "metric": "cosine",
            "host": server.uri(),
        })))
        .expect(expected_calls)
        .mount(server)
        .await;
}

#[tokio::test]
async fn upsert_posts_vectors_with_credentials() {
    let server = MockServer::start().await;
    mount_describe(&server, 1).await;

    Mock::given(method("POST"))
        .and(path("/vectors/upsert"))
        .and(header("Api-Key", "pc-test"))
        .and(body_partial_json(json!({
            "vectors": [{
                "id": "bloed-vitamin-d-allowed-0",
                "values": [0.1, 0.2],
                "metadata": {
                    "scope": "bloed",
                    "nutrient": "Vitamin D",
                    "claim": "Toegestaan: helps bones",
                    "claimType": "allowed",
                },
            }],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"upsertedCount": 1})))
        .expect(2)
        .mount(&server)
        .await;

    let client = PineconeClient::new(&test_config(server.uri())).expect("client builds");

    // Two upserts, but the describe-index call above is expected exactly once:
    // the resolved host is cached.
    for _ in 0..2 {
        client
            .upsert("health-claims", vec![sample_entry("bloed-vitamin-d-allowed-0")])
            .await
            .expect("upsert succeeds");
    }
}

#[tokio::test]
async fn upsert_of_no_entries_makes_no_requests() {
    let server = MockServer::start().await;
    // No mocks mounted: any request would 404 and fail the upsert.

    let client = PineconeClient::new(&test_config(server.uri())).expect("client builds");

    client
        .upsert("health-claims", Vec::new())
        .await
        .expect("empty upsert is a no-op");
}

#[tokio::test]
async fn upsert_provider_error_maps_to_store_error() {
    let server = MockServer::start().await;
    mount_describe(&server, 1).await;

    Mock::given(method("POST"))
        .and(path("/vectors/upsert"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let client = PineconeClient::new(&test_config(server.uri())).expect("client builds");

    let err = client
        .upsert("health-claims", vec![sample_entry("x-0")])
        .await
        .expect_err("should fail");
    assert!(matches!(err, ClaimsError::VectorStore(_)));
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn query_returns_matches_in_provider_order() {
    let server = MockServer::start().await;
    mount_describe(&server, 1).await;

    Mock::given(method("POST"))
        .and(path("/query"))
        .and(header("Api-Key", "pc-test"))
        .and(body_partial_json(json!({
            "vector": [0.5, 0.5],
            "topK": 3,
            "includeMetadata": true,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "matches": [
                {
                    "id": "bloed-vitamin-d-allowed-0",
                    "score": 0.93,
                    "metadata": {
                        "scope": "bloed",
                        "nutrient": "Vitamin D",
                        "claim": "Toegestaan: helps bones",
                        "claimType": "allowed",
                    },
                },
                {"id": "botten-calcium-general-4", "score": 0.87},
            ],
            "namespace": "",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = PineconeClient::new(&test_config(server.uri())).expect("client builds");

    let matches = client
        .query("health-claims", vec![0.5, 0.5], 3, true)
        .await
        .expect("query succeeds");

    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].id, "bloed-vitamin-d-allowed-0");
    assert!((matches[0].score - 0.93).abs() < f32::EPSILON);
    assert_eq!(
        matches[0]
            .metadata
            .as_ref()
            .map(|m| m.nutrient.as_str()),
        Some("Vitamin D")
    );
    assert_eq!(matches[1].metadata, None);
}

#[tokio::test]
async fn describe_index_failure_maps_to_store_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/indexes/health-claims"))
        .respond_with(ResponseTemplate::new(404).set_body_string("index not found"))
        .mount(&server)
        .await;

    let client = PineconeClient::new(&test_config(server.uri())).expect("client builds");

    let err = client
        .query("health-claims", vec![0.1], 20, true)
        .await
        .expect_err("should fail");
    assert!(matches!(err, ClaimsError::VectorStore(_)));
}

#[test]
fn host_without_scheme_defaults_to_https() {
    let host = parse_host("health-claims-abc123.svc.us-east-1.pinecone.io").expect("parses");
    assert_eq!(host.scheme(), "https");

    let host = parse_host("http://127.0.0.1:9000").expect("parses");
    assert_eq!(host.scheme(), "http");
}

#![expect(
    clippy::tests_outside_test_module,
    reason = "integration tests are only compiled in test mode"
)]

// Harvester tests against a mocked catalog
// Run with: cargo test --test integration_harvester

use std::time::Duration;

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use nutriclaims::claims::ClaimType;
use nutriclaims::harvester::{HarvestConfig, Harvester};

const BLOED_PAGE: &str = r#"
<div class="ui-load-accordion">
  <h3>IJzer</h3>
  <div>
    <ul>
      <li><strong>Alternatieve voorbeeld bewoordingen:</strong>
        <ul>
          <li>Toegestaan: ijzer draagt bij aan normaal zuurstoftransport</li>
          <li>Niet toegestaan: ijzer geneest bloedarmoede</li>
        </ul>
      </li>
    </ul>
  </div>
</div>
"#;

const HART_PAGE: &str = r#"
<div class="ui-load-accordion">
  <h3>Omega-3</h3>
  <div>
    <ul>
      <li><strong>Alternatieve voorbeeld bewoordingen:</strong>
        <ul>
          <li>omega-3 ondersteunt de normale werking van het hart</li>
        </ul>
      </li>
    </ul>
  </div>
</div>
"#;

fn test_config(server: &MockServer) -> HarvestConfig {
    HarvestConfig {
        base_url: format!("{}/index.php?v=2&action=acc", server.uri()),
        scope_delay: Duration::ZERO,
        timeout: Duration::from_secs(5),
        user_agent: "nutriclaims-tests".to_string(),
        show_progress: false,
    }
}

#[tokio::test]
async fn harvests_available_scopes_and_skips_failing_pages() {
    let server = MockServer::start().await;

    // Only two scope pages exist; every other scope request 404s and must be
    // skipped without aborting the harvest.
    Mock::given(method("GET"))
        .and(path("/index.php"))
        .and(query_param("master", "bloed"))
        .and(query_param("nutrient", "Alles"))
        .respond_with(ResponseTemplate::new(200).set_body_string(BLOED_PAGE))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/index.php"))
        .and(query_param("master", "hart"))
        .respond_with(ResponseTemplate::new(200).set_body_string(HART_PAGE))
        .expect(1)
        .mount(&server)
        .await;

    let harvester = Harvester::new(test_config(&server)).expect("harvester builds");
    let claims = harvester.harvest().await.expect("harvest succeeds");

    assert_eq!(claims.len(), 3);

    assert_eq!(claims[0].scope, "bloed");
    assert_eq!(claims[0].nutrient, "IJzer");
    assert_eq!(claims[0].claim_type, ClaimType::Allowed);
    assert_eq!(claims[1].claim_type, ClaimType::Forbidden);

    // Scopes are visited in vocabulary order, so "bloed" claims precede "hart".
    assert_eq!(claims[2].scope, "hart");
    assert_eq!(claims[2].nutrient, "Omega-3");
    assert_eq!(claims[2].claim_type, ClaimType::General);
}

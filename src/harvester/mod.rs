// Catalog harvester module
// Walks the external claims catalog one scope at a time and extracts raw claim tuples

pub mod scopes;


use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use scraper::{ElementRef, Html, Selector};
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::claims::{ClaimType, RawClaim};
use crate::{ClaimsError, Result};

pub use scopes::SCOPES_OF_APPLICATION;

pub const DEFAULT_CATALOG_URL: &str = "https://claimsdb.aa-ict.com/index.php?v=2&action=acc";

/// Marker text of the list item holding the alternative claim phrasings
const PHRASINGS_MARKER: &str = "Alternatieve voorbeeld bewoordingen";
const ALLOWED_PREFIX: &str = "Toegestaan:";
const FORBIDDEN_PREFIX: &str = "Niet toegestaan:";

/// Configuration for the catalog harvester
#[derive(Debug, Clone)]
pub struct HarvestConfig {
    /// Catalog endpoint; scope and nutrient selectors are appended as query parameters
    pub base_url: String,
    /// Fixed pause between scope pages, to pace requests against the catalog
    pub scope_delay: Duration,
    /// Timeout for catalog HTTP requests
    pub timeout: Duration,
    pub user_agent: String,
    /// Whether to render a progress bar on the console
    pub show_progress: bool,
}

impl Default for HarvestConfig {
    #[inline]
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CATALOG_URL.to_string(),
            scope_delay: Duration::from_secs(10),
            timeout: Duration::from_secs(30),
            user_agent: "nutriclaims/0.1.0 (Claims Indexer)".to_string(),
            show_progress: true,
        }
    }
}

/// Fetches and parses the claims catalog, one page per scope
#[derive(Debug)]
pub struct Harvester {
    http: reqwest::Client,
    config: HarvestConfig,
}

impl Harvester {
    #[inline]
    pub fn new(config: HarvestConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| ClaimsError::Harvest(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    /// Harvest raw claims for every scope in the controlled vocabulary.
    ///
    /// A scope whose page cannot be fetched is logged and skipped; the
    /// remaining scopes are still harvested. Claims come back in catalog
    /// order: scopes in vocabulary order, nutrients and phrasings in
    /// document order within each page.
    #[inline]
    pub async fn harvest(&self) -> Result<Vec<RawClaim>> {
        let bar = if self.config.show_progress {
            ProgressBar::new(SCOPES_OF_APPLICATION.len() as u64).with_style(
                ProgressStyle::with_template("{bar:30} [{pos}/{len}] Harvesting {msg}")
                    .expect("style template is valid"),
            )
        } else {
            ProgressBar::hidden()
        };

        let mut claims = Vec::new();

        for (position, scope) in SCOPES_OF_APPLICATION.iter().enumerate() {
            bar.set_message((*scope).to_string());

            match self.fetch_scope_page(scope).await {
                Ok(html) => {
                    let parsed = parse_scope_page(&html, scope);
                    info!("Harvested {} claims for scope {}", parsed.len(), scope);
                    claims.extend(parsed);
                }
                Err(e) => {
                    warn!("Skipping scope {}: {}", scope, e);
                }
            }

            bar.inc(1);

            if position + 1 < SCOPES_OF_APPLICATION.len() {
                sleep(self.config.scope_delay).await;
            }
        }

        bar.finish_with_message(format!("{} claims", claims.len()));
        info!(
            "Harvested {} claims across {} scopes",
            claims.len(),
            SCOPES_OF_APPLICATION.len()
        );

        Ok(claims)
    }

    async fn fetch_scope_page(&self, scope: &str) -> Result<String> {
        debug!("Fetching catalog page for scope {}", scope);

        let response = self
            .http
            .get(&self.config.base_url)
            .query(&[("master", scope), ("nutrient", "Alles")])
            .send()
            .await
            .map_err(|e| {
                ClaimsError::Harvest(format!("Request for scope {} failed: {}", scope, e))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClaimsError::Harvest(format!(
                "Catalog returned {} for scope {}",
                status, scope
            )));
        }

        response.text().await.map_err(|e| {
            ClaimsError::Harvest(format!("Failed to read page for scope {}: {}", scope, e))
        })
    }
}

/// Parse one scope page of the catalog into raw claims.
///
/// The page is an accordion: an `h3` per nutrient, each followed by a `div`
/// panel whose list items hold the claim details. Claim phrasings live in a
/// nested list under the item marked "Alternatieve voorbeeld bewoordingen".
#[inline]
pub fn parse_scope_page(html: &str, scope: &str) -> Vec<RawClaim> {
    let document = Html::parse_document(html);

    let heading_selector =
        Selector::parse("div.ui-load-accordion h3").expect("valid selector");
    let item_selector = Selector::parse("li").expect("valid selector");
    let marker_selector = Selector::parse("strong").expect("valid selector");
    let phrasing_selector = Selector::parse("ul > li").expect("valid selector");

    let mut claims = Vec::new();

    for heading in document.select(&heading_selector) {
        let nutrient = collect_text(heading);
        if nutrient.is_empty() {
            continue;
        }

        let Some(panel) = next_element_sibling(heading).filter(|e| e.value().name() == "div")
        else {
            debug!("Nutrient {} has no accordion panel", nutrient);
            continue;
        };

        for item in panel.select(&item_selector) {
            let is_phrasings_item = item
                .select(&marker_selector)
                .any(|strong| collect_text(strong).contains(PHRASINGS_MARKER));
            if !is_phrasings_item {
                continue;
            }

            for phrasing in item.select(&phrasing_selector) {
                let text = collect_text(phrasing);
                if text.is_empty() {
                    continue;
                }

                let claim_type = classify_claim(&text);
                claims.push(RawClaim {
                    scope: scope.to_string(),
                    nutrient: nutrient.clone(),
                    text,
                    claim_type,
                });
            }
        }
    }

    claims
}

/// Classify a claim phrasing by its catalog prefix convention
#[inline]
pub fn classify_claim(text: &str) -> ClaimType {
    if text.starts_with(ALLOWED_PREFIX) {
        ClaimType::Allowed
    } else if text.starts_with(FORBIDDEN_PREFIX) {
        ClaimType::Forbidden
    } else {
        ClaimType::General
    }
}

fn collect_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn next_element_sibling(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    element.next_siblings().find_map(ElementRef::wrap)
}

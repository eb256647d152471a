// Claim record model
// Turns raw harvested claim tuples into uniquely identified, embeddable records


use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification of a claim phrasing in the source catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimType {
    Allowed,
    Forbidden,
    General,
}

impl ClaimType {
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            ClaimType::Allowed => "allowed",
            ClaimType::Forbidden => "forbidden",
            ClaimType::General => "general",
        }
    }
}

impl fmt::Display for ClaimType {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A raw claim tuple as extracted from the catalog by the harvester
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawClaim {
    /// Scope of application the claim is filed under
    pub scope: String,
    /// Nutrient the claim is about
    pub nutrient: String,
    /// The claim phrasing as it appears in the catalog
    pub text: String,
    pub claim_type: ClaimType,
}

/// Metadata stored in the vector index alongside each embedding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimMetadata {
    pub scope: String,
    pub nutrient: String,
    pub claim: String,
    #[serde(rename = "claimType")]
    pub claim_type: ClaimType,
}

/// A formatted claim ready for embedding and upsert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimRecord {
    /// Stable identifier, unique within one ingestion run
    pub id: String,
    /// Canonical text rendering used as embedding input, never stored
    pub embedding_input: String,
    pub metadata: ClaimMetadata,
}

/// Sanitize a string for use as an identifier component.
///
/// Lowercases, drops characters outside word/whitespace/hyphen, collapses
/// whitespace and hyphen runs to a single hyphen, and trims hyphens from both
/// ends. Distinct inputs may sanitize to the same token (or to an empty one);
/// id uniqueness comes from the sequence number, not from this function.
#[inline]
pub fn sanitize_id_token(raw: &str) -> String {
    let mut token = String::with_capacity(raw.len());

    for c in raw.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            token.push(c);
        } else if (c.is_whitespace() || c == '-') && !token.ends_with('-') {
            token.push('-');
        }
    }

    token.trim_matches('-').to_string()
}

/// Format a raw claim into a record with a derived id and embedding input.
///
/// Pure and total: any string input is accepted, and identical inputs
/// (including the sequence number) always produce an identical record. The
/// sequence number must be unique per call within an ingestion run.
#[inline]
pub fn format_claim(claim: &RawClaim, sequence: usize) -> ClaimRecord {
    let id = format!(
        "{}-{}-{}-{}",
        sanitize_id_token(&claim.scope),
        sanitize_id_token(&claim.nutrient),
        sanitize_id_token(claim.claim_type.as_str()),
        sequence
    );

    let embedding_input = format!(
        "Scope: {}, Nutrient: {}, Claim Type: {}, Claim: {}",
        claim.scope, claim.nutrient, claim.claim_type, claim.text
    );

    ClaimRecord {
        id,
        embedding_input,
        metadata: ClaimMetadata {
            scope: claim.scope.clone(),
            nutrient: claim.nutrient.clone(),
            claim: claim.text.clone(),
            claim_type: claim.claim_type,
        },
    }
}

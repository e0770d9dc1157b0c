//! Catalog enrichment — asks the model to infer missing specs for raw
//! scraped listings.
//!
//! The reply is a single text blob, not per-laptop records; nothing
//! downstream parses it.

use serde::Deserialize;
use tracing::info;

use crate::enrichment::prompts::ANALYZE_PROMPT_HEADER;
use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{complete_json, CompletionModel};
use crate::models::laptop::RawListing;

/// Model reply for the enrichment flow.
#[derive(Debug, Deserialize)]
struct AnalyzedReply {
    #[serde(rename = "analyzedData")]
    analyzed_data: String,
}

/// Runs the enrichment prompt over `listings` and returns the analyzed text.
pub async fn analyze_listings(
    model: &dyn CompletionModel,
    listings: &[RawListing],
) -> Result<String, AppError> {
    info!("Analyzing {} raw listing(s)", listings.len());

    let prompt = build_analyze_prompt(listings);
    let reply: AnalyzedReply = complete_json(model, &prompt, JSON_ONLY_SYSTEM)
        .await
        .map_err(|e| AppError::Model(format!("Catalog analysis call failed: {e}")))?;

    Ok(reply.analyzed_data)
}

/// Renders one listing line per laptop under the prompt header.
fn build_analyze_prompt(listings: &[RawListing]) -> String {
    let mut prompt = String::from(ANALYZE_PROMPT_HEADER);
    for listing in listings {
        prompt.push_str(&format!(
            "- Name: {}, URL: {}, Price: {}, Brand: {}\n",
            listing.name, listing.url, listing.price, listing.brand
        ));
    }
    prompt
}

//! Recommendation flow — loads the catalog, filters it by budget, and asks
//! the model to rank the shortlist against the user's preferences.
//!
//! Flow: load_catalog → within_budget → short-circuit on empty →
//!       prompt fill → model call → validate reply against the candidates.
//!
//! The budget invariant is enforced locally: the model only ever sees
//! pre-filtered candidates, and its reply is checked against them before
//! anything reaches the caller.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::catalog::filter::within_budget;
use crate::catalog::loader::load_catalog;
use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{complete_json, CompletionModel};
use crate::models::laptop::Laptop;
use crate::recommendation::prompts::RECOMMEND_PROMPT_TEMPLATE;

/// Max re-asks when the model's reply contains items outside the candidate set.
const MAX_RECOMMEND_RETRIES: u32 = 2;

/// User preferences collected by the questionnaire form.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationRequest {
    /// Budget ceiling in Indian Rupees.
    pub budget: f64,
    /// Primary usage, free text (e.g. gaming, work, personal).
    pub usage: String,
    /// Desired features, free text (e.g. long battery life, lightweight).
    pub desired_features: String,
}

/// Runs the recommendation flow for one questionnaire submission.
///
/// Returns an empty list — without invoking the model — when the catalog is
/// empty or nothing in it fits the budget.
pub async fn recommend_laptops(
    model: &dyn CompletionModel,
    catalog_path: &Path,
    request: &RecommendationRequest,
) -> Result<Vec<Laptop>, AppError> {
    let catalog = load_catalog(catalog_path)?;
    if catalog.is_empty() {
        info!(
            "Catalog at {} is empty — nothing to recommend",
            catalog_path.display()
        );
        return Ok(Vec::new());
    }

    let candidates = within_budget(&catalog, request.budget);
    if candidates.is_empty() {
        info!(
            "No catalog entries within budget {} — skipping model call",
            request.budget
        );
        return Ok(Vec::new());
    }
    info!(
        "{} of {} catalog entries within budget {}",
        candidates.len(),
        catalog.len(),
        request.budget
    );

    let prompt = build_recommend_prompt(request, &candidates)?;
    ask_model_with_retry(model, &prompt, &candidates, request.budget).await
}

/// Builds the recommendation prompt by filling the template with the user's
/// preferences and the JSON-encoded candidate array.
fn build_recommend_prompt(
    request: &RecommendationRequest,
    candidates: &[Laptop],
) -> Result<String, AppError> {
    let laptops_json = serde_json::to_string(candidates)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize candidates: {e}")))?;

    Ok(RECOMMEND_PROMPT_TEMPLATE
        .replace("{budget}", &request.budget.to_string())
        .replace("{usage}", &request.usage)
        .replace("{desired_features}", &request.desired_features)
        .replace("{laptops}", &laptops_json))
}

/// Calls the model and validates its reply against the candidate set.
///
/// A reply naming laptops outside the candidates, or priced over budget, is
/// re-asked up to `MAX_RECOMMEND_RETRIES` times. On the final attempt the
/// offending items are dropped with a warning, so callers never see an
/// over-budget recommendation. A reply that fails schema validation is a
/// model error.
async fn ask_model_with_retry(
    model: &dyn CompletionModel,
    prompt: &str,
    candidates: &[Laptop],
    budget: f64,
) -> Result<Vec<Laptop>, AppError> {
    let candidate_urls: HashSet<&str> = candidates.iter().map(|l| l.url.as_str()).collect();
    let is_valid =
        |laptop: &Laptop| candidate_urls.contains(laptop.url.as_str()) && laptop.price <= budget;

    let mut last_reply: Vec<Laptop> = Vec::new();
    for attempt in 0..=MAX_RECOMMEND_RETRIES {
        let reply: Vec<Laptop> = complete_json(model, prompt, JSON_ONLY_SYSTEM)
            .await
            .map_err(|e| AppError::Model(format!("Recommendation call failed: {e}")))?;

        let invalid_count = reply.iter().filter(|l| !is_valid(l)).count();
        if invalid_count == 0 {
            return Ok(reply);
        }

        warn!(
            "Recommendation attempt {}/{}: {} item(s) outside the candidate set or over budget",
            attempt + 1,
            MAX_RECOMMEND_RETRIES + 1,
            invalid_count
        );
        last_reply = reply;
    }

    let kept: Vec<Laptop> = last_reply.into_iter().filter(|l| is_valid(l)).collect();
    warn!(
        "Model kept naming invalid laptops after {} attempts — returning the {} valid item(s)",
        MAX_RECOMMEND_RETRIES + 1,
        kept.len()
    );
    Ok(kept)
}

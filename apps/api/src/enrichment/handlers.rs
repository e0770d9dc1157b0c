//! Axum route handlers for the catalog analysis API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::enrichment::analyzer::analyze_listings;
use crate::errors::AppError;
use crate::models::laptop::RawListing;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub laptops: Vec<RawListing>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analyzed_data: String,
}

/// POST /api/v1/catalog/analyze
///
/// Batch spec inference over raw scraped listings.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    if request.laptops.is_empty() {
        return Err(AppError::Validation("laptops cannot be empty".to_string()));
    }

    let analyzed_data = analyze_listings(state.model.as_ref(), &request.laptops).await?;

    Ok(Json(AnalyzeResponse { analyzed_data }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::path::PathBuf;
    use std::sync::Arc;

    use crate::config::Config;
    use crate::llm_client::{CompletionModel, LlmError};

    struct CannedModel(&'static str);

    #[async_trait]
    impl CompletionModel for CannedModel {
        async fn complete(&self, _prompt: &str, _system: &str) -> Result<String, LlmError> {
            Ok(self.0.to_string())
        }
    }

    fn state(model: Arc<dyn CompletionModel>) -> AppState {
        AppState {
            config: Config {
                anthropic_api_key: "test-key".to_string(),
                catalog_path: PathBuf::from("/nonexistent/catalog.tsv"),
                port: 8080,
                rust_log: "info".to_string(),
            },
            model,
        }
    }

    #[tokio::test]
    async fn test_empty_listing_set_is_rejected() {
        let state = state(Arc::new(CannedModel("{}")));
        let err = handle_analyze(State(state), Json(AnalyzeRequest { laptops: vec![] }))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_analyze_returns_the_blob() {
        let state = state(Arc::new(CannedModel(r#"{"analyzedData": "filled specs"}"#)));
        let request = AnalyzeRequest {
            laptops: vec![RawListing {
                name: "Inspiron 15".to_string(),
                url: "u1".to_string(),
                price: 52990.0,
                brand: "Dell".to_string(),
            }],
        };

        let Json(response) = handle_analyze(State(state), Json(request)).await.unwrap();
        assert_eq!(response.analyzed_data, "filled specs");
    }
}

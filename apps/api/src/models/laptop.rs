use serde::{Deserialize, Serialize};

/// A single catalog entry. Optional fields are specs the scraper did not
/// capture; the enrichment flow exists to backfill them.
///
/// Serialized with camelCase keys — the shape shared with the model exchange
/// and the client. There is no identity key beyond `url`, and duplicate URLs
/// are preserved as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Laptop {
    pub name: String,
    pub url: String,
    /// Price in Indian Rupees.
    pub price: f64,
    pub brand: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graphics_card: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_resolution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
}

/// The fields the scraper reliably captures. Input row for the enrichment
/// flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawListing {
    pub name: String,
    pub url: String,
    pub price: f64,
    pub brand: String,
}

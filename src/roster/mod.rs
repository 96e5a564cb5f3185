pub mod avatar;
pub mod field;

use serde::{Deserialize, Serialize};

use crate::source::FetchError;

/// One character entry from the `people` listing.
///
/// `name` and `height` must be present; the remaining descriptive fields
/// default to an empty string so sparse mirrors still decode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub name: String,
    pub height: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub hair_color: String,
    #[serde(default)]
    pub eye_color: String,
    #[serde(default)]
    pub birth_year: String,
    #[serde(default)]
    pub url: String,
}

// Pagination fields (`count`, `next`, `previous`) are ignored.
#[derive(Debug, Deserialize)]
struct ListingEnvelope {
    results: Option<Vec<CharacterRecord>>,
}

/// Parse a listing response body into its records, preserving server order.
pub fn parse_listing(body: &str) -> Result<Vec<CharacterRecord>, FetchError> {
    let envelope: ListingEnvelope = serde_json::from_str(body)?;
    envelope.results.ok_or(FetchError::MissingResults)
}

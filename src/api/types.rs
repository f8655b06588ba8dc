/// Wire models for the Pixabay search API
///
/// These structs mirror the JSON the API returns. Field names that are
/// camelCase on the wire are renamed to idiomatic snake_case here.
/// Unknown response fields are ignored.

use serde::Deserialize;

/// One page of search results
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    /// Total number of images matching the query (fixed per query)
    #[serde(rename = "totalHits")]
    pub total_hits: u32,
    /// The images on this page
    pub hits: Vec<ImageRecord>,
}

/// A single image as reported by the API.
/// All fields are passed through verbatim - no transformation or
/// derived values.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageRecord {
    /// Stable API id, used to correlate async thumbnail loads
    pub id: u64,
    /// Medium-size preview shown in the gallery grid
    #[serde(rename = "webformatURL")]
    pub preview_url: String,
    /// Full-size image shown in the modal viewer
    #[serde(rename = "largeImageURL")]
    pub full_size_url: String,
    /// Comma-separated tags, used as the accessible caption
    pub tags: String,
    pub likes: u64,
    pub views: u64,
    pub comments: u64,
    pub downloads: u64,
}

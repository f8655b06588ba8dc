/// Pixabay API module
///
/// This module handles all remote communication:
/// - Wire models for the search response (types.rs)
/// - The HTTP search client and its error taxonomy (client.rs)

pub mod client;
pub mod types;

pub use client::{SearchClient, SearchError};
pub use types::{ImageRecord, SearchResponse};

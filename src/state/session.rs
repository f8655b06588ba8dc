/// Search session state
///
/// One `SearchSession` lives for the whole application run. It is reset
/// by every new submission and advanced by every "load more". All
/// pagination arithmetic lives here so the controller never touches
/// raw page numbers.

/// Fixed number of results requested per page.
/// This drives both the API request and the exhaustion arithmetic.
pub const PER_PAGE: u32 = 40;

/// Pagination state for the current query
///
/// - `query` is the last submitted, trimmed search term
/// - `current_page` is 1-based and points at the most recently fetched page
/// - `total_hits` is the total reported by the API for this query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSession {
    query: String,
    current_page: u32,
    total_hits: u32,
}

impl SearchSession {
    /// Create an idle session with no query
    pub fn new() -> Self {
        Self {
            query: String::new(),
            current_page: 1,
            total_hits: 0,
        }
    }

    /// Start a fresh session for a new query.
    /// Resets the page counter to 1 and forgets the previous total.
    pub fn begin(&mut self, query: &str) {
        self.query = query.to_string();
        self.current_page = 1;
        self.total_hits = 0;
    }

    /// Record the total hit count reported by the first page response
    pub fn record_total(&mut self, total_hits: u32) {
        self.total_hits = total_hits;
    }

    /// Move to the next page.
    /// The counter stays advanced even if the fetch later fails - a retry
    /// skips the failed page rather than re-requesting it.
    pub fn advance(&mut self) -> u32 {
        self.current_page += 1;
        self.current_page
    }

    /// The currently active search term
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The most recently fetched (or requested) 1-based page
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Total matching images reported by the API
    pub fn total_hits(&self) -> u32 {
        self.total_hits
    }

    /// Total number of pages for the current query
    pub fn total_pages(&self) -> u32 {
        self.total_hits.div_ceil(PER_PAGE)
    }

    /// The single exhaustion test: have the pages fetched so far covered
    /// every hit the API reported?
    pub fn is_exhausted(&self) -> bool {
        self.current_page * PER_PAGE >= self.total_hits
    }

    /// True while further pages remain for the current query
    pub fn has_more(&self) -> bool {
        !self.is_exhausted()
    }
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize raw input from the search field.
/// Returns `None` for empty or whitespace-only input, which must never
/// reach the search client.
pub fn normalize_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_rejected() {
        assert_eq!(normalize_query(""), None);
        assert_eq!(normalize_query("   "), None);
        assert_eq!(normalize_query("\t\n"), None);
    }

    #[test]
    fn test_input_is_trimmed() {
        assert_eq!(normalize_query("  sunset beach "), Some("sunset beach".to_string()));
    }

    #[test]
    fn test_begin_resets_session() {
        let mut session = SearchSession::new();
        session.begin("cats");
        session.record_total(500);
        session.advance();
        session.advance();

        session.begin("dogs");
        assert_eq!(session.query(), "dogs");
        assert_eq!(session.current_page(), 1);
        assert_eq!(session.total_hits(), 0);
    }

    #[test]
    fn test_83_hits_exhaust_on_page_3() {
        // 83 hits at 40 per page = 3 pages
        let mut session = SearchSession::new();
        session.begin("flowers");
        session.record_total(83);

        assert_eq!(session.total_pages(), 3);
        assert!(session.has_more(), "page 1 of 3 should not be exhausted");

        assert_eq!(session.advance(), 2);
        assert!(session.has_more(), "page 2 of 3 should not be exhausted");

        assert_eq!(session.advance(), 3);
        assert!(session.is_exhausted(), "3 * 40 = 120 >= 83");
    }

    #[test]
    fn test_exactly_one_page_is_exhausted_immediately() {
        let mut session = SearchSession::new();
        session.begin("rare");
        session.record_total(40);

        assert_eq!(session.total_pages(), 1);
        assert!(session.is_exhausted(), "1 * 40 >= 40");
    }

    #[test]
    fn test_41_hits_leave_a_second_page() {
        let mut session = SearchSession::new();
        session.begin("birds");
        session.record_total(41);

        assert_eq!(session.total_pages(), 2);
        assert!(session.has_more());

        session.advance();
        assert!(session.is_exhausted());
    }
}

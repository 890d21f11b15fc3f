/// A single entry fetched from a feed, before summarization.
///
/// Items exist only within a run; once summarized they become [`crate::domain::Post`]s.
#[derive(Debug, Clone)]
pub struct FeedItem {
    pub id: String,
    pub source: String,
    pub source_context: String,
    pub title: String,
    pub description: String,
    pub url: String,
    /// ISO-8601 UTC timestamp with a `Z` suffix.
    pub timestamp: String,
}

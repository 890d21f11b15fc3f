use serde::{Deserialize, Serialize};

use super::FeedItem;

/// A summarized item as persisted in the store and rendered on the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub text: String,
    pub url: String,
    pub source: String,
    pub timestamp: String,
}

impl Post {
    pub fn from_item(item: &FeedItem, text: String) -> Self {
        Self {
            id: item.id.clone(),
            text,
            url: item.url.clone(),
            source: item.source.clone(),
            timestamp: item.timestamp.clone(),
        }
    }
}

use chrono::{DateTime, SecondsFormat, Utc};
use feed_rs::parser;
use reqwest::blocking::Client;

use crate::domain::{FeedItem, Subscription};
use crate::errors::{BriefsError, BriefsResult};
use crate::sources::traits::FeedFetcher;

pub struct RssAtomFetcher {
    client: Client,
}

impl RssAtomFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    fn fetch_and_parse(&self, url: &str) -> BriefsResult<feed_rs::model::Feed> {
        let response = self.client.get(url).send()?;
        let bytes = response.bytes()?;

        Self::parse_bytes(&bytes)
    }

    fn parse_bytes(bytes: &[u8]) -> BriefsResult<feed_rs::model::Feed> {
        parser::parse(bytes).map_err(|e| BriefsError::FeedParse(e.to_string()))
    }

    /// Parse items from raw feed bytes (used for testing)
    #[cfg(test)]
    fn items_from_bytes(bytes: &[u8], subscription: &Subscription) -> BriefsResult<Vec<FeedItem>> {
        let parsed = Self::parse_bytes(bytes)?;
        Ok(items_from_feed(parsed, subscription))
    }
}

impl Default for RssAtomFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedFetcher for RssAtomFetcher {
    fn fetch_items(&self, subscription: &Subscription) -> BriefsResult<Vec<FeedItem>> {
        let parsed = self.fetch_and_parse(&subscription.url)?;
        Ok(items_from_feed(parsed, subscription))
    }
}

fn items_from_feed(parsed: feed_rs::model::Feed, subscription: &Subscription) -> Vec<FeedItem> {
    let source = parsed
        .title
        .map(|t| t.content)
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| subscription.url.clone());

    parsed
        .entries
        .into_iter()
        .filter_map(|entry| {
            let id = resolve_id(
                &entry.id,
                entry.links.first().map(|l| l.href.as_str()),
                entry.title.as_ref().map(|t| t.content.as_str()),
            )?;
            let timestamp = entry_timestamp(entry.published, entry.updated);

            let title = entry.title.map(|t| t.content).unwrap_or_default();
            let description = entry
                .summary
                .map(|t| t.content)
                .or_else(|| entry.content.and_then(|c| c.body))
                .unwrap_or_default();
            let url = entry
                .links
                .first()
                .map(|l| l.href.clone())
                .unwrap_or_default();

            Some(FeedItem {
                id,
                source: source.clone(),
                source_context: subscription.context.clone(),
                title,
                description,
                url,
                timestamp,
            })
        })
        .collect()
}

/// Identifier fallback chain: feed-provided id, first link, title.
/// Entries where every candidate is empty are dropped.
fn resolve_id(id: &str, link: Option<&str>, title: Option<&str>) -> Option<String> {
    [Some(id), link, title]
        .into_iter()
        .flatten()
        .find(|candidate| !candidate.is_empty())
        .map(str::to_string)
}

/// Timestamp fallback chain: published, updated, current time.
fn entry_timestamp(published: Option<DateTime<Utc>>, updated: Option<DateTime<Utc>>) -> String {
    canonical_timestamp(published.or(updated).unwrap_or_else(Utc::now))
}

/// Canonical serialization: UTC, seconds precision, `Z` suffix. Lexicographic
/// order over these strings matches chronological order.
fn canonical_timestamp(when: DateTime<Utc>) -> String {
    when.to_rfc3339_opts(SecondsFormat::Secs, true)
}

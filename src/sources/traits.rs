use crate::domain::{FeedItem, Subscription};
use crate::errors::BriefsResult;

#[cfg_attr(test, mockall::automock)]
pub trait FeedFetcher: Send + Sync {
    /// Fetch a subscription's feed and normalize its entries
    fn fetch_items(&self, subscription: &Subscription) -> BriefsResult<Vec<FeedItem>>;
}

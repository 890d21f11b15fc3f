pub mod rss_atom;
pub mod subscriptions;
pub mod traits;

pub use rss_atom::RssAtomFetcher;
pub use traits::FeedFetcher;

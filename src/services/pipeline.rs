use std::collections::HashSet;

use crate::config::Config;
use crate::domain::{FeedItem, Post};
use crate::errors::BriefsResult;
use crate::render;
use crate::services::summarizer::Summarizer;
use crate::sources::subscriptions;
use crate::sources::traits::FeedFetcher;
use crate::storage::{merge, PostStore};

/// Per-run cap on newly summarized items, for cost control.
const MAX_NEW_POSTS_PER_RUN: usize = 110;

/// Counts from one pipeline run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    pub fetched: usize,
    pub new_items: usize,
    pub summarized: usize,
    pub total_posts: usize,
}

pub struct Pipeline<'a> {
    config: &'a Config,
    fetcher: &'a dyn FeedFetcher,
    summarizer: &'a dyn Summarizer,
    store: PostStore,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        config: &'a Config,
        fetcher: &'a dyn FeedFetcher,
        summarizer: &'a dyn Summarizer,
    ) -> Self {
        Self {
            config,
            fetcher,
            summarizer,
            store: PostStore::new(&config.posts_path),
        }
    }

    /// Run the pipeline once: load the store, fetch all feeds, filter to
    /// unseen items, cap, summarize, merge, persist, render.
    ///
    /// A failed feed fetch or a failed summarization skips that source or
    /// item and continues; the skipped work is retried on the next run since
    /// nothing was marked as seen.
    pub fn run(&self) -> BriefsResult<RunReport> {
        let existing = self.store.load();
        println!("Loaded {} existing posts", existing.len());

        let known: HashSet<String> = existing.iter().map(|post| post.id.clone()).collect();

        let subs = subscriptions::load(&self.config.subscriptions_path, &self.config.feeds_path);
        println!("Fetching {} feeds...", subs.len());

        let mut items = Vec::new();
        for subscription in &subs {
            match self.fetcher.fetch_items(subscription) {
                Ok(mut fetched) => items.append(&mut fetched),
                Err(e) => eprintln!("Error fetching {}: {}", subscription.url, e),
            }
        }
        let fetched = items.len();
        println!("Found {} total items", fetched);

        let mut new_items = filter_new(items, &known);
        let discovered = new_items.len();
        println!("Found {} new items", discovered);

        if new_items.is_empty() {
            println!("No new posts to add");
            render::generate_page(&existing, &self.config.output_path)?;
            return Ok(RunReport {
                fetched,
                new_items: 0,
                summarized: 0,
                total_posts: existing.len(),
            });
        }

        if new_items.len() > MAX_NEW_POSTS_PER_RUN {
            println!("Limiting to {} new posts", MAX_NEW_POSTS_PER_RUN);
            new_items.truncate(MAX_NEW_POSTS_PER_RUN);
        }

        let mut new_posts = Vec::new();
        for item in &new_items {
            match self
                .summarizer
                .summarize(&item.title, &item.description, &item.source_context)
            {
                Ok(text) => {
                    println!("  [{}] {}...", item.source, preview(&text, 50));
                    new_posts.push(Post::from_item(item, text));
                }
                Err(e) => eprintln!("  Error summarizing {}: {}", item.id, e),
            }
        }

        let summarized = new_posts.len();
        let posts = merge(new_posts, existing);
        self.store.save(&posts)?;
        println!("Saved {} total posts", posts.len());

        render::generate_page(&posts, &self.config.output_path)?;

        Ok(RunReport {
            fetched,
            new_items: discovered,
            summarized,
            total_posts: posts.len(),
        })
    }
}

/// Keep items whose id is neither in the store nor seen earlier in this run.
/// Fetch-encounter order is preserved.
fn filter_new(items: Vec<FeedItem>, known: &HashSet<String>) -> Vec<FeedItem> {
    let mut seen = HashSet::new();

    items
        .into_iter()
        .filter(|item| !known.contains(&item.id) && seen.insert(item.id.clone()))
        .collect()
}

/// First `max_chars` characters, for progress output
fn preview(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

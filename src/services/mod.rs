pub mod pipeline;
pub mod summarizer;

pub use pipeline::{Pipeline, RunReport};
pub use summarizer::{ClaudeSummarizer, Summarizer};

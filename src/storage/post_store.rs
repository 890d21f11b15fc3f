use std::fs;
use std::path::PathBuf;

use crate::domain::Post;
use crate::errors::BriefsResult;

/// JSON-file backed post store, read once at the start of a run and written
/// once at the end.
pub struct PostStore {
    path: PathBuf,
}

impl PostStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the persisted list. An absent or unreadable file is an empty
    /// store, not an error.
    pub fn load(&self) -> Vec<Post> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(_) => return Vec::new(),
        };

        match serde_json::from_str(&content) {
            Ok(posts) => posts,
            Err(e) => {
                eprintln!("Error reading {}: {}", self.path.display(), e);
                Vec::new()
            }
        }
    }

    /// Overwrite the persisted file with the full list, pretty-printed
    pub fn save(&self, posts: &[Post]) -> BriefsResult<()> {
        let json = serde_json::to_string_pretty(posts)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// Concatenate new posts ahead of existing ones and sort descending by
/// timestamp. Assumes disjoint id sets; canonical ISO-8601 UTC strings sort
/// lexicographically in chronological order, and the sort is stable so new
/// posts stay ahead of existing ones on equal timestamps.
pub fn merge(new: Vec<Post>, existing: Vec<Post>) -> Vec<Post> {
    let mut posts = new;
    posts.extend(existing);
    posts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    posts
}

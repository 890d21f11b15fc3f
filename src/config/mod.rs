use crate::errors::{BriefsError, BriefsResult};

const DEFAULT_MODEL: &str = "claude-haiku-4-5-20251001";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub subscriptions_path: String,
    pub feeds_path: String,
    pub posts_path: String,
    pub output_path: String,
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<std::path::PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    pub fn from_env() -> BriefsResult<Self> {
        // Try to load .env from the executable's directory first
        if let Some(dir) = Self::exe_dir() {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();

        let api_key = std::env::var("ANTHROPIC_API_KEY")
            .map_err(|_| BriefsError::MissingEnvVar("ANTHROPIC_API_KEY".to_string()))?;

        let model = std::env::var("BRIEFS_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let subscriptions_path = std::env::var("BRIEFS_SUBSCRIPTIONS_PATH")
            .unwrap_or_else(|_| "subscriptions.opml".to_string());

        let feeds_path =
            std::env::var("BRIEFS_FEEDS_PATH").unwrap_or_else(|_| "feeds.txt".to_string());

        let posts_path =
            std::env::var("BRIEFS_POSTS_PATH").unwrap_or_else(|_| "posts.json".to_string());

        let output_path =
            std::env::var("BRIEFS_OUTPUT_PATH").unwrap_or_else(|_| "feed.html".to_string());

        Ok(Self {
            api_key,
            model,
            subscriptions_path,
            feeds_path,
            posts_path,
            output_path,
        })
    }
}

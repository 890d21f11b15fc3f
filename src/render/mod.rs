use std::fs;

use askama::Template;

use crate::domain::Post;
use crate::errors::BriefsResult;

#[derive(Template)]
#[template(path = "feed.html")]
struct FeedPage<'a> {
    posts: &'a [Post],
}

/// Render the full post list into the static page, overwriting `output_path`.
/// Template output is HTML-escaped, so feed-supplied text and urls cannot
/// inject markup.
pub fn generate_page(posts: &[Post], output_path: &str) -> BriefsResult<()> {
    let page = FeedPage { posts };
    let html = page.render()?;

    fs::write(output_path, html)?;
    println!("Generated {} with {} posts", output_path, posts.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn post(id: &str, text: &str) -> Post {
        Post {
            id: id.to_string(),
            text: text.to_string(),
            url: format!("https://example.com/{}", id),
            source: "Test Feed".to_string(),
            timestamp: "2024-01-15T12:00:00Z".to_string(),
        }
    }

    fn render_to_string(posts: &[Post]) -> String {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("feed.html");
        generate_page(posts, path.to_str().unwrap()).unwrap();
        fs::read_to_string(&path).unwrap()
    }

    #[test]
    fn test_page_lists_posts() {
        let html = render_to_string(&[post("a", "A summary"), post("b", "Another summary")]);

        assert!(html.contains("A summary"));
        assert!(html.contains("Another summary"));
        assert!(html.contains("https://example.com/a"));
        assert!(html.contains("Test Feed"));
        assert!(html.contains("2024-01-15T12:00:00Z"));
    }

    #[test]
    fn test_feed_text_is_escaped() {
        let html = render_to_string(&[post("a", "<script>alert('x')</script>")]);

        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_urls_are_escaped() {
        let mut bad = post("a", "text");
        bad.url = "https://example.com/\"><script>".to_string();

        let html = render_to_string(&[bad]);

        assert!(!html.contains("\"><script>"));
    }

    #[test]
    fn test_empty_store_renders_empty_page() {
        let html = render_to_string(&[]);

        assert!(html.contains("<!DOCTYPE html>"));
        assert!(!html.contains("<article>"));
    }
}

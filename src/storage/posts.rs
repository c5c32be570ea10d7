//! Blog post storage and list helpers.

use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

/// A single blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub title: String,
    #[serde(rename = "desc")]
    pub description: String,
    pub date: String,
}

/// Load posts from localStorage.
///
/// `None` when no list was stored or the stored value does not parse;
/// the caller falls back to the built-in sample content.
pub fn load() -> Option<Vec<Post>> {
    LocalStorage::get(super::STORAGE_POSTS).ok()
}

/// Save the full post list to localStorage, replacing the prior value.
pub fn save(posts: &[Post]) {
    let _ = LocalStorage::set(super::STORAGE_POSTS, posts);
}

/// Validate a draft and prepend the resulting post.
///
/// Returns `None` without touching the list when the title or description
/// trims to empty. The new post always lands at index 0.
pub fn submit(
    posts: &mut Vec<Post>,
    title: &str,
    description: &str,
    date: String,
) -> Option<Post> {
    let title = title.trim();
    let description = description.trim();
    if title.is_empty() || description.is_empty() {
        return None;
    }
    let post = Post {
        title: title.to_string(),
        description: description.to_string(),
        date,
    };
    posts.insert(0, post.clone());
    Some(post)
}

/// Case-insensitive substring search over title and description.
///
/// An empty query matches everything; relative order is preserved.
pub fn filter(posts: &[Post], query: &str) -> Vec<Post> {
    let needle = query.to_lowercase();
    posts
        .iter()
        .filter(|p| {
            p.title.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::sample_posts;

    fn date() -> String {
        "Jan 1, 2026".to_string()
    }

    #[test]
    fn test_submit_prepends() {
        let mut posts = sample_posts();
        let created = submit(&mut posts, "Test", "Desc", date());

        assert!(created.is_some());
        assert_eq!(posts.len(), 5);
        assert_eq!(posts[0].title, "Test");
        assert_eq!(posts[0].description, "Desc");
    }

    #[test]
    fn test_submit_rejects_empty_fields() {
        let mut posts = sample_posts();

        assert!(submit(&mut posts, "", "Desc", date()).is_none());
        assert!(submit(&mut posts, "Test", "", date()).is_none());
        assert!(submit(&mut posts, "", "", date()).is_none());
        assert_eq!(posts.len(), 4);
    }

    #[test]
    fn test_submit_rejects_whitespace_only() {
        let mut posts = sample_posts();

        assert!(submit(&mut posts, "   ", "Desc", date()).is_none());
        assert!(submit(&mut posts, "Test", "\t ", date()).is_none());
        assert_eq!(posts.len(), 4);
    }

    #[test]
    fn test_submit_trims_fields() {
        let mut posts = Vec::new();
        submit(&mut posts, "  Test  ", " Desc ", date());

        assert_eq!(posts[0].title, "Test");
        assert_eq!(posts[0].description, "Desc");
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let posts = sample_posts();
        let matches = filter(&posts, "typography");

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].title, "Typography Matters");
    }

    #[test]
    fn test_filter_matches_description() {
        let posts = sample_posts();
        let matches = filter(&posts, "hover effects");

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].title, "Subtle Interactions");
    }

    #[test]
    fn test_filter_empty_query_matches_all() {
        let posts = sample_posts();
        assert_eq!(filter(&posts, ""), posts);
    }

    #[test]
    fn test_filter_preserves_order() {
        let posts = sample_posts();
        let matches = filter(&posts, "design");

        let expected: Vec<_> = posts
            .iter()
            .filter(|p| {
                p.title.to_lowercase().contains("design")
                    || p.description.to_lowercase().contains("design")
            })
            .cloned()
            .collect();
        assert_eq!(matches, expected);
        assert!(matches.len() >= 2);
    }

    #[test]
    fn test_filter_no_matches_is_empty() {
        let posts = sample_posts();
        assert!(filter(&posts, "no such post").is_empty());
    }
}

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One feed item after normalization. Lives only for the duration of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub link: String,
    pub content: String,
    pub tag: String,
    pub published_at: DateTime<Utc>,
    pub author: String,
}

/// A generated blog post as persisted to `posts/{slug}.json`.
/// Created once, never mutated; re-running on the same title overwrites
/// the previous files with the same slug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub date: NaiveDate,
    pub tags: Vec<String>,
    pub author: String,
    pub source: String,
    pub content: String,
    pub read_time: u32,
}

/// Maximum number of posts retained in the manifest. Insertions beyond the
/// cap drop the oldest entries by list position.
pub const MANIFEST_CAP: usize = 50;

/// The aggregate index over all retained posts, persisted as
/// `posts/manifest.json`. `categories` and `tags` are rebuilt from the full
/// post list on every update rather than maintained incrementally.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    pub posts: Vec<Post>,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
}

impl Manifest {
    /// Prepend a post (newest first), enforce the retention cap and rebuild
    /// the derived category/tag sets.
    pub fn insert(&mut self, post: Post) {
        self.posts.insert(0, post);
        self.posts.truncate(MANIFEST_CAP);
        self.rebuild_index();
    }

    fn rebuild_index(&mut self) {
        let mut categories: Vec<String> = Vec::new();
        let mut tags: Vec<String> = Vec::new();
        for post in &self.posts {
            if !categories.contains(&post.category) {
                categories.push(post.category.clone());
            }
            for tag in &post.tags {
                if !tags.contains(tag) {
                    tags.push(tag.clone());
                }
            }
        }
        self.categories = categories;
        self.tags = tags;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn post(n: usize) -> Post {
        Post {
            slug: format!("post-{}", n),
            title: format!("Post {}", n),
            excerpt: "An excerpt...".to_string(),
            category: if n % 2 == 0 { "Tutorial" } else { "Career" }.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            tags: vec!["dev".to_string(), "automated".to_string()],
            author: "Jeremy (CtrlAltQ)".to_string(),
            source: format!("https://example.com/{}", n),
            content: "Body text.".to_string(),
            read_time: 2,
        }
    }

    #[test]
    fn test_insert_newest_first() {
        let mut manifest = Manifest::default();
        manifest.insert(post(1));
        manifest.insert(post(2));
        assert_eq!(manifest.posts[0].slug, "post-2");
        assert_eq!(manifest.posts[1].slug, "post-1");
    }

    #[test]
    fn test_retention_cap() {
        let mut manifest = Manifest::default();
        for n in 1..=51 {
            manifest.insert(post(n));
        }
        assert_eq!(manifest.posts.len(), MANIFEST_CAP);
        assert_eq!(manifest.posts[0].slug, "post-51");
        assert!(!manifest.posts.iter().any(|p| p.slug == "post-1"));
        assert!(manifest.posts.iter().any(|p| p.slug == "post-2"));
    }

    #[test]
    fn test_index_rebuilt_on_insert() {
        let mut manifest = Manifest::default();
        manifest.insert(post(1));
        manifest.insert(post(2));
        assert_eq!(manifest.categories.len(), 2);
        assert!(manifest.categories.contains(&"Tutorial".to_string()));
        assert!(manifest.categories.contains(&"Career".to_string()));
        assert_eq!(manifest.tags, vec!["dev".to_string(), "automated".to_string()]);
    }

    #[test]
    fn test_post_json_round_trip() {
        let original = post(7);
        let raw = serde_json::to_string_pretty(&original).unwrap();
        let restored: Post = serde_json::from_str(&raw).unwrap();
        assert_eq!(original, restored);
    }
}

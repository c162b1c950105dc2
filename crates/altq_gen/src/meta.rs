//! Metadata derived from a post title or generated prose: slug, excerpt and
//! estimated read time.

pub const SLUG_MAX_LEN: usize = 50;
pub const EXCERPT_MAX_LEN: usize = 150;
pub const WORDS_PER_MINUTE: usize = 200;

/// Derive a filesystem- and URL-safe slug from a title. Deterministic:
/// the same title always yields the same slug.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let mut slug = String::new();
    let mut pending_hyphen = false;
    for c in lowered.chars() {
        if c.is_whitespace() {
            pending_hyphen = !slug.is_empty();
        } else if c.is_ascii_alphanumeric() || c == '-' {
            if pending_hyphen {
                slug.push('-');
                pending_hyphen = false;
            }
            slug.push(c);
        }
        // everything else is stripped
    }
    slug.chars().take(SLUG_MAX_LEN).collect()
}

/// First paragraph of the prose, truncated to [`EXCERPT_MAX_LEN`] characters
/// and suffixed with an ellipsis marker.
pub fn make_excerpt(content: &str) -> String {
    let first = content.split("\n\n").next().unwrap_or("");
    let truncated: String = first.chars().take(EXCERPT_MAX_LEN).collect();
    format!("{}...", truncated)
}

/// Estimated read time in minutes at 200 words per minute, rounded up.
/// Never less than one minute, so an empty body still renders a sane badge.
pub fn read_time(content: &str) -> u32 {
    let words = content.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_strips_punctuation() {
        assert_eq!(slugify("Foo Bar!!"), "foo-bar");
    }

    #[test]
    fn test_slugify_is_deterministic() {
        assert_eq!(slugify("Rust in 2026"), slugify("Rust in 2026"));
        assert_eq!(slugify("Rust in 2026"), "rust-in-2026");
    }

    #[test]
    fn test_slugify_collapses_whitespace() {
        assert_eq!(slugify("  A   Title \t Here "), "a-title-here");
    }

    #[test]
    fn test_slugify_charset_and_length() {
        let slug = slugify("Über long títle!? ".repeat(10).as_str());
        assert!(slug.len() <= SLUG_MAX_LEN);
        assert!(slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
    }

    #[test]
    fn test_excerpt_takes_first_paragraph() {
        let content = "Short opener.\n\nSecond paragraph goes on.";
        assert_eq!(make_excerpt(content), "Short opener....");
    }

    #[test]
    fn test_excerpt_truncates_long_paragraph() {
        let content = "x".repeat(300);
        let excerpt = make_excerpt(&content);
        assert_eq!(excerpt.chars().count(), EXCERPT_MAX_LEN + 3);
        assert!(excerpt.ends_with("..."));
    }

    #[test]
    fn test_read_time_rounds_up() {
        let exactly_400 = vec!["word"; 400].join(" ");
        assert_eq!(read_time(&exactly_400), 2);
        let with_one_more = vec!["word"; 401].join(" ");
        assert_eq!(read_time(&with_one_more), 3);
    }

    #[test]
    fn test_read_time_short_body() {
        assert_eq!(read_time("a handful of words"), 1);
    }

    #[test]
    fn test_read_time_empty_body_is_one_minute() {
        assert_eq!(read_time(""), 1);
    }
}

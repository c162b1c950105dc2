use altq_core::{Article, Result};
use chrono::{DateTime, Duration, Utc};
use feed_rs::model::{Entry, Feed as ParsedFeed};
use reqwest::Client;
use tracing::{error, info};
use url::Url;

/// At most this many items are taken per feed, in the feed's own order.
pub const MAX_ITEMS_PER_FEED: usize = 2;

/// Items older than this are dropped.
pub const RECENCY_WINDOW_HOURS: i64 = 24;

/// One RSS/Atom source paired with the topical tag its items inherit.
#[derive(Debug, Clone)]
pub struct Feed {
    pub url: Url,
    pub tag: String,
}

impl Feed {
    pub fn new(url: &str, tag: &str) -> Result<Self> {
        let url = Url::parse(url).map_err(|e| {
            altq_core::Error::Feed(format!("invalid feed URL {}: {}", url, e))
        })?;
        Ok(Self {
            url,
            tag: tag.to_string(),
        })
    }
}

/// What to do with feed items that carry no parseable publish date.
///
/// `Permissive` stamps them with the collection time, which means they always
/// pass the recency filter. That mirrors the original fallback-to-now default
/// and is almost certainly not an intentional policy, so `Strict` is offered
/// as the alternative that drops undated items instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFallback {
    #[default]
    Permissive,
    Strict,
}

/// The built-in source list used when no custom feeds are supplied.
pub fn default_feeds() -> Vec<Feed> {
    [
        ("https://hnrss.org/frontpage", "dev"),
        ("https://dev.to/feed/tag/javascript", "javascript"),
        ("https://github.blog/feed/", "github"),
        ("https://dev.to/feed/tag/webdev", "webdev"),
        ("https://dev.to/feed/tag/ai", "ai"),
    ]
    .into_iter()
    .map(|(url, tag)| Feed::new(url, tag).expect("built-in feed URL is valid"))
    .collect()
}

/// Fetches every configured feed in turn and normalizes the recent items into
/// [`Article`] records. A fetch or parse failure skips that feed only; there
/// is no retry and no state carried between runs.
pub struct FeedCollector {
    client: Client,
    feeds: Vec<Feed>,
    date_fallback: DateFallback,
}

impl FeedCollector {
    pub fn new(feeds: Vec<Feed>) -> Self {
        Self {
            client: Client::new(),
            feeds,
            date_fallback: DateFallback::default(),
        }
    }

    pub fn with_date_fallback(mut self, policy: DateFallback) -> Self {
        self.date_fallback = policy;
        self
    }

    pub async fn collect(&self) -> Result<Vec<Article>> {
        let mut articles = Vec::new();
        let now = Utc::now();

        for feed in &self.feeds {
            info!("📡 Scraping {} feed...", feed.tag);
            match self.fetch_feed(feed).await {
                Ok(parsed) => {
                    articles.extend(recent_articles(&parsed, feed, now, self.date_fallback));
                }
                Err(e) => {
                    error!("❌ Error parsing feed {}: {}", feed.url, e);
                }
            }
        }

        info!("📰 Found {} recent articles", articles.len());
        Ok(articles)
    }

    async fn fetch_feed(&self, feed: &Feed) -> Result<ParsedFeed> {
        let body = self
            .client
            .get(feed.url.clone())
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        feed_rs::parser::parse(body.as_ref())
            .map_err(|e| altq_core::Error::Feed(e.to_string()))
    }
}

/// Apply the recency window and per-feed cap to a parsed feed, preserving the
/// feed's own item order.
fn recent_articles(
    parsed: &ParsedFeed,
    feed: &Feed,
    now: DateTime<Utc>,
    policy: DateFallback,
) -> Vec<Article> {
    let cutoff = now - Duration::hours(RECENCY_WINDOW_HOURS);
    parsed
        .entries
        .iter()
        .filter_map(|entry| {
            let published = match entry.published.or(entry.updated) {
                Some(date) => date,
                None if policy == DateFallback::Permissive => now,
                None => return None,
            };
            if published <= cutoff {
                return None;
            }
            Some(normalize_entry(entry, feed, published))
        })
        .take(MAX_ITEMS_PER_FEED)
        .collect()
}

fn normalize_entry(entry: &Entry, feed: &Feed, published: DateTime<Utc>) -> Article {
    let content = entry
        .summary
        .as_ref()
        .map(|text| text.content.clone())
        .or_else(|| entry.content.as_ref().and_then(|c| c.body.clone()))
        .unwrap_or_default();
    let author = entry
        .authors
        .first()
        .map(|person| person.name.clone())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "Unknown".to_string());

    Article {
        title: entry
            .title
            .as_ref()
            .map(|text| text.content.clone())
            .unwrap_or_default(),
        link: entry
            .links
            .first()
            .map(|link| link.href.clone())
            .unwrap_or_default(),
        content,
        tag: feed.tag.clone(),
        published_at: published,
        author,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rss_feed(items: &[(&str, Option<DateTime<Utc>>)]) -> ParsedFeed {
        let items_xml: String = items
            .iter()
            .map(|(title, date)| {
                let pub_date = date
                    .map(|d| format!("<pubDate>{}</pubDate>", d.to_rfc2822()))
                    .unwrap_or_default();
                format!(
                    "<item><title>{}</title><link>https://example.com/a</link>\
                     <description>Snippet text.</description>{}</item>",
                    title, pub_date
                )
            })
            .collect();
        let xml = format!(
            "<?xml version=\"1.0\"?><rss version=\"2.0\"><channel>\
             <title>Test</title><link>https://example.com</link>\
             <description>t</description>{}</channel></rss>",
            items_xml
        );
        feed_rs::parser::parse(xml.as_bytes()).unwrap()
    }

    fn test_feed() -> Feed {
        Feed::new("https://example.com/rss", "dev").unwrap()
    }

    #[test]
    fn test_recency_window() {
        let now = Utc::now();
        let parsed = rss_feed(&[
            ("Fresh", Some(now - Duration::hours(2))),
            ("Stale", Some(now - Duration::hours(30))),
        ]);
        let articles = recent_articles(&parsed, &test_feed(), now, DateFallback::Permissive);
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "Fresh");
        assert_eq!(articles[0].tag, "dev");
    }

    #[test]
    fn test_per_feed_cap_preserves_order() {
        let now = Utc::now();
        let parsed = rss_feed(&[
            ("First", Some(now - Duration::hours(5))),
            ("Second", Some(now - Duration::hours(1))),
            ("Third", Some(now - Duration::hours(3))),
        ]);
        let articles = recent_articles(&parsed, &test_feed(), now, DateFallback::Permissive);
        assert_eq!(articles.len(), MAX_ITEMS_PER_FEED);
        assert_eq!(articles[0].title, "First");
        assert_eq!(articles[1].title, "Second");
    }

    #[test]
    fn test_undated_item_permissive() {
        let now = Utc::now();
        let parsed = rss_feed(&[("No Date", None)]);
        let articles = recent_articles(&parsed, &test_feed(), now, DateFallback::Permissive);
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].published_at, now);
    }

    #[test]
    fn test_undated_item_strict() {
        let now = Utc::now();
        let parsed = rss_feed(&[("No Date", None)]);
        let articles = recent_articles(&parsed, &test_feed(), now, DateFallback::Strict);
        assert!(articles.is_empty());
    }

    #[test]
    fn test_normalized_fields() {
        let now = Utc::now();
        let parsed = rss_feed(&[("Foo Bar!!", Some(now - Duration::hours(2)))]);
        let articles = recent_articles(&parsed, &test_feed(), now, DateFallback::Strict);
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].link, "https://example.com/a");
        assert_eq!(articles[0].content, "Snippet text.");
        assert_eq!(articles[0].author, "Unknown");
    }

    #[test]
    fn test_invalid_feed_url_rejected() {
        assert!(Feed::new("not a url", "dev").is_err());
    }

    #[test]
    fn test_default_feeds_have_tags() {
        let feeds = default_feeds();
        assert!(!feeds.is_empty());
        assert!(feeds.iter().all(|f| !f.tag.is_empty()));
    }
}

//! Announce step: compose a short promotional message per post and hand it to
//! a [`SocialPoster`]. The default poster only logs the message; the HTTP
//! poster actually transmits and is constructed only when a bearer token is
//! present.

use altq_core::{Error, Persona, Post, Result};
use async_trait::async_trait;
use tracing::info;

pub const MAX_MESSAGE_LEN: usize = 280;
pub const MAX_HASHTAGS: usize = 3;

// The platform wraps every link to a fixed-length t.co URL.
const LINK_LEN: usize = 23;
const HASHTAG_BUFFER: usize = 10;
const EXCERPT_CUT: usize = 50;

const POST_ENDPOINT: &str = "https://api.twitter.com/2/tweets";
pub const TOKEN_ENV: &str = "TWITTER_BEARER_TOKEN";

#[derive(Debug, Clone, PartialEq)]
pub struct Announcement {
    pub slug: String,
    pub text: String,
}

#[async_trait]
pub trait SocialPoster: Send + Sync {
    fn name(&self) -> &str;

    /// Announce one post. A failure here is logged by the caller and does not
    /// affect the other posts.
    async fn announce(&self, post: &Post) -> Result<Announcement>;
}

/// Title, truncated excerpt when there is room, up to three hashtags and the
/// permalink, within the platform's length budget.
pub fn compose_message(post: &Post, persona: &Persona) -> String {
    let link = format!("{}/blog/posts/{}.html", persona.base_url, post.slug);
    let available = MAX_MESSAGE_LEN - LINK_LEN - HASHTAG_BUFFER;

    let mut text = format!("🚀 New blog post: {}", post.title);

    if text.chars().count() < available - 20 {
        let excerpt = if post.excerpt.chars().count() > EXCERPT_CUT {
            let head: String = post.excerpt.chars().take(EXCERPT_CUT).collect();
            format!("{}...", head)
        } else {
            post.excerpt.clone()
        };
        text.push_str("\n\n");
        text.push_str(&excerpt);
    }

    text.push_str("\n\n");
    text.push_str(&hashtags_for(post, persona).join(" "));
    text.push_str("\n\n");
    text.push_str(&link);
    text
}

/// Category hashtags first, then per-tag hashtags not already present,
/// capped at [`MAX_HASHTAGS`].
pub fn hashtags_for(post: &Post, persona: &Persona) -> Vec<String> {
    let mut hashtags = persona
        .category_hashtags
        .get(&post.category)
        .cloned()
        .unwrap_or_else(|| persona.default_hashtags.clone());

    for tag in &post.tags {
        if let Some(hashtag) = persona.tag_hashtags.get(tag) {
            if !hashtags.contains(hashtag) {
                hashtags.push(hashtag.clone());
            }
        }
    }

    hashtags.truncate(MAX_HASHTAGS);
    hashtags
}

/// Default poster: logs the would-be message and returns it without touching
/// the network.
pub struct ConsolePoster {
    persona: Persona,
}

impl ConsolePoster {
    pub fn new(persona: Persona) -> Self {
        Self { persona }
    }
}

#[async_trait]
impl SocialPoster for ConsolePoster {
    fn name(&self) -> &str {
        "console"
    }

    async fn announce(&self, post: &Post) -> Result<Announcement> {
        let text = compose_message(post, &self.persona);
        info!("🐦 Would post:");
        info!("{}", "─".repeat(50));
        for line in text.lines() {
            info!("{}", line);
        }
        info!("{}", "─".repeat(50));
        info!("✅ Announcement prepared for: {}", post.title);
        Ok(Announcement {
            slug: post.slug.clone(),
            text,
        })
    }
}

/// Real-network poster, gated behind the bearer token.
pub struct HttpPoster {
    client: reqwest::Client,
    token: String,
    persona: Persona,
}

impl HttpPoster {
    pub fn new(token: String, persona: Persona) -> Self {
        Self {
            client: reqwest::Client::new(),
            token,
            persona,
        }
    }
}

#[async_trait]
impl SocialPoster for HttpPoster {
    fn name(&self) -> &str {
        "http"
    }

    async fn announce(&self, post: &Post) -> Result<Announcement> {
        let text = compose_message(post, &self.persona);
        let response = self
            .client
            .post(POST_ENDPOINT)
            .bearer_auth(&self.token)
            .json(&serde_json::json!({ "text": text }))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Error::Announce(format!(
                "post for {} rejected with status {}",
                post.slug,
                response.status()
            )));
        }
        info!("🐦 Posted announcement for: {}", post.title);
        Ok(Announcement {
            slug: post.slug.clone(),
            text,
        })
    }
}

/// Pick the poster from the environment: HTTP when the token is set and
/// non-empty, console otherwise.
pub fn poster_from_env(persona: &Persona) -> Box<dyn SocialPoster> {
    match std::env::var(TOKEN_ENV) {
        Ok(token) if !token.is_empty() => Box::new(HttpPoster::new(token, persona.clone())),
        _ => Box::new(ConsolePoster::new(persona.clone())),
    }
}

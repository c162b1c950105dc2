pub mod client;
pub mod meta;
pub mod store;
pub mod template;

pub use client::{CompletionModel, OpenRouterModel};
pub use store::PostStore;

use std::path::PathBuf;
use std::sync::Arc;

use altq_core::{Article, Persona, Post, Result};
use chrono::Utc;
use tracing::{error, info};

/// Turns one article into one persisted post: prompt the completion model,
/// derive metadata, render the HTML page and write post + manifest files.
pub struct PostGenerator {
    model: Arc<dyn CompletionModel>,
    persona: Persona,
    store: PostStore,
    template_path: PathBuf,
}

impl PostGenerator {
    pub fn new(
        model: Arc<dyn CompletionModel>,
        persona: Persona,
        output_dir: impl Into<PathBuf>,
        template_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            model,
            persona,
            store: PostStore::new(output_dir),
            template_path: template_path.into(),
        }
    }

    pub async fn generate(&self, article: &Article) -> Result<Post> {
        info!("✍️  Generating post for: {}", article.title);

        let prompt = build_prompt(&self.persona, article);
        let content = self.model.complete(&prompt).await?;

        let mut tags = vec![article.tag.clone()];
        tags.extend(self.persona.extra_tags.iter().cloned());

        let post = Post {
            slug: meta::slugify(&article.title),
            title: article.title.clone(),
            excerpt: meta::make_excerpt(&content),
            category: self.persona.category_for_tag(&article.tag).to_string(),
            date: Utc::now().date_naive(),
            tags,
            author: self.persona.author.clone(),
            source: article.link.clone(),
            read_time: meta::read_time(&content),
            content,
        };

        let html = template::render(&self.template_path, &post).await?;
        self.store.write_post(&post, &html).await?;
        self.store.update_manifest(post.clone()).await?;

        info!("✅ Generated post: {}", post.slug);
        Ok(post)
    }
}

/// Process every article in order, skipping the ones that fail. A failed
/// article never halts the run.
pub async fn generate_all(generator: &PostGenerator, articles: &[Article]) -> Vec<Post> {
    let mut posts = Vec::new();
    for article in articles {
        match generator.generate(article).await {
            Ok(post) => {
                info!("   ✅ Generated: {}", post.title);
                posts.push(post);
            }
            Err(e) => {
                error!("   ❌ Failed to generate post for: {}", article.title);
                error!("   Error: {}", e);
            }
        }
    }
    posts
}

/// The natural-language instruction sent to the completion endpoint: persona
/// voice, the article under discussion and the structural constraints.
pub fn build_prompt(persona: &Persona, article: &Article) -> String {
    let style_notes = persona
        .style_notes
        .iter()
        .map(|note| format!("- {}", note))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Write a blog post in the voice of {author}, {voice}.\n\n\
         Article to cover:\n\
         Title: {title}\n\
         Link: {link}\n\
         Content: {content}\n\n\
         Write this with:\n{style_notes}\n\n\
         Structure: Hook, key insights, practical application, conclusion.\n\
         Length: {min}-{max} words.",
        author = persona.author,
        voice = persona.voice,
        title = article.title,
        link = article.link,
        content = article.content,
        style_notes = style_notes,
        min = persona.word_range.0,
        max = persona.word_range.1,
    )
}

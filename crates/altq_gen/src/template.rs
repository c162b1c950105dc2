//! Renders a post into the site's HTML page template by substituting the
//! named `{{...}}` placeholders.

use std::path::Path;

use altq_core::{Error, Post, Result};
use chrono::NaiveDate;

pub async fn render(template_path: &Path, post: &Post) -> Result<String> {
    let template = tokio::fs::read_to_string(template_path).await.map_err(|e| {
        Error::Generation(format!(
            "failed to read template {}: {}",
            template_path.display(),
            e
        ))
    })?;
    Ok(render_template(&template, post))
}

pub fn render_template(template: &str, post: &Post) -> String {
    template
        .replace("{{POST_TITLE}}", &post.title)
        .replace("{{POST_EXCERPT}}", &post.excerpt)
        .replace("{{POST_CATEGORY}}", &post.category)
        .replace("{{POST_DATE}}", &format_date(post.date))
        .replace("{{READ_TIME}}", &post.read_time.to_string())
        .replace("{{POST_CONTENT}}", &render_body(post))
        .replace("{{POST_TAGS}}", &render_tags(post))
}

/// Long-form English date, e.g. "July 4, 2025".
fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

fn render_body(post: &Post) -> String {
    let paragraphs: String = post
        .content
        .split("\n\n")
        .map(|p| format!("<p class=\"mb-6 leading-relaxed\">{}</p>", p))
        .collect();

    format!(
        r#"<div class="prose prose-invert prose-lg max-w-none">
  {paragraphs}
  <div class="mt-12 p-6 bg-gray-800 rounded-lg border border-accent/20">
    <p class="text-sm text-gray-400 mb-2">
      <i class="fas fa-link mr-2"></i>
      Original article: <a href="{source}" target="_blank" class="text-accent hover:text-white">{title}</a>
    </p>
    <p class="text-sm text-gray-400">
      🤖 This post was crafted by <strong>AltQ</strong>, my automated blog system.<br>
      Want a site powered by automation like this? <a href="../../index.html#contact" class="text-accent hover:text-white">Let's build yours →</a>
    </p>
  </div>
</div>"#,
        paragraphs = paragraphs,
        source = post.source,
        title = post.title,
    )
}

fn render_tags(post: &Post) -> String {
    post.tags
        .iter()
        .map(|tag| {
            format!(
                "<span class=\"px-3 py-1 bg-gray-800 text-gray-400 text-sm rounded-full border border-gray-700\">{}</span>",
                tag
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_post() -> Post {
        Post {
            slug: "foo-bar".to_string(),
            title: "Foo Bar".to_string(),
            excerpt: "An opener...".to_string(),
            category: "Tutorial".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 7, 4).unwrap(),
            tags: vec!["dev".to_string(), "automated".to_string()],
            author: "Jeremy (CtrlAltQ)".to_string(),
            source: "https://example.com/foo".to_string(),
            content: "First paragraph.\n\nSecond paragraph.".to_string(),
            read_time: 2,
        }
    }

    #[test]
    fn test_placeholders_substituted() {
        let template = "<h1>{{POST_TITLE}}</h1><em>{{POST_DATE}}</em>\
                        <span>{{READ_TIME}} min</span>{{POST_CONTENT}}{{POST_TAGS}}";
        let html = render_template(template, &sample_post());
        assert!(html.contains("<h1>Foo Bar</h1>"));
        assert!(html.contains("July 4, 2025"));
        assert!(html.contains("2 min"));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn test_paragraphs_wrapped_individually() {
        let html = render_template("{{POST_CONTENT}}", &sample_post());
        assert_eq!(html.matches("<p class=\"mb-6 leading-relaxed\">").count(), 2);
        assert!(html.contains("https://example.com/foo"));
    }

    #[test]
    fn test_tag_badges() {
        let html = render_template("{{POST_TAGS}}", &sample_post());
        assert_eq!(html.matches("<span").count(), 2);
        assert!(html.contains(">dev</span>"));
    }
}

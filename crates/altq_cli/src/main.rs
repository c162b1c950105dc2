use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use altq_core::{Persona, Result};
use altq_feeds::{default_feeds, DateFallback, FeedCollector};
use altq_gen::{generate_all, CompletionModel, OpenRouterModel, PostGenerator};
use altq_publish::{git, social};
use clap::Parser;
use tracing::{error, info};

const API_KEY_ENV: &str = "OPENROUTER_API_KEY";

/// AltQ blog automation: scrape feeds, draft posts, publish, announce.
#[derive(Parser, Debug)]
#[command(name = "altq", author, version, about, long_about = None)]
struct Cli {
    /// Commit and push generated posts to git
    #[arg(short, long)]
    push: bool,

    /// Announce each generated post on social media
    #[arg(short, long)]
    tweet: bool,

    /// Exclude feed items that carry no parseable publish date
    #[arg(long)]
    strict_dates: bool,

    /// Directory the post and manifest files are written to
    #[arg(long, default_value = "blog/posts")]
    output_dir: PathBuf,

    /// HTML template with the post placeholders
    #[arg(long, default_value = "blog/post-template.html")]
    template: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("💥 Blog automation failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    info!("🤖 Starting AltQ blog automation");

    // The only fatal precondition: without the completion credential there is
    // nothing to run.
    let api_key = std::env::var(API_KEY_ENV)
        .map_err(|_| altq_core::Error::MissingCredential(API_KEY_ENV.to_string()))?;

    let persona = Persona::default();

    info!("📡 Step 1: Scraping RSS feeds...");
    let fallback = if cli.strict_dates {
        DateFallback::Strict
    } else {
        DateFallback::Permissive
    };
    let collector = FeedCollector::new(default_feeds()).with_date_fallback(fallback);
    let articles = collector.collect().await?;
    if articles.is_empty() {
        info!("ℹ️  No new articles found. Exiting.");
        return Ok(());
    }
    info!("📰 Found {} articles to process", articles.len());

    info!("✍️  Step 2: Generating blog posts...");
    let model = Arc::new(OpenRouterModel::new(api_key, persona.model.clone()));
    info!("🧠 Completion model initialized (using {})", model.name());
    let generator = PostGenerator::new(
        model,
        persona.clone(),
        cli.output_dir.clone(),
        cli.template.clone(),
    );
    let posts = generate_all(&generator, &articles).await;
    if posts.is_empty() {
        info!("⚠️  No posts were generated successfully. Exiting.");
        return Ok(());
    }
    info!("🎉 Successfully generated {} blog post(s)", posts.len());

    if cli.push {
        info!("📤 Step 3: Pushing to git...");
        if let Err(e) = git::publish(&posts, Path::new("."), &cli.output_dir).await {
            error!("❌ Git push failed: {}", e);
        }
    } else {
        info!("⏭️  Step 3: Skipping git push (use --push to enable)");
        if let Err(e) = git::check_status(Path::new(".")).await {
            error!("❌ Git status check failed: {}", e);
        }
    }

    if cli.tweet {
        info!("🐦 Step 4: Announcing new posts...");
        let poster = social::poster_from_env(&persona);
        info!("   Using {} poster", poster.name());
        for post in &posts {
            if let Err(e) = poster.announce(post).await {
                error!("❌ Announcement failed for {}: {}", post.title, e);
            }
        }
    } else {
        info!("⏭️  Step 4: Skipping announcements (use --tweet to enable)");
    }

    info!("🎊 Blog automation complete!");
    info!(
        "📝 Generated {} post(s) in {}",
        posts.len(),
        cli.output_dir.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["altq"]);
        assert!(!cli.push);
        assert!(!cli.tweet);
        assert!(!cli.strict_dates);
        assert_eq!(cli.output_dir, PathBuf::from("blog/posts"));
        assert_eq!(cli.template, PathBuf::from("blog/post-template.html"));
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::parse_from(["altq", "-p", "-t"]);
        assert!(cli.push);
        assert!(cli.tweet);
    }

    #[test]
    fn test_strict_dates_flag() {
        let cli = Cli::parse_from(["altq", "--strict-dates"]);
        assert!(cli.strict_dates);
    }
}

//! Commits and pushes the generated files. The pipeline only hands the
//! working tree to git; it never inspects repository state beyond the
//! informational status check shown when publishing is skipped.

use std::path::Path;

use altq_core::{Error, Post, Result};
use tokio::process::Command;
use tracing::info;

/// Stage the output directory, commit with a message naming the new posts,
/// and push. Already-written files stay on disk if any step fails.
pub async fn publish(posts: &[Post], repo_dir: &Path, output_dir: &Path) -> Result<()> {
    info!("📤 Committing {} new post(s)", posts.len());

    let output_dir = output_dir.to_string_lossy();
    run_git(repo_dir, &["add", output_dir.as_ref()]).await?;
    let message = commit_message(posts);
    run_git(repo_dir, &["commit", "-m", &message]).await?;
    run_git(repo_dir, &["push"]).await?;

    info!("✅ Pushed {} new post(s)", posts.len());
    Ok(())
}

/// Informational `git status --short`, logged when publishing is skipped.
pub async fn check_status(repo_dir: &Path) -> Result<()> {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(["status", "--short"])
        .output()
        .await?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    if stdout.trim().is_empty() {
        info!("📋 Working tree clean");
    } else {
        info!("📋 Uncommitted changes:\n{}", stdout.trim_end());
    }
    Ok(())
}

pub fn commit_message(posts: &[Post]) -> String {
    let titles = posts
        .iter()
        .map(|post| format!("- {}", post.title))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "Add {} automated blog post{}\n\n{}",
        posts.len(),
        if posts.len() == 1 { "" } else { "s" },
        titles
    )
}

async fn run_git(repo_dir: &Path, args: &[&str]) -> Result<()> {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .await?;
    if !output.status.success() {
        return Err(Error::Publish(format!(
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }
    Ok(())
}

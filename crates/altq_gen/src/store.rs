//! On-disk layout for generated posts: `{slug}.json`, `{slug}.html` and the
//! aggregate `manifest.json`, all under one output directory.
//!
//! Writes are not transactional; a crash between the post files and the
//! manifest update leaves them out of step. The pipeline runs as a single
//! sequential process, so the read-modify-write on the manifest is unlocked.

use std::path::{Path, PathBuf};

use altq_core::{Manifest, Post, Result};
use tracing::debug;

pub struct PostStore {
    dir: PathBuf,
}

impl PostStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.dir.join("manifest.json")
    }

    /// Write `{slug}.json` and `{slug}.html`. An existing post with the same
    /// slug is overwritten, last write wins.
    pub async fn write_post(&self, post: &Post, html: &str) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let json = serde_json::to_string_pretty(post)?;
        tokio::fs::write(self.dir.join(format!("{}.json", post.slug)), json).await?;
        tokio::fs::write(self.dir.join(format!("{}.html", post.slug)), html).await?;
        debug!("💾 Wrote post files for {}", post.slug);
        Ok(())
    }

    pub async fn read_post(&self, slug: &str) -> Result<Post> {
        let raw = tokio::fs::read_to_string(self.dir.join(format!("{}.json", slug))).await?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Read the manifest (or start empty when the file does not exist yet),
    /// prepend the post, and write it back.
    pub async fn update_manifest(&self, post: Post) -> Result<Manifest> {
        let path = self.manifest_path();
        let mut manifest = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Manifest::default(),
            Err(e) => return Err(e.into()),
        };

        manifest.insert(post);

        tokio::fs::create_dir_all(&self.dir).await?;
        tokio::fs::write(&path, serde_json::to_string_pretty(&manifest)?).await?;
        Ok(manifest)
    }
}

//! site-content: content resolution for a static marketing site
//!
//! Loads schema-validated documents from a directory per content type,
//! resolves their layouts, and derives what pages need around them: SEO
//! metadata, structured data, related and next documents, the sitemap and
//! the robots policy.

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;
pub mod layout;
pub mod relations;
pub mod routes;
pub mod seo;

#[cfg(test)]
mod test_support;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Configuration file at the site root
pub const CONFIG_FILE: &str = "site.yml";

/// A site on disk
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Content directory
    pub content_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
}

impl Site {
    /// Open the site rooted at `base_dir`
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            tracing::debug!("No {} in {:?}, using defaults", CONFIG_FILE, base_dir);
            config::SiteConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Ok(Self {
            config,
            base_dir,
            content_dir,
            public_dir,
        })
    }

    pub fn loader(&self) -> content::ContentLoader {
        content::ContentLoader::for_site(self)
    }

    /// Load every document of the site, honoring the `strict` setting
    pub fn discover(&self) -> content::Result<content::ContentSet> {
        content::ContentSet::discover(
            &self.loader(),
            &layout::LayoutResolver::new(),
            self.config.strict,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_site_defaults_without_config() {
        let dir = TempDir::new().unwrap();
        let site = Site::new(dir.path()).unwrap();
        assert_eq!(site.content_dir, dir.path().join("content"));
        assert_eq!(site.public_dir, dir.path().join("public"));
        assert!(site.discover().unwrap().is_empty());
    }

    #[test]
    fn test_site_reads_config() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            "name: Acme\ncontent_dir: docs\npublic_dir: dist\n",
        )
        .unwrap();
        let site = Site::new(dir.path()).unwrap();
        assert_eq!(site.config.name, "Acme");
        assert_eq!(site.content_dir, dir.path().join("docs"));
        assert_eq!(site.public_dir, dir.path().join("dist"));
    }
}

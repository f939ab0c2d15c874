//! Show the page data of one document

use anyhow::{Context, Result};

use crate::content::ContentType;
use crate::routes::{RouteOutcome, Router};
use crate::Site;

/// Print the detail page data of `content_type/slug` as JSON
pub fn run(site: &Site, content_type: &str, slug: &str) -> Result<()> {
    let content_type: ContentType = content_type.parse()?;
    let content = site
        .discover()
        .with_context(|| format!("Failed to load content from {}", site.content_dir.display()))?;
    let router = Router::new(&site.config, &content);

    match router.detail(content_type, slug) {
        RouteOutcome::Found(page) => {
            println!("{}", serde_json::to_string_pretty(&page)?);
            Ok(())
        }
        RouteOutcome::NotFound => anyhow::bail!("{} not found", content_type.path_for(slug)),
    }
}

//! List the slug registry of a content type

use anyhow::{Context, Result};

use crate::content::{ContentSet, ContentType};
use crate::layout::LayoutResolver;
use crate::Site;

/// Slugs of `content_type` that load and resolve a layout, so every listed
/// slug is one `show` and `generate` can serve
pub fn registry(site: &Site, content_type: ContentType) -> Result<Vec<String>> {
    let content = ContentSet::discover(&site.loader(), &LayoutResolver::new(), false)
        .with_context(|| format!("Failed to read content from {}", site.content_dir.display()))?;
    Ok(content.slugs(content_type).map(str::to_string).collect())
}

/// Print every servable slug of `content_type` with its route
pub fn run(site: &Site, content_type: &str) -> Result<()> {
    let content_type: ContentType = content_type.parse()?;
    let slugs = registry(site, content_type)?;

    println!("{} ({}):", content_type.label(), slugs.len());
    for slug in &slugs {
        println!("  {} [{}]", slug, content_type.path_for(slug));
    }

    Ok(())
}

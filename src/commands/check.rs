//! Validate site content

use anyhow::{Context, Result};

use crate::content::{ContentError, ContentSet, ContentType};
use crate::layout::LayoutResolver;
use crate::Site;

/// Outcome of validating every document
#[derive(Debug, Default)]
pub struct CheckReport {
    /// Documents that load and resolve
    pub loaded: usize,
    /// Why each other document was rejected
    pub rejected: Vec<ContentError>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Load every document leniently and report each rejection
pub fn run(site: &Site) -> Result<CheckReport> {
    let content = ContentSet::discover(&site.loader(), &LayoutResolver::new(), false)
        .with_context(|| format!("Failed to read content from {}", site.content_dir.display()))?;

    for content_type in ContentType::ALL {
        let count = content.slugs(content_type).count();
        if count > 0 {
            println!("{:<16} {}", content_type.label(), count);
        }
    }

    let rejected = content.rejections();
    for error in &rejected {
        println!("  rejected: {}", error);
    }

    Ok(CheckReport {
        loaded: content.len(),
        rejected,
    })
}

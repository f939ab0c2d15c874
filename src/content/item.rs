//! Loaded documents

use serde::Serialize;
use std::path::PathBuf;

use super::{ContentType, Frontmatter};

/// A validated document: frontmatter plus raw body.
///
/// Built fresh by every loader call; nothing shares or mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentItem {
    pub content_type: ContentType,
    pub slug: String,
    pub frontmatter: Frontmatter,

    /// Raw body text after the metadata header
    pub body: String,

    /// Source file the document was read from
    #[serde(skip)]
    pub source: PathBuf,
}

impl ContentItem {
    /// Site-relative URL path
    pub fn path(&self) -> String {
        self.content_type.path_for(&self.slug)
    }

    pub fn summary(&self) -> DocumentSummary {
        DocumentSummary {
            content_type: self.content_type,
            slug: self.slug.clone(),
            title: self.frontmatter.title.clone(),
            description: self.frontmatter.description.clone(),
            path: self.path(),
            image: self.frontmatter.image().map(str::to_string),
        }
    }
}

/// The slice of a document other pages link to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentSummary {
    pub content_type: ContentType,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub path: String,
    pub image: Option<String>,
}

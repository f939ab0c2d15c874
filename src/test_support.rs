//! Fixture helpers shared by unit tests

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::config::SiteConfig;
use crate::content::{ContentLoader, ContentSet, ContentType, Result};
use crate::layout::LayoutResolver;

/// Write a raw document file under `root/<type dir>/<file_name>`
pub fn write_doc(root: &Path, content_type: ContentType, file_name: &str, content: &str) {
    let dir = root.join(content_type.dir_name());
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(file_name), content).unwrap();
}

/// A header that satisfies the schema of `content_type`
pub fn valid_header(content_type: ContentType, slug: &str) -> String {
    let mut header = format!(
        "title: {}\ndescription: About {}\n",
        title_case(slug),
        slug
    );
    match content_type {
        ContentType::Blog => header.push_str("date: 2024-01-15\n"),
        ContentType::Updates => header.push_str("updated: 2024-02-01\n"),
        ContentType::CaseStudies => header.push_str("organization: Acme\n"),
        ContentType::Alternatives => header.push_str("competitor: Rival\n"),
        _ => {}
    }
    header
}

fn title_case(slug: &str) -> String {
    slug.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// A temporary content directory
pub struct TestContent {
    dir: TempDir,
}

impl TestContent {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write a valid document with a one-line body
    pub fn page(&self, content_type: ContentType, slug: &str) {
        self.page_with(content_type, slug, "");
    }

    /// Write a valid document with extra header lines
    pub fn page_with(&self, content_type: ContentType, slug: &str, extra_header: &str) {
        let content = format!(
            "---\n{}{}---\n\nContent of {}.\n",
            valid_header(content_type, slug),
            extra_header,
            slug
        );
        write_doc(self.root(), content_type, &format!("{}.md", slug), &content);
    }

    pub fn loader(&self) -> ContentLoader {
        ContentLoader::new(self.root(), &SiteConfig::default().extensions)
    }

    pub fn discover(&self, strict: bool) -> Result<ContentSet> {
        ContentSet::discover(&self.loader(), &LayoutResolver::new(), strict)
    }
}

//! Layout resolution
//!
//! A document picks its visual treatment with a `layout` string in its
//! header. The set of treatments is closed: every identifier maps through
//! one table onto a [`Layout`] variant, and documents are resolved during
//! discovery so a bad identifier fails the build instead of a render.

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::content::{ContentError, ContentItem, ContentType};

/// Template variants the design supports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    Default,
    Landing,
    Article,
    BlogPost,
    Feature,
    Solution,
    Comparison,
    CaseStudy,
    GlossaryTerm,
    Changelog,
    Docs,
}

impl Layout {
    pub const ALL: [Layout; 11] = [
        Layout::Default,
        Layout::Landing,
        Layout::Article,
        Layout::BlogPost,
        Layout::Feature,
        Layout::Solution,
        Layout::Comparison,
        Layout::CaseStudy,
        Layout::GlossaryTerm,
        Layout::Changelog,
        Layout::Docs,
    ];

    /// Canonical identifier authors write in `layout:`
    pub fn id(&self) -> &'static str {
        match self {
            Layout::Default => "default",
            Layout::Landing => "landing",
            Layout::Article => "article",
            Layout::BlogPost => "blog-post",
            Layout::Feature => "feature",
            Layout::Solution => "solution",
            Layout::Comparison => "comparison",
            Layout::CaseStudy => "case-study",
            Layout::GlossaryTerm => "glossary-term",
            Layout::Changelog => "changelog",
            Layout::Docs => "docs",
        }
    }

    /// Template file the renderer uses for this variant
    pub fn template(&self) -> &'static str {
        match self {
            Layout::Default => "layouts/default.html",
            Layout::Landing => "layouts/landing.html",
            Layout::Article => "layouts/article.html",
            Layout::BlogPost => "layouts/blog-post.html",
            Layout::Feature => "layouts/feature.html",
            Layout::Solution => "layouts/solution.html",
            Layout::Comparison => "layouts/comparison.html",
            Layout::CaseStudy => "layouts/case-study.html",
            Layout::GlossaryTerm => "layouts/glossary-term.html",
            Layout::Changelog => "layouts/changelog.html",
            Layout::Docs => "layouts/docs.html",
        }
    }

    /// Whether the variant shows a table of contents sidebar
    pub fn has_sidebar(&self) -> bool {
        matches!(self, Layout::Article | Layout::BlogPost | Layout::Docs)
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Raised when an identifier names no registered variant
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown layout `{0}`")]
pub struct UnknownLayoutId(pub String);

/// Older identifiers still found in documents
const ALIASES: &[(&str, Layout)] = &[
    ("post", Layout::BlogPost),
    ("page", Layout::Default),
    ("vs", Layout::Comparison),
    ("customer-story", Layout::CaseStudy),
    ("term", Layout::GlossaryTerm),
];

/// Maps layout identifiers onto [`Layout`] variants
#[derive(Debug, Clone)]
pub struct LayoutResolver {
    table: IndexMap<&'static str, Layout>,
}

impl Default for LayoutResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutResolver {
    /// Build the identifier table: every canonical id, then the aliases
    pub fn new() -> Self {
        let mut table = IndexMap::with_capacity(Layout::ALL.len() + ALIASES.len());
        for layout in Layout::ALL {
            table.insert(layout.id(), layout);
        }
        for &(alias, layout) in ALIASES {
            let shadowed = table.insert(alias, layout);
            debug_assert!(shadowed.is_none(), "alias `{}` shadows a layout id", alias);
        }
        Self { table }
    }

    /// Resolve a declared identifier, or the type default when absent
    pub fn resolve(
        &self,
        layout_id: Option<&str>,
        content_type: ContentType,
    ) -> Result<Layout, UnknownLayoutId> {
        match layout_id.map(str::trim) {
            None | Some("") => Ok(content_type.default_layout()),
            Some(id) => self
                .table
                .get(id)
                .copied()
                .ok_or_else(|| UnknownLayoutId(id.to_string())),
        }
    }

    /// Resolve the layout a loaded document declares
    pub fn resolve_item(&self, item: &ContentItem) -> Result<Layout, ContentError> {
        self.resolve(item.frontmatter.layout.as_deref(), item.content_type)
            .map_err(|UnknownLayoutId(layout)| ContentError::UnknownLayout {
                content_type: item.content_type,
                slug: item.slug.clone(),
                layout,
            })
    }

    /// Every identifier the resolver accepts
    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.table.keys().copied()
    }
}

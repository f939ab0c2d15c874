//! Content types - the closed set of document namespaces

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ContentError;
use crate::layout::Layout;

/// Structured-data vocabulary a document is projected onto
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SchemaKind {
    Article,
    BlogPosting,
    WebPage,
    /// Only the breadcrumb is emitted
    None,
}

impl SchemaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaKind::Article => "article",
            SchemaKind::BlogPosting => "blog-posting",
            SchemaKind::WebPage => "web-page",
            SchemaKind::None => "none",
        }
    }
}

impl FromStr for SchemaKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "article" => Ok(SchemaKind::Article),
            "blog-posting" => Ok(SchemaKind::BlogPosting),
            "web-page" => Ok(SchemaKind::WebPage),
            "none" => Ok(SchemaKind::None),
            other => Err(format!(
                "unknown schema `{}` (expected article, blog-posting, web-page or none)",
                other
            )),
        }
    }
}

/// How often a sitemap consumer should expect a URL to change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
        }
    }
}

/// A content type. Each one owns exactly one storage directory and one URL
/// namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentType {
    Blog,
    Features,
    Solutions,
    Alternatives,
    CaseStudies,
    Concepts,
    Industries,
    Glossary,
    KnowledgeBase,
    Updates,
    UseCases,
    Pages,
}

impl ContentType {
    /// Every content type, in sitemap order
    pub const ALL: [ContentType; 12] = [
        ContentType::Blog,
        ContentType::Features,
        ContentType::Solutions,
        ContentType::Alternatives,
        ContentType::CaseStudies,
        ContentType::Concepts,
        ContentType::Industries,
        ContentType::Glossary,
        ContentType::KnowledgeBase,
        ContentType::Updates,
        ContentType::UseCases,
        ContentType::Pages,
    ];

    /// Directory name under the content root
    pub fn dir_name(&self) -> &'static str {
        match self {
            ContentType::Blog => "blog",
            ContentType::Features => "features",
            ContentType::Solutions => "solutions",
            ContentType::Alternatives => "alternatives",
            ContentType::CaseStudies => "case-studies",
            ContentType::Concepts => "concepts",
            ContentType::Industries => "industries",
            ContentType::Glossary => "glossary",
            ContentType::KnowledgeBase => "knowledge-base",
            ContentType::Updates => "updates",
            ContentType::UseCases => "use-cases",
            ContentType::Pages => "pages",
        }
    }

    /// URL prefix for detail routes, without trailing slash.
    ///
    /// Generic pages live at the site root, so their prefix is empty.
    pub fn route(&self) -> &'static str {
        match self {
            ContentType::Pages => "",
            ContentType::Blog => "/blog",
            ContentType::Features => "/features",
            ContentType::Solutions => "/solutions",
            ContentType::Alternatives => "/alternatives",
            ContentType::CaseStudies => "/case-studies",
            ContentType::Concepts => "/concepts",
            ContentType::Industries => "/industries",
            ContentType::Glossary => "/glossary",
            ContentType::KnowledgeBase => "/knowledge-base",
            ContentType::Updates => "/updates",
            ContentType::UseCases => "/use-cases",
        }
    }

    /// Site-relative path of a document of this type
    pub fn path_for(&self, slug: &str) -> String {
        format!("{}/{}", self.route(), slug)
    }

    /// Human label, used for breadcrumbs and the search facet
    pub fn label(&self) -> &'static str {
        match self {
            ContentType::Blog => "Blog",
            ContentType::Features => "Features",
            ContentType::Solutions => "Solutions",
            ContentType::Alternatives => "Alternatives",
            ContentType::CaseStudies => "Case Studies",
            ContentType::Concepts => "Concepts",
            ContentType::Industries => "Industries",
            ContentType::Glossary => "Glossary",
            ContentType::KnowledgeBase => "Knowledge Base",
            ContentType::Updates => "Updates",
            ContentType::UseCases => "Use Cases",
            ContentType::Pages => "Pages",
        }
    }

    /// Whether the type has an index route listing its documents
    pub fn has_index(&self) -> bool {
        !matches!(self, ContentType::Pages)
    }

    /// Layout used when a document does not declare one
    pub fn default_layout(&self) -> Layout {
        match self {
            ContentType::Blog => Layout::BlogPost,
            ContentType::Features => Layout::Feature,
            ContentType::Solutions => Layout::Solution,
            ContentType::Alternatives => Layout::Comparison,
            ContentType::CaseStudies => Layout::CaseStudy,
            ContentType::Concepts => Layout::Article,
            ContentType::Industries => Layout::Solution,
            ContentType::Glossary => Layout::GlossaryTerm,
            ContentType::KnowledgeBase => Layout::Article,
            ContentType::Updates => Layout::Changelog,
            ContentType::UseCases => Layout::Solution,
            ContentType::Pages => Layout::Default,
        }
    }

    /// Structured-data kind used when a document does not declare `schema`
    pub fn default_schema(&self) -> SchemaKind {
        match self {
            ContentType::Blog | ContentType::Updates => SchemaKind::BlogPosting,
            ContentType::CaseStudies
            | ContentType::Concepts
            | ContentType::Glossary
            | ContentType::KnowledgeBase => SchemaKind::Article,
            _ => SchemaKind::WebPage,
        }
    }

    pub fn sitemap_priority(&self) -> f32 {
        match self {
            ContentType::Features | ContentType::Solutions => 0.8,
            ContentType::CaseStudies | ContentType::Alternatives | ContentType::UseCases => 0.7,
            ContentType::Blog | ContentType::Industries => 0.6,
            ContentType::Concepts | ContentType::KnowledgeBase | ContentType::Updates => 0.5,
            ContentType::Glossary | ContentType::Pages => 0.4,
        }
    }

    pub fn change_frequency(&self) -> ChangeFrequency {
        match self {
            ContentType::Blog | ContentType::Updates => ChangeFrequency::Weekly,
            ContentType::Pages | ContentType::Glossary => ChangeFrequency::Yearly,
            _ => ChangeFrequency::Monthly,
        }
    }

    /// Blog-like types get pseudo-shuffled related content
    pub fn has_related(&self) -> bool {
        matches!(
            self,
            ContentType::Blog | ContentType::Updates | ContentType::KnowledgeBase
        )
    }

    /// Types rendered with circular next/previous navigation
    pub fn has_circular_nav(&self) -> bool {
        matches!(self, ContentType::CaseStudies)
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

impl FromStr for ContentType {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().trim_matches('/');
        ContentType::ALL
            .into_iter()
            .find(|t| t.dir_name() == wanted)
            .ok_or_else(|| ContentError::UnknownContentType(s.to_string()))
    }
}

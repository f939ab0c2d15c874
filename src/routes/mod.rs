//! Route boundary - turns content lookups into page data or a not-found
//!
//! Lower layers fail fast with a typed [`ContentError`]; this is the only
//! place those errors are recovered. Every kind becomes the same not-found
//! outcome, but each is logged at its own level so data-quality problems
//! stay visible in build logs.

pub mod search;

use serde::Serialize;
use serde_json::Value;
use std::cmp::Reverse;

use crate::config::SiteConfig;
use crate::content::{
    ContentError, ContentItem, ContentSet, ContentType, DocumentSummary, ErrorKind, Frontmatter,
    MarkdownRenderer,
};
use crate::layout::Layout;
use crate::relations;
use crate::seo::{
    breadcrumb_json_ld, build_page_metadata, index_metadata, organization_json_ld,
    structured_data, Crumb, PageMetadata,
};

/// Result of resolving a route
#[derive(Debug, Clone, PartialEq)]
pub enum RouteOutcome<T> {
    Found(T),
    NotFound,
}

impl<T> RouteOutcome<T> {
    pub fn found(self) -> Option<T> {
        match self {
            RouteOutcome::Found(page) => Some(page),
            RouteOutcome::NotFound => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RouteOutcome::NotFound)
    }
}

/// A copy of a document's frontmatter with render-scoped derived fields.
///
/// The stored document is never touched; each render gets its own copy.
/// Header fields stay nested under `frontmatter` so an author's unknown
/// field can never shadow a derived one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderFrontmatter {
    pub frontmatter: Frontmatter,
    pub next: Option<DocumentSummary>,
    pub previous: Option<DocumentSummary>,
    pub related_documents: Vec<DocumentSummary>,
}

/// Everything a template needs to render a detail page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailPage {
    pub content_type: ContentType,
    pub slug: String,
    pub layout: Layout,
    pub template: &'static str,
    pub sidebar: bool,
    pub frontmatter: RenderFrontmatter,
    pub metadata: PageMetadata,
    pub structured_data: Vec<Value>,
    /// Rendered body wrapped in the search-indexing marker
    pub body_html: String,
}

/// Everything a template needs to render a type's index page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexPage {
    pub content_type: ContentType,
    pub metadata: PageMetadata,
    pub structured_data: Vec<Value>,
    pub entries: Vec<DocumentSummary>,
}

/// Resolves routes against one build's content set
pub struct Router<'a> {
    config: &'a SiteConfig,
    content: &'a ContentSet,
    renderer: MarkdownRenderer,
}

impl<'a> Router<'a> {
    pub fn new(config: &'a SiteConfig, content: &'a ContentSet) -> Self {
        Self {
            config,
            content,
            renderer: MarkdownRenderer::new(),
        }
    }

    /// Slugs to pre-render for a type's detail route
    pub fn static_paths(&self, content_type: ContentType) -> Vec<&'a str> {
        self.content.slugs(content_type).collect()
    }

    /// Detail route: `/{type}/{slug}`
    pub fn detail(&self, content_type: ContentType, slug: &str) -> RouteOutcome<DetailPage> {
        match self.try_detail(content_type, slug) {
            Ok(page) => RouteOutcome::Found(page),
            Err(e) => {
                log_route_error(&e);
                RouteOutcome::NotFound
            }
        }
    }

    /// Detail page data, with the underlying error kept
    pub fn try_detail(
        &self,
        content_type: ContentType,
        slug: &str,
    ) -> Result<DetailPage, ContentError> {
        let (item, layout) = self.content.entry(content_type, slug)?;
        let frontmatter = self.enrich(item);
        let metadata = build_page_metadata(self.config, slug, &item.frontmatter, content_type);
        let structured_data = structured_data(self.config, content_type, &item.frontmatter);
        let body_html = search::indexable(
            &self.renderer.render(&item.body),
            content_type,
            &item.frontmatter.title,
        );

        Ok(DetailPage {
            content_type,
            slug: item.slug.clone(),
            layout,
            template: layout.template(),
            sidebar: layout.has_sidebar(),
            frontmatter,
            metadata,
            structured_data,
            body_html,
        })
    }

    /// Index route: `/{type}`
    pub fn index(&self, content_type: ContentType) -> RouteOutcome<IndexPage> {
        if !content_type.has_index() {
            tracing::debug!("{} has no index route", content_type);
            return RouteOutcome::NotFound;
        }

        let items = sorted_for_index(content_type, self.content.items(content_type).collect());
        let crumbs = [
            Crumb::new("Home", "/"),
            Crumb::new(content_type.label(), content_type.route()),
        ];

        RouteOutcome::Found(IndexPage {
            content_type,
            metadata: index_metadata(self.config, content_type),
            structured_data: vec![
                organization_json_ld(self.config),
                breadcrumb_json_ld(self.config, &crumbs),
            ],
            entries: items.into_iter().map(ContentItem::summary).collect(),
        })
    }

    /// Copy the frontmatter and attach navigation and related documents
    fn enrich(&self, item: &ContentItem) -> RenderFrontmatter {
        let content_type = item.content_type;
        let mut enriched = RenderFrontmatter {
            frontmatter: item.frontmatter.clone(),
            next: None,
            previous: None,
            related_documents: Vec::new(),
        };

        if content_type.has_circular_nav() {
            let slugs: Vec<&str> = self.content.slugs(content_type).collect();
            let summary = |slug: Option<&str>| {
                slug.filter(|s| *s != item.slug)
                    .and_then(|s| self.content.get(content_type, s).ok())
                    .map(ContentItem::summary)
            };
            enriched.next = summary(relations::next_slug(&slugs, &item.slug));
            enriched.previous = summary(relations::previous_slug(&slugs, &item.slug));
        }

        if content_type.has_related() {
            let candidates: Vec<&ContentItem> = self.content.items(content_type).collect();
            enriched.related_documents = relations::related(item, &candidates)
                .into_iter()
                .map(ContentItem::summary)
                .collect();
        }

        enriched
    }
}

/// Order documents for an index page: blog by `date`, updates by `updated`,
/// newest first; everything else keeps discovery order
pub fn sorted_for_index(
    content_type: ContentType,
    mut items: Vec<&ContentItem>,
) -> Vec<&ContentItem> {
    match content_type {
        ContentType::Blog => items.sort_by_key(|i| Reverse(i.frontmatter.date)),
        ContentType::Updates => items.sort_by_key(|i| Reverse(i.frontmatter.updated)),
        _ => {}
    }
    items
}

fn log_route_error(e: &ContentError) {
    match e.kind() {
        ErrorKind::NotFound => tracing::debug!("Not found: {}", e),
        ErrorKind::SchemaViolation => tracing::warn!("Serving not-found for invalid content: {}", e),
        ErrorKind::UnknownLayout => tracing::error!("Serving not-found for layout defect: {}", e),
        ErrorKind::Other => tracing::error!("Serving not-found after content error: {}", e),
    }
}

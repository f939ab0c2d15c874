//! The content set - every document of one build, loaded once
//!
//! A `ContentSet` is an explicitly constructed snapshot of the content
//! directory. Nothing mutates it after discovery, so it can be shared freely
//! between page-generation tasks for the lifetime of one build.

use indexmap::IndexMap;
use rayon::prelude::*;

use super::{ContentError, ContentItem, ContentLoader, ContentType, FieldViolation, Result};
use crate::layout::{Layout, LayoutResolver};

/// Why a discovered document was kept out of the set
#[derive(Debug, Clone)]
enum Rejection {
    Schema(Vec<FieldViolation>),
    Layout(String),
}

#[derive(Debug, Default)]
struct Namespace {
    items: IndexMap<String, (ContentItem, Layout)>,
    rejected: IndexMap<String, Rejection>,
}

/// Every loaded document keyed by content type and slug
#[derive(Debug, Default)]
pub struct ContentSet {
    namespaces: IndexMap<ContentType, Namespace>,
}

impl ContentSet {
    /// Load and resolve every document of every content type.
    ///
    /// Types are loaded in parallel. With `strict` set, the first document
    /// that fails validation or layout resolution fails discovery; otherwise
    /// it is logged and remembered so lookups still report why it is missing.
    /// Storage errors always fail discovery.
    pub fn discover(
        loader: &ContentLoader,
        resolver: &LayoutResolver,
        strict: bool,
    ) -> Result<Self> {
        let loaded: Vec<_> = ContentType::ALL
            .par_iter()
            .map(|&content_type| (content_type, loader.load_each(content_type)))
            .collect();

        let mut set = ContentSet::default();
        for (content_type, entries) in loaded {
            let namespace = set.namespaces.entry(content_type).or_default();
            for (slug, result) in entries? {
                let resolved =
                    result.and_then(|item| resolver.resolve_item(&item).map(|layout| (item, layout)));
                match resolved {
                    Ok(entry) => {
                        namespace.items.insert(slug, entry);
                    }
                    Err(e) => {
                        let rejection = match e {
                            ContentError::SchemaViolation { violations, .. } if !strict => {
                                tracing::warn!("{}/{} rejected: {:?}", content_type, slug, violations);
                                Rejection::Schema(violations)
                            }
                            ContentError::UnknownLayout { layout, .. } if !strict => {
                                tracing::error!(
                                    "{}/{} rejected: unknown layout `{}`",
                                    content_type,
                                    slug,
                                    layout
                                );
                                Rejection::Layout(layout)
                            }
                            other => return Err(other),
                        };
                        namespace.rejected.insert(slug, rejection);
                    }
                }
            }
            tracing::debug!(
                "Discovered {} {} documents",
                namespace.items.len(),
                content_type
            );
        }

        Ok(set)
    }

    /// Build a set from already loaded documents, resolving their layouts
    pub fn from_items(
        items: impl IntoIterator<Item = ContentItem>,
        resolver: &LayoutResolver,
    ) -> Result<Self> {
        let mut set = ContentSet::default();
        for item in items {
            let layout = resolver.resolve_item(&item)?;
            let namespace = set.namespaces.entry(item.content_type).or_default();
            if namespace.items.contains_key(&item.slug) {
                return Err(ContentError::SchemaViolation {
                    content_type: item.content_type,
                    slug: item.slug.clone(),
                    violations: vec![FieldViolation::new("slug", "is not unique")],
                });
            }
            namespace.items.insert(item.slug.clone(), (item, layout));
        }
        Ok(set)
    }

    /// Look up one document
    pub fn get(&self, content_type: ContentType, slug: &str) -> Result<&ContentItem> {
        self.entry(content_type, slug).map(|(item, _)| item)
    }

    /// Look up one document together with its resolved layout
    pub fn entry(&self, content_type: ContentType, slug: &str) -> Result<(&ContentItem, Layout)> {
        let namespace = self.namespaces.get(&content_type);
        if let Some((item, layout)) = namespace.and_then(|ns| ns.items.get(slug)) {
            return Ok((item, *layout));
        }

        let slug = slug.to_string();
        Err(match namespace.and_then(|ns| ns.rejected.get(&slug)) {
            Some(Rejection::Schema(violations)) => ContentError::SchemaViolation {
                content_type,
                slug,
                violations: violations.clone(),
            },
            Some(Rejection::Layout(layout)) => ContentError::UnknownLayout {
                content_type,
                slug,
                layout: layout.clone(),
            },
            None => ContentError::NotFound { content_type, slug },
        })
    }

    /// Documents of a type in discovery order
    pub fn items(&self, content_type: ContentType) -> impl Iterator<Item = &ContentItem> + '_ {
        self.namespaces
            .get(&content_type)
            .into_iter()
            .flat_map(|ns| ns.items.values().map(|(item, _)| item))
    }

    /// Slug registry: slugs of a type that load, in discovery order
    pub fn slugs(&self, content_type: ContentType) -> impl Iterator<Item = &str> + '_ {
        self.namespaces
            .get(&content_type)
            .into_iter()
            .flat_map(|ns| ns.items.keys().map(String::as_str))
    }

    /// Number of loadable documents across all types
    pub fn len(&self) -> usize {
        self.namespaces.values().map(|ns| ns.items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every document kept out of the set, as the error a lookup reports
    pub fn rejections(&self) -> Vec<ContentError> {
        self.namespaces
            .iter()
            .flat_map(|(&content_type, ns)| {
                ns.rejected
                    .keys()
                    .map(move |slug| self.entry(content_type, slug).err())
            })
            .flatten()
            .collect()
    }
}

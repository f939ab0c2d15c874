//! Structured data (schema.org JSON-LD)
//!
//! Pure mappings from frontmatter onto schema.org vocabulary. Optional
//! fields a document does not declare are left out of the output.

use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::config::SiteConfig;
use crate::content::{ContentType, Extension, Frontmatter, SchemaKind};
use crate::helpers::{absolute_url, full_url_for};

const CONTEXT: &str = "https://schema.org";

/// One step of a breadcrumb trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Crumb {
    pub name: String,
    pub href: String,
}

impl Crumb {
    pub fn new(name: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
        }
    }
}

/// Breadcrumb trail for a document: Home, the type index, the document
pub fn breadcrumbs_for(content_type: ContentType, slug: &str, title: &str) -> Vec<Crumb> {
    let mut path = vec![Crumb::new("Home", "/")];
    if content_type.has_index() {
        path.push(Crumb::new(content_type.label(), content_type.route()));
    }
    path.push(Crumb::new(title, content_type.path_for(slug)));
    path
}

/// `BreadcrumbList` with positions starting at 1, in path order
pub fn breadcrumb_json_ld(config: &SiteConfig, path: &[Crumb]) -> Value {
    let items: Vec<Value> = path
        .iter()
        .enumerate()
        .map(|(i, crumb)| {
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "name": crumb.name,
                "item": absolute_url(config, &crumb.href),
            })
        })
        .collect();

    json!({
        "@context": CONTEXT,
        "@type": "BreadcrumbList",
        "itemListElement": items,
    })
}

/// The publishing organization
pub fn organization_json_ld(config: &SiteConfig) -> Value {
    let mut org = Map::new();
    org.insert("@context".into(), CONTEXT.into());
    org.insert("@type".into(), "Organization".into());
    org.insert("name".into(), config.organization_name().into());
    org.insert("url".into(), full_url_for(config, "/").into());
    if let Some(logo) = &config.organization.logo {
        org.insert("logo".into(), absolute_url(config, logo).into());
    }
    if !config.organization.same_as.is_empty() {
        org.insert("sameAs".into(), json!(config.organization.same_as));
    }
    Value::Object(org)
}

/// `Article` for a document
pub fn article_json_ld(
    config: &SiteConfig,
    content_type: ContentType,
    frontmatter: &Frontmatter,
) -> Value {
    creative_work("Article", config, content_type, frontmatter)
}

/// `BlogPosting` for a document
pub fn blog_posting_json_ld(
    config: &SiteConfig,
    content_type: ContentType,
    frontmatter: &Frontmatter,
) -> Value {
    creative_work("BlogPosting", config, content_type, frontmatter)
}

/// `WebPage` for a document
pub fn web_page_json_ld(
    config: &SiteConfig,
    content_type: ContentType,
    frontmatter: &Frontmatter,
) -> Value {
    let url = full_url_for(config, &content_type.path_for(&frontmatter.slug));
    json!({
        "@context": CONTEXT,
        "@type": "WebPage",
        "name": frontmatter.seo_title(),
        "description": frontmatter.seo_description(),
        "url": url,
        "isPartOf": {
            "@type": "WebSite",
            "name": config.name,
            "url": full_url_for(config, "/"),
        },
    })
}

/// Every structured-data block for a document: the one its `schema` (or
/// its type's default) selects, then its breadcrumb
pub fn structured_data(
    config: &SiteConfig,
    content_type: ContentType,
    frontmatter: &Frontmatter,
) -> Vec<Value> {
    let kind = frontmatter
        .schema
        .unwrap_or_else(|| content_type.default_schema());

    let mut blocks = Vec::with_capacity(2);
    match kind {
        SchemaKind::Article => blocks.push(article_json_ld(config, content_type, frontmatter)),
        SchemaKind::BlogPosting => {
            blocks.push(blog_posting_json_ld(config, content_type, frontmatter))
        }
        SchemaKind::WebPage => blocks.push(web_page_json_ld(config, content_type, frontmatter)),
        SchemaKind::None => {}
    }

    let crumbs = breadcrumbs_for(content_type, &frontmatter.slug, &frontmatter.title);
    blocks.push(breadcrumb_json_ld(config, &crumbs));
    blocks
}

fn creative_work(
    schema_type: &str,
    config: &SiteConfig,
    content_type: ContentType,
    frontmatter: &Frontmatter,
) -> Value {
    let url = full_url_for(config, &content_type.path_for(&frontmatter.slug));

    let mut work = Map::new();
    work.insert("@context".into(), CONTEXT.into());
    work.insert("@type".into(), schema_type.into());
    work.insert("headline".into(), frontmatter.seo_title().into());
    work.insert("description".into(), frontmatter.seo_description().into());
    work.insert("url".into(), url.clone().into());
    work.insert(
        "mainEntityOfPage".into(),
        json!({ "@type": "WebPage", "@id": url }),
    );

    if let Some(date) = frontmatter.date {
        work.insert("datePublished".into(), date.to_string().into());
    }
    if let Some(modified) = frontmatter.last_modified() {
        work.insert("dateModified".into(), modified.to_string().into());
    }
    if let Some(image) = frontmatter.image().or(config.default_image.as_deref()) {
        work.insert("image".into(), absolute_url(config, image).into());
    }

    let author = match &frontmatter.author {
        Some(name) => json!({ "@type": "Person", "name": name }),
        None => json!({ "@type": "Organization", "name": config.organization_name() }),
    };
    work.insert("author".into(), author);

    let mut publisher = json!({ "@type": "Organization", "name": config.organization_name() });
    if let Some(logo) = &config.organization.logo {
        publisher["logo"] = json!({ "@type": "ImageObject", "url": absolute_url(config, logo) });
    }
    work.insert("publisher".into(), publisher);

    if !frontmatter.keywords().is_empty() {
        work.insert("keywords".into(), frontmatter.keywords().join(", ").into());
    } else if !frontmatter.tags.is_empty() {
        work.insert("keywords".into(), frontmatter.tags.join(", ").into());
    }

    match &frontmatter.extension {
        Extension::CaseStudy {
            organization,
            industry,
            ..
        } => {
            let mut about = json!({ "@type": "Organization", "name": organization });
            if let Some(industry) = industry {
                about["industry"] = industry.as_str().into();
            }
            work.insert("about".into(), about);
        }
        Extension::GlossaryTerm { term, .. } => {
            work.insert(
                "about".into(),
                json!({ "@type": "DefinedTerm", "name": term }),
            );
        }
        Extension::Alternative { competitor } => {
            work.insert(
                "about".into(),
                json!({ "@type": "SoftwareApplication", "name": competitor }),
            );
        }
        _ => {}
    }

    Value::Object(work)
}

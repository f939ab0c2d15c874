//! Page metadata: title, description, canonical URL and social previews

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::SiteConfig;
use crate::content::{ContentType, Frontmatter, SchemaKind};
use crate::helpers::{absolute_url, full_url_for};

/// Robots directive emitted for `seo.noindex` documents
pub const NOINDEX_ROBOTS: &str = "noindex, nofollow";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub url: String,
    pub site_name: String,
    pub locale: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub image: Option<String>,
    pub published_time: Option<NaiveDate>,
    pub modified_time: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TwitterCard {
    pub card: &'static str,
    pub title: String,
    pub description: String,
    pub site: Option<String>,
    pub image: Option<String>,
}

/// Head metadata for one page
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    /// Page title, `seo.title` preferred
    pub title: String,
    /// Title after the site-wide template is applied
    pub full_title: String,
    pub description: String,
    pub canonical: String,
    pub keywords: Vec<String>,
    pub noindex: bool,
    pub robots: Option<&'static str>,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
}

/// Build head metadata for a document
pub fn build_page_metadata(
    config: &SiteConfig,
    slug: &str,
    frontmatter: &Frontmatter,
    content_type: ContentType,
) -> PageMetadata {
    let title = frontmatter.seo_title().to_string();
    let description = frontmatter.seo_description().to_string();
    let canonical = full_url_for(config, &content_type.path_for(slug));
    let image = frontmatter
        .image()
        .or(config.default_image.as_deref())
        .map(|href| absolute_url(config, href));
    let noindex = frontmatter.noindex();

    let is_article = matches!(
        frontmatter.schema.unwrap_or_else(|| content_type.default_schema()),
        SchemaKind::Article | SchemaKind::BlogPosting
    );

    PageMetadata {
        full_title: config.format_title(&title),
        keywords: frontmatter.keywords().to_vec(),
        noindex,
        robots: noindex.then_some(NOINDEX_ROBOTS),
        open_graph: OpenGraph {
            title: title.clone(),
            description: description.clone(),
            url: canonical.clone(),
            site_name: config.name.clone(),
            locale: config.locale.clone(),
            kind: if is_article { "article" } else { "website" },
            image: image.clone(),
            published_time: if is_article { frontmatter.date } else { None },
            modified_time: if is_article {
                frontmatter.updated
            } else {
                None
            },
        },
        twitter: TwitterCard {
            card: if image.is_some() {
                "summary_large_image"
            } else {
                "summary"
            },
            title: title.clone(),
            description: description.clone(),
            site: config.twitter_handle.clone(),
            image,
        },
        title,
        description,
        canonical,
    }
}

/// Head metadata for a content type's index route
pub fn index_metadata(config: &SiteConfig, content_type: ContentType) -> PageMetadata {
    let title = content_type.label().to_string();
    let description = config.description.clone();
    let canonical = full_url_for(config, content_type.route());
    let image = config
        .default_image
        .as_deref()
        .map(|href| absolute_url(config, href));

    PageMetadata {
        full_title: config.format_title(&title),
        keywords: Vec::new(),
        noindex: false,
        robots: None,
        open_graph: OpenGraph {
            title: title.clone(),
            description: description.clone(),
            url: canonical.clone(),
            site_name: config.name.clone(),
            locale: config.locale.clone(),
            kind: "website",
            image: image.clone(),
            published_time: None,
            modified_time: None,
        },
        twitter: TwitterCard {
            card: if image.is_some() {
                "summary_large_image"
            } else {
                "summary"
            },
            title: title.clone(),
            description: description.clone(),
            site: config.twitter_handle.clone(),
            image,
        },
        title,
        description,
        canonical,
    }
}

//! Metadata projection - head metadata and structured data derived from
//! frontmatter
//!
//! Everything here is a pure function of its inputs: no I/O, no shared state.

mod jsonld;
mod metadata;

pub use jsonld::{
    article_json_ld, blog_posting_json_ld, breadcrumb_json_ld, breadcrumbs_for,
    organization_json_ld, structured_data, web_page_json_ld, Crumb,
};
pub use metadata::{
    build_page_metadata, index_metadata, OpenGraph, PageMetadata, TwitterCard, NOINDEX_ROBOTS,
};

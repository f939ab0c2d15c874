//! Search-indexing marker
//!
//! The static search indexer that runs after export only indexes regions
//! marked with `data-pagefind-body`. Each detail page declares the type
//! facet and its display title on that region.

use crate::content::ContentType;
use crate::helpers::escape_html;

/// Wrap rendered body HTML in the indexing marker
pub fn indexable(body_html: &str, content_type: ContentType, title: &str) -> String {
    format!(
        "<div data-pagefind-body data-pagefind-filter=\"type:{}\" data-pagefind-meta=\"title:{}\">\n{}</div>\n",
        escape_html(content_type.label()),
        escape_html(title),
        body_html
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_declares_region_facet_and_title() {
        let html = indexable("<p>Hi</p>\n", ContentType::CaseStudies, "Acme & Co");
        assert!(html.starts_with("<div data-pagefind-body "));
        assert!(html.contains(r#"data-pagefind-filter="type:Case Studies""#));
        assert!(html.contains(r#"data-pagefind-meta="title:Acme &amp; Co""#));
        assert!(html.contains("<p>Hi</p>"));
        assert!(html.trim_end().ends_with("</div>"));
    }
}

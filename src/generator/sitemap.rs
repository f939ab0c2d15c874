//! Sitemap aggregation.
//!
//! Merges the configured static routes and every content type's index
//! route with the slug registry of each content type.
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/blog/hello</loc>
//!     <lastmod>2025-01-01</lastmod>
//!     <changefreq>weekly</changefreq>
//!     <priority>0.6</priority>
//!   </url>
//! </urlset>
//! ```

use chrono::NaiveDate;
use indexmap::IndexSet;
use serde::Serialize;

use crate::config::SiteConfig;
use crate::content::{ChangeFrequency, ContentSet, ContentType};
use crate::helpers::{escape_xml, full_url_for, normalize_route};

/// XML namespace for sitemap
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Single URL entry in the sitemap
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: NaiveDate,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

/// Static routes: the configured ones, then each type's index route.
///
/// Routes are normalized and de-duplicated, first occurrence wins.
pub fn static_routes(config: &SiteConfig) -> Vec<String> {
    let mut routes: IndexSet<String> = config
        .static_routes
        .iter()
        .map(|r| normalize_route(r))
        .collect();
    for content_type in ContentType::ALL {
        if content_type.has_index() {
            routes.insert(content_type.route().to_string());
        }
    }
    routes.into_iter().collect()
}

fn static_priority(route: &str) -> (f32, ChangeFrequency) {
    if route == "/" {
        (1.0, ChangeFrequency::Weekly)
    } else if ContentType::ALL.iter().any(|t| t.has_index() && t.route() == route) {
        (0.8, ChangeFrequency::Weekly)
    } else {
        (0.7, ChangeFrequency::Monthly)
    }
}

/// Build every sitemap entry.
///
/// Documents use their `updated` (or `date`) as last modification; static
/// routes and undated documents use `build_date`. A URL appears once even
/// if a static route and a document share it.
pub fn build_sitemap(
    config: &SiteConfig,
    content: &ContentSet,
    build_date: NaiveDate,
) -> Vec<SitemapEntry> {
    let mut seen: IndexSet<String> = IndexSet::new();
    let mut entries = Vec::new();

    for route in static_routes(config) {
        let url = full_url_for(config, &route);
        if seen.insert(url.clone()) {
            let (priority, change_frequency) = static_priority(&route);
            entries.push(SitemapEntry {
                url,
                last_modified: build_date,
                change_frequency,
                priority,
            });
        }
    }

    for content_type in ContentType::ALL {
        for item in content.items(content_type) {
            let url = full_url_for(config, &item.path());
            if !seen.insert(url.clone()) {
                tracing::debug!("Sitemap already lists {}", url);
                continue;
            }
            entries.push(SitemapEntry {
                url,
                last_modified: item.frontmatter.last_modified().unwrap_or(build_date),
                change_frequency: content_type.change_frequency(),
                priority: content_type.sitemap_priority(),
            });
        }
    }

    entries
}

/// Render entries as sitemap XML
pub fn to_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::with_capacity(128 + entries.len() * 160);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    xml.push_str(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
    xml.push('\n');

    for entry in entries {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&entry.url)));
        xml.push_str(&format!(
            "    <lastmod>{}</lastmod>\n",
            entry.last_modified.format("%Y-%m-%d")
        ));
        xml.push_str(&format!(
            "    <changefreq>{}</changefreq>\n",
            entry.change_frequency.as_str()
        ));
        xml.push_str(&format!("    <priority>{:.1}</priority>\n", entry.priority));
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestContent;
    use std::collections::HashSet;

    fn build_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn config() -> SiteConfig {
        SiteConfig {
            url: "https://acme.dev".to_string(),
            static_routes: vec!["/".to_string(), "/pricing/".to_string(), "/blog".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_static_routes_are_deduplicated() {
        let routes = static_routes(&config());
        assert_eq!(&routes[..3], &["/", "/pricing", "/blog"]);
        assert_eq!(routes.iter().filter(|r| *r == "/blog").count(), 1);
        // every type with an index route is present
        assert!(routes.contains(&"/case-studies".to_string()));
        assert!(!routes.contains(&String::new()));
    }

    #[test]
    fn test_one_entry_per_route_and_slug() {
        let content = TestContent::new();
        content.page(ContentType::Blog, "hello");
        content.page(ContentType::Blog, "world");
        content.page(ContentType::CaseStudies, "acme");
        content.page(ContentType::Pages, "privacy");
        let set = content.discover(true).unwrap();

        let config = config();
        let entries = build_sitemap(&config, &set, build_date());
        assert_eq!(entries.len(), static_routes(&config).len() + 4);

        let urls: HashSet<_> = entries.iter().map(|e| e.url.as_str()).collect();
        assert_eq!(urls.len(), entries.len());
        assert!(urls.contains("https://acme.dev/blog/hello"));
        assert!(urls.contains("https://acme.dev/case-studies/acme"));
        assert!(urls.contains("https://acme.dev/privacy"));
        assert!(urls.contains("https://acme.dev"));
    }

    #[test]
    fn test_static_route_shadowing_a_page_is_listed_once() {
        let content = TestContent::new();
        content.page(ContentType::Pages, "pricing");
        let set = content.discover(true).unwrap();

        let config = config();
        let entries = build_sitemap(&config, &set, build_date());
        assert_eq!(entries.len(), static_routes(&config).len());
        let pricing: Vec<_> = entries
            .iter()
            .filter(|e| e.url == "https://acme.dev/pricing")
            .collect();
        assert_eq!(pricing.len(), 1);
    }

    #[test]
    fn test_priorities_and_last_modified() {
        let content = TestContent::new();
        content.page(ContentType::Updates, "v2");
        content.page(ContentType::Features, "sso");
        let set = content.discover(true).unwrap();

        let entries = build_sitemap(&config(), &set, build_date());
        let home = entries.iter().find(|e| e.url == "https://acme.dev").unwrap();
        assert_eq!(home.priority, 1.0);
        assert_eq!(home.last_modified, build_date());

        let update = entries
            .iter()
            .find(|e| e.url == "https://acme.dev/updates/v2")
            .unwrap();
        assert_eq!(update.last_modified, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(update.change_frequency, ChangeFrequency::Weekly);

        let feature = entries
            .iter()
            .find(|e| e.url == "https://acme.dev/features/sso")
            .unwrap();
        assert_eq!(feature.priority, ContentType::Features.sitemap_priority());
        assert_eq!(feature.last_modified, build_date());
    }

    #[test]
    fn test_to_xml() {
        let entries = vec![SitemapEntry {
            url: "https://acme.dev/a?b=1&c=2".to_string(),
            last_modified: build_date(),
            change_frequency: ChangeFrequency::Monthly,
            priority: 0.7,
        }];
        let xml = to_xml(&entries);
        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(SITEMAP_NS));
        assert!(xml.contains("<loc>https://acme.dev/a?b=1&amp;c=2</loc>"));
        assert!(xml.contains("<lastmod>2025-06-01</lastmod>"));
        assert!(xml.contains("<changefreq>monthly</changefreq>"));
        assert!(xml.contains("<priority>0.7</priority>"));
    }
}

//! URL helper functions

use crate::config::SiteConfig;

/// Generate a full URL including the domain
///
/// # Examples
/// ```ignore
/// full_url_for(&config, "/blog/hello") // -> "https://example.com/blog/hello"
/// full_url_for(&config, "/")           // -> "https://example.com"
/// ```
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    let base = config.url.trim_end_matches('/');
    let path = path.trim_matches('/');

    if path.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, path)
    }
}

/// Make an asset reference absolute, leaving external URLs untouched
pub fn absolute_url(config: &SiteConfig, href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") || href.starts_with("//") {
        href.to_string()
    } else {
        full_url_for(config, href)
    }
}

/// Normalize a site route to a leading slash and no trailing slash
pub fn normalize_route(route: &str) -> String {
    let trimmed = route.trim().trim_matches('/');
    format!("/{}", trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        SiteConfig {
            url: "https://example.com/".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_full_url_for() {
        let config = test_config();
        assert_eq!(
            full_url_for(&config, "/blog/hello"),
            "https://example.com/blog/hello"
        );
        assert_eq!(full_url_for(&config, "/"), "https://example.com");
        assert_eq!(full_url_for(&config, "pricing/"), "https://example.com/pricing");
    }

    #[test]
    fn test_absolute_url() {
        let config = test_config();
        assert_eq!(
            absolute_url(&config, "/images/og.png"),
            "https://example.com/images/og.png"
        );
        assert_eq!(
            absolute_url(&config, "https://cdn.example.net/a.png"),
            "https://cdn.example.net/a.png"
        );
    }

    #[test]
    fn test_normalize_route() {
        assert_eq!(normalize_route("/"), "/");
        assert_eq!(normalize_route("about/"), "/about");
        assert_eq!(normalize_route(" /case-studies "), "/case-studies");
    }
}

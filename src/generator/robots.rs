//! robots.txt policy

use crate::config::SiteConfig;
use crate::helpers::{full_url_for, normalize_route};

/// Build the robots policy: every path is allowed except the private prefix,
/// named crawler agents get their own explicit group, and the sitemap is
/// advertised.
pub fn build_robots(config: &SiteConfig) -> String {
    let private = private_prefix(&config.private_prefix);
    let mut out = String::new();

    let mut group = |agent: &str| {
        out.push_str(&format!("User-agent: {}\n", agent));
        out.push_str("Allow: /\n");
        if let Some(private) = &private {
            out.push_str(&format!("Disallow: {}\n", private));
        }
        out.push('\n');
    };

    group("*");
    for agent in &config.crawler_agents {
        let agent = agent.trim();
        if !agent.is_empty() && agent != "*" {
            group(agent);
        }
    }

    out.push_str(&format!(
        "Sitemap: {}\n",
        full_url_for(config, "/sitemap.xml")
    ));
    out
}

/// `/private/` style prefix, or `None` when nothing is private
fn private_prefix(prefix: &str) -> Option<String> {
    let route = normalize_route(prefix);
    if route == "/" {
        None
    } else {
        Some(format!("{}/", route))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SiteConfig {
        SiteConfig {
            url: "https://acme.dev".to_string(),
            private_prefix: "private".to_string(),
            crawler_agents: vec!["GPTBot".to_string(), "ClaudeBot".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_default_group_and_sitemap() {
        let robots = build_robots(&config());
        assert!(robots.starts_with("User-agent: *\nAllow: /\nDisallow: /private/\n"));
        assert!(robots.ends_with("Sitemap: https://acme.dev/sitemap.xml\n"));
    }

    #[test]
    fn test_named_agents_are_allowed() {
        let robots = build_robots(&config());
        assert!(robots.contains("User-agent: GPTBot\nAllow: /\nDisallow: /private/\n"));
        assert!(robots.contains("User-agent: ClaudeBot\nAllow: /\n"));
        assert_eq!(robots.matches("User-agent:").count(), 3);
    }

    #[test]
    fn test_empty_private_prefix() {
        let config = SiteConfig {
            private_prefix: "/".to_string(),
            crawler_agents: Vec::new(),
            ..config()
        };
        let robots = build_robots(&config);
        assert!(!robots.contains("Disallow"));
    }
}

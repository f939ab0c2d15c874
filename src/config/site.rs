//! Site configuration (site.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub name: String,
    pub description: String,
    pub locale: String,
    /// Page title template, `%s` is replaced by the page title
    pub title_template: String,
    pub default_image: Option<String>,
    pub twitter_handle: Option<String>,
    #[serde(default)]
    pub organization: OrganizationConfig,

    // URL
    pub url: String,
    pub static_routes: Vec<String>,

    // Robots
    pub private_prefix: String,
    pub crawler_agents: Vec<String>,

    // Directory
    pub content_dir: String,
    pub public_dir: String,
    pub extensions: Vec<String>,

    /// Fail discovery on the first rejected document
    pub strict: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Example".to_string(),
            description: String::new(),
            locale: "en_US".to_string(),
            title_template: "%s | Example".to_string(),
            default_image: None,
            twitter_handle: None,
            organization: OrganizationConfig::default(),

            url: "https://example.com".to_string(),
            static_routes: ["/", "/pricing", "/about", "/contact", "/customers", "/security"]
                .iter()
                .map(|s| s.to_string())
                .collect(),

            private_prefix: "/private/".to_string(),
            crawler_agents: [
                "GPTBot",
                "ChatGPT-User",
                "OAI-SearchBot",
                "ClaudeBot",
                "Claude-Web",
                "anthropic-ai",
                "PerplexityBot",
                "Google-Extended",
                "Applebot-Extended",
                "CCBot",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),

            content_dir: "content".to_string(),
            public_dir: "public".to_string(),
            extensions: ["md", "mdx", "markdown"]
                .iter()
                .map(|s| s.to_string())
                .collect(),

            strict: true,
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {:?}", path))?;
        Ok(config)
    }

    /// Render a page title through the site title template
    pub fn format_title(&self, title: &str) -> String {
        if self.title_template.contains("%s") {
            self.title_template.replace("%s", title)
        } else {
            title.to_string()
        }
    }

    /// Organization name, the site name unless configured
    pub fn organization_name(&self) -> &str {
        self.organization.name.as_deref().unwrap_or(&self.name)
    }
}

/// Publisher organization used in structured data
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationConfig {
    pub name: Option<String>,
    pub logo: Option<String>,
    pub same_as: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.content_dir, "content");
        assert!(config.strict);
        assert!(config.static_routes.contains(&"/".to_string()));
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
name: Acme
url: https://acme.dev/
title_template: "%s - Acme"
organization:
  logo: /logo.png
  same_as:
    - https://github.com/acme
strict: false
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.name, "Acme");
        assert_eq!(config.format_title("Pricing"), "Pricing - Acme");
        assert_eq!(config.organization_name(), "Acme");
        assert_eq!(config.organization.same_as.len(), 1);
        assert!(!config.strict);
        // untouched fields keep their defaults
        assert_eq!(config.private_prefix, "/private/");
    }

    #[test]
    fn test_title_template_without_placeholder() {
        let config = SiteConfig {
            title_template: "Acme".to_string(),
            ..Default::default()
        };
        assert_eq!(config.format_title("Pricing"), "Pricing");
    }
}

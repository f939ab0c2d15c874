//! Generate page data, sitemap and robots policy

use anyhow::{Context, Result};

use crate::generator::{build_robots, build_sitemap, to_xml, GenerateReport, Generator};
use crate::Site;

/// Discover the site's content and write every artifact
pub fn run(site: &Site) -> Result<GenerateReport> {
    let start = std::time::Instant::now();

    let content = site
        .discover()
        .with_context(|| format!("Failed to load content from {}", site.content_dir.display()))?;
    tracing::info!("Loaded {} documents", content.len());

    let build_date = chrono::Local::now().date_naive();
    let report = Generator::new(site, &content, build_date).generate()?;

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(report)
}

/// Print the sitemap XML to stdout
pub fn print_sitemap(site: &Site) -> Result<()> {
    let content = site
        .discover()
        .with_context(|| format!("Failed to load content from {}", site.content_dir.display()))?;
    let entries = build_sitemap(&site.config, &content, chrono::Local::now().date_naive());
    print!("{}", to_xml(&entries));
    Ok(())
}

/// Print the robots policy to stdout
pub fn print_robots(site: &Site) {
    print!("{}", build_robots(&site.config));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentType;
    use crate::test_support::write_doc;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_generate_fails_on_invalid_content_when_strict() {
        let dir = TempDir::new().unwrap();
        let site = Site::new(dir.path()).unwrap();
        write_doc(&site.content_dir, ContentType::Blog, "oops.md", "---\ntitle: Oops\n---\n");

        let err = run(&site).unwrap_err();
        assert!(format!("{:#}", err).contains("blog/oops"));
        assert!(!site.public_dir.join("sitemap.xml").exists());
    }

    #[test]
    fn test_generate_skips_invalid_content_when_lenient() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("site.yml"), "strict: false\n").unwrap();
        let site = Site::new(dir.path()).unwrap();
        write_doc(&site.content_dir, ContentType::Blog, "oops.md", "---\ntitle: Oops\n---\n");
        write_doc(
            &site.content_dir,
            ContentType::Blog,
            "fine.md",
            "---\ntitle: Fine\ndescription: D\ndate: 2024-03-01\n---\n",
        );

        let report = run(&site).unwrap();
        assert_eq!(report.detail_pages, 1);
        assert!(site.public_dir.join("_data/blog/fine.json").is_file());
        assert!(!site.public_dir.join("_data/blog/oops.json").exists());
    }
}

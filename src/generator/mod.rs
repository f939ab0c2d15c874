//! Generator module - writes build artifacts into the public directory
//!
//! Page rendering itself belongs to the templates of the site; the generator
//! produces the data they consume (one JSON file per detail and index page)
//! plus `sitemap.xml` and `robots.txt`.

pub mod robots;
pub mod sitemap;

pub use robots::build_robots;
pub use sitemap::{build_sitemap, static_routes, to_xml, SitemapEntry};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::content::{ContentSet, ContentType};
use crate::routes::{RouteOutcome, Router};
use crate::Site;

/// Directory under the public directory holding page data
const PAGE_DATA_DIR: &str = "_data";

/// What a generation run wrote
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub detail_pages: usize,
    pub index_pages: usize,
    pub sitemap_entries: usize,
}

/// Artifact generator for one build
pub struct Generator<'a> {
    site: &'a Site,
    content: &'a ContentSet,
    build_date: NaiveDate,
}

impl<'a> Generator<'a> {
    pub fn new(site: &'a Site, content: &'a ContentSet, build_date: NaiveDate) -> Self {
        Self {
            site,
            content,
            build_date,
        }
    }

    /// Generate every artifact
    pub fn generate(&self) -> Result<GenerateReport> {
        fs::create_dir_all(&self.site.public_dir).with_context(|| {
            format!("Failed to create {}", self.site.public_dir.display())
        })?;

        let mut report = GenerateReport::default();
        let router = Router::new(&self.site.config, self.content);

        for content_type in ContentType::ALL {
            for slug in router.static_paths(content_type) {
                // every registered slug resolves; the registry only holds loadable documents
                if let RouteOutcome::Found(page) = router.detail(content_type, slug) {
                    write_json(&self.detail_path(content_type, slug), &page)?;
                    report.detail_pages += 1;
                }
            }

            if let RouteOutcome::Found(index) = router.index(content_type) {
                write_json(&self.index_path(content_type), &index)?;
                report.index_pages += 1;
            }
        }

        report.sitemap_entries = self.generate_sitemap()?;
        self.generate_robots()?;

        tracing::info!(
            "Generated {} detail pages and {} index pages",
            report.detail_pages,
            report.index_pages
        );
        Ok(report)
    }

    /// Write `sitemap.xml`, returning the number of entries
    pub fn generate_sitemap(&self) -> Result<usize> {
        let entries = build_sitemap(&self.site.config, self.content, self.build_date);
        let output_path = self.site.public_dir.join("sitemap.xml");
        write_file(&output_path, &to_xml(&entries))?;
        tracing::info!("Generated sitemap.xml ({} urls)", entries.len());
        Ok(entries.len())
    }

    /// Write `robots.txt`
    pub fn generate_robots(&self) -> Result<()> {
        let output_path = self.site.public_dir.join("robots.txt");
        write_file(&output_path, &build_robots(&self.site.config))?;
        tracing::info!("Generated robots.txt");
        Ok(())
    }

    fn detail_path(&self, content_type: ContentType, slug: &str) -> PathBuf {
        self.site
            .public_dir
            .join(PAGE_DATA_DIR)
            .join(content_type.dir_name())
            .join(format!("{}.json", slug))
    }

    fn index_path(&self, content_type: ContentType) -> PathBuf {
        self.site
            .public_dir
            .join(PAGE_DATA_DIR)
            .join(format!("{}.json", content_type.dir_name()))
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed to serialize {}", path.display()))?;
    write_file(path, &json)?;
    tracing::debug!("Generated: {:?}", path);
    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

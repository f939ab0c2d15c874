//! Content loader - reads documents from the content directory
//!
//! Storage layout is one directory per [`ContentType`], one file per
//! document named `{slug}.{ext}`. The loader keeps no state between calls.

use indexmap::IndexSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::schema::{is_valid_slug, validate};
use super::{split_header, ContentError, ContentItem, ContentType, FieldViolation, Result};
use crate::Site;

/// Loads documents from the content directory
#[derive(Debug, Clone)]
pub struct ContentLoader {
    root: PathBuf,
    extensions: Vec<String>,
}

impl ContentLoader {
    /// Create a loader over `root` accepting files with the given extensions
    pub fn new<P: AsRef<Path>>(root: P, extensions: &[String]) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            extensions: extensions.to_vec(),
        }
    }

    /// Create a loader for a site's configured content directory
    pub fn for_site(site: &Site) -> Self {
        Self::new(&site.content_dir, &site.config.extensions)
    }

    /// Directory holding documents of `content_type`
    pub fn dir(&self, content_type: ContentType) -> PathBuf {
        self.root.join(content_type.dir_name())
    }

    /// Load one document.
    ///
    /// Fails with `NotFound` when no file backs `slug`, and with
    /// `SchemaViolation` when the file's header does not validate.
    pub fn load(&self, content_type: ContentType, slug: &str) -> Result<ContentItem> {
        if !is_valid_slug(slug) {
            return Err(ContentError::NotFound {
                content_type,
                slug: slug.to_string(),
            });
        }

        let dir = self.dir(content_type);
        let candidates: Vec<PathBuf> = self
            .extensions
            .iter()
            .map(|ext| dir.join(format!("{}.{}", slug, ext)))
            .filter(|path| path.is_file())
            .collect();

        match candidates.as_slice() {
            [] => Err(ContentError::NotFound {
                content_type,
                slug: slug.to_string(),
            }),
            [path] => self.load_file(content_type, slug, path),
            [first, rest @ ..] => Err(duplicate_slug(content_type, slug, first, rest)),
        }
    }

    /// Load every document of a type in discovery order, failing on the
    /// first document that does not load
    pub fn load_all(&self, content_type: ContentType) -> Result<Vec<ContentItem>> {
        self.load_each(content_type)?
            .into_iter()
            .map(|(_, result)| result)
            .collect()
    }

    /// Slugs of every document of a type that loads.
    ///
    /// Documents that fail validation are left out and logged, so each
    /// returned slug is guaranteed to load.
    pub fn list_slugs(&self, content_type: ContentType) -> Result<IndexSet<String>> {
        let mut slugs = IndexSet::new();
        for (slug, result) in self.load_each(content_type)? {
            match result {
                Ok(_) => {
                    slugs.insert(slug);
                }
                Err(e) => tracing::warn!("Skipping {}: {}", slug, e),
            }
        }
        Ok(slugs)
    }

    /// Load every document of a type, keeping per-document failures.
    ///
    /// Only an unreadable content directory fails the whole call.
    pub fn load_each(
        &self,
        content_type: ContentType,
    ) -> Result<Vec<(String, Result<ContentItem>)>> {
        let files = self.discover(content_type)?;
        let mut entries: Vec<(String, PathBuf, Result<ContentItem>)> =
            Vec::with_capacity(files.len());

        for (slug, path) in files {
            // both files of a duplicated slug are unusable
            if let Some((_, first, result)) = entries.iter_mut().find(|(s, _, _)| *s == slug) {
                let err = duplicate_slug(content_type, &slug, first, std::slice::from_ref(&path));
                *result = Err(err);
                continue;
            }

            let result = if is_valid_slug(&slug) {
                self.load_file(content_type, &slug, &path)
            } else {
                Err(ContentError::SchemaViolation {
                    content_type,
                    slug: slug.clone(),
                    violations: vec![FieldViolation::new(
                        "slug",
                        format!(
                            "file name `{}` is not URL-safe (expected something like `{}`)",
                            slug,
                            slug::slugify(&slug)
                        ),
                    )],
                })
            };
            entries.push((slug, path, result));
        }

        Ok(entries
            .into_iter()
            .map(|(slug, _, result)| (slug, result))
            .collect())
    }

    /// Files of a type as `(slug, path)`, sorted by file name
    fn discover(&self, content_type: ContentType) -> Result<Vec<(String, PathBuf)>> {
        let dir = self.dir(content_type);
        if !dir.exists() {
            tracing::debug!("No content directory for {}: {:?}", content_type, dir);
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| ContentError::Io {
                path: dir.clone(),
                source: e.into(),
            })?;
            let path = entry.path();
            if !entry.file_type().is_file() || !self.is_content_file(path) {
                continue;
            }
            if let Some(slug) = path.file_stem().and_then(|s| s.to_str()) {
                // drafts and partials
                if slug.starts_with('_') || slug.starts_with('.') {
                    continue;
                }
                files.push((slug.to_string(), path.to_path_buf()));
            }
        }

        Ok(files)
    }

    fn is_content_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| self.extensions.iter().any(|ext| ext == e))
            .unwrap_or(false)
    }

    fn load_file(&self, content_type: ContentType, slug: &str, path: &Path) -> Result<ContentItem> {
        let content = fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let (raw, body) =
            split_header(&content).map_err(|problem| ContentError::SchemaViolation {
                content_type,
                slug: slug.to_string(),
                violations: vec![FieldViolation::new("frontmatter", problem)],
            })?;

        let frontmatter = validate(content_type, slug, &raw)?;
        tracing::debug!("Loaded {}/{}", content_type, slug);

        Ok(ContentItem {
            content_type,
            slug: slug.to_string(),
            frontmatter,
            body: body.to_string(),
            source: path.to_path_buf(),
        })
    }
}

fn duplicate_slug(
    content_type: ContentType,
    slug: &str,
    first: &Path,
    rest: &[PathBuf],
) -> ContentError {
    let mut files = vec![file_name(first)];
    files.extend(rest.iter().map(|p| file_name(p)));
    ContentError::SchemaViolation {
        content_type,
        slug: slug.to_string(),
        violations: vec![FieldViolation::new(
            "slug",
            format!("defined by more than one file ({})", files.join(", ")),
        )],
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

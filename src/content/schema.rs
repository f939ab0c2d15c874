//! Per-type frontmatter schemas
//!
//! Validation walks the raw header mapping once, collecting every missing or
//! invalid field so a single run reports all of a document's problems.
//! Unknown fields are kept in [`Frontmatter::extra`].

use chrono::NaiveDate;
use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;
use serde_yaml::{Mapping, Value};

use super::frontmatter::{parse_date, Extension, Frontmatter, Seo};
use super::{ContentError, ContentType, FieldViolation, SchemaKind};

lazy_static! {
    static ref SLUG_RE: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();
}

/// Fields every content type understands
const SHARED_FIELDS: &[&str] = &[
    "title",
    "description",
    "slug",
    "layout",
    "seo",
    "related",
    "date",
    "updated",
    "image",
    "author",
    "tags",
    "schema",
];

/// Fields a content type adds on top of the shared ones
fn extension_fields(content_type: ContentType) -> &'static [&'static str] {
    match content_type {
        ContentType::CaseStudies => &["organization", "industry", "logo", "results"],
        ContentType::Updates => &["version"],
        ContentType::Alternatives => &["competitor"],
        ContentType::Glossary => &["term", "synonyms"],
        ContentType::Industries => &["industry"],
        _ => &[],
    }
}

/// Whether `slug` is lowercase, hyphen-separated and URL-safe
pub fn is_valid_slug(slug: &str) -> bool {
    SLUG_RE.is_match(slug)
}

/// Validate a raw header against the schema of `content_type`.
///
/// `file_slug` is the slug taken from the document's file name; the header
/// may repeat it under `slug` but may not contradict it.
pub fn validate(
    content_type: ContentType,
    file_slug: &str,
    raw: &Mapping,
) -> Result<Frontmatter, ContentError> {
    let mut reader = FieldReader::new(raw);

    let title = reader.required_str("title");
    let description = reader.required_str("description");
    let slug = reader.optional_str("slug");
    let layout = reader.optional_str("layout");
    let seo = reader.seo();
    let related = reader.string_list("related");
    let image = reader.optional_str("image");
    let author = reader.optional_str("author");
    let tags = reader.string_list("tags");
    let schema = reader.schema();

    let date = match content_type {
        ContentType::Blog => reader.required_date("date"),
        _ => reader.optional_date("date"),
    };
    let updated = match content_type {
        ContentType::Updates => reader.required_date("updated"),
        _ => reader.optional_date("updated"),
    };

    let extension = match content_type {
        ContentType::CaseStudies => Extension::CaseStudy {
            organization: reader.required_str("organization"),
            industry: reader.optional_str("industry"),
            logo: reader.optional_str("logo"),
            results: reader.string_list("results"),
        },
        ContentType::Updates => Extension::Update {
            version: reader.optional_str("version"),
        },
        ContentType::Alternatives => Extension::Alternative {
            competitor: reader.required_str("competitor"),
        },
        ContentType::Glossary => Extension::GlossaryTerm {
            term: reader.optional_str("term").unwrap_or_else(|| title.clone()),
            synonyms: reader.string_list("synonyms"),
        },
        ContentType::Industries => Extension::Industry {
            industry: reader.optional_str("industry"),
        },
        _ => Extension::None,
    };

    let slug = match slug {
        Some(declared) if declared != file_slug => {
            reader.violation(
                "slug",
                format!("`{}` does not match file name `{}`", declared, file_slug),
            );
            declared
        }
        Some(declared) => declared,
        None => file_slug.to_string(),
    };
    if !is_valid_slug(&slug) {
        reader.violation(
            "slug",
            format!(
                "`{}` is not URL-safe (expected something like `{}`)",
                slug,
                slug::slugify(&slug)
            ),
        );
    }

    for target in &related {
        if !is_valid_slug(target) {
            reader.violation("related", format!("`{}` is not a valid slug", target));
        }
    }

    let extra = reader.extra(extension_fields(content_type));

    if !reader.violations.is_empty() {
        return Err(ContentError::SchemaViolation {
            content_type,
            slug: file_slug.to_string(),
            violations: reader.violations,
        });
    }

    Ok(Frontmatter {
        title,
        description,
        slug,
        layout,
        seo,
        related,
        date,
        updated,
        image,
        author,
        tags,
        schema,
        extension,
        extra,
    })
}

/// Typed access to a header mapping that records violations instead of
/// stopping at the first one
struct FieldReader<'a> {
    raw: &'a Mapping,
    violations: Vec<FieldViolation>,
}

impl<'a> FieldReader<'a> {
    fn new(raw: &'a Mapping) -> Self {
        Self {
            raw,
            violations: Vec::new(),
        }
    }

    fn violation(&mut self, field: &str, problem: impl Into<String>) {
        self.violations.push(FieldViolation::new(field, problem));
    }

    fn get(&self, field: &str) -> Option<&'a Value> {
        match self.raw.get(field) {
            None | Some(Value::Null) => None,
            Some(value) => Some(value),
        }
    }

    fn required_str(&mut self, field: &str) -> String {
        match self.optional_str(field) {
            Some(value) if !value.trim().is_empty() => value,
            Some(_) => {
                self.violation(field, "must not be empty");
                String::new()
            }
            None => {
                if self.get(field).is_none() {
                    self.violation(field, "is required");
                }
                String::new()
            }
        }
    }

    /// Optional, but non-empty when given
    fn present_str(&mut self, field: &str) -> Option<String> {
        match self.optional_str(field) {
            Some(value) if value.trim().is_empty() => {
                self.violation(field, "must not be empty");
                None
            }
            other => other,
        }
    }

    fn optional_str(&mut self, field: &str) -> Option<String> {
        self.get(field).and_then(|value| self.scalar(field, value))
    }

    fn scalar(&mut self, field: &str, value: &Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => {
                self.violation(field, "must be a string");
                None
            }
        }
    }

    /// A single string or a list of strings
    fn string_list(&mut self, field: &str) -> Vec<String> {
        match self.get(field) {
            None => Vec::new(),
            Some(Value::Sequence(items)) => items
                .iter()
                .filter_map(|item| self.scalar(field, item))
                .collect(),
            Some(value) => self.scalar(field, value).into_iter().collect(),
        }
    }

    fn optional_date(&mut self, field: &str) -> Option<NaiveDate> {
        let raw = self.optional_str(field)?;
        let parsed = parse_date(&raw);
        if parsed.is_none() {
            self.violation(field, format!("`{}` is not a date", raw));
        }
        parsed
    }

    fn required_date(&mut self, field: &str) -> Option<NaiveDate> {
        if self.get(field).is_none() {
            self.violation(field, "is required");
            return None;
        }
        self.optional_date(field)
    }

    fn optional_bool(&mut self, field: &str, value: Option<&Value>) -> bool {
        match value {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(_) => {
                self.violation(field, "must be true or false");
                false
            }
        }
    }

    fn schema(&mut self) -> Option<SchemaKind> {
        let raw = self.optional_str("schema")?;
        match raw.parse() {
            Ok(kind) => Some(kind),
            Err(problem) => {
                self.violation("schema", problem);
                None
            }
        }
    }

    fn seo(&mut self) -> Option<Seo> {
        let map = match self.get("seo")? {
            Value::Mapping(map) => map,
            _ => {
                self.violation("seo", "must be a mapping");
                return None;
            }
        };

        let mut nested = FieldReader::new(map);
        let seo = Seo {
            title: nested.present_str("title"),
            description: nested.present_str("description"),
            keywords: nested.string_list("keywords"),
            noindex: {
                let value = nested.get("noindex");
                nested.optional_bool("noindex", value)
            },
            image: nested.optional_str("image"),
        };
        for v in nested.violations {
            self.violation(&format!("seo.{}", v.field), v.problem);
        }
        Some(seo)
    }

    fn extra(&self, extension: &[&str]) -> IndexMap<String, Value> {
        self.raw
            .iter()
            .filter_map(|(key, value)| {
                let key = key.as_str()?;
                if SHARED_FIELDS.contains(&key) || extension.contains(&key) {
                    None
                } else {
                    Some((key.to_string(), value.clone()))
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(yaml: &str) -> Mapping {
        serde_yaml::from_str(yaml).unwrap()
    }

    fn violations(result: Result<Frontmatter, ContentError>) -> Vec<FieldViolation> {
        match result {
            Err(ContentError::SchemaViolation { violations, .. }) => violations,
            other => panic!("expected schema violation, got {:?}", other),
        }
    }

    fn fields(violations: &[FieldViolation]) -> Vec<&str> {
        violations.iter().map(|v| v.field.as_str()).collect()
    }

    #[test]
    fn test_minimal_page() {
        let raw = header("title: X\ndescription: D\n");
        let fm = validate(ContentType::Features, "x", &raw).unwrap();
        assert_eq!(fm.title, "X");
        assert_eq!(fm.description, "D");
        assert_eq!(fm.slug, "x");
        assert!(fm.seo.is_none());
        assert_eq!(fm.extension, Extension::None);
    }

    #[test]
    fn test_missing_fields_are_all_named() {
        let raw = header("layout: article\n");
        let v = violations(validate(ContentType::Blog, "post", &raw));
        assert_eq!(fields(&v), vec!["title", "description", "date"]);
    }

    #[test]
    fn test_empty_title_is_rejected() {
        let raw = header("title: '  '\ndescription: D\n");
        let v = violations(validate(ContentType::Pages, "about", &raw));
        assert_eq!(v, vec![FieldViolation::new("title", "must not be empty")]);
    }

    #[test]
    fn test_blog_requires_parseable_date() {
        let raw = header("title: T\ndescription: D\ndate: someday\n");
        let v = violations(validate(ContentType::Blog, "post", &raw));
        assert_eq!(fields(&v), vec!["date"]);

        let raw = header("title: T\ndescription: D\ndate: 2024-03-01\n");
        let fm = validate(ContentType::Blog, "post", &raw).unwrap();
        assert_eq!(fm.date, NaiveDate::from_ymd_opt(2024, 3, 1));
    }

    #[test]
    fn test_updates_require_updated() {
        let raw = header("title: T\ndescription: D\nversion: 1.2\n");
        let v = violations(validate(ContentType::Updates, "release", &raw));
        assert_eq!(fields(&v), vec!["updated"]);
    }

    #[test]
    fn test_case_study_extension() {
        let raw = header(
            "title: T\ndescription: D\norganization: Acme\nresults:\n  - 2x faster\n",
        );
        let fm = validate(ContentType::CaseStudies, "acme", &raw).unwrap();
        assert_eq!(fm.extension.organization(), Some("Acme"));

        let raw = header("title: T\ndescription: D\n");
        let v = violations(validate(ContentType::CaseStudies, "acme", &raw));
        assert_eq!(fields(&v), vec!["organization"]);
    }

    #[test]
    fn test_glossary_term_defaults_to_title() {
        let raw = header("title: Latency\ndescription: D\nsynonyms: lag\n");
        let fm = validate(ContentType::Glossary, "latency", &raw).unwrap();
        assert_eq!(
            fm.extension,
            Extension::GlossaryTerm {
                term: "Latency".to_string(),
                synonyms: vec!["lag".to_string()],
            }
        );
    }

    #[test]
    fn test_seo_block() {
        let raw = header(
            "title: T\ndescription: D\nseo:\n  title: S\n  keywords: one\n  noindex: true\n",
        );
        let fm = validate(ContentType::Features, "t", &raw).unwrap();
        let seo = fm.seo.unwrap();
        assert_eq!(seo.title.as_deref(), Some("S"));
        assert_eq!(seo.keywords, vec!["one"]);
        assert!(seo.noindex);
    }

    #[test]
    fn test_seo_violations_are_prefixed() {
        let raw = header("title: T\ndescription: D\nseo:\n  noindex: maybe\n");
        let v = violations(validate(ContentType::Features, "t", &raw));
        assert_eq!(fields(&v), vec!["seo.noindex"]);
    }

    #[test]
    fn test_blank_seo_title_and_description_are_rejected() {
        let raw = header("title: X\ndescription: D\nseo:\n  title: ''\n  description: '   '\n");
        let v = violations(validate(ContentType::Features, "x", &raw));
        assert_eq!(fields(&v), vec!["seo.title", "seo.description"]);
        assert!(v.iter().all(|v| v.problem == "must not be empty"));

        let raw = header("title: X\ndescription: D\nseo:\n  title: Better X\n");
        let fm = validate(ContentType::Features, "x", &raw).unwrap();
        assert_eq!(fm.seo_title(), "Better X");
        assert_eq!(fm.seo_description(), "D");
    }

    #[test]
    fn test_slug_must_match_file_name() {
        let raw = header("title: T\ndescription: D\nslug: other\n");
        let v = violations(validate(ContentType::Features, "mine", &raw));
        assert_eq!(fields(&v), vec!["slug"]);
    }

    #[test]
    fn test_slug_must_be_url_safe() {
        let raw = header("title: T\ndescription: D\n");
        let v = violations(validate(ContentType::Features, "Hello World", &raw));
        assert!(v[0].problem.contains("hello-world"));
    }

    #[test]
    fn test_unknown_schema_is_rejected() {
        let raw = header("title: T\ndescription: D\nschema: faq\n");
        let v = violations(validate(ContentType::Concepts, "t", &raw));
        assert_eq!(fields(&v), vec!["schema"]);
    }

    #[test]
    fn test_unknown_fields_are_kept() {
        let raw = header("title: T\ndescription: D\ncta: Book a demo\n");
        let fm = validate(ContentType::Solutions, "t", &raw).unwrap();
        assert_eq!(
            fm.extra.get("cta").and_then(|v| v.as_str()),
            Some("Book a demo")
        );
    }

    #[test]
    fn test_valid_slugs() {
        assert!(is_valid_slug("a"));
        assert!(is_valid_slug("what-is-rag-2"));
        assert!(!is_valid_slug("Trailing-"));
        assert!(!is_valid_slug("double--dash"));
        assert!(!is_valid_slug(""));
    }
}

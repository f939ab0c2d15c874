//! Front-matter model and header splitting

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use indexmap::IndexMap;
use serde::Serialize;
use serde_yaml::{Mapping, Value};

use super::SchemaKind;

/// Search/social overrides declared under `seo:`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Seo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Vec<String>,
    pub noindex: bool,
    pub image: Option<String>,
}

/// Fields only some content types carry
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Extension {
    None,
    CaseStudy {
        organization: String,
        industry: Option<String>,
        logo: Option<String>,
        results: Vec<String>,
    },
    Update {
        version: Option<String>,
    },
    Alternative {
        competitor: String,
    },
    GlossaryTerm {
        term: String,
        synonyms: Vec<String>,
    },
    Industry {
        industry: Option<String>,
    },
}

impl Extension {
    /// The organization a case study is about
    pub fn organization(&self) -> Option<&str> {
        match self {
            Extension::CaseStudy { organization, .. } => Some(organization),
            _ => None,
        }
    }
}

/// Validated front-matter of a document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frontmatter {
    pub title: String,
    pub description: String,
    pub slug: String,
    pub layout: Option<String>,
    pub seo: Option<Seo>,
    pub related: Vec<String>,
    pub date: Option<NaiveDate>,
    pub updated: Option<NaiveDate>,
    pub image: Option<String>,
    pub author: Option<String>,
    pub tags: Vec<String>,
    pub schema: Option<SchemaKind>,
    #[serde(flatten)]
    pub extension: Extension,

    /// Unrecognized fields, kept for forward compatibility
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl Frontmatter {
    /// Title for search engines and social previews
    pub fn seo_title(&self) -> &str {
        self.seo
            .as_ref()
            .and_then(|s| s.title.as_deref())
            .unwrap_or(&self.title)
    }

    /// Description for search engines and social previews
    pub fn seo_description(&self) -> &str {
        self.seo
            .as_ref()
            .and_then(|s| s.description.as_deref())
            .unwrap_or(&self.description)
    }

    pub fn noindex(&self) -> bool {
        self.seo.as_ref().map(|s| s.noindex).unwrap_or(false)
    }

    pub fn keywords(&self) -> &[String] {
        self.seo.as_ref().map(|s| s.keywords.as_slice()).unwrap_or(&[])
    }

    /// Preview image, `seo.image` first
    pub fn image(&self) -> Option<&str> {
        self.seo
            .as_ref()
            .and_then(|s| s.image.as_deref())
            .or(self.image.as_deref())
    }

    /// Most recent date the document declares
    pub fn last_modified(&self) -> Option<NaiveDate> {
        self.updated.or(self.date)
    }
}

/// Split a document into its raw header mapping and body.
///
/// The header is YAML between `---` fences, or JSON between `;;;` fences or
/// as a leading `{...}` object. The error is a human-readable problem.
pub fn split_header(content: &str) -> Result<(Mapping, &str), String> {
    let content = content.trim_start_matches('\u{feff}').trim_start();

    if content.starts_with("---") {
        return split_yaml(content);
    }

    if content.starts_with(";;;") || content.starts_with('{') {
        return split_json(content);
    }

    Err("document has no metadata header".to_string())
}

fn split_yaml(content: &str) -> Result<(Mapping, &str), String> {
    let rest = &content[3..];
    let rest = rest.trim_start_matches([' ', '\t']).trim_start_matches(['\n', '\r']);

    let (yaml, remaining) = if let Some(stripped) = rest.strip_prefix("---") {
        // empty header
        ("", stripped)
    } else {
        let end_pos = rest
            .find("\n---")
            .ok_or_else(|| "metadata header is missing its closing `---`".to_string())?;
        (&rest[..end_pos], &rest[end_pos + 4..])
    };
    let remaining = remaining.trim_start_matches(['\n', '\r']);

    if yaml.trim().is_empty() {
        return Ok((Mapping::new(), remaining));
    }

    match serde_yaml::from_str::<Value>(yaml) {
        Ok(Value::Mapping(map)) => Ok((map, remaining)),
        Ok(Value::Null) => Ok((Mapping::new(), remaining)),
        Ok(_) => Err("metadata header must be a mapping".to_string()),
        Err(e) => Err(format!("metadata header is not valid YAML: {}", e)),
    }
}

fn split_json(content: &str) -> Result<(Mapping, &str), String> {
    let (json, remaining) = if let Some(rest) = content.strip_prefix(";;;") {
        let end_pos = rest
            .find(";;;")
            .ok_or_else(|| "metadata header is missing its closing `;;;`".to_string())?;
        let json = rest[..end_pos].trim();
        // `;;;` fences may hold bare `"key": value` pairs
        let json = if json.starts_with('{') {
            json.to_string()
        } else {
            format!("{{{}}}", json)
        };
        (json, &rest[end_pos + 3..])
    } else {
        let end_pos = matching_brace(content)
            .ok_or_else(|| "metadata header has an unterminated `{`".to_string())?;
        (content[..end_pos].to_string(), &content[end_pos..])
    };
    let remaining = remaining.trim_start_matches(['\n', '\r']);

    match serde_json::from_str::<Value>(&json) {
        Ok(Value::Mapping(map)) => Ok((map, remaining)),
        Ok(_) => Err("metadata header must be an object".to_string()),
        Err(e) => Err(format!("metadata header is not valid JSON: {}", e)),
    }
}

/// Byte offset just past the brace closing the object that opens `content`
fn matching_brace(content: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for (i, c) in content.char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
    }
    None
}

/// Parse a date string in the formats authors use
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    // RFC 3339 / ISO 8601 with offset
    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive())
}

//! Errors raised while resolving content

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use super::ContentType;

/// One missing or invalid frontmatter field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub problem: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, problem: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            problem: problem.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.problem)
    }
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors produced by the content pipeline
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("{content_type}/{slug} not found")]
    NotFound {
        content_type: ContentType,
        slug: String,
    },

    #[error("{content_type}/{slug} has invalid frontmatter: {}", join_violations(.violations))]
    SchemaViolation {
        content_type: ContentType,
        slug: String,
        violations: Vec<FieldViolation>,
    },

    #[error("{content_type}/{slug} declares unknown layout `{layout}`")]
    UnknownLayout {
        content_type: ContentType,
        slug: String,
        layout: String,
    },

    #[error("Unknown content type: {0}")]
    UnknownContentType(String),

    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Coarse classification of a [`ContentError`], used for log routing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    SchemaViolation,
    UnknownLayout,
    Other,
}

impl ContentError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ContentError::NotFound { .. } | ContentError::UnknownContentType(_) => {
                ErrorKind::NotFound
            }
            ContentError::SchemaViolation { .. } => ErrorKind::SchemaViolation,
            ContentError::UnknownLayout { .. } => ErrorKind::UnknownLayout,
            ContentError::Io { .. } => ErrorKind::Other,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

pub type Result<T, E = ContentError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_violation_names_every_field() {
        let err = ContentError::SchemaViolation {
            content_type: ContentType::Blog,
            slug: "hello".to_string(),
            violations: vec![
                FieldViolation::new("title", "is required"),
                FieldViolation::new("date", "is required"),
            ],
        };
        let message = err.to_string();
        assert!(message.contains("blog/hello"));
        assert!(message.contains("title: is required"));
        assert!(message.contains("date: is required"));
        assert_eq!(err.kind(), ErrorKind::SchemaViolation);
    }

    #[test]
    fn test_not_found_kind() {
        let err = ContentError::NotFound {
            content_type: ContentType::Glossary,
            slug: "missing".to_string(),
        };
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "glossary/missing not found");
    }
}

//! Content module - discovery, parsing and validation of documents

mod error;
mod frontmatter;
mod item;
mod kind;
pub mod loader;
mod markdown;
pub mod schema;
mod set;

pub use error::{ContentError, ErrorKind, FieldViolation, Result};
pub use frontmatter::{parse_date, split_header, Extension, Frontmatter, Seo};
pub use item::{ContentItem, DocumentSummary};
pub use kind::{ChangeFrequency, ContentType, SchemaKind};
pub use loader::ContentLoader;
pub use markdown::MarkdownRenderer;
pub use set::ContentSet;

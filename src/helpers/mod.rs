//! Helper functions shared by the projectors and generators

mod html;
mod url;

pub use html::*;
pub use url::*;

//! Error types for descriptor tree parsing and serialization.

use quick_xml::events::attributes::AttrError;

/// Errors produced while reading or writing a project descriptor.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    #[error("XML syntax error: {0}")]
    Syntax(#[from] quick_xml::Error),

    #[error("malformed attribute: {0}")]
    Attr(#[from] AttrError),

    #[error("document has no root element")]
    NoRoot,

    #[error("unexpected second root element <{0}>")]
    MultipleRoots(String),

    #[error("closing tag </{0}> has no matching opening tag")]
    StrayClosingTag(String),

    #[error("document ended inside <{0}>")]
    UnclosedElement(String),
}

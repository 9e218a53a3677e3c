//! Descriptor tree model for SEGGER Embedded Studio project files.
//!
//! A `CrossStudio_Project_File` document is attribute-only XML: every
//! setting lives in an element attribute, and element/attribute order is
//! meaningful (include-path search precedence follows document order).
//! This crate models the document as an owned tree of [`Element`] nodes
//! with ordered attributes and children, plus a codec that reads and
//! writes the on-disk form.

mod codec;
mod element;
mod error;

pub use codec::{parse_document, write_document, DOCTYPE};
pub use element::Element;
pub use error::TreeError;

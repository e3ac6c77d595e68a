//! citation-fixups: text filters for a document-authoring pipeline.
//!
//! This library provides functionality to:
//! - Repair escaped LaTeX citation macros left behind by pandoc
//! - Split an AsciiDoc document around its `== References` section
//! - Number `<<key>>` cross references and `[[key]]` anchors IEEE-style
//!
//! The `fix_cites` and `number_citations` binaries are thin wrappers around
//! these functions; see [`cli`] for their shared plumbing.

pub mod cli;
pub mod escapes;
pub mod numbering;
pub mod sections;

pub use escapes::{count_escaped_cites, fix_cites};
pub use numbering::{number_citations, renumber_references, replace_citations, ReferenceKeys};
pub use sections::{split_sections, Sections};

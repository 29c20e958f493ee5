//! BioQA Corpus — numbered-line document parsing and the `QaStore`.
//!
//! The corpus is a single text document where a line starting with `N.`
//! opens a question and the following unnumbered lines form its answer.

pub mod document;
pub mod loader;

pub use document::BIO_DOCUMENT;
pub use loader::{QaPair, QaStore};

//! conclusio-export
//!
//! Turns collected form values into output: a plain-text preview, an
//! assembled paragraph list, and the final DOCX. Also loads report
//! definitions (catalog, schema, sections, template) from disk.

pub mod assemble;
pub mod catalog;
pub mod docx;
pub mod error;
pub mod preview;
pub mod styles;

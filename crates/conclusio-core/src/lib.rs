//! conclusio-core
//!
//! Shared vocabulary of report generation: field schemas, section layout,
//! templates and their `{{marker}}` placeholders, per-session form values,
//! the marker transform rules and the form session that collects values.
//! No file formats here; loading and export live in `conclusio-export`.

pub mod config;
pub mod error;
pub mod field;
pub mod form;
pub mod rules;
pub mod sections;
pub mod template;
pub mod value;

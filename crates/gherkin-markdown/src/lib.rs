//! Render Gherkin feature files as Markdown documentation.
//!
//! The crate is built around a pure rendering engine: [`render`] walks a
//! parsed [`model::Document`] and produces Markdown, skipping features and
//! scenarios whose tags appear in a [`LabelFilter`]. Around it sit the parser
//! boundary ([`parse`]), which builds the model from Gherkin text with the
//! `gherkin` crate, and the file system boundary ([`convert`]), which converts
//! single files or whole directory trees.
//!
//! # Example
//!
//! ```
//! use gherkin_markdown::{LabelFilter, convert};
//!
//! let markdown = convert(
//!     "Feature: Foo\n  Scenario: Bar\n    Given something\n",
//!     &LabelFilter::none(),
//! )?;
//! assert!(markdown.starts_with("# Foo\n"));
//! assert!(markdown.contains("_Given_ something.\n"));
//! # Ok::<(), gherkin_markdown::Error>(())
//! ```

pub mod convert;
pub mod error;
pub mod filter;
pub mod model;
pub mod parse;
pub mod render;

pub use convert::{convert, convert_file, convert_file_to_string, convert_files};
pub use error::{Error, Result};
pub use filter::LabelFilter;
pub use parse::parse_document;
pub use render::{Renderer, render};

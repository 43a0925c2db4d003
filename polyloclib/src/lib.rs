//! # polyloclib
//!
//! A multi-language source-line counter library that classifies every line of
//! a file as code, comment, and/or blank, using per-language comment
//! delimiters.
//!
//! ## Overview
//!
//! Languages are described purely by their comment delimiters: an optional
//! block-comment start/end pair and an optional end-of-line marker. That is
//! deliberately all the language knowledge the counter has: no tokenizing,
//! no syntax awareness beyond comment markers. A stateful per-line scanner
//! tracks whether a block comment is open across line boundaries, so
//! multi-line block comments are attributed correctly.
//!
//! The pieces:
//!
//! - [`LanguageRegistry`]: owns per-language delimiter specs and running
//!   counters, plus the extension index that maps file extensions (or bare
//!   basenames like `Makefile`) to languages.
//! - [`classify_line`]: the pure per-line classification state machine.
//! - [`count_stream`] / [`count_file`] / [`count_path`]: drive the classifier
//!   over streams, files, and directory trees.
//! - [`register_defaults`]: the built-in language table; [`apply_config_file`]
//!   layers user-defined languages from a TOML file on top.
//! - [`Report`]: sorted per-language rows plus an aggregate total.
//!
//! ## Example
//!
//! ```rust
//! use polyloclib::{count_stream, register_defaults, LanguageRegistry, Report};
//!
//! let mut registry = LanguageRegistry::new();
//! register_defaults(&mut registry).unwrap();
//!
//! let source = "int main(void)\n{\n    return 0; // exit\n}\n";
//! let id = registry.resolve("main.c").unwrap();
//! registry.mark_file_opened(id);
//! count_stream(source.as_bytes(), &mut registry, id);
//!
//! let report = Report::from_registry(&registry);
//! assert_eq!(report.rows[0].language, "C");
//! assert_eq!(report.rows[0].code, 4);
//! assert_eq!(report.rows[0].comment, 1);
//! ```

pub mod classify;
pub mod config;
pub mod counter;
pub mod defaults;
pub mod error;
pub mod registry;
pub mod report;

pub use classify::{classify_line, BlockPair, Classification, Delimiters};
pub use config::{apply_config, apply_config_file, load_config, LanguageConfig};
pub use counter::{count_file, count_path, count_stream};
pub use defaults::register_defaults;
pub use error::PolylocError;
pub use registry::{LangId, LanguageRegistry, LanguageSpec, LineCounters};
pub use report::{Report, ReportRow};

/// Result type for polyloclib operations
pub type Result<T> = std::result::Result<T, PolylocError>;

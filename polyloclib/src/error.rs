//! Error types for polyloclib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during registration, configuration, or counting
#[derive(Error, Debug)]
pub enum PolylocError {
    /// A language defined a block-comment start without an end (or vice versa)
    #[error("language '{language}': 'start_block' and 'end_block' must both be set or both be absent")]
    UnpairedBlockDelimiters { language: String },

    /// A language defined a delimiter as the empty string
    #[error("language '{language}': comment delimiters must not be empty")]
    EmptyDelimiter { language: String },

    /// A configuration record is missing the language name
    #[error("language record is missing required attribute 'name'")]
    MissingLanguageName,

    /// An extension binding referenced a language id that is not in the registry
    #[error("language id {0} is not in the registry")]
    InvalidLanguageId(usize),

    /// Failed to read a configuration file
    #[error("failed to read config file '{path}': {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to parse a configuration file
    #[error("failed to parse config file '{path}': {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// Path does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),
}

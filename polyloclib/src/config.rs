//! Language configuration files.
//!
//! A config file is TOML with an array of `[[language]]` tables:
//!
//! ```toml
//! [[language]]
//! name = "C"
//! extensions = [".c", ".h"]
//! start_block = "/*"
//! end_block = "*/"
//! start_eol = "//"
//! ```
//!
//! The TOML parser hands the registry validated, already-unquoted strings, so
//! delimiter values never need quote-stripping downstream. Records are
//! applied in file order; a record that fails validation (missing name,
//! unpaired block delimiters) is skipped and reported while the rest of the
//! file still applies. Applying a record for an already-registered name
//! replaces that language's delimiters and resets its counters.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PolylocError;
use crate::registry::LanguageRegistry;
use crate::Result;

/// One language record from a configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LanguageConfig {
    /// Language display name. Required; records without it are rejected
    /// during apply rather than failing the whole file parse.
    pub name: Option<String>,
    /// Extensions (with leading dot) or bare basenames to bind
    #[serde(default)]
    pub extensions: Vec<String>,
    /// Block comment start marker
    pub start_block: Option<String>,
    /// Block comment end marker
    pub end_block: Option<String>,
    /// End-of-line comment marker
    pub start_eol: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    language: Vec<LanguageConfig>,
}

/// Load language records from a TOML config file.
pub fn load_config(path: impl AsRef<Path>) -> Result<Vec<LanguageConfig>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| PolylocError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let parsed: ConfigFile = toml::from_str(&text).map_err(|e| PolylocError::ConfigParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(parsed.language)
}

/// Apply config records to a registry.
///
/// Valid records register (or re-register) their language and bind its
/// extensions. Invalid records are skipped; their errors are returned so the
/// caller can report them on its diagnostic channel. Previously registered
/// languages are unaffected by a skipped record.
pub fn apply_config(
    registry: &mut LanguageRegistry,
    records: &[LanguageConfig],
) -> Vec<PolylocError> {
    let mut skipped = Vec::new();

    for record in records {
        let Some(name) = record.name.as_deref() else {
            skipped.push(PolylocError::MissingLanguageName);
            continue;
        };

        let id = match registry.register(
            name,
            record.start_block.as_deref(),
            record.end_block.as_deref(),
            record.start_eol.as_deref(),
        ) {
            Ok(id) => id,
            Err(e) => {
                skipped.push(e);
                continue;
            }
        };

        for ext in &record.extensions {
            // The id came from register above, so binding cannot fail.
            if let Err(e) = registry.bind_extension(id, ext) {
                skipped.push(e);
            }
        }
    }

    skipped
}

/// Load a config file and apply it in one step.
///
/// Returns the per-record errors from [`apply_config`]; a file that cannot
/// be read or parsed fails outright instead.
pub fn apply_config_file(
    registry: &mut LanguageRegistry,
    path: impl AsRef<Path>,
) -> Result<Vec<PolylocError>> {
    let records = load_config(path)?;
    Ok(apply_config(registry, &records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn record(
        name: Option<&str>,
        extensions: &[&str],
        start_block: Option<&str>,
        end_block: Option<&str>,
        start_eol: Option<&str>,
    ) -> LanguageConfig {
        LanguageConfig {
            name: name.map(str::to_string),
            extensions: extensions.iter().map(|s| s.to_string()).collect(),
            start_block: start_block.map(str::to_string),
            end_block: end_block.map(str::to_string),
            start_eol: start_eol.map(str::to_string),
        }
    }

    #[test]
    fn load_and_apply_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("languages.toml");
        fs::write(
            &path,
            r##"
[[language]]
name = "C"
extensions = [".c", ".h"]
start_block = "/*"
end_block = "*/"
start_eol = "//"

[[language]]
name = "Shell"
extensions = [".sh"]
start_eol = "#"
"##,
        )
        .unwrap();

        let mut reg = LanguageRegistry::new();
        let skipped = apply_config_file(&mut reg, &path).unwrap();

        assert!(skipped.is_empty());
        assert!(reg.resolve("main.c").is_some());
        assert!(reg.resolve("run.sh").is_some());
        assert_eq!(reg.language_names(), vec!["C", "Shell"]);
    }

    #[test]
    fn unreadable_config_file_is_an_error() {
        let mut reg = LanguageRegistry::new();
        let err = apply_config_file(&mut reg, "/nonexistent/languages.toml").unwrap_err();
        assert!(matches!(err, PolylocError::ConfigRead { .. }));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[[language\nname = ").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, PolylocError::ConfigParse { .. }));
    }

    #[test]
    fn invalid_record_skipped_others_apply() {
        let records = vec![
            record(Some("Good"), &[".good"], None, None, Some("#")),
            record(Some("Unpaired"), &[".bad"], Some("/*"), None, None),
            record(None, &[".anon"], None, None, Some(";")),
            record(Some("Empty"), &[".bad"], Some(""), Some(""), None),
            record(Some("Late"), &[".late"], Some("<!--"), Some("-->"), None),
        ];

        let mut reg = LanguageRegistry::new();
        let skipped = apply_config(&mut reg, &records);

        assert_eq!(skipped.len(), 3);
        assert!(matches!(
            skipped[0],
            PolylocError::UnpairedBlockDelimiters { .. }
        ));
        assert!(matches!(skipped[1], PolylocError::MissingLanguageName));
        assert!(matches!(skipped[2], PolylocError::EmptyDelimiter { .. }));

        assert_eq!(reg.language_names(), vec!["Good", "Late"]);
        assert!(reg.resolve("x.good").is_some());
        assert!(reg.resolve("x.bad").is_none());
        assert!(reg.resolve("x.late").is_some());
    }

    #[test]
    fn config_overrides_existing_language() {
        let mut reg = LanguageRegistry::new();
        crate::defaults::register_defaults(&mut reg).unwrap();
        let before = reg.resolve("main.c").unwrap();

        let records = vec![record(Some("C"), &[".c99"], None, None, Some("//"))];
        let skipped = apply_config(&mut reg, &records);
        assert!(skipped.is_empty());

        // Same id, new extension bound, old binding untouched.
        assert_eq!(reg.resolve("main.c99"), Some(before));
        assert_eq!(reg.resolve("main.c"), Some(before));
    }
}

//! Language registry: delimiter specifications, extension bindings, and
//! running line counters.
//!
//! The registry is an explicit owned value passed to whoever needs it; there
//! is no process-wide singleton, so independent counting runs (and tests) can
//! each hold their own registry. Specs live in a single owning vector and are
//! addressed by an opaque [`LangId`]; the extension index maps extension
//! strings to ids, never to the specs themselves.

use std::collections::HashMap;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use crate::classify::{Classification, Delimiters};
use crate::error::PolylocError;
use crate::Result;

/// Opaque handle to a registered language.
///
/// Stable for the lifetime of the registry: re-registering a language by name
/// keeps its id, so previously bound extensions continue to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LangId(usize);

/// Line counters accumulated for one language.
///
/// All fields are monotonically non-decreasing during a counting run and are
/// reset to zero when the language is (re-)registered. Field-wise addition is
/// commutative and associative, so independently accumulated counter sets
/// (e.g. from parallel workers) can be merged in any order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineCounters {
    /// Number of files counted
    pub files: u64,
    /// Total number of lines counted
    pub total: u64,
    /// Lines containing code
    pub code: u64,
    /// Lines containing comments
    pub comment: u64,
    /// Lines containing only whitespace
    pub blank: u64,
}

impl LineCounters {
    /// Create a new zeroed counter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one classified line.
    ///
    /// `code` and `comment` are independent flags; a line increments both
    /// when it holds code and a comment. Blank is incremented only when
    /// neither flag is set.
    pub fn record(&mut self, class: Classification) {
        self.total += 1;
        self.code += u64::from(class.code);
        self.comment += u64::from(class.comment);
        self.blank += u64::from(class.is_blank());
    }
}

impl Add for LineCounters {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            files: self.files + other.files,
            total: self.total + other.total,
            code: self.code + other.code,
            comment: self.comment + other.comment,
            blank: self.blank + other.blank,
        }
    }
}

impl AddAssign for LineCounters {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

/// A registered language: its comment delimiters plus accumulated counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSpec {
    /// Display name, unique within the registry (case-sensitive)
    pub name: String,
    /// Comment delimiters
    pub delimiters: Delimiters,
    /// Running counters
    pub counters: LineCounters,
}

/// Owns all [`LanguageSpec`] records and the extension index.
#[derive(Debug, Clone, Default)]
pub struct LanguageRegistry {
    specs: Vec<LanguageSpec>,
    extensions: HashMap<String, LangId>,
}

impl LanguageRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a language, or replace an existing one with the same name.
    ///
    /// `start_block` and `end_block` must both be given or both be omitted,
    /// and no delimiter may be the empty string; a record violating either
    /// rule is rejected without touching the registry.
    /// On re-registration the delimiters are replaced and all counters are
    /// reset to zero (a full reset, not a merge). Lookup is a linear scan
    /// over existing specs, which stays cheap for the tens of languages a
    /// registry realistically holds.
    pub fn register(
        &mut self,
        name: &str,
        start_block: Option<&str>,
        end_block: Option<&str>,
        start_eol: Option<&str>,
    ) -> Result<LangId> {
        if start_block.is_some() != end_block.is_some() {
            return Err(PolylocError::UnpairedBlockDelimiters {
                language: name.to_string(),
            });
        }

        // An empty delimiter would match at every scan position without
        // consuming anything, so the classifier could never advance.
        if [start_block, end_block, start_eol]
            .iter()
            .any(|d| *d == Some(""))
        {
            return Err(PolylocError::EmptyDelimiter {
                language: name.to_string(),
            });
        }

        let delimiters = Delimiters::new(start_block.zip(end_block), start_eol);

        match self.specs.iter().position(|s| s.name == name) {
            Some(idx) => {
                let spec = &mut self.specs[idx];
                spec.delimiters = delimiters;
                spec.counters = LineCounters::new();
                Ok(LangId(idx))
            }
            None => {
                self.specs.push(LanguageSpec {
                    name: name.to_string(),
                    delimiters,
                    counters: LineCounters::new(),
                });
                Ok(LangId(self.specs.len() - 1))
            }
        }
    }

    /// Bind an extension (or bare basename such as `Makefile`) to a language.
    ///
    /// Extensions carry their leading dot. Re-binding an extension silently
    /// overwrites the previous target.
    pub fn bind_extension(&mut self, id: LangId, ext: &str) -> Result<()> {
        if id.0 >= self.specs.len() {
            return Err(PolylocError::InvalidLanguageId(id.0));
        }
        self.extensions.insert(ext.to_string(), id);
        Ok(())
    }

    /// Look up the language bound to an extension string. Exact,
    /// case-sensitive match.
    pub fn lookup(&self, ext: &str) -> Option<LangId> {
        self.extensions.get(ext).copied()
    }

    /// Resolve a file basename to a language.
    ///
    /// Takes the substring from the last `.` onward; a basename with no dot
    /// is looked up whole, which is how extension-less names like `Makefile`
    /// resolve.
    pub fn resolve(&self, basename: &str) -> Option<LangId> {
        let key = match basename.rfind('.') {
            Some(idx) => &basename[idx..],
            None => basename,
        };
        self.lookup(key)
    }

    /// Record one classified line against a language.
    pub fn record_line(&mut self, id: LangId, class: Classification) {
        if let Some(spec) = self.specs.get_mut(id.0) {
            spec.counters.record(class);
        }
    }

    /// Record that a file of this language was opened for counting.
    pub fn mark_file_opened(&mut self, id: LangId) {
        if let Some(spec) = self.specs.get_mut(id.0) {
            spec.counters.files += 1;
        }
    }

    /// The delimiters for a language, for driving the classifier.
    pub fn delimiters(&self, id: LangId) -> Option<&Delimiters> {
        self.specs.get(id.0).map(|s| &s.delimiters)
    }

    /// All registered language names, in registration order.
    pub fn language_names(&self) -> Vec<&str> {
        self.specs.iter().map(|s| s.name.as_str()).collect()
    }

    /// Snapshot of every language that counted at least one file.
    ///
    /// Returned in registration order; reporting applies its own sort.
    pub fn snapshot(&self) -> Vec<(&str, LineCounters)> {
        self.specs
            .iter()
            .filter(|s| s.counters.files > 0)
            .map(|s| (s.name.as_str(), s.counters))
            .collect()
    }
}

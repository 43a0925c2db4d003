//! Stream counting and directory-tree driving.
//!
//! The stream counter reads one open file line by line and feeds each line
//! through the classifier, carrying the block-comment state across lines and
//! recording every result in the registry. The tree driver walks a directory,
//! resolves each regular file through the extension index, and counts the
//! ones that resolve.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use walkdir::WalkDir;

use crate::classify::classify_line;
use crate::error::PolylocError;
use crate::registry::{LangId, LanguageRegistry};
use crate::Result;

/// Count all lines of one open stream against a language.
///
/// Lines are read into a growable buffer, so there is no line-length limit.
/// Bytes are decoded lossily; a stray invalid sequence never aborts the file.
/// An empty stream is zero lines. An unterminated block comment at the end of
/// the stream is not an error; the state is simply discarded with the
/// stream.
pub fn count_stream<R: Read>(reader: R, registry: &mut LanguageRegistry, id: LangId) {
    let Some(delims) = registry.delimiters(id).cloned() else {
        return;
    };

    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();
    let mut in_block = false;

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                let class = classify_line(&line, &delims, in_block);
                in_block = class.in_block_comment;
                registry.record_line(id, class);
            }
            // A read failure mid-file abandons the rest of the file; what
            // was counted so far stands.
            Err(_) => break,
        }
    }
}

/// Count a single file, if its name resolves to a registered language.
///
/// Returns `true` when the file was counted. A file whose extension has no
/// binding is skipped with no counter changes; a file that cannot be opened
/// is also skipped so one unreadable file never aborts a tree scan.
pub fn count_file(registry: &mut LanguageRegistry, path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();

    let Some(basename) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
        return false;
    };
    let Some(id) = registry.resolve(&basename) else {
        return false;
    };

    let Ok(file) = File::open(path) else {
        return false;
    };

    registry.mark_file_opened(id);
    count_stream(file, registry, id);
    true
}

/// Count a file or a whole directory tree.
///
/// Directories are walked recursively; hidden entries (leading `.`) are
/// skipped, as are unreadable directory entries. Returns the number of files
/// counted.
pub fn count_path(registry: &mut LanguageRegistry, path: impl AsRef<Path>) -> Result<u64> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(PolylocError::PathNotFound(path.to_path_buf()));
    }

    if path.is_file() {
        return Ok(u64::from(count_file(registry, path)));
    }

    let mut counted = 0;
    let walker = WalkDir::new(path).follow_links(true).into_iter();

    for entry in walker.filter_entry(|e| {
        if e.depth() == 0 {
            return true;
        }
        !e.file_name().to_string_lossy().starts_with('.')
    }) {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        if entry.file_type().is_file() && count_file(registry, entry.path()) {
            counted += 1;
        }
    }

    Ok(counted)
}

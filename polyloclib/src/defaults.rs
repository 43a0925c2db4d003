//! Built-in language definitions.
//!
//! Registered before any user configuration so the counter works out of the
//! box; a config file can override any entry by re-registering its name.

use crate::registry::LanguageRegistry;
use crate::Result;

/// Name, extensions, block start/end pair, EOL marker.
type LangDef = (
    &'static str,
    &'static [&'static str],
    Option<(&'static str, &'static str)>,
    Option<&'static str>,
);

const DEFAULT_LANGUAGES: &[LangDef] = &[
    ("Ada", &[".adb", ".ads"], None, Some("--")),
    ("Assembly", &[".asm", ".s"], None, Some(";")),
    ("C", &[".c", ".h"], Some(("/*", "*/")), Some("//")),
    ("C++", &[".cc", ".hh", ".cpp", ".hpp"], Some(("/*", "*/")), Some("//")),
    ("Clojure", &[".clj", ".edn"], None, Some(";")),
    ("D", &[".d"], Some(("/*", "*/")), Some("//")),
    ("Eiffel", &[".e"], None, Some("--")),
    ("Erlang", &[".erl", ".hrl"], None, Some("%")),
    ("Forth", &[".4th", ".fs"], Some(("( ", ")")), Some("\\ ")),
    ("Fortran", &[".f77", ".f95"], None, Some("!")),
    ("Go", &[".go"], Some(("/*", "*/")), Some("//")),
    ("Haskell", &[".hs", ".lhs"], Some(("{-", "-}")), Some("--")),
    ("HTML", &[".htm", ".html"], Some(("<!--", "-->")), None),
    ("Java", &[".java"], Some(("/*", "*/")), Some("//")),
    ("JavaScript", &[".js"], Some(("/*", "*/")), Some("//")),
    ("Julia", &[".jl"], None, Some("#")),
    ("LaTeX", &[".tex"], None, Some("%")),
    ("Lisp", &[".lsp", ".lisp"], None, Some(";")),
    ("Lout", &[".lout"], None, Some("#")),
    ("Lua", &[".lua"], Some(("--[[", "]]")), Some("--")),
    ("Make", &["Makefile"], None, Some("#")),
    ("Markdown", &[".md"], None, None),
    ("MATLAB", &[".mat"], Some(("%{", "%}")), Some("%")),
    ("Objective-C", &[".m"], Some(("/*", "*/")), Some("//")),
    ("OCaml", &[".ml"], Some(("(*", "*)")), None),
    ("Perl", &[".pl", ".pm"], None, Some("#")),
    ("PHP", &[".php"], Some(("/*", "*/")), Some("//")),
    ("Prolog", &[".pro"], Some(("/*", "*/")), Some("%")),
    ("Python", &[".py"], Some(("\"\"\"", "\"\"\"")), Some("#")),
    ("R", &[".r", ".R"], None, Some("#")),
    ("Ruby", &[".rb", ".rbw"], None, Some("#")),
    ("Rust", &[".rs"], Some(("/*", "*/")), Some("//")),
    ("Scala", &[".scala"], Some(("/*", "*/")), Some("//")),
    ("Scheme", &[".scm"], None, Some(";")),
    ("Shell", &[".sh", ".bash"], None, Some("#")),
    ("Smalltalk", &[".sm", ".st"], Some(("\"", "\"")), None),
    ("SQL", &[".sql"], Some(("/*", "*/")), Some("--")),
    ("Tcl", &[".tcl"], None, Some("#")),
    ("Vala", &[".vala"], Some(("/*", "*/")), Some("//")),
    ("Verilog", &[".v", ".vh"], Some(("/*", "*/")), Some("//")),
    ("Vimscript", &[".vim"], None, Some("\"")),
    ("VHDL", &[".vhdl"], None, Some("--")),
];

/// Register the built-in language set into `registry`.
pub fn register_defaults(registry: &mut LanguageRegistry) -> Result<()> {
    for (name, extensions, block, eol) in DEFAULT_LANGUAGES {
        let id = registry.register(
            name,
            block.map(|(start, _)| start),
            block.map(|(_, end)| end),
            *eol,
        )?;
        for ext in *extensions {
            registry.bind_extension(id, ext)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_register_cleanly() {
        let mut reg = LanguageRegistry::new();
        register_defaults(&mut reg).unwrap();

        assert!(reg.language_names().contains(&"C"));
        assert!(reg.resolve("main.c").is_some());
        assert!(reg.resolve("Makefile").is_some());
        assert!(reg.resolve("script.py").is_some());
        assert!(reg.resolve("unknown.zzz").is_none());
    }

    #[test]
    fn default_names_are_unique() {
        let mut reg = LanguageRegistry::new();
        register_defaults(&mut reg).unwrap();

        let names = reg.language_names();
        let mut deduped = names.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(names.len(), deduped.len());
    }
}

use crate::ports::outbound::ImportScanner;
use crate::shared::error::DepsnapError;
use crate::shared::Result;
use regex::Regex;
use std::collections::HashSet;
use std::path::Path;
use walkdir::WalkDir;

/// Top-level standard-library module names that never count as external
/// dependencies. Covers the modules commonly imported by project code;
/// an exhaustive list is not required because unknown names simply fall
/// through to the flattener, which yields an empty mapping for them.
const STDLIB_MODULES: &[&str] = &[
    "abc", "argparse", "array", "ast", "asyncio", "base64", "bisect", "builtins", "calendar",
    "collections", "concurrent", "configparser", "contextlib", "copy", "csv", "ctypes",
    "dataclasses", "datetime", "decimal", "difflib", "dis", "email", "enum", "errno", "fnmatch",
    "fractions", "functools", "gc", "getpass", "glob", "gzip", "hashlib", "heapq", "hmac", "html",
    "http", "importlib", "inspect", "io", "itertools", "json", "keyword", "logging", "math",
    "mimetypes", "multiprocessing", "operator", "os", "pathlib", "pickle", "platform", "pprint",
    "queue", "random", "re", "secrets", "select", "shlex", "shutil", "signal", "site", "socket",
    "sqlite3", "ssl", "stat", "statistics", "string", "struct", "subprocess", "sys", "tarfile",
    "tempfile", "textwrap", "threading", "time", "timeit", "tkinter", "token", "tokenize",
    "traceback", "types", "typing", "unicodedata", "unittest", "urllib", "uuid", "venv",
    "warnings", "weakref", "xml", "zipfile", "zlib",
];

/// SourceImportScanner adapter for discovering surface-level dependencies
///
/// Walks the project folder's `.py` files and extracts the top-level
/// module name of every `import X` / `from X import ...` statement,
/// dropping standard-library modules, relative imports, and modules
/// defined inside the project itself.
pub struct SourceImportScanner {
    import_pattern: Regex,
}

impl SourceImportScanner {
    pub fn new() -> Self {
        // `from X import ...` names exactly one module; `import a, b as c`
        // can name several, so the whole list is captured and split later.
        // Relative imports (`from . import x`) never match because the
        // first capture requires an identifier start.
        let import_pattern = Regex::new(
            r"(?m)^\s*(?:from\s+([A-Za-z_][A-Za-z0-9_.]*)|import\s+([^\r\n#]+))",
        )
        .expect("static regex");
        Self { import_pattern }
    }

    fn imports_in_source(&self, source: &str) -> Vec<String> {
        let mut names = Vec::new();
        for captures in self.import_pattern.captures_iter(source) {
            if let Some(module) = captures.get(1) {
                names.extend(Self::top_level_name(module.as_str()));
            } else if let Some(module_list) = captures.get(2) {
                for fragment in module_list.as_str().split(',') {
                    names.extend(Self::top_level_name(fragment));
                }
            }
        }
        names
    }

    /// Reduces one imported module path to its top-level name, dropping
    /// `as` aliases and any trailing punctuation.
    fn top_level_name(fragment: &str) -> Option<String> {
        let module = fragment.split_whitespace().next()?;
        let top: String = module
            .split('.')
            .next()?
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric() || *c == '_')
            .collect();
        let starts_like_identifier = top
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
        starts_like_identifier.then_some(top)
    }

    /// Collects names defined by the project itself: `.py` file stems and
    /// package directories. Imports of those are not external dependencies.
    fn local_module_names(folder: &Path) -> HashSet<String> {
        let mut local = HashSet::new();
        for entry in WalkDir::new(folder).into_iter().flatten() {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "py") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    local.insert(stem.to_string());
                }
            } else if path.is_dir() && path.join("__init__.py").exists() {
                if let Some(name) = path.file_name().and_then(|s| s.to_str()) {
                    local.insert(name.to_string());
                }
            }
        }
        local
    }
}

impl Default for SourceImportScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportScanner for SourceImportScanner {
    fn surface_imports(&self, folder: &Path) -> Result<Vec<String>> {
        let local_modules = Self::local_module_names(folder);

        let mut seen = HashSet::new();
        let mut imports = Vec::new();

        // Sorted traversal keeps discovery order, and therefore merge
        // order, deterministic across runs.
        let walker = WalkDir::new(folder)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "py"));

        for entry in walker {
            let source = std::fs::read_to_string(entry.path()).map_err(|e| {
                DepsnapError::ScanError {
                    path: entry.path().to_path_buf(),
                    details: e.to_string(),
                }
            })?;

            for name in self.imports_in_source(&source) {
                if STDLIB_MODULES.contains(&name.as_str()) || local_modules.contains(&name) {
                    continue;
                }
                if seen.insert(name.clone()) {
                    imports.push(name);
                }
            }
        }

        Ok(imports)
    }
}

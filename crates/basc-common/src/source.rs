//! Source locations attached to symbol declarations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Where a symbol was declared. Provenance for diagnostics only; it never
/// participates in symbol identity or equality.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclSite {
    /// 1-based source line, if known.
    pub line: Option<u32>,
    /// Source file name, if known. Shared since many symbols come from the
    /// same file.
    pub file: Option<Arc<str>>,
}

impl DeclSite {
    pub fn new(line: u32, file: impl Into<Arc<str>>) -> DeclSite {
        DeclSite {
            line: Some(line),
            file: Some(file.into()),
        }
    }

    /// A declaration with a line but no file (e.g. REPL or generated code).
    pub fn at_line(line: u32) -> DeclSite {
        DeclSite {
            line: Some(line),
            file: None,
        }
    }

    pub fn unknown() -> DeclSite {
        DeclSite::default()
    }
}

impl fmt::Display for DeclSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.file, self.line) {
            (Some(file), Some(line)) => write!(f, "{file}:{line}"),
            (Some(file), None) => write!(f, "{file}"),
            (None, Some(line)) => write!(f, "line {line}"),
            (None, None) => write!(f, "<unknown>"),
        }
    }
}

//! Compile diagnostics.
//!
//! Domain errors in the symbol core (duplicate declarations, unused labels)
//! are reported as [`Diagnostic`] values accumulated in a [`DiagnosticBag`]
//! rather than aborting the compilation, so one run can surface many errors.
//! The driver decides when to stop, using the `max_errors` option.

use crate::source::DeclSite;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticCategory {
    Warning,
    Error,
}

/// Stable diagnostic codes.
pub mod diagnostic_codes {
    pub const DUPLICATE_SYMBOL: u32 = 100;
    pub const UNUSED_LABEL: u32 = 101;
    pub const CONFLICTING_ALIAS: u32 = 102;
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub category: DiagnosticCategory,
    pub code: u32,
    pub message: String,
    pub site: DeclSite,
    /// A second location involved in the problem, e.g. the previous
    /// declaration of a duplicated symbol.
    pub related_site: Option<DeclSite>,
}

impl Diagnostic {
    pub fn error(code: u32, message: impl Into<String>, site: DeclSite) -> Diagnostic {
        Diagnostic {
            category: DiagnosticCategory::Error,
            code,
            message: message.into(),
            site,
            related_site: None,
        }
    }

    pub fn warning(code: u32, message: impl Into<String>, site: DeclSite) -> Diagnostic {
        Diagnostic {
            category: DiagnosticCategory::Warning,
            code,
            message: message.into(),
            site,
            related_site: None,
        }
    }

    pub fn with_related(mut self, site: DeclSite) -> Diagnostic {
        self.related_site = Some(site);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.category {
            DiagnosticCategory::Warning => "warning",
            DiagnosticCategory::Error => "error",
        };
        write!(f, "{}: {tag}[{}]: {}", self.site, self.code, self.message)
    }
}

/// Push-only accumulator for batch error reporting.
///
/// Pushing past the configured error limit is permitted; honoring the limit
/// is the driver's job (see [`DiagnosticBag::has_reached_limit`]).
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DiagnosticBag {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
}

impl DiagnosticBag {
    pub fn new() -> DiagnosticBag {
        DiagnosticBag::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        if diagnostic.category == DiagnosticCategory::Error {
            self.error_count += 1;
        }
        self.diagnostics.push(diagnostic);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics.len() - self.error_count
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    pub fn has_reached_limit(&self, max_errors: usize) -> bool {
        self.error_count >= max_errors
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }
}

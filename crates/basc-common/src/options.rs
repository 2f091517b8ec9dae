//! Compile options consumed by the symbol core.
//!
//! This is a plain-data snapshot of the driver's configuration, passed
//! explicitly to the passes that need it. Parsing command lines or project
//! files is the driver's business, not ours.

use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_ERRORS: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    /// Identifiers compare case-insensitively (classic BASIC behavior).
    /// Affects mangled-name collision keys.
    pub case_insensitive: bool,
    /// Lower bound of array indexes (DIM a(10) starts at this index).
    pub array_base: u8,
    /// Lower bound of string indexes.
    pub string_base: u8,
    /// 0 disables the dead-code marking pass: every symbol is conservatively
    /// treated as accessed.
    pub optimization_level: u8,
    /// Stop compiling after this many errors have been reported.
    pub max_errors: usize,
}

impl Default for Options {
    fn default() -> Options {
        Options {
            case_insensitive: false,
            array_base: 0,
            string_base: 0,
            optimization_level: 1,
            max_errors: DEFAULT_MAX_ERRORS,
        }
    }
}

impl Options {
    /// Whether the optimizer should run accessed-propagation at all.
    pub fn dead_code_marking_enabled(&self) -> bool {
        self.optimization_level > 0
    }
}

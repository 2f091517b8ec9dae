//! Common types and utilities for the basc BASIC compiler.
//!
//! This crate provides foundational types used across all basc crates:
//! - Compile diagnostics and batch error accumulation (`Diagnostic`,
//!   `DiagnosticBag`)
//! - The compile options store (`Options`)
//! - Target architecture constants (`TargetArch`)
//! - Source locations for diagnostics (`DeclSite`)

pub mod arch;
pub mod diagnostics;
pub mod options;
pub mod source;

pub use arch::TargetArch;
pub use diagnostics::{Diagnostic, DiagnosticBag, DiagnosticCategory};
pub use options::Options;
pub use source::DeclSite;

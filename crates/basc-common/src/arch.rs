//! Target architecture constants.
//!
//! Each backend contributes a mangling prefix and a labels namespace; the
//! symbol core substitutes them verbatim into mangled names. The selected
//! architecture is an explicit value threaded through construction, never
//! process-global state, so several compilation units (or architectures)
//! can coexist in one process.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetArch {
    pub name: &'static str,
    /// Prepended to every mangled identifier.
    pub mangle_prefix: &'static str,
    /// Namespace under which label symbols are mangled.
    pub labels_namespace: &'static str,
}

impl TargetArch {
    /// ZX Spectrum 48K (Z80 backend).
    pub const ZX48K: TargetArch = TargetArch {
        name: "zx48k",
        mangle_prefix: "_",
        labels_namespace: ".LABEL",
    };

    pub const AVAILABLE: &'static [TargetArch] = &[TargetArch::ZX48K];

    pub fn by_name(name: &str) -> Option<TargetArch> {
        TargetArch::AVAILABLE.iter().copied().find(|a| a.name == name)
    }

    /// An ad-hoc architecture, mainly for tests and embedding.
    pub const fn custom(
        name: &'static str,
        mangle_prefix: &'static str,
        labels_namespace: &'static str,
    ) -> TargetArch {
        TargetArch {
            name,
            mangle_prefix,
            labels_namespace,
        }
    }
}

impl Default for TargetArch {
    fn default() -> TargetArch {
        TargetArch::ZX48K
    }
}

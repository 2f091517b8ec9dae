//! Symbol records.
//!
//! A [`Symbol`] is one node of the symbol forest: a per-class payload
//! ([`SymbolKind`]) plus the fields every named entity shares (name,
//! declaration site, semantic class, accessed flag). Bare structural nodes
//! use [`SymbolKind::Node`] and carry no name.

use basc_common::{DeclSite, TargetArch};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Index of a symbol within its [`crate::SymbolArena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbolId(pub u32);

impl SymbolId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Semantic class of a named symbol.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SymbolClass {
    #[default]
    Unknown,
    Label,
    Function,
    Sub,
    Var,
    Const,
    Param,
    Array,
}

/// Deterministic assembly-level name: `<namespace>.<prefix><name>`.
///
/// The namespace and prefix come from the target architecture and the
/// enclosing procedure; for a fixed triple the result is always identical.
pub fn mangle(namespace: &str, prefix: &str, name: &str) -> String {
    format!("{namespace}.{prefix}{name}")
}

/// Payload of a label symbol (a jump/call target).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LabelData {
    /// Computed once at construction; immutable afterwards.
    pub(crate) mangled: String,
    /// Enclosing function symbols whose bodies lexically contain this
    /// label. Empty for module-scope labels.
    pub(crate) scope_owners: SmallVec<[SymbolId; 2]>,
    /// Symbols known to alias this label's address. Append-only; duplicate
    /// additions are kept since each records a distinct syntactic event.
    pub(crate) aliased_by: Vec<SymbolId>,
}

/// Payload of a single parameter declaration.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ParamData {
    /// Bytes this parameter occupies in the stack frame. For by-reference
    /// parameters the caller passes the pointer size here.
    pub size: u32,
    /// Frame offset. Assigned on first append to a parameter list; once
    /// assigned it never changes.
    pub offset: Option<u32>,
    pub byref: bool,
}

/// Payload of a parameter list: the running frame size.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct ParamListData {
    pub size: u32,
}

/// Closed set of symbol variants. The variant doubles as the node's token
/// tag: passes dispatch on it by pattern matching.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum SymbolKind {
    /// Bare structural tree node with no identity.
    Node,
    /// Plain named symbol (function, variable, constant).
    Ident,
    Label(LabelData),
    ParamDecl(ParamData),
    ParamList(ParamListData),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Symbol {
    pub kind: SymbolKind,
    pub(crate) children: Vec<SymbolId>,
    name: Option<String>,
    pub class: SymbolClass,
    pub decl: DeclSite,
    pub(crate) accessed: bool,
    /// Symbolic type name used by the mangler and codegen (e.g. "u16",
    /// "str"). Not interpreted by this crate.
    pub type_name: Option<String>,
}

impl Symbol {
    fn base(kind: SymbolKind, name: Option<String>, class: SymbolClass, decl: DeclSite) -> Symbol {
        Symbol {
            kind,
            children: Vec::new(),
            name,
            class,
            decl,
            accessed: false,
            type_name: None,
        }
    }

    /// A bare structural node.
    pub fn node() -> Symbol {
        Symbol::base(SymbolKind::Node, None, SymbolClass::Unknown, DeclSite::unknown())
    }

    /// A plain named symbol of the given class.
    pub fn ident(name: impl Into<String>, class: SymbolClass, decl: DeclSite) -> Symbol {
        Symbol::base(SymbolKind::Ident, Some(name.into()), class, decl)
    }

    pub fn function(name: impl Into<String>, decl: DeclSite) -> Symbol {
        Symbol::ident(name, SymbolClass::Function, decl)
    }

    /// A label symbol. The mangled name is computed here, once; duplicate
    /// detection against a namespace is the symbol table's job, keyed by
    /// this value.
    pub fn label(
        name: impl Into<String>,
        decl: DeclSite,
        namespace: &str,
        mangle_prefix: &str,
    ) -> Symbol {
        let name = name.into();
        let mangled = mangle(namespace, mangle_prefix, &name);
        Symbol::base(
            SymbolKind::Label(LabelData {
                mangled,
                scope_owners: SmallVec::new(),
                aliased_by: Vec::new(),
            }),
            Some(name),
            SymbolClass::Label,
            decl,
        )
    }

    /// A label mangled under the architecture's default labels namespace.
    pub fn label_for(name: impl Into<String>, decl: DeclSite, arch: &TargetArch) -> Symbol {
        Symbol::label(name, decl, arch.labels_namespace, arch.mangle_prefix)
    }

    /// A by-value parameter declaration of `size` bytes, offset unassigned.
    pub fn param(name: impl Into<String>, decl: DeclSite, size: u32) -> Symbol {
        Symbol::base(
            SymbolKind::ParamDecl(ParamData {
                size,
                offset: None,
                byref: false,
            }),
            Some(name.into()),
            SymbolClass::Param,
            decl,
        )
    }

    /// A by-reference parameter; `ptr_size` is the target's pointer size.
    pub fn param_byref(name: impl Into<String>, decl: DeclSite, ptr_size: u32) -> Symbol {
        let mut sym = Symbol::param(name, decl, ptr_size);
        if let SymbolKind::ParamDecl(data) = &mut sym.kind {
            data.byref = true;
        }
        sym
    }

    /// A parameter re-attached from elsewhere with its offset already
    /// assigned. Appending it to a list will not advance the running size.
    pub fn param_at(name: impl Into<String>, decl: DeclSite, size: u32, offset: u32) -> Symbol {
        let mut sym = Symbol::param(name, decl, size);
        if let SymbolKind::ParamDecl(data) = &mut sym.kind {
            data.offset = Some(offset);
        }
        sym
    }

    /// An empty parameter list.
    pub fn param_list() -> Symbol {
        Symbol::base(
            SymbolKind::ParamList(ParamListData::default()),
            None,
            SymbolClass::Unknown,
            DeclSite::unknown(),
        )
    }

    /// The source-level name. `None` for bare structural nodes. Immutable
    /// after construction.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn accessed(&self) -> bool {
        self.accessed
    }

    /// The mangled assembly name, for label symbols.
    pub fn mangled(&self) -> Option<&str> {
        match &self.kind {
            SymbolKind::Label(data) => Some(&data.mangled),
            _ => None,
        }
    }

    pub fn is_label(&self) -> bool {
        matches!(self.kind, SymbolKind::Label(_))
    }

    pub fn is_param_list(&self) -> bool {
        matches!(self.kind, SymbolKind::ParamList(_))
    }

    /// Frame offset, for parameter declarations that have been placed.
    pub fn offset(&self) -> Option<u32> {
        match &self.kind {
            SymbolKind::ParamDecl(data) => data.offset,
            _ => None,
        }
    }

    /// Size in bytes: a parameter's own size, or a parameter list's total
    /// frame size.
    pub fn size(&self) -> u32 {
        match &self.kind {
            SymbolKind::ParamDecl(data) => data.size,
            SymbolKind::ParamList(data) => data.size,
            _ => 0,
        }
    }
}

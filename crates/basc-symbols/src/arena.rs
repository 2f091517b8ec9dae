//! Arena storage for the symbol forest.
//!
//! Symbols are stored contiguously and referenced by [`SymbolId`]. The
//! arena owns everything; tree edges and semantic cross-references are ids,
//! never owning pointers, so back-references (a label's scope owners, its
//! aliases) cannot form ownership cycles.
//!
//! Operations with cross-symbol side effects (accessed propagation, scope
//! owner reassignment, parameter offset assignment) live here rather than
//! on [`Symbol`], since they need to reach other records.

use crate::symbol::{Symbol, SymbolId, SymbolKind};
use serde::Serialize;
use smallvec::SmallVec;
use tracing::debug;

#[derive(Debug, Default, Serialize)]
pub struct SymbolArena {
    symbols: Vec<Symbol>,
}

impl SymbolArena {
    pub fn new() -> SymbolArena {
        SymbolArena {
            symbols: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> SymbolArena {
        SymbolArena {
            symbols: Vec::with_capacity(capacity),
        }
    }

    /// Add a symbol and return its id.
    pub fn alloc(&mut self, symbol: Symbol) -> SymbolId {
        let id = SymbolId(self.symbols.len() as u32);
        self.symbols.push(symbol);
        id
    }

    pub fn get(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.get(id.index())
    }

    pub fn get_mut(&mut self, id: SymbolId) -> Option<&mut Symbol> {
        self.symbols.get_mut(id.index())
    }

    /// Panics on an id from another arena. Internal passes use this; the
    /// fallible [`SymbolArena::get`] is for callers holding foreign ids.
    fn sym(&self, id: SymbolId) -> &Symbol {
        &self.symbols[id.index()]
    }

    fn sym_mut(&mut self, id: SymbolId) -> &mut Symbol {
        &mut self.symbols[id.index()]
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SymbolId, &Symbol)> {
        self.symbols
            .iter()
            .enumerate()
            .map(|(i, s)| (SymbolId(i as u32), s))
    }

    // Tree operations

    /// Append `child` to `parent`'s ordered child list.
    ///
    /// Contract: `child` must not already contain `parent` in its subtree.
    /// Callers only ever append freshly built or freshly detached nodes, so
    /// this is an internal-invariant assert, not a recoverable error.
    pub fn append_child(&mut self, parent: SymbolId, child: SymbolId) {
        assert!(
            parent != child && !self.is_descendant(child, parent),
            "append_child would create a cycle"
        );
        self.sym_mut(parent).children.push(child);
    }

    /// Ordered children of a node.
    pub fn children(&self, id: SymbolId) -> &[SymbolId] {
        &self.sym(id).children
    }

    pub fn child(&self, id: SymbolId, index: usize) -> Option<SymbolId> {
        self.sym(id).children.get(index).copied()
    }

    /// Replace the child at `index`, returning the orphaned previous
    /// occupant. The same cycle contract as [`SymbolArena::append_child`]
    /// applies to the replacement.
    pub fn set_child(&mut self, id: SymbolId, index: usize, new: SymbolId) -> Option<SymbolId> {
        assert!(
            id != new && !self.is_descendant(new, id),
            "set_child would create a cycle"
        );
        let children = &mut self.sym_mut(id).children;
        let slot = children.get_mut(index)?;
        Some(std::mem::replace(slot, new))
    }

    /// Whether `target` appears in the subtree rooted at `root`.
    fn is_descendant(&self, root: SymbolId, target: SymbolId) -> bool {
        let mut work: Vec<SymbolId> = self.sym(root).children.clone();
        while let Some(id) = work.pop() {
            if id == target {
                return true;
            }
            work.extend_from_slice(&self.sym(id).children);
        }
        false
    }

    // Accessed propagation

    /// Mark a symbol as used. For labels this cascades to every current
    /// scope owner, recursively, so a dead-code pass can drop whole
    /// functions whose only reachability evidence is a label inside them.
    ///
    /// The already-accessed short-circuit makes the walk idempotent and
    /// guarantees termination even if owner relations were ever cyclic.
    pub fn mark_accessed(&mut self, id: SymbolId) {
        let mut work: SmallVec<[SymbolId; 8]> = SmallVec::new();
        work.push(id);
        while let Some(id) = work.pop() {
            let sym = self.sym_mut(id);
            if sym.accessed {
                continue;
            }
            sym.accessed = true;
            if let SymbolKind::Label(data) = &sym.kind {
                if !data.scope_owners.is_empty() {
                    debug!(
                        label = sym.name(),
                        owners = data.scope_owners.len(),
                        "propagating accessed mark to scope owners"
                    );
                }
                work.extend(data.scope_owners.iter().copied());
            }
        }
    }

    /// Conservative fallback for unoptimized builds: treat every symbol as
    /// used. Propagation is pointless here since the marking is total.
    pub fn mark_all_accessed(&mut self) {
        for sym in &mut self.symbols {
            sym.accessed = true;
        }
    }

    // Label operations

    /// Replace a label's scope owner list. If the label is already marked
    /// accessed, the mark is propagated over the new owners, so owners
    /// assigned after the fact still receive it.
    pub fn set_scope_owners(&mut self, id: SymbolId, owners: &[SymbolId]) {
        let accessed = {
            let sym = self.sym_mut(id);
            let SymbolKind::Label(data) = &mut sym.kind else {
                panic!("set_scope_owners on a non-label symbol");
            };
            data.scope_owners = SmallVec::from_slice(owners);
            sym.accessed
        };
        if accessed {
            for &owner in owners {
                self.mark_accessed(owner);
            }
        }
    }

    /// A defensive copy: mutating ownership must go through
    /// [`SymbolArena::set_scope_owners`] so re-propagation runs.
    pub fn scope_owners(&self, id: SymbolId) -> Vec<SymbolId> {
        match &self.sym(id).kind {
            SymbolKind::Label(data) => data.scope_owners.to_vec(),
            _ => Vec::new(),
        }
    }

    /// Record that `alias` is an alias of label `id`. Append-only;
    /// duplicates are kept since each addition carries its own provenance.
    pub fn add_alias(&mut self, id: SymbolId, alias: SymbolId) {
        assert!(alias.index() < self.symbols.len(), "alias target out of range");
        let sym = self.sym_mut(id);
        let SymbolKind::Label(data) = &mut sym.kind else {
            panic!("add_alias on a non-label symbol");
        };
        data.aliased_by.push(alias);
    }

    pub fn aliases(&self, id: SymbolId) -> &[SymbolId] {
        match &self.sym(id).kind {
            SymbolKind::Label(data) => &data.aliased_by,
            _ => &[],
        }
    }

    // Parameter lists

    /// Append a parameter declaration to a parameter list, assigning its
    /// frame offset if it has none: the list's running size at the moment
    /// of insertion. Parameters that already carry an offset (re-attached
    /// from a nested or partial build) keep it, and the running size is not
    /// advanced for them.
    pub fn append_param(&mut self, list: SymbolId, param: SymbolId) {
        let (param_size, has_offset) = match &self.sym(param).kind {
            SymbolKind::ParamDecl(data) => (data.size, data.offset.is_some()),
            _ => panic!("append_param with a non-parameter child"),
        };
        let running = match &self.sym(list).kind {
            SymbolKind::ParamList(data) => data.size,
            _ => panic!("append_param on a non-parameter-list node"),
        };
        self.append_child(list, param);
        if !has_offset {
            if let SymbolKind::ParamDecl(data) = &mut self.sym_mut(param).kind {
                data.offset = Some(running);
            }
            if let SymbolKind::ParamList(data) = &mut self.sym_mut(list).kind {
                data.size = running + param_size;
            }
        }
    }

    /// Build or extend the parameter list of a function header.
    ///
    /// - `existing` absent: start a fresh list.
    /// - `existing` is a single bare parameter (the one-parameter grammar
    ///   production): wrap it in a fresh list, ahead of `params`, so both
    ///   productions converge on the same representation.
    /// - otherwise append each present param in order.
    ///
    /// Callers must use the returned id; the wrap case builds a node
    /// different from the one passed in.
    pub fn make_param_list(
        &mut self,
        existing: Option<SymbolId>,
        params: &[Option<SymbolId>],
    ) -> SymbolId {
        let list = match existing {
            None => self.alloc(Symbol::param_list()),
            Some(id) if !self.sym(id).is_param_list() => {
                let fresh = self.alloc(Symbol::param_list());
                self.append_param(fresh, id);
                fresh
            }
            Some(id) => id,
        };
        for &param in params.iter().flatten() {
            self.append_param(list, param);
        }
        list
    }

    pub fn param_count(&self, list: SymbolId) -> usize {
        self.sym(list).children.len()
    }

    /// Total frame size of a parameter list.
    pub fn frame_size(&self, list: SymbolId) -> u32 {
        self.sym(list).size()
    }
}

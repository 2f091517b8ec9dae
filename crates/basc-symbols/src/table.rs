//! Per-namespace symbol tables and duplicate detection.
//!
//! A [`SymbolTable`] maps collision keys to symbol ids for one namespace.
//! Labels key on their mangled name (the globally unique assembly label);
//! everything else keys on its source name. Collisions are ordinary compile
//! errors: they are reported into the diagnostic bag and compilation
//! continues, so one run can surface every duplicate.

use crate::arena::SymbolArena;
use crate::symbol::SymbolId;
use basc_common::diagnostics::diagnostic_codes;
use basc_common::{Diagnostic, DiagnosticBag, Options};
use rustc_hash::FxHashMap;
use tracing::debug;

#[derive(Debug, Default)]
pub struct SymbolTable {
    entries: FxHashMap<String, SymbolId>,
    /// Ids in declaration order, for deterministic iteration and sweeps.
    order: Vec<SymbolId>,
    case_insensitive: bool,
}

impl SymbolTable {
    pub fn new(case_insensitive: bool) -> SymbolTable {
        SymbolTable {
            entries: FxHashMap::default(),
            order: Vec::new(),
            case_insensitive,
        }
    }

    pub fn from_options(options: &Options) -> SymbolTable {
        SymbolTable::new(options.case_insensitive)
    }

    fn key(&self, name: &str) -> String {
        if self.case_insensitive {
            name.to_ascii_uppercase()
        } else {
            name.to_string()
        }
    }

    /// Declare a symbol in this namespace. On a collision, emits a
    /// `DUPLICATE_SYMBOL` error carrying both declaration sites and keeps
    /// the first binding; returns whether the declaration was inserted.
    ///
    /// Contract: the symbol must be named (bare structural nodes have no
    /// business in a namespace).
    pub fn declare(
        &mut self,
        arena: &SymbolArena,
        id: SymbolId,
        bag: &mut DiagnosticBag,
    ) -> bool {
        let sym = arena.get(id).expect("declared id from another arena");
        let name = sym.name().expect("declared an unnamed symbol");
        let key = self.key(sym.mangled().unwrap_or(name));
        if let Some(&prev) = self.entries.get(&key) {
            let prev_site = arena
                .get(prev)
                .map(|p| p.decl.clone())
                .unwrap_or_default();
            bag.push(
                Diagnostic::error(
                    diagnostic_codes::DUPLICATE_SYMBOL,
                    format!("duplicated identifier '{name}'"),
                    sym.decl.clone(),
                )
                .with_related(prev_site),
            );
            return false;
        }
        debug!(name, key = %key, "declared symbol");
        self.entries.insert(key, id);
        self.order.push(id);
        true
    }

    pub fn lookup(&self, name: &str) -> Option<SymbolId> {
        self.entries.get(&self.key(name)).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&self.key(name))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Declared symbols in declaration order.
    pub fn symbols(&self) -> &[SymbolId] {
        &self.order
    }

    /// Labels declared here that the optimizer never marked accessed, in
    /// declaration order. Run after the marking pass.
    pub fn unused_labels(&self, arena: &SymbolArena) -> Vec<SymbolId> {
        self.order
            .iter()
            .copied()
            .filter(|&id| {
                arena
                    .get(id)
                    .map(|s| s.is_label() && !s.accessed())
                    .unwrap_or(false)
            })
            .collect()
    }

    /// Report an `UNUSED_LABEL` warning for every unused label.
    pub fn report_unused_labels(&self, arena: &SymbolArena, bag: &mut DiagnosticBag) {
        for id in self.unused_labels(arena) {
            let sym = arena.get(id).expect("id came from this table's order");
            let name = sym.name().unwrap_or("<anonymous>");
            bag.push(Diagnostic::warning(
                diagnostic_codes::UNUSED_LABEL,
                format!("label '{name}' is never used"),
                sym.decl.clone(),
            ));
        }
    }
}

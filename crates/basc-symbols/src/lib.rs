//! Symbol model for the basc BASIC compiler.
//!
//! Every named program entity (labels, functions, variables, parameters)
//! lives in a [`SymbolArena`] as an id-addressed [`Symbol`] record. The
//! arena owns the whole symbol forest of one compilation unit; the syntax
//! tree and all semantic cross-references (scope owners, aliases) are
//! [`SymbolId`] values, so the structure stays a strict tree while still
//! recording back-references.
//!
//! The three concerns this crate covers:
//! - deterministic name mangling per namespace ([`mangle`], [`SymbolTable`]
//!   collision detection),
//! - transitive "used" propagation from labels up through their enclosing
//!   functions ([`SymbolArena::mark_accessed`]), which drives dead-code
//!   elimination,
//! - incremental stack-frame offset assignment for parameter lists
//!   ([`SymbolArena::make_param_list`]).
//!
//! Passes run in strict sequence over one arena: parse/build, scope
//! resolution, access marking, then codegen reads the results. Nothing here
//! is shared across threads; parallel builds give each compilation unit its
//! own arena.

pub mod arena;
pub mod symbol;
pub mod table;

pub use arena::SymbolArena;
pub use symbol::{
    mangle, LabelData, ParamData, ParamListData, Symbol, SymbolClass, SymbolId, SymbolKind,
};
pub use table::SymbolTable;

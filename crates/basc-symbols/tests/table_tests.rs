//! Tests for namespace symbol tables: duplicate detection, case folding,
//! and the unused-label sweep.

use basc_common::diagnostics::diagnostic_codes;
use basc_common::{DeclSite, DiagnosticBag, DiagnosticCategory, Options};
use basc_symbols::{Symbol, SymbolArena, SymbolClass, SymbolTable};

#[test]
fn duplicate_declaration_reports_and_keeps_first_binding() {
    let mut arena = SymbolArena::new();
    let mut table = SymbolTable::new(false);
    let mut bag = DiagnosticBag::new();

    let first = arena.alloc(Symbol::label("loop", DeclSite::new(3, "a.bas"), "NS", "_"));
    let second = arena.alloc(Symbol::label("loop", DeclSite::new(9, "a.bas"), "NS", "_"));

    assert!(table.declare(&arena, first, &mut bag));
    assert!(!table.declare(&arena, second, &mut bag));

    assert_eq!(bag.error_count(), 1);
    let diag = &bag.diagnostics()[0];
    assert_eq!(diag.code, diagnostic_codes::DUPLICATE_SYMBOL);
    assert_eq!(diag.category, DiagnosticCategory::Error);
    assert_eq!(diag.site.line, Some(9));
    assert_eq!(diag.related_site.as_ref().unwrap().line, Some(3));

    // First binding survives.
    assert_eq!(table.lookup("NS._loop"), Some(first));
    assert_eq!(table.len(), 1);
}

#[test]
fn compilation_continues_accumulating_duplicates() {
    let mut arena = SymbolArena::new();
    let mut table = SymbolTable::new(false);
    let mut bag = DiagnosticBag::new();

    for line in 1..=5 {
        let id = arena.alloc(Symbol::label("l", DeclSite::at_line(line), "NS", "_"));
        table.declare(&arena, id, &mut bag);
    }

    assert_eq!(bag.error_count(), 4);
    assert!(!bag.has_reached_limit(Options::default().max_errors));
}

#[test]
fn same_name_in_different_namespaces_does_not_collide() {
    let mut arena = SymbolArena::new();
    let mut table = SymbolTable::new(false);
    let mut bag = DiagnosticBag::new();

    let a = arena.alloc(Symbol::label("loop", DeclSite::at_line(1), "PROC1", "_"));
    let b = arena.alloc(Symbol::label("loop", DeclSite::at_line(2), "PROC2", "_"));

    assert!(table.declare(&arena, a, &mut bag));
    assert!(table.declare(&arena, b, &mut bag));
    assert!(bag.is_empty());
}

#[test]
fn case_insensitive_tables_fold_collision_keys() {
    let mut arena = SymbolArena::new();
    let options = Options {
        case_insensitive: true,
        ..Options::default()
    };
    let mut table = SymbolTable::from_options(&options);
    let mut bag = DiagnosticBag::new();

    let a = arena.alloc(Symbol::ident("Total", SymbolClass::Var, DeclSite::at_line(1)));
    let b = arena.alloc(Symbol::ident("TOTAL", SymbolClass::Var, DeclSite::at_line(2)));

    assert!(table.declare(&arena, a, &mut bag));
    assert!(!table.declare(&arena, b, &mut bag));
    assert_eq!(bag.error_count(), 1);
    assert_eq!(table.lookup("total"), Some(a));
}

#[test]
fn case_sensitive_tables_keep_both() {
    let mut arena = SymbolArena::new();
    let mut table = SymbolTable::new(false);
    let mut bag = DiagnosticBag::new();

    let a = arena.alloc(Symbol::ident("Total", SymbolClass::Var, DeclSite::at_line(1)));
    let b = arena.alloc(Symbol::ident("TOTAL", SymbolClass::Var, DeclSite::at_line(2)));

    assert!(table.declare(&arena, a, &mut bag));
    assert!(table.declare(&arena, b, &mut bag));
    assert!(bag.is_empty());
}

#[test]
fn unused_label_sweep_reports_unaccessed_labels_only() {
    let mut arena = SymbolArena::new();
    let mut table = SymbolTable::new(false);
    let mut bag = DiagnosticBag::new();

    let used = arena.alloc(Symbol::label("used", DeclSite::at_line(1), "NS", "_"));
    let unused = arena.alloc(Symbol::label("dead", DeclSite::at_line(2), "NS", "_"));
    let var = arena.alloc(Symbol::ident("v", SymbolClass::Var, DeclSite::at_line(3)));
    table.declare(&arena, used, &mut bag);
    table.declare(&arena, unused, &mut bag);
    table.declare(&arena, var, &mut bag);

    arena.mark_accessed(used);

    assert_eq!(table.unused_labels(&arena), vec![unused]);
    table.report_unused_labels(&arena, &mut bag);
    assert_eq!(bag.warning_count(), 1);
    assert_eq!(bag.diagnostics()[0].code, diagnostic_codes::UNUSED_LABEL);
}

#[test]
fn unoptimized_builds_mark_everything_and_sweep_nothing() {
    let mut arena = SymbolArena::new();
    let mut table = SymbolTable::new(false);
    let mut bag = DiagnosticBag::new();
    let options = Options {
        optimization_level: 0,
        ..Options::default()
    };

    let label = arena.alloc(Symbol::label("dead", DeclSite::at_line(2), "NS", "_"));
    table.declare(&arena, label, &mut bag);

    assert!(!options.dead_code_marking_enabled());
    arena.mark_all_accessed();

    assert!(table.unused_labels(&arena).is_empty());
}

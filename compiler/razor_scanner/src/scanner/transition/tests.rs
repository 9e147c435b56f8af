use super::*;
use crate::scanner::testing::{run, symbols};
use pretty_assertions::assert_eq;

fn start(source: &str, admissible: &[TokenKind]) -> (Step, String, ModeStack) {
    let table = symbols(admissible);
    let mut modes = ModeStack::new();
    let (step, text, _) = run(source, |l| {
        scan_start(l, &ValidSymbols::new(&table), &mut modes)
    });
    (step, text.to_owned(), modes)
}

const BOTH: &[TokenKind] = &[
    TokenKind::CSharpCodeBlockStart,
    TokenKind::CSharpExplicitExprStart,
];

// === @{ and @( ===

#[test]
fn code_block_start_pushes_brace() {
    let (step, text, modes) = start("@{ var x = 1; }", BOTH);
    assert_eq!(step, Step::Emit(TokenKind::CSharpCodeBlockStart));
    assert_eq!(text, "@{");
    assert_eq!(modes.iter().collect::<Vec<_>>(), vec![ContextTag::Brace]);
}

#[test]
fn explicit_expr_start_pushes_paren() {
    let (step, text, modes) = start("@(a + b)", BOTH);
    assert_eq!(step, Step::Emit(TokenKind::CSharpExplicitExprStart));
    assert_eq!(text, "@(");
    assert_eq!(modes.top(), Some(ContextTag::Paren));
}

#[test]
fn at_followed_by_other_declines() {
    let (step, _, modes) = start("@model Foo", BOTH);
    assert_eq!(step, Step::Reject);
    assert!(modes.is_markup());

    let (step, _, _) = start("@", BOTH);
    assert_eq!(step, Step::Reject);
}

#[test]
fn inadmissible_opener_declines() {
    let (step, _, modes) = start("@(x)", &[TokenKind::CSharpCodeBlockStart]);
    assert_eq!(step, Step::Reject);
    assert!(modes.is_markup());

    let (step, _, _) = start("@{", &[TokenKind::CSharpExplicitExprStart]);
    assert_eq!(step, Step::Reject);
}

#[test]
fn no_at_falls_through() {
    assert_eq!(start("{", BOTH).0, Step::Fallthrough);
    assert_eq!(start(" @{", BOTH).0, Step::Fallthrough);
}

#[test]
fn neither_admissible_falls_through() {
    assert_eq!(start("@{", &[]).0, Step::Fallthrough);
}

// === Block open ===

#[test]
fn block_open_skips_trivia() {
    let mut modes = ModeStack::new();
    let (step, text, rest) = run(" \n\t{ <p>", |l| scan_block_open(l, &mut modes));
    assert_eq!(step, Step::Emit(TokenKind::RazorBlockOpen));
    assert_eq!(text, "{");
    assert_eq!(rest, " <p>");
    assert_eq!(modes.top(), Some(ContextTag::Brace));
}

#[test]
fn block_open_without_brace_falls_through() {
    let mut modes = ModeStack::new();
    let (step, _, _) = run("  x", |l| scan_block_open(l, &mut modes));
    assert_eq!(step, Step::Fallthrough);
    assert!(modes.is_markup());
}

// === Context close ===

#[test]
fn close_matching_brace() {
    let mut modes: ModeStack = [ContextTag::Paren, ContextTag::Brace].into_iter().collect();
    let (step, text, rest) = run("\n  }after", |l| scan_close(l, &mut modes));
    assert_eq!(step, Step::Emit(TokenKind::CSharpContextClose));
    assert_eq!(text, "}");
    assert_eq!(rest, "after");
    assert_eq!(modes.top(), Some(ContextTag::Paren));
}

#[test]
fn close_matching_paren() {
    let mut modes: ModeStack = [ContextTag::Paren].into_iter().collect();
    let (step, text, _) = run(")", |l| scan_close(l, &mut modes));
    assert_eq!(step, Step::Emit(TokenKind::CSharpContextClose));
    assert_eq!(text, ")");
    assert!(modes.is_markup());
}

#[test]
fn mismatched_closer_falls_through() {
    let mut modes: ModeStack = [ContextTag::Brace].into_iter().collect();
    let (step, _, _) = run(")", |l| scan_close(l, &mut modes));
    assert_eq!(step, Step::Fallthrough);
    assert_eq!(modes.depth(), 1);

    let mut modes: ModeStack = [ContextTag::Paren].into_iter().collect();
    let (step, _, _) = run(" }", |l| scan_close(l, &mut modes));
    assert_eq!(step, Step::Fallthrough);
    assert_eq!(modes.depth(), 1);
}

#[test]
fn close_at_eof_falls_through() {
    let mut modes: ModeStack = [ContextTag::Brace].into_iter().collect();
    let (step, _, _) = run("   ", |l| scan_close(l, &mut modes));
    assert_eq!(step, Step::Fallthrough);
}

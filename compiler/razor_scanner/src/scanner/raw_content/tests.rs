use super::*;
use razor_lexer_core::SourceLexer;
use crate::scanner::testing::run;

fn script(source: &str) -> (Step, &str, &str) {
    run(source, |lexer| scan(lexer, RawTextElement::Script))
}

const SCRIPT: Step = Step::Emit(TokenKind::ScriptContent);

#[test]
fn element_table() {
    assert_eq!(RawTextElement::Textarea.tag_name(), "textarea");
    assert_eq!(RawTextElement::Style.token_kind(), TokenKind::StyleContent);
    let kinds: Vec<_> = RawTextElement::ALL.iter().map(|e| e.token_kind()).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::ScriptContent,
            TokenKind::StyleContent,
            TokenKind::TitleContent,
            TokenKind::TextareaContent,
        ]
    );
}

#[test]
fn content_stops_before_closing_tag() {
    assert_eq!(
        script("var a = 1;</script>rest"),
        (SCRIPT, "var a = 1;", "</script>rest")
    );
}

#[test]
fn closing_tag_any_case() {
    for close in ["</SCRIPT>", "</Script>", "</sCrIpT>"] {
        let source = format!("abc{close}rest");
        let (step, text, rest) = script(&source);
        assert_eq!(step, SCRIPT);
        assert_eq!(text, "abc");
        assert_eq!(rest, format!("{close}rest"));
    }
}

#[test]
fn markup_like_content_is_verbatim() {
    assert_eq!(
        script("if (a < b && c > d) { x = \"<div>\"; }</script>"),
        (SCRIPT, "if (a < b && c > d) { x = \"<div>\"; }", "</script>")
    );
}

#[test]
fn other_closing_tags_are_content() {
    assert_eq!(
        script("x = '</div>';</script>"),
        (SCRIPT, "x = '</div>';", "</script>")
    );
}

#[test]
fn partial_tag_name_is_content() {
    assert_eq!(script("a</scrip b</script>"), (SCRIPT, "a</scrip b", "</script>"));
    assert_eq!(script("a</scrit"), (SCRIPT, "a</scrit", ""));
    assert_eq!(script("a</"), (SCRIPT, "a</", ""));
}

#[test]
fn closing_tag_prefix_matches_without_boundary() {
    // Only the name is matched, not the `>` after it.
    assert_eq!(script("a</scriptx>"), (SCRIPT, "a", "</scriptx>"));
}

#[test]
fn unterminated_content_runs_to_eof() {
    assert_eq!(script("console.log(1)"), (SCRIPT, "console.log(1)", ""));
}

#[test]
fn adjacent_angle_brackets() {
    assert_eq!(script("a<</script>"), (SCRIPT, "a<", "</script>"));
}

#[test]
fn leading_angle_bracket_always_declines() {
    assert_eq!(script("</script>"), (Step::Reject, "", "</script>"));
    assert_eq!(script("</div></script>"), (Step::Reject, "", "</div></script>"));
    assert_eq!(script("<!-- x --></script>"), (Step::Reject, "", "<!-- x --></script>"));
}

#[test]
fn leading_angle_bracket_is_not_consumed() {
    let mut lexer = SourceLexer::new("</script>");
    lexer.begin();
    assert_eq!(scan(&mut lexer, RawTextElement::Script), Step::Reject);
    assert_eq!(lexer.pos(), 0);
}

#[test]
fn empty_input_declines() {
    assert_eq!(script(""), (Step::Reject, "", ""));
}

#[test]
fn multibyte_content() {
    assert_eq!(script("«ü»</script>"), (SCRIPT, "«ü»", "</script>"));
}

#[test]
fn every_element_stops_at_its_own_tag() {
    for element in RawTextElement::ALL {
        let name = element.tag_name();
        let upper = name.to_ascii_uppercase();
        let source = format!("abc</{upper}>rest");
        let (step, text, rest) = run(&source, |l| scan(l, element));
        assert_eq!(step, Step::Emit(element.token_kind()), "{name}");
        assert_eq!(text, "abc", "{name}");
        assert_eq!(rest, format!("</{upper}>rest"), "{name}");
    }
}

#[test]
fn foreign_closing_tag_does_not_end_element() {
    let (step, text, _) = run("a</script>b</style>", |l| scan(l, RawTextElement::Style));
    assert_eq!(step, Step::Emit(TokenKind::StyleContent));
    assert_eq!(text, "a</script>b");

    let (_, text, _) = run("t</title>", |l| scan(l, RawTextElement::Textarea));
    assert_eq!(text, "t</title>");
}

use markdown_loom_engine::{
    Range, Token, TokenKind,
    parsing::snapshot::{invariants, outline},
    scan,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn blocks(s: &str) -> Vec<Token> {
    match scan(s) {
        Token::Document { tokens, .. } => tokens,
        other => panic!("expected Document, got {other:?}"),
    }
}

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(Token::kind).collect()
}

#[test]
fn header_with_text() {
    let tokens = blocks("## hello");
    assert_eq!(
        tokens,
        vec![Token::Header {
            range: Range::on_line(0, 0, 8),
            tokens: vec![Token::Text {
                range: Range::on_line(0, 3, 8),
                text: "hello".into(),
            }],
            level: 2,
            has_after_space: true,
        }]
    );
}

#[test]
fn unclosed_bold_spans_to_line_end() {
    let tokens = blocks("**bar");
    let [Token::Paragraph { tokens, .. }] = tokens.as_slice() else {
        panic!("expected one paragraph, got {tokens:?}");
    };
    assert_eq!(
        tokens,
        &vec![Token::Bold {
            range: Range::on_line(0, 0, 5),
            tokens: vec![Token::Text {
                range: Range::on_line(0, 2, 5),
                text: "bar".into(),
            }],
            was_closed: false,
        }]
    );
}

#[test]
fn mixed_document_outline() {
    let doc = scan("# Title\n\nSome **bold** and *it*\n> quote\n- a\n- b\n---\n`code");
    invariants(&doc);
    insta::assert_snapshot!(outline(&doc), @r#"
    Document 0:0-7:5
      Header 0:0-0:7 level=1 space=true
        Text 0:2-0:7 "Title"
      NewLine 0:7-0:8
      Paragraph 2:0-2:22
        Text 2:0-2:5 "Some "
        Bold 2:5-2:13
          Text 2:7-2:11 "bold"
        Text 2:13-2:18 " and "
        Italic 2:18-2:22
          Text 2:19-2:21 "it"
      Blockquote 3:0-3:7 level=1
        Text 3:2-3:7 "quote"
      List 4:0-5:3
        ListItem 4:0-4:3 "-"
          Text 4:2-4:3 "a"
        ListItem 5:0-5:3 "-"
          Text 5:2-5:3 "b"
      Rule 6:0-6:3 "---"
      Paragraph 7:0-7:5
        Code 7:0-7:5 "code" unclosed
    "#);
}

#[rstest]
#[case("#nospace")]
#[case("####### seven")]
#[case("#\nnext")]
fn invalid_header_falls_back_to_paragraph(#[case] buffer: &str) {
    let tokens = blocks(buffer);
    let Token::Paragraph { tokens: inline, .. } = &tokens[0] else {
        panic!("expected paragraph, got {tokens:?}");
    };
    let Token::Text { text, range } = &inline[0] else {
        panic!("expected text, got {inline:?}");
    };
    assert!(text.starts_with('#'));
    assert_eq!(range.start.col, 0);
}

#[test]
fn bare_marker_at_eof_is_header_without_space() {
    assert_eq!(
        blocks("#"),
        vec![Token::Header {
            range: Range::on_line(0, 0, 1),
            tokens: vec![],
            level: 1,
            has_after_space: false,
        }]
    );
}

#[rstest]
#[case("", vec![])]
#[case("\n", vec![TokenKind::NewLine])]
#[case("a\nb", vec![TokenKind::Paragraph, TokenKind::Paragraph])]
#[case("a\n", vec![TokenKind::Paragraph, TokenKind::NewLine])]
#[case("a\n\nb", vec![TokenKind::Paragraph, TokenKind::NewLine, TokenKind::Paragraph])]
#[case("# a\n---\n> b", vec![TokenKind::Header, TokenKind::Rule, TokenKind::Blockquote])]
fn newline_only_marks_blank_lines(#[case] buffer: &str, #[case] expected: Vec<TokenKind>) {
    assert_eq!(kinds(&blocks(buffer)), expected);
}

#[test]
fn newline_token_covers_newline_slot() {
    let tokens = blocks("ab\n\ncd");
    assert_eq!(
        tokens[1],
        Token::NewLine {
            range: Range::on_line(0, 2, 3),
        }
    );
}

#[test]
fn ordered_and_unordered_lists_split() {
    let tokens = blocks("1. one\n2. two\n- x\n* y");
    assert_eq!(
        kinds(&tokens),
        vec![TokenKind::List, TokenKind::List, TokenKind::List]
    );

    let Token::List { range, tokens: items } = &tokens[0] else {
        panic!("expected list");
    };
    assert_eq!(range.start.line, 0);
    assert_eq!(range.end.line, 1);
    let markers: Vec<_> = items
        .iter()
        .map(|item| match item {
            Token::ListItem { marker, .. } => marker.as_str(),
            other => panic!("expected list item, got {other:?}"),
        })
        .collect();
    assert_eq!(markers, ["1.", "2."]);
}

#[test]
fn rule_ends_list() {
    let tokens = blocks("- a\n- - -");
    assert_eq!(kinds(&tokens), vec![TokenKind::List, TokenKind::Rule]);
}

#[test]
fn nested_blockquote() {
    assert_eq!(
        blocks("> > deep"),
        vec![Token::Blockquote {
            range: Range::on_line(0, 0, 8),
            tokens: vec![Token::Text {
                range: Range::on_line(0, 4, 8),
                text: "deep".into(),
            }],
            nested_level: 2,
        }]
    );
}

#[test]
fn columns_count_chars() {
    let tokens = blocks("héllo *wörld*");
    let Token::Paragraph { tokens: inline, range } = &tokens[0] else {
        panic!("expected paragraph");
    };
    assert_eq!(*range, Range::on_line(0, 0, 13));
    assert_eq!(inline[1].range(), Range::on_line(0, 6, 13));
}

#[test]
fn links_and_images_in_one_line() {
    insta::assert_snapshot!(outline(&scan("see [docs](https://x.io) or ![pic]")), @r#"
    Document 0:0-0:34
      Paragraph 0:0-0:34
        Text 0:0-0:4 "see "
        Link 0:4-0:24 "docs" -> Some("https://x.io")
        Text 0:24-0:28 " or "
        Image 0:28-0:34 "pic" -> None unclosed
    "#);
}

#[rstest]
#[case("")]
#[case("plain")]
#[case("# h\n\n\n**b *i* b** `c` [l](d) ![i](u)\n> q\n>> qq\n1. a\n2. b\n- c\n___\n")]
#[case("*a **b** c*")]
#[case("**[x](y)**\n`")]
#[case("####### \n#\n")]
fn scanning_is_deterministic_and_well_formed(#[case] buffer: &str) {
    let first = scan(buffer);
    invariants(&first);
    assert_eq!(first, scan(buffer));
}

#[test]
fn serializes_as_tagged_json() {
    let value = serde_json::to_value(scan("## hello")).unwrap();
    assert_eq!(value["type"], "Document");
    let header = &value["tokens"][0];
    assert_eq!(header["type"], "Header");
    assert_eq!(header["level"], 2);
    assert_eq!(header["hasAfterSpace"], true);
    assert_eq!(header["range"]["start"]["col"], 0);
    assert_eq!(header["range"]["end"]["col"], 8);
    assert_eq!(header["tokens"][0]["text"], "hello");
}

use super::{Lexer, TokenKind};

use TokenKind::*;

fn lex(s: &str) -> Vec<(TokenKind, &str)> {
    Lexer::new(s, true).map(|t| (t.kind, t.text)).collect()
}

/// Lex without whitespace and line terminators
fn lex_significant(s: &str) -> Vec<(TokenKind, &str)> {
    lex(s)
        .into_iter()
        .filter(|(kind, _)| !matches!(kind, WhiteSpace | LineTerminatorSequence))
        .collect()
}

#[test]
fn const_declaration() {
    assert_eq!(
        lex("const x = 1;"),
        [
            (IdentifierName, "const"),
            (WhiteSpace, " "),
            (IdentifierName, "x"),
            (WhiteSpace, " "),
            (Punctuator, "="),
            (WhiteSpace, " "),
            (NumericLiteral, "1"),
            (Punctuator, ";"),
        ]
    );
}

#[test]
fn tokens_are_contiguous() {
    let inputs = [
        "",
        "const x = 1;\n",
        "`unterminated ${",
        "'abc\\",
        "/* open",
        "<div>{",
        "</>",
        "}}}))",
        "@@ # \\",
        "\u{feff}a\u{2028}b\r\nc",
        "#!x\n#y",
        "x = /[/]/.source",
        "a\\u0041 = `${`${1}`}`",
        "<A b='c' {...d}>text {e} <f/></A>",
    ];

    for input in inputs {
        let tokens = lex(input);
        assert!(tokens.iter().all(|(_, text)| !text.is_empty()), "{input:?}");
        let joined: String = tokens.iter().map(|(_, text)| *text).collect();
        assert_eq!(joined, input);
    }
}

#[test]
fn regex_after_assignment() {
    assert_eq!(
        lex_significant("x = /ab+c/g"),
        [
            (IdentifierName, "x"),
            (Punctuator, "="),
            (RegularExpressionLiteral, "/ab+c/g"),
        ]
    );
}

#[test]
fn regex_with_slash_in_class() {
    assert_eq!(
        lex_significant("x = /[/]/g"),
        [
            (IdentifierName, "x"),
            (Punctuator, "="),
            (RegularExpressionLiteral, "/[/]/g"),
        ]
    );
}

#[test]
fn division() {
    assert_eq!(
        lex_significant("a / b / c"),
        [
            (IdentifierName, "a"),
            (Punctuator, "/"),
            (IdentifierName, "b"),
            (Punctuator, "/"),
            (IdentifierName, "c"),
        ]
    );
}

#[test]
fn regex_after_if_condition() {
    let tokens = lex_significant("if (a) /re/.test(b)");
    assert_eq!(tokens[4], (RegularExpressionLiteral, "/re/"));

    let tokens = lex_significant("(a) / 2");
    assert_eq!(tokens[3], (Punctuator, "/"));
}

#[test]
fn regex_after_return() {
    let tokens = lex_significant("return\n/re/");
    assert_eq!(tokens[1], (RegularExpressionLiteral, "/re/"));

    let tokens = lex_significant("return /re/");
    assert_eq!(tokens[1], (RegularExpressionLiteral, "/re/"));

    let tokens = lex_significant("x\n/y/g");
    assert_eq!(tokens[1], (Punctuator, "/"));
}

#[test]
fn division_after_postfix_increment() {
    assert_eq!(
        lex_significant("a++ / 2"),
        [
            (IdentifierName, "a"),
            (Punctuator, "++"),
            (Punctuator, "/"),
            (NumericLiteral, "2"),
        ]
    );
}

#[test]
fn block_versus_object_literal() {
    let tokens = lex_significant("{}\n/foo/");
    assert_eq!(tokens[2], (RegularExpressionLiteral, "/foo/"));

    let tokens = lex_significant("x = {}\n/ 2");
    assert_eq!(tokens[4], (Punctuator, "/"));
}

#[test]
fn numbers() {
    let whole = [
        "0x1F",
        "0b1010n",
        "0o17",
        "1_000n",
        "1_000.5e-3",
        ".5e+3",
        "0755",
        "089",
        "0.5",
        "1.",
        "0n",
        "123n",
    ];
    for number in whole {
        assert_eq!(lex(number), [(NumericLiteral, number)]);
    }

    assert_eq!(lex("1e"), [(NumericLiteral, "1"), (IdentifierName, "e")]);
    assert_eq!(lex("0x"), [(NumericLiteral, "0"), (IdentifierName, "x")]);
    assert_eq!(lex("1_"), [(NumericLiteral, "1"), (IdentifierName, "_")]);
    assert_eq!(
        lex("1.5n"),
        [(NumericLiteral, "1.5"), (IdentifierName, "n")]
    );
}

#[test]
fn strings() {
    assert_eq!(lex(r"'a\'b'"), [(StringLiteral, r"'a\'b'")]);
    assert_eq!(lex("'a\\\nb'"), [(StringLiteral, "'a\\\nb'")]);
    assert_eq!(
        lex("\"abc\nx\""),
        [
            (StringLiteral, "\"abc"),
            (LineTerminatorSequence, "\n"),
            (IdentifierName, "x"),
            (StringLiteral, "\""),
        ]
    );
}

#[test]
fn template_with_substitution() {
    assert_eq!(
        lex("`a${b}c`"),
        [
            (TemplateHead, "`a${"),
            (IdentifierName, "b"),
            (TemplateTail, "}c`"),
        ]
    );
}

#[test]
fn template_with_middle() {
    assert_eq!(
        lex("`x${a}y${b}z`"),
        [
            (TemplateHead, "`x${"),
            (IdentifierName, "a"),
            (TemplateMiddle, "}y${"),
            (IdentifierName, "b"),
            (TemplateTail, "}z`"),
        ]
    );
}

#[test]
fn nested_templates() {
    assert_eq!(
        lex("`a${`b${c}`}d`"),
        [
            (TemplateHead, "`a${"),
            (TemplateHead, "`b${"),
            (IdentifierName, "c"),
            (TemplateTail, "}`"),
            (TemplateTail, "}d`"),
        ]
    );
}

#[test]
fn object_literal_in_substitution() {
    assert_eq!(
        lex_significant("`${ {a: 1} }`"),
        [
            (TemplateHead, "`${"),
            (Punctuator, "{"),
            (IdentifierName, "a"),
            (Punctuator, ":"),
            (NumericLiteral, "1"),
            (Punctuator, "}"),
            (TemplateTail, "}`"),
        ]
    );
}

#[test]
fn templates_without_substitution() {
    assert_eq!(lex("`plain`"), [(NoSubstitutionTemplate, "`plain`")]);
    assert_eq!(lex("`abc"), [(NoSubstitutionTemplate, "`abc")]);
}

#[test]
fn comments() {
    assert_eq!(
        lex("// hi\nx"),
        [
            (SingleLineComment, "// hi"),
            (LineTerminatorSequence, "\n"),
            (IdentifierName, "x"),
        ]
    );
    assert_eq!(
        lex("/* a\nb */x"),
        [(MultiLineComment, "/* a\nb */"), (IdentifierName, "x")]
    );
    assert_eq!(lex("/* open"), [(MultiLineComment, "/* open")]);
}

#[test]
fn hashbang() {
    assert_eq!(
        lex("#!/usr/bin/env node\nlet"),
        [
            (HashbangComment, "#!/usr/bin/env node"),
            (LineTerminatorSequence, "\n"),
            (IdentifierName, "let"),
        ]
    );
    assert_eq!(
        lex_significant("x #!y"),
        [
            (IdentifierName, "x"),
            (Invalid, "#"),
            (Punctuator, "!"),
            (IdentifierName, "y"),
        ]
    );
}

#[test]
fn private_identifier() {
    assert_eq!(
        lex("this.#x"),
        [
            (IdentifierName, "this"),
            (Punctuator, "."),
            (PrivateIdentifier, "#x"),
        ]
    );
}

#[test]
fn punctuators() {
    let texts: Vec<_> = lex_significant(
        "a ??= b?.c ** 2 >>>= 1 === x !== y => ...z",
    )
    .into_iter()
    .map(|(_, text)| text)
    .collect();
    assert_eq!(
        texts,
        [
            "a", "??=", "b", "?.", "c", "**", "2", ">>>=", "1", "===", "x",
            "!==", "y", "=>", "...", "z"
        ]
    );
}

#[test]
fn optional_chaining_versus_conditional() {
    assert_eq!(
        lex("a?.5:1"),
        [
            (IdentifierName, "a"),
            (Punctuator, "?"),
            (NumericLiteral, ".5"),
            (Punctuator, ":"),
            (NumericLiteral, "1"),
        ]
    );
}

#[test]
fn jsx_element() {
    assert_eq!(
        lex_significant("<div className=\"a\">hi {name}</div>"),
        [
            (JsxPunctuator, "<"),
            (JsxIdentifier, "div"),
            (JsxIdentifier, "className"),
            (JsxPunctuator, "="),
            (JsxString, "\"a\""),
            (JsxPunctuator, ">"),
            (JsxText, "hi "),
            (JsxPunctuator, "{"),
            (IdentifierName, "name"),
            (JsxPunctuator, "}"),
            (JsxPunctuator, "<"),
            (JsxPunctuator, "/"),
            (JsxIdentifier, "div"),
            (JsxPunctuator, ">"),
        ]
    );
}

#[test]
fn jsx_self_closing() {
    assert_eq!(
        lex_significant("x = <br />;"),
        [
            (IdentifierName, "x"),
            (Punctuator, "="),
            (JsxPunctuator, "<"),
            (JsxIdentifier, "br"),
            (JsxPunctuator, "/"),
            (JsxPunctuator, ">"),
            (Punctuator, ";"),
        ]
    );
}

#[test]
fn jsx_invalid() {
    assert_eq!(
        lex("<a>}</a>"),
        [
            (JsxPunctuator, "<"),
            (JsxIdentifier, "a"),
            (JsxPunctuator, ">"),
            (JsxInvalid, "}"),
            (JsxPunctuator, "<"),
            (JsxPunctuator, "/"),
            (JsxIdentifier, "a"),
            (JsxPunctuator, ">"),
        ]
    );
}

#[test]
fn jsx_disabled() {
    let tokens: Vec<_> = Lexer::new("<div>", false)
        .map(|t| (t.kind, t.text))
        .collect();
    assert_eq!(
        tokens,
        [
            (Punctuator, "<"),
            (IdentifierName, "div"),
            (Punctuator, ">"),
        ]
    );
}

#[test]
fn invalid() {
    assert_eq!(lex("@dec"), [(Invalid, "@"), (IdentifierName, "dec")]);
    assert_eq!(lex("\\"), [(Invalid, "\\")]);
}

#[test]
fn unicode() {
    assert_eq!(
        lex_significant("ünï = 1"),
        [
            (IdentifierName, "ünï"),
            (Punctuator, "="),
            (NumericLiteral, "1"),
        ]
    );
    assert_eq!(
        lex("a\u{2028}b\u{a0}c"),
        [
            (IdentifierName, "a"),
            (LineTerminatorSequence, "\u{2028}"),
            (IdentifierName, "b"),
            (WhiteSpace, "\u{a0}"),
            (IdentifierName, "c"),
        ]
    );
    assert_eq!(lex("\\u0041bc"), [(IdentifierName, "\\u0041bc")]);
}

use std::fmt::Display;

use crate::{
    lexer::{Token, TokenKind},
    words,
};

/// How a token is styled
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Keyword,
    /// Identifiers starting with an uppercase letter, usually classes
    Capitalized,
    JsxIdentifier,
    Punctuator,
    Number,
    String,
    Regex,
    Comment,
    Invalid,
    /// Printed as is
    Uncolored,
}

impl Category {
    /// All categories that can have a style
    pub const STYLED: [Category; 9] = [
        Category::Keyword,
        Category::Capitalized,
        Category::JsxIdentifier,
        Category::Punctuator,
        Category::Number,
        Category::String,
        Category::Regex,
        Category::Comment,
        Category::Invalid,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Keyword => "keyword",
            Category::Capitalized => "capitalized",
            Category::JsxIdentifier => "jsxIdentifier",
            Category::Punctuator => "punctuator",
            Category::Number => "number",
            Category::String => "string",
            Category::Regex => "regex",
            Category::Comment => "comment",
            Category::Invalid => "invalid",
            Category::Uncolored => "uncolored",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Words that are only keywords in some positions, but are highlighted as
/// keywords everywhere
///
/// `target` (as in `new.target`) is left out: it is far more common as a
/// plain identifier.
fn is_sometimes_keyword(word: &str) -> bool {
    matches!(word, "as" | "async" | "from" | "get" | "of" | "set")
}

fn is_capitalized(word: &str) -> bool {
    let Some(first) = word.chars().next() else {
        return false;
    };
    !first.to_lowercase().eq([first])
}

/// Determine the category of a single token
pub fn classify(token: &Token<'_>) -> Category {
    let text = token.text;

    match token.kind {
        TokenKind::IdentifierName => {
            if words::is_keyword(text)
                || words::is_strict_reserved_word(text, true)
                || is_sometimes_keyword(text)
            {
                return Category::Keyword;
            }
            if is_capitalized(text) {
                return Category::Capitalized;
            }
        }
        // Brackets are left alone to keep the output calm
        TokenKind::Punctuator
            if matches!(text, "(" | ")" | "[" | "]" | "{" | "}") =>
        {
            return Category::Uncolored;
        }
        // Decorators
        TokenKind::Invalid if text == "@" => return Category::Punctuator,
        _ => {}
    }

    match token.kind {
        TokenKind::NumericLiteral => Category::Number,
        TokenKind::StringLiteral
        | TokenKind::JsxString
        | TokenKind::NoSubstitutionTemplate => Category::String,
        TokenKind::RegularExpressionLiteral => Category::Regex,
        TokenKind::Punctuator | TokenKind::JsxPunctuator => {
            Category::Punctuator
        }
        TokenKind::MultiLineComment | TokenKind::SingleLineComment => {
            Category::Comment
        }
        TokenKind::Invalid | TokenKind::JsxInvalid => Category::Invalid,
        TokenKind::JsxIdentifier => Category::JsxIdentifier,
        TokenKind::IdentifierName
        | TokenKind::PrivateIdentifier
        | TokenKind::TemplateHead
        | TokenKind::TemplateMiddle
        | TokenKind::TemplateTail
        | TokenKind::HashbangComment
        | TokenKind::WhiteSpace
        | TokenKind::LineTerminatorSequence
        | TokenKind::JsxText => Category::Uncolored,
    }
}

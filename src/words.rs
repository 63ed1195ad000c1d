//! Reserved words of JavaScript
//!
//! These predicates only look at the word itself. Whether a word acts as a
//! keyword at a given position in the source is not decided here.

pub fn is_keyword(word: &str) -> bool {
    matches!(
        word,
        "break"
            | "case"
            | "catch"
            | "continue"
            | "debugger"
            | "default"
            | "do"
            | "else"
            | "finally"
            | "for"
            | "function"
            | "if"
            | "return"
            | "switch"
            | "throw"
            | "try"
            | "var"
            | "const"
            | "while"
            | "with"
            | "new"
            | "this"
            | "super"
            | "class"
            | "extends"
            | "export"
            | "import"
            | "null"
            | "true"
            | "false"
            | "in"
            | "instanceof"
            | "typeof"
            | "void"
            | "delete"
    )
}

/// Words that are reserved everywhere, `await` only in modules
pub fn is_reserved_word(word: &str, in_module: bool) -> bool {
    (in_module && word == "await") || word == "enum"
}

/// Words that are reserved in strict mode code
pub fn is_strict_reserved_word(word: &str, in_module: bool) -> bool {
    is_reserved_word(word, in_module)
        || matches!(
            word,
            "implements"
                | "interface"
                | "let"
                | "package"
                | "private"
                | "protected"
                | "public"
                | "static"
                | "yield"
        )
}

/// Words that cannot be bound in strict mode, but are otherwise fine
pub fn is_strict_bind_only_reserved_word(word: &str) -> bool {
    matches!(word, "eval" | "arguments")
}

pub fn is_strict_bind_reserved_word(word: &str, in_module: bool) -> bool {
    is_strict_reserved_word(word, in_module)
        || is_strict_bind_only_reserved_word(word)
}

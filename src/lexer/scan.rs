//! Matchers for the individual token shapes
//!
//! Every matcher looks at the start of the given input and returns the length
//! in bytes of the token it recognizes there, or 0 if the input does not start
//! with such a token. None of them look at lexer state; deciding which matcher
//! to try is up to the [`Lexer`](super::Lexer).

pub fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\u{b}'
            | '\u{c}'
            | '\u{feff}'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
    )
}

fn is_id_start(c: char) -> bool {
    c == '$' || c == '_' || unicode_ident::is_xid_start(c)
}

fn is_id_continue(c: char) -> bool {
    c == '$'
        || c == '\u{200c}'
        || c == '\u{200d}'
        || unicode_ident::is_xid_continue(c)
}

fn first_char(s: &str) -> Option<char> {
    s.chars().next()
}

/// Length of the digits matching `d(_?d)*` at the start of `s`
fn digits(s: &str, is_digit: fn(&u8) -> bool) -> usize {
    let b = s.as_bytes();
    if !b.first().is_some_and(is_digit) {
        return 0;
    }
    let mut len = 1;
    loop {
        match b.get(len) {
            Some(c) if is_digit(c) => len += 1,
            Some(b'_') if b.get(len + 1).is_some_and(is_digit) => len += 2,
            _ => return len,
        }
    }
}

fn is_octal(c: &u8) -> bool {
    matches!(c, b'0'..=b'7')
}

fn is_binary(c: &u8) -> bool {
    matches!(c, b'0' | b'1')
}

pub fn whitespace(s: &str) -> usize {
    s.find(|c: char| !is_whitespace(c)).unwrap_or(s.len())
}

pub fn line_terminator(s: &str) -> usize {
    if s.starts_with("\r\n") {
        return 2;
    }
    match first_char(s) {
        Some(c) if is_line_terminator(c) => c.len_utf8(),
        _ => 0,
    }
}

/// Everything up to (but excluding) the next line terminator
fn rest_of_line(s: &str) -> usize {
    s.find(is_line_terminator).unwrap_or(s.len())
}

pub fn hashbang(s: &str) -> usize {
    if s.starts_with("#!") {
        rest_of_line(s)
    } else {
        0
    }
}

pub fn single_line_comment(s: &str) -> usize {
    if s.starts_with("//") {
        rest_of_line(s)
    } else {
        0
    }
}

/// An unterminated comment runs until the end of the input.
pub fn multi_line_comment(s: &str) -> usize {
    let Some(rest) = s.strip_prefix("/*") else {
        return 0;
    };
    match rest.find("*/") {
        Some(end) => 2 + end + 2,
        None => s.len(),
    }
}

/// `\uXXXX` or `\u{X...}`
fn unicode_escape(s: &str) -> usize {
    let Some(rest) = s.strip_prefix("\\u") else {
        return 0;
    };
    if let Some(braced) = rest.strip_prefix('{') {
        let n = braced
            .find(|c: char| !c.is_ascii_hexdigit())
            .unwrap_or(braced.len());
        if n > 0 && braced[n..].starts_with('}') {
            return 2 + 1 + n + 1;
        }
        return 0;
    }
    if rest.len() >= 4 && rest.as_bytes()[..4].iter().all(u8::is_ascii_hexdigit) {
        return 6;
    }
    0
}

/// Identifier names, including private names with a leading `#`
pub fn identifier(s: &str) -> usize {
    let (hash, rest) = match s.strip_prefix('#') {
        Some(rest) => (1, rest),
        None => (0, s),
    };

    match first_char(rest) {
        Some(c) if is_id_start(c) || c == '\\' => {}
        _ => return 0,
    }

    let mut len = 0;
    while let Some(c) = first_char(&rest[len..]) {
        if is_id_continue(c) {
            len += c.len_utf8();
            continue;
        }
        let escape = unicode_escape(&rest[len..]);
        if escape == 0 {
            break;
        }
        len += escape;
    }

    if len == 0 {
        0
    } else {
        hash + len
    }
}

/// A single or double quoted string
///
/// An unterminated string stops before the line break, or before a trailing
/// backslash at the very end of the input.
pub fn string(s: &str) -> usize {
    let quote = match first_char(s) {
        Some(c @ ('\'' | '"')) => c,
        _ => return 0,
    };

    let mut len = 1;
    while let Some(c) = first_char(&s[len..]) {
        match c {
            '\n' | '\r' => return len,
            '\\' => {
                let escaped = &s[len + 1..];
                if escaped.starts_with("\r\n") {
                    len += 3;
                } else if let Some(e) = first_char(escaped) {
                    len += 1 + e.len_utf8();
                } else {
                    return len;
                }
            }
            c if c == quote => return len + 1,
            c => len += c.len_utf8(),
        }
    }
    len
}

/// Numeric literals
///
/// The alternatives are tried in order and the first one that matches wins,
/// so `1e` lexes as `1` followed by the identifier `e`.
pub fn number(s: &str) -> usize {
    let b = s.as_bytes();

    if b.first() == Some(&b'0') {
        let is_digit: Option<fn(&u8) -> bool> = match b.get(1) {
            Some(b'x' | b'X') => Some(u8::is_ascii_hexdigit),
            Some(b'o' | b'O') => Some(is_octal),
            Some(b'b' | b'B') => Some(is_binary),
            _ => None,
        };
        if let Some(is_digit) = is_digit {
            let n = digits(&s[2..], is_digit);
            if n > 0 {
                let len = 2 + n;
                return if b.get(len) == Some(&b'n') { len + 1 } else { len };
            }
        }
        if b.get(1) == Some(&b'n') {
            return 2;
        }
    }

    if matches!(b.first(), Some(b'1'..=b'9')) {
        let n = digits(s, u8::is_ascii_digit);
        if b.get(n) == Some(&b'n') {
            return n + 1;
        }
    }

    let decimal = decimal(s);
    if decimal > 0 {
        return decimal;
    }

    // Legacy octal, like `0755`
    if b.first() == Some(&b'0') {
        let n = b[1..].iter().take_while(|c| is_octal(c)).count();
        if n > 0 {
            return 1 + n;
        }
    }

    0
}

fn decimal(s: &str) -> usize {
    let b = s.as_bytes();

    let integer = match b.first() {
        Some(b'0') => {
            let run = b.iter().take_while(|c| c.is_ascii_digit()).count();
            if run == 1 {
                1
            } else if b[1..run].iter().any(|c| matches!(c, b'8' | b'9')) {
                // Not octal after all, like `089`
                run
            } else {
                0
            }
        }
        Some(b'1'..=b'9') => digits(s, u8::is_ascii_digit),
        _ => 0,
    };

    let mut len = if integer > 0 {
        let mut len = integer;
        if b.get(len) == Some(&b'.') {
            len += 1 + digits(&s[len + 1..], u8::is_ascii_digit);
        }
        len
    } else if b.first() == Some(&b'.') {
        let n = digits(&s[1..], u8::is_ascii_digit);
        if n == 0 {
            return 0;
        }
        1 + n
    } else {
        return 0;
    };

    if matches!(b.get(len), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(b.get(len + 1), Some(b'+' | b'-')));
        let n = digits(&s[len + 1 + sign..], u8::is_ascii_digit);
        if n > 0 {
            len += 1 + sign + n;
        }
    }

    len
}

/// Operators that may be followed by `=` to form an assignment operator
fn operator(b: &[u8]) -> usize {
    match b {
        [b'&', b'&', ..] | [b'|', b'|', ..] | [b'?', b'?', ..] => 2,
        [b'+' | b'-' | b'%' | b'&' | b'|' | b'^', ..] => 1,
        [b'*', b'*', ..] => 2,
        [b'*', ..] => 1,
        [b'<', b'<', ..] => 2,
        [b'<', ..] => 1,
        [b'>', b'>', b'>', ..] => 3,
        [b'>', b'>', ..] => 2,
        [b'>', ..] => 1,
        [b'!', b'=', ..] => 2,
        [b'!', ..] => 1,
        [b'=', b'=', ..] => 2,
        [b'=', ..] => 1,
        [b'/', b'/' | b'*', ..] => 0,
        [b'/', ..] => 1,
        _ => 0,
    }
}

pub fn punctuator(s: &str) -> usize {
    let b = s.as_bytes();
    let digit_at = |i: usize| b.get(i).is_some_and(u8::is_ascii_digit);

    match b {
        [b'-', b'-', ..] | [b'+', b'+', ..] | [b'=', b'>', ..] => return 2,
        [b'.', b'.', b'.', ..] => return 3,
        [b'?', b'.', ..] if !digit_at(2) => return 2,
        [b'.', ..] if !digit_at(1) => return 1,
        _ => {}
    }

    let n = operator(b);
    if n > 0 {
        return if b.get(n) == Some(&b'=') { n + 1 } else { n };
    }

    match b.first() {
        Some(
            b'?' | b'~' | b',' | b':' | b';' | b'[' | b']' | b'(' | b')'
            | b'{' | b'}',
        ) => 1,
        _ => 0,
    }
}

/// A regular expression literal, including its flags
///
/// A `/` inside a character class does not end the literal. An unterminated
/// literal stops at the line break.
pub fn regex(s: &str) -> usize {
    if !s.starts_with('/') || matches!(s.as_bytes().get(1), Some(b'/' | b'*'))
    {
        return 0;
    }

    let mut in_class = false;
    let mut len = 1;
    while let Some(c) = first_char(&s[len..]) {
        match c {
            c if is_line_terminator(c) => return len,
            '\\' => match first_char(&s[len + 1..]) {
                Some(e) if !is_line_terminator(e) => len += 1 + e.len_utf8(),
                _ => return len + 1,
            },
            '[' if !in_class => {
                in_class = true;
                len += 1;
            }
            ']' if in_class => {
                in_class = false;
                len += 1;
            }
            '/' if !in_class => {
                len += 1;
                let flags = s[len..]
                    .find(|c: char| !is_id_continue(c))
                    .unwrap_or(s.len() - len);
                return len + flags;
            }
            c => len += c.len_utf8(),
        }
    }
    len
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TemplateEnd {
    /// The closing backtick
    Backtick,
    /// The `${` starting a substitution
    Substitution,
    /// End of input
    Unterminated,
}

/// A template piece starting at a backtick or at the `}` closing a
/// substitution
pub fn template(s: &str) -> Option<(usize, TemplateEnd)> {
    if !matches!(s.as_bytes().first(), Some(b'`' | b'}')) {
        return None;
    }

    let mut len = 1;
    while let Some(c) = first_char(&s[len..]) {
        match c {
            '`' => return Some((len + 1, TemplateEnd::Backtick)),
            '$' if s[len + 1..].starts_with('{') => {
                return Some((len + 2, TemplateEnd::Substitution))
            }
            '\\' => match first_char(&s[len + 1..]) {
                Some(e) => len += 1 + e.len_utf8(),
                None => break,
            },
            c => len += c.len_utf8(),
        }
    }
    Some((len, TemplateEnd::Unterminated))
}

pub fn jsx_punctuator(s: &str) -> usize {
    match s.as_bytes() {
        [b'<' | b'>' | b'.' | b':' | b'=' | b'{' | b'}', ..] => 1,
        [b'/', b'/' | b'*', ..] => 0,
        [b'/', ..] => 1,
        _ => 0,
    }
}

/// Like an identifier, but hyphens are allowed after the first character
pub fn jsx_identifier(s: &str) -> usize {
    match first_char(s) {
        Some(c) if is_id_start(c) => {}
        _ => return 0,
    }
    s.find(|c: char| !(is_id_continue(c) || c == '-'))
        .unwrap_or(s.len())
}

/// Attribute strings have no escapes and may span lines.
pub fn jsx_string(s: &str) -> usize {
    let quote = match first_char(s) {
        Some(c @ ('\'' | '"')) => c,
        _ => return 0,
    };
    match s[1..].find(quote) {
        Some(end) => 1 + end + 1,
        None => s.len(),
    }
}

pub fn jsx_text(s: &str) -> usize {
    s.find(&['<', '>', '{', '}'][..]).unwrap_or(s.len())
}

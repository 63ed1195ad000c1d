//! Tokenizer for JavaScript and JSX
//!
//! The lexer never fails: characters it does not understand become
//! [`TokenKind::Invalid`] tokens of a single code point. The tokens are
//! contiguous, so concatenating their text gives back the input.
//!
//! Whether a `/` starts a regular expression or is a division cannot be
//! decided by looking at the characters alone. Like most highlighters, we
//! guess based on the last significant token, which is right for all but a
//! few contrived inputs. The same goes for `<` starting a JSX element.

use core::ops::ControlFlow;

use log::trace;

use self::scan::TemplateEnd;

pub(crate) mod scan;

#[cfg(test)]
mod tests;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    IdentifierName,
    PrivateIdentifier,
    NumericLiteral,
    StringLiteral,
    NoSubstitutionTemplate,
    TemplateHead,
    TemplateMiddle,
    TemplateTail,
    RegularExpressionLiteral,
    Punctuator,
    MultiLineComment,
    SingleLineComment,
    HashbangComment,
    WhiteSpace,
    LineTerminatorSequence,
    Invalid,

    // === JSX ===
    JsxString,
    JsxText,
    JsxIdentifier,
    JsxPunctuator,
    JsxInvalid,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'s> {
    pub kind: TokenKind,
    pub text: &'s str,
}

impl<'s> Token<'s> {
    pub fn new(kind: TokenKind, text: &'s str) -> Self {
        Self { kind, text }
    }
}

/// What the lexer is currently looking at
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Js,
    /// Inside the parentheses after `if`, `for`, `while` or `with`
    JsNonExpressionParen { nesting: isize },
    /// Inside `${ ... }` in a template literal
    InterpolationInTemplate { nesting: usize },
    /// Inside `{ ... }` in a JSX element
    InterpolationInJsx { nesting: usize },
    JsxTag,
    /// A closing tag, like `</div>`
    JsxTagEnd,
    JsxChildren,
}

impl Mode {
    fn is_jsx(self) -> bool {
        matches!(self, Mode::JsxTag | Mode::JsxTagEnd | Mode::JsxChildren)
    }
}

/// The last token that was not whitespace or a comment
///
/// Some situations are recorded as markers instead of the token text,
/// because the text alone is not enough to decide what may follow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Significant<'s> {
    Text(&'s str),
    NonExpressionParenKeyword,
    NonExpressionParenEnd,
    InterpolationInTemplate,
    InterpolationInJsx,
    ExpressionBraceEnd,
    PostfixIncDec,
    UnaryIncDec,
    NoLineTerminatorHere,
    Jsx,
}

fn keyword_with_expression_after(text: &str) -> bool {
    matches!(
        text,
        "await"
            | "case"
            | "default"
            | "delete"
            | "do"
            | "else"
            | "instanceof"
            | "new"
            | "return"
            | "throw"
            | "typeof"
            | "void"
            | "yield"
    )
}

fn keyword_with_no_line_terminator_after(text: &str) -> bool {
    matches!(text, "return" | "throw" | "yield")
}

impl Significant<'_> {
    /// Whether an expression can start after this token
    fn precedes_expression(self) -> bool {
        match self {
            Significant::Text(text) => {
                matches!(text, "" | "/" | "+" | "-" | "...")
                    || text.ends_with(|c: char| {
                        "{}([,;<>=*%&|^!~?:".contains(c)
                    })
                    || keyword_with_expression_after(text)
            }
            Significant::InterpolationInTemplate
            | Significant::InterpolationInJsx
            | Significant::NoLineTerminatorHere
            | Significant::NonExpressionParenEnd
            | Significant::UnaryIncDec => true,
            Significant::NonExpressionParenKeyword
            | Significant::ExpressionBraceEnd
            | Significant::PostfixIncDec
            | Significant::Jsx => false,
        }
    }

    /// Whether a `{` after this token starts a block rather than an object
    fn precedes_block(self) -> bool {
        match self {
            Significant::Text(text) => matches!(
                text,
                "" | "=>" | ";" | "]" | ")" | "{" | "}" | "else"
            ),
            Significant::NoLineTerminatorHere
            | Significant::NonExpressionParenEnd => true,
            _ => false,
        }
    }
}

pub struct Lexer<'s> {
    input: &'s str,
    offset: usize,
    jsx: bool,
    stack: Vec<Mode>,
    /// For every open brace, whether it opened an expression
    braces: Vec<bool>,
    paren_nesting: isize,
    /// Whether a `++` or `--` here would be postfix
    postfix_inc_dec: bool,
    last_significant: Significant<'s>,
}

impl<'s> Iterator for Lexer<'s> {
    type Item = Token<'s>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest().is_empty() {
            return None;
        }
        let token = match self.scan() {
            ControlFlow::Break(token) => token,
            ControlFlow::Continue(()) => self.invalid(),
        };
        trace!("{:?} {:?}", token.kind, token.text);
        Some(token)
    }
}

impl<'s> Lexer<'s> {
    /// Create a lexer, recognizing JSX if `jsx` is set
    pub fn new(input: &'s str, jsx: bool) -> Self {
        Self {
            input,
            offset: 0,
            jsx,
            stack: vec![Mode::Js],
            braces: Vec::new(),
            paren_nesting: 0,
            postfix_inc_dec: false,
            last_significant: Significant::Text(""),
        }
    }

    fn rest(&self) -> &'s str {
        &self.input[self.offset..]
    }

    fn mode(&self) -> Mode {
        self.stack.last().copied().unwrap_or(Mode::Js)
    }

    fn pop_mode(&mut self) {
        // The bottom `Js` mode is never popped
        if self.stack.len() > 1 {
            self.stack.pop();
        }
    }

    fn bump(&mut self, n: usize) -> &'s str {
        let text = &self.rest()[..n];
        self.offset += n;
        text
    }

    fn emit(&mut self, kind: TokenKind, n: usize) -> ControlFlow<Token<'s>> {
        let text = self.bump(n);
        ControlFlow::Break(Token::new(kind, text))
    }

    fn scan(&mut self) -> ControlFlow<Token<'s>> {
        if self.offset == 0 {
            self.hashbang()?;
        }

        match self.mode() {
            Mode::Js
            | Mode::JsNonExpressionParen { .. }
            | Mode::InterpolationInTemplate { .. }
            | Mode::InterpolationInJsx { .. } => self.js()?,
            Mode::JsxTag | Mode::JsxTagEnd => self.jsx_tag()?,
            Mode::JsxChildren => self.jsx_children()?,
        }

        self.whitespace()?;
        self.line_terminator()?;
        self.multi_line_comment()?;
        self.single_line_comment()?;

        ControlFlow::Continue(())
    }

    fn hashbang(&mut self) -> ControlFlow<Token<'s>> {
        match scan::hashbang(self.rest()) {
            0 => ControlFlow::Continue(()),
            n => self.emit(TokenKind::HashbangComment, n),
        }
    }

    fn js(&mut self) -> ControlFlow<Token<'s>> {
        self.regex()?;
        self.punctuator()?;
        self.identifier()?;
        self.string()?;
        self.number()?;
        self.template()
    }

    fn regex(&mut self) -> ControlFlow<Token<'s>> {
        if !self.rest().starts_with('/')
            || !self.last_significant.precedes_expression()
        {
            return ControlFlow::Continue(());
        }

        let n = scan::regex(self.rest());
        if n == 0 {
            return ControlFlow::Continue(());
        }

        let text = self.bump(n);
        self.last_significant = Significant::Text(text);
        self.postfix_inc_dec = true;
        ControlFlow::Break(Token::new(TokenKind::RegularExpressionLiteral, text))
    }

    fn punctuator(&mut self) -> ControlFlow<Token<'s>> {
        let n = scan::punctuator(self.rest());
        if n == 0 {
            return ControlFlow::Continue(());
        }

        let mode = self.mode();
        let punctuator = &self.rest()[..n];
        let mut next_significant = Significant::Text(punctuator);

        match punctuator {
            "(" => {
                if self.last_significant
                    == Significant::NonExpressionParenKeyword
                {
                    self.stack.push(Mode::JsNonExpressionParen {
                        nesting: self.paren_nesting,
                    });
                }
                self.paren_nesting += 1;
                self.postfix_inc_dec = false;
            }
            ")" => {
                self.paren_nesting -= 1;
                self.postfix_inc_dec = true;
                if mode
                    == (Mode::JsNonExpressionParen {
                        nesting: self.paren_nesting,
                    })
                {
                    self.pop_mode();
                    next_significant = Significant::NonExpressionParenEnd;
                    self.postfix_inc_dec = false;
                }
            }
            "{" => {
                let is_expression = !self.last_significant.precedes_block()
                    && self.last_significant.precedes_expression();
                self.braces.push(is_expression);
                self.postfix_inc_dec = false;
            }
            "}" => {
                match mode {
                    Mode::InterpolationInTemplate { nesting }
                        if self.braces.len() == nesting =>
                    {
                        return self.template_continuation();
                    }
                    Mode::InterpolationInJsx { nesting }
                        if self.braces.len() == nesting =>
                    {
                        self.pop_mode();
                        let text = self.bump(1);
                        self.last_significant = Significant::Text(text);
                        return ControlFlow::Break(Token::new(
                            TokenKind::JsxPunctuator,
                            text,
                        ));
                    }
                    _ => {}
                }
                self.postfix_inc_dec = self.braces.pop().unwrap_or(false);
                if self.postfix_inc_dec {
                    next_significant = Significant::ExpressionBraceEnd;
                }
            }
            "]" => {
                self.postfix_inc_dec = true;
            }
            "++" | "--" => {
                next_significant = if self.postfix_inc_dec {
                    Significant::PostfixIncDec
                } else {
                    Significant::UnaryIncDec
                };
            }
            "<" if self.jsx && self.last_significant.precedes_expression() => {
                self.stack.push(Mode::JsxTag);
                let text = self.bump(1);
                self.last_significant = Significant::Text(text);
                return ControlFlow::Break(Token::new(
                    TokenKind::JsxPunctuator,
                    text,
                ));
            }
            _ => {
                self.postfix_inc_dec = false;
            }
        }

        self.last_significant = next_significant;
        self.emit(TokenKind::Punctuator, n)
    }

    /// The `}` closing a template substitution and the template text after it
    fn template_continuation(&mut self) -> ControlFlow<Token<'s>> {
        let Some((n, end)) = scan::template(self.rest()) else {
            return ControlFlow::Continue(());
        };

        let text = self.bump(n);
        let kind = if end == TemplateEnd::Substitution {
            self.last_significant = Significant::InterpolationInTemplate;
            self.postfix_inc_dec = false;
            TokenKind::TemplateMiddle
        } else {
            self.pop_mode();
            self.last_significant = Significant::Text(text);
            self.postfix_inc_dec = true;
            TokenKind::TemplateTail
        };
        ControlFlow::Break(Token::new(kind, text))
    }

    fn template(&mut self) -> ControlFlow<Token<'s>> {
        let Some((n, end)) = scan::template(self.rest()) else {
            return ControlFlow::Continue(());
        };

        let text = self.bump(n);
        let kind = if end == TemplateEnd::Substitution {
            self.stack.push(Mode::InterpolationInTemplate {
                nesting: self.braces.len(),
            });
            self.last_significant = Significant::InterpolationInTemplate;
            self.postfix_inc_dec = false;
            TokenKind::TemplateHead
        } else {
            self.last_significant = Significant::Text(text);
            self.postfix_inc_dec = true;
            TokenKind::NoSubstitutionTemplate
        };
        ControlFlow::Break(Token::new(kind, text))
    }

    fn identifier(&mut self) -> ControlFlow<Token<'s>> {
        let n = scan::identifier(self.rest());
        if n == 0 {
            return ControlFlow::Continue(());
        }

        let text = self.bump(n);
        let after_member_access = matches!(
            self.last_significant,
            Significant::Text("." | "?.")
        );
        self.last_significant = match text {
            "for" | "if" | "while" | "with" if !after_member_access => {
                Significant::NonExpressionParenKeyword
            }
            _ => Significant::Text(text),
        };
        self.postfix_inc_dec = !keyword_with_expression_after(text);

        let kind = if text.starts_with('#') {
            TokenKind::PrivateIdentifier
        } else {
            TokenKind::IdentifierName
        };
        ControlFlow::Break(Token::new(kind, text))
    }

    fn string(&mut self) -> ControlFlow<Token<'s>> {
        self.literal(TokenKind::StringLiteral, scan::string)
    }

    fn number(&mut self) -> ControlFlow<Token<'s>> {
        self.literal(TokenKind::NumericLiteral, scan::number)
    }

    fn literal(
        &mut self,
        kind: TokenKind,
        matcher: fn(&str) -> usize,
    ) -> ControlFlow<Token<'s>> {
        let n = matcher(self.rest());
        if n == 0 {
            return ControlFlow::Continue(());
        }

        let text = self.bump(n);
        self.last_significant = Significant::Text(text);
        self.postfix_inc_dec = true;
        ControlFlow::Break(Token::new(kind, text))
    }

    fn jsx_tag(&mut self) -> ControlFlow<Token<'s>> {
        let n = scan::jsx_punctuator(self.rest());
        if n > 0 {
            let mode = self.mode();
            let text = self.bump(n);
            let mut next_significant = Significant::Text(text);
            match text {
                "<" => self.stack.push(Mode::JsxTag),
                ">" => {
                    self.pop_mode();
                    if self.last_significant == Significant::Text("/")
                        || mode == Mode::JsxTagEnd
                    {
                        next_significant = Significant::Jsx;
                        self.postfix_inc_dec = true;
                    } else {
                        self.stack.push(Mode::JsxChildren);
                    }
                }
                "{" => {
                    self.stack.push(Mode::InterpolationInJsx {
                        nesting: self.braces.len(),
                    });
                    next_significant = Significant::InterpolationInJsx;
                    self.postfix_inc_dec = false;
                }
                "/" if self.last_significant == Significant::Text("<") => {
                    self.pop_mode();
                    if self.mode() == Mode::JsxChildren {
                        self.pop_mode();
                    }
                    self.stack.push(Mode::JsxTagEnd);
                }
                _ => {}
            }
            self.last_significant = next_significant;
            return ControlFlow::Break(Token::new(
                TokenKind::JsxPunctuator,
                text,
            ));
        }

        self.jsx_attribute(TokenKind::JsxIdentifier, scan::jsx_identifier)?;
        self.jsx_attribute(TokenKind::JsxString, scan::jsx_string)
    }

    fn jsx_attribute(
        &mut self,
        kind: TokenKind,
        matcher: fn(&str) -> usize,
    ) -> ControlFlow<Token<'s>> {
        let n = matcher(self.rest());
        if n == 0 {
            return ControlFlow::Continue(());
        }

        let text = self.bump(n);
        self.last_significant = Significant::Text(text);
        ControlFlow::Break(Token::new(kind, text))
    }

    fn jsx_children(&mut self) -> ControlFlow<Token<'s>> {
        let n = scan::jsx_text(self.rest());
        if n > 0 {
            let text = self.bump(n);
            self.last_significant = Significant::Text(text);
            return ControlFlow::Break(Token::new(TokenKind::JsxText, text));
        }

        match self.rest().as_bytes().first() {
            Some(b'<') => {
                self.stack.push(Mode::JsxTag);
                self.last_significant = Significant::Text("<");
            }
            Some(b'{') => {
                self.stack.push(Mode::InterpolationInJsx {
                    nesting: self.braces.len(),
                });
                self.last_significant = Significant::InterpolationInJsx;
                self.postfix_inc_dec = false;
            }
            _ => return ControlFlow::Continue(()),
        }
        self.emit(TokenKind::JsxPunctuator, 1)
    }

    fn whitespace(&mut self) -> ControlFlow<Token<'s>> {
        match scan::whitespace(self.rest()) {
            0 => ControlFlow::Continue(()),
            n => self.emit(TokenKind::WhiteSpace, n),
        }
    }

    fn line_terminator(&mut self) -> ControlFlow<Token<'s>> {
        match scan::line_terminator(self.rest()) {
            0 => ControlFlow::Continue(()),
            n => {
                self.after_line_break();
                self.emit(TokenKind::LineTerminatorSequence, n)
            }
        }
    }

    fn multi_line_comment(&mut self) -> ControlFlow<Token<'s>> {
        let n = scan::multi_line_comment(self.rest());
        if n == 0 {
            return ControlFlow::Continue(());
        }
        if self.rest()[..n].contains(scan::is_line_terminator) {
            self.after_line_break();
        }
        self.emit(TokenKind::MultiLineComment, n)
    }

    fn single_line_comment(&mut self) -> ControlFlow<Token<'s>> {
        match scan::single_line_comment(self.rest()) {
            0 => ControlFlow::Continue(()),
            n => {
                self.postfix_inc_dec = false;
                self.emit(TokenKind::SingleLineComment, n)
            }
        }
    }

    fn after_line_break(&mut self) {
        self.postfix_inc_dec = false;
        if let Significant::Text(text) = self.last_significant {
            if keyword_with_no_line_terminator_after(text) {
                self.last_significant = Significant::NoLineTerminatorHere;
            }
        }
    }

    /// A single code point that no other rule accepts
    fn invalid(&mut self) -> Token<'s> {
        let n = self.rest().chars().next().map_or(0, char::len_utf8);
        let kind = if self.mode().is_jsx() {
            TokenKind::JsxInvalid
        } else {
            TokenKind::Invalid
        };
        let text = self.bump(n);
        self.last_significant = Significant::Text(text);
        self.postfix_inc_dec = false;
        Token::new(kind, text)
    }
}

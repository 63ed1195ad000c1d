use std::collections::VecDeque;

use crate::{
    classify::{classify, Category},
    lexer::{Lexer, TokenKind},
};

/// Tokens of a source text, ready to be styled
///
/// Created with [`normalize`].
pub struct Normalizer<'s> {
    lexer: Lexer<'s>,
    pending: VecDeque<(Category, &'s str)>,
}

/// Split a source text into categorized fragments
///
/// Template literals are split into their string parts and the `${` and `}`
/// around substitutions, so that those can be styled as punctuation. The
/// fragments together make up the input exactly.
pub fn normalize(text: &str) -> Normalizer<'_> {
    Normalizer {
        lexer: Lexer::new(text, true),
        pending: VecDeque::new(),
    }
}

impl<'s> Iterator for Normalizer<'s> {
    type Item = (Category, &'s str);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(fragment) = self.pending.pop_front() {
            return Some(fragment);
        }

        let token = self.lexer.next()?;
        let text = token.text;
        let len = text.len();

        match token.kind {
            // `abc${
            TokenKind::TemplateHead => {
                self.pending.push_back((Category::Punctuator, "${"));
                Some((Category::String, &text[..len - 2]))
            }
            // }abc${
            TokenKind::TemplateMiddle => {
                self.pending.push_back((Category::String, &text[1..len - 2]));
                self.pending.push_back((Category::Punctuator, "${"));
                Some((Category::Punctuator, "}"))
            }
            // }abc`
            TokenKind::TemplateTail => {
                self.pending.push_back((Category::String, &text[1..]));
                Some((Category::Punctuator, "}"))
            }
            _ => Some((classify(&token), text)),
        }
    }
}

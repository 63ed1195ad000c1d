use std::collections::HashMap;

use colored::Colorize;

use crate::{classify::Category, lexer::scan, normalize::normalize};

/// A function that applies a style to a piece of text
pub type Style = Box<dyn Fn(&str) -> String>;

/// The styles to use for each [`Category`]
///
/// [`Category::Uncolored`] never has a style, text in that category is
/// always printed as is.
pub struct Palette {
    styles: HashMap<Category, Style>,
}

impl Palette {
    /// A palette without any styles
    pub fn empty() -> Self {
        Self {
            styles: HashMap::new(),
        }
    }

    /// Set the style for a category
    pub fn with(
        mut self,
        category: Category,
        style: impl Fn(&str) -> String + 'static,
    ) -> Self {
        if category != Category::Uncolored {
            self.styles.insert(category, Box::new(style));
        }
        self
    }

    pub fn get(&self, category: Category) -> Option<&Style> {
        self.styles.get(&category)
    }
}

impl Default for Palette {
    /// Terminal colors, through [`colored`]
    ///
    /// Whether these actually produce escape codes is determined by the
    /// global switch of [`colored::control`].
    fn default() -> Self {
        Self::empty()
            .with(Category::Keyword, |s| s.cyan().to_string())
            .with(Category::Capitalized, |s| s.yellow().to_string())
            .with(Category::JsxIdentifier, |s| s.yellow().to_string())
            .with(Category::Punctuator, |s| s.yellow().to_string())
            .with(Category::Number, |s| s.magenta().to_string())
            .with(Category::String, |s| s.green().to_string())
            .with(Category::Regex, |s| s.magenta().to_string())
            .with(Category::Comment, |s| s.bright_black().to_string())
            .with(Category::Invalid, |s| {
                s.white().on_red().bold().to_string()
            })
    }
}

/// Split text into lines, keeping the line break after each line
struct Lines<'a> {
    rest: Option<&'a str>,
}

impl<'a> Iterator for Lines<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest?;
        let Some(idx) = rest.find(scan::is_line_terminator) else {
            self.rest = None;
            return Some((rest, ""));
        };
        let end = idx + scan::line_terminator(&rest[idx..]);
        self.rest = Some(&rest[end..]);
        Some((&rest[..idx], &rest[idx..end]))
    }
}

fn lines(text: &str) -> Lines<'_> {
    Lines { rest: Some(text) }
}

/// Highlight source text with the given palette
///
/// Styles are applied to every line separately, with the line breaks
/// themselves left unstyled. Empty lines are not styled at all.
pub fn render(palette: &Palette, text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for (category, fragment) in normalize(text) {
        let Some(style) = palette.get(category) else {
            out.push_str(fragment);
            continue;
        };

        for (line, line_break) in lines(fragment) {
            if !line.is_empty() {
                out.push_str(&style(line));
            }
            out.push_str(line_break);
        }
    }

    out
}

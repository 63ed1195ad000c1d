//! Syntax highlighting of JavaScript and JSX for the terminal
//!
//! The highlighting is based solely on the lexer: every token gets a
//! [`Category`] and every category a style from a [`Palette`].
//!
//! ```
//! use js_highlight::{highlight, Options};
//!
//! let options = Options { force_color: true };
//! let styled = highlight("const x = 1;", &options);
//! println!("{styled}");
//! ```

mod classify;
mod highlight;
pub mod lexer;
mod normalize;
mod render;
pub mod words;

#[cfg(feature = "cli")]
mod cli;

pub use classify::{classify, Category};
#[cfg(feature = "cli")]
pub use cli::cli;
pub use highlight::{highlight, should_highlight, Options};
pub use normalize::{normalize, Normalizer};
pub use render::{render, Palette, Style};

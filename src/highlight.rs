use std::borrow::Cow;

use colored::control::{set_override, SHOULD_COLORIZE};
use log::debug;

use crate::render::{render, Palette};

/// Options for [`highlight`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// Highlight even if colors are turned off globally
    pub force_color: bool,
}

/// Whether [`highlight`] would style text with these options
pub fn should_highlight(options: &Options) -> bool {
    options.force_color || SHOULD_COLORIZE.should_colorize()
}

/// Turns colors on for as long as it lives
///
/// The previous setting is restored on drop, which includes unwinding from a
/// panic.
struct ForceColor {
    previous: bool,
}

impl ForceColor {
    fn enable() -> Self {
        let previous = SHOULD_COLORIZE.should_colorize();
        set_override(true);
        Self { previous }
    }
}

impl Drop for ForceColor {
    fn drop(&mut self) {
        set_override(self.previous);
    }
}

/// Highlight JavaScript (or JSX) source code for printing to a terminal
///
/// Colors follow the global setting of [`colored::control`], unless
/// `force_color` is set. When no colors are used, the text is returned
/// without looking at it.
pub fn highlight<'a>(text: &'a str, options: &Options) -> Cow<'a, str> {
    if text.is_empty() {
        return Cow::Borrowed(text);
    }

    if options.force_color {
        let _force = ForceColor::enable();
        return Cow::Owned(render(&Palette::default(), text));
    }

    if SHOULD_COLORIZE.should_colorize() {
        Cow::Owned(render(&Palette::default(), text))
    } else {
        debug!("colors are disabled, not highlighting");
        Cow::Borrowed(text)
    }
}

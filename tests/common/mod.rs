#![allow(dead_code)]
use std::{
    io::Write,
    sync::{Mutex, MutexGuard},
};

use js_highlight::{Category, Palette};

pub fn init() {
    let _ = env_logger::builder()
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .is_test(true)
        .try_init();
}

/// A palette that wraps every fragment in `[category:...]`
pub fn brackets() -> Palette {
    Category::STYLED
        .into_iter()
        .fold(Palette::empty(), |palette, category| {
            palette.with(category, move |s| format!("[{category}:{s}]"))
        })
}

/// Remove ANSI escape sequences like `\x1b[1;31m`
pub fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for c in chars.by_ref() {
                if c.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

static COLOR_SWITCH: Mutex<()> = Mutex::new(());

/// Serialize tests that change the global color switch
pub fn color_switch() -> MutexGuard<'static, ()> {
    COLOR_SWITCH.lock().unwrap_or_else(|e| e.into_inner())
}

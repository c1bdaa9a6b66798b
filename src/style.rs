use crossterm::style::{Color, Stylize};
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorMode {
    /// Color when stdout is a terminal and `NO_COLOR` is unset
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Collapses `Auto` against the current process environment.
    pub fn resolve(self) -> ColorMode {
        match self {
            ColorMode::Auto => {
                if std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal() {
                    ColorMode::Always
                } else {
                    ColorMode::Never
                }
            }
            other => other,
        }
    }
}

/// Colors `text` only for `Always`. Callers resolve `Auto` once up front; an unresolved
/// `Auto` paints nothing.
pub fn paint(text: &str, color: Color, mode: ColorMode) -> String {
    match mode {
        ColorMode::Always => text.with(color).to_string(),
        ColorMode::Auto | ColorMode::Never => text.to_string(),
    }
}

/// Upper-cases the first letter of every word: `"seems down"` becomes `"Seems Down"`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

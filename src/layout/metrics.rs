//! Deterministic text measurement.
//!
//! Layout never consults installed fonts: widths come from a per-family advance model so that
//! the same configuration always breaks lines identically on every machine. The renderer uses
//! the same model, so block heights computed here match what gets drawn.

use crate::config::model::FontFamily;
use crate::layout::scene::TextStyle;

/// Horizontal advance of `ch` in `em` for a regular-weight face of `family`.
pub fn advance_em(family: FontFamily, ch: char) -> f64 {
    if family == FontFamily::Mono {
        return if is_wide(ch) { 1.2 } else { 0.6 };
    }
    let base = match ch {
        ' ' => 0.28,
        'i' | 'j' | 'l' | '.' | ',' | ':' | ';' | '\'' | '|' | '!' => 0.27,
        'f' | 't' | 'r' | 'I' | '(' | ')' | '[' | ']' | '-' => 0.36,
        'm' | 'w' => 0.82,
        'M' | 'W' => 0.9,
        '0'..='9' => 0.56,
        c if c.is_ascii_uppercase() => 0.66,
        c if c.is_ascii_lowercase() => 0.52,
        c if is_wide(c) => 1.0,
        _ => 0.6,
    };
    match family {
        FontFamily::Serif => base * 0.96,
        _ => base,
    }
}

fn is_wide(ch: char) -> bool {
    matches!(
        u32::from(ch),
        0x1100..=0x115F
            | 0x2E80..=0xA4CF
            | 0xAC00..=0xD7A3
            | 0xF900..=0xFAFF
            | 0xFF00..=0xFF60
            | 0x1F300..=0x1FAFF
    )
}

fn weight_factor(weight: u16) -> f64 {
    1.0 + (f64::from(weight) - 400.0) / 100.0 * 0.025
}

/// Running width of a single line, extended one character at a time.
///
/// Pushing the characters of a string in order gives exactly [`measure`] of that string, so
/// callers can test every prefix of a line in one pass.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LineWidth {
    em: f64,
    chars: usize,
}

impl LineWidth {
    pub fn of(text: &str, style: &TextStyle) -> Self {
        let mut w = Self::default();
        w.push_str(text, style);
        w
    }

    pub fn push(&mut self, ch: char, style: &TextStyle) {
        let ch = if style.uppercase {
            ch.to_uppercase().next().unwrap_or(ch)
        } else {
            ch
        };
        self.em += advance_em(style.family, ch);
        self.chars += 1;
    }

    pub fn push_str(&mut self, text: &str, style: &TextStyle) {
        for ch in text.chars() {
            self.push(ch, style);
        }
    }

    pub fn with(mut self, ch: char, style: &TextStyle) -> Self {
        self.push(ch, style);
        self
    }

    pub fn px(self, size_px: f64, style: &TextStyle) -> f64 {
        let tracking = style.letter_spacing * self.chars.saturating_sub(1) as f64;
        (self.em * weight_factor(style.weight) + tracking) * size_px
    }
}

/// Width of `text` on one line at `size_px`.
pub fn measure(text: &str, size_px: f64, style: &TextStyle) -> f64 {
    LineWidth::of(text, style).px(size_px, style)
}

/// Greedy word wrap into lines no wider than `max_width`.
///
/// Words longer than a whole line are broken between characters. Explicit newlines start a
/// new line. Always yields at least one line. Linear in the length of `text`.
pub fn wrap_lines(text: &str, size_px: f64, max_width: f64, style: &TextStyle) -> Vec<String> {
    let fits = |w: LineWidth| w.px(size_px, style) <= max_width;
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut width = LineWidth::default();
        for word in paragraph.split_whitespace() {
            let mut joined = width;
            if !current.is_empty() {
                joined.push(' ', style);
            }
            joined.push_str(word, style);
            if fits(joined) {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
                width = joined;
                continue;
            }
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                width = LineWidth::default();
            }
            let solo = LineWidth::of(word, style);
            if fits(solo) {
                current.push_str(word);
                width = solo;
                continue;
            }
            for ch in word.chars() {
                let next = width.with(ch, style);
                if !current.is_empty() && !fits(next) {
                    lines.push(std::mem::take(&mut current));
                    width = LineWidth::default().with(ch, style);
                } else {
                    width = next;
                }
                current.push(ch);
            }
        }
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Height of `text` laid out at `size_px` within `max_width`.
pub fn block_height(text: &str, size_px: f64, max_width: f64, style: &TextStyle) -> f64 {
    let lines = if style.wrap {
        wrap_lines(text, size_px, max_width, style).len()
    } else {
        1
    };
    lines as f64 * size_px * style.line_height
}

#[cfg(test)]
#[path = "../../tests/unit/layout/metrics.rs"]
mod tests;

//! Text of scalar leaves, shared by both renderers.

use std::fmt::Write as _;

use crate::shape::Complex;

/// Fixed-point with six fractional digits.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "+Inf".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Inf".to_string()
    } else {
        format!("{:.6}", value)
    }
}

/// `(re+imi)`; the imaginary part always carries its sign.
pub fn format_complex(value: Complex) -> String {
    let re = format_float(value.re);
    let mut im = format_float(value.im);
    if !im.starts_with(['+', '-']) {
        im.insert(0, '+');
    }
    format!("({}{}i)", re, im)
}

/// Double-quoted literal with backslash escapes.
///
/// Printable characters are kept as-is. Control and other non-printing
/// characters use the short escapes where one exists, otherwise `\xNN`,
/// `\uNNNN` or `\UNNNNNNNN`.
pub fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{07}' => out.push_str("\\a"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0B}' => out.push_str("\\v"),
            ch if is_printable(ch) => out.push(ch),
            ch => {
                let code = ch as u32;
                // Writing into a String cannot fail.
                let _ = if code < 0x80 {
                    write!(out, "\\x{:02x}", code)
                } else if code < 0x10000 {
                    write!(out, "\\u{:04x}", code)
                } else {
                    write!(out, "\\U{:08x}", code)
                };
            }
        }
    }
    out.push('"');
    out
}

fn is_printable(ch: char) -> bool {
    if ch == ' ' {
        return true;
    }
    if ch.is_control() || ch.is_whitespace() {
        return false;
    }
    !matches!(
        ch,
        '\u{AD}'
            | '\u{200B}'..='\u{200F}'
            | '\u{202A}'..='\u{202E}'
            | '\u{2060}'..='\u{2064}'
            | '\u{FEFF}'
            | '\u{FFF9}'..='\u{FFFB}'
            | '\u{E000}'..='\u{F8FF}'
            | '\u{F0000}'..='\u{10FFFF}'
    )
}

/// Strips module paths from a type name, including inside generic arguments:
/// `alloc::vec::Vec<my::Node>` becomes `Vec<Node>`.
pub fn short_type_name(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut path_start = 0;
    let mut chars = full.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            ':' if chars.peek() == Some(&':') => {
                chars.next();
                out.truncate(path_start);
            }
            ch if ch.is_alphanumeric() || ch == '_' => out.push(ch),
            ch => {
                out.push(ch);
                path_start = out.len();
            }
        }
    }
    out
}

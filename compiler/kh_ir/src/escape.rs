//! Escaping for rendered char, string, byte and buffer literals.
//!
//! Named escapes: `\0`, `\n`, `\r`, `\t`, `\v`, `\b`, `\a`, `\f`, `\\`, `\'`
//! and `\"`. Alphanumerics, whitespace and printable ASCII are written as
//! is. Anything else becomes `\xHH`, `\uHHHH` or `\UHHHHHHHH` depending on
//! its magnitude, with uppercase hex digits.
//!
//! Both quote characters are always escaped, whichever literal they sit in,
//! so the output is the same for a given scalar regardless of context.

use std::fmt::{self, Write};

/// Named escape for `c`, if it has one.
#[inline]
fn named_escape(c: char) -> Option<&'static str> {
    Some(match c {
        '\0' => r"\0",
        '\n' => r"\n",
        '\r' => r"\r",
        '\t' => r"\t",
        '\u{0B}' => r"\v",
        '\u{08}' => r"\b",
        '\u{07}' => r"\a",
        '\u{0C}' => r"\f",
        '\\' => r"\\",
        '\'' => r"\'",
        '"' => r#"\""#,
        _ => return None,
    })
}

/// Write `c` in escaped form.
pub fn write_escaped_char<W: Write + ?Sized>(out: &mut W, c: char) -> fmt::Result {
    if let Some(named) = named_escape(c) {
        return out.write_str(named);
    }
    if c.is_alphanumeric() || c.is_whitespace() || c.is_ascii_graphic() {
        return out.write_char(c);
    }

    let code = u32::from(c);
    if code < 0x100 {
        write!(out, "\\x{code:02X}")
    } else if code < 0x1_0000 {
        write!(out, "\\u{code:04X}")
    } else {
        write!(out, "\\U{code:08X}")
    }
}

/// Write a raw byte in escaped form. Bytes above ASCII are always `\xHH`.
pub fn write_escaped_byte<W: Write + ?Sized>(out: &mut W, byte: u8) -> fmt::Result {
    if byte.is_ascii() {
        write_escaped_char(out, char::from(byte))
    } else {
        write!(out, "\\x{byte:02X}")
    }
}

/// Write `text` between double quotes, escaping every scalar.
pub fn write_quoted_string<W: Write + ?Sized>(out: &mut W, text: &str) -> fmt::Result {
    out.write_char('"')?;
    for c in text.chars() {
        write_escaped_char(out, c)?;
    }
    out.write_char('"')
}

/// Write `bytes` as a `b"..."` buffer literal.
pub fn write_quoted_buffer<W: Write + ?Sized>(out: &mut W, bytes: &[u8]) -> fmt::Result {
    out.write_str("b\"")?;
    for &byte in bytes {
        write_escaped_byte(out, byte)?;
    }
    out.write_char('"')
}

/// Escaped form of a single scalar, without quotes.
pub fn escape_char(c: char) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_escaped_char(&mut out, c);
    out
}

/// `text` as a double-quoted, escaped string literal.
pub fn quote_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    let _ = write_quoted_string(&mut out, text);
    out
}

/// `bytes` as a `b"..."` buffer literal.
pub fn quote_buffer(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() + 3);
    let _ = write_quoted_buffer(&mut out, bytes);
    out
}

use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use std::io;

/// JSON formatter that escapes every non-ASCII character as `\uXXXX`,
/// so the written file contains only ASCII bytes. The delivery step that
/// posts the file expects ASCII-safe JSON regardless of label language.
#[derive(Clone, Copy, Debug, Default)]
pub struct AsciiFormatter;

impl Formatter for AsciiFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        for ch in fragment.chars() {
            if ch.is_ascii() {
                writer.write_all(&[ch as u8])?;
            } else {
                // Astral-plane characters become a surrogate pair.
                let mut units = [0u16; 2];
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}

/// Serializes `value` as compact JSON with non-ASCII characters escaped.
pub fn write_ascii_json<W, T>(writer: W, value: &T) -> serde_json::Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let mut serializer = Serializer::with_formatter(writer, AsciiFormatter);
    value.serialize(&mut serializer)
}

/// Like [`write_ascii_json`], but returns the JSON text.
pub fn to_ascii_json<T>(value: &T) -> serde_json::Result<String>
where
    T: ?Sized + Serialize,
{
    let mut out = Vec::new();
    write_ascii_json(&mut out, value)?;
    // The formatter only ever emits ASCII bytes.
    Ok(String::from_utf8(out).expect("ASCII JSON output"))
}

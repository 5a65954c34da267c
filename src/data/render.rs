use std::io::{self, Write};

use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};

use crate::config::VAR_NAME;
use crate::error::Result;

use super::model::Table;

/// Knobs for the generated JavaScript text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Identifier used in `const <var_name> = ...;`.
    pub var_name: String,
    /// Spaces per nesting level.
    pub indent_width: usize,
    /// Escape everything outside printable ASCII as `\uXXXX`.
    pub ascii_only: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            var_name: VAR_NAME.to_string(),
            indent_width: 2,
            ascii_only: true,
        }
    }
}

/// Render `table` as a single JavaScript statement:
///
/// ```text
/// const irisData = [
///   {
///     "species": "setosa"
///   }
/// ];
/// ```
///
/// No trailing newline follows the semicolon.
pub fn render_js(table: &Table, options: &RenderOptions) -> Result<String> {
    let mut out = format!("const {} = ", options.var_name).into_bytes();
    write_json(&mut out, table, options)?;
    out.push(b';');
    Ok(String::from_utf8(out)?)
}

/// Pretty-print `value` into `writer` using the renderer's formatting rules.
fn write_json<W: Write, T: Serialize + ?Sized>(
    writer: W,
    value: &T,
    options: &RenderOptions,
) -> Result<()> {
    let indent = vec![b' '; options.indent_width];
    let formatter = JsFormatter {
        pretty: PrettyFormatter::with_indent(&indent),
        ascii_only: options.ascii_only,
    };
    let mut ser = serde_json::Serializer::with_formatter(writer, formatter);
    value.serialize(&mut ser)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Formatter
// ---------------------------------------------------------------------------

/// Pretty layout from serde_json plus optional ASCII-only string escaping.
struct JsFormatter<'a> {
    pretty: PrettyFormatter<'a>,
    ascii_only: bool,
}

impl Formatter for JsFormatter<'_> {
    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_array(writer)
    }

    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.pretty.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object(writer)
    }

    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.pretty.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        if !self.ascii_only || fragment.bytes().all(is_printable_ascii) {
            return writer.write_all(fragment.as_bytes());
        }
        let mut units = [0u16; 2];
        for ch in fragment.chars() {
            if ch.is_ascii() && is_printable_ascii(ch as u8) {
                writer.write_all(&[ch as u8])?;
            } else {
                for unit in ch.encode_utf16(&mut units).iter() {
                    write!(writer, "\\u{unit:04x}")?;
                }
            }
        }
        Ok(())
    }
}

fn is_printable_ascii(b: u8) -> bool {
    (b' '..=b'~').contains(&b)
}

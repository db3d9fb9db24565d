use std::fmt::{self, Write};

use nbt_types::{ByteString, RootTag, TagKind, TagValue, Visit};

/// Pretty renderer: the classic indented NBT dump.
///
/// Every tag gets its own line, headed by the kind's display name and, for
/// named tags, the name in parentheses. Containers report their size and
/// wrap their children in braces at the container's own indentation.
///
/// Example output (indent 4):
///
/// ```text
/// TAG_Compound("hello world"): 2 entries
/// {
///     TAG_List("scores"):2 entries of type TAG_Int
///     {
///         TAG_Int: 7
///         TAG_Int: -1
///     }
///     TAG_String("name"): Bananrama
/// }
/// ```
///
/// Compound members print in byte-wise name order. Byte and int arrays
/// print only their length; strings print as lossy UTF-8.
pub struct PrettyRenderer;

impl PrettyRenderer {
    /// Render `root` into a new string.
    #[must_use]
    pub fn render_all(root: &RootTag, indent: usize) -> String {
        let mut out = String::new();
        Self::write_tree(root, indent, &mut out).expect("writing to a String never fails");
        out
    }

    /// Render `root` into any [`fmt::Write`] sink, one line per tag.
    ///
    /// # Errors
    ///
    /// Propagates errors from the sink.
    pub fn write_tree<W: Write + ?Sized>(root: &RootTag, indent: usize, out: &mut W) -> fmt::Result {
        for visit in root.walk() {
            match visit {
                Visit::Enter { name, value, depth } => {
                    let pad = indent * depth;
                    write!(out, "{:pad$}", "")?;
                    write_header(out, value.kind(), name)?;
                    write_value(out, value)?;
                    out.write_char('\n')?;
                    if value.is_container() {
                        writeln!(out, "{:pad$}{{", "")?;
                    }
                }
                Visit::Exit { depth, .. } => {
                    let pad = indent * depth;
                    writeln!(out, "{:pad$}}}", "")?;
                }
            }
        }
        Ok(())
    }
}

fn write_header<W: Write + ?Sized>(
    out: &mut W,
    kind: TagKind,
    name: Option<&ByteString>,
) -> fmt::Result {
    out.write_str(kind.name())?;
    if let Some(name) = name {
        write!(out, "(\"{name}\")")?;
    }
    out.write_char(':')
}

fn write_value<W: Write + ?Sized>(out: &mut W, value: &TagValue) -> fmt::Result {
    match value {
        TagValue::Byte(v) => write!(out, " {v}"),
        TagValue::Short(v) => write!(out, " {v}"),
        TagValue::Int(v) => write!(out, " {v}"),
        TagValue::Long(v) => write!(out, " {v}"),
        TagValue::Float(v) => write!(out, " {v}"),
        TagValue::Double(v) => write!(out, " {v}"),
        TagValue::ByteArray(bytes) => write!(out, " [{} bytes]", bytes.len()),
        TagValue::String(s) => write!(out, " {s}"),
        TagValue::IntArray(ints) => write!(out, " [{} ints]", ints.len()),
        // The classic dump puts no space between the colon and a list's count.
        TagValue::List(list) => write!(
            out,
            "{} entries of type {}",
            list.len(),
            list.element_kind()
        ),
        TagValue::Compound(compound) => write!(out, " {} entries", compound.len()),
    }
}

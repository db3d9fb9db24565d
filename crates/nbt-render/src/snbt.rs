use std::fmt::{self, Write};

use nbt_types::{RootTag, TagValue, Visit};

/// SNBT renderer: stringified NBT on a single line.
///
/// ```text
/// {list:[1s,2s],name:"Steve",pos:[I;0,64,0],"sp ace":1.5f}
/// ```
///
/// | Kind      | Form          |
/// |-----------|---------------|
/// | Byte      | `1b`          |
/// | Short     | `1s`          |
/// | Int       | `1`           |
/// | Long      | `1L`          |
/// | Float     | `1.5f`        |
/// | Double    | `1.5d`        |
/// | ByteArray | `[B;1b,2b]`   |
/// | IntArray  | `[I;1,2]`     |
/// | String    | `"text"`      |
/// | List      | `[a,b]`       |
/// | Compound  | `{k:v}`       |
///
/// Only the root value is printed; the root name has no SNBT form.
/// Compound keys made of `[A-Za-z0-9_.+-]` print bare, anything else is
/// quoted. Strings are always quoted. Inside quotes, `"` and `\` are
/// backslash-escaped.
pub struct SnbtRenderer;

impl SnbtRenderer {
    /// Render `root` into a new string.
    #[must_use]
    pub fn render_all(root: &RootTag) -> String {
        let mut out = String::new();
        Self::write_tree(root, &mut out).expect("writing to a String never fails");
        out
    }

    /// Render `root` into any [`fmt::Write`] sink.
    ///
    /// # Errors
    ///
    /// Propagates errors from the sink.
    pub fn write_tree<W: Write + ?Sized>(root: &RootTag, out: &mut W) -> fmt::Result {
        // One flag per open container: has it printed a child yet?
        let mut open: Vec<bool> = Vec::new();

        for visit in root.walk() {
            match visit {
                Visit::Enter { name, value, depth } => {
                    if let Some(seen_child) = open.last_mut() {
                        if *seen_child {
                            out.write_char(',')?;
                        }
                        *seen_child = true;
                    }
                    if let (Some(name), true) = (name, depth > 0) {
                        write_key(out, &name.to_string_lossy())?;
                        out.write_char(':')?;
                    }
                    match value {
                        TagValue::List(_) => {
                            out.write_char('[')?;
                            open.push(false);
                        }
                        TagValue::Compound(_) => {
                            out.write_char('{')?;
                            open.push(false);
                        }
                        leaf => write_leaf(out, leaf)?,
                    }
                }
                Visit::Exit { value, .. } => {
                    open.pop();
                    out.write_char(if matches!(value, TagValue::List(_)) { ']' } else { '}' })?;
                }
            }
        }
        Ok(())
    }
}

fn write_leaf<W: Write + ?Sized>(out: &mut W, value: &TagValue) -> fmt::Result {
    match value {
        TagValue::Byte(v) => write!(out, "{v}b"),
        TagValue::Short(v) => write!(out, "{v}s"),
        TagValue::Int(v) => write!(out, "{v}"),
        TagValue::Long(v) => write!(out, "{v}L"),
        TagValue::Float(v) => write!(out, "{v}f"),
        TagValue::Double(v) => write!(out, "{v}d"),
        TagValue::ByteArray(bytes) => {
            out.write_str("[B;")?;
            for (i, b) in bytes.iter().enumerate() {
                if i > 0 {
                    out.write_char(',')?;
                }
                write!(out, "{}b", i8::from_ne_bytes([*b]))?;
            }
            out.write_char(']')
        }
        TagValue::IntArray(ints) => {
            out.write_str("[I;")?;
            for (i, v) in ints.iter().enumerate() {
                if i > 0 {
                    out.write_char(',')?;
                }
                write!(out, "{v}")?;
            }
            out.write_char(']')
        }
        TagValue::String(s) => write_quoted(out, &s.to_string_lossy()),
        TagValue::List(_) | TagValue::Compound(_) => {
            unreachable!("containers are opened by the walker loop")
        }
    }
}

fn is_bare_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'.' | b'+'))
}

fn write_key<W: Write + ?Sized>(out: &mut W, key: &str) -> fmt::Result {
    if is_bare_key(key) {
        out.write_str(key)
    } else {
        write_quoted(out, key)
    }
}

fn write_quoted<W: Write + ?Sized>(out: &mut W, text: &str) -> fmt::Result {
    out.write_char('"')?;
    for c in text.chars() {
        if matches!(c, '"' | '\\') {
            out.write_char('\\')?;
        }
        out.write_char(c)?;
    }
    out.write_char('"')
}

#[cfg(test)]
mod tests {
    use nbt_types::{Compound, TagKind, TagList};

    use super::*;

    fn snbt(value: TagValue) -> String {
        SnbtRenderer::render_all(&RootTag::new("ignored", value))
    }

    #[test]
    fn numeric_suffixes() {
        assert_eq!(snbt(TagValue::Byte(-1)), "-1b");
        assert_eq!(snbt(TagValue::Short(300)), "300s");
        assert_eq!(snbt(TagValue::Int(7)), "7");
        assert_eq!(snbt(TagValue::Long(i64::MIN)), "-9223372036854775808L");
        assert_eq!(snbt(TagValue::Float(1.5)), "1.5f");
        assert_eq!(snbt(TagValue::Double(-0.25)), "-0.25d");
    }

    #[test]
    fn arrays() {
        assert_eq!(snbt(TagValue::ByteArray(vec![1, 0xFF])), "[B;1b,-1b]");
        assert_eq!(snbt(TagValue::IntArray(vec![0, -5])), "[I;0,-5]");
        assert_eq!(snbt(TagValue::IntArray(vec![])), "[I;]");
    }

    #[test]
    fn strings_are_escaped() {
        assert_eq!(
            snbt(TagValue::String("say \"hi\" \\o/".into())),
            r#""say \"hi\" \\o/""#
        );
    }

    #[test]
    fn keys_quote_only_when_needed() {
        let mut c = Compound::new();
        c.insert("plain_key", TagValue::Byte(1));
        c.insert("has space", TagValue::Byte(2));
        c.insert("", TagValue::Byte(3));
        assert_eq!(
            snbt(TagValue::Compound(c)),
            r#"{"":3b,"has space":2b,plain_key:1b}"#
        );
    }

    #[test]
    fn nested_containers() {
        let mut inner = TagList::new(TagKind::Compound);
        let mut a = Compound::new();
        a.insert("x", TagValue::Int(1));
        inner.push(TagValue::Compound(a)).unwrap();
        inner.push(TagValue::Compound(Compound::new())).unwrap();

        let mut root = Compound::new();
        root.insert("items", TagValue::List(inner));
        root.insert("empty", TagValue::List(TagList::new(TagKind::End)));
        assert_eq!(
            snbt(TagValue::Compound(root)),
            "{empty:[],items:[{x:1},{}]}"
        );
    }
}

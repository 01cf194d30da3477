use alloc::{
    string::{String, ToString},
    vec::Vec,
};
use core::fmt::{self, Write};

use crate::Value;

/// Renders the value.
///
/// `{}` gives a single line: `[1, 2, {a: true}]`. `{:#}` puts one element
/// per line and indents nested containers by four spaces. Mapping keys are
/// printed in sorted order.
///
/// Width, fill, alignment and precision apply to scalars and strings the
/// way they apply to `str`: `{:>6}` pads `1` to `     1`. Composites ignore
/// them.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.kind().is_composite() && (f.width().is_some() || f.precision().is_some()) {
            return match self {
                Value::String(s) => f.pad(s),
                scalar => f.pad(&scalar.to_string()),
            };
        }
        let layout = if f.alternate() {
            Layout::Pretty(0)
        } else {
            Layout::Compact
        };
        write_value(f, self, layout)
    }
}

impl Value {
    /// The text produced by `Display`, recursing into composites.
    pub fn description(&self) -> String {
        self.to_string()
    }
}

#[derive(Clone, Copy)]
enum Layout {
    Compact,
    Pretty(usize),
}

impl Layout {
    fn nested(self) -> Self {
        match self {
            Layout::Compact => Layout::Compact,
            Layout::Pretty(depth) => Layout::Pretty(depth + 1),
        }
    }
}

enum Key<'a> {
    Str(&'a str),
    Int(i32),
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Str(key) => f.write_str(key),
            Key::Int(key) => write!(f, "{key}"),
        }
    }
}

fn write_value(f: &mut fmt::Formatter<'_>, value: &Value, layout: Layout) -> fmt::Result {
    match value {
        Value::Null => f.write_str("null"),
        Value::Byte(v) => write!(f, "{v}"),
        Value::Int(v) => write!(f, "{v}"),
        Value::UnsignedInt(v) => write!(f, "{v}"),
        Value::Float(v) => format_float(f, f64::from(*v), v),
        Value::Double(v) => format_float(f, *v, v),
        Value::Bool(v) => write!(f, "{v}"),
        Value::String(s) => f.write_str(s),
        Value::Vector(items) => write_container(
            f,
            ('[', ']'),
            items.iter().map(|item| (None, item)),
            layout,
        ),
        Value::Map(map) => {
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
            write_container(
                f,
                ('{', '}'),
                entries
                    .into_iter()
                    .map(|(key, item)| (Some(Key::Str(key)), item)),
                layout,
            )
        }
        Value::IntKeyMap(map) => {
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_unstable_by_key(|(key, _)| **key);
            write_container(
                f,
                ('{', '}'),
                entries
                    .into_iter()
                    .map(|(key, item)| (Some(Key::Int(*key)), item)),
                layout,
            )
        }
    }
}

fn write_container<'a>(
    f: &mut fmt::Formatter<'_>,
    (open, close): (char, char),
    entries: impl ExactSizeIterator<Item = (Option<Key<'a>>, &'a Value)>,
    layout: Layout,
) -> fmt::Result {
    f.write_char(open)?;
    if entries.len() == 0 {
        return f.write_char(close);
    }

    for (i, (key, item)) in entries.enumerate() {
        match layout {
            Layout::Compact => {
                if i > 0 {
                    f.write_str(", ")?;
                }
            }
            Layout::Pretty(depth) => {
                if i > 0 {
                    f.write_char(',')?;
                }
                f.write_char('\n')?;
                write_indent(f, depth + 1)?;
            }
        }
        if let Some(key) = key {
            write!(f, "{key}: ")?;
        }
        write_value(f, item, layout.nested())?;
    }

    if let Layout::Pretty(depth) = layout {
        f.write_char('\n')?;
        write_indent(f, depth)?;
    }
    f.write_char(close)
}

fn write_indent(f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        f.write_str("    ")?;
    }
    Ok(())
}

/// Format a float so it always reads as one: `3.0`, not `3`.
///
/// `value` is only used to classify; `text` is printed so that an `f32`
/// keeps its own shortest representation.
fn format_float(f: &mut fmt::Formatter<'_>, value: f64, text: &dyn fmt::Display) -> fmt::Result {
    if value.is_nan() {
        f.write_str("nan")
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            f.write_str("inf")
        } else {
            f.write_str("-inf")
        }
    } else {
        let s = text.to_string();
        if s.contains('.') || s.contains('e') || s.contains('E') {
            f.write_str(&s)
        } else {
            write!(f, "{s}.0")
        }
    }
}

// Ad-hoc field layouts for inspecting buffers without a message type.
//
// A layout is a comma-separated list of field kinds, e.g.
// `u16,i32,string,bytes,blob:4`, decoded in order with the typed reads.

use std::fmt;
use std::str::FromStr;

use super::cursor::Cursor;
use super::error::{DecodeError, Result};

/// One primitive read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single raw byte.
    Byte,
    I8,
    Bool,
    Char,
    U16,
    U32,
    U64,
    I16,
    I32,
    I64,
    F32,
    F64,
    /// Length-prefixed UTF-8 text.
    String,
    /// Length-prefixed bytes, zero length meaning absent.
    Bytes,
    /// Exactly `n` raw bytes with no prefix.
    Blob(usize),
    /// Skip `n` bytes.
    Skip(usize),
}

impl FieldKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Byte => "byte",
            Self::I8 => "i8",
            Self::Bool => "bool",
            Self::Char => "char",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::String => "string",
            Self::Bytes => "bytes",
            Self::Blob(_) => "blob",
            Self::Skip(_) => "skip",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blob(n) | Self::Skip(n) => write!(f, "{}:{n}", self.name()),
            _ => f.write_str(self.name()),
        }
    }
}

impl FromStr for FieldKind {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (s, None),
        };
        let count = |arg: Option<&str>| -> Result<usize> {
            let arg = arg.ok_or_else(|| {
                DecodeError::InvalidArgument(format!("field '{name}' needs a byte count"))
            })?;
            arg.trim()
                .parse()
                .map_err(|e| DecodeError::InvalidArgument(format!("field '{s}': {e}")))
        };
        let kind = match name.to_ascii_lowercase().as_str() {
            "byte" | "u8" => Self::Byte,
            "i8" | "sbyte" => Self::I8,
            "bool" => Self::Bool,
            "char" => Self::Char,
            "u16" => Self::U16,
            "u32" => Self::U32,
            "u64" => Self::U64,
            "i16" => Self::I16,
            "i32" => Self::I32,
            "i64" => Self::I64,
            "f32" | "float" => Self::F32,
            "f64" | "double" => Self::F64,
            "string" | "str" => Self::String,
            "bytes" => Self::Bytes,
            "blob" => Self::Blob(count(arg)?),
            "skip" => Self::Skip(count(arg)?),
            _ => {
                return Err(DecodeError::InvalidArgument(format!(
                    "unknown field kind '{s}'"
                )));
            }
        };
        if arg.is_some() && !matches!(kind, Self::Blob(_) | Self::Skip(_)) {
            return Err(DecodeError::InvalidArgument(format!(
                "field '{name}' takes no argument"
            )));
        }
        Ok(kind)
    }
}

/// Parse a comma-separated layout. Empty entries are ignored.
pub fn parse_layout(text: &str) -> Result<Vec<FieldKind>> {
    text.split(',')
        .filter(|part| !part.trim().is_empty())
        .map(str::parse)
        .collect()
}

/// A decoded field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Bool(bool),
    Char(char),
    Text(String),
    /// `None` for an absent length-prefixed field.
    Bytes(Option<Vec<u8>>),
    Skipped(usize),
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsigned(v) => write!(f, "{v}"),
            Self::Signed(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Char(v) => write!(f, "{v:?}"),
            Self::Text(v) => write!(f, "{v:?}"),
            Self::Bytes(None) => f.write_str("<absent>"),
            Self::Bytes(Some(b)) => {
                f.write_str("[")?;
                for (i, byte) in b.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{byte:02x}")?;
                }
                f.write_str("]")
            }
            Self::Skipped(n) => write!(f, "<{n} bytes skipped>"),
        }
    }
}

/// Read one field of the given kind.
pub fn decode_field(cursor: &mut Cursor<'_>, kind: FieldKind) -> Result<Field> {
    Ok(match kind {
        FieldKind::Byte => Field::Unsigned(u64::from(cursor.read_byte()?)),
        FieldKind::I8 => Field::Signed(i64::from(cursor.read_i8()?)),
        FieldKind::Bool => Field::Bool(cursor.read_bool()?),
        FieldKind::Char => Field::Char(cursor.read_char()?),
        FieldKind::U16 => Field::Unsigned(u64::from(cursor.read_u16()?)),
        FieldKind::U32 => Field::Unsigned(u64::from(cursor.read_u32()?)),
        FieldKind::U64 => Field::Unsigned(cursor.read_u64()?),
        FieldKind::I16 => Field::Signed(i64::from(cursor.read_i16()?)),
        FieldKind::I32 => Field::Signed(i64::from(cursor.read_i32()?)),
        FieldKind::I64 => Field::Signed(cursor.read_i64()?),
        FieldKind::F32 => Field::Float(f64::from(cursor.read_f32()?)),
        FieldKind::F64 => Field::Float(cursor.read_f64()?),
        FieldKind::String => Field::Text(cursor.read_string()?),
        FieldKind::Bytes => Field::Bytes(cursor.read_length_prefixed_bytes()?),
        FieldKind::Blob(n) => Field::Bytes(Some(cursor.read_raw(n)?)),
        FieldKind::Skip(n) => {
            cursor.skip(n)?;
            Field::Skipped(n)
        }
    })
}

/// Read every field of `layout` in order, failing on the first error.
pub fn decode_layout(cursor: &mut Cursor<'_>, layout: &[FieldKind]) -> Result<Vec<Field>> {
    layout
        .iter()
        .map(|&kind| decode_field(cursor, kind))
        .collect()
}

use crate::{ByteArray, IntArray, Tag};

/// The decoded payload of a single scalar NBT tag.
///
/// Compounds and lists never become a `Value`. The decoder descends into
/// them and binds their children individually.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(ByteArray),
    String(String),
    IntArray(IntArray),
}

impl Value {
    /// The tag this value was decoded from.
    pub fn tag(&self) -> Tag {
        match self {
            Value::Byte(_) => Tag::Byte,
            Value::Short(_) => Tag::Short,
            Value::Int(_) => Tag::Int,
            Value::Long(_) => Tag::Long,
            Value::Float(_) => Tag::Float,
            Value::Double(_) => Tag::Double,
            Value::ByteArray(_) => Tag::ByteArray,
            Value::String(_) => Tag::String,
            Value::IntArray(_) => Tag::IntArray,
        }
    }
}

//! nbtbind decodes NBT data from *Minecraft: Java Edition* straight into your
//! own types. NBT is the format the game uses to store world data, player
//! inventories, level metadata and so on.
//!
//! Rather than producing a generic tree, the decoder walks the stream and
//! routes each tag into the field of your value whose name matches the tag's
//! name, case-insensitively. Tags with no matching field are decoded to keep
//! the stream aligned, then dropped. This makes it easy to pull a handful of
//! known fields out of a much larger document.
//!
//! * For the decoding entry points and options see [`de`].
//! * For how a type describes its fields see [`schema`] and the [`schema!`]
//!   macro.
//! * For the NBT array types see [`ByteArray`] and [`IntArray`].
//!
//! The decoder does not decompress. Most NBT files on disk are gzip
//! compressed, so wrap the file in a decoder such as `flate2`'s `GzDecoder`
//! first.
//!
//! # Quick example
//!
//! ```
//! use nbtbind::{de::from_bytes, schema};
//!
//! #[derive(Debug, Default)]
//! struct Level {
//!     byte_test: i8,
//!     nested: Egg,
//! }
//!
//! #[derive(Debug, Default)]
//! struct Egg {
//!     name: String,
//!     value: f32,
//! }
//!
//! schema!(Level {
//!     byte_test: "ByteTest",
//!     nested,
//! });
//! schema!(Egg { name, value });
//!
//! let data = [
//!     10, 0, 5, b'L', b'e', b'v', b'e', b'l',
//!         1, 0, 8, b'B', b'y', b't', b'e', b'T', b'e', b's', b't', 0x7f,
//!         10, 0, 6, b'N', b'e', b's', b't', b'e', b'd',
//!             5, 0, 5, b'V', b'a', b'l', b'u', b'e', 0x3f, 0, 0, 0,
//!         0,
//!     0,
//! ];
//!
//! let mut level = Level::default();
//! from_bytes(&data, &mut level).unwrap();
//!
//! assert_eq!(level.byte_test, 127);
//! assert_eq!(level.nested.value, 0.5);
//! ```

pub mod de;
pub mod error;
pub mod input;
pub mod schema;

mod arrays;
mod macros;
mod value;

pub use arrays::*;
pub use value::*;

#[cfg(test)]
mod test;

use std::convert::TryFrom;
use std::fmt;

/// An NBT tag. This does not carry the value or the name of the data.
///
/// Wherever the decoder takes a declared tag, `None` stands for "not known
/// yet": the tag header has to be read from the stream.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[repr(u8)]
pub enum Tag {
    /// Represents the end of a Compound object.
    End = 0,
    /// Equivalent to i8.
    Byte = 1,
    /// Equivalent to i16.
    Short = 2,
    /// Equivalent to i32.
    Int = 3,
    /// Equivalent to i64
    Long = 4,
    /// Equivalent to f32.
    Float = 5,
    /// Equivalent to f64.
    Double = 6,
    /// Represents as array of Byte (i8).
    ByteArray = 7,
    /// Represents a string. Decoded from Java's modified UTF-8.
    String = 8,
    /// Represents a list of unnamed elements, all of the same tag.
    List = 9,
    /// Represents a struct-like structure.
    Compound = 10,
    /// Represents as array of Int (i32).
    IntArray = 11,
}

impl Tag {
    /// Canonical name of the tag, used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Tag::End => "TAG_END",
            Tag::Byte => "TAG_BYTE",
            Tag::Short => "TAG_SHORT",
            Tag::Int => "TAG_INT",
            Tag::Long => "TAG_LONG",
            Tag::Float => "TAG_FLOAT",
            Tag::Double => "TAG_DOUBLE",
            Tag::ByteArray => "TAG_BYTE_ARRAY",
            Tag::String => "TAG_STRING",
            Tag::List => "TAG_LIST",
            Tag::Compound => "TAG_COMPOUND",
            Tag::IntArray => "TAG_INT_ARRAY",
        }
    }

    /// Name of a declared tag, where `None` is a tag yet to be read.
    pub fn declared_name(tag: Option<Tag>) -> &'static str {
        tag.map_or("TAG_UNKNOWN", Tag::name)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Written out by hand rather than derived, the tags very rarely change.
impl TryFrom<u8> for Tag {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, ()> {
        use Tag::*;
        Ok(match value {
            0 => End,
            1 => Byte,
            2 => Short,
            3 => Int,
            4 => Long,
            5 => Float,
            6 => Double,
            7 => ByteArray,
            8 => String,
            9 => List,
            10 => Compound,
            11 => IntArray,
            12..=u8::MAX => return Err(()),
        })
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> Self {
        tag as u8
    }
}

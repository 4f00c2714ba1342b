//! Primitive readers for the NBT wire format.
//!
//! Every number is big-endian. Each reader consumes exactly the bytes its
//! payload needs. A short read is an error and is never retried.

use std::convert::TryFrom;
use std::io::Read;

use byteorder::{BigEndian, ReadBytesExt};

use crate::error::{Error, Result};
use crate::{ByteArray, IntArray, Tag, Value};

// Upper bound on elements allocated ahead of reading them. Lengths come from
// the input, so anything beyond this grows as the data actually arrives.
const MAX_PREALLOC: usize = 4096;

/// Reads NBT primitives from any reader. Does not do decompression.
pub struct Input<R: Read> {
    reader: R,
}

impl<R: Read> Input<R> {
    /// Create new input for the given reader.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Gets a reference to the underlying reader.
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Gets a mutable reference to the underlying reader.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.reader
    }

    /// Consumes this input, returning the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Reads a one byte tag type.
    pub fn read_tag(&mut self) -> Result<Tag> {
        let tag = self.reader.read_u8()?;
        Tag::try_from(tag).map_err(|_| Error::invalid_tag(tag))
    }

    pub fn read_byte(&mut self) -> Result<i8> {
        Ok(self.reader.read_i8()?)
    }

    pub fn read_short(&mut self) -> Result<i16> {
        Ok(self.reader.read_i16::<BigEndian>()?)
    }

    pub fn read_int(&mut self) -> Result<i32> {
        Ok(self.reader.read_i32::<BigEndian>()?)
    }

    pub fn read_long(&mut self) -> Result<i64> {
        Ok(self.reader.read_i64::<BigEndian>()?)
    }

    pub fn read_float(&mut self) -> Result<f32> {
        Ok(self.reader.read_f32::<BigEndian>()?)
    }

    pub fn read_double(&mut self) -> Result<f64> {
        Ok(self.reader.read_f64::<BigEndian>()?)
    }

    /// Reads the signed 32-bit length of an array or list. Negative lengths
    /// are malformed.
    pub fn read_len(&mut self) -> Result<usize> {
        let len = self.read_int()?;
        usize::try_from(len).map_err(|_| Error::malformed_length(len))
    }

    /// Reads a length followed by that many raw bytes.
    pub fn read_byte_array(&mut self) -> Result<ByteArray> {
        let len = self.read_len()?;
        let mut buf = Vec::with_capacity(len.min(MAX_PREALLOC));

        (&mut self.reader).take(len as u64).read_to_end(&mut buf)?;
        if buf.len() != len {
            return Err(unexpected_eof());
        }

        Ok(ByteArray::new(buf.into_iter().map(|b| b as i8).collect()))
    }

    /// Reads a length followed by that many ints.
    pub fn read_int_array(&mut self) -> Result<IntArray> {
        let len = self.read_len()?;
        let mut data = Vec::with_capacity(len.min(MAX_PREALLOC));

        for _ in 0..len {
            data.push(self.read_int()?);
        }

        Ok(IntArray::new(data))
    }

    /// Reads an unsigned 16-bit length followed by that many bytes of string
    /// data.
    ///
    /// Strings are not validated. NBT uses Java's modified UTF-8; data that is
    /// not valid in that encoding is converted lossily rather than rejected.
    pub fn read_string(&mut self) -> Result<String> {
        let len = self.reader.read_u16::<BigEndian>()? as usize;

        let mut buf = vec![0; len];
        self.reader.read_exact(&mut buf[..])?;

        Ok(match cesu8::from_java_cesu8(&buf) {
            Ok(s) => s.into_owned(),
            Err(_) => String::from_utf8_lossy(&buf).into_owned(),
        })
    }

    /// Reads the payload of a scalar tag.
    pub fn read_value(&mut self, tag: Tag) -> Result<Value> {
        Ok(match tag {
            Tag::Byte => Value::Byte(self.read_byte()?),
            Tag::Short => Value::Short(self.read_short()?),
            Tag::Int => Value::Int(self.read_int()?),
            Tag::Long => Value::Long(self.read_long()?),
            Tag::Float => Value::Float(self.read_float()?),
            Tag::Double => Value::Double(self.read_double()?),
            Tag::ByteArray => Value::ByteArray(self.read_byte_array()?),
            Tag::String => Value::String(self.read_string()?),
            Tag::IntArray => Value::IntArray(self.read_int_array()?),
            Tag::End | Tag::List | Tag::Compound => {
                return Err(Error::bespoke(format!("{} has no scalar payload", tag)))
            }
        })
    }
}

fn unexpected_eof() -> Error {
    std::io::Error::from(std::io::ErrorKind::UnexpectedEof).into()
}

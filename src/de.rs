//! Decoding NBT into your own types.
//!
//! The entry points are [`from_bytes`] and [`from_reader`], which decode one
//! root compound into a value you own. The value is filled in place, so any
//! field without a matching tag keeps whatever it held before. A
//! [`Decoder`] does the same with [`DeOpts`] for finer control.
//!
//! # Binding by name
//!
//! Each child tag of a compound goes to the field registered under the same
//! name, ignoring case. See [`schema`][`crate::schema`] for how types register
//! fields. The root tag is special: it binds to the target itself when it is
//! unnamed, or when its name matches the target's
//! [`type_name`][`crate::schema::Schema::type_name`].
//!
//! | NBT tag   | Field type                                 |
//! |-----------|--------------------------------------------|
//! | Byte      | `i8`                                       |
//! | Short     | `i16`                                      |
//! | Int       | `i32`                                      |
//! | Long      | `i64`                                      |
//! | Float     | `f32`                                      |
//! | Double    | `f64`                                      |
//! | ByteArray | [`ByteArray`][`crate::ByteArray`]          |
//! | String    | `String`                                   |
//! | List      | `Vec<T>`, for a `T` matching the elements  |
//! | Compound  | any [`Schema`][`crate::schema::Schema`]    |
//! | IntArray  | [`IntArray`][`crate::IntArray`]            |
//!
//! # Lenient by default
//!
//! A tag with no matching field is still read in full, so the rest of the
//! stream stays aligned, and then dropped. A tag whose field has the wrong
//! type is dropped the same way. There is no conversion between types, an
//! Int tag never fills an `i64` field. This lets a small struct pick a few
//! fields out of a large document. Both cases are logged at `debug` level.
//!
//! With [`DeOpts::strict`] these become errors instead.
//!
//! Elements of a list bound to a `Vec` are appended after the existing
//! contents. An element whose tag does not fit the element type is appended
//! as its default value.
//!
//! # Errors
//!
//! Running out of input, a failing reader, an unknown tag type, a negative
//! length or nesting past [`DeOpts::max_depth`] abort the decode. The target
//! may be partially filled afterwards.
//!
//! # Example
//!
//! ```no_run
//! use flate2::read::GzDecoder;
//! use nbtbind::{de::from_reader, schema};
//!
//! #[derive(Debug, Default)]
//! struct LevelDat {
//!     data: Data,
//! }
//!
//! #[derive(Debug, Default)]
//! struct Data {
//!     level_name: String,
//!     spawn_x: i32,
//!     spawn_y: i32,
//!     spawn_z: i32,
//! }
//!
//! schema!(LevelDat { data });
//! schema!(Data {
//!     level_name: "LevelName",
//!     spawn_x: "SpawnX",
//!     spawn_y: "SpawnY",
//!     spawn_z: "SpawnZ",
//! });
//!
//! let file = std::fs::File::open("level.dat").unwrap();
//! let mut level = LevelDat::default();
//! from_reader(GzDecoder::new(file), &mut level).unwrap();
//!
//! println!("{:?}", level);
//! ```

use std::io::Read;

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::input::Input;
use crate::schema::{self, Binding, Schema, Sequence};
use crate::Tag;

/// Options for customizing decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeOpts {
    pub(crate) max_depth: usize,
    pub(crate) strict: bool,
}

impl DeOpts {
    /// Create new options. This object follows a builder pattern.
    pub fn new() -> Self {
        Self {
            max_depth: 256,
            strict: false,
        }
    }

    /// Maximum nesting of compounds and lists before decoding fails with
    /// [`ErrorKind::DepthExceeded`][`crate::error::ErrorKind::DepthExceeded`].
    /// Default is 256, which fits a 2 MiB thread stack even in debug builds.
    /// Raising it needs a correspondingly larger stack.
    pub fn max_depth(mut self, value: usize) -> Self {
        self.max_depth = value;
        self
    }

    /// Fail on tags that have no field, or whose field cannot hold them,
    /// rather than skipping them. Default is false.
    pub fn strict(mut self, value: bool) -> Self {
        self.strict = value;
        self
    }
}

impl Default for DeOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Decodes NBT from a reader into values implementing [`Schema`].
pub struct Decoder<R: Read> {
    input: Input<R>,
    opts: DeOpts,
    depth: usize,
}

impl<R: Read> Decoder<R> {
    /// Create a decoder for the given reader with default options.
    pub fn new(reader: R) -> Self {
        Self::with_opts(reader, DeOpts::new())
    }

    pub fn with_opts(reader: R, opts: DeOpts) -> Self {
        Self {
            input: Input::new(reader),
            opts,
            depth: 0,
        }
    }

    /// Consumes this decoder, returning the underlying reader.
    pub fn into_inner(self) -> R {
        self.input.into_inner()
    }

    /// Decode the next root tag into `target`.
    pub fn decode<T: Schema>(&mut self, target: &mut T) -> Result<()> {
        self.depth = 0;
        self.decode_tag(None, "", Some(Binding::Nested(target)))?;
        Ok(())
    }

    /// Decode one tag into `target`, returning its tag.
    ///
    /// With `declared` as `None` the tag header is read first. An End tag
    /// returns straight away, which is how a compound learns it is finished.
    /// With a declared tag, as for list elements, there is no header and no
    /// name, and the element is reported under the name of its `list`.
    ///
    /// A `None` target discards whatever is decoded.
    ///
    /// Every level of nesting passes through here. Keep its locals few.
    fn decode_tag(
        &mut self,
        declared: Option<Tag>,
        list: &str,
        target: Option<Binding<'_>>,
    ) -> Result<Tag> {
        let (name, tag) = match declared {
            Some(tag) => (String::new(), tag),
            None => match self.read_header()? {
                Some(header) => header,
                None => return Ok(Tag::End),
            },
        };

        let binding = self.bind(declared, tag, &name, target)?;
        let name = if declared.is_some() { list } else { name.as_str() };

        match tag {
            // List of End elements. They have no payload.
            Tag::End => {}
            Tag::Compound => self.decode_compound(name, binding)?,
            Tag::List => self.decode_list(name, binding)?,
            _ => self.decode_value(name, tag, binding)?,
        }

        Ok(tag)
    }

    /// Read a tag type and, unless it is End, the name after it.
    fn read_header(&mut self) -> Result<Option<(String, Tag)>> {
        let tag = self.input.read_tag()?;
        if tag == Tag::End {
            return Ok(None);
        }
        Ok(Some((self.input.read_string()?, tag)))
    }

    /// Find the binding for a tag called `name` in `target`.
    fn bind<'t>(
        &self,
        declared: Option<Tag>,
        tag: Tag,
        name: &str,
        target: Option<Binding<'t>>,
    ) -> Result<Option<Binding<'t>>> {
        trace!("{} {:?} (declared {})", tag, name, Tag::declared_name(declared));

        let target = match target {
            Some(target) => target,
            None => return Ok(None),
        };

        let binding = schema::resolve(target, name);
        if binding.is_none() {
            self.unknown(name)?;
        }
        Ok(binding)
    }

    fn decode_compound(&mut self, name: &str, binding: Option<Binding<'_>>) -> Result<()> {
        let mut target = match binding {
            Some(nested @ Binding::Nested(_)) => Some(nested),
            Some(_) => {
                self.mismatch(name, Tag::Compound)?;
                None
            }
            None => None,
        };

        self.enter()?;
        while self.decode_tag(None, "", target.as_mut().map(Binding::reborrow))? != Tag::End {}
        self.depth -= 1;
        Ok(())
    }

    fn decode_list(&mut self, name: &str, binding: Option<Binding<'_>>) -> Result<()> {
        let element_tag = self.input.read_tag()?;
        let len = self.input.read_len()?;

        // End elements have no payload, so a long list of them costs nothing
        // to send but a default element each to store.
        if element_tag == Tag::End && len != 0 {
            return Err(Error::bespoke(
                "unexpected list of type 'end', which is not supported",
            ));
        }

        let mut sequence: Option<&mut dyn Sequence> = match binding {
            Some(Binding::Sequence(seq)) => Some(seq),
            Some(_) => {
                self.mismatch(name, Tag::List)?;
                None
            }
            None => None,
        };

        self.enter()?;
        for _ in 0..len {
            let element = sequence.as_mut().map(|seq| seq.push_default());
            self.decode_tag(Some(element_tag), name, element)?;
        }
        self.depth -= 1;
        Ok(())
    }

    fn decode_value(&mut self, name: &str, tag: Tag, binding: Option<Binding<'_>>) -> Result<()> {
        let value = self.input.read_value(tag)?;
        let binding = match binding {
            Some(binding) => binding,
            None => return Ok(()),
        };

        let assigned = match binding {
            Binding::Scalar(slot) => slot.try_assign(value),
            Binding::Nested(_) | Binding::Sequence(_) => false,
        };

        if !assigned {
            self.mismatch(name, tag)?;
        }
        Ok(())
    }

    /// Go one level deeper. Callers step back out with `self.depth -= 1` once
    /// the level is done. On error the count is left as is, `decode` resets it.
    fn enter(&mut self) -> Result<()> {
        if self.depth >= self.opts.max_depth {
            return Err(Error::depth_exceeded(self.opts.max_depth));
        }
        self.depth += 1;
        Ok(())
    }

    fn unknown(&self, name: &str) -> Result<()> {
        if self.opts.strict {
            return Err(Error::unknown_tag(name));
        }
        debug!("skipping tag {:?}: no field bound to it", name);
        Ok(())
    }

    fn mismatch(&self, name: &str, tag: Tag) -> Result<()> {
        if self.opts.strict {
            return Err(Error::binding_mismatch(name, tag));
        }
        debug!("skipping {} {:?}: field cannot hold it", tag, name);
        Ok(())
    }
}

/// Decode one root compound from `reader` into `target`.
///
/// The reader is consumed only as far as the end of the root tag. Pass
/// `&mut reader` to keep using it afterwards.
pub fn from_reader<R, T>(reader: R, target: &mut T) -> Result<()>
where
    R: Read,
    T: Schema,
{
    from_reader_with_opts(reader, target, DeOpts::new())
}

/// Decode one root compound from `reader` into `target`, with options.
pub fn from_reader_with_opts<R, T>(reader: R, target: &mut T, opts: DeOpts) -> Result<()>
where
    R: Read,
    T: Schema,
{
    Decoder::with_opts(reader, opts).decode(target)
}

/// Decode one root compound from `input` into `target`.
pub fn from_bytes<T: Schema>(input: &[u8], target: &mut T) -> Result<()> {
    from_reader(input, target)
}

/// Decode one root compound from `input` into `target`, with options.
pub fn from_bytes_with_opts<T: Schema>(
    input: &[u8],
    target: &mut T,
    opts: DeOpts,
) -> Result<()> {
    from_reader_with_opts(input, target, opts)
}

//! Describing where decoded tags go.
//!
//! A type that can be decoded from an NBT compound implements [`Schema`]: it
//! lists its fields, each under the tag name it should receive. The decoder
//! asks for this list every time it enters a compound bound to the type, and
//! routes each child tag by name into the matching field.
//!
//! Every field is reached through a [`Binding`], which says what shape of tag
//! the field can take:
//!
//! * [`Binding::Scalar`]: a single value such as an `i32`, a `String` or an
//!   [`IntArray`][`crate::IntArray`]. Filled through [`Slot::try_assign`].
//! * [`Binding::Nested`]: another [`Schema`], filled from a Compound tag.
//! * [`Binding::Sequence`]: a `Vec<T>`, filled element by element from a List
//!   tag.
//!
//! Names are matched case-insensitively and exactly. Tags with no matching
//! field, and tags whose shape or type does not fit their field, are skipped.
//!
//! The [`schema!`][`crate::schema!`] macro writes the [`Schema`] and [`Bind`]
//! implementations for a struct. Implementing them by hand looks like this:
//!
//! ```
//! use nbtbind::schema::{Bind, Binding, Fields, Schema};
//!
//! #[derive(Default)]
//! struct Player {
//!     health: f32,
//!     inventory: Vec<String>,
//! }
//!
//! impl Schema for Player {
//!     fn type_name(&self) -> &'static str {
//!         "Player"
//!     }
//!
//!     fn bind_fields<'a>(&'a mut self, fields: &mut Fields<'a>) {
//!         fields.field("Health", &mut self.health);
//!         fields.field("Inventory", &mut self.inventory);
//!     }
//! }
//!
//! impl Bind for Player {
//!     fn bind(&mut self) -> Binding<'_> {
//!         Binding::Nested(self)
//!     }
//! }
//! ```

use std::collections::HashMap;

use crate::{ByteArray, IntArray, Value};

/// A type whose fields can be filled from the children of an NBT compound.
pub trait Schema {
    /// Name of the type. A tag with this name (ignoring case) binds to the
    /// value itself, which is how the named root compound of a document
    /// finds the caller's value. A field registered under the same name takes
    /// precedence.
    fn type_name(&self) -> &'static str;

    /// Register a binding for every field that can be decoded into.
    fn bind_fields<'a>(&'a mut self, fields: &mut Fields<'a>);
}

/// A value that can be the target of a tag.
pub trait Bind {
    fn bind(&mut self) -> Binding<'_>;
}

/// A field holding a single scalar value.
pub trait Slot {
    /// Store `value` if it is exactly the type this slot holds. Returns
    /// whether the value was stored. There is no conversion between types.
    fn try_assign(&mut self, value: Value) -> bool;
}

/// A field holding a growable sequence, filled from a List tag.
pub trait Sequence {
    /// Append a default element and return a binding to it, for the decoder
    /// to fill in.
    fn push_default(&mut self) -> Binding<'_>;
}

/// A writable reference to one part of a value being decoded.
pub enum Binding<'a> {
    Scalar(&'a mut dyn Slot),
    Nested(&'a mut dyn Schema),
    Sequence(&'a mut dyn Sequence),
}

impl<'a> Binding<'a> {
    /// Short-lived copy of this binding, leaving the original usable after.
    pub fn reborrow(&mut self) -> Binding<'_> {
        match self {
            Binding::Scalar(s) => Binding::Scalar(&mut **s),
            Binding::Nested(s) => Binding::Nested(&mut **s),
            Binding::Sequence(s) => Binding::Sequence(&mut **s),
        }
    }

    /// Describes the shape of binding, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Binding::Scalar(_) => "scalar",
            Binding::Nested(_) => "nested",
            Binding::Sequence(_) => "sequence",
        }
    }
}

/// The fields of one value, keyed by lowercase tag name.
#[derive(Default)]
pub struct Fields<'a> {
    map: HashMap<String, Binding<'a>>,
}

impl<'a> Fields<'a> {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Bind the tag called `name` to `slot`. Registering the same name twice
    /// keeps the last one.
    pub fn field<B: Bind + ?Sized>(&mut self, name: &str, slot: &'a mut B) {
        self.map.insert(name.to_lowercase(), slot.bind());
    }

    /// Whether a field is bound under `name`, ignoring case.
    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(&name.to_lowercase())
    }

    /// Remove and return the binding for `name`, ignoring case.
    pub fn take(&mut self, name: &str) -> Option<Binding<'a>> {
        self.map.remove(&name.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// The registered names, in no particular order.
    pub fn names(&self) -> Vec<&str> {
        self.map.keys().map(String::as_str).collect()
    }
}

/// Collect the field bindings of `target`.
pub fn describe(target: &mut dyn Schema) -> Fields<'_> {
    let mut fields = Fields::new();
    target.bind_fields(&mut fields);
    fields
}

/// Find where a tag called `name` goes inside `target`.
///
/// An empty name means the tag is `target` itself: list elements and the
/// unnamed root are decoded straight into the binding they were given.
/// Only nested bindings have named children.
pub fn resolve<'t>(target: Binding<'t>, name: &str) -> Option<Binding<'t>> {
    if name.is_empty() {
        return Some(target);
    }

    let schema = match target {
        Binding::Nested(schema) => schema,
        Binding::Scalar(_) | Binding::Sequence(_) => return None,
    };

    let key = name.to_lowercase();
    if schema.type_name().to_lowercase() != key {
        return describe(schema).map.remove(&key);
    }

    // Fields are only built a second time when one shadows the type name.
    if describe(&mut *schema).map.contains_key(&key) {
        describe(schema).map.remove(&key)
    } else {
        Some(Binding::Nested(schema))
    }
}

macro_rules! scalar_slot {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Slot for $ty {
                fn try_assign(&mut self, value: Value) -> bool {
                    match value {
                        Value::$variant(v) => {
                            *self = v;
                            true
                        }
                        _ => false,
                    }
                }
            }

            impl Bind for $ty {
                fn bind(&mut self) -> Binding<'_> {
                    Binding::Scalar(self)
                }
            }
        )*
    };
}

scalar_slot! {
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    ByteArray => ByteArray,
    String => String,
    IntArray => IntArray,
}

impl<T: Bind + Default> Sequence for Vec<T> {
    fn push_default(&mut self) -> Binding<'_> {
        let i = self.len();
        self.push(T::default());
        self[i].bind()
    }
}

impl<T: Bind + Default> Bind for Vec<T> {
    fn bind(&mut self) -> Binding<'_> {
        Binding::Sequence(self)
    }
}

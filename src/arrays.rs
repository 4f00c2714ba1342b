use std::ops::{Deref, DerefMut};

use serde::Serialize;

/// The payload of an NBT ByteArray tag.
///
/// This is a distinct type from `Vec<i8>` so that a field can tell an NBT
/// array apart from an NBT List of bytes: a `ByteArray` field binds to
/// ByteArray tags, a `Vec<i8>` field binds to List tags.
#[derive(Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct ByteArray {
    data: Vec<i8>,
}

impl ByteArray {
    pub fn new(data: Vec<i8>) -> Self {
        Self { data }
    }

    pub fn into_inner(self) -> Vec<i8> {
        self.data
    }
}

impl From<Vec<i8>> for ByteArray {
    fn from(data: Vec<i8>) -> Self {
        Self::new(data)
    }
}

impl Deref for ByteArray {
    type Target = Vec<i8>;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl DerefMut for ByteArray {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

/// The payload of an NBT IntArray tag. See [`ByteArray`] for why this is not
/// a plain `Vec<i32>`.
#[derive(Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct IntArray {
    data: Vec<i32>,
}

impl IntArray {
    pub fn new(data: Vec<i32>) -> Self {
        Self { data }
    }

    pub fn into_inner(self) -> Vec<i32> {
        self.data
    }
}

impl From<Vec<i32>> for IntArray {
    fn from(data: Vec<i32>) -> Self {
        Self::new(data)
    }
}

impl Deref for IntArray {
    type Target = Vec<i32>;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl DerefMut for IntArray {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

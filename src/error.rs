//! Contains the Error and Result type used by the decoder.
use std::fmt::Display;

use crate::Tag;

/// Various errors that can occur during decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    msg: String,
    kind: ErrorKind,
}

/// The category of an [`Error`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Any other errors. Users should not match on this variant and should
    /// instead use a wildcard `_`. Errors in this category may be moved to new
    /// variants.
    Other,

    /// The reader failed, or ran out of input part way through a value. A
    /// short read has the kind [`std::io::ErrorKind::UnexpectedEof`].
    Io(std::io::ErrorKind),

    /// A byte array, int array or list declared a negative length.
    MalformedLength(i32),

    /// A tag type byte that is not a known NBT tag.
    InvalidTag(u8),

    /// Compounds and lists were nested deeper than the configured limit.
    DepthExceeded(usize),

    /// A tag had no field to bind to. Only raised in strict mode.
    UnknownTag(String),

    /// A tag was bound to a field that cannot hold it. Only raised in strict
    /// mode.
    BindingMismatch { name: String, tag: Tag },
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Get the kind of error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Whether the input ran out before a value was complete.
    pub fn is_eof(&self) -> bool {
        matches!(self.kind, ErrorKind::Io(std::io::ErrorKind::UnexpectedEof))
    }

    pub(crate) fn bespoke(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            kind: ErrorKind::Other,
        }
    }

    pub(crate) fn invalid_tag(tag: u8) -> Self {
        // 0x1f is the first byte of the gzip magic number.
        let hint = if tag == 0x1f {
            " (is the input still gzip compressed?)"
        } else {
            ""
        };

        Self {
            msg: format!("invalid nbt tag value: {}{}", tag, hint),
            kind: ErrorKind::InvalidTag(tag),
        }
    }

    pub(crate) fn malformed_length(len: i32) -> Self {
        Self {
            msg: format!("invalid nbt length: {} is negative", len),
            kind: ErrorKind::MalformedLength(len),
        }
    }

    pub(crate) fn depth_exceeded(max: usize) -> Self {
        Self {
            msg: format!("nbt nested deeper than the limit of {}", max),
            kind: ErrorKind::DepthExceeded(max),
        }
    }

    pub(crate) fn unknown_tag(name: &str) -> Self {
        Self {
            msg: format!("no field to bind tag {:?} to", name),
            kind: ErrorKind::UnknownTag(name.to_owned()),
        }
    }

    pub(crate) fn binding_mismatch(name: &str, tag: Tag) -> Self {
        Self {
            msg: format!("field for tag {:?} cannot hold a {}", name, tag),
            kind: ErrorKind::BindingMismatch {
                name: name.to_owned(),
                tag,
            },
        }
    }
}

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.msg)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self {
            msg: format!("io error: {}", e),
            kind: ErrorKind::Io(e.kind()),
        }
    }
}

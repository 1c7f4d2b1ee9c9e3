//! Body part variants.
//!
//! A response body is an ordered list of [`BodyPart`]s that the host
//! pipeline concatenates on the wire. Byte parts are backed by
//! reference-counted [`Bytes`], so copying a response or taking a range
//! view never copies payload data.

use std::ops::Range;
use std::path::PathBuf;

use bytes::Bytes;

/// One segment of a response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyPart {
    /// UTF-8 text.
    Text(String),
    /// A raw byte buffer.
    Bytes(Bytes),
    /// A byte-range view of a buffer. The range is checked when the part
    /// is written, not when it is built.
    Slice { buffer: Bytes, range: Range<usize> },
    /// A file on disk, optionally bounded to a byte range.
    ///
    /// Only the path is held; the file is opened by whoever writes the body.
    File {
        path: PathBuf,
        range: Option<Range<u64>>,
    },
}

impl BodyPart {
    /// A view of `range` within `buffer`.
    pub fn slice(buffer: impl Into<Bytes>, range: Range<usize>) -> Self {
        BodyPart::Slice {
            buffer: buffer.into(),
            range,
        }
    }

    /// A whole-file reference.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        BodyPart::File {
            path: path.into(),
            range: None,
        }
    }

    /// A reference to `range` within a file.
    pub fn file_range(path: impl Into<PathBuf>, range: Range<u64>) -> Self {
        BodyPart::File {
            path: path.into(),
            range: Some(range),
        }
    }

    /// Short name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            BodyPart::Text(_) => "text",
            BodyPart::Bytes(_) => "bytes",
            BodyPart::Slice { .. } => "slice",
            BodyPart::File { .. } => "file",
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, BodyPart::Text(_))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            BodyPart::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Byte length of the part when it can be known without I/O.
    ///
    /// Whole-file references return `None`, as do ranges that writing the
    /// part would reject: inverted ranges and slices past the buffer end.
    pub fn known_len(&self) -> Option<u64> {
        match self {
            BodyPart::Text(text) => Some(text.len() as u64),
            BodyPart::Bytes(bytes) => Some(bytes.len() as u64),
            BodyPart::Slice { buffer, range } => buffer
                .get(range.clone())
                .map(|view| view.len() as u64),
            BodyPart::File { range, .. } => range
                .as_ref()
                .and_then(|r| r.end.checked_sub(r.start)),
        }
    }
}

impl From<&str> for BodyPart {
    fn from(text: &str) -> Self {
        BodyPart::Text(text.to_string())
    }
}

impl From<String> for BodyPart {
    fn from(text: String) -> Self {
        BodyPart::Text(text)
    }
}

impl From<&String> for BodyPart {
    fn from(text: &String) -> Self {
        BodyPart::Text(text.clone())
    }
}

impl From<Bytes> for BodyPart {
    fn from(bytes: Bytes) -> Self {
        BodyPart::Bytes(bytes)
    }
}

impl From<Vec<u8>> for BodyPart {
    fn from(bytes: Vec<u8>) -> Self {
        BodyPart::Bytes(Bytes::from(bytes))
    }
}

impl From<&'static [u8]> for BodyPart {
    fn from(bytes: &'static [u8]) -> Self {
        BodyPart::Bytes(Bytes::from_static(bytes))
    }
}

impl From<&BodyPart> for BodyPart {
    fn from(part: &BodyPart) -> Self {
        part.clone()
    }
}

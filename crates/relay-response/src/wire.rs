//! HTTP/1.1 framing for a finished [`Response`].
//!
//! This is the reference serialization a host pipeline performs once
//! application code has handed a response off: the status line, one line
//! per header value (the name is repeated for multi-valued headers), a
//! blank line, then every body part in order.
//!
//! Headers are written exactly as stored. Nothing is added, so a
//! `content-length` made stale by [`Response::set_body`] goes out stale.
//! A status line, header name or header value containing CR or LF is
//! rejected before anything is written.

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, trace};

use crate::body::BodyPart;
use crate::response::Response;

pub const HTTP_VERSION: &str = "HTTP/1.1";

/// Errors raised while writing a response.
#[derive(Debug, Error)]
pub enum WireError {
    #[error("write failed: {0}")]
    Io(#[from] io::Error),

    #[error("status line contains CR or LF: {0:?}")]
    InvalidStatusLine(String),

    #[error("header {name:?} contains CR or LF")]
    InvalidHeader { name: String },

    #[error("slice {start}..{end} out of bounds for a {len}-byte buffer")]
    SliceOutOfBounds { start: usize, end: usize, len: usize },

    #[error("cannot read {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} ended after {actual} of {expected} bytes", path.display())]
    ShortFile {
        path: PathBuf,
        expected: u64,
        actual: u64,
    },

    #[error("file range {start}..{end} of {} is inverted", path.display())]
    InvertedFileRange { path: PathBuf, start: u64, end: u64 },
}

/// Write the status line, headers and blank separator line.
pub fn write_head<W: Write>(response: &Response, out: &mut W) -> Result<(), WireError> {
    check_head(response)?;
    write!(out, "{HTTP_VERSION} {}\r\n", response.status_line())?;
    for (name, value) in response.headers().lines() {
        write!(out, "{name}: {value}\r\n")?;
    }
    out.write_all(b"\r\n")?;
    Ok(())
}

/// Write body parts in order, returning the number of body bytes written.
pub fn write_body<W: Write>(parts: &[BodyPart], out: &mut W) -> Result<u64, WireError> {
    let mut written = 0u64;
    for part in parts {
        let n = write_part(part, out)?;
        trace!(kind = part.kind(), bytes = n, "wrote body part");
        written += n;
    }
    Ok(written)
}

/// Write the whole response, returning the number of body bytes written.
pub fn write_response<W: Write>(response: &Response, out: &mut W) -> Result<u64, WireError> {
    write_head(response, out)?;
    let body_len = write_body(response.body(), out)?;
    debug!(
        status = response.status_line(),
        parts = response.body().len(),
        body_len,
        known_len = ?response.body_len(),
        "response written"
    );
    Ok(body_len)
}

/// Serialize the whole response into a buffer.
pub fn to_bytes(response: &Response) -> Result<Vec<u8>, WireError> {
    let mut out = Vec::with_capacity(256);
    write_response(response, &mut out)?;
    Ok(out)
}

fn has_line_break(text: &str) -> bool {
    text.bytes().any(|b| b == b'\r' || b == b'\n')
}

fn check_head(response: &Response) -> Result<(), WireError> {
    if has_line_break(response.status_line()) {
        return Err(WireError::InvalidStatusLine(
            response.status_line().to_string(),
        ));
    }
    for (name, value) in response.headers().lines() {
        if has_line_break(name) || has_line_break(value) {
            return Err(WireError::InvalidHeader {
                name: name.to_string(),
            });
        }
    }
    Ok(())
}

fn write_part<W: Write>(part: &BodyPart, out: &mut W) -> Result<u64, WireError> {
    match part {
        BodyPart::Text(text) => {
            out.write_all(text.as_bytes())?;
            Ok(text.len() as u64)
        }
        BodyPart::Bytes(bytes) => {
            out.write_all(bytes)?;
            Ok(bytes.len() as u64)
        }
        BodyPart::Slice { buffer, range } => {
            let view = buffer
                .get(range.clone())
                .ok_or(WireError::SliceOutOfBounds {
                    start: range.start,
                    end: range.end,
                    len: buffer.len(),
                })?;
            out.write_all(view)?;
            Ok(view.len() as u64)
        }
        BodyPart::File { path, range } => write_file(path, range.clone(), out),
    }
}

fn write_file<W: Write>(
    path: &Path,
    range: Option<std::ops::Range<u64>>,
    out: &mut W,
) -> Result<u64, WireError> {
    if let Some(inverted) = range.as_ref().filter(|r| r.start > r.end) {
        return Err(WireError::InvertedFileRange {
            path: path.to_path_buf(),
            start: inverted.start,
            end: inverted.end,
        });
    }

    let file_err = |source| WireError::File {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::open(path).map_err(file_err)?;

    let Some(range) = range else {
        return Ok(io::copy(&mut file, out)?);
    };

    let expected = range.end - range.start;
    file.seek(SeekFrom::Start(range.start)).map_err(file_err)?;
    let actual = io::copy(&mut file.take(expected), out)?;
    if actual < expected {
        return Err(WireError::ShortFile {
            path: path.to_path_buf(),
            expected,
            actual,
        });
    }
    Ok(actual)
}

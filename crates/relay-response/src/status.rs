//! Status line derivation and parsing.
//!
//! A status line is stored as the text `"<code> <message>"`. The code is
//! authoritative; the message is either supplied verbatim or looked up in
//! the registered reason-phrase table.

use http::StatusCode;

use crate::error::{ResponseError, Result};

/// Status line of a freshly constructed response.
pub const DEFAULT_STATUS_LINE: &str = "200 OK";

/// Status used by [`Response::redirect`](crate::Response::redirect).
pub const DEFAULT_REDIRECT_STATUS: StatusCode = StatusCode::FOUND;

/// Look up the registered reason phrase for `code`.
pub fn reason_phrase(code: u16) -> Option<&'static str> {
    StatusCode::from_u16(code).ok()?.canonical_reason()
}

/// Build the `"<code> <phrase>"` line for a registered code.
pub fn status_line_for(code: u16) -> Result<String> {
    let status = StatusCode::from_u16(code).map_err(|_| ResponseError::InvalidStatusCode(code))?;
    if status.canonical_reason().is_none() {
        return Err(ResponseError::InvalidStatusCode(code));
    }
    Ok(line_for(status))
}

/// The `"<code> <phrase>"` line for a status the caller knows is registered.
pub(crate) fn line_for(status: StatusCode) -> String {
    format!(
        "{} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or_default()
    )
}

/// Split a status line at its first space into code and message.
pub fn split_status_line(line: &str) -> Result<(u16, &str)> {
    let (code, message) = line
        .split_once(' ')
        .ok_or_else(|| ResponseError::MalformedStatus(line.to_string()))?;
    let code = code
        .parse::<u16>()
        .map_err(|_| ResponseError::MalformedStatus(line.to_string()))?;
    Ok((code, message))
}

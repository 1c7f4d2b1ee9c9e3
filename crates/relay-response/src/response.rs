use std::fmt;

use bytes::Bytes;
use tracing::{debug, trace};

use crate::body::BodyPart;
use crate::config::ResponseDefaults;
use crate::error::{ResponseError, Result};
use crate::header::{HeaderMap, HeaderValues};
use crate::status::{self, DEFAULT_REDIRECT_STATUS, DEFAULT_STATUS_LINE};

const CONTENT_TYPE: &str = "content-type";
const CONTENT_LENGTH: &str = "content-length";
const LOCATION: &str = "location";

/// An outgoing HTTP response under construction.
///
/// Application and middleware code mutate a `Response` through the fluent
/// `&mut Self` API; the host pipeline then reads the status line, the
/// headers and the body parts to put them on the wire.
///
/// # Content-Length
///
/// The `content-length` header is kept in sync only by the text path:
/// [`set_body_text()`](Response::set_body_text), [`write()`](Response::write),
/// [`write_fmt()`](Response::write_fmt) and [`clear()`](Response::clear).
/// [`set_body()`](Response::set_body) and [`add_to_body()`](Response::add_to_body)
/// leave the header untouched, so after adding byte or file parts it may be
/// stale or absent. Callers that mix part kinds set it themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: String,
    headers: HeaderMap,
    body: Vec<BodyPart>,
}

/// Something a [`Response`] can be copied from.
///
/// Each accessor returns `None` (or an empty list) for the parts the source
/// does not carry; [`Response::from_response`] then keeps its own default.
pub trait ResponseSource {
    fn source_status_line(&self) -> Option<String>;
    fn source_headers(&self) -> Option<HeaderMap>;
    fn source_body(&self) -> Vec<BodyPart>;
}

impl Default for Response {
    fn default() -> Self {
        Self::new()
    }
}

impl Response {
    /// `200 OK`, `content-type: text/html`, empty body.
    pub fn new() -> Self {
        let mut headers = HeaderMap::new();
        headers.set(CONTENT_TYPE, "text/html");
        Self {
            status: DEFAULT_STATUS_LINE.to_string(),
            headers,
            body: Vec::new(),
        }
    }

    /// A response initialized from configured defaults.
    ///
    /// An empty `content_type` leaves the header unset.
    pub fn with_defaults(defaults: &ResponseDefaults) -> Self {
        let mut headers: HeaderMap = defaults
            .headers
            .iter()
            .map(|(name, values)| (name, values.clone()))
            .collect();
        match defaults.content_type.as_deref() {
            Some(content_type) if !content_type.is_empty() => {
                headers.set(CONTENT_TYPE, content_type)
            }
            _ => {}
        }
        Self {
            status: defaults.status.clone(),
            headers,
            body: Vec::new(),
        }
    }

    /// Copy an existing response.
    ///
    /// The status line is copied when present and the header map replaces
    /// the defaults wholesale when present. Body parts are appended one by
    /// one onto the (empty) default body rather than assigned.
    pub fn from_response(source: &impl ResponseSource) -> Self {
        let mut response = Self::new();
        if let Some(line) = source.source_status_line() {
            response.status = line;
        }
        if let Some(headers) = source.source_headers() {
            response.headers = headers;
        }
        for part in source.source_body() {
            response.add_part(part);
        }
        debug!(
            status = %response.status,
            headers = response.headers.len(),
            parts = response.body.len(),
            "copied response"
        );
        response
    }

    /// A default response whose body is `text`, with `content-length` set.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut response = Self::new();
        response.set_body_text(text);
        response
    }

    /// [`with_text()`](Response::with_text) plus a registered status code.
    pub fn with_text_and_status(text: impl Into<String>, code: u16) -> Result<Self> {
        let mut response = Self::with_text(text);
        response.set_status(code)?;
        Ok(response)
    }

    /// [`with_text()`](Response::with_text) plus a verbatim status line.
    pub fn with_text_and_status_line(text: impl Into<String>, line: impl Into<String>) -> Self {
        let mut response = Self::with_text(text);
        response.set_status_line(line);
        response
    }

    /// [`with_text()`](Response::with_text), then `headers` assigned key by key.
    pub fn with_text_and_headers<I, K, V>(text: impl Into<String>, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<HeaderValues>,
    {
        let mut response = Self::with_text(text);
        response.set_headers(headers);
        response
    }

    /// A registered status code plus headers; the body stays empty.
    pub fn with_status_and_headers<I, K, V>(code: u16, headers: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<HeaderValues>,
    {
        Self::compose(Some(code), None, headers)
    }

    /// Build a response from optional parts, applied in order: status,
    /// body text, then headers. Headers are assigned key by key, so they
    /// may override `content-type` or the computed `content-length`.
    pub fn compose<I, K, V>(code: Option<u16>, text: Option<&str>, headers: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<HeaderValues>,
    {
        let mut response = Self::new();
        if let Some(code) = code {
            response.set_status(code)?;
        }
        if let Some(text) = text {
            response.set_body_text(text);
        }
        response.set_headers(headers);
        Ok(response)
    }

    // ── Status ──────────────────────────────────────────────────────

    /// Set the status from a registered code, deriving the reason phrase.
    pub fn set_status(&mut self, code: u16) -> Result<&mut Self> {
        self.status = status::status_line_for(code)?;
        Ok(self)
    }

    /// Set the full `"code message"` line verbatim.
    pub fn set_status_line(&mut self, line: impl Into<String>) -> &mut Self {
        self.status = line.into();
        self
    }

    /// The stored `"code message"` line.
    pub fn status_line(&self) -> &str {
        &self.status
    }

    /// Numeric code parsed from the status line.
    pub fn status_code(&self) -> Result<u16> {
        status::split_status_line(&self.status).map(|(code, _)| code)
    }

    /// Reason phrase: everything after the first space of the status line.
    pub fn status_message(&self) -> Result<&str> {
        status::split_status_line(&self.status).map(|(_, message)| message)
    }

    // ── Body ────────────────────────────────────────────────────────

    /// Replace the body with `parts`. Does not touch `content-length`.
    pub fn set_body<I>(&mut self, parts: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<BodyPart>,
    {
        self.body = parts.into_iter().map(Into::into).collect();
        self
    }

    /// Append `parts` to the body. Does not touch `content-length`.
    pub fn add_to_body<I>(&mut self, parts: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<BodyPart>,
    {
        self.body.extend(parts.into_iter().map(Into::into));
        self
    }

    /// Append a single part. Does not touch `content-length`.
    pub fn add_part(&mut self, part: impl Into<BodyPart>) -> &mut Self {
        self.body.push(part.into());
        self
    }

    /// Body parts in wire order.
    pub fn body(&self) -> &[BodyPart] {
        &self.body
    }

    /// Total body length when every part's length is known without I/O.
    ///
    /// `None` when any part is a whole-file reference or an invalid range.
    /// This never reads or changes the `content-length` header.
    pub fn body_len(&self) -> Option<u64> {
        self.body.iter().map(BodyPart::known_len).sum()
    }

    /// The body as text, failing if any part is not text.
    pub fn body_text(&self) -> Result<String> {
        let mut text = String::new();
        for part in &self.body {
            match part {
                BodyPart::Text(t) => text.push_str(t),
                other => return Err(ResponseError::NonTextBody(other.kind())),
            }
        }
        Ok(text)
    }

    /// Replace the body with `text` and set `content-length` to its UTF-8
    /// byte length.
    pub fn set_body_text(&mut self, text: impl Into<String>) -> &mut Self {
        let text = text.into();
        let len = text.len();
        self.body = vec![BodyPart::Text(text)];
        trace!(content_length = len, "body text replaced");
        self.set_content_length(len as u64)
    }

    /// Append `text` to the text body.
    pub fn write(&mut self, text: &str) -> Result<&mut Self> {
        let mut body = self.body_text()?;
        body.push_str(text);
        Ok(self.set_body_text(body))
    }

    /// Formatted [`write()`](Response::write); makes `write!(response, ...)`
    /// work directly on a response.
    pub fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<&mut Self> {
        match args.as_str() {
            Some(text) => self.write(text),
            None => self.write(&args.to_string()),
        }
    }

    /// Empty the body and reset `content-length` to 0.
    pub fn clear(&mut self) -> &mut Self {
        self.set_body_text(String::new())
    }

    // ── Headers ─────────────────────────────────────────────────────

    /// Replace every value of `key` (case-insensitive).
    pub fn set_header(&mut self, key: &str, values: impl Into<HeaderValues>) -> &mut Self {
        self.headers.set(key, values);
        self
    }

    /// Append to the values of `key`, or set it when absent.
    pub fn add_header(&mut self, key: &str, values: impl Into<HeaderValues>) -> &mut Self {
        self.headers.append(key, values);
        self
    }

    /// First value of `key` (case-insensitive).
    pub fn get_header(&self, key: &str) -> Option<&str> {
        self.headers.get(key)
    }

    /// All values of `key` (case-insensitive), empty when absent.
    pub fn header_values(&self, key: &str) -> &[String] {
        self.headers.get_all(key)
    }

    /// Drop `key` and every value stored under it.
    pub fn remove_header(&mut self, key: &str) -> &mut Self {
        self.headers.remove(key);
        self
    }

    /// The full header map.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Mutable access to the header map.
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    fn set_headers<I, K, V>(&mut self, headers: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<HeaderValues>,
    {
        for (key, values) in headers {
            self.headers.set(key.as_ref(), values);
        }
    }

    /// First `content-type` value.
    pub fn content_type(&self) -> Option<&str> {
        self.get_header(CONTENT_TYPE)
    }

    /// Replace the `content-type` header.
    pub fn set_content_type(&mut self, value: impl Into<String>) -> &mut Self {
        self.set_header(CONTENT_TYPE, value.into())
    }

    /// Parsed `content-length`, or 0 when the header is absent.
    pub fn content_length(&self) -> Result<u64> {
        match self.get_header(CONTENT_LENGTH) {
            None => Ok(0),
            Some(value) => value.parse().map_err(|_| ResponseError::MalformedHeader {
                name: CONTENT_LENGTH.to_string(),
                value: value.to_string(),
            }),
        }
    }

    /// Replace the `content-length` header.
    pub fn set_content_length(&mut self, len: u64) -> &mut Self {
        self.set_header(CONTENT_LENGTH, len.to_string())
    }

    /// Redirect with [`DEFAULT_REDIRECT_STATUS`] (`302 Found`) and a
    /// `location` header.
    pub fn redirect(&mut self, location: &str) -> &mut Self {
        debug!(location, "redirect");
        self.set_status_line(status::line_for(DEFAULT_REDIRECT_STATUS))
            .set_header(LOCATION, location)
    }

    /// Redirect with an explicit status code.
    pub fn redirect_with(&mut self, code: u16, location: &str) -> Result<&mut Self> {
        debug!(code, location, "redirect");
        Ok(self.set_status(code)?.set_header(LOCATION, location))
    }

    /// Split into status line, headers and body parts.
    pub fn into_parts(self) -> (String, HeaderMap, Vec<BodyPart>) {
        (self.status, self.headers, self.body)
    }
}

impl ResponseSource for Response {
    fn source_status_line(&self) -> Option<String> {
        Some(self.status.clone())
    }

    fn source_headers(&self) -> Option<HeaderMap> {
        Some(self.headers.clone())
    }

    fn source_body(&self) -> Vec<BodyPart> {
        self.body.clone()
    }
}

/// Copies from an `http::Response`. Header values that are not valid UTF-8
/// are decoded lossily; an empty body contributes no parts.
impl<B> ResponseSource for http::Response<B>
where
    B: Clone + Into<Bytes>,
{
    fn source_status_line(&self) -> Option<String> {
        let status = self.status();
        Some(format!(
            "{} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown")
        ))
    }

    fn source_headers(&self) -> Option<HeaderMap> {
        let mut headers = HeaderMap::new();
        for (name, value) in self.headers() {
            headers.append(
                name.as_str(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            );
        }
        Some(headers)
    }

    fn source_body(&self) -> Vec<BodyPart> {
        let bytes: Bytes = self.body().clone().into();
        if bytes.is_empty() {
            Vec::new()
        } else {
            vec![BodyPart::Bytes(bytes)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_headers() -> [(&'static str, &'static str); 0] {
        []
    }

    // ── Construction ────────────────────────────────────────────────

    #[test]
    fn new_applies_defaults() {
        let resp = Response::new();
        assert_eq!(resp.status_line(), "200 OK");
        assert_eq!(resp.status_code().unwrap(), 200);
        assert_eq!(resp.status_message().unwrap(), "OK");
        assert_eq!(resp.content_type(), Some("text/html"));
        assert_eq!(resp.headers().len(), 1);
        assert!(resp.body().is_empty());
        assert_eq!(Response::default(), resp);
    }

    #[test]
    fn with_defaults_from_config() {
        let mut defaults = ResponseDefaults {
            status: "503 Service Unavailable".into(),
            content_type: Some("application/json".into()),
            ..Default::default()
        };
        defaults.headers.insert("Server".into(), vec!["relay".into()]);

        let resp = Response::with_defaults(&defaults);
        assert_eq!(resp.status_code().unwrap(), 503);
        assert_eq!(resp.content_type(), Some("application/json"));
        assert_eq!(resp.get_header("server"), Some("relay"));
    }

    #[test]
    fn with_defaults_empty_content_type_is_unset() {
        let defaults = ResponseDefaults {
            content_type: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(Response::with_defaults(&defaults).content_type(), None);
    }

    #[test]
    fn with_text_sets_length() {
        let resp = Response::with_text("hello");
        assert_eq!(resp.body_text().unwrap(), "hello");
        assert_eq!(resp.content_length().unwrap(), 5);
    }

    #[test]
    fn with_text_and_status() {
        let resp = Response::with_text_and_status("gone", 410).unwrap();
        assert_eq!(resp.status_line(), "410 Gone");
        assert_eq!(
            Response::with_text_and_status("x", 599),
            Err(ResponseError::InvalidStatusCode(599))
        );
    }

    #[test]
    fn with_text_and_status_line_is_verbatim() {
        let resp = Response::with_text_and_status_line("teapot", "418 Short And Stout");
        assert_eq!(resp.status_message().unwrap(), "Short And Stout");
    }

    #[test]
    fn compose_applies_only_supplied_parts() {
        let resp = Response::compose(None, None, no_headers()).unwrap();
        assert_eq!(resp, Response::new());

        let resp = Response::compose(Some(201), Some("made"), [("X-Id", "7")]).unwrap();
        assert_eq!(resp.status_code().unwrap(), 201);
        assert_eq!(resp.body_text().unwrap(), "made");
        assert_eq!(resp.get_header("x-id"), Some("7"));
    }

    #[test]
    fn compose_headers_override_body_length() {
        let resp = Response::compose(None, Some("abc"), [("Content-Length", "99")]).unwrap();
        assert_eq!(resp.content_length().unwrap(), 99);
    }

    #[test]
    fn compose_multi_valued_headers() {
        let headers = vec![("Set-Cookie", vec!["a=1", "b=2"])];
        let resp = Response::with_status_and_headers(200, headers).unwrap();
        assert_eq!(resp.header_values("set-cookie"), ["a=1", "b=2"]);
        assert_eq!(resp.body_text().unwrap(), "");
    }

    #[test]
    fn with_text_and_headers() {
        let resp = Response::with_text_and_headers("{}", [("Content-Type", "application/json")]);
        assert_eq!(resp.content_type(), Some("application/json"));
        assert_eq!(resp.content_length().unwrap(), 2);
    }

    #[test]
    fn from_response_copies_everything() {
        let mut original = Response::new();
        original
            .set_status(404)
            .unwrap()
            .set_header("X-Trace", "abc")
            .set_body(["a", "b"]);

        let copy = Response::from_response(&original);
        assert_eq!(copy.status_code().unwrap(), 404);
        assert_eq!(copy.get_header("x-trace"), Some("abc"));
        assert_eq!(copy.body(), &[BodyPart::from("a"), BodyPart::from("b")]);
    }

    #[test]
    fn from_response_without_status_or_headers_keeps_defaults() {
        struct BodyOnly;
        impl ResponseSource for BodyOnly {
            fn source_status_line(&self) -> Option<String> {
                None
            }
            fn source_headers(&self) -> Option<HeaderMap> {
                None
            }
            fn source_body(&self) -> Vec<BodyPart> {
                vec!["x".into(), vec![1u8].into()]
            }
        }

        let copy = Response::from_response(&BodyOnly);
        assert_eq!(copy.status_line(), "200 OK");
        assert_eq!(copy.content_type(), Some("text/html"));
        assert_eq!(copy.body().len(), 2);
    }

    #[test]
    fn from_response_replaces_header_map_wholesale() {
        let mut original = Response::new();
        original.remove_header("content-type").set_header("X-Only", "1");

        let copy = Response::from_response(&original);
        assert_eq!(copy.content_type(), None);
        assert_eq!(copy.headers().len(), 1);
    }

    #[test]
    fn from_http_response() {
        let source = http::Response::builder()
            .status(http::StatusCode::CREATED)
            .header("Set-Cookie", "a=1")
            .header("set-cookie", "b=2")
            .body(Bytes::from_static(b"raw"))
            .unwrap();

        let copy = Response::from_response(&source);
        assert_eq!(copy.status_line(), "201 Created");
        assert_eq!(copy.header_values("Set-Cookie"), ["a=1", "b=2"]);
        assert_eq!(copy.body(), &[BodyPart::Bytes(Bytes::from_static(b"raw"))]);
    }

    #[test]
    fn from_http_response_empty_body() {
        let source = http::Response::new(String::new());
        let copy = Response::from_response(&source);
        assert!(copy.body().is_empty());
        assert_eq!(copy.content_type(), None);
    }

    // ── Status ──────────────────────────────────────────────────────

    #[test]
    fn set_status_derives_phrase() {
        let mut resp = Response::new();
        resp.set_status(404).unwrap();
        assert_eq!(resp.status_code().unwrap(), 404);
        assert_eq!(resp.status_message().unwrap(), "Not Found");
    }

    #[test]
    fn set_status_unknown_code_keeps_previous_line() {
        let mut resp = Response::new();
        assert_eq!(
            resp.set_status(799).map(|_| ()),
            Err(ResponseError::InvalidStatusCode(799))
        );
        assert_eq!(resp.status_line(), "200 OK");
    }

    #[test]
    fn status_line_verbatim() {
        let mut resp = Response::new();
        resp.set_status_line("299 Custom Thing");
        assert_eq!(resp.status_code().unwrap(), 299);
        assert_eq!(resp.status_message().unwrap(), "Custom Thing");
    }

    #[test]
    fn status_line_without_space_is_malformed() {
        let mut resp = Response::new();
        resp.set_status_line("200");
        assert_eq!(
            resp.status_code(),
            Err(ResponseError::MalformedStatus("200".into()))
        );
        assert!(matches!(
            resp.status_message(),
            Err(ResponseError::MalformedStatus(_))
        ));
    }

    // ── Body ────────────────────────────────────────────────────────

    #[test]
    fn set_body_variadic_and_sequence_forms() {
        let mut resp = Response::new();
        resp.set_body(["a", "b"]);
        assert_eq!(resp.body_text().unwrap(), "ab");

        let parts = vec![BodyPart::from("c"), BodyPart::from("d")];
        resp.set_body(parts);
        assert_eq!(resp.body_text().unwrap(), "cd");

        let existing = resp.body().to_vec();
        resp.set_body(&existing);
        assert_eq!(resp.body().len(), 2);
    }

    #[test]
    fn set_body_bytes_is_not_text() {
        let mut resp = Response::new();
        resp.set_body([Bytes::from_static(b"\x00\x01")]);
        assert_eq!(resp.body_text(), Err(ResponseError::NonTextBody("bytes")));
    }

    #[test]
    fn set_body_does_not_touch_content_length() {
        let mut resp = Response::new();
        resp.set_body(["abc"]);
        assert_eq!(resp.get_header("content-length"), None);
        assert_eq!(resp.content_length().unwrap(), 0);

        resp.set_body_text("hello");
        resp.set_body([vec![0u8; 64]]);
        assert_eq!(resp.content_length().unwrap(), 5);
    }

    #[test]
    fn add_to_body_appends() {
        let mut resp = Response::with_text("a");
        resp.add_to_body(["b", "c"]).add_part(BodyPart::file("/srv/logo.png"));
        assert_eq!(resp.body().len(), 4);
        assert_eq!(resp.body_text(), Err(ResponseError::NonTextBody("file")));
        // Still the length of the original text.
        assert_eq!(resp.content_length().unwrap(), 1);
    }

    #[test]
    fn body_text_sets_utf8_length() {
        let mut resp = Response::new();
        resp.set_body_text("héllo wörld");
        assert_eq!(resp.content_length().unwrap(), 13);
    }

    #[test]
    fn write_appends_and_recomputes_length() {
        let mut resp = Response::new();
        resp.set_body_text("hello");
        assert_eq!(resp.content_length().unwrap(), 5);

        resp.write(" world").unwrap();
        assert_eq!(resp.body_text().unwrap(), "hello world");
        assert_eq!(resp.content_length().unwrap(), 11);
    }

    #[test]
    fn write_macro_formats() {
        let mut resp = Response::new();
        write!(resp, "{} + {} = {}", 1, 2, 1 + 2).unwrap();
        write!(resp, "!").unwrap();
        assert_eq!(resp.body_text().unwrap(), "1 + 2 = 3!");
        assert_eq!(resp.content_length().unwrap(), 10);
    }

    #[test]
    fn write_onto_non_text_body_fails() {
        let mut resp = Response::new();
        resp.set_body([BodyPart::slice(Bytes::from_static(b"abc"), 0..2)]);
        assert!(matches!(
            resp.write("x"),
            Err(ResponseError::NonTextBody("slice"))
        ));
        assert_eq!(resp.body().len(), 1);
    }

    #[test]
    fn clear_resets_body_and_length() {
        let mut resp = Response::with_text("something");
        resp.add_part(vec![1u8, 2]);
        resp.clear();
        assert_eq!(resp.body_text().unwrap(), "");
        assert_eq!(resp.body().len(), 1);
        assert_eq!(resp.content_length().unwrap(), 0);
    }

    #[test]
    fn body_len_sums_known_parts() {
        let mut resp = Response::with_text("abc");
        resp.add_part(vec![0u8; 4])
            .add_part(BodyPart::slice(Bytes::from_static(b"0123"), 1..3));
        assert_eq!(resp.body_len(), Some(9));
        // content-length is left as the text path set it.
        assert_eq!(resp.content_length().unwrap(), 3);

        resp.add_part(BodyPart::file("/srv/big.iso"));
        assert_eq!(resp.body_len(), None);
    }

    #[test]
    fn body_len_rejects_invalid_ranges() {
        let mut resp = Response::new();
        resp.set_body([BodyPart::slice(Bytes::from_static(b"0123"), 3..1)]);
        assert_eq!(resp.body_len(), None);
    }

    #[test]
    fn with_text_and_headers_accepts_owned_text() {
        let body = String::from("owned");
        let resp = Response::with_text_and_headers(body, [("X-A", "1")]);
        assert_eq!(resp.body_text().unwrap(), "owned");
        assert_eq!(resp.content_length().unwrap(), 5);
    }

    // ── Headers ─────────────────────────────────────────────────────

    #[test]
    fn add_header_appends_values() {
        let mut resp = Response::new();
        resp.set_header("X-A", "1").add_header("X-A", "2");
        assert_eq!(resp.get_header("X-A"), Some("1"));
        assert_eq!(resp.header_values("X-A"), ["1", "2"]);
    }

    #[test]
    fn add_header_absent_behaves_as_set() {
        let mut resp = Response::new();
        resp.add_header("Vary", ["Accept", "Origin"]);
        assert_eq!(resp.header_values("vary"), ["Accept", "Origin"]);
    }

    #[test]
    fn set_header_overrides_any_casing() {
        let mut resp = Response::new();
        resp.add_header("X-A", ["1", "2"]).set_header("x-a", "3");
        assert_eq!(resp.header_values("X-A"), ["3"]);
    }

    #[test]
    fn get_header_case_insensitive() {
        let mut resp = Response::new();
        resp.set_header("Content-Type", "text/plain");
        assert_eq!(resp.get_header("content-type"), Some("text/plain"));
        assert_eq!(resp.content_type(), Some("text/plain"));
        assert_eq!(resp.get_header("x-missing"), None);
    }

    #[test]
    fn content_length_malformed() {
        let mut resp = Response::new();
        resp.set_header("Content-Length", "-3");
        assert_eq!(
            resp.content_length(),
            Err(ResponseError::MalformedHeader {
                name: "content-length".into(),
                value: "-3".into(),
            })
        );
        resp.set_header("Content-Length", "ten");
        assert!(resp.content_length().is_err());
    }

    #[test]
    fn set_content_type() {
        let mut resp = Response::new();
        resp.set_content_type("image/png");
        assert_eq!(resp.header_values("CONTENT-TYPE"), ["image/png"]);
    }

    #[test]
    fn redirect_defaults_to_found() {
        let mut resp = Response::new();
        resp.redirect("/login");
        assert_eq!(resp.status_code().unwrap(), DEFAULT_REDIRECT_STATUS.as_u16());
        assert_eq!(resp.status_line(), "302 Found");
        assert_eq!(resp.get_header("location"), Some("/login"));
    }

    #[test]
    fn redirect_with_code() {
        let mut resp = Response::new();
        resp.redirect_with(301, "/x").unwrap();
        assert_eq!(resp.status_code().unwrap(), 301);
        assert_eq!(resp.status_message().unwrap(), "Moved Permanently");
        assert_eq!(resp.get_header("Location"), Some("/x"));

        assert!(resp.redirect_with(399, "/y").is_err());
        assert_eq!(resp.get_header("location"), Some("/x"));
    }

    #[test]
    fn into_parts() {
        let (status, headers, body) = Response::with_text("hi").into_parts();
        assert_eq!(status, "200 OK");
        assert_eq!(headers.get("content-length"), Some("2"));
        assert_eq!(body, vec![BodyPart::from("hi")]);
    }
}

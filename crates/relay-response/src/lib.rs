//! Mutable model of an outgoing HTTP response.
//!
//! Provides [`Response`], which application and middleware code build up
//! through a fluent API before a host pipeline puts it on the wire:
//!
//! - **Status**: stored as a `"code message"` line. [`Response::set_status`]
//!   derives the message from the registered reason-phrase table;
//!   [`Response::set_status_line`] stores any line verbatim.
//! - **Headers**: a case-insensitive, multi-valued [`HeaderMap`]. Setting a
//!   header replaces every value stored under that name in any casing;
//!   adding one appends.
//! - **Body**: an ordered list of [`BodyPart`]s (text, bytes, byte ranges,
//!   file references) concatenated on the wire.
//!
//! # Content-Length
//!
//! Only the text path (`set_body_text`, `write`, `write!`, `clear`) keeps
//! `content-length` in sync. Replacing or extending the body with
//! [`Response::set_body`] / [`Response::add_to_body`] leaves it as it was.
//!
//! ```
//! use relay_response::Response;
//!
//! let mut resp = Response::new();
//! resp.set_status(404)?
//!     .set_header("Cache-Control", "no-store")
//!     .set_body_text("nothing here");
//! assert_eq!(resp.status_message()?, "Not Found");
//! assert_eq!(resp.content_length()?, 12);
//! # Ok::<(), relay_response::ResponseError>(())
//! ```

mod body;
mod config;
mod error;
mod header;
mod response;
pub mod status;
pub mod wire;

pub use body::BodyPart;
pub use config::ResponseDefaults;
pub use error::{ResponseError, Result};
pub use header::{HeaderMap, HeaderValues};
pub use response::{Response, ResponseSource};
pub use wire::WireError;

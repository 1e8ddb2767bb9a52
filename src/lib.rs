//! Decoding of server-sent in-app message content.
//!
//! A content payload is loosely typed JSON. [`parse`] inspects its
//! `contentType`, picks the matching decoder and returns either a typed
//! [`Content`] or a [`ParseError`] describing why the payload was rejected.

pub mod constants;
pub mod content;
pub mod error;
pub mod input;
pub mod metrics;
pub mod parser;
pub mod payload;

pub use content::{Content, ContentType, EdgeInsets, InAppHtmlContent, InboxHtmlContent};
pub use error::{ParseError, ParseResult};
pub use parser::parse;

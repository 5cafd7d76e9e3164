//! Converts HTML fragments into the plain-text markup dialect used by Slack
//! messages ("mrkdwn"): `*bold*`, `_italic_`, `` `code` ``, `<url|label>`
//! links, bullet and numbered list items, checkbox glyphs, line breaks.
//!
//! Tokenization is delegated to [`html5ever`]; this crate maps the token
//! stream onto mrkdwn fragments and then runs a fixed sequence of
//! normalization passes over the accumulated output.
//!
//! ```
//! let output = slackify_core::convert("<b>Hello</b> <i>Slack</i>");
//! assert_eq!(output, "*Hello* _Slack_");
//! ```
//!
//! Callers with their own tokenizer can skip the html5ever path and feed
//! [`Event`]s straight into a [`MrkdwnRenderer`].

use std::io::Read;

mod error;
mod event;
mod normalize;
mod refs;
mod renderer;
mod sink;

pub use crate::error::ConvertError;
pub use crate::event::{Attribute, Event};
pub use crate::normalize::normalize;
pub use crate::renderer::MrkdwnRenderer;
pub use crate::sink::EventSink;

/// Converts an HTML fragment into Slack mrkdwn.
///
/// Total: any input yields a best-effort result, with malformed markup
/// recovered by the tokenizer.
pub fn convert(html: &str) -> String {
    sink::drive(html, MrkdwnRenderer::new()).finish()
}

/// Reads all of `input` and converts it.
///
/// Fails only on I/O errors or non-UTF-8 input; both are surfaced
/// unmodified.
pub fn convert_reader<R: Read>(mut input: R) -> Result<String, ConvertError> {
    let mut bytes = Vec::new();
    input.read_to_end(&mut bytes)?;
    let html = String::from_utf8(bytes)?;
    Ok(convert(&html))
}

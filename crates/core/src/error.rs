use std::io;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Failures surfaced by the fallible conversion entry points.
///
/// Tokenization itself never fails: the tokenizer is lenient and recovers
/// from malformed markup. What can fail is getting the bytes in at all, or
/// getting bytes that are not text.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input source could not be read.
    #[error("failed to read input")]
    Io(#[from] io::Error),
    /// The input bytes are not valid UTF-8 and cannot be tokenized.
    #[error("input is not valid UTF-8")]
    InvalidUtf8(#[from] FromUtf8Error),
}

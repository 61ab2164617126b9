// Copyright 2026 the utf8wide authors.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! utf8wide transcodes a byte-oriented UTF-8 stream into wide code units on
//! the fly, so that application code can emit UTF-8 unconditionally while
//! the destination (typically a wide-character console layer) receives
//! correctly encoded UTF-16 or UTF-32.
//!
//! The core type is [`Transcoder`]: an incremental decoder that keeps
//! partial-sequence state across arbitrarily chunked [`Transcoder::push`]
//! calls and writes each completed Unicode scalar value straight to a
//! [`WideSink`] with no output buffering. A sink picks its unit width at
//! compile time through its `Unit` associated type: `u16` sinks receive
//! surrogate pairs for scalar values above U+FFFF, `u32` sinks receive every
//! scalar value as a single unit.
//!
//! Decoding is deliberately permissive. Malformed bytes are dropped without
//! producing a replacement character and decoding resumes at the next byte,
//! so a push always consumes its whole input unless the sink itself rejects
//! a unit. See the [`Transcoder`] documentation for the details of the
//! recovery behavior.
//!
//! ```
//! use utf8wide::Transcoder;
//!
//! let mut transcoder = Transcoder::new(Vec::<u16>::new());
//! transcoder.push("caf\u{E9} \u{1F600}".as_bytes());
//! let units = transcoder.into_sink();
//! assert_eq!(units[3], 0x00E9);
//! assert_eq!(&units[5..], &[0xD83D, 0xDE00]);
//! ```
//!
//! For plugging into byte-oriented write paths there is [`WideWriter`], a
//! `std::io::Write` adapter over a transcoder. Switching a platform console
//! into wide mode and swapping the adapter in and out of a stream are the
//! caller's business; this crate only transcodes.

mod sink;
mod transcoder;
mod writer;

#[cfg(test)]
mod testing;

pub use crate::sink::{WideSink, WideUnit};
pub use crate::transcoder::{TranscodeResult, Transcoder};
pub use crate::writer::WideWriter;

/// Transcodes a whole UTF-8 buffer into UTF-16 code units in one call.
///
/// Malformed byte sequences are dropped, exactly as with
/// [`Transcoder::push`].
pub fn transcode_to_utf16(src: &[u8]) -> Vec<u16> {
    let mut transcoder = Transcoder::new(Vec::with_capacity(src.len()));
    let (result, read) = transcoder.push(src);
    debug_assert_eq!(result, TranscodeResult::InputEmpty);
    debug_assert_eq!(read, src.len());
    transcoder.into_sink()
}

/// Transcodes a whole UTF-8 buffer into UTF-32 code units in one call.
///
/// No surrogate splitting takes place; each decoded scalar value becomes
/// one unit.
pub fn transcode_to_utf32(src: &[u8]) -> Vec<u32> {
    let mut transcoder = Transcoder::new(Vec::with_capacity(src.len()));
    let (result, read) = transcoder.push(src);
    debug_assert_eq!(result, TranscodeResult::InputEmpty);
    debug_assert_eq!(read, src.len());
    transcoder.into_sink()
}

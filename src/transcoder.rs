// Copyright 2026 the utf8wide authors.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The incremental UTF-8 decoder that drives the wide re-encoder.
//!
//! The decoder recognizes lead and continuation bytes by their high-bit
//! patterns only. It does not validate what it reconstructs: overlong forms
//! decode to whatever value their bits spell out, and surrogate-range or
//! above-range values are handed to the sink's width rule, which emits them
//! on 32-bit sinks and has nothing to write for them on 16-bit sinks.
//! Strictness is traded away for forward progress on purpose.

use log::{debug, trace};

use crate::sink::{WideSink, WideUnit};

/// Result of a [`Transcoder::push`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TranscodeResult {
    /// The entire input buffer was consumed.
    ///
    /// Malformed byte sequences never prevent this outcome; they are
    /// dropped and decoding resumes at the next byte.
    InputEmpty,

    /// The sink rejected a code unit.
    ///
    /// The accompanying count reports how many input bytes were consumed.
    /// The byte whose output the sink refused is included in the count:
    /// its decode had already been committed when the write failed, and
    /// the transcoder does not retry emission.
    SinkFull,
}

/// A streaming transcoder from UTF-8 bytes to wide code units.
///
/// Input buffers of any length may begin or end in the middle of a
/// multi-byte sequence; the partial scalar value and the number of
/// continuation bytes still expected persist across calls, so any
/// partition of a byte stream produces identical sink output.
///
/// Each completed scalar value is written to the sink immediately, as one
/// or two `u16` units or a single `u32` unit depending on the sink's
/// width. There is no output buffering and no replacement character:
/// a byte that fits no decode rule resets the state and vanishes.
///
/// A transcoder serves one byte stream at a time from a single thread.
/// To process a new stream with the same instance, call [`reset`].
///
/// [`reset`]: Transcoder::reset
pub struct Transcoder<S: WideSink> {
    sink: S,
    code_point: u32,
    pending: usize, // continuation bytes still expected; 0 = no sequence in progress
}

impl<S: WideSink> Transcoder<S> {
    /// Wraps `sink` with fresh decode state.
    pub fn new(sink: S) -> Transcoder<S> {
        Transcoder {
            sink,
            code_point: 0,
            pending: 0,
        }
    }

    /// Pushes a UTF-8 buffer, writing decoded units to the sink as it goes.
    ///
    /// Returns the result and the number of bytes consumed. Absent a sink
    /// rejection the whole buffer is always consumed, malformed content
    /// included. A malformed byte abandons any in-progress sequence and
    /// produces no output; so does an ASCII byte that interrupts one,
    /// except that the ASCII byte itself is still emitted.
    pub fn push(&mut self, src: &[u8]) -> (TranscodeResult, usize) {
        let mut read = 0;
        while read < src.len() {
            let b = src[read];
            read += 1;
            if b < 0x80 {
                // A stray ASCII byte abandons an unfinished sequence.
                self.pending = 0;
                if !self.emit_ascii(b) {
                    debug!("sink rejected a code unit after {} bytes", read);
                    return (TranscodeResult::SinkFull, read);
                }
                continue;
            }
            if (b & 0xC0) == 0x80 && self.pending > 0 {
                self.code_point = (self.code_point << 6) | (b as u32 & 0x3F);
                self.pending -= 1;
                if self.pending == 0 && !self.emit_scalar(self.code_point) {
                    debug!("sink rejected a code unit after {} bytes", read);
                    return (TranscodeResult::SinkFull, read);
                }
            } else if (b & 0xE0) == 0xC0 {
                self.code_point = b as u32 & 0x1F;
                self.pending = 1;
            } else if (b & 0xF0) == 0xE0 {
                self.code_point = b as u32 & 0x0F;
                self.pending = 2;
            } else if (b & 0xF8) == 0xF0 {
                self.code_point = b as u32 & 0x07;
                self.pending = 3;
            } else {
                // Invalid lead or unexpected continuation byte: drop it
                // and resynchronize.
                trace!("dropping malformed byte {:#04X}", b);
                self.pending = 0;
            }
        }
        (TranscodeResult::InputEmpty, read)
    }

    /// Pushes a single byte.
    ///
    /// Plain ASCII with no sequence in progress takes a direct single-unit
    /// write; everything else goes through the general state machine. The
    /// observable behavior is identical to `push(&[b])`.
    #[inline]
    pub fn push_byte(&mut self, b: u8) -> TranscodeResult {
        if b < 0x80 && self.pending == 0 {
            if self.emit_ascii(b) {
                TranscodeResult::InputEmpty
            } else {
                TranscodeResult::SinkFull
            }
        } else {
            self.push(&[b]).0
        }
    }

    /// Forwards a flush to the sink.
    ///
    /// An unfinished multi-byte sequence stays pending across a flush; it
    /// is completed or abandoned by whatever bytes come next.
    pub fn flush(&mut self) -> bool {
        self.sink.flush()
    }

    /// Makes the transcoder ready to process a new byte stream.
    pub fn reset(&mut self) {
        self.code_point = 0;
        self.pending = 0;
    }

    /// Gets a reference to the sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Gets a mutable reference to the sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Unwraps the transcoder, discarding any unfinished byte sequence.
    pub fn into_sink(self) -> S {
        self.sink
    }

    #[inline(always)]
    fn emit_ascii(&mut self, ascii: u8) -> bool {
        self.sink.put_unit(<S::Unit as WideUnit>::from_ascii(ascii))
    }

    #[inline(always)]
    fn emit_scalar(&mut self, point: u32) -> bool {
        <S::Unit as WideUnit>::put_scalar(&mut self.sink, point)
    }
}

// Any copyright to the test code below this comment is dedicated to the
// Public Domain. https://creativecommons.org/publicdomain/zero/1.0/

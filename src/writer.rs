// Copyright 2026 the utf8wide authors.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Byte-oriented `std::io::Write` front end over a transcoder.

use std::io;

use crate::sink::WideSink;
use crate::transcoder::{TranscodeResult, Transcoder};

/// An `io::Write` adapter over a [`Transcoder`].
///
/// This is the byte-sink object a console layer swaps into a stream's write
/// path for the duration of a session: bytes written here are UTF-8, units
/// coming out the far side are wide. Installing the adapter and restoring
/// the stream afterwards are the caller's business; the writer only
/// transcodes.
///
/// A sink rejection that made any progress surfaces as a short count: the
/// bytes consumed by the failing call are reported as written even though
/// the refused unit's output was dropped, per the transcoder's no-retry
/// contract. A rejection that consumed nothing maps to
/// `io::ErrorKind::WriteZero`. Because the transcoder counts the failing
/// byte as consumed, a rejection on the last byte of a buffer is
/// indistinguishable from success here; callers that need byte-exact
/// accounting should use [`Transcoder::push`] directly.
pub struct WideWriter<S: WideSink> {
    transcoder: Transcoder<S>,
}

impl<S: WideSink> WideWriter<S> {
    /// Wraps `sink` in a writer with fresh decode state.
    pub fn new(sink: S) -> WideWriter<S> {
        WideWriter {
            transcoder: Transcoder::new(sink),
        }
    }

    /// Gets a reference to the wrapped sink.
    pub fn get_ref(&self) -> &S {
        self.transcoder.sink()
    }

    /// Gets a mutable reference to the wrapped sink.
    pub fn get_mut(&mut self) -> &mut S {
        self.transcoder.sink_mut()
    }

    /// Unwraps the writer, discarding any unfinished byte sequence.
    pub fn into_inner(self) -> S {
        self.transcoder.into_sink()
    }
}

impl<S: WideSink> io::Write for WideWriter<S> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.transcoder.push(buf) {
            (TranscodeResult::InputEmpty, read) => Ok(read),
            (TranscodeResult::SinkFull, 0) => Err(io::Error::new(
                io::ErrorKind::WriteZero,
                "wide sink rejected a code unit",
            )),
            (TranscodeResult::SinkFull, read) => Ok(read),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.transcoder.flush() {
            Ok(())
        } else {
            Err(io::Error::new(
                io::ErrorKind::Other,
                "wide sink failed to flush",
            ))
        }
    }
}

// Any copyright to the test code below this comment is dedicated to the
// Public Domain. https://creativecommons.org/publicdomain/zero/1.0/

// Copyright 2026 the utf8wide authors.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::sink::WideSink;
use crate::transcoder::{TranscodeResult, Transcoder};

pub fn transcode_utf16(bytes: &[u8], expect: &[u16]) {
    let mut transcoder = Transcoder::new(Vec::<u16>::new());
    let (result, read) = transcoder.push(bytes);
    assert_eq!(result, TranscodeResult::InputEmpty);
    assert_eq!(read, bytes.len());
    assert_eq!(&transcoder.into_sink()[..], expect);
}

pub fn transcode_utf32(bytes: &[u8], expect: &[u32]) {
    let mut transcoder = Transcoder::new(Vec::<u32>::new());
    let (result, read) = transcoder.push(bytes);
    assert_eq!(result, TranscodeResult::InputEmpty);
    assert_eq!(read, bytes.len());
    assert_eq!(&transcoder.into_sink()[..], expect);
}

pub fn transcode_utf16_chunked(bytes: &[u8], cuts: &[usize], expect: &[u16]) {
    let mut transcoder = Transcoder::new(Vec::<u16>::new());
    push_in_chunks(&mut transcoder, bytes, cuts);
    assert_eq!(&transcoder.into_sink()[..], expect);
}

pub fn transcode_utf32_chunked(bytes: &[u8], cuts: &[usize], expect: &[u32]) {
    let mut transcoder = Transcoder::new(Vec::<u32>::new());
    push_in_chunks(&mut transcoder, bytes, cuts);
    assert_eq!(&transcoder.into_sink()[..], expect);
}

// `cuts` must be non-decreasing and within the buffer.
fn push_in_chunks<S: WideSink>(transcoder: &mut Transcoder<S>, bytes: &[u8], cuts: &[usize]) {
    let mut consumed = 0;
    for &cut in cuts {
        let (result, read) = transcoder.push(&bytes[consumed..cut]);
        assert_eq!(result, TranscodeResult::InputEmpty);
        assert_eq!(read, cut - consumed);
        consumed = cut;
    }
    let (result, read) = transcoder.push(&bytes[consumed..]);
    assert_eq!(result, TranscodeResult::InputEmpty);
    assert_eq!(read, bytes.len() - consumed);
}

/// Accepts units until `limit` of them have been written, then rejects.
pub struct LimitedSink {
    units: Vec<u16>,
    limit: usize,
}

impl LimitedSink {
    pub fn new(limit: usize) -> LimitedSink {
        LimitedSink {
            units: Vec::new(),
            limit,
        }
    }

    pub fn units(&self) -> &[u16] {
        &self.units
    }

    pub fn raise_limit(&mut self, limit: usize) {
        self.limit = limit;
    }
}

impl WideSink for LimitedSink {
    type Unit = u16;
    fn put_unit(&mut self, unit: u16) -> bool {
        if self.units.len() < self.limit {
            self.units.push(unit);
            true
        } else {
            false
        }
    }
    fn flush(&mut self) -> bool {
        true
    }
}

/// Counts flushes so that flush forwarding is observable.
#[derive(Default)]
pub struct FlushCountingSink {
    units: Vec<u16>,
    flushes: usize,
}

impl FlushCountingSink {
    pub fn units(&self) -> &[u16] {
        &self.units
    }

    pub fn flushes(&self) -> usize {
        self.flushes
    }
}

impl WideSink for FlushCountingSink {
    type Unit = u16;
    fn put_unit(&mut self, unit: u16) -> bool {
        self.units.push(unit);
        true
    }
    fn flush(&mut self) -> bool {
        self.flushes += 1;
        true
    }
}

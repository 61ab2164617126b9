// Copyright 2026 the utf8wide authors.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The output side of the transcoder: the minimal "put one code unit,
//! flush" capability supplied by the surrounding console or display layer,
//! plus the sealed unit-width trait that selects between UTF-16 and UTF-32
//! emission at compile time.

mod private {
    pub trait Sealed {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
}

/// A destination accepting wide code units one at a time.
///
/// The transcoder holds its sink for its own lifetime and never buffers
/// decoded output; every completed scalar value is written out immediately.
/// `put_unit` reports success, and the first rejection makes the transcoder
/// return early with a short byte count. `flush` forwards to whatever the
/// underlying device means by flushing; the transcoder attaches no meaning
/// of its own to it.
pub trait WideSink {
    /// The sink's native code-unit type, `u16` or `u32`.
    type Unit: WideUnit;

    /// Writes one code unit. Returns `false` if the sink cannot accept it.
    fn put_unit(&mut self, unit: Self::Unit) -> bool;

    /// Forwards a flush request to the underlying device.
    fn flush(&mut self) -> bool;
}

impl<'a, S: WideSink + ?Sized> WideSink for &'a mut S {
    type Unit = S::Unit;
    #[inline(always)]
    fn put_unit(&mut self, unit: Self::Unit) -> bool {
        (**self).put_unit(unit)
    }
    #[inline(always)]
    fn flush(&mut self) -> bool {
        (**self).flush()
    }
}

/// Infallible collector sink for UTF-16 output.
impl WideSink for Vec<u16> {
    type Unit = u16;
    #[inline(always)]
    fn put_unit(&mut self, unit: u16) -> bool {
        self.push(unit);
        true
    }
    #[inline(always)]
    fn flush(&mut self) -> bool {
        true
    }
}

/// Infallible collector sink for UTF-32 output.
impl WideSink for Vec<u32> {
    type Unit = u32;
    #[inline(always)]
    fn put_unit(&mut self, unit: u32) -> bool {
        self.push(unit);
        true
    }
    #[inline(always)]
    fn flush(&mut self) -> bool {
        true
    }
}

/// The width of a sink's code units together with the matching emission
/// rule for a completed scalar value.
///
/// This trait is sealed; the `u16` and `u32` implementations are the only
/// unit widths there are.
pub trait WideUnit: Copy + private::Sealed {
    /// Converts a plain ASCII byte into one code unit.
    fn from_ascii(ascii: u8) -> Self;

    /// Emits a completed scalar value into `sink`.
    ///
    /// Values the width cannot represent produce no output and are not an
    /// error; the transcoder is permissive about what a malformed sequence
    /// may reconstruct.
    fn put_scalar<S>(sink: &mut S, point: u32) -> bool
    where
        S: WideSink<Unit = Self>;
}

impl WideUnit for u16 {
    #[inline(always)]
    fn from_ascii(ascii: u8) -> u16 {
        debug_assert!(ascii < 0x80);
        ascii as u16
    }

    #[inline(always)]
    fn put_scalar<S>(sink: &mut S, point: u32) -> bool
    where
        S: WideSink<Unit = u16>,
    {
        if point <= 0xD7FF || (point >= 0xE000 && point <= 0xFFFF) {
            sink.put_unit(point as u16)
        } else if point >= 0x1_0000 && point <= 0x10_FFFF {
            // Same arithmetic as ((point - 0x10000) >> 10) + 0xD800 and
            // ((point - 0x10000) & 0x3FF) + 0xDC00.
            sink.put_unit((0xD7C0 + (point >> 10)) as u16)
                && sink.put_unit((0xDC00 + (point & 0x3FF)) as u16)
        } else {
            // Surrogate-range or above-range reconstruction from a
            // malformed sequence: no 16-bit representation, nothing is
            // written.
            true
        }
    }
}

impl WideUnit for u32 {
    #[inline(always)]
    fn from_ascii(ascii: u8) -> u32 {
        debug_assert!(ascii < 0x80);
        ascii as u32
    }

    #[inline(always)]
    fn put_scalar<S>(sink: &mut S, point: u32) -> bool
    where
        S: WideSink<Unit = u32>,
    {
        // Wide enough for any reconstruction; one unit, no range checks.
        sink.put_unit(point)
    }
}

// Any copyright to the test code below this comment is dedicated to the
// Public Domain. https://creativecommons.org/publicdomain/zero/1.0/

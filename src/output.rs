//! Ready-made output drivers

use core::convert::Infallible;

use smart_leds::SmartLedsWrite;

use crate::{
    OutputDriver,
    color::Rgb,
    frame::{BYTES_PER_PIXEL, encode_grb},
    layout::PIXEL_COUNT,
};

/// Output through any `smart-leds` driver
#[derive(Debug)]
pub struct SmartLedsOutput<W> {
    inner: W,
}

impl<W> SmartLedsOutput<W> {
    pub const fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W> OutputDriver for SmartLedsOutput<W>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    type Error = W::Error;

    fn write(&mut self, colors: &[Rgb]) -> Result<(), Self::Error> {
        self.inner.write(colors.iter().copied())
    }
}

/// Output through a blocking routine that clocks raw bytes onto the data pin
///
/// Pixels are serialized in WS2812 order (green, red, blue) and handed over
/// in a single call, so the strip never latches half a frame. Anything past
/// [`PIXEL_COUNT`] pixels is dropped.
pub struct GrbBytesOutput<F> {
    transmit: F,
}

impl<F: FnMut(&[u8])> GrbBytesOutput<F> {
    pub const fn new(transmit: F) -> Self {
        Self { transmit }
    }
}

impl<F: FnMut(&[u8])> OutputDriver for GrbBytesOutput<F> {
    type Error = Infallible;

    fn write(&mut self, colors: &[Rgb]) -> Result<(), Self::Error> {
        let mut bytes = [0u8; PIXEL_COUNT * BYTES_PER_PIXEL];
        let written = encode_grb(colors, &mut bytes);
        (self.transmit)(&bytes[..written]);
        Ok(())
    }
}

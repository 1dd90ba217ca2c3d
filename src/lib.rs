#![no_std]

pub mod color;
pub mod easing;
pub mod effect;
pub mod frame;
pub mod frame_scheduler;
pub mod layout;
pub mod lfsr;
pub mod math8;
pub mod output;
pub mod sequencer;

pub use effect::{Effect, EffectId, EffectSlot, FrameStep};
pub use frame::{FrameBuffer, OutputScope};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use layout::{EyeLayout, PIXEL_COUNT};
pub use lfsr::{Lfsr, LfsrConfig};
pub use output::{GrbBytesOutput, SmartLedsOutput};
pub use sequencer::{Playlist, Sequencer, SequencerConfig};

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The frame scheduler is generic over this trait. Firmware drivers that
/// cannot fail use [`core::convert::Infallible`] as their error.
pub trait OutputDriver {
    type Error;

    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]) -> Result<(), Self::Error>;
}

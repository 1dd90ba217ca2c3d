//! Frame scheduling and timing utilities.
//!
//! Pushes sequencer frames to the output driver and keeps a synthetic
//! timeline of when each frame is due. The caller is responsible for sleeping
//! between frames, or hands a blocking delay to [`FrameScheduler::run`].

use core::convert::Infallible;

use embassy_time::{Duration, Instant};
use embedded_hal::delay::DelayNs;

use crate::{OutputDriver, Sequencer};

/// Wait used when the sequencer has nothing to show
pub const IDLE_FRAME_DURATION: Duration = Duration::from_millis(100);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long the frame just written stays on the LEDs.
    pub sleep_duration: Duration,
}

/// Portable frame scheduler that drives the sequencer without async.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(Sequencer::new(config), driver);
///
/// loop {
///     let result = scheduler.tick()?;
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<O: OutputDriver> {
    output: O,
    sequencer: Sequencer,
    timeline: Instant,
}

impl<O: OutputDriver> FrameScheduler<O> {
    pub fn new(sequencer: Sequencer, driver: O) -> Self {
        Self {
            output: driver,
            sequencer,
            timeline: Instant::from_millis(0),
        }
    }

    /// Render one frame, write it out and return timing information.
    ///
    /// Fails only if the output driver does.
    pub fn tick(&mut self) -> Result<FrameResult, O::Error> {
        let sleep_duration = match self.sequencer.render() {
            Some(step) => {
                let pixels = self.sequencer.frame().scoped(step.scope);
                self.output.write(&pixels)?;
                step.delay
            }
            None => IDLE_FRAME_DURATION,
        };

        self.timeline += sleep_duration;

        Ok(FrameResult {
            next_deadline: self.timeline,
            sleep_duration,
        })
    }

    /// Play frames forever, blocking on `delay` between them
    ///
    /// Only returns when the output driver fails.
    pub fn run<D: DelayNs>(&mut self, delay: &mut D) -> Result<Infallible, O::Error> {
        loop {
            let result = self.tick()?;
            let millis = u32::try_from(result.sleep_duration.as_millis()).unwrap_or(u32::MAX);
            delay.delay_ms(millis);
        }
    }

    /// Time at which the next frame is due, counted from the first frame
    pub fn timeline(&self) -> Instant {
        self.timeline
    }

    /// Get a reference to the sequencer.
    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    /// Get a mutable reference to the sequencer.
    pub fn sequencer_mut(&mut self) -> &mut Sequencer {
        &mut self.sequencer
    }

    /// Get a reference to the output driver.
    pub fn output(&self) -> &O {
        &self.output
    }
}

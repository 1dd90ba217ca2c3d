//! Effect system with compile-time known effect variants
//!
//! All effects are stored in an enum to avoid heap allocations.
//! Each effect implements the `Effect` trait as a resumable state machine:
//! one `render` call produces one frame of its bounded animation loop.

mod circles;
mod crossfade;
mod flashing;
mod rollercoaster;
mod scanner;
mod sparkles;

use embassy_time::Duration;
pub use circles::{CirclesConfig, CirclesEffect};
pub use crossfade::{CrossfadeConfig, CrossfadeEffect};
pub use flashing::{FlashingConfig, FlashingEffect};
pub use rollercoaster::{RollercoasterConfig, RollercoasterEffect};
pub use scanner::{ScannerConfig, ScannerEffect};
pub use sparkles::{SparklesConfig, SparklesEffect};

use crate::{
    frame::{FrameBuffer, OutputScope},
    lfsr::Lfsr,
    sequencer::SequencerConfig,
};

const EFFECT_NAME_FLASHING: &str = "flashing";
const EFFECT_NAME_SCANNER: &str = "scanner";
const EFFECT_NAME_CIRCLES: &str = "circles";
const EFFECT_NAME_CROSSFADE: &str = "crossfade";
const EFFECT_NAME_SPARKLES: &str = "sparkles";
const EFFECT_NAME_ROLLERCOASTER: &str = "rollercoaster";

const EFFECT_ID_FLASHING: u8 = 0;
const EFFECT_ID_SCANNER: u8 = 1;
const EFFECT_ID_CIRCLES: u8 = 2;
const EFFECT_ID_CROSSFADE: u8 = 3;
const EFFECT_ID_SPARKLES: u8 = 4;
const EFFECT_ID_ROLLERCOASTER: u8 = 5;

/// What the scheduler does with a rendered frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameStep {
    /// How long the frame stays on the LEDs
    pub delay: Duration,
    /// Which pixels get transmitted
    pub scope: OutputScope,
}

impl FrameStep {
    pub const fn full(delay: Duration) -> Self {
        Self {
            delay,
            scope: OutputScope::Full,
        }
    }
}

pub trait Effect {
    /// Render the next frame into `frame`
    ///
    /// Returns `None` once the effect has run all of its repetitions. The frame
    /// is left untouched in that case.
    fn render(&mut self, rng: &mut Lfsr, frame: &mut FrameBuffer) -> Option<FrameStep>;

    /// Rewind to the first repetition
    fn reset(&mut self);
}

/// Repetition and step counter shared by the effect state machines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct RepCursor {
    rep: u16,
    step: usize,
}

impl RepCursor {
    pub(crate) const fn new() -> Self {
        Self { rep: 0, step: 0 }
    }

    pub(crate) const fn rep(self) -> u16 {
        self.rep
    }

    pub(crate) const fn step(self) -> usize {
        self.step
    }

    pub(crate) const fn is_done(self, repetitions: u16) -> bool {
        self.rep >= repetitions
    }

    /// Move to the next step, wrapping into the next repetition
    ///
    /// Returns true when a repetition was completed.
    pub(crate) fn advance(&mut self, steps_per_rep: usize) -> bool {
        self.step += 1;
        if self.step < steps_per_rep {
            return false;
        }
        self.step = 0;
        self.rep = self.rep.saturating_add(1);
        true
    }
}

/// Effect slot - enum containing all possible effects
#[derive(Debug, Clone)]
pub enum EffectSlot {
    /// Whole buffer fades in and out
    Flashing(FlashingEffect),
    /// Mirrored sweep across both eyes
    Scanner(ScannerEffect),
    /// Dot circling each eye
    Circles(CirclesEffect),
    /// Color cross-fading between the two eyes
    Crossfade(CrossfadeEffect),
    /// Random twinkles over the palette
    Sparkles(SparklesEffect),
    /// Figure eight through both eyes with shifting color
    Rollercoaster(RollercoasterEffect),
}

/// Known effect ids, in default playlist order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum EffectId {
    Flashing = EFFECT_ID_FLASHING,
    Scanner = EFFECT_ID_SCANNER,
    Circles = EFFECT_ID_CIRCLES,
    Crossfade = EFFECT_ID_CROSSFADE,
    Sparkles = EFFECT_ID_SPARKLES,
    Rollercoaster = EFFECT_ID_ROLLERCOASTER,
}

impl EffectId {
    /// Every effect in the order the firmware plays them
    pub const ALL: [Self; 6] = [
        Self::Flashing,
        Self::Scanner,
        Self::Circles,
        Self::Crossfade,
        Self::Sparkles,
        Self::Rollercoaster,
    ];

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            EFFECT_ID_FLASHING => Self::Flashing,
            EFFECT_ID_SCANNER => Self::Scanner,
            EFFECT_ID_CIRCLES => Self::Circles,
            EFFECT_ID_CROSSFADE => Self::Crossfade,
            EFFECT_ID_SPARKLES => Self::Sparkles,
            EFFECT_ID_ROLLERCOASTER => Self::Rollercoaster,
            _ => return None,
        })
    }

    pub fn to_slot(self, config: &SequencerConfig) -> EffectSlot {
        let layout = config.layout;
        match self {
            Self::Flashing => EffectSlot::Flashing(FlashingEffect::new(config.flashing, layout)),
            Self::Scanner => EffectSlot::Scanner(ScannerEffect::new(config.scanner, layout)),
            Self::Circles => EffectSlot::Circles(CirclesEffect::new(config.circles, layout)),
            Self::Crossfade => EffectSlot::Crossfade(CrossfadeEffect::new(config.crossfade)),
            Self::Sparkles => EffectSlot::Sparkles(SparklesEffect::new(config.sparkles)),
            Self::Rollercoaster => {
                EffectSlot::Rollercoaster(RollercoasterEffect::new(config.rollercoaster))
            }
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Flashing => EFFECT_NAME_FLASHING,
            Self::Scanner => EFFECT_NAME_SCANNER,
            Self::Circles => EFFECT_NAME_CIRCLES,
            Self::Crossfade => EFFECT_NAME_CROSSFADE,
            Self::Sparkles => EFFECT_NAME_SPARKLES,
            Self::Rollercoaster => EFFECT_NAME_ROLLERCOASTER,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            EFFECT_NAME_FLASHING => Some(Self::Flashing),
            EFFECT_NAME_SCANNER => Some(Self::Scanner),
            EFFECT_NAME_CIRCLES => Some(Self::Circles),
            EFFECT_NAME_CROSSFADE => Some(Self::Crossfade),
            EFFECT_NAME_SPARKLES => Some(Self::Sparkles),
            EFFECT_NAME_ROLLERCOASTER => Some(Self::Rollercoaster),
            _ => None,
        }
    }
}

impl EffectSlot {
    /// Render the next frame of the current effect
    pub fn render(&mut self, rng: &mut Lfsr, frame: &mut FrameBuffer) -> Option<FrameStep> {
        match self {
            Self::Flashing(effect) => effect.render(rng, frame),
            Self::Scanner(effect) => effect.render(rng, frame),
            Self::Circles(effect) => effect.render(rng, frame),
            Self::Crossfade(effect) => effect.render(rng, frame),
            Self::Sparkles(effect) => effect.render(rng, frame),
            Self::Rollercoaster(effect) => effect.render(rng, frame),
        }
    }

    /// Reset the effect state
    pub fn reset(&mut self) {
        match self {
            Self::Flashing(effect) => Effect::reset(effect),
            Self::Scanner(effect) => Effect::reset(effect),
            Self::Circles(effect) => Effect::reset(effect),
            Self::Crossfade(effect) => Effect::reset(effect),
            Self::Sparkles(effect) => Effect::reset(effect),
            Self::Rollercoaster(effect) => Effect::reset(effect),
        }
    }

    /// Get the effect ID for external observation
    pub fn id(&self) -> EffectId {
        match self {
            Self::Flashing(_) => EffectId::Flashing,
            Self::Scanner(_) => EffectId::Scanner,
            Self::Circles(_) => EffectId::Circles,
            Self::Crossfade(_) => EffectId::Crossfade,
            Self::Sparkles(_) => EffectId::Sparkles,
            Self::Rollercoaster(_) => EffectId::Rollercoaster,
        }
    }
}

#[cfg(feature = "esp32-log")]
use esp_println::println;

use embassy_time::Duration;
use heapless::Vec;

use crate::effect::{
    CirclesConfig, CrossfadeConfig, EffectId, EffectSlot, FlashingConfig, FrameStep,
    RollercoasterConfig, ScannerConfig, SparklesConfig,
};
use crate::frame::FrameBuffer;
use crate::layout::EyeLayout;
use crate::lfsr::{Lfsr, LfsrConfig};

/// Maximum number of entries in a playlist
pub const MAX_PLAYLIST_LEN: usize = 8;

/// Ordered list of effects the sequencer cycles through
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    inner: Vec<EffectId, MAX_PLAYLIST_LEN>,
}

impl Default for Playlist {
    fn default() -> Self {
        let mut playlist = Self::new();
        for id in EffectId::ALL {
            let _ = playlist.push(id);
        }
        playlist
    }
}

impl Playlist {
    /// Create an empty playlist
    pub const fn new() -> Self {
        Self { inner: Vec::new() }
    }

    /// Build a playlist from a list of ids
    ///
    /// Returns the first id that does not fit.
    pub fn from_ids(ids: &[EffectId]) -> Result<Self, EffectId> {
        let mut playlist = Self::new();
        for &id in ids {
            playlist.push(id)?;
        }
        Ok(playlist)
    }

    /// Append an effect
    ///
    /// Returns the id if the playlist is full
    pub fn push(&mut self, id: EffectId) -> Result<(), EffectId> {
        self.inner.push(id)
    }

    pub fn get(&self, index: usize) -> Option<EffectId> {
        self.inner.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = EffectId> + '_ {
        self.inner.iter().copied()
    }
}

/// Configuration for the sequencer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequencerConfig {
    pub seed: LfsrConfig,
    pub layout: EyeLayout,
    pub playlist: Playlist,
    pub flashing: FlashingConfig,
    pub scanner: ScannerConfig,
    pub circles: CirclesConfig,
    pub crossfade: CrossfadeConfig,
    pub sparkles: SparklesConfig,
    pub rollercoaster: RollercoasterConfig,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self::dual_eye()
    }
}

impl SequencerConfig {
    /// Two LED segments, the second eye mirrors the first
    pub fn dual_eye() -> Self {
        Self {
            seed: LfsrConfig::default(),
            layout: EyeLayout::Dual,
            playlist: Playlist::default(),
            flashing: FlashingConfig {
                repetitions: 10,
                step_delay: Duration::from_millis(20),
            },
            scanner: ScannerConfig {
                repetitions: 30,
                pause_steps: 50,
                step_delay: Duration::from_millis(20),
            },
            circles: CirclesConfig {
                repetitions: 50,
                step_delay: Duration::from_millis(80),
            },
            crossfade: CrossfadeConfig {
                repetitions: 20,
                fade_in_delay: Duration::from_millis(16),
                hand_over_delay: Duration::from_millis(8),
            },
            sparkles: SparklesConfig {
                repetitions: 20,
                step_delay: Duration::from_millis(80),
            },
            rollercoaster: RollercoasterConfig {
                repetitions: 50,
                step_delay: Duration::from_millis(50),
            },
        }
    }

    /// One LED segment, no mirrored addressing and shorter runs
    pub fn single_eye() -> Self {
        Self {
            layout: EyeLayout::Single,
            flashing: FlashingConfig {
                repetitions: 5,
                step_delay: Duration::from_millis(20),
            },
            scanner: ScannerConfig {
                repetitions: 15,
                pause_steps: 50,
                step_delay: Duration::from_millis(20),
            },
            circles: CirclesConfig {
                repetitions: 25,
                step_delay: Duration::from_millis(80),
            },
            crossfade: CrossfadeConfig {
                repetitions: 10,
                fade_in_delay: Duration::from_millis(16),
                hand_over_delay: Duration::from_millis(8),
            },
            sparkles: SparklesConfig {
                repetitions: 10,
                step_delay: Duration::from_millis(80),
            },
            rollercoaster: RollercoasterConfig {
                repetitions: 25,
                step_delay: Duration::from_millis(50),
            },
            ..Self::dual_eye()
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: LfsrConfig) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_playlist(mut self, playlist: Playlist) -> Self {
        self.playlist = playlist;
        self
    }
}

/// Sequencer - plays the effects of a playlist in order, forever
///
/// Owns the random source and the frame buffer for the lifetime of the
/// firmware.
pub struct Sequencer {
    config: SequencerConfig,
    rng: Lfsr,
    frame: FrameBuffer,
    position: usize,
    current: Option<EffectSlot>,
}

impl Sequencer {
    pub fn new(config: SequencerConfig) -> Self {
        let current = config.playlist.get(0).map(|id| id.to_slot(&config));
        Self {
            rng: Lfsr::new(config.seed),
            frame: FrameBuffer::new(),
            position: 0,
            current,
            config,
        }
    }

    /// Render the next frame
    ///
    /// Moves on to the next playlist entry whenever the current effect
    /// finishes. Returns `None` only if no effect in the playlist renders a
    /// frame at all.
    pub fn render(&mut self) -> Option<FrameStep> {
        for _ in 0..=self.config.playlist.len() {
            let slot = self.current.as_mut()?;
            if let Some(step) = slot.render(&mut self.rng, &mut self.frame) {
                return Some(step);
            }
            self.advance();
        }
        None
    }

    /// Frame as left by the last render
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    /// Effect that rendered or is about to render
    pub fn current_effect(&self) -> Option<EffectId> {
        self.current.as_ref().map(EffectSlot::id)
    }

    /// Index of the current effect in the playlist
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn config(&self) -> &SequencerConfig {
        &self.config
    }

    /// Switch to the next playlist entry, wrapping around
    fn advance(&mut self) {
        let len = self.config.playlist.len();
        if len == 0 {
            self.current = None;
            return;
        }
        self.position = (self.position + 1) % len;
        self.current = self.config.playlist.get(self.position).map(|id| {
            let mut slot = id.to_slot(&self.config);
            slot.reset();
            slot
        });

        #[cfg(feature = "esp32-log")]
        {
            if let Some(id) = self.current_effect() {
                println!("effect: {} ({}/{})", id.as_str(), self.position + 1, len);
            }
        }
    }
}

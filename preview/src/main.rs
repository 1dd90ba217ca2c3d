//! Desktop preview app for eyes-sequencer
//!
//! Plays the animation sequence on two simulated LED rings. Frames are paced
//! by a synthetic clock instead of a busy-wait, so playback can be paused and
//! sped up.

use std::convert::Infallible;
use std::f32::consts::FRAC_PI_4;
use std::time::Instant as StdInstant;

use eframe::egui::{self};
use eyes_sequencer::{
    FrameScheduler, OutputDriver, PIXEL_COUNT, Rgb, Sequencer, SequencerConfig,
    layout::EYE_PIXELS,
};

/// Size of each LED circle in pixels
const LED_SIZE: f32 = 18.0;

/// Radius of one eye ring
const RING_RADIUS: f32 = 60.0;

/// Upper bound of frames rendered per UI update, so a long stall does not freeze the UI
const MAX_FRAMES_PER_UPDATE: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Preset {
    DualEye,
    SingleEye,
}

impl Preset {
    fn config(self) -> SequencerConfig {
        match self {
            Self::DualEye => SequencerConfig::dual_eye(),
            Self::SingleEye => SequencerConfig::single_eye(),
        }
    }
}

/// Keeps the last frame written by the scheduler
struct PreviewOutput {
    leds: [Rgb; PIXEL_COUNT],
    frames: u64,
}

impl OutputDriver for PreviewOutput {
    type Error = Infallible;

    fn write(&mut self, colors: &[Rgb]) -> Result<(), Self::Error> {
        for (led, color) in self.leds.iter_mut().zip(colors) {
            *led = *color;
        }
        self.frames += 1;
        Ok(())
    }
}

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 360.0])
            .with_title("Eyes Sequencer Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "eyes-sequencer-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    scheduler: FrameScheduler<PreviewOutput>,
    preset: Preset,
    /// Synthetic time in milliseconds
    t_ms: u64,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    /// Whether animation is playing
    playing: bool,
    /// Time scale multiplier (1.0 = realtime)
    time_scale: f32,
    /// Channel multiplier, the firmware drives the LEDs at low levels
    gain: u8,
}

impl PreviewApp {
    fn new() -> Self {
        let preset = Preset::DualEye;
        Self {
            scheduler: Self::scheduler_for(preset),
            preset,
            t_ms: 0,
            last_frame: StdInstant::now(),
            playing: true,
            time_scale: 1.0,
            gain: 8,
        }
    }

    fn scheduler_for(preset: Preset) -> FrameScheduler<PreviewOutput> {
        let output = PreviewOutput {
            leds: [Rgb::default(); PIXEL_COUNT],
            frames: 0,
        };
        FrameScheduler::new(Sequencer::new(preset.config()), output)
    }

    /// Restart the sequence from the first effect
    fn restart(&mut self) {
        self.scheduler = Self::scheduler_for(self.preset);
        self.t_ms = 0;
        self.last_frame = StdInstant::now();
    }

    /// Update synthetic time based on wall clock and time scale
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        if self.playing {
            let delta_ms_f64 = delta.as_secs_f64() * 1000.0 * f64::from(self.time_scale);
            let delta_ms_f64 = if delta_ms_f64.is_finite() {
                #[allow(clippy::cast_precision_loss)]
                delta_ms_f64.clamp(0.0, u64::MAX as f64)
            } else {
                0.0
            };
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let delta_ms = delta_ms_f64 as u64;
            self.t_ms = self.t_ms.wrapping_add(delta_ms);
        }
    }

    /// Emit every frame that became due
    fn catch_up(&mut self) {
        for _ in 0..MAX_FRAMES_PER_UPDATE {
            if self.scheduler.timeline().as_millis() > self.t_ms {
                return;
            }
            let Ok(_) = self.scheduler.tick();
        }
        // Too far behind, drop the backlog
        self.t_ms = self.scheduler.timeline().as_millis();
    }

    fn display_color(&self, pixel: Rgb) -> egui::Color32 {
        let boost = |channel: u8| channel.saturating_mul(self.gain);
        egui::Color32::from_rgb(boost(pixel.r), boost(pixel.g), boost(pixel.b))
    }
}

/// Screen position of pixel `i` within an eye; 0 is at the top, indices run clockwise
#[allow(clippy::cast_precision_loss)]
fn ring_offset(i: usize) -> egui::Vec2 {
    let angle = FRAC_PI_4 * 2.0 - FRAC_PI_4 * i as f32;
    egui::vec2(angle.cos() * RING_RADIUS, -angle.sin() * RING_RADIUS)
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_time();
        self.catch_up();

        // Request continuous repaint for animation
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("⏮ Restart").clicked() {
                    self.restart();
                }
                if ui
                    .button(if self.playing { "⏸ Pause" } else { "▶ Play" })
                    .clicked()
                {
                    self.playing = !self.playing;
                }

                ui.add_space(8.0);

                ui.label("Preset:");
                let old_preset = self.preset;
                ui.selectable_value(&mut self.preset, Preset::DualEye, "dual eye");
                ui.selectable_value(&mut self.preset, Preset::SingleEye, "single eye");
                if self.preset != old_preset {
                    self.restart();
                }
            });

            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.label("Speed:");
                ui.add(egui::Slider::new(&mut self.time_scale, 0.1..=5.0).logarithmic(true));
                ui.add_space(8.0);
                ui.label("Gain:");
                ui.add(egui::Slider::new(&mut self.gain, 1..=16));
            });

            ui.add_space(4.0);

            let sequencer = self.scheduler.sequencer();
            let effect = sequencer.current_effect().map_or("-", |id| id.as_str());
            let secs = self.t_ms / 1000;
            let ms = self.t_ms % 1000;
            ui.label(format!(
                "Time: {secs}.{ms:03}s  Effect: {effect}  Frames: {}",
                self.scheduler.output().frames
            ));

            ui.add_space(16.0);

            // === LED Display ===
            let size = egui::vec2(4.0 * RING_RADIUS + 3.0 * LED_SIZE * 2.0, 2.0 * RING_RADIUS + LED_SIZE * 2.0);
            let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
            let left_center = response.rect.left_center()
                + egui::vec2(RING_RADIUS + LED_SIZE, 0.0);
            let right_center = left_center + egui::vec2(2.0 * RING_RADIUS + 2.0 * LED_SIZE, 0.0);

            for (index, pixel) in self.scheduler.output().leds.iter().enumerate() {
                let center = if index < EYE_PIXELS {
                    left_center + ring_offset(index)
                } else {
                    right_center + ring_offset(index - EYE_PIXELS)
                };
                painter.circle_filled(center, LED_SIZE / 2.0, self.display_color(*pixel));
            }
        });
    }
}

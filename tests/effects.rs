mod tests {
    use eyes_sequencer::{
        Duration, Effect, EyeLayout, FrameBuffer, FrameStep, Lfsr, OutputScope, Rgb,
        color::{PALETTE, dim, palette_color},
        effect::{
            CirclesConfig, CirclesEffect, CrossfadeConfig, CrossfadeEffect, FlashingConfig,
            FlashingEffect, RollercoasterConfig, RollercoasterEffect, ScannerConfig,
            ScannerEffect, SparklesConfig, SparklesEffect,
        },
        layout::{FIGURE_EIGHT, SCANNER_LOWER, SCANNER_UPPER, opposite_eye_index},
        math8::qsub8,
    };

    const TURQUOISE: Rgb = Rgb {
        r: 0x40,
        g: 0xE0,
        b: 0xD0,
    };
    const PURPLE: Rgb = Rgb {
        r: 0x90,
        g: 0x00,
        b: 0x80,
    };

    /// Render every remaining frame, keeping a snapshot of each
    fn run_to_end<E: Effect>(
        effect: &mut E,
        rng: &mut Lfsr,
        frame: &mut FrameBuffer,
    ) -> Vec<(FrameStep, FrameBuffer)> {
        let mut frames = Vec::new();
        while let Some(step) = effect.render(rng, frame) {
            frames.push((step, frame.clone()));
            assert!(frames.len() < 100_000, "effect never finished");
        }
        frames
    }

    /// Reference generator advanced by `draws` bytes
    fn lfsr_after(draws: usize) -> Lfsr {
        let mut rng = Lfsr::default();
        for _ in 0..draws {
            rng.next_byte();
        }
        rng
    }

    fn lit_count(frame: &FrameBuffer) -> usize {
        frame.pixels().iter().filter(|led| **led != Rgb::default()).count()
    }

    fn decayed(color: Rgb, amount: u8) -> Rgb {
        Rgb {
            r: qsub8(color.r, amount),
            g: qsub8(color.g, amount),
            b: qsub8(color.b, amount),
        }
    }

    #[test]
    fn test_first_draw_is_turquoise() {
        assert_eq!(palette_color(Lfsr::default().next_byte()), TURQUOISE);
    }

    #[test]
    fn test_flashing_ramps_up_and_down() {
        let config = FlashingConfig {
            repetitions: 2,
            step_delay: Duration::from_millis(20),
        };
        let mut effect = FlashingEffect::new(config, EyeLayout::Dual);
        let mut rng = Lfsr::default();
        let mut frame = FrameBuffer::new();
        let frames = run_to_end(&mut effect, &mut rng, &mut frame);

        assert_eq!(frames.len(), 2 * 128);
        assert!(frames.iter().all(|(step, _)| {
            step.delay == Duration::from_millis(20) && step.scope == OutputScope::FirstHalfTwice
        }));

        // Dark at both ends, full palette color >> 3 at the top
        assert_eq!(lit_count(&frames[0].1), 0);
        assert_eq!(lit_count(&frames[127].1), 0);
        let peak = dim(TURQUOISE, 3);
        assert!(frames[63].1.pixels().iter().all(|led| *led == peak));
        assert!(frames[64].1.pixels().iter().all(|led| *led == peak));

        // The falling ramp mirrors the rising one
        for k in 0..64 {
            assert_eq!(frames[64 + k].1, frames[63 - k].1);
        }

        // One color draw per repetition
        assert_eq!(rng.state(), lfsr_after(2).state());
    }

    #[test]
    fn test_flashing_single_eye_sends_full_frame() {
        let config = FlashingConfig {
            repetitions: 1,
            step_delay: Duration::from_millis(20),
        };
        let mut effect = FlashingEffect::new(config, EyeLayout::Single);
        let mut frame = FrameBuffer::new();
        let step = effect.render(&mut Lfsr::default(), &mut frame);
        assert_eq!(step.map(|s| s.scope), Some(OutputScope::Full));
    }

    #[test]
    fn test_crossfade_swaps_eyes() {
        let config = CrossfadeConfig {
            repetitions: 2,
            fade_in_delay: Duration::from_millis(16),
            hand_over_delay: Duration::from_millis(8),
        };
        let mut effect = CrossfadeEffect::new(config);
        let mut rng = Lfsr::default();
        let mut frame = FrameBuffer::new();
        let frames = run_to_end(&mut effect, &mut rng, &mut frame);

        assert_eq!(frames.len(), 2 * 128);
        assert!(frames[..64].iter().all(|(step, _)| step.delay == Duration::from_millis(16)));
        assert!(frames[64..128].iter().all(|(step, _)| step.delay == Duration::from_millis(8)));

        let full = dim(TURQUOISE, 3);
        // End of the first half cycle: first eye lit, nothing carried over yet
        let pixels = frames[63].1.pixels();
        assert!(pixels[..8].iter().all(|led| *led == full));
        assert!(pixels[8..].iter().all(|led| *led == Rgb::default()));

        // End of the second half cycle: color moved to the second eye
        let pixels = frames[127].1.pixels();
        assert!(pixels[..8].iter().all(|led| *led == Rgb::default()));
        assert!(pixels[8..].iter().all(|led| *led == full));

        // Next repetition starts by fading turquoise out of the second eye
        let pixels = frames[128].1.pixels();
        assert!(pixels[8..].iter().all(|led| *led == full));
        assert!(pixels[..8].iter().all(|led| *led == Rgb::default()));

        assert_eq!(rng.state(), lfsr_after(2).state());
    }

    #[test]
    fn test_scanner_sweep() {
        let config = ScannerConfig {
            repetitions: 1,
            pause_steps: 50,
            step_delay: Duration::from_millis(20),
        };
        let mut effect = ScannerEffect::new(config, EyeLayout::Dual);
        let mut rng = Lfsr::default();
        let mut frame = FrameBuffer::new();
        let frames = run_to_end(&mut effect, &mut rng, &mut frame);
        assert_eq!(frames.len(), 10 + 50);

        // After the sweep the last position is at full brightness and every
        // earlier position has decayed by its age
        let lit = dim(TURQUOISE, 4);
        let after_sweep = &frames[9].1;
        for (age, (&upper, &lower)) in SCANNER_UPPER.iter().zip(&SCANNER_LOWER).rev().enumerate()
        {
            let age = u8::try_from(age).unwrap();
            assert_eq!(after_sweep[upper], decayed(lit, age));
            assert_eq!(after_sweep[lower], decayed(lit, age));
        }
        assert_eq!(after_sweep[10], lit);

        // The pause lets the trail die out completely
        assert_eq!(lit_count(&frames[59].1), 0);
        assert_eq!(rng.state(), lfsr_after(1).state());
    }

    #[test]
    fn test_scanner_single_eye_skips_lower_path() {
        let config = ScannerConfig {
            repetitions: 1,
            pause_steps: 0,
            step_delay: Duration::from_millis(20),
        };
        let mut effect = ScannerEffect::new(config, EyeLayout::Single);
        let mut frame = FrameBuffer::new();
        let frames = run_to_end(&mut effect, &mut Lfsr::default(), &mut frame);
        assert_eq!(frames.len(), 10);

        for index in [5, 4, 3, 13, 12, 11] {
            assert_eq!(frame[index], Rgb::default());
        }
        assert_eq!(frame[10], dim(TURQUOISE, 4));
    }

    #[test]
    fn test_sparkles_walk_palette() {
        let config = SparklesConfig {
            repetitions: 3,
            step_delay: Duration::from_millis(80),
        };
        let mut effect = SparklesEffect::new(config);
        let mut rng = Lfsr::default();
        let mut frame = FrameBuffer::new();

        // First sparkle is a shade of red
        let step = effect.render(&mut rng, &mut frame);
        assert_eq!(step, Some(FrameStep::full(Duration::from_millis(80))));
        let lit: Vec<Rgb> = frame
            .pixels()
            .iter()
            .copied()
            .filter(|led| *led != Rgb::default())
            .collect();
        assert!(!lit.is_empty() && lit.len() <= 2);
        for led in lit {
            assert!((31..=39).contains(&led.r));
            assert!(led.g <= 7 && led.b <= 7);
        }

        let rest = run_to_end(&mut effect, &mut rng, &mut frame);
        assert_eq!(rest.len() + 1, PALETTE.len() * 3);

        // Two positions and three offsets per frame
        assert_eq!(rng.state(), lfsr_after(PALETTE.len() * 3 * 5).state());
    }

    #[test]
    fn test_sparkles_without_repetitions() {
        let config = SparklesConfig {
            repetitions: 0,
            step_delay: Duration::from_millis(80),
        };
        let mut effect = SparklesEffect::new(config);
        assert!(effect.render(&mut Lfsr::default(), &mut FrameBuffer::new()).is_none());
    }

    #[test]
    fn test_circles_mirror_second_eye() {
        let config = CirclesConfig {
            repetitions: 2,
            step_delay: Duration::from_millis(80),
        };
        let mut effect = CirclesEffect::new(config, EyeLayout::Dual);
        let mut rng = Lfsr::default();
        let mut frame = FrameBuffer::new();
        let frames = run_to_end(&mut effect, &mut rng, &mut frame);
        assert_eq!(frames.len(), 16);

        let lit = dim(TURQUOISE, 4);
        let first = &frames[0].1;
        assert_eq!(first[0], lit);
        assert_eq!(first[opposite_eye_index(0)], lit);
        assert_eq!(opposite_eye_index(0), 12);
        assert_eq!(opposite_eye_index(4), 8);
        assert_eq!(lit_count(first), 2);

        let second = &frames[1].1;
        assert_eq!(second[0], decayed(lit, 2));
        assert_eq!(second[1], lit);
        assert_eq!(second[13], lit);

        assert_eq!(rng.state(), lfsr_after(2).state());
    }

    #[test]
    fn test_circles_single_eye() {
        let config = CirclesConfig {
            repetitions: 1,
            step_delay: Duration::from_millis(80),
        };
        let mut effect = CirclesEffect::new(config, EyeLayout::Single);
        let mut frame = FrameBuffer::new();
        let frames = run_to_end(&mut effect, &mut Lfsr::default(), &mut frame);
        assert_eq!(frames.len(), 8);
        assert!(frames.iter().all(|(_, frame)| frame.pixels()[8..]
            .iter()
            .all(|led| *led == Rgb::default())));
    }

    #[test]
    fn test_rollercoaster_carries_color() {
        let config = RollercoasterConfig {
            repetitions: 2,
            step_delay: Duration::from_millis(50),
        };
        let mut effect = RollercoasterEffect::new(config);
        let mut rng = Lfsr::default();
        let mut frame = FrameBuffer::new();
        let frames = run_to_end(&mut effect, &mut rng, &mut frame);
        assert_eq!(frames.len(), 2 * 16);
        assert!(frames.iter().all(|(step, _)| step.delay == Duration::from_millis(50)));

        // First lap starts at the first pick, second lap at the second
        assert_eq!(frames[0].1[FIGURE_EIGHT[0]], dim(TURQUOISE, 4));
        assert_eq!(frames[16].1[FIGURE_EIGHT[0]], dim(PURPLE, 4));

        // One initial pick plus one per lap
        assert_eq!(rng.state(), lfsr_after(3).state());
    }

    #[test]
    fn test_rollercoaster_color_walk() {
        // Turquoise to purple: r +80, g -224, b -80 over 16 steps
        let config = RollercoasterConfig {
            repetitions: 1,
            step_delay: Duration::from_millis(50),
        };
        let mut effect = RollercoasterEffect::new(config);
        let mut frame = FrameBuffer::new();
        let frames = run_to_end(&mut effect, &mut Lfsr::default(), &mut frame);

        let second = Rgb {
            r: 0x40 + 5,
            g: 0xE0 - 14,
            b: 0xD0 - 5,
        };
        assert_eq!(frames[1].1[FIGURE_EIGHT[1]], dim(second, 4));
    }

    #[test]
    fn test_reset_replays() {
        let config = CirclesConfig {
            repetitions: 1,
            step_delay: Duration::from_millis(80),
        };
        let mut effect = CirclesEffect::new(config, EyeLayout::Dual);
        let mut rng = Lfsr::default();
        let mut frame = FrameBuffer::new();
        assert_eq!(run_to_end(&mut effect, &mut rng, &mut frame).len(), 8);
        assert!(effect.render(&mut rng, &mut frame).is_none());

        effect.reset();
        assert_eq!(run_to_end(&mut effect, &mut rng, &mut frame).len(), 8);
    }
}

mod tests {
    use eyes_sequencer::color::{
        PALETTE, Rgb, dim, offset_dim, palette_color, rgb_from_u32, scale_color,
    };

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    #[test]
    fn test_dim() {
        assert_eq!(dim(RED, 0), RED);
        assert_eq!(dim(RED, 3), Rgb { r: 0x1F, g: 0, b: 0 });
        assert_eq!(
            dim(Rgb { r: 0x40, g: 0xE0, b: 0xD0 }, 4),
            Rgb { r: 4, g: 14, b: 13 }
        );
        assert_eq!(dim(WHITE, 8), Rgb::default());
    }

    #[test]
    fn test_scale_color() {
        assert_eq!(scale_color(WHITE, 255), WHITE);
        assert_eq!(scale_color(WHITE, 0), Rgb::default());
        assert_eq!(
            scale_color(Rgb { r: 200, g: 100, b: 2 }, 128),
            Rgb { r: 100, g: 50, b: 1 }
        );
    }

    #[test]
    fn test_offset_dim_does_not_wrap() {
        let offset = Rgb { r: 63, g: 63, b: 0 };
        // 255 + 63 = 318, 318 >> 3 = 39
        assert_eq!(offset_dim(WHITE, offset, 3), Rgb { r: 39, g: 39, b: 31 });
        assert_eq!(offset_dim(RED, Rgb::default(), 3), dim(RED, 3));
        assert_eq!(offset_dim(WHITE, offset, 0), WHITE);
    }

    #[test]
    fn test_rgb_from_u32() {
        assert_eq!(rgb_from_u32(0xFF69B4), Rgb { r: 0xFF, g: 0x69, b: 0xB4 });
        assert_eq!(rgb_from_u32(0), Rgb::default());
    }

    #[test]
    fn test_palette() {
        assert_eq!(PALETTE.len(), 18);
        assert_eq!(PALETTE[0], RED);
        assert_eq!(PALETTE[10], Rgb { r: 0x40, g: 0xE0, b: 0xD0 });
        assert_eq!(PALETTE[15], PALETTE[16]);
    }

    #[test]
    fn test_palette_color_wraps() {
        assert_eq!(palette_color(0), PALETTE[0]);
        assert_eq!(palette_color(18), PALETTE[0]);
        assert_eq!(palette_color(0xBE), PALETTE[10]);
        assert_eq!(palette_color(255), PALETTE[255 % 18]);
    }
}

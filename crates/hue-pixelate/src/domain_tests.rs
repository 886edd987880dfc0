//! Domain-critical regression tests for hue-pixelate.
//!
//! These tests pin the visible behavior of the filter end to end. Each test
//! documents the regression it guards against.

#[cfg(test)]
mod domain_tests {
    use crate::api::Pixelator;
    use crate::color::{Hsv, Rgb};
    use crate::filter::{HueShift, Stylized, Stylizer, SATURATION_THRESHOLD};
    use crate::palette::{BrightnessBucket, HuePalette, BRIGHTNESS_LEVELS};

    /// Deterministic, saturated-and-neutral mix of colors that varies per pixel.
    fn test_frame(width: usize, height: usize) -> Vec<Rgb> {
        (0..width * height)
            .map(|i| {
                let x = (i % width) as f32 / width as f32;
                let y = (i / width) as f32 / height as f32;
                Rgb::new(x, (x * 7.0 + y * 3.0).fract(), y)
            })
            .collect()
    }

    fn color_grid() -> Vec<Rgb> {
        let steps = [0.0, 0.1, 0.25, 0.4, 0.5, 0.65, 0.8, 0.9, 1.0];
        let mut colors = Vec::new();
        for &r in &steps {
            for &g in &steps {
                for &b in &steps {
                    colors.push(Rgb::new(r, g, b));
                }
            }
        }
        colors
    }

    // ========================================================================
    // Block flatness
    // ========================================================================

    /// If this breaks, it means: pixels in the same block sample different
    /// source texels, so the image shows gradients inside blocks instead of
    /// flat cells.
    #[test]
    fn test_block_flatness() {
        let (width, height) = (37, 29);
        let pixel_size = 4;
        let image = Pixelator::new()
            .pixel_size(pixel_size as f32)
            .pixelate(&test_frame(width, height), width, height)
            .unwrap();

        for y in 0..height {
            for x in 0..width {
                let corner = image.pixel(x / pixel_size * pixel_size, y / pixel_size * pixel_size);
                assert_eq!(
                    image.pixel(x, y),
                    corner,
                    "pixel ({x}, {y}) differs from its block corner"
                );
            }
        }
    }

    /// If this breaks, it means: block anchors are no longer the top-left
    /// texel of each cell, shifting the whole image by part of a block.
    #[test]
    fn test_block_samples_top_left_texel() {
        let (width, height) = (16, 16);
        let source = test_frame(width, height);
        let stylizer = Stylizer::default();
        let image = Pixelator::new()
            .pixel_size(4.0)
            .pixelate(&source, width, height)
            .unwrap();

        for by in (0..height).step_by(4) {
            for bx in (0..width).step_by(4) {
                assert_eq!(
                    image.pixel(bx + 3, by + 3),
                    stylizer.stylize(source[by * width + bx])
                );
            }
        }
    }

    // ========================================================================
    // Palette membership and brightness quantization
    // ========================================================================

    /// If this breaks, it means: a saturated color produced a hue that is
    /// not a palette anchor shifted by a valid bucket distance.
    #[test]
    fn test_palette_membership() {
        let stylizer = Stylizer::default();
        let palette = HuePalette::default();
        let shift = HueShift::default();

        let mut quantized = 0;
        for color in color_grid() {
            let hsv = Hsv::from(color);
            if hsv.s < SATURATION_THRESHOLD {
                continue;
            }
            match stylizer.classify(hsv) {
                Stylized::Quantized {
                    palette_index,
                    bucket,
                    hsv: out,
                } => {
                    quantized += 1;
                    let expected = shift.apply(palette.hue(palette_index), bucket.hue_shift_distance());
                    assert_eq!(out.h, expected, "color {color:?}");

                    let reachable = palette.hues().iter().any(|&anchor| {
                        (-2..=2).any(|distance| shift.apply(anchor, distance) == out.h)
                    });
                    assert!(reachable, "hue {} is not a shifted anchor", out.h);
                }
                Stylized::PassThrough => panic!("saturated color {color:?} passed through"),
            }
        }
        assert!(quantized > 100, "grid should exercise many saturated colors");
    }

    /// If this breaks, it means: stylized values escape the five levels, e.g.
    /// the original value leaks through instead of the bucket level.
    #[test]
    fn test_brightness_quantization() {
        let stylizer = Stylizer::default();

        for color in color_grid() {
            if let Stylized::Quantized { hsv, bucket, .. } = stylizer.classify(Hsv::from(color)) {
                assert!(BRIGHTNESS_LEVELS.contains(&hsv.v), "value {}", hsv.v);
                assert_eq!(hsv.v, bucket.level());

                let written = Hsv::from(Rgb::from(hsv));
                assert!(
                    (written.v - hsv.v).abs() < 1e-5,
                    "written value {} drifted from level {}",
                    written.v,
                    hsv.v
                );
            }
        }
    }

    /// If this breaks, it means: saturation no longer follows
    /// `0.7 - 0.05 * |bucket - 2|`.
    #[test]
    fn test_saturation_per_bucket() {
        let expected = [0.6, 0.65, 0.7, 0.65, 0.6];
        for bucket in BrightnessBucket::all() {
            let saturation = 0.7 + bucket.saturation_shift();
            assert!(
                (saturation - expected[bucket.index()]).abs() < 1e-6,
                "bucket {}: {saturation}",
                bucket.index()
            );
        }
    }

    // ========================================================================
    // Pass-through
    // ========================================================================

    /// If this breaks, it means: desaturated colors (greys, skin, hair) are
    /// being hue-shifted or re-quantized. The low-saturation branch must
    /// leave the color exactly as sampled.
    #[test]
    fn test_pass_through_is_exact() {
        let stylizer = Stylizer::default();

        for color in color_grid() {
            let hsv = Hsv::from(color);
            if hsv.s >= SATURATION_THRESHOLD {
                continue;
            }
            let out = stylizer.stylize(color);
            assert_eq!(out, color);

            let out_hsv = Hsv::from(out);
            assert_eq!(out_hsv.h, hsv.h);
            assert_eq!(out_hsv.s, hsv.s);
            assert_eq!(out_hsv.v, hsv.v);
        }
    }

    // ========================================================================
    // Color conversion
    // ========================================================================

    /// If this breaks, it means: the RGB/HSV pair no longer inverts, so
    /// every stylized color comes out slightly off.
    #[test]
    fn test_rgb_hsv_round_trip() {
        for color in color_grid() {
            let back = Rgb::from(Hsv::from(color));
            assert!(
                back.max_channel_difference(color) < 1e-5,
                "{color:?} -> {back:?}"
            );
        }
    }

    // ========================================================================
    // Tie-breaking
    // ========================================================================

    /// If this breaks, it means: the `<=` scan was changed to `<`, which
    /// alters the output for colors that sit exactly between two anchors.
    #[test]
    fn test_exact_hue_tie_takes_later_anchor() {
        let stylizer = Stylizer::default();
        match stylizer.classify(Hsv::new(10.0 / 360.0, 1.0, 0.5)) {
            Stylized::Quantized { palette_index, .. } => assert_eq!(palette_index, 1),
            other => panic!("expected quantized, got {other:?}"),
        }
    }

    /// If this breaks, it means: palette matching started wrapping around
    /// the hue circle. Distances are plain differences, so 350 degrees
    /// snaps to violet rather than red.
    #[test]
    fn test_hue_matching_does_not_wrap() {
        let stylizer = Stylizer::default();
        match stylizer.classify(Hsv::new(350.0 / 360.0, 1.0, 0.5)) {
            Stylized::Quantized { palette_index, .. } => assert_eq!(palette_index, 6),
            other => panic!("expected quantized, got {other:?}"),
        }
    }

    // ========================================================================
    // Perceptual hue shift direction
    // ========================================================================

    /// If this breaks, it means: the painterly bias is inverted. Bright
    /// colors must move toward yellow and dark colors toward blue.
    #[test]
    fn test_bright_warms_dark_cools() {
        let stylizer = Stylizer::default();
        // 210 degrees (azure), bright: moves down toward 60.
        if let Stylized::Quantized { hsv, .. } = stylizer.classify(Hsv::new(210.0 / 360.0, 1.0, 1.0)) {
            assert!(hsv.hue_degrees() < 210.0 && hsv.hue_degrees() > 60.0);
        } else {
            panic!("expected quantized");
        }
        // 110 degrees (green), dark: moves up toward 240.
        if let Stylized::Quantized { hsv, .. } = stylizer.classify(Hsv::new(110.0 / 360.0, 1.0, 0.0)) {
            assert!(hsv.hue_degrees() > 110.0 && hsv.hue_degrees() < 240.0);
        } else {
            panic!("expected quantized");
        }
    }

    // ========================================================================
    // Scenarios
    // ========================================================================

    /// Pure red lands in the brightest bucket and is warmed toward orange.
    #[test]
    fn test_scenario_pure_red() {
        let image = Pixelator::new()
            .pixelate(&[Rgb::new(1.0, 0.0, 0.0)], 1, 1)
            .unwrap();
        let out = image.pixel(0, 0);

        let expected = Rgb::new(0.8, 0.405_333_3, 0.32);
        assert!(
            out.max_channel_difference(expected) < 1e-4,
            "got {out:?}, expected {expected:?}"
        );

        let hsv = Hsv::from(out);
        assert!((hsv.hue_degrees() - 32.0 / 3.0).abs() < 1e-2);
        assert!((hsv.s - 0.6).abs() < 1e-5);
        assert!((hsv.v - 0.8).abs() < 1e-6);
    }

    /// Mid grey has zero saturation and passes through untouched.
    #[test]
    fn test_scenario_gray_passes_through() {
        let gray = Rgb::new(0.5, 0.5, 0.5);
        let image = Pixelator::new().pixelate(&[gray; 4], 2, 2).unwrap();
        assert!(image.pixels().iter().all(|&p| p == gray));
    }

    /// A pixel size of one disables flattening: every pixel is stylized on
    /// its own.
    #[test]
    fn test_scenario_pixel_size_one() {
        let (width, height) = (23, 17);
        let source = test_frame(width, height);
        let stylizer = Stylizer::default();
        let image = Pixelator::new()
            .pixel_size(1.0)
            .pixelate(&source, width, height)
            .unwrap();

        for (i, (&out, &input)) in image.pixels().iter().zip(&source).enumerate() {
            assert_eq!(out, stylizer.stylize(input), "pixel {i}");
        }
    }

    // ========================================================================
    // Non-idempotence
    // ========================================================================

    /// The filter is not idempotent: stylized colors stay above the
    /// saturation threshold and are re-quantized on a second pass. This test
    /// pins that behavior so a change in either direction is noticed.
    #[test]
    fn test_second_pass_changes_output() {
        let pixelator = Pixelator::new().pixel_size(2.0);
        let source = vec![Rgb::new(1.0, 0.0, 0.0); 16];

        let once = pixelator.pixelate(&source, 4, 4).unwrap();
        let twice = pixelator.pixelate(once.pixels(), 4, 4).unwrap();

        assert_ne!(once, twice);
        let value = Hsv::from(twice.pixel(0, 0)).v;
        assert!((value - 0.7).abs() < 1e-5, "second pass value {value}");
    }

    // ========================================================================
    // Malformed input
    // ========================================================================

    /// If this breaks, it means: NaN channels started to panic instead of
    /// propagating through the arithmetic.
    #[test]
    fn test_nan_input_does_not_panic() {
        let source = vec![
            Rgb::new(f32::NAN, 0.2, 0.3),
            Rgb::new(0.2, f32::NAN, f32::NAN),
            Rgb::new(f32::NAN, f32::NAN, f32::NAN),
            Rgb::new(-0.5, 0.2, 0.9),
        ];
        let image = Pixelator::new().pixel_size(1.0).pixelate(&source, 2, 2).unwrap();
        assert_eq!(image.pixels().len(), 4);
    }

    /// A custom palette is honored end to end.
    #[test]
    fn test_custom_palette_end_to_end() {
        let palette = HuePalette::from_degrees(&[0.0, 120.0, 240.0]).unwrap();
        let pixelator = Pixelator::new()
            .palette(palette)
            .hue_shift_step(0.0)
            .pixel_size(1.0);

        // Green-ish cyan at 150 degrees snaps to the 120 degree anchor.
        let source = [Rgb::from(Hsv::new(150.0 / 360.0, 1.0, 0.5))];
        let image = pixelator.pixelate(&source, 1, 1).unwrap();
        let hsv = Hsv::from(image.pixel(0, 0));
        assert!((hsv.hue_degrees() - 120.0).abs() < 1e-3);
        assert!((hsv.v - 0.6).abs() < 1e-5);
    }
}

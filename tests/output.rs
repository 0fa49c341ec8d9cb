mod common;

mod tests {
    use super::common::RecordingDriver;
    use myrtio_ir_light::color::{BLACK, Rgb};
    use myrtio_ir_light::{LedSink, ScaledOutput};

    #[test]
    fn test_full_brightness_passes_through() {
        let mut output: ScaledOutput<_, 4> = ScaledOutput::new(RecordingDriver::default());
        let colors = [Rgb::new(200, 100, 50); 4];
        output.write(&colors);
        assert_eq!(output.driver().frames, [colors.to_vec()]);
    }

    #[test]
    fn test_brightness_scales_colors() {
        let mut output: ScaledOutput<_, 4> = ScaledOutput::new(RecordingDriver::default());
        output.set_brightness(128);
        output.write(&[Rgb::new(255, 128, 0); 2]);
        assert_eq!(output.driver().frames[0], [Rgb::new(128, 64, 0); 2]);

        output.set_brightness(0);
        output.write(&[Rgb::new(255, 255, 255); 2]);
        assert_eq!(output.driver().frames[1], [BLACK; 2]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "frame longer")]
    fn test_long_frame_rejected() {
        let mut output: ScaledOutput<_, 2> = ScaledOutput::new(RecordingDriver::default());
        output.write(&[Rgb::new(1, 1, 1); 5]);
    }
}

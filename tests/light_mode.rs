mod tests {
    use myrtio_ir_light::LightMode;

    #[test]
    fn test_light_mode_as_str() {
        assert_eq!(LightMode::Constant.as_str(), "constant");
        assert_eq!(LightMode::Gradient.as_str(), "gradient");
        assert_eq!(LightMode::Sparkle.as_str(), "sparkle");
    }

    #[test]
    fn test_light_mode_cycle() {
        let order = [
            LightMode::Constant,
            LightMode::Gradient,
            LightMode::Chase,
            LightMode::Sprite,
            LightMode::Sparkle,
        ];
        for (i, mode) in order.iter().enumerate() {
            assert_eq!(mode.next(), order[(i + 1) % order.len()]);
        }

        let mut mode = LightMode::Chase;
        for _ in 0..5 {
            mode = mode.next();
        }
        assert_eq!(mode, LightMode::Chase);
    }

    #[test]
    fn test_only_constant_is_static() {
        assert!(!LightMode::Constant.is_animated());
        assert!(LightMode::Gradient.is_animated());
        assert!(LightMode::Chase.is_animated());
        assert!(LightMode::Sprite.is_animated());
        assert!(LightMode::Sparkle.is_animated());
    }
}

mod tests {
    use myrtio_ir_light::channel::TrySendError;
    use myrtio_ir_light::{
        Command, InputChannel, InputEvent, LightMode, PaletteColor, RemoteDecoder, RemoteEvent,
    };

    const ALL_COMMANDS: [Command; 15] = [
        Command::PowerToggle,
        Command::BrightnessUp,
        Command::BrightnessDown,
        Command::SpeedUp,
        Command::SpeedDown,
        Command::DirectionLeft,
        Command::DirectionRight,
        Command::ModeAdvance,
        Command::Play,
        Command::Pause,
        Command::PickColor(PaletteColor::Red),
        Command::PickColor(PaletteColor::Green),
        Command::PickColor(PaletteColor::Yellow),
        Command::PickColor(PaletteColor::Blue),
        Command::PickColor(PaletteColor::White),
    ];

    #[test]
    fn test_key_map() {
        assert_eq!(Command::from_code(0x20DF_10EF), Some(Command::PowerToggle));
        assert_eq!(Command::from_code(0x20DF_AE51), Some(Command::ModeAdvance));
        assert_eq!(Command::from_code(0x20DF_FD02), Some(Command::SpeedUp));
        assert_eq!(
            Command::from_code(0x20DF_55AA),
            Some(Command::PickColor(PaletteColor::White))
        );
        assert_eq!(Command::from_code(0xDEAD_BEEF), None);

        for command in ALL_COMMANDS {
            assert_eq!(Command::from_code(command.code()), Some(command));
        }
    }

    #[test]
    fn test_only_continuous_controls_repeat() {
        let repeating: Vec<Command> = ALL_COMMANDS
            .into_iter()
            .filter(|c| c.accepts_repeat())
            .collect();
        assert_eq!(
            repeating,
            [
                Command::BrightnessUp,
                Command::BrightnessDown,
                Command::SpeedUp,
                Command::SpeedDown
            ]
        );

        assert_eq!(RemoteEvent::repeated(Command::ModeAdvance).accepted(), None);
        assert_eq!(RemoteEvent::repeated(Command::PowerToggle).accepted(), None);
        assert_eq!(
            RemoteEvent::repeated(Command::SpeedDown).accepted(),
            Some(Command::SpeedDown)
        );
        assert_eq!(
            RemoteEvent::pressed(Command::ModeAdvance).accepted(),
            Some(Command::ModeAdvance)
        );
    }

    #[test]
    fn test_mode_guards() {
        assert!(Command::DirectionLeft.allowed_in(LightMode::Chase));
        assert!(!Command::DirectionRight.allowed_in(LightMode::Gradient));
        assert!(Command::Pause.allowed_in(LightMode::Sparkle));
        assert!(!Command::Play.allowed_in(LightMode::Constant));
        assert!(Command::PickColor(PaletteColor::Red).allowed_in(LightMode::Constant));
        assert!(!Command::PickColor(PaletteColor::Red).allowed_in(LightMode::Sprite));
        assert!(Command::ModeAdvance.allowed_in(LightMode::Constant));
        assert!(Command::BrightnessUp.allowed_in(LightMode::Chase));
    }

    #[test]
    fn test_power_toggle_events() {
        assert!(InputEvent::ButtonReleased.is_power_toggle());
        assert!(InputEvent::Remote(RemoteEvent::pressed(Command::PowerToggle)).is_power_toggle());
        assert!(!InputEvent::Remote(RemoteEvent::repeated(Command::PowerToggle)).is_power_toggle());
        assert!(!InputEvent::Remote(RemoteEvent::pressed(Command::Play)).is_power_toggle());
    }

    #[test]
    fn test_decoder_repeats_continuous_key() {
        let mut decoder = RemoteDecoder::new();
        assert_eq!(decoder.decode_repeat(), None);

        assert_eq!(
            decoder.decode(Command::BrightnessUp.code()),
            Some(InputEvent::Remote(RemoteEvent::pressed(Command::BrightnessUp)))
        );
        for _ in 0..3 {
            assert_eq!(
                decoder.decode_repeat(),
                Some(InputEvent::Remote(RemoteEvent::repeated(Command::BrightnessUp)))
            );
        }
    }

    #[test]
    fn test_decoder_drops_other_repeats() {
        let mut decoder = RemoteDecoder::new();
        assert!(decoder.decode(Command::ModeAdvance.code()).is_some());
        assert_eq!(decoder.decode_repeat(), None);

        assert!(decoder.decode(Command::SpeedUp.code()).is_some());
        assert_eq!(decoder.decode(0x1234), None);
        assert_eq!(decoder.decode_repeat(), None);
    }

    #[test]
    fn test_channel_fifo() {
        static CHANNEL: InputChannel<2> = InputChannel::new();
        let sender = CHANNEL.sender();
        let receiver = CHANNEL.receiver();

        let first = InputEvent::Remote(RemoteEvent::pressed(Command::Play));
        assert_eq!(sender.try_send(first), Ok(()));
        assert_eq!(sender.try_send(InputEvent::ButtonReleased), Ok(()));
        assert_eq!(
            sender.try_send(InputEvent::ButtonReleased),
            Err(TrySendError(InputEvent::ButtonReleased))
        );

        assert_eq!(receiver.try_receive(), Some(first));
        assert_eq!(receiver.try_receive(), Some(InputEvent::ButtonReleased));
        assert_eq!(receiver.try_receive(), None);
    }

    #[test]
    fn test_channel_clear() {
        static CHANNEL: InputChannel<4> = InputChannel::new();
        let sender = CHANNEL.sender();
        for _ in 0..3 {
            let _ = sender.try_send(InputEvent::ButtonReleased);
        }

        assert_eq!(CHANNEL.len(), 3);
        assert_eq!(CHANNEL.receiver().clear(), 3);
        assert!(CHANNEL.is_empty());
    }
}

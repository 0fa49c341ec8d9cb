mod common;

mod tests {
    use super::common::{RecordingDelay, RecordingSink};
    use myrtio_ir_light::{
        Command, ControllerConfig, Duration, Engine, InputChannel, InputEvent, Instant, PowerMode,
        RemoteEvent, TickScheduler,
    };

    const LEDS: usize = 29;

    fn press(command: Command) -> InputEvent {
        InputEvent::Remote(RemoteEvent::pressed(command))
    }

    fn scheduler<const QUEUE: usize>(
        channel: &'static InputChannel<QUEUE>,
    ) -> TickScheduler<'static, RecordingSink, RecordingDelay, LEDS, QUEUE> {
        let engine = Engine::new(&ControllerConfig::default());
        TickScheduler::new(
            engine,
            RecordingSink::default(),
            RecordingDelay::default(),
            channel.receiver(),
        )
    }

    #[test]
    fn test_fixed_period() {
        static INPUTS: InputChannel<4> = InputChannel::new();
        let mut scheduler = scheduler(&INPUTS);

        let result = scheduler.tick(Instant::from_millis(0));
        assert_eq!(result.next_deadline, Instant::from_millis(50));
        assert_eq!(result.sleep_duration, Duration::from_millis(50));

        let result = scheduler.tick(Instant::from_millis(62));
        assert_eq!(result.next_deadline, Instant::from_millis(100));
        assert_eq!(result.sleep_duration, Duration::from_millis(38));

        let result = scheduler.tick(Instant::from_millis(180));
        assert_eq!(result.next_deadline, Instant::from_millis(150));
        assert_eq!(result.sleep_duration, Duration::from_millis(0));
    }

    #[test]
    fn test_drift_correction() {
        static INPUTS: InputChannel<4> = InputChannel::new();
        let mut scheduler = scheduler(&INPUTS);

        scheduler.tick(Instant::from_millis(0));
        let result = scheduler.tick(Instant::from_millis(1000));
        assert_eq!(result.next_deadline, Instant::from_millis(1050));
        assert_eq!(result.sleep_duration, Duration::from_millis(50));
    }

    #[test]
    fn test_one_event_per_tick() {
        static INPUTS: InputChannel<4> = InputChannel::new();
        let mut scheduler = scheduler(&INPUTS);
        let sender = INPUTS.sender();
        let _ = sender.try_send(InputEvent::ButtonReleased);
        let _ = sender.try_send(press(Command::BrightnessUp));

        scheduler.tick(Instant::from_millis(0));
        assert_eq!(scheduler.engine().device().power(), PowerMode::On);
        assert_eq!(scheduler.engine().device().brightness(), 20);
        assert_eq!(INPUTS.len(), 1);

        scheduler.tick(Instant::from_millis(50));
        assert_eq!(scheduler.engine().device().brightness(), 22);
        assert!(INPUTS.is_empty());
    }

    #[test]
    fn test_input_during_fade_is_lost() {
        static INPUTS: InputChannel<8> = InputChannel::new();
        let mut scheduler = scheduler(&INPUTS);
        let sender = INPUTS.sender();
        for _ in 0..3 {
            let _ = sender.try_send(InputEvent::ButtonReleased);
        }
        let _ = sender.try_send(InputEvent::ButtonReleased);
        let _ = sender.try_send(press(Command::BrightnessUp));

        scheduler.tick(Instant::from_millis(0));
        scheduler.tick(Instant::from_millis(50));
        let result = scheduler.tick(Instant::from_millis(100));

        assert!(result.outcome.blocked);
        assert_eq!(scheduler.engine().device().power(), PowerMode::Off);
        assert!(INPUTS.is_empty());

        scheduler.tick(Instant::from_millis(700));
        assert_eq!(scheduler.engine().device().power(), PowerMode::Off);
    }

    #[test]
    fn test_startup_drops_pending_input() {
        static INPUTS: InputChannel<4> = InputChannel::new();
        let mut scheduler = scheduler(&INPUTS);
        let _ = INPUTS.sender().try_send(InputEvent::ButtonReleased);

        scheduler.startup();
        assert!(INPUTS.is_empty());
        assert!(scheduler.sink().commits.last().is_some_and(|c| c.is_black()));

        scheduler.tick(Instant::from_millis(0));
        assert_eq!(scheduler.engine().device().power(), PowerMode::Off);
    }

    #[test]
    fn test_commits_reach_sink() {
        static INPUTS: InputChannel<4> = InputChannel::new();
        let mut scheduler = scheduler(&INPUTS);
        let _ = INPUTS.sender().try_send(InputEvent::ButtonReleased);

        let result = scheduler.tick(Instant::from_millis(0));
        assert!(result.outcome.committed);
        assert_eq!(scheduler.sink().commits.len(), 1);
        assert_eq!(scheduler.sink().brightness, 20);

        scheduler.sink_mut().commits.clear();
        scheduler.tick(Instant::from_millis(50));
        assert!(scheduler.sink().commits.is_empty());
    }
}

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{BLACK, Rgb, fill};
use crate::config::ControllerConfig;
use crate::device::{self, DeviceState, PowerMode};
use crate::effect::EffectState;
use crate::input::InputEvent;
use crate::interpreter::interpret;
use crate::{BlockingDelay, LedSink};

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// The frame was committed to the sink
    pub committed: bool,
    /// A blocking transition ran; input arriving meanwhile was not polled
    pub blocked: bool,
    /// New status LED color, set when the power mode changed
    pub status: Option<Rgb>,
}

/// Light Engine - owns all controller state
///
/// LEDS is the number of LEDs in the strip.
pub struct Engine<const LEDS: usize> {
    config: ControllerConfig,

    // Internal state
    device: DeviceState,
    effects: EffectState,
    frame_buffer: [Rgb; LEDS],
}

impl<const LEDS: usize> Engine<LEDS> {
    /// Create an engine in the off state
    ///
    /// # Panics
    ///
    /// Panics if the strip is empty or longer than a sprite can address.
    pub fn new(config: &ControllerConfig) -> Self {
        assert!(
            LEDS > 0 && LEDS <= i8::MAX as usize,
            "strip length must be within 1..=127"
        );
        Self {
            config: *config,
            device: DeviceState::new(&config.brightness),
            effects: EffectState::new(config),
            frame_buffer: [BLACK; LEDS],
        }
    }

    pub const fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub const fn device(&self) -> &DeviceState {
        &self.device
    }

    pub const fn effects(&self) -> &EffectState {
        &self.effects
    }

    /// Color of the status LED for the current power mode
    ///
    /// Boards show this at boot; afterwards [`TickOutcome::status`] reports
    /// every change.
    pub const fn status_color(&self) -> Rgb {
        self.device.power.status_color()
    }

    /// Current strip content
    pub const fn leds(&self) -> &[Rgb; LEDS] {
        &self.frame_buffer
    }

    /// Process one tick
    ///
    /// Applies `event`, runs the selected effect while the device is lit and
    /// commits the frame if anything changed. This is the main loop step;
    /// call it once per tick period.
    pub fn tick<S: LedSink, D: BlockingDelay>(
        &mut self,
        event: Option<InputEvent>,
        sink: &mut S,
        delay: &mut D,
    ) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        if let Some(event) = event {
            if event.is_power_toggle() {
                outcome.blocked = self.device.power == PowerMode::Eco;
                self.toggle_power(sink, delay);
                outcome.status = Some(self.status_color());
            } else if self.device.power.is_lit() {
                self.process_event(event);
            }
        }

        if self.device.power.is_lit() {
            let refresh = self.device.dirty;
            if self.effects.tick(&mut self.frame_buffer, refresh) {
                self.device.mark_dirty();
            }
        }

        if self.device.dirty {
            self.commit(sink);
            outcome.committed = true;
        }
        outcome
    }

    /// Play the boot animation
    ///
    /// Blocks for the whole choreography followed by a fade-out, then leaves
    /// the strip black at standby brightness.
    pub fn startup<S: LedSink, D: BlockingDelay>(&mut self, sink: &mut S, delay: &mut D) {
        let timings = self.config.timings;
        let brightness = self.device.brightness;
        let fade_factor = self.effects.sprite.fade_factor();
        let pool = self.effects.sprite.pool_mut();
        #[cfg(feature = "esp32-log")]
        println!("[engine] startup animation");

        pool.schedule_startup(LEDS);
        sink.set_brightness(brightness);
        for step in 0..timings.startup_steps {
            pool.advance_all(&mut self.frame_buffer, step, fade_factor);
            sink.write(&self.frame_buffer);
            delay.delay(timings.startup_step);
        }

        device::fade_out(brightness, &self.frame_buffer, timings.fade_step, sink, delay);

        pool.clear_all();
        fill(&mut self.frame_buffer, BLACK);
        sink.set_brightness(brightness);
        sink.write(&self.frame_buffer);
    }

    /// Apply a non-power event to the state
    fn process_event(&mut self, event: InputEvent) {
        let InputEvent::Remote(remote) = event else {
            return;
        };
        // Rejected repeats never reach the interpreter
        let Some(command) = remote.accepted() else {
            return;
        };
        interpret(command, &mut self.device, &mut self.effects, &self.config);
    }

    fn toggle_power<S: LedSink, D: BlockingDelay>(&mut self, sink: &mut S, delay: &mut D) {
        device::toggle_power(
            &mut self.device,
            &mut self.effects,
            &mut self.frame_buffer,
            &self.config.brightness,
            self.config.timings.fade_step,
            sink,
            delay,
        );
    }

    fn commit<S: LedSink>(&mut self, sink: &mut S) {
        sink.set_brightness(self.device.brightness);
        sink.write(&self.frame_buffer);
        self.device.dirty = false;
    }
}
